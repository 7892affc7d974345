use thiserror::Error;

/// Top-level error type for tethers-core.
#[derive(Debug, Error)]
pub enum TethersError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid physics_dt: {0} (must be > 0)")]
    InvalidPhysicsDt(f64),

    #[error("Invalid substeps: 0 (must be >= 1)")]
    InvalidSubsteps,
}
