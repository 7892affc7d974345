use std::path::Path;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_physics_dt() -> f64 {
    0.001
}
const fn default_gravity() -> [f32; 3] {
    [0.0, 0.0, -9.81]
}
const fn default_substeps() -> u32 {
    1
}

// ---------------------------------------------------------------------------
// PhysicsConfig
// ---------------------------------------------------------------------------

/// Physics backend configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
pub struct PhysicsConfig {
    /// Physics timestep in seconds (default: 0.001 = 1000 Hz).
    #[serde(default = "default_physics_dt")]
    pub physics_dt: f64,

    /// Gravity vector [x, y, z] in m/s^2.
    #[serde(default = "default_gravity")]
    pub gravity: [f32; 3],

    /// Number of pipeline substeps per frame (default: 1).
    #[serde(default = "default_substeps")]
    pub substeps: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            physics_dt: default_physics_dt(),
            gravity: default_gravity(),
            substeps: default_substeps(),
        }
    }
}

impl PhysicsConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.physics_dt <= 0.0 {
            return Err(ConfigError::InvalidPhysicsDt(self.physics_dt));
        }
        if self.substeps == 0 {
            return Err(ConfigError::InvalidSubsteps);
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Physics rate in Hz.
    #[must_use]
    pub fn physics_hz(&self) -> f64 {
        1.0 / self.physics_dt
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
