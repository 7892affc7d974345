// tethers-core: Types, config, errors, and schedule sets for the tethers
// constraint system.

pub mod config;
pub mod error;
pub mod schedule;
pub mod types;

pub use schedule::{TethersCorePlugin, TethersSet};
