//! Configuration loading and management for the Compensation Engine.
//!
//! This module loads engine settings and role definitions from YAML files
//! and builds the role registry, pay calculator and hour reporter from them.
//!
//! # Example
//!
//! ```no_run
//! use compensation_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/compensation").unwrap();
//! println!("Loaded engine: {}", config.settings().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CompensationConfig, EngineSettings, RoleDefinition, RolesConfig};
