//! Configuration types for the compensation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

fn default_log_level() -> String {
    "info".to_string()
}

/// Engine-wide settings from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Human-readable name of this deployment.
    pub name: String,
    /// ISO currency code that pay amounts are denominated in.
    pub currency: String,
    /// The base amount passed to every compensation strategy.
    pub base_pay: Decimal,
    /// Hours per period counted as regular time.
    pub regular_hours_cap: Decimal,
    /// Default log filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// A role declared in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleDefinition {
    /// The human-readable name of the role.
    pub name: String,
    /// Multiplier applied to the base amount. Must be greater than zero.
    pub multiplier: Decimal,
    /// A description of the role.
    #[serde(default)]
    pub description: String,
}

/// Roles configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RolesConfig {
    /// Map of role tag to role definition.
    #[serde(default)]
    pub roles: HashMap<String, RoleDefinition>,
}

/// The complete configuration loaded from an engine configuration directory.
#[derive(Debug, Clone)]
pub struct CompensationConfig {
    settings: EngineSettings,
    roles: HashMap<String, RoleDefinition>,
}

impl CompensationConfig {
    /// Creates a new CompensationConfig from its component parts.
    pub fn new(settings: EngineSettings, roles: HashMap<String, RoleDefinition>) -> Self {
        Self { settings, roles }
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the configured roles keyed by tag.
    pub fn roles(&self) -> &HashMap<String, RoleDefinition> {
        &self.roles
    }
}
