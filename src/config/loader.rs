//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files and wiring the calculators from it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::calculation::{
    HourReporter, MultiplierStrategy, PayCalculator, RegularHoursPolicy, RoleRegistry,
    StandardWeekPolicy,
};
use crate::error::{EngineError, EngineResult};
use crate::models::RoleTag;

use super::types::{CompensationConfig, EngineSettings, RolesConfig};

/// Loads configuration and hands out the components built from it.
///
/// # Directory Structure
///
/// ```text
/// config/compensation/
/// ├── engine.yaml   # Base pay, regular hours cap, currency, log level
/// └── roles.yaml    # Roles added to (or overriding) the built-in roles
/// ```
///
/// # Example
///
/// ```no_run
/// use compensation_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/compensation")?;
/// println!("Base pay: {}", loader.settings().base_pay);
/// println!("Roles: {:?}", loader.registry().roles());
/// # Ok::<(), compensation_engine::error::EngineError>(())
/// ```
#[derive(Clone)]
pub struct ConfigLoader {
    config: CompensationConfig,
    registry: RoleRegistry,
    hours_policy: Arc<dyn RegularHoursPolicy>,
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish()
    }
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The base pay or the regular hours cap is negative
    /// - A role multiplier is not positive
    /// - Two role keys in `roles.yaml` normalize to the same tag
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine_path = path.join("engine.yaml");
        let settings = Self::load_yaml::<EngineSettings>(&engine_path)?;

        let roles_path = path.join("roles.yaml");
        let roles_config = Self::load_yaml::<RolesConfig>(&roles_path)?;

        let hours_policy = Self::validate_settings(&settings).map_err(|e| {
            EngineError::ConfigParseError {
                path: engine_path.display().to_string(),
                message: e.to_string(),
            }
        })?;

        let config = CompensationConfig::new(settings, roles_config.roles);
        let registry = Self::build_registry(&config).map_err(|e| EngineError::ConfigParseError {
            path: roles_path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            config,
            registry,
            hours_policy: Arc::new(hours_policy),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks numeric settings and builds the regular-hours policy from them.
    fn validate_settings(settings: &EngineSettings) -> EngineResult<StandardWeekPolicy> {
        if settings.base_pay < Decimal::ZERO {
            return Err(EngineError::validation(
                "base_pay",
                format!("must not be negative (got {})", settings.base_pay),
            ));
        }
        StandardWeekPolicy::new(settings.regular_hours_cap)
    }

    /// Starts from the built-in roles and layers configured roles on top.
    fn build_registry(config: &CompensationConfig) -> EngineResult<RoleRegistry> {
        let mut registry = RoleRegistry::with_builtin_roles();
        let mut seen: HashMap<RoleTag, &str> = HashMap::new();
        for (key, definition) in config.roles() {
            let role = RoleTag::new(key)?;
            if let Some(previous) = seen.insert(role.clone(), key.as_str()) {
                return Err(EngineError::validation(
                    "role",
                    format!(
                        "keys '{}' and '{}' both resolve to role '{}'",
                        previous, key, role
                    ),
                ));
            }
            registry.register(MultiplierStrategy::new(role, definition.multiplier)?);
        }
        Ok(registry)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &CompensationConfig {
        &self.config
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        self.config.settings()
    }

    /// Returns the role registry built from configuration.
    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    /// Returns the shared regular-hours policy.
    pub fn hours_policy(&self) -> Arc<dyn RegularHoursPolicy> {
        Arc::clone(&self.hours_policy)
    }

    /// Builds a pay calculator using the configured base pay and hours policy.
    pub fn pay_calculator(&self) -> PayCalculator {
        PayCalculator::new(self.settings().base_pay, self.hours_policy())
    }

    /// Builds an hour reporter sharing the pay calculator's hours policy.
    pub fn hour_reporter(&self) -> HourReporter {
        HourReporter::new(self.hours_policy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/compensation"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tag(s: &str) -> RoleTag {
        RoleTag::new(s).unwrap()
    }

    fn write_config(engine: &str, roles: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("compensation-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("engine.yaml"), engine).unwrap();
        fs::write(dir.join("roles.yaml"), roles).unwrap();
        dir
    }

    const VALID_ENGINE: &str = "name: test\ncurrency: USD\nbase_pay: \"100\"\nregular_hours_cap: \"40\"\n";

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.settings().currency, "USD");
        assert_eq!(loader.settings().base_pay, dec("100"));
        assert_eq!(loader.settings().regular_hours_cap, dec("40"));
    }

    #[test]
    fn test_registry_has_builtin_and_configured_roles() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let registry = loader.registry();

        for role in ["intern", "staff", "manager", "leader", "director", "senior_staff"] {
            assert!(registry.contains(&tag(role)), "missing role {}", role);
        }
        let director = registry.resolve(&tag("director")).unwrap();
        assert_eq!(director.base_multiplier(), dec("3"));
    }

    #[test]
    fn test_pay_calculator_uses_configured_base() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.pay_calculator().base_pay(), dec("100"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("engine.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = write_config("name: [unclosed", "roles: {}\n");
        let result = ConfigLoader::load(&dir);

        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_zero_multiplier_rejected() {
        let dir = write_config(
            VALID_ENGINE,
            "roles:\n  volunteer:\n    name: Volunteer\n    multiplier: \"0\"\n",
        );
        let result = ConfigLoader::load(&dir);

        match result {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("roles.yaml"));
                assert!(message.contains("volunteer"), "got: {}", message);
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_negative_cap_rejected() {
        let dir = write_config(
            "name: test\ncurrency: USD\nbase_pay: \"100\"\nregular_hours_cap: \"-1\"\n",
            "roles: {}\n",
        );
        let result = ConfigLoader::load(&dir);

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("engine.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_negative_base_pay_rejected() {
        let dir = write_config(
            "name: test\ncurrency: USD\nbase_pay: \"-100\"\nregular_hours_cap: \"40\"\n",
            "roles: {}\n",
        );
        let result = ConfigLoader::load(&dir);

        match result {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("engine.yaml"));
                assert!(message.contains("base_pay"), "got: {}", message);
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_zero_base_pay_accepted() {
        let dir = write_config(
            "name: test\ncurrency: USD\nbase_pay: \"0\"\nregular_hours_cap: \"40\"\n",
            "roles: {}\n",
        );
        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.pay_calculator().base_pay(), Decimal::ZERO);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_roles_differing_only_in_case_rejected() {
        let dir = write_config(
            VALID_ENGINE,
            "roles:\n  Manager:\n    name: Manager\n    multiplier: \"2.5\"\n  manager:\n    name: Manager\n    multiplier: \"3\"\n",
        );
        let result = ConfigLoader::load(&dir);

        match result {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("roles.yaml"));
                assert!(message.contains("'manager'"), "got: {}", message);
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_configured_role_overrides_builtin() {
        let dir = write_config(
            VALID_ENGINE,
            "roles:\n  Manager:\n    name: Manager\n    multiplier: \"2.5\"\n",
        );
        let loader = ConfigLoader::load(&dir).unwrap();

        let manager = loader.registry().resolve(&tag("manager")).unwrap();
        assert_eq!(manager.base_multiplier(), dec("2.5"));
        assert_eq!(loader.registry().len(), 4);
        fs::remove_dir_all(dir).ok();
    }
}
