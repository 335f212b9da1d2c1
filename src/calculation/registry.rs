//! Role registry.
//!
//! Maps role tags to compensation strategies. The registry is configuration,
//! not logic: calculators receive a resolved strategy and never consult a
//! list of roles themselves.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::RoleTag;

use super::compensation::{
    CompensationStrategy, InternStrategy, LeaderStrategy, ManagerStrategy, StaffStrategy,
};

/// A registered role and its multiplier, as listed by [`RoleRegistry::entries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleEntry {
    /// The role tag.
    pub role: RoleTag,
    /// The strategy's base multiplier.
    pub multiplier: Decimal,
}

/// Lookup table from role tag to compensation strategy.
///
/// Strategies are shared behind `Arc`, so a resolved strategy can be held
/// across threads and requests.
#[derive(Clone, Default)]
pub struct RoleRegistry {
    strategies: HashMap<RoleTag, Arc<dyn CompensationStrategy>>,
}

impl std::fmt::Debug for RoleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleRegistry")
            .field("roles", &self.roles())
            .finish()
    }
}

impl RoleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the intern, staff, manager and leader roles.
    ///
    /// # Examples
    ///
    /// ```
    /// use compensation_engine::calculation::RoleRegistry;
    /// use compensation_engine::models::RoleTag;
    ///
    /// let registry = RoleRegistry::with_builtin_roles();
    /// assert!(registry.resolve(&RoleTag::new("manager").unwrap()).is_ok());
    /// assert!(registry.resolve(&RoleTag::new("contractor").unwrap()).is_err());
    /// ```
    pub fn with_builtin_roles() -> Self {
        let mut registry = Self::new();
        registry.register(InternStrategy);
        registry.register(StaffStrategy);
        registry.register(ManagerStrategy);
        registry.register(LeaderStrategy);
        registry
    }

    /// Registers a strategy under its own role tag, replacing any previous
    /// strategy for that tag.
    pub fn register<S>(&mut self, strategy: S)
    where
        S: CompensationStrategy + 'static,
    {
        self.register_shared(Arc::new(strategy));
    }

    /// Registers an already shared strategy.
    pub fn register_shared(&mut self, strategy: Arc<dyn CompensationStrategy>) {
        self.strategies.insert(strategy.role(), strategy);
    }

    /// Resolves the strategy for `role`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownRole`] if nothing is registered for
    /// `role`. There is no fallback strategy.
    pub fn resolve(&self, role: &RoleTag) -> EngineResult<Arc<dyn CompensationStrategy>> {
        self.strategies
            .get(role)
            .cloned()
            .ok_or_else(|| EngineError::UnknownRole {
                role: role.to_string(),
            })
    }

    /// Returns true if a strategy is registered for `role`.
    pub fn contains(&self, role: &RoleTag) -> bool {
        self.strategies.contains_key(role)
    }

    /// Returns all registered role tags, sorted.
    pub fn roles(&self) -> Vec<RoleTag> {
        let mut roles: Vec<RoleTag> = self.strategies.keys().cloned().collect();
        roles.sort();
        roles
    }

    /// Returns every registered role with its multiplier, sorted by tag.
    pub fn entries(&self) -> Vec<RoleEntry> {
        let mut entries: Vec<RoleEntry> = self
            .strategies
            .iter()
            .map(|(role, strategy)| RoleEntry {
                role: role.clone(),
                multiplier: strategy.base_multiplier(),
            })
            .collect();
        entries.sort_by(|a, b| a.role.cmp(&b.role));
        entries
    }

    /// Number of registered roles.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Returns true if no roles are registered.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
