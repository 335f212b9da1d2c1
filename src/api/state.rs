//! Application state for the Compensation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::{HourReporter, PayCalculator, RoleRegistry};
use crate::config::ConfigLoader;
use crate::persistence::{InMemoryEmployeeStore, TitleUpdater};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded configuration, the calculators built from it, and the employee
/// store.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    pay_calculator: PayCalculator,
    hour_reporter: HourReporter,
    store: InMemoryEmployeeStore,
    title_updater: TitleUpdater,
}

impl AppState {
    /// Creates application state backed by a fresh in-memory store.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_store(config, InMemoryEmployeeStore::new())
    }

    /// Creates application state over an existing store.
    pub fn with_store(config: ConfigLoader, store: InMemoryEmployeeStore) -> Self {
        let pay_calculator = config.pay_calculator();
        let hour_reporter = config.hour_reporter();
        let title_updater = TitleUpdater::new(Arc::new(store.clone()));
        Self {
            config: Arc::new(config),
            pay_calculator,
            hour_reporter,
            store,
            title_updater,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the role registry.
    pub fn registry(&self) -> &RoleRegistry {
        self.config.registry()
    }

    /// Returns the pay calculator.
    pub fn pay_calculator(&self) -> &PayCalculator {
        &self.pay_calculator
    }

    /// Returns the hour reporter.
    pub fn hour_reporter(&self) -> &HourReporter {
        &self.hour_reporter
    }

    /// Returns the employee store.
    pub fn store(&self) -> &InMemoryEmployeeStore {
        &self.store
    }

    /// Returns the title updater.
    pub fn title_updater(&self) -> &TitleUpdater {
        &self.title_updater
    }
}
