//! Segregated persistence gateway and the field shapes it saves.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeRecord;

/// A subset of employee fields that can be saved on its own.
///
/// Each shape serializes to a flat JSON object whose keys are the stored
/// field names.
pub trait FieldSet: Serialize + Send + Sync + 'static {
    /// Short name of the shape, used in logs.
    const SHAPE: &'static str;

    /// Checks the fields before they reach a backing store.
    fn validate(&self) -> EngineResult<()> {
        Ok(())
    }
}

/// Saves one shape of employee fields.
///
/// Implementations make a single attempt per call and surface backing-store
/// failures as [`EngineError::Persistence`]. Retries belong to whoever owns
/// the store.
///
/// # Implementations
///
/// - [`InMemoryEmployeeStore`](super::InMemoryEmployeeStore) for every [`FieldSet`]
#[async_trait]
pub trait EmployeePersistenceGateway<F: FieldSet>: Send + Sync {
    /// Saves `fields` for the employee with the given `id`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] if the fields are malformed.
    /// Returns [`EngineError::Persistence`] on backing-store failure.
    async fn save(&self, id: &str, fields: F) -> EngineResult<()>;
}

/// The narrowed `{id, title}` shape used by title updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleFields {
    /// The job title.
    pub title: String,
}

impl FieldSet for TitleFields {
    const SHAPE: &'static str = "title";

    fn validate(&self) -> EngineResult<()> {
        if self.title.trim().is_empty() {
            return Err(EngineError::validation("title", "must not be empty"));
        }
        Ok(())
    }
}

/// Name and department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFields {
    /// The employee's display name.
    pub name: String,
    /// The department the employee belongs to.
    pub department: String,
}

impl FieldSet for ProfileFields {
    const SHAPE: &'static str = "profile";

    fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::validation("name", "must not be empty"));
        }
        Ok(())
    }
}

/// Worked hours for the current period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursFields {
    /// Total hours worked.
    pub hours_worked: Decimal,
}

impl FieldSet for HoursFields {
    const SHAPE: &'static str = "hours";

    fn validate(&self) -> EngineResult<()> {
        if self.hours_worked < Decimal::ZERO {
            return Err(EngineError::validation(
                "hours_worked",
                format!("must not be negative (got {})", self.hours_worked),
            ));
        }
        Ok(())
    }
}

// Already validated on construction.
impl FieldSet for EmployeeRecord {
    const SHAPE: &'static str = "employee";
}
