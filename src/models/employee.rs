//! Employee record and role tag types.
//!
//! This module defines the immutable [`EmployeeRecord`] value processed by
//! every calculation in the engine, and the open [`RoleTag`] set used to look
//! up compensation strategies.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::RoleRegistry;
use crate::error::{EngineError, EngineResult};

/// A role identifier such as `intern`, `staff` or `manager`.
///
/// Tags are trimmed and lowercased on construction so that `"Manager"` and
/// `"manager "` resolve to the same strategy. The set of tags is open: any
/// non-empty string is a valid tag, whether or not a strategy exists for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoleTag(String);

impl RoleTag {
    /// Creates a normalized role tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use compensation_engine::models::RoleTag;
    ///
    /// let tag = RoleTag::new(" Manager ").unwrap();
    /// assert_eq!(tag.as_str(), "manager");
    /// assert!(RoleTag::new("   ").is_err());
    /// ```
    pub fn new(tag: impl AsRef<str>) -> EngineResult<Self> {
        let normalized = tag.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(EngineError::validation("role", "must not be empty"));
        }
        Ok(Self(normalized))
    }

    /// Tag for a role defined in code; `tag` must already be normalized.
    pub(crate) fn builtin(tag: &'static str) -> Self {
        Self(tag.to_string())
    }

    /// Returns the normalized tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RoleTag {
    type Error = EngineError;

    fn try_from(value: String) -> EngineResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RoleTag {
    type Error = EngineError;

    fn try_from(value: &str) -> EngineResult<Self> {
        Self::new(value)
    }
}

impl From<RoleTag> for String {
    fn from(tag: RoleTag) -> Self {
        tag.0
    }
}

/// Represents an employee whose pay or hours are being processed.
///
/// Records are immutable once built. The "update" methods return a new record
/// and leave the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EmployeeRecordData")]
pub struct EmployeeRecord {
    id: String,
    name: String,
    department: String,
    role: RoleTag,
    hours_worked: Decimal,
}

/// Unvalidated wire shape of an [`EmployeeRecord`].
#[derive(Debug, Deserialize)]
struct EmployeeRecordData {
    id: String,
    name: String,
    #[serde(default)]
    department: String,
    role: RoleTag,
    hours_worked: Decimal,
}

impl TryFrom<EmployeeRecordData> for EmployeeRecord {
    type Error = EngineError;

    fn try_from(data: EmployeeRecordData) -> EngineResult<Self> {
        EmployeeRecord::new(
            data.id,
            data.name,
            data.department,
            data.role,
            data.hours_worked,
        )
    }
}

impl EmployeeRecord {
    /// Creates a new employee record.
    ///
    /// The role is not checked against any registry; use
    /// [`EmployeeRecord::new_registered`] when it must resolve to a strategy.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] if `id` is blank or
    /// `hours_worked` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use compensation_engine::models::{EmployeeRecord, RoleTag};
    /// use rust_decimal::Decimal;
    ///
    /// let staff = RoleTag::new("staff").unwrap();
    /// let record = EmployeeRecord::new("emp_001", "Aiko", "Sales", staff.clone(), Decimal::from(38));
    /// assert!(record.is_ok());
    ///
    /// let negative = EmployeeRecord::new("emp_002", "Ren", "Sales", staff, Decimal::from(-5));
    /// assert!(negative.is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        role: RoleTag,
        hours_worked: Decimal,
    ) -> EngineResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(EngineError::validation("id", "must not be empty"));
        }
        if hours_worked < Decimal::ZERO {
            return Err(EngineError::validation(
                "hours_worked",
                format!("must not be negative (got {})", hours_worked),
            ));
        }

        Ok(Self {
            id,
            name: name.into(),
            department: department.into(),
            role,
            hours_worked,
        })
    }

    /// Creates a new employee record whose role must be known to `registry`.
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as [`EmployeeRecord::new`], or
    /// [`EngineError::UnknownRole`] if no strategy is registered for `role`.
    pub fn new_registered(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        role: RoleTag,
        hours_worked: Decimal,
        registry: &RoleRegistry,
    ) -> EngineResult<Self> {
        registry.resolve(&role)?;
        Self::new(id, name, department, role, hours_worked)
    }

    /// Unique identifier for the employee.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The employee's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The department the employee belongs to.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// The role used to select a compensation strategy.
    pub fn role(&self) -> &RoleTag {
        &self.role
    }

    /// Total hours worked in the period, regular and overtime.
    pub fn hours_worked(&self) -> Decimal {
        self.hours_worked
    }

    /// Returns a copy of this record with different worked hours.
    pub fn with_hours(&self, hours_worked: Decimal) -> EngineResult<Self> {
        Self::new(
            self.id.clone(),
            self.name.clone(),
            self.department.clone(),
            self.role.clone(),
            hours_worked,
        )
    }

    /// Returns a copy of this record with a different role.
    pub fn with_role(&self, role: RoleTag) -> Self {
        Self {
            role,
            ..self.clone()
        }
    }
}
