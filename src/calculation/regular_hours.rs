//! Regular hours calculation functionality.
//!
//! Regular hours are the portion of worked hours paid at the standard rate.
//! Both pay calculation and hour reporting read them through a
//! [`RegularHoursPolicy`], so a change to the policy is made once and seen by
//! every consumer.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeRecord;

/// The default number of hours per period counted as regular.
pub const DEFAULT_REGULAR_HOURS_CAP: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Maps an employee record to its regular (non-overtime) hours.
///
/// Implementations must be deterministic and total over non-negative
/// `hours_worked`, and must never return more than `hours_worked`.
pub trait RegularHoursPolicy: Send + Sync {
    /// Returns the regular hours for `employee`.
    fn regular_hours(&self, employee: &EmployeeRecord) -> Decimal;

    /// Returns the hours worked beyond the regular hours.
    fn overtime_hours(&self, employee: &EmployeeRecord) -> Decimal {
        employee.hours_worked() - self.regular_hours(employee)
    }
}

/// Caps regular hours at a fixed weekly threshold: `min(hours_worked, cap)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardWeekPolicy {
    cap: Decimal,
}

impl StandardWeekPolicy {
    /// Creates a policy with a custom cap.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Validation`] if `cap` is negative.
    pub fn new(cap: Decimal) -> EngineResult<Self> {
        if cap < Decimal::ZERO {
            return Err(EngineError::validation(
                "regular_hours_cap",
                format!("must not be negative (got {})", cap),
            ));
        }
        Ok(Self { cap })
    }

    /// The configured cap.
    pub fn cap(&self) -> Decimal {
        self.cap
    }
}

impl Default for StandardWeekPolicy {
    fn default() -> Self {
        Self {
            cap: DEFAULT_REGULAR_HOURS_CAP,
        }
    }
}

impl RegularHoursPolicy for StandardWeekPolicy {
    fn regular_hours(&self, employee: &EmployeeRecord) -> Decimal {
        employee.hours_worked().min(self.cap)
    }
}

/// Returns the regular hours for `employee` under the default 40-hour policy.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::regular_hours;
/// use compensation_engine::models::{EmployeeRecord, RoleTag};
/// use rust_decimal::Decimal;
///
/// let role = RoleTag::new("staff").unwrap();
/// let employee = EmployeeRecord::new("emp_001", "Aiko", "Sales", role, Decimal::from(46)).unwrap();
/// assert_eq!(regular_hours(&employee), Decimal::from(40));
/// ```
pub fn regular_hours(employee: &EmployeeRecord) -> Decimal {
    StandardWeekPolicy::default().regular_hours(employee)
}
