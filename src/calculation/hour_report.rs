//! Labor-hours reporting for HR.
//!
//! [`HourReporter`] depends only on the regular-hours policy. It never sees a
//! compensation strategy or an allowance, so pay rule changes cannot affect
//! its output.

use std::sync::Arc;

use crate::models::{EmployeeRecord, HourReport};

use super::regular_hours::{RegularHoursPolicy, StandardWeekPolicy};

/// Produces human-readable hour reports.
#[derive(Clone)]
pub struct HourReporter {
    hours_policy: Arc<dyn RegularHoursPolicy>,
}

impl Default for HourReporter {
    fn default() -> Self {
        Self::new(Arc::new(StandardWeekPolicy::default()))
    }
}

impl HourReporter {
    /// Creates a reporter that reads regular hours through `hours_policy`.
    pub fn new(hours_policy: Arc<dyn RegularHoursPolicy>) -> Self {
        Self { hours_policy }
    }

    /// Builds the hour report for `employee`.
    ///
    /// # Examples
    ///
    /// ```
    /// use compensation_engine::calculation::HourReporter;
    /// use compensation_engine::models::{EmployeeRecord, RoleTag};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = EmployeeRecord::new(
    ///     "emp_001", "Aiko", "Accounting", RoleTag::new("staff").unwrap(), Decimal::from(45),
    /// ).unwrap();
    ///
    /// let report = HourReporter::default().report(&employee);
    /// assert_eq!(report.regular_hours, Decimal::from(40));
    /// assert_eq!(report.formatted_summary, "Aiko (Accounting): 40 regular hours of 45 worked");
    /// ```
    pub fn report(&self, employee: &EmployeeRecord) -> HourReport {
        let regular_hours = self.hours_policy.regular_hours(employee);
        let hours_worked = employee.hours_worked();
        let overtime_hours = hours_worked - regular_hours;

        let formatted_summary = format!(
            "{} ({}): {} regular hours of {} worked",
            employee.name(),
            employee.department(),
            regular_hours.normalize(),
            hours_worked.normalize()
        );

        HourReport {
            employee_id: employee.id().to_string(),
            hours_worked,
            regular_hours,
            overtime_hours,
            formatted_summary,
        }
    }
}
