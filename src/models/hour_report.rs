//! Labor-hours report model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A labor-hours report for a single employee, produced for HR.
///
/// Contains no pay information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourReport {
    /// The employee this report belongs to.
    pub employee_id: String,
    /// Total hours worked.
    pub hours_worked: Decimal,
    /// Hours counted at the standard rate.
    pub regular_hours: Decimal,
    /// Hours beyond the regular-hours policy.
    pub overtime_hours: Decimal,
    /// Human-readable one-line summary.
    pub formatted_summary: String,
}
