//! Request types for the Compensation Engine API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::EmployeeRecord;

/// Request body for the `/pay` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayRequest {
    /// The employee to pay. The role selects the compensation strategy.
    pub employee: EmployeeRecord,
    /// Allowance added on top of the salary. Defaults to zero.
    #[serde(default)]
    pub allowance: Decimal,
}

/// Request body for the `/hours` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourReportRequest {
    /// The employee to report on.
    pub employee: EmployeeRecord,
}

/// Request body for the `/employees/:id/title` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleRequest {
    /// The new job title.
    pub title: String,
}
