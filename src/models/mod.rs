//! Core data models for the Compensation Engine.
//!
//! This module contains the employee record consumed by every calculation
//! and the value objects the calculators produce.

mod employee;
mod hour_report;
mod pay_result;

pub use employee::{EmployeeRecord, RoleTag};
pub use hour_report::HourReport;
pub use pay_result::PayResult;
