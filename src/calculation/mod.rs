//! Calculation logic for the Compensation Engine.
//!
//! This module contains the role-based compensation strategies and their
//! registry, the shared regular-hours policy, the pay calculator used by
//! payroll, and the hour reporter used by HR.

mod compensation;
mod hour_report;
mod pay;
mod regular_hours;
mod registry;

pub use compensation::{
    CompensationStrategy, InternStrategy, LeaderStrategy, ManagerStrategy, MultiplierStrategy,
    StaffStrategy,
};
pub use hour_report::HourReporter;
pub use pay::{DEFAULT_BASE_PAY, PayCalculator};
pub use regular_hours::{
    DEFAULT_REGULAR_HOURS_CAP, RegularHoursPolicy, StandardWeekPolicy, regular_hours,
};
pub use registry::{RoleEntry, RoleRegistry};
