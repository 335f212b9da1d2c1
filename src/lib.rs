//! Compensation Engine
//!
//! This crate calculates employee pay from role-based compensation
//! strategies, produces labor-hours reports for HR, and saves narrow subsets
//! of employee fields through a segregated persistence gateway.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod persistence;
pub mod telemetry;
