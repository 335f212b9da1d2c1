//! HTTP API module for the Compensation Engine.
//!
//! This module provides the REST endpoints for pay calculation, hour
//! reporting and employee title updates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{HourReportRequest, PayRequest, TitleRequest};
pub use response::{ApiError, ApiErrorResponse, PayResponse, RoleView, RolesResponse};
pub use state::AppState;
