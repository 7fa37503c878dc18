//! HTTP API module for the Incentive Engine.
//!
//! This module provides the REST API endpoints front ends use to evaluate
//! a manager's performance and to list the supported designations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EvaluationRequest;
pub use response::{ApiError, DesignationView, HealthResponse, SlabIncentive};
pub use state::AppState;
