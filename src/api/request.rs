//! Request types for the Incentive Engine API.
//!
//! This module defines the JSON request structures for the `/evaluate` endpoint.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Designation, MetricInput};

/// Request body for the `/evaluate` endpoint.
///
/// The designation is accepted as free text so that an unknown value can be
/// reported as `INVALID_DESIGNATION` rather than a generic JSON error.
/// Omitted metrics default to 100%.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// The designation, as a display name or code (e.g. "BRANCH MANAGER").
    pub designation: String,
    /// Achievement percentages for the five metrics.
    #[serde(default)]
    pub metrics: MetricInput,
}

impl EvaluationRequest {
    /// Validates the designation text.
    pub fn designation(&self) -> EngineResult<Designation> {
        self.designation.parse()
    }
}
