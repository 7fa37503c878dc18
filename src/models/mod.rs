//! Core data models for the Incentive Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod designation;
mod evaluation_result;
mod metrics;

pub use designation::Designation;
pub use evaluation_result::{
    AuditStep, AuditTrace, AuditWarning, EvaluationResult, IncentiveResult, MarksBreakdown,
    PerformanceLevel, Slab,
};
pub use metrics::{
    DEFAULT_ACHIEVEMENT_PCT, INPUT_RANGE_MAX_PCT, INPUT_RANGE_MIN_PCT, Metric, MetricInput,
    parse_achievement_pct,
};
