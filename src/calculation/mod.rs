//! Calculation logic for the Incentive Engine.
//!
//! This module contains all the scoring functions: metric marks on the
//! turnover, twenty-point and DMD charts (including the studded-turnover gate
//! on DMD), the total score, slab classification, incentive lookup,
//! performance level classification, and the full evaluation that ties them
//! together.

mod bands;
mod dmd_marks;
mod evaluate;
mod incentive;
mod performance_level;
mod slab;
mod total_score;
mod turnover_marks;
mod twenty_scale_marks;

pub use bands::{Band, first_match};
pub use dmd_marks::{
    DMD_GATE_THRESHOLD, DMD_LOCKED_WARNING, DMD_MAX_MARKS, DmdMarksResult, dmd_marks,
    is_dmd_locked, score_dmd,
};
pub use evaluate::{evaluate, evaluate_with_table};
pub use incentive::{
    IncentiveLookupResult, IncentiveRow, IncentiveTable, calculate_incentive, resolve_incentive,
};
pub use performance_level::{
    PerformanceLevelResult, calculate_performance_level, classify_performance,
};
pub use slab::{classify_slab, slab_lower_bound};
pub use total_score::{
    MAX_SCORE, TotalScoreResult, calculate_total_score, score_progress_percent, total_score,
};
pub use turnover_marks::{
    MetricMarksResult, TURNOVER_MAX_MARKS, score_total_turnover, turnover_marks,
};
pub use twenty_scale_marks::{
    TWENTY_SCALE_MAX_MARKS, score_twenty_scale, standard_twenty_scale_marks,
};
