//! Evaluation result models for the Incentive Engine.
//!
//! This module contains the [`EvaluationResult`] type and its associated
//! structures that capture all outputs of a performance evaluation: the marks
//! breakdown, the score bands it falls into, the incentive earned, and an
//! audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Designation, Metric, MetricInput};

/// A contiguous total-score band used as the column key of the incentive table.
///
/// Slabs serialize as their chart labels (e.g. `"80-89"`).
///
/// # Example
///
/// ```
/// use incentive_engine::models::Slab;
///
/// assert_eq!(Slab::EightyToEightyNine.label(), "80-89");
/// assert_eq!(serde_json::to_string(&Slab::BelowSixty).unwrap(), "\"<60\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slab {
    /// Score of 100 or more.
    #[serde(rename = "100+")]
    HundredPlus,
    /// Score from 90 up to 100.
    #[serde(rename = "90-99")]
    NinetyToNinetyNine,
    /// Score from 80 up to 90.
    #[serde(rename = "80-89")]
    EightyToEightyNine,
    /// Score from 70 up to 80.
    #[serde(rename = "70-79")]
    SeventyToSeventyNine,
    /// Score from 60 up to 70.
    #[serde(rename = "60-69")]
    SixtyToSixtyNine,
    /// Score below 60.
    #[serde(rename = "<60")]
    BelowSixty,
}

impl Slab {
    /// All slabs, highest first.
    pub const ALL: [Slab; 6] = [
        Slab::HundredPlus,
        Slab::NinetyToNinetyNine,
        Slab::EightyToEightyNine,
        Slab::SeventyToSeventyNine,
        Slab::SixtyToSixtyNine,
        Slab::BelowSixty,
    ];

    /// Returns the chart label for this slab.
    pub fn label(&self) -> &'static str {
        match self {
            Slab::HundredPlus => "100+",
            Slab::NinetyToNinetyNine => "90-99",
            Slab::EightyToEightyNine => "80-89",
            Slab::SeventyToSeventyNine => "70-79",
            Slab::SixtyToSixtyNine => "60-69",
            Slab::BelowSixty => "<60",
        }
    }
}

/// Qualitative performance label derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PerformanceLevel {
    /// Score of 95 or more.
    Outstanding,
    /// Score from 80 up to 95.
    Strong,
    /// Score from 60 up to 80.
    StableButImprovementNeeded,
    /// Score below 60.
    HighRisk,
}

impl PerformanceLevel {
    /// Returns the label shown to the manager.
    pub fn label(&self) -> &'static str {
        match self {
            PerformanceLevel::Outstanding => "OUTSTANDING PERFORMER",
            PerformanceLevel::Strong => "STRONG PERFORMER",
            PerformanceLevel::StableButImprovementNeeded => "STABLE BUT IMPROVEMENT NEEDED",
            PerformanceLevel::HighRisk => "HIGH RISK ZONE",
        }
    }
}

/// Marks awarded for each metric.
///
/// # Example
///
/// ```
/// use incentive_engine::models::MarksBreakdown;
/// use rust_decimal::Decimal;
///
/// let marks = MarksBreakdown {
///     total_turnover: Decimal::new(25, 0),
///     studded_turnover: Decimal::new(125, 1),
///     dtso: Decimal::new(20, 0),
///     scheme_registration: Decimal::new(20, 0),
///     dmd_turnover: Decimal::new(75, 1),
/// };
/// assert_eq!(marks.total(), Decimal::new(85, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarksBreakdown {
    /// Marks for total turnover (0-40).
    pub total_turnover: Decimal,
    /// Marks for studded turnover (0-20).
    pub studded_turnover: Decimal,
    /// Marks for DTSO (0-20).
    pub dtso: Decimal,
    /// Marks for scheme registration (0-20).
    pub scheme_registration: Decimal,
    /// Marks for DMD turnover (0-10), zero while DMD is locked.
    pub dmd_turnover: Decimal,
}

impl MarksBreakdown {
    /// Returns the marks awarded for a metric.
    pub fn get(&self, metric: Metric) -> Decimal {
        match metric {
            Metric::TotalTurnover => self.total_turnover,
            Metric::StuddedTurnover => self.studded_turnover,
            Metric::Dtso => self.dtso,
            Metric::SchemeRegistration => self.scheme_registration,
            Metric::DmdTurnover => self.dmd_turnover,
        }
    }

    /// Returns the exact sum of all five marks.
    pub fn total(&self) -> Decimal {
        Metric::ALL.iter().map(|metric| self.get(*metric)).sum()
    }
}

/// The incentive earned for a designation at a given score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncentiveResult {
    /// Incentive amount in rupees.
    pub amount: u32,
    /// The slab the score fell into.
    pub slab: Slab,
}

/// A single step in the audit trace recording a scoring decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during evaluation.
///
/// Warnings never change the result; they tell the front end what to highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of scoring steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during evaluation.
    pub warnings: Vec<AuditWarning>,
    /// The total evaluation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of evaluating a manager's performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Unique identifier for this evaluation.
    pub evaluation_id: Uuid,
    /// When the evaluation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the evaluation.
    pub engine_version: String,
    /// The designation whose incentive row was used.
    pub designation: Designation,
    /// The achievement percentages that were scored.
    pub metrics: MetricInput,
    /// Marks awarded per metric.
    pub marks_breakdown: MarksBreakdown,
    /// Sum of the marks breakdown, at full precision.
    pub total_score: Decimal,
    /// The highest attainable total score.
    pub max_score: Decimal,
    /// Total score as a whole percentage of the maximum, truncated.
    pub score_progress_percent: u32,
    /// Qualitative performance label.
    pub performance_level: PerformanceLevel,
    /// Incentive amount in rupees.
    pub incentive_amount: u32,
    /// The slab applied for the incentive lookup.
    pub slab: Slab,
    /// True when studded turnover is below the DMD gate and DMD marks are locked.
    pub dmd_locked: bool,
    /// Audit trace of every scoring decision.
    pub audit_trace: AuditTrace,
}
