//! Total turnover marks.
//!
//! Total turnover is the heaviest metric, scored out of 40.

use rust_decimal::Decimal;

use crate::models::{AuditStep, Metric};

use super::bands::{Band, dec, first_match};

/// The most marks total turnover can earn.
pub const TURNOVER_MAX_MARKS: Decimal = dec(40, 0);

const TURNOVER_BANDS: [Band<Decimal>; 4] = [
    Band { threshold: dec(100, 0), value: TURNOVER_MAX_MARKS },
    Band { threshold: dec(90, 0), value: dec(30, 0) },
    Band { threshold: dec(80, 0), value: dec(25, 0) },
    Band { threshold: dec(75, 0), value: dec(10, 0) },
];

/// The marks awarded for one metric, with the audit step explaining them.
#[derive(Debug, Clone)]
pub struct MetricMarksResult {
    /// The metric that was scored.
    pub metric: Metric,
    /// The marks awarded.
    pub marks: Decimal,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Converts a total turnover achievement percentage into marks.
///
/// | Achievement | Marks |
/// |-------------|-------|
/// | >= 100%     | 40    |
/// | >= 90%      | 30    |
/// | >= 80%      | 25    |
/// | >= 75%      | 10    |
/// | below 75%   | 0     |
///
/// # Examples
///
/// ```
/// use incentive_engine::calculation::turnover_marks;
/// use rust_decimal::Decimal;
///
/// assert_eq!(turnover_marks(Decimal::new(85, 0)), Decimal::new(25, 0));
/// assert_eq!(turnover_marks(Decimal::new(120, 0)), Decimal::new(40, 0));
/// ```
pub fn turnover_marks(pct: Decimal) -> Decimal {
    first_match(pct, &TURNOVER_BANDS, Decimal::ZERO)
}

/// Scores total turnover and records the decision as an audit step.
pub fn score_total_turnover(pct: Decimal, step_number: u32) -> MetricMarksResult {
    let marks = turnover_marks(pct);
    let threshold = TURNOVER_BANDS
        .iter()
        .find(|band| pct >= band.threshold)
        .map(|band| band.threshold);

    let reasoning = match threshold {
        Some(threshold) => format!(
            "{}% reaches the {}% band, awarding {} of {} marks",
            pct.normalize(),
            threshold.normalize(),
            marks.normalize(),
            TURNOVER_MAX_MARKS.normalize()
        ),
        None => format!(
            "{}% is below the 75% minimum band, no marks awarded",
            pct.normalize()
        ),
    };

    MetricMarksResult {
        metric: Metric::TotalTurnover,
        marks,
        audit_step: AuditStep {
            step_number,
            rule_id: Metric::TotalTurnover.rule_id().to_string(),
            rule_name: "Total Turnover Marks".to_string(),
            input: serde_json::json!({
                "achievement_pct": pct.normalize().to_string()
            }),
            output: serde_json::json!({
                "marks": marks.normalize().to_string(),
                "max_marks": TURNOVER_MAX_MARKS.normalize().to_string()
            }),
            reasoning,
        },
    }
}
