//! Standard twenty-point scale marks.
//!
//! Studded turnover, DTSO and scheme registration are each scored on the same
//! twenty-point chart. The three metrics are scored independently.

use rust_decimal::Decimal;

use crate::models::{AuditStep, Metric};

use super::bands::{Band, dec, first_match};
use super::turnover_marks::MetricMarksResult;

/// The most marks a twenty-point metric can earn.
pub const TWENTY_SCALE_MAX_MARKS: Decimal = dec(20, 0);

const TWENTY_SCALE_BANDS: [Band<Decimal>; 4] = [
    Band { threshold: dec(100, 0), value: TWENTY_SCALE_MAX_MARKS },
    Band { threshold: dec(90, 0), value: dec(125, 1) },
    Band { threshold: dec(80, 0), value: dec(75, 1) },
    Band { threshold: dec(75, 0), value: dec(4, 0) },
];

/// Converts an achievement percentage into marks on the twenty-point scale.
///
/// | Achievement | Marks |
/// |-------------|-------|
/// | >= 100%     | 20    |
/// | >= 90%      | 12.5  |
/// | >= 80%      | 7.5   |
/// | >= 75%      | 4     |
/// | below 75%   | 0     |
///
/// # Examples
///
/// ```
/// use incentive_engine::calculation::standard_twenty_scale_marks;
/// use rust_decimal::Decimal;
///
/// assert_eq!(standard_twenty_scale_marks(Decimal::new(92, 0)), Decimal::new(125, 1));
/// assert_eq!(standard_twenty_scale_marks(Decimal::new(70, 0)), Decimal::ZERO);
/// ```
pub fn standard_twenty_scale_marks(pct: Decimal) -> Decimal {
    first_match(pct, &TWENTY_SCALE_BANDS, Decimal::ZERO)
}

/// Scores one twenty-point metric and records the decision as an audit step.
///
/// `metric` names which of the three twenty-point metrics is being scored; it
/// only affects the audit step, never the marks.
pub fn score_twenty_scale(metric: Metric, pct: Decimal, step_number: u32) -> MetricMarksResult {
    let marks = standard_twenty_scale_marks(pct);

    let reasoning = if marks > Decimal::ZERO {
        format!(
            "{} at {}% earns {} of {} marks on the twenty-point scale",
            metric.name(),
            pct.normalize(),
            marks.normalize(),
            TWENTY_SCALE_MAX_MARKS.normalize()
        )
    } else {
        format!(
            "{} at {}% is below the 75% minimum band, no marks awarded",
            metric.name(),
            pct.normalize()
        )
    };

    MetricMarksResult {
        metric,
        marks,
        audit_step: AuditStep {
            step_number,
            rule_id: metric.rule_id().to_string(),
            rule_name: format!("{} Marks", metric.name()),
            input: serde_json::json!({
                "achievement_pct": pct.normalize().to_string()
            }),
            output: serde_json::json!({
                "marks": marks.normalize().to_string(),
                "max_marks": TWENTY_SCALE_MAX_MARKS.normalize().to_string()
            }),
            reasoning,
        },
    }
}
