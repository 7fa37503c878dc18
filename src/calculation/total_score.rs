//! Total score calculation.
//!
//! The total score is the exact sum of the five metric marks. No rounding is
//! applied, so fractional marks such as 12.5 and 7.5 carry through.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{AuditStep, MarksBreakdown};

use super::bands::dec;

/// The highest attainable total score (40 + 20 + 20 + 20 + 10).
pub const MAX_SCORE: Decimal = dec(110, 0);

/// The total score with the audit step recording the sum.
#[derive(Debug, Clone)]
pub struct TotalScoreResult {
    /// The summed score.
    pub total_score: Decimal,
    /// The score as a whole percentage of [`MAX_SCORE`].
    pub progress_percent: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Sums the marks breakdown into a total score.
pub fn total_score(marks: &MarksBreakdown) -> Decimal {
    marks.total()
}

/// Expresses a score as a whole percentage of [`MAX_SCORE`], truncated toward zero.
///
/// Negative scores report 0.
///
/// # Examples
///
/// ```
/// use incentive_engine::calculation::score_progress_percent;
/// use rust_decimal::Decimal;
///
/// assert_eq!(score_progress_percent(Decimal::new(85, 0)), 77);
/// assert_eq!(score_progress_percent(Decimal::new(110, 0)), 100);
/// ```
pub fn score_progress_percent(score: Decimal) -> u32 {
    (score * Decimal::ONE_HUNDRED / MAX_SCORE)
        .trunc()
        .to_u32()
        .unwrap_or(0)
}

/// Sums the marks breakdown and records the sum as an audit step.
pub fn calculate_total_score(marks: &MarksBreakdown, step_number: u32) -> TotalScoreResult {
    let total = total_score(marks);
    let progress_percent = score_progress_percent(total);

    let audit_step = AuditStep {
        step_number,
        rule_id: "total_score".to_string(),
        rule_name: "Total Score".to_string(),
        input: serde_json::json!({
            "total_turnover": marks.total_turnover.normalize().to_string(),
            "studded_turnover": marks.studded_turnover.normalize().to_string(),
            "dtso": marks.dtso.normalize().to_string(),
            "scheme_registration": marks.scheme_registration.normalize().to_string(),
            "dmd_turnover": marks.dmd_turnover.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_score": total.normalize().to_string(),
            "max_score": MAX_SCORE.normalize().to_string(),
            "progress_percent": progress_percent
        }),
        reasoning: format!(
            "{} + {} + {} + {} + {} = {} / {}",
            marks.total_turnover.normalize(),
            marks.studded_turnover.normalize(),
            marks.dtso.normalize(),
            marks.scheme_registration.normalize(),
            marks.dmd_turnover.normalize(),
            total.normalize(),
            MAX_SCORE.normalize()
        ),
    };

    TotalScoreResult {
        total_score: total,
        progress_percent,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn marks(values: [&str; 5]) -> MarksBreakdown {
        MarksBreakdown {
            total_turnover: dec(values[0]),
            studded_turnover: dec(values[1]),
            dtso: dec(values[2]),
            scheme_registration: dec(values[3]),
            dmd_turnover: dec(values[4]),
        }
    }

    #[test]
    fn test_max_score_is_sum_of_ceilings() {
        let result = calculate_total_score(&marks(["40", "20", "20", "20", "10"]), 1);
        assert_eq!(result.total_score, MAX_SCORE);
        assert_eq!(result.progress_percent, 100);
    }

    #[test]
    fn test_fractional_marks_are_not_rounded() {
        let result = calculate_total_score(&marks(["25", "12.5", "20", "20", "7.5"]), 1);
        assert_eq!(result.total_score, dec("85"));

        let result = calculate_total_score(&marks(["10", "12.5", "4", "7.5", "0"]), 1);
        assert_eq!(result.total_score, dec("34"));
    }

    #[test]
    fn test_progress_percent_truncates() {
        assert_eq!(score_progress_percent(dec("85")), 77);
        assert_eq!(score_progress_percent(dec("109.9")), 99);
        assert_eq!(score_progress_percent(dec("0")), 0);
        assert_eq!(score_progress_percent(dec("-5")), 0);
    }

    #[test]
    fn test_total_score_audit_step() {
        let result = calculate_total_score(&marks(["25", "12.5", "20", "20", "7.5"]), 7);

        assert_eq!(result.audit_step.step_number, 7);
        assert_eq!(result.audit_step.rule_id, "total_score");
        assert_eq!(
            result.audit_step.output["total_score"].as_str().unwrap(),
            "85"
        );
        assert_eq!(result.audit_step.reasoning, "25 + 12.5 + 20 + 20 + 7.5 = 85 / 110");
    }
}
