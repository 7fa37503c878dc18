//! DMD turnover marks and the studded-turnover gate.
//!
//! DMD is scored out of 10, but only once studded turnover reaches 75%.
//! Below that, DMD marks are locked at zero whatever DMD itself achieved.
//! DMD has no 75% band: achievements from 75% up to 80% still score zero.

use rust_decimal::Decimal;

use crate::models::{AuditStep, AuditWarning, Metric};

use super::bands::{Band, dec, first_match};
use super::turnover_marks::MetricMarksResult;

/// The studded turnover achievement required before DMD can earn marks.
pub const DMD_GATE_THRESHOLD: Decimal = dec(75, 0);

/// The most marks DMD turnover can earn.
pub const DMD_MAX_MARKS: Decimal = dec(10, 0);

/// Warning code raised while DMD marks are locked.
pub const DMD_LOCKED_WARNING: &str = "DMD_LOCKED";

const DMD_BANDS: [Band<Decimal>; 3] = [
    Band { threshold: dec(100, 0), value: DMD_MAX_MARKS },
    Band { threshold: dec(90, 0), value: dec(75, 1) },
    Band { threshold: dec(80, 0), value: dec(5, 0) },
];

/// The DMD marks decision, with the lock warning when the gate is closed.
#[derive(Debug, Clone)]
pub struct DmdMarksResult {
    /// The marks result for the DMD metric.
    pub result: MetricMarksResult,
    /// True when studded turnover was below the gate.
    pub locked: bool,
    /// The warning to surface while DMD is locked.
    pub warning: Option<AuditWarning>,
}

/// Returns true when studded turnover is below the DMD gate.
pub fn is_dmd_locked(studded_pct: Decimal) -> bool {
    studded_pct < DMD_GATE_THRESHOLD
}

/// Converts a DMD achievement percentage into marks, applying the studded gate.
///
/// # Examples
///
/// ```
/// use incentive_engine::calculation::dmd_marks;
/// use rust_decimal::Decimal;
///
/// // Gate open
/// assert_eq!(dmd_marks(Decimal::new(95, 0), Decimal::new(92, 0)), Decimal::new(75, 1));
/// // Gate closed: studded below 75%
/// assert_eq!(dmd_marks(Decimal::new(150, 0), Decimal::new(60, 0)), Decimal::ZERO);
/// ```
pub fn dmd_marks(pct: Decimal, studded_pct: Decimal) -> Decimal {
    if is_dmd_locked(studded_pct) {
        return Decimal::ZERO;
    }
    first_match(pct, &DMD_BANDS, Decimal::ZERO)
}

/// Scores DMD turnover and records the gate and band decision as an audit step.
pub fn score_dmd(pct: Decimal, studded_pct: Decimal, step_number: u32) -> DmdMarksResult {
    let locked = is_dmd_locked(studded_pct);
    let marks = dmd_marks(pct, studded_pct);

    let reasoning = if locked {
        format!(
            "DMD locked: studded turnover {}% is below the {}% gate, DMD {}% earns no marks",
            studded_pct.normalize(),
            DMD_GATE_THRESHOLD.normalize(),
            pct.normalize()
        )
    } else if marks > Decimal::ZERO {
        format!(
            "Studded turnover {}% opens the gate; DMD {}% earns {} of {} marks",
            studded_pct.normalize(),
            pct.normalize(),
            marks.normalize(),
            DMD_MAX_MARKS.normalize()
        )
    } else {
        format!(
            "Studded turnover {}% opens the gate; DMD {}% is below the 80% minimum band, no marks awarded",
            studded_pct.normalize(),
            pct.normalize()
        )
    };

    let warning = locked.then(|| AuditWarning {
        code: DMD_LOCKED_WARNING.to_string(),
        message: format!(
            "DMD marks locked: studded achievement must be >= {}% (currently {}%)",
            DMD_GATE_THRESHOLD.normalize(),
            studded_pct.normalize()
        ),
        severity: "high".to_string(),
    });

    DmdMarksResult {
        result: MetricMarksResult {
            metric: Metric::DmdTurnover,
            marks,
            audit_step: AuditStep {
                step_number,
                rule_id: Metric::DmdTurnover.rule_id().to_string(),
                rule_name: "DMD Turnover Marks".to_string(),
                input: serde_json::json!({
                    "achievement_pct": pct.normalize().to_string(),
                    "studded_pct": studded_pct.normalize().to_string(),
                    "gate_pct": DMD_GATE_THRESHOLD.normalize().to_string()
                }),
                output: serde_json::json!({
                    "marks": marks.normalize().to_string(),
                    "max_marks": DMD_MAX_MARKS.normalize().to_string(),
                    "locked": locked
                }),
                reasoning,
            },
        },
        locked,
        warning,
    }
}
