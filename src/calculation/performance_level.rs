//! Performance level classification.
//!
//! The performance level is advisory: it is derived from the total score alone
//! and never influences the incentive.

use rust_decimal::Decimal;

use crate::models::{AuditStep, PerformanceLevel};

use super::bands::{Band, dec, first_match};

const PERFORMANCE_BANDS: [Band<PerformanceLevel>; 3] = [
    Band { threshold: dec(95, 0), value: PerformanceLevel::Outstanding },
    Band { threshold: dec(80, 0), value: PerformanceLevel::Strong },
    Band { threshold: dec(60, 0), value: PerformanceLevel::StableButImprovementNeeded },
];

/// Classifies a total score into a performance level.
///
/// # Examples
///
/// ```
/// use incentive_engine::calculation::classify_performance;
/// use incentive_engine::models::PerformanceLevel;
/// use rust_decimal::Decimal;
///
/// assert_eq!(classify_performance(Decimal::new(85, 0)), PerformanceLevel::Strong);
/// ```
pub fn classify_performance(score: Decimal) -> PerformanceLevel {
    first_match(score, &PERFORMANCE_BANDS, PerformanceLevel::HighRisk)
}

/// The performance level with the audit step recording it.
#[derive(Debug, Clone)]
pub struct PerformanceLevelResult {
    /// The classified level.
    pub level: PerformanceLevel,
    /// The audit step recording this classification.
    pub audit_step: AuditStep,
}

/// Classifies a total score and records the decision as an audit step.
pub fn calculate_performance_level(score: Decimal, step_number: u32) -> PerformanceLevelResult {
    let level = classify_performance(score);

    PerformanceLevelResult {
        level,
        audit_step: AuditStep {
            step_number,
            rule_id: "performance_level".to_string(),
            rule_name: "Performance Level".to_string(),
            input: serde_json::json!({
                "total_score": score.normalize().to_string()
            }),
            output: serde_json::json!({
                "performance_level": level,
                "label": level.label()
            }),
            reasoning: format!("Score {} is rated {}", score.normalize(), level.label()),
        },
    }
}
