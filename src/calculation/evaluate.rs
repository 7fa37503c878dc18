//! Full performance evaluation.
//!
//! Scores every metric, sums the marks, resolves the incentive and classifies
//! the performance level, collecting an audit step for each decision.

use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, Designation, EvaluationResult, MarksBreakdown, Metric,
    MetricInput,
};

use super::dmd_marks::score_dmd;
use super::incentive::{IncentiveTable, calculate_incentive};
use super::performance_level::calculate_performance_level;
use super::total_score::{MAX_SCORE, calculate_total_score};
use super::turnover_marks::score_total_turnover;
use super::twenty_scale_marks::score_twenty_scale;

/// Evaluates a manager's performance against the standard incentive chart.
///
/// # Errors
///
/// Returns `IncentiveNotFound` only if the incentive table has no cell for the
/// classified slab, which the standard chart never does.
///
/// # Examples
///
/// ```
/// use incentive_engine::calculation::evaluate;
/// use incentive_engine::models::{Designation, MetricInput, PerformanceLevel, Slab};
/// use rust_decimal::Decimal;
///
/// let result = evaluate(Designation::ChiefManager, &MetricInput::default()).unwrap();
/// assert_eq!(result.total_score, Decimal::new(110, 0));
/// assert_eq!(result.slab, Slab::HundredPlus);
/// assert_eq!(result.incentive_amount, 75_000);
/// assert_eq!(result.performance_level, PerformanceLevel::Outstanding);
/// ```
pub fn evaluate(designation: Designation, input: &MetricInput) -> EngineResult<EvaluationResult> {
    evaluate_with_table(&IncentiveTable::STANDARD, designation, input)
}

/// Evaluates a manager's performance against the given incentive table.
pub fn evaluate_with_table(
    table: &IncentiveTable,
    designation: Designation,
    input: &MetricInput,
) -> EngineResult<EvaluationResult> {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let turnover = score_total_turnover(input.total_turnover, step_number);
    steps.push(turnover.audit_step);
    step_number += 1;

    let studded = score_twenty_scale(Metric::StuddedTurnover, input.studded_turnover, step_number);
    steps.push(studded.audit_step);
    step_number += 1;

    let dtso = score_twenty_scale(Metric::Dtso, input.dtso, step_number);
    steps.push(dtso.audit_step);
    step_number += 1;

    let scheme = score_twenty_scale(
        Metric::SchemeRegistration,
        input.scheme_registration,
        step_number,
    );
    steps.push(scheme.audit_step);
    step_number += 1;

    let dmd = score_dmd(input.dmd_turnover, input.studded_turnover, step_number);
    steps.push(dmd.result.audit_step);
    warnings.extend(dmd.warning);
    step_number += 1;

    let marks_breakdown = MarksBreakdown {
        total_turnover: turnover.marks,
        studded_turnover: studded.marks,
        dtso: dtso.marks,
        scheme_registration: scheme.marks,
        dmd_turnover: dmd.result.marks,
    };

    let total = calculate_total_score(&marks_breakdown, step_number);
    steps.push(total.audit_step);
    step_number += 1;

    let incentive = calculate_incentive(table, designation, total.total_score, step_number)?;
    step_number += incentive.audit_steps.len() as u32;
    steps.extend(incentive.audit_steps);

    let performance = calculate_performance_level(total.total_score, step_number);
    steps.push(performance.audit_step);

    for metric in input.out_of_range_metrics() {
        warnings.push(AuditWarning {
            code: "OUT_OF_RANGE_INPUT".to_string(),
            message: format!(
                "{} achievement {}% is outside the 0-120% input range",
                metric.name(),
                input.get(metric).normalize()
            ),
            severity: "low".to_string(),
        });
    }

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(EvaluationResult {
        evaluation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        designation,
        metrics: *input,
        marks_breakdown,
        total_score: total.total_score,
        max_score: MAX_SCORE,
        score_progress_percent: total.progress_percent,
        performance_level: performance.level,
        incentive_amount: incentive.incentive.amount,
        slab: incentive.incentive.slab,
        dmd_locked: dmd.locked,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::incentive::IncentiveRow;
    use crate::error::EngineError;
    use crate::models::{PerformanceLevel, Slab};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn input(values: [&str; 5]) -> MetricInput {
        MetricInput {
            total_turnover: dec(values[0]),
            studded_turnover: dec(values[1]),
            dtso: dec(values[2]),
            scheme_registration: dec(values[3]),
            dmd_turnover: dec(values[4]),
        }
    }

    #[test]
    fn test_all_metrics_at_one_hundred() {
        let result = evaluate(Designation::BranchManager, &MetricInput::default()).unwrap();

        assert_eq!(result.marks_breakdown.total_turnover, dec("40"));
        assert_eq!(result.marks_breakdown.studded_turnover, dec("20"));
        assert_eq!(result.marks_breakdown.dtso, dec("20"));
        assert_eq!(result.marks_breakdown.scheme_registration, dec("20"));
        assert_eq!(result.marks_breakdown.dmd_turnover, dec("10"));
        assert_eq!(result.total_score, dec("110"));
        assert_eq!(result.slab, Slab::HundredPlus);
        assert_eq!(result.performance_level, PerformanceLevel::Outstanding);
        assert_eq!(result.score_progress_percent, 100);
        assert!(!result.dmd_locked);
        assert!(result.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_branch_manager_mixed_achievement() {
        let result = evaluate(
            Designation::BranchManager,
            &input(["85", "92", "100", "100", "95"]),
        )
        .unwrap();

        assert_eq!(result.marks_breakdown.total_turnover, dec("25"));
        assert_eq!(result.marks_breakdown.studded_turnover, dec("12.5"));
        assert_eq!(result.marks_breakdown.dtso, dec("20"));
        assert_eq!(result.marks_breakdown.scheme_registration, dec("20"));
        assert_eq!(result.marks_breakdown.dmd_turnover, dec("7.5"));
        assert_eq!(result.total_score, dec("85"));
        assert_eq!(result.slab, Slab::EightyToEightyNine);
        assert_eq!(result.incentive_amount, 30_000);
        assert_eq!(result.performance_level, PerformanceLevel::Strong);
        assert_eq!(result.score_progress_percent, 77);
    }

    #[test]
    fn test_dmd_lock_zeroes_dmd_and_warns() {
        let result = evaluate(
            Designation::ChiefManager,
            &input(["100", "60", "100", "100", "100"]),
        )
        .unwrap();

        assert_eq!(result.marks_breakdown.dmd_turnover, Decimal::ZERO);
        assert!(result.dmd_locked);
        assert_eq!(result.audit_trace.warnings.len(), 1);
        assert_eq!(result.audit_trace.warnings[0].code, "DMD_LOCKED");
    }

    #[test]
    fn test_score_of_exactly_sixty_for_trainee() {
        let result = evaluate(
            Designation::ManagerTrainee,
            &input(["100", "100", "0", "0", "0"]),
        )
        .unwrap();

        assert_eq!(result.total_score, dec("60"));
        assert_eq!(result.slab, Slab::SixtyToSixtyNine);
        assert_eq!(result.incentive_amount, 15_000);
    }

    #[test]
    fn test_total_equals_sum_of_breakdown() {
        let result = evaluate(
            Designation::AssistantManager,
            &input(["76", "81", "90", "74", "80"]),
        )
        .unwrap();

        assert_eq!(result.total_score, result.marks_breakdown.total());
        assert_eq!(result.total_score, dec("10") + dec("7.5") + dec("12.5") + dec("5"));
    }

    #[test]
    fn test_audit_trace_records_every_rule_in_order() {
        let result = evaluate(Designation::ChiefManagerG2, &MetricInput::default()).unwrap();

        let rule_ids: Vec<&str> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "total_turnover_marks",
                "studded_turnover_marks",
                "dtso_marks",
                "scheme_registration_marks",
                "dmd_turnover_marks",
                "total_score",
                "slab_classification",
                "incentive_lookup",
                "performance_level",
            ]
        );

        let step_numbers: Vec<u32> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(step_numbers, (1..=9).collect::<Vec<u32>>());
    }

    #[test]
    fn test_out_of_range_inputs_are_scored_and_flagged() {
        let result = evaluate(
            Designation::ManagerTrainee,
            &input(["150", "-10", "100", "100", "100"]),
        )
        .unwrap();

        assert_eq!(result.marks_breakdown.total_turnover, dec("40"));
        assert_eq!(result.marks_breakdown.studded_turnover, Decimal::ZERO);
        assert!(result.dmd_locked);
        let codes: Vec<&str> = result
            .audit_trace
            .warnings
            .iter()
            .map(|w| w.code.as_str())
            .collect();
        assert_eq!(codes, vec!["DMD_LOCKED", "OUT_OF_RANGE_INPUT", "OUT_OF_RANGE_INPUT"]);
    }

    #[test]
    fn test_incomplete_table_is_an_error() {
        const EMPTY: &[IncentiveRow] = &[];
        let result = evaluate_with_table(
            &IncentiveTable::new(EMPTY),
            Designation::BranchManager,
            &MetricInput::default(),
        );
        assert!(matches!(result, Err(EngineError::IncentiveNotFound { .. })));
    }

    #[test]
    fn test_result_metadata() {
        let result = evaluate(Designation::BranchManager, &MetricInput::default()).unwrap();
        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(result.max_score, dec("110"));
        assert_eq!(result.designation, Designation::BranchManager);
        assert_eq!(result.metrics, MetricInput::default());
    }
}
