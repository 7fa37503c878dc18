//! Incentive resolution.
//!
//! The incentive is a two-key lookup: the total score is classified into a
//! slab, then the (designation, slab) cell of the incentive table gives the
//! amount. The table is constant data; a missing cell is a defect and is
//! reported as [`EngineError::IncentiveNotFound`] rather than defaulted.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Designation, IncentiveResult, Slab};

use super::slab::{classify_slab, slab_lower_bound};

/// One designation's row of the incentive table.
pub type IncentiveRow = (Designation, &'static [(Slab, u32)]);

/// A designation by slab table of incentive amounts, in rupees.
#[derive(Debug, Clone, Copy)]
pub struct IncentiveTable {
    rows: &'static [IncentiveRow],
}

/// Branch and assistant managers share the same row.
const BRANCH_AND_ASSISTANT_ROW: &[(Slab, u32)] = &[
    (Slab::HundredPlus, 50_000),
    (Slab::NinetyToNinetyNine, 40_000),
    (Slab::EightyToEightyNine, 30_000),
    (Slab::SeventyToSeventyNine, 23_750),
    (Slab::SixtyToSixtyNine, 17_500),
    (Slab::BelowSixty, 12_500),
];

const STANDARD_ROWS: &[IncentiveRow] = &[
    (
        Designation::ChiefManager,
        &[
            (Slab::HundredPlus, 75_000),
            (Slab::NinetyToNinetyNine, 62_500),
            (Slab::EightyToEightyNine, 50_000),
            (Slab::SeventyToSeventyNine, 37_500),
            (Slab::SixtyToSixtyNine, 25_000),
            (Slab::BelowSixty, 15_000),
        ],
    ),
    (
        Designation::ChiefManagerG2,
        &[
            (Slab::HundredPlus, 60_000),
            (Slab::NinetyToNinetyNine, 50_000),
            (Slab::EightyToEightyNine, 40_000),
            (Slab::SeventyToSeventyNine, 30_000),
            (Slab::SixtyToSixtyNine, 20_000),
            (Slab::BelowSixty, 14_000),
        ],
    ),
    (Designation::BranchManager, BRANCH_AND_ASSISTANT_ROW),
    (Designation::AssistantManager, BRANCH_AND_ASSISTANT_ROW),
    (
        Designation::ManagerTrainee,
        &[
            (Slab::HundredPlus, 30_000),
            (Slab::NinetyToNinetyNine, 25_000),
            (Slab::EightyToEightyNine, 20_000),
            (Slab::SeventyToSeventyNine, 17_500),
            (Slab::SixtyToSixtyNine, 15_000),
            (Slab::BelowSixty, 10_000),
        ],
    ),
];

impl IncentiveTable {
    /// The incentive chart in force for all designations.
    pub const STANDARD: IncentiveTable = IncentiveTable {
        rows: STANDARD_ROWS,
    };

    /// Creates a table from explicit rows.
    pub const fn new(rows: &'static [IncentiveRow]) -> Self {
        Self { rows }
    }

    /// Returns the amount for a designation and slab.
    ///
    /// # Errors
    ///
    /// Returns `IncentiveNotFound` if the table has no row for the
    /// designation or no cell for the slab.
    ///
    /// # Examples
    ///
    /// ```
    /// use incentive_engine::calculation::IncentiveTable;
    /// use incentive_engine::models::{Designation, Slab};
    ///
    /// let amount = IncentiveTable::STANDARD
    ///     .amount(Designation::BranchManager, Slab::EightyToEightyNine)
    ///     .unwrap();
    /// assert_eq!(amount, 30_000);
    /// ```
    pub fn amount(&self, designation: Designation, slab: Slab) -> EngineResult<u32> {
        self.rows
            .iter()
            .find(|(row_designation, _)| *row_designation == designation)
            .and_then(|(_, cells)| cells.iter().find(|(cell_slab, _)| *cell_slab == slab))
            .map(|(_, amount)| *amount)
            .ok_or_else(|| EngineError::IncentiveNotFound {
                designation: designation.display_name().to_string(),
                slab: slab.label().to_string(),
            })
    }

    /// Classifies the score into a slab and looks up the incentive.
    pub fn resolve(&self, designation: Designation, score: Decimal) -> EngineResult<IncentiveResult> {
        let slab = classify_slab(score);
        let amount = self.amount(designation, slab)?;
        Ok(IncentiveResult { amount, slab })
    }
}

impl Default for IncentiveTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Resolves the incentive for a designation and total score from the standard chart.
///
/// # Examples
///
/// ```
/// use incentive_engine::calculation::resolve_incentive;
/// use incentive_engine::models::{Designation, Slab};
/// use rust_decimal::Decimal;
///
/// let result = resolve_incentive(Designation::ManagerTrainee, Decimal::new(60, 0)).unwrap();
/// assert_eq!(result.slab, Slab::SixtyToSixtyNine);
/// assert_eq!(result.amount, 15_000);
/// ```
pub fn resolve_incentive(designation: Designation, score: Decimal) -> EngineResult<IncentiveResult> {
    IncentiveTable::STANDARD.resolve(designation, score)
}

/// The incentive with the audit steps recording the slab and the lookup.
#[derive(Debug, Clone)]
pub struct IncentiveLookupResult {
    /// The resolved incentive.
    pub incentive: IncentiveResult,
    /// The slab classification and table lookup steps.
    pub audit_steps: Vec<AuditStep>,
}

/// Resolves the incentive and records the slab classification and table lookup.
///
/// Uses two step numbers, starting at `step_number`.
pub fn calculate_incentive(
    table: &IncentiveTable,
    designation: Designation,
    score: Decimal,
    step_number: u32,
) -> EngineResult<IncentiveLookupResult> {
    let incentive = table.resolve(designation, score)?;
    let lower_bound = slab_lower_bound(incentive.slab);

    let slab_step = AuditStep {
        step_number,
        rule_id: "slab_classification".to_string(),
        rule_name: "Slab Classification".to_string(),
        input: serde_json::json!({
            "total_score": score.normalize().to_string()
        }),
        output: serde_json::json!({
            "slab": incentive.slab.label(),
            "slab_lower_bound": lower_bound.map(|bound| bound.normalize().to_string())
        }),
        reasoning: match lower_bound {
            Some(bound) => format!(
                "Score {} is at or above {}, placing it in the {} slab",
                score.normalize(),
                bound.normalize(),
                incentive.slab.label()
            ),
            None => format!(
                "Score {} is below every slab threshold, placing it in the {} slab",
                score.normalize(),
                incentive.slab.label()
            ),
        },
    };

    let lookup_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "incentive_lookup".to_string(),
        rule_name: "Incentive Lookup".to_string(),
        input: serde_json::json!({
            "designation": designation.display_name(),
            "slab": incentive.slab.label()
        }),
        output: serde_json::json!({
            "incentive_amount": incentive.amount
        }),
        reasoning: format!(
            "{} in slab {} earns ₹{}",
            designation.display_name(),
            incentive.slab.label(),
            incentive.amount
        ),
    };

    Ok(IncentiveLookupResult {
        incentive,
        audit_steps: vec![slab_step, lookup_step],
    })
}
