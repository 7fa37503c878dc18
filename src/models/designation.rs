//! Designation model.
//!
//! This module defines the [`Designation`] enum, which selects the row of the
//! incentive table used for a manager.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The job designation of the manager being evaluated.
///
/// Designations are parsed from display names ("CHIEF MANAGER (G2)"),
/// snake_case ("chief_manager_g2") or screaming case ("CHIEF_MANAGER_G2").
///
/// # Example
///
/// ```
/// use incentive_engine::models::Designation;
///
/// let designation: Designation = "Branch Manager".parse().unwrap();
/// assert_eq!(designation, Designation::BranchManager);
/// assert_eq!(designation.display_name(), "BRANCH MANAGER");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Designation {
    /// Chief Manager.
    ChiefManager,
    /// Chief Manager, grade 2.
    ChiefManagerG2,
    /// Branch Manager.
    BranchManager,
    /// Assistant Manager.
    AssistantManager,
    /// Manager Trainee.
    ManagerTrainee,
}

impl Designation {
    /// All designations, in the order they are offered to users.
    pub const ALL: [Designation; 5] = [
        Designation::ChiefManager,
        Designation::ChiefManagerG2,
        Designation::BranchManager,
        Designation::AssistantManager,
        Designation::ManagerTrainee,
    ];

    /// Returns the human-readable name used on the incentive chart.
    pub fn display_name(&self) -> &'static str {
        match self {
            Designation::ChiefManager => "CHIEF MANAGER",
            Designation::ChiefManagerG2 => "CHIEF MANAGER (G2)",
            Designation::BranchManager => "BRANCH MANAGER",
            Designation::AssistantManager => "ASSISTANT MANAGER",
            Designation::ManagerTrainee => "MANAGER TRAINEE",
        }
    }

    /// Returns the snake_case code used in JSON payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Designation::ChiefManager => "chief_manager",
            Designation::ChiefManagerG2 => "chief_manager_g2",
            Designation::BranchManager => "branch_manager",
            Designation::AssistantManager => "assistant_manager",
            Designation::ManagerTrainee => "manager_trainee",
        }
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Designation {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "chief_manager_g2", "CHIEF MANAGER (G2)" and "Chief  Manager G2" all
        // normalise to "CHIEF MANAGER G2".
        let normalized = s
            .to_uppercase()
            .replace(['_', '(', ')'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "CHIEF MANAGER" => Ok(Designation::ChiefManager),
            "CHIEF MANAGER G2" => Ok(Designation::ChiefManagerG2),
            "BRANCH MANAGER" => Ok(Designation::BranchManager),
            "ASSISTANT MANAGER" => Ok(Designation::AssistantManager),
            "MANAGER TRAINEE" => Ok(Designation::ManagerTrainee),
            _ => Err(EngineError::InvalidDesignation {
                value: s.trim().to_string(),
            }),
        }
    }
}
