//! Metric input models.
//!
//! This module defines the five performance metrics a manager is scored on
//! and the [`MetricInput`] that carries their achievement percentages.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};

/// One of the five scored performance metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Total turnover against target, scored out of 40.
    TotalTurnover,
    /// Studded jewellery turnover against target, scored out of 20.
    StuddedTurnover,
    /// DTSO (AKT) achievement, scored out of 20.
    Dtso,
    /// Scheme registrations against target, scored out of 20.
    SchemeRegistration,
    /// DMD turnover against target, scored out of 10 and gated on studded turnover.
    DmdTurnover,
}

impl Metric {
    /// All metrics, in report order.
    pub const ALL: [Metric; 5] = [
        Metric::TotalTurnover,
        Metric::StuddedTurnover,
        Metric::Dtso,
        Metric::SchemeRegistration,
        Metric::DmdTurnover,
    ];

    /// Returns the human-readable metric name.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::TotalTurnover => "Total Turnover",
            Metric::StuddedTurnover => "Studded Turnover",
            Metric::Dtso => "DTSO (AKT)",
            Metric::SchemeRegistration => "Scheme Registration",
            Metric::DmdTurnover => "DMD Turnover",
        }
    }

    /// Returns the identifier used for this metric's audit rule.
    pub fn rule_id(&self) -> &'static str {
        match self {
            Metric::TotalTurnover => "total_turnover_marks",
            Metric::StuddedTurnover => "studded_turnover_marks",
            Metric::Dtso => "dtso_marks",
            Metric::SchemeRegistration => "scheme_registration_marks",
            Metric::DmdTurnover => "dmd_turnover_marks",
        }
    }
}

/// Default achievement percentage for any metric not supplied.
pub const DEFAULT_ACHIEVEMENT_PCT: Decimal = Decimal::ONE_HUNDRED;

/// Lower bound of the percentage range offered by input controls.
pub const INPUT_RANGE_MIN_PCT: Decimal = Decimal::ZERO;

/// Upper bound of the percentage range offered by input controls.
pub const INPUT_RANGE_MAX_PCT: Decimal = Decimal::from_parts(120, 0, 0, false, 0);

fn default_achievement() -> Decimal {
    DEFAULT_ACHIEVEMENT_PCT
}

/// Parses an achievement percentage from text.
///
/// Accepts plain and scientific notation. Finite values beyond the decimal
/// range saturate to [`Decimal::MAX`] or [`Decimal::MIN`], so every finite
/// number is scored. Returns `None` for non-numeric or non-finite text.
///
/// ```
/// use incentive_engine::models::parse_achievement_pct;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_achievement_pct("92.5"), Some(Decimal::new(925, 1)));
/// assert_eq!(parse_achievement_pct("1e30"), Some(Decimal::MAX));
/// assert_eq!(parse_achievement_pct("lots"), None);
/// ```
pub fn parse_achievement_pct(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if let Ok(pct) = Decimal::from_str(raw) {
        return Some(pct);
    }
    if let Ok(pct) = Decimal::from_scientific(raw) {
        return Some(pct);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(saturating_from_f64)
}

fn saturating_from_f64(value: f64) -> Decimal {
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
        .unwrap_or_else(|| {
            if value.abs() < 1.0 {
                Decimal::ZERO
            } else if value.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            }
        })
}

struct AchievementVisitor;

impl<'de> Visitor<'de> for AchievementVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an achievement percentage as a number or numeric string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
        if value.is_finite() {
            Ok(saturating_from_f64(value))
        } else {
            Err(E::invalid_value(Unexpected::Float(value), &self))
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
        parse_achievement_pct(value).ok_or_else(|| E::invalid_value(Unexpected::Str(value), &self))
    }
}

fn deserialize_achievement<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(AchievementVisitor)
}

/// Achievement percentages for the five metrics.
///
/// Any finite value is accepted: values above 100 saturate at the top band and
/// values at or below zero fall to the lowest band. Numbers too large for a
/// [`Decimal`] are clamped to its range. Fields omitted from JSON default to 100%.
///
/// # Example
///
/// ```
/// use incentive_engine::models::MetricInput;
/// use rust_decimal::Decimal;
///
/// let input: MetricInput = serde_json::from_str(r#"{"dmd_turnover": 92.5}"#).unwrap();
/// assert_eq!(input.total_turnover, Decimal::ONE_HUNDRED);
/// assert_eq!(input.dmd_turnover, Decimal::new(925, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricInput {
    /// Total turnover achievement %.
    #[serde(default = "default_achievement", deserialize_with = "deserialize_achievement")]
    pub total_turnover: Decimal,
    /// Studded turnover achievement %.
    #[serde(default = "default_achievement", deserialize_with = "deserialize_achievement")]
    pub studded_turnover: Decimal,
    /// DTSO (AKT) achievement %.
    #[serde(default = "default_achievement", deserialize_with = "deserialize_achievement")]
    pub dtso: Decimal,
    /// Scheme registration achievement %.
    #[serde(default = "default_achievement", deserialize_with = "deserialize_achievement")]
    pub scheme_registration: Decimal,
    /// DMD turnover achievement %.
    #[serde(default = "default_achievement", deserialize_with = "deserialize_achievement")]
    pub dmd_turnover: Decimal,
}

impl MetricInput {
    /// Creates an input where every metric has the same achievement.
    pub fn uniform(pct: Decimal) -> Self {
        Self {
            total_turnover: pct,
            studded_turnover: pct,
            dtso: pct,
            scheme_registration: pct,
            dmd_turnover: pct,
        }
    }

    /// Returns the achievement percentage recorded for a metric.
    pub fn get(&self, metric: Metric) -> Decimal {
        match metric {
            Metric::TotalTurnover => self.total_turnover,
            Metric::StuddedTurnover => self.studded_turnover,
            Metric::Dtso => self.dtso,
            Metric::SchemeRegistration => self.scheme_registration,
            Metric::DmdTurnover => self.dmd_turnover,
        }
    }

    /// Returns the metrics whose value falls outside the 0-120% input range.
    ///
    /// Out-of-range values are still scored; this only lets front ends flag them.
    pub fn out_of_range_metrics(&self) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|metric| {
                let pct = self.get(*metric);
                pct < INPUT_RANGE_MIN_PCT || pct > INPUT_RANGE_MAX_PCT
            })
            .collect()
    }
}

impl Default for MetricInput {
    fn default() -> Self {
        Self::uniform(DEFAULT_ACHIEVEMENT_PCT)
    }
}
