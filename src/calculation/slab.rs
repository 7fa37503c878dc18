//! Slab classification.
//!
//! Maps a total score to one of the six incentive slabs. Every score, including
//! negative and fractional ones, falls into exactly one slab.

use rust_decimal::Decimal;

use crate::models::Slab;

use super::bands::{Band, dec, first_match};

const SLAB_BANDS: [Band<Slab>; 5] = [
    Band { threshold: dec(100, 0), value: Slab::HundredPlus },
    Band { threshold: dec(90, 0), value: Slab::NinetyToNinetyNine },
    Band { threshold: dec(80, 0), value: Slab::EightyToEightyNine },
    Band { threshold: dec(70, 0), value: Slab::SeventyToSeventyNine },
    Band { threshold: dec(60, 0), value: Slab::SixtyToSixtyNine },
];

/// Classifies a total score into its incentive slab.
///
/// # Examples
///
/// ```
/// use incentive_engine::calculation::classify_slab;
/// use incentive_engine::models::Slab;
/// use rust_decimal::Decimal;
///
/// assert_eq!(classify_slab(Decimal::new(60, 0)), Slab::SixtyToSixtyNine);
/// assert_eq!(classify_slab(Decimal::new(59999, 3)), Slab::BelowSixty);
/// ```
pub fn classify_slab(score: Decimal) -> Slab {
    first_match(score, &SLAB_BANDS, Slab::BelowSixty)
}

/// Returns the inclusive lower bound of a slab, or `None` for the open bottom slab.
pub fn slab_lower_bound(slab: Slab) -> Option<Decimal> {
    SLAB_BANDS
        .iter()
        .find(|band| band.value == slab)
        .map(|band| band.threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_slab_lower_edges_are_inclusive() {
        assert_eq!(classify_slab(dec("100")), Slab::HundredPlus);
        assert_eq!(classify_slab(dec("90")), Slab::NinetyToNinetyNine);
        assert_eq!(classify_slab(dec("80")), Slab::EightyToEightyNine);
        assert_eq!(classify_slab(dec("70")), Slab::SeventyToSeventyNine);
        assert_eq!(classify_slab(dec("60.0")), Slab::SixtyToSixtyNine);
    }

    #[test]
    fn test_slab_just_below_edges() {
        assert_eq!(classify_slab(dec("99.5")), Slab::NinetyToNinetyNine);
        assert_eq!(classify_slab(dec("89.999")), Slab::EightyToEightyNine);
        assert_eq!(classify_slab(dec("59.999")), Slab::BelowSixty);
    }

    #[test]
    fn test_slab_extremes() {
        assert_eq!(classify_slab(dec("110")), Slab::HundredPlus);
        assert_eq!(classify_slab(dec("0")), Slab::BelowSixty);
        assert_eq!(classify_slab(dec("-1")), Slab::BelowSixty);
    }

    #[test]
    fn test_slab_lower_bounds() {
        assert_eq!(slab_lower_bound(Slab::HundredPlus), Some(dec("100")));
        assert_eq!(slab_lower_bound(Slab::SixtyToSixtyNine), Some(dec("60")));
        assert_eq!(slab_lower_bound(Slab::BelowSixty), None);
    }

    #[test]
    fn test_every_slab_is_reachable_from_its_lower_bound() {
        for slab in Slab::ALL {
            let score = slab_lower_bound(slab).unwrap_or(Decimal::ZERO);
            assert_eq!(classify_slab(score), slab);
        }
    }
}
