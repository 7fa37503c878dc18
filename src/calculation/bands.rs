//! Threshold band lookup shared by every scoring rule.
//!
//! Every chart in the scoring scheme is a list of closed lower bounds checked
//! from highest to lowest; the first bound the value reaches wins, and values
//! below every bound take the fallback.

use rust_decimal::Decimal;

/// A closed lower bound and the value awarded from it upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band<T> {
    /// The inclusive lower bound of the band.
    pub threshold: Decimal,
    /// The value awarded when the input reaches the threshold.
    pub value: T,
}

/// Builds a non-negative decimal at compile time, e.g. `dec(125, 1)` is 12.5.
pub(crate) const fn dec(num: u32, scale: u32) -> Decimal {
    Decimal::from_parts(num, 0, 0, false, scale)
}

/// Returns the value of the first band whose threshold `input` reaches.
///
/// `bands` must be ordered by descending threshold.
///
/// # Examples
///
/// ```
/// use incentive_engine::calculation::{Band, first_match};
/// use rust_decimal::Decimal;
///
/// let bands = [
///     Band { threshold: Decimal::new(90, 0), value: "high" },
///     Band { threshold: Decimal::new(50, 0), value: "mid" },
/// ];
///
/// assert_eq!(first_match(Decimal::new(95, 0), &bands, "low"), "high");
/// assert_eq!(first_match(Decimal::new(50, 0), &bands, "low"), "mid");
/// assert_eq!(first_match(Decimal::new(-3, 0), &bands, "low"), "low");
/// ```
pub fn first_match<T: Copy>(input: Decimal, bands: &[Band<T>], fallback: T) -> T {
    debug_assert!(
        bands.windows(2).all(|w| w[0].threshold > w[1].threshold),
        "bands must be ordered by strictly descending threshold"
    );

    bands
        .iter()
        .find(|band| input >= band.threshold)
        .map(|band| band.value)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    const BANDS: [Band<u8>; 3] = [
        Band { threshold: dec(100, 0), value: 3 },
        Band { threshold: dec(90, 0), value: 2 },
        Band { threshold: dec(755, 1), value: 1 },
    ];

    #[test]
    fn test_dec_builds_scaled_values() {
        assert_eq!(dec(125, 1), d("12.5"));
        assert_eq!(dec(40, 0), d("40"));
        assert_eq!(dec(0, 0), Decimal::ZERO);
    }

    #[test]
    fn test_lower_bound_is_inclusive() {
        assert_eq!(first_match(d("90"), &BANDS, 0), 2);
        assert_eq!(first_match(d("75.5"), &BANDS, 0), 1);
    }

    #[test]
    fn test_just_below_bound_takes_lower_band() {
        assert_eq!(first_match(d("89.999"), &BANDS, 0), 1);
        assert_eq!(first_match(d("75.49"), &BANDS, 0), 0);
    }

    #[test]
    fn test_above_top_band_saturates() {
        assert_eq!(first_match(d("1000"), &BANDS, 0), 3);
    }

    #[test]
    fn test_empty_bands_return_fallback() {
        let bands: [Band<u8>; 0] = [];
        assert_eq!(first_match(d("50"), &bands, 7), 7);
    }
}
