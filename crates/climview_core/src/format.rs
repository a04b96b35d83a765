//! Fixed-digit decimal formatting.
//!
//! Values are rounded from their exact binary representation. The only inputs
//! where rounding modes disagree are exact ties (e.g. `0.25` at one digit),
//! which are odd multiples of `2^-(digits + 1)`.

use serde::{Deserialize, Serialize};

/// How exact ties are resolved when formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// 0.25 -> "0.3", -0.25 -> "-0.3"
    #[default]
    HalfAwayFromZero,
    /// 0.25 -> "0.2", 0.75 -> "0.8"
    HalfEven,
}

impl RoundingMode {
    pub const ALL: [RoundingMode; 2] = [RoundingMode::HalfAwayFromZero, RoundingMode::HalfEven];

    pub fn name(&self) -> &'static str {
        match self {
            RoundingMode::HalfAwayFromZero => "half away from zero",
            RoundingMode::HalfEven => "half to even",
        }
    }
}

/// Returns `Some(k)` when `abs * 10^digits == k + 0.5` exactly.
fn exact_tie(abs: f64, digits: u32) -> Option<u64> {
    let scaled = abs * 2f64.powi(digits as i32 + 1);
    if scaled.fract() != 0.0 || scaled % 2.0 != 1.0 {
        return None;
    }
    // abs = m / 2^(digits+1) with m odd, so abs * 10^digits = m * 5^digits / 2
    let shifted = abs * 10f64.powi(digits as i32);
    if shifted >= u64::MAX as f64 {
        return None;
    }
    Some(shifted.floor() as u64)
}

fn digits_from_units(units: u64, digits: u32) -> String {
    if digits == 0 {
        return units.to_string();
    }
    let scale = 10u64.pow(digits);
    format!(
        "{}.{:0width$}",
        units / scale,
        units % scale,
        width = digits as usize
    )
}

/// Format `value` with exactly `digits` fractional digits.
///
/// Negative zero (and negative values that round to zero) keep a leading `-`
/// only when the input is strictly negative; `-0.0` prints as `0.0`.
pub fn format_fixed(value: f64, digits: u32, mode: RoundingMode) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let value = if value == 0.0 { 0.0 } else { value };
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    match exact_tie(abs, digits) {
        Some(lower) => {
            let units = match mode {
                RoundingMode::HalfAwayFromZero => lower + 1,
                RoundingMode::HalfEven if lower % 2 == 0 => lower,
                RoundingMode::HalfEven => lower + 1,
            };
            format!("{sign}{}", digits_from_units(units, digits))
        }
        None => format!("{sign}{abs:.prec$}", prec = digits as usize),
    }
}

/// Round `value` to `digits` decimal places, halves away from zero.
///
/// Uses the same correctly rounded rule as [`format_fixed`], so a value stored
/// just below a half (1.3 * 1.15 = 1.4949999999999999) rounds down.
pub fn round_to(value: f64, digits: u32) -> f64 {
    format_fixed(value, digits, RoundingMode::HalfAwayFromZero)
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed_plain_values() {
        let mode = RoundingMode::default();
        assert_eq!(format_fixed(1.6, 1, mode), "1.6");
        assert_eq!(format_fixed(32.0, 1, mode), "32.0");
        assert_eq!(format_fixed(0.04, 1, mode), "0.0");
        assert_eq!(format_fixed(1.234, 2, mode), "1.23");
        assert_eq!(format_fixed(7.0, 0, mode), "7");
    }

    #[test]
    fn test_format_fixed_negative_values() {
        let mode = RoundingMode::default();
        assert_eq!(format_fixed(-1.26, 1, mode), "-1.3");
        assert_eq!(format_fixed(-0.04, 1, mode), "-0.0");
        assert_eq!(format_fixed(-0.0, 1, mode), "0.0");
    }

    #[test]
    fn test_exact_ties_follow_mode() {
        assert_eq!(format_fixed(0.25, 1, RoundingMode::HalfAwayFromZero), "0.3");
        assert_eq!(format_fixed(0.25, 1, RoundingMode::HalfEven), "0.2");
        assert_eq!(format_fixed(0.75, 1, RoundingMode::HalfAwayFromZero), "0.8");
        assert_eq!(format_fixed(0.75, 1, RoundingMode::HalfEven), "0.8");
        assert_eq!(format_fixed(-0.25, 1, RoundingMode::HalfAwayFromZero), "-0.3");
        assert_eq!(format_fixed(-0.25, 1, RoundingMode::HalfEven), "-0.2");
        assert_eq!(format_fixed(2.5, 0, RoundingMode::HalfEven), "2");
        assert_eq!(format_fixed(2.5, 0, RoundingMode::HalfAwayFromZero), "3");
        assert_eq!(format_fixed(0.125, 2, RoundingMode::HalfEven), "0.12");
        assert_eq!(format_fixed(0.125, 2, RoundingMode::HalfAwayFromZero), "0.13");
    }

    #[test]
    fn test_near_ties_are_not_ties() {
        // 0.35 is stored as 0.34999999999999997779...
        for mode in RoundingMode::ALL {
            assert_eq!(format_fixed(0.35, 1, mode), "0.3");
            // 0.15 is stored as 0.1499999999999999944...
            assert_eq!(format_fixed(0.15, 1, mode), "0.1");
        }
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.1 * 1.3, 2), 1.43);
        assert_eq!(round_to(0.2 * 1.4, 2), 0.28);
        assert_eq!(round_to(1.6, 2), 1.6);
        assert_eq!(round_to(-1.005, 0), -1.0);
    }

    #[test]
    fn test_round_to_agrees_with_format_fixed() {
        let below_half = 1.3 * 1.15;
        assert_eq!(below_half, 1.4949999999999999);
        assert_eq!(round_to(below_half, 2), 1.49);
        assert_eq!(format_fixed(below_half, 2, RoundingMode::default()), "1.49");

        // Exact ties still go away from zero
        assert_eq!(round_to(0.25, 1), 0.3);
        assert_eq!(round_to(-0.25, 1), -0.3);
        assert_eq!(round_to(0.125, 2), 0.13);
    }
}
