//! Powers
//!
//! `pow(x, y) = exp(y · log(x))` for positive `x`. Non-positive bases need
//! the parity of `y` to pick the sign and the domain of the result.

use crate::config::use_platform;
use crate::consts::TWO_POW_53;
use crate::exp::exp;
use crate::log::{log, log_quick};

/// How an exponent behaves for a non-positive base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parity {
    Even,
    Odd,
    NotInteger,
}

impl Parity {
    /// `None` for NaN.
    fn of(power: f64) -> Option<Self> {
        if power.abs() >= TWO_POW_53 {
            // The units bit is past the mantissa, so always 0.
            return Some(Self::Even);
        }
        if power.is_nan() {
            return None;
        }
        let truncated = power as i64;
        Some(if truncated as f64 != power {
            Self::NotInteger
        } else if truncated & 1 == 0 {
            Self::Even
        } else {
            Self::Odd
        })
    }
}

/// `value^power`.
///
/// `pow(x, 0) = 1` for any `x` including NaN, `pow(x, 1) = x`. Negative
/// bases only accept integer powers (NaN otherwise). Zero and `-Infinity`
/// bases follow the usual real-power sign rules. Relative error grows with
/// `|power · ln(value)|`, about 1e-15 times that magnitude.
pub fn pow(value: f64, power: f64) -> f64 {
    if use_platform() {
        return value.powf(power);
    }
    if power == 0.0 {
        return 1.0;
    }
    if power == 1.0 {
        return value;
    }
    if !(value <= 0.0) {
        // Positive or NaN.
        return exp(power * log(value));
    }

    let Some(parity) = Parity::of(power) else {
        return f64::NAN;
    };
    if value == 0.0 {
        return match (power < 0.0, parity) {
            (true, Parity::Odd) => 1.0 / value,
            (true, _) => f64::INFINITY,
            (false, Parity::Odd) => value,
            (false, _) => 0.0,
        };
    }
    if value == f64::NEG_INFINITY {
        return match (power < 0.0, parity) {
            (true, Parity::Odd) => -0.0,
            (false, Parity::Odd) => f64::NEG_INFINITY,
            (true, _) => 0.0,
            (false, _) => f64::INFINITY,
        };
    }
    match parity {
        Parity::NotInteger => f64::NAN,
        Parity::Even => exp(power * log(-value)),
        Parity::Odd => -exp(power * log(-value)),
    }
}

/// Quick `value^power` for positive `value`, through [`log_quick`].
///
/// Relative error within about 4e-3 while `|power · ln(value)| <= 2`,
/// proportionally worse beyond.
pub fn pow_quick(value: f64, power: f64) -> f64 {
    if use_platform() {
        return value.powf(power);
    }
    exp(power * log_quick(value))
}

/// `value^power` for an integer power, by repeated squaring.
///
/// Exact for small powers of exactly representable results; the error
/// otherwise grows like `log2(|power|)` ULPs.
pub fn pow_int(value: f64, power: i32) -> f64 {
    if use_platform() {
        return value.powi(power);
    }
    if power < 0 {
        if power == i32::MIN {
            // -i32::MIN overflows.
            return 1.0 / (pow_int(value, i32::MAX) * value);
        }
        return 1.0 / pow_int(value, -power);
    }
    let mut base = value;
    let mut remaining = power;
    let mut result = 1.0;
    while remaining > 1 {
        if remaining & 1 != 0 {
            result *= base;
        }
        base *= base;
        remaining >>= 1;
    }
    if remaining == 1 { result * base } else { result }
}

/// `value²`
#[inline]
pub fn pow2(value: f64) -> f64 {
    value * value
}

/// `value³`
#[inline]
pub fn pow3(value: f64) -> f64 {
    value * value * value
}
