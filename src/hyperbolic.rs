//! Hyperbolic functions and their inverses
//!
//! Everything is composed from [`exp`], [`expm1`], [`log`] and [`log1p`],
//! choosing for each magnitude the identity that avoids cancellation:
//! `expm1` forms near zero, plain `exp` for large arguments, and a split
//! `exp(x/2)²` where `exp(x)` alone would overflow.

use crate::config::use_platform;
use crate::consts::{
    LOG_2, LOG_DOUBLE_MAX_VALUE, LOG_TWO_POW_27, TWO_POW_28, TWO_POW_M27, TWO_POW_M28, TWO_POW_M55,
};
use crate::exp::{exp, expm1};
use crate::log::{log, log1p};
use crate::root::sqrt;

/// Past this, `tanh` rounds to ±1.
const TANH_ONE_THRESHOLD: f64 = 19.061547465398498;
/// Below this, `asinh` goes through `log1p` of a series.
const ASINH_LOG1P_THRESHOLD: f64 = 0.04;
/// Past this, `sqrt(x² ± 1)` rounds to `x`.
const SQRT_ELISION_THRESHOLD: f64 = TWO_POW_28;

/// Splits off the sign: `(|value|, negative)`. NaN and `-0.0` count as
/// non-negative, so they flow through unchanged.
#[inline]
fn strip_sign(value: f64) -> (f64, bool) {
    if value < 0.0 { (-value, true) } else { (value, false) }
}

/// Hyperbolic sine.
pub fn sinh(value: f64) -> f64 {
    if use_platform() {
        return value.sinh();
    }
    let (x, negative) = strip_sign(value);
    let h = if negative { -0.5 } else { 0.5 };
    if x < 22.0 {
        if x < TWO_POW_M28 {
            return value;
        }
        // (e^x - e^-x)/2 with t = e^x - 1: (t + t/(t+1))/2
        let t = expm1(x);
        h * (t + t / (t + 1.0))
    } else if x < LOG_DOUBLE_MAX_VALUE {
        h * exp(x)
    } else {
        let t = exp(x * 0.5);
        (h * t) * t
    }
}

/// Hyperbolic cosine.
pub fn cosh(value: f64) -> f64 {
    if use_platform() {
        return value.cosh();
    }
    let (x, _) = strip_sign(value);
    if x < LOG_TWO_POW_27 {
        if x < TWO_POW_M27 {
            return 1.0;
        }
        let t = exp(x);
        0.5 * (t + 1.0 / t)
    } else if x < LOG_DOUBLE_MAX_VALUE {
        0.5 * exp(x)
    } else {
        let t = exp(x * 0.5);
        (0.5 * t) * t
    }
}

/// `cosh(value) - 1`, accurate near zero.
pub fn cosh_m1(value: f64) -> f64 {
    if use_platform() {
        return value.cosh() - 1.0;
    }
    let (x, _) = strip_sign(value);
    if x < LOG_TWO_POW_27 {
        if x < TWO_POW_M27 {
            if x == 0.0 {
                return 0.0;
            }
            return 0.5 * x * x;
        }
        // (expm1(x) + expm1(-x))/2 = t²/(2(t+1))
        let t = expm1(x);
        (t * t) / (t + t + 2.0)
    } else if x < LOG_DOUBLE_MAX_VALUE {
        0.5 * exp(x) - 1.0
    } else {
        let t = exp(x * 0.5);
        (0.5 * t) * t
    }
}

/// `(sinh(value), cosh(value))`, sharing the exponentials.
pub fn sinh_and_cosh(value: f64) -> (f64, f64) {
    if use_platform() {
        return (value.sinh(), value.cosh());
    }
    let (x, negative) = strip_sign(value);
    let h = if negative { -0.5 } else { 0.5 };
    if x < LOG_TWO_POW_27 {
        let sine = if x < TWO_POW_M28 {
            value
        } else {
            let t = expm1(x);
            h * (t + t / (t + 1.0))
        };
        let cosine = if x < TWO_POW_M27 {
            1.0
        } else {
            let t = exp(x);
            0.5 * (t + 1.0 / t)
        };
        (sine, cosine)
    } else if x < LOG_DOUBLE_MAX_VALUE {
        let sine = h * exp(x);
        (sine, sine.abs())
    } else {
        let t = exp(x * 0.5);
        let sine = (h * t) * t;
        (sine, sine.abs())
    }
}

/// Hyperbolic tangent, exactly ±1 past 19.06.
pub fn tanh(value: f64) -> f64 {
    if use_platform() {
        return value.tanh();
    }
    let (x, negative) = strip_sign(value);
    let z = if x < TANH_ONE_THRESHOLD {
        if x < TWO_POW_M55 {
            return value;
        }
        if x >= 1.0 {
            1.0 - 2.0 / (expm1(x + x) + 2.0)
        } else {
            let t = expm1(-(x + x));
            -t / (t + 2.0)
        }
    } else if x.is_nan() {
        f64::NAN
    } else {
        1.0
    };
    if negative { -z } else { z }
}

/// Inverse hyperbolic sine.
pub fn asinh(value: f64) -> f64 {
    if use_platform() {
        return value.asinh();
    }
    let (x, negative) = strip_sign(value);
    if x < TWO_POW_M28 {
        // asinh(x) rounds to x; also keeps the sign of zero.
        return value;
    }
    let result = if x < ASINH_LOG1P_THRESHOLD {
        // log1p(x + sqrt(1+x²) - 1), binomial series of sqrt(1+u) - 1.
        let u = x * x;
        let arg = x
            + u * (1.0 / 2.0
                - u * (1.0 / 8.0 - u * (1.0 / 16.0 - u * (5.0 / 128.0 - u * (7.0 / 256.0)))));
        log1p(arg)
    } else if x < SQRT_ELISION_THRESHOLD {
        log(x + sqrt(x * x + 1.0))
    } else {
        LOG_2 + log(x)
    };
    if negative { -result } else { result }
}

/// Inverse hyperbolic cosine: NaN below 1, 0 at 1.
pub fn acosh(value: f64) -> f64 {
    if use_platform() {
        return value.acosh();
    }
    if !(value > 1.0) {
        return if value == 1.0 { 0.0 } else { f64::NAN };
    }
    if value < 2.0 {
        // Exact for values in [1, 2].
        acosh1p_finite(value - 1.0)
    } else if value < SQRT_ELISION_THRESHOLD {
        log(value + sqrt(value * value - 1.0))
    } else {
        LOG_2 + log(value)
    }
}

/// `acosh(1 + value)`, accurate for tiny `value`.
///
/// NaN below 0, `acosh1p(±0) = ±0`.
pub fn acosh1p(value: f64) -> f64 {
    if use_platform() {
        return (1.0 + value).acosh();
    }
    if !(value > 0.0) {
        return if value < 0.0 { f64::NAN } else { value };
    }
    acosh1p_finite(value)
}

#[inline]
fn acosh1p_finite(value: f64) -> f64 {
    if value < SQRT_ELISION_THRESHOLD - 1.0 {
        // log((1+x) + sqrt((1+x)² - 1))
        log1p(value + sqrt(value * (2.0 + value)))
    } else {
        LOG_2 + log(1.0 + value)
    }
}

/// Inverse hyperbolic tangent: ±Infinity at ±1, NaN beyond.
pub fn atanh(value: f64) -> f64 {
    if use_platform() {
        return value.atanh();
    }
    let (x, negative) = strip_sign(value);
    let result = if !(x < 1.0) {
        if x == 1.0 { f64::INFINITY } else { f64::NAN }
    } else {
        // 0.5·ln((1+x)/(1-x)) = 0.5·log1p(2x/(1-x))
        0.5 * log1p((x + x) / (1.0 - x))
    };
    if negative { -result } else { result }
}
