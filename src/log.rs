//! Logarithms
//!
//! `log(2^e · m) = e·ln 2 + log(m̃) + log(m/m̃)` where `m̃` is the mantissa
//! truncated to its top [`LOG_BITS`] bits. `log(m̃)` and `1/m̃` are tabulated;
//! the residual ratio is within `2^-12` of one and handled by a cubic series.
//! Arguments close to one use the odd series in `z = (x-1)/(x+1)` instead, so
//! small results keep their relative accuracy.

use crate::bits::{exponent, top_mantissa_index, two_pow};
use crate::config::{config, use_platform};
use crate::consts::{INV_LOG_10, LOG_2, TWO_POW_52};
use crate::tables::layout::LOG_BITS;
use crate::tables::tables;

/// Natural logarithm.
///
/// Uses the lookup tables only when `use_redefined_log` is set, the platform
/// `ln` otherwise. `log(0) = -Infinity`, negative or NaN gives NaN.
pub fn log(value: f64) -> f64 {
    let cfg = config();
    if cfg.use_platform_library || !cfg.use_redefined_log {
        return value.ln();
    }
    log_from_tables(value)
}

/// Base-10 logarithm, `log(value) / ln 10`.
pub fn log10(value: f64) -> f64 {
    let cfg = config();
    if cfg.use_platform_library || !cfg.use_redefined_log {
        return value.log10();
    }
    log_from_tables(value) * INV_LOG_10
}

/// Table-driven natural logarithm, relative error within about 6e-15.
pub(crate) fn log_from_tables(value: f64) -> f64 {
    if !(value > 0.0) {
        return if value == 0.0 { f64::NEG_INFINITY } else { f64::NAN };
    }
    if value == f64::INFINITY {
        return f64::INFINITY;
    }

    let (value, h) = if value > 0.95 {
        if value < 1.14 {
            let z = (value - 1.0) / (value + 1.0);
            let z2 = z * z;
            return z
                * (2.0
                    + z2 * ((2.0 / 3.0)
                        + z2 * ((2.0 / 5.0)
                            + z2 * ((2.0 / 7.0) + z2 * ((2.0 / 9.0) + z2 * (2.0 / 11.0))))));
        }
        (value, 0.0)
    } else if value < f64::MIN_POSITIVE {
        (value * TWO_POW_52, -52.0 * LOG_2)
    } else {
        (value, 0.0)
    };

    let (e, index) = split(value);
    let t = tables();
    let z = residual(value, e, t.log_x_inv.get(index));
    h + e as f64 * LOG_2 + (t.log_x_log.get(index) + z)
}

/// `ln(1 + value)`, accurate for tiny `value`.
///
/// `log1p(-1) = -Infinity`, below -1 or NaN gives NaN. Always table-driven
/// unless the platform library is selected.
pub fn log1p(value: f64) -> f64 {
    if use_platform() {
        return value.ln_1p();
    }
    if !(value > -1.0) {
        return if value == -1.0 { f64::NEG_INFINITY } else { f64::NAN };
    }
    if value == f64::INFINITY {
        return f64::INFINITY;
    }

    let plus_one = 1.0 + value;
    if plus_one == 1.0 {
        return value;
    }
    if value.abs() < 0.15 {
        let z = value / (value + 2.0);
        let z2 = z * z;
        return z
            * (2.0
                + z2 * ((2.0 / 3.0)
                    + z2 * ((2.0 / 5.0)
                        + z2 * ((2.0 / 7.0)
                            + z2 * ((2.0 / 9.0) + z2 * ((2.0 / 11.0) + z2 * (2.0 / 13.0)))))));
    }

    let (e, index) = split(plus_one);
    let t = tables();
    let z = residual(plus_one, e, t.log_x_inv.get(index));
    // Rounding error of `1 + value`, first order.
    let lost = (value - (plus_one - 1.0)) / plus_one;
    e as f64 * LOG_2 + t.log_x_log.get(index) + (z + lost)
}

/// Quick natural logarithm, relative error within about 2e-3 for normal
/// positive values.
///
/// Drops the residual series of [`log`]. Subnormal inputs are handled, zero,
/// negative values and NaN give meaningless results.
pub fn log_quick(value: f64) -> f64 {
    if use_platform() {
        return value.ln();
    }
    let (value, h) = if value > 0.87 {
        if value < 1.16 {
            return 2.0 * (value - 1.0) / (value + 1.0);
        }
        (value, 0.0)
    } else if value < f64::MIN_POSITIVE {
        (value * TWO_POW_52, -52.0 * LOG_2)
    } else {
        (value, 0.0)
    };
    let (e, index) = split(value);
    h + e as f64 * LOG_2 + tables().log_x_log.get(index)
}

/// Exponent and mantissa table index of a positive normal value.
#[inline]
fn split(value: f64) -> (i32, usize) {
    (exponent(value), top_mantissa_index(value, LOG_BITS))
}

/// `log(m / m̃)` from `m / m̃ - 1`, to third order.
#[inline]
fn residual(value: f64, e: i32, inv_approx: f64) -> f64 {
    let z = (value * two_pow(-e)) * inv_approx - 1.0;
    z * (1.0 - z * (0.5 - z * (1.0 / 3.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(actual: f64, expected: f64, rtol: f64, msg: &str) {
        let tol = rtol * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tol,
            "{msg}: {actual} vs {expected} (tol {tol:e})"
        );
    }

    #[test]
    fn test_log_tables_across_magnitudes() {
        let mut x = 1e-300;
        while x < 1e300 {
            check(log_from_tables(x), libm::log(x), 2e-15, &format!("log({x})"));
            x *= 1.37;
        }
    }

    #[test]
    fn test_log_tables_near_one() {
        for k in -2000..=2000 {
            let x = 1.0 + k as f64 * 1e-4;
            let expected = libm::log(x);
            let actual = log_from_tables(x);
            assert!(
                (actual - expected).abs() <= 1e-14 * expected.abs(),
                "log({x}) = {actual} vs {expected}"
            );
        }
        assert_eq!(log_from_tables(1.0), 0.0);
    }

    #[test]
    fn test_log_tables_subnormal_and_special() {
        for &x in &[f64::from_bits(1), 1e-310, 3.3e-320, f64::MIN_POSITIVE / 3.0] {
            check(log_from_tables(x), libm::log(x), 2e-15, &format!("log({x})"));
        }
        assert_eq!(log_from_tables(0.0), f64::NEG_INFINITY);
        assert_eq!(log_from_tables(-0.0), f64::NEG_INFINITY);
        assert!(log_from_tables(-1.0).is_nan());
        assert!(log_from_tables(f64::NAN).is_nan());
        assert!(log_from_tables(f64::NEG_INFINITY).is_nan());
        assert_eq!(log_from_tables(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_log_and_log10_default_dispatch() {
        // Default configuration keeps the platform log.
        assert_eq!(log(10.0), 10f64.ln());
        assert!((log10(1000.0) - 3.0).abs() < 1e-15);
        assert_eq!(log(0.0), f64::NEG_INFINITY);
        assert!(log(-2.0).is_nan());
    }

    #[test]
    fn test_log1p() {
        let mut x = -0.999;
        while x < 5.0 {
            let expected = libm::log1p(x);
            let actual = log1p(x);
            assert!(
                (actual - expected).abs() <= 1e-14 * expected.abs(),
                "log1p({x}) = {actual} vs {expected}"
            );
            x += 0.00731;
        }
        for &x in &[1e-20, -3e-17, 2e-9, 0.1499, 0.15, -0.15, 1e10, 1e300] {
            let expected = libm::log1p(x);
            assert!(
                (log1p(x) - expected).abs() <= 1e-14 * expected.abs(),
                "log1p({x})"
            );
        }
        assert_eq!(log1p(-0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(log1p(-1.0), f64::NEG_INFINITY);
        assert!(log1p(-1.5).is_nan());
        assert!(log1p(f64::NAN).is_nan());
        assert_eq!(log1p(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_log_quick() {
        let mut x = 1e-300;
        while x < 1e300 {
            let expected = libm::log(x);
            let actual = log_quick(x);
            assert!(
                (actual - expected).abs() <= 2e-3 * expected.abs(),
                "log_quick({x}) = {actual} vs {expected}"
            );
            x *= 1.093;
        }
        assert_eq!(log_quick(1.0), 0.0);
    }
}
