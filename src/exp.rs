//! Exponentials
//!
//! `exp(x) = exp(⌊x⌋) · exp(z) · exp(ε)` where `⌊x⌋` is the integer part
//! (truncated toward zero), `z` the fraction rounded down to a multiple of
//! 1/1024 and `ε < 1/1024` what is left. The first two factors come from
//! tables, the last one from a short Taylor series.

use crate::config::use_platform;
use crate::consts::{ONE_DIV_F2, ONE_DIV_F3, ONE_DIV_F4, ONE_DIV_F5};
use crate::tables::layout::{
    EXP_LO_INDEXING, EXP_LO_INDEXING_DIV_SHIFT, EXP_LO_TAB_MID_INDEX, EXP_MIN_INT_LIMIT,
    EXP_OVERFLOW_LIMIT, EXP_UNDERFLOW_LIMIT,
};
use crate::tables::tables;

/// Below this the integer-part factor would be subnormal.
const EXP_MIN_NORMAL_HI: f64 = -708.0;
/// Shift applied to arguments whose result is subnormal.
const EXP_SUBNORMAL_SHIFT: i32 = 64;

// Schraudolph: 2^20/ln(2), and 1023·2^20 minus the error-balancing offset.
const EXP_QUICK_A: f64 = 1512775.3951951856;
const EXP_QUICK_B: f64 = 1072632447.0;

/// `e^value`.
///
/// `+Infinity` above 709.78, `+0` below -745.13, NaN for NaN. Subnormal
/// results keep their full available precision.
pub fn exp(value: f64) -> f64 {
    if use_platform() {
        return value.exp();
    }
    if value > EXP_OVERFLOW_LIMIT {
        return f64::INFINITY;
    }
    if !(value >= EXP_UNDERFLOW_LIMIT) {
        return if value.is_nan() { f64::NAN } else { 0.0 };
    }
    if value < EXP_MIN_NORMAL_HI {
        // exp(x) = exp(x + 64) · exp(-64), so the rounding into the subnormal
        // range happens once, on the final product.
        let shift = EXP_SUBNORMAL_SHIFT;
        let scale = tables().exp_hi.get((-shift - EXP_MIN_INT_LIMIT) as usize);
        return exp_in_range(value + shift as f64) * scale;
    }
    exp_in_range(value)
}

/// `e^value` for `value` in `[-745.13, 709.78]`.
#[inline]
fn exp_in_range(value: f64) -> f64 {
    let t = tables();
    let indexes = (value * EXP_LO_INDEXING) as i32;
    // Integer part, truncated toward zero like `indexes`.
    let value_int = if indexes >= 0 {
        indexes >> EXP_LO_INDEXING_DIV_SHIFT
    } else {
        -((-indexes) >> EXP_LO_INDEXING_DIV_SHIFT)
    };
    let hi_term = t.exp_hi.get((value_int - EXP_MIN_INT_LIMIT) as usize);

    let z_index = indexes - (value_int << EXP_LO_INDEXING_DIV_SHIFT);
    let y = value - value_int as f64;
    let z = z_index as f64 * (1.0 / EXP_LO_INDEXING);
    let eps = y - z;
    let exp_z = t.exp_lo_pos.get((z_index + EXP_LO_TAB_MID_INDEX) as usize);
    let exp_eps = 1.0 + eps * (1.0 + eps * (ONE_DIV_F2 + eps * (ONE_DIV_F3 + eps * ONE_DIV_F4)));
    hi_term * (exp_z * exp_eps)
}

/// Quick `e^value`, relative error within about 4e-2.
///
/// Builds the result's bit pattern directly from a linear function of
/// `value`; only meaningful for `|value| < ~700`. NaN gives NaN.
///
/// Outside that range the bit pattern saturates into garbage: values above
/// ~709 give NaN and values below ~-708 give huge negative numbers.
pub fn exp_quick(value: f64) -> f64 {
    if use_platform() {
        return value.exp();
    }
    if value.is_nan() {
        return value;
    }
    let hi_word = (EXP_QUICK_A * value + EXP_QUICK_B) as i32;
    f64::from_bits(((hi_word as i64) << 32) as u64)
}

/// `e^value - 1`, accurate near 0.
///
/// `expm1(±0) = ±0`; -1 toward -Infinity.
pub fn expm1(value: f64) -> f64 {
    if use_platform() {
        return value.exp_m1();
    }
    if value.abs() < 1.0 {
        if value == 0.0 {
            return value;
        }
        // e^x - 1 = e^a · ((1 - e^-a) + e^δ - 1), a = i/1024 tabulated.
        let t = tables();
        let i = (value * EXP_LO_INDEXING) as i32;
        let delta = value - i as f64 * (1.0 / EXP_LO_INDEXING);
        let slot = (i + EXP_LO_TAB_MID_INDEX) as usize;
        t.exp_lo_pos.get(slot)
            * (t.exp_lo_neg.get(slot)
                + delta
                    * (1.0
                        + delta
                            * (ONE_DIV_F2
                                + delta * (ONE_DIV_F3 + delta * (ONE_DIV_F4 + delta * ONE_DIV_F5)))))
    } else {
        exp(value) - 1.0
    }
}
