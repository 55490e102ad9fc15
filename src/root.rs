//! Square and cube roots
//!
//! A first approximation `root(2^e) · root(m̃)` comes from two tables, one
//! indexed by the unbiased exponent and one by the top mantissa bits, along
//! with the matching Newton slope. Three Newton passes with that fixed slope
//! bring it to full precision. The argument is divided by 4 (sqrt) or 8
//! (cbrt) and the tabulated roots are halved accordingly, so squaring or
//! cubing the estimate can never overflow; the final result is doubled.

use crate::bits::{exponent, top_mantissa_index};
use crate::config::{config, use_platform};
use crate::consts::{TWO_POW_52, TWO_POW_78, TWO_POW_M26};
use crate::tables::layout::{ROOT_HI_EXPONENT_OFFSET, ROOT_LO_BITS};
use crate::tables::{RootTable, tables};

/// Operands of `hypot` above this magnitude are scaled down.
const HYPOT_MAX_MAG: f64 = 6.703903964971299e153; // 2^511
/// Scaling factor keeping `x² + y²` in the normal range.
const HYPOT_FACTOR: f64 = 5.922386521532856e225; // 2^750

// Fast inverse square root style magic numbers.
const SQRT_QUICK_MAGIC: u64 = 4606859074900000000;
const INV_SQRT_QUICK_MAGIC: i64 = 0x5FE6_EB50_C7B5_37A9;
const SQRT_QUICK_MAGIC_F32: u32 = 0x1FBD_1DF5;
const INV_SQRT_QUICK_MAGIC_F32: i32 = 0x5F37_59DF;

/// Square root.
///
/// Uses the lookup tables only when `use_redefined_sqrt` is set, the
/// platform `sqrt` otherwise. `sqrt(±0) = ±0`, negative or NaN gives NaN.
pub fn sqrt(value: f64) -> f64 {
    let cfg = config();
    if cfg.use_platform_library || !cfg.use_redefined_sqrt {
        return value.sqrt();
    }
    sqrt_from_tables(value)
}

/// Table-driven square root, relative error within about 4e-16.
pub(crate) fn sqrt_from_tables(value: f64) -> f64 {
    if !(value > 0.0) {
        return if value == 0.0 { value } else { f64::NAN };
    }
    if value == f64::INFINITY {
        return f64::INFINITY;
    }
    let (value, h) = if value < f64::MIN_POSITIVE {
        // sqrt(2^52) = 2^26
        (value * TWO_POW_52, 2.0 * TWO_POW_M26)
    } else {
        (value, 2.0)
    };

    let (mut result, slope) = seed(&tables().sqrt, value);
    let quarter = value * 0.25;
    result += (quarter - result * result) * slope;
    result += (quarter - result * result) * slope;
    h * (result + (quarter - result * result) * slope)
}

/// Cube root, odd.
///
/// `±0`, `±Infinity` and NaN are returned unchanged.
pub fn cbrt(value: f64) -> f64 {
    if use_platform() {
        return value.cbrt();
    }
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let sign = if value < 0.0 { -2.0 } else { 2.0 };
    let magnitude = value.abs();
    let (magnitude, h) = if magnitude < f64::MIN_POSITIVE {
        // cbrt(2^78) = 2^26
        (magnitude * TWO_POW_78, sign * TWO_POW_M26)
    } else {
        (magnitude, sign)
    };

    let (mut result, slope) = seed(&tables().cbrt, magnitude);
    let eighth = magnitude * 0.125;
    result += (eighth - result * result * result) * slope;
    result += (eighth - result * result * result) * slope;
    h * (result + (eighth - result * result * result) * slope)
}

/// Initial root estimate and Newton slope for a positive normal value.
#[inline]
fn seed(table: &RootTable, value: f64) -> (f64, f64) {
    let hi = (exponent(value) + ROOT_HI_EXPONENT_OFFSET) as usize;
    let lo = top_mantissa_index(value, ROOT_LO_BITS);
    (
        table.hi.get(hi) * table.lo.get(lo),
        table.hi_slope.get(hi) * table.lo_slope.get(lo),
    )
}

/// `sqrt(x² + y²)` without intermediate overflow or underflow.
///
/// Infinity wins over NaN.
pub fn hypot(x: f64, y: f64) -> f64 {
    if use_platform() {
        return x.hypot(y);
    }
    let (mut x, mut y) = (x.abs(), y.abs());
    if y < x {
        std::mem::swap(&mut x, &mut y);
    } else if !(y >= x) {
        return if x == f64::INFINITY || y == f64::INFINITY {
            f64::INFINITY
        } else {
            f64::NAN
        };
    }
    // x <= y from here on.
    if y - x == y {
        return y;
    }
    // y/x < 2^54 here, so scaling on the larger or the smaller operand keeps
    // both squares normal.
    let factor = if y > HYPOT_MAX_MAG {
        x *= 1.0 / HYPOT_FACTOR;
        y *= 1.0 / HYPOT_FACTOR;
        HYPOT_FACTOR
    } else if x < 1.0 / HYPOT_MAX_MAG {
        x *= HYPOT_FACTOR;
        y *= HYPOT_FACTOR;
        1.0 / HYPOT_FACTOR
    } else {
        1.0
    };
    factor * sqrt(x * x + y * y)
}

/// Quick square root from the bit pattern, relative error within about
/// 3.6e-2. Meaningless for negative input.
pub fn sqrt_quick(value: f64) -> f64 {
    if use_platform() {
        return value.sqrt();
    }
    f64::from_bits(value.to_bits().wrapping_add(SQRT_QUICK_MAGIC) >> 1)
}

/// Quick `1/sqrt(value)` from the bit pattern, relative error within about
/// 3.5e-2. Meaningless for negative input.
pub fn inv_sqrt_quick(value: f64) -> f64 {
    if use_platform() {
        return 1.0 / value.sqrt();
    }
    let bits = value.to_bits() as i64;
    f64::from_bits(INV_SQRT_QUICK_MAGIC.wrapping_sub(bits >> 1) as u64)
}

/// `f32` version of [`sqrt_quick`], relative error within about 4.5e-2.
pub fn sqrt_quick_f32(value: f32) -> f32 {
    if use_platform() {
        return value.sqrt();
    }
    f32::from_bits(SQRT_QUICK_MAGIC_F32.wrapping_add(value.to_bits() >> 1))
}

/// `f32` version of [`inv_sqrt_quick`], relative error within about 3.5e-2.
pub fn inv_sqrt_quick_f32(value: f32) -> f32 {
    if use_platform() {
        return 1.0 / value.sqrt();
    }
    let bits = value.to_bits() as i32;
    f32::from_bits(INV_SQRT_QUICK_MAGIC_F32.wrapping_sub(bits >> 1) as u32)
}
