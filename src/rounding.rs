//! Rounding and neighbor primitives, generic over [`FloatBits`]
//!
//! All of these are exact. Values with `|x| >= 2^MANTISSA_BITS` are already
//! integers and pass through the rounding functions unchanged, as do NaN and
//! infinities.

use num_traits::One;

use crate::bits::{copy_sign, exponent};
use crate::float::FloatBits;

/// `2^MANTISSA_BITS`: the smallest magnitude at which every value is an
/// integer.
#[inline]
fn integer_threshold<F: FloatBits>() -> F {
    F::two_pow(F::MANTISSA_BITS as i32)
}

/// Largest integer value not greater than `value`. `floor(-0.0) = -0.0`.
pub fn floor<F: FloatBits>(value: F) -> F {
    if !(value.abs() < integer_threshold::<F>()) {
        return value;
    }
    let truncated = value.truncate_small();
    if truncated > value {
        truncated - F::one()
    } else if truncated == F::zero() {
        copy_sign(truncated, value)
    } else {
        truncated
    }
}

/// Smallest integer value not less than `value`. `ceil(-0.5) = -0.0`.
pub fn ceil<F: FloatBits>(value: F) -> F {
    if !(value.abs() < integer_threshold::<F>()) {
        return value;
    }
    let truncated = value.truncate_small();
    if truncated < value {
        truncated + F::one()
    } else if truncated == F::zero() {
        copy_sign(truncated, value)
    } else {
        truncated
    }
}

/// Nearest integer, ties toward positive infinity: `round(-2.5) = -2`.
///
/// NaN gives 0, out of range values saturate.
#[inline]
pub fn round<F: FloatBits>(value: F) -> F::Int {
    value.round_half_up()
}

/// Nearest integer, ties to even. NaN gives 0, out of range values
/// saturate.
#[inline]
pub fn round_even<F: FloatBits>(value: F) -> F::Int {
    rint(value).to_int_saturating()
}

/// Nearest integer value as a float, ties to even. Keeps the sign of zero
/// results: `rint(-0.4) = -0.0`.
pub fn rint<F: FloatBits>(value: F) -> F {
    let threshold = integer_threshold::<F>();
    if !(value.abs() < threshold) {
        return value;
    }
    // Adding 2^MANTISSA_BITS leaves no fraction bits: the sum is rounded to
    // an integer by the FPU, ties to even.
    let rounded = (value.abs() + threshold) - threshold;
    copy_sign(rounded, value)
}

/// `-1`, `+1` with the sign of `value`; `±0` and NaN are returned unchanged.
pub fn signum<F: FloatBits>(value: F) -> F {
    if value == F::zero() || value.is_nan() {
        value
    } else {
        copy_sign(F::one(), value)
    }
}

/// Smallest value greater than `value`.
///
/// `next_up(±0)` is the smallest positive subnormal, `+Infinity` and NaN are
/// returned unchanged.
pub fn next_up<F: FloatBits>(value: F) -> F {
    if value.is_nan() || value == F::infinity() {
        return value;
    }
    if value == F::zero() {
        return F::from_raw_bits(F::Bits::one());
    }
    let bits = value.to_raw_bits();
    if value > F::zero() {
        F::from_raw_bits(bits + F::Bits::one())
    } else {
        F::from_raw_bits(bits - F::Bits::one())
    }
}

/// Largest value less than `value`.
///
/// `next_down(±0)` is the negative subnormal closest to zero,
/// `-Infinity` and NaN are returned unchanged.
pub fn next_down<F: FloatBits>(value: F) -> F {
    if value.is_nan() || value == F::neg_infinity() {
        return value;
    }
    if value == F::zero() {
        return F::from_raw_bits(F::SIGN_MASK | F::Bits::one());
    }
    let bits = value.to_raw_bits();
    if value > F::zero() {
        F::from_raw_bits(bits - F::Bits::one())
    } else {
        F::from_raw_bits(bits + F::Bits::one())
    }
}

/// Distance from `|value|` to the next larger magnitude.
///
/// Zero and subnormals give the smallest subnormal, infinities give
/// `+Infinity`, NaN gives NaN.
pub fn ulp<F: FloatBits>(value: F) -> F {
    let e = exponent(value);
    if e > F::MAX_EXPONENT {
        return if value.is_nan() { value } else { F::infinity() };
    }
    if e < F::MIN_NORMAL_EXPONENT {
        return F::two_pow(F::MIN_EXPONENT);
    }
    F::two_pow(e - F::MANTISSA_BITS as i32)
}

/// `value · 2^scale`, rounded once.
///
/// Large scales are applied in up to three normal steps; downward steps
/// stop `MANTISSA_BITS + 1` binades above the subnormal range so the only
/// rounding happens on the last multiply.
pub fn scalb<F: FloatBits>(value: F, scale: i32) -> F {
    let max_step = F::MAX_EXPONENT;
    let min_step = F::MIN_NORMAL_EXPONENT;
    let down_step = F::MIN_NORMAL_EXPONENT + F::MANTISSA_BITS as i32 + 1;

    let mut n = scale;
    let mut y = value;
    if n > max_step {
        y = y * F::two_pow(max_step);
        n -= max_step;
        if n > max_step {
            y = y * F::two_pow(max_step);
            n = (n - max_step).min(max_step);
        }
    } else if n < min_step {
        y = y * F::two_pow(down_step);
        n -= down_step;
        if n < min_step {
            y = y * F::two_pow(down_step);
            n = (n - down_step).max(min_step);
        }
    }
    y * F::two_pow(n)
}
