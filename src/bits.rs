//! Bit-level access to IEEE-754 values
//!
//! Exact, branch-light extraction of sign and exponent fields, raw bit
//! round-trips and construction of powers of two. Everything here is a total
//! function over all bit patterns: no rounding, no allocation.
//!
//! The `f64` word helpers (`hi_word`, `clear_lo_word`, ...) are the building blocks
//! used by the table-driven evaluators to slice a double into exponent and
//! top-mantissa indexes.

use num_traits::Zero;

use crate::float::FloatBits;

/// Unbiased binary exponent of `value`.
///
/// For normal values this is `floor(log2(|value|))`. Zero and subnormal values
/// give `MIN_NORMAL_EXPONENT - 1` (-1023 for `f64`, -127 for `f32`), infinity
/// and NaN give `MAX_EXPONENT + 1` (1024 / 128).
#[inline]
pub fn exponent<F: FloatBits>(value: F) -> i32 {
    value.biased_exponent() - F::EXPONENT_BIAS
}

/// `-1` if the sign bit of `value` is set, else `1`.
///
/// Never returns 0: `-0.0` gives `-1` and NaN follows its sign bit.
#[inline]
pub fn sign_bit<F: FloatBits>(value: F) -> i32 {
    if is_negative_bits(value) { -1 } else { 1 }
}

/// `true` when the sign bit is set (including `-0.0` and negative NaNs).
#[inline]
pub fn is_negative_bits<F: FloatBits>(value: F) -> bool {
    value.to_raw_bits() & F::SIGN_MASK != F::Bits::zero()
}

/// Raw bit pattern of `value`, NaN payload and zero sign preserved.
#[inline]
pub fn to_raw_bits<F: FloatBits>(value: F) -> F::Bits {
    value.to_raw_bits()
}

/// Float with the given raw bit pattern.
#[inline]
pub fn from_raw_bits<F: FloatBits>(bits: F::Bits) -> F {
    F::from_raw_bits(bits)
}

/// `|value|` computed by clearing the sign bit (NaN payload kept).
#[inline]
pub fn abs_bits<F: FloatBits>(value: F) -> F {
    F::from_raw_bits(value.to_raw_bits() & !F::SIGN_MASK)
}

/// `magnitude` with the sign bit of `sign`.
#[inline]
pub fn copy_sign<F: FloatBits>(magnitude: F, sign: F) -> F {
    let m = magnitude.to_raw_bits() & !F::SIGN_MASK;
    let s = sign.to_raw_bits() & F::SIGN_MASK;
    F::from_raw_bits(m | s)
}

/// Exact `2^power` as `f64`.
///
/// Subnormal for `power` in `[-1074, -1023]`, `0.0` below, `+Infinity` above
/// 1023.
#[inline]
pub fn two_pow(power: i32) -> f64 {
    <f64 as FloatBits>::two_pow(power)
}

/// Exact `2^power` as `f32`.
#[inline]
pub fn two_pow_f32(power: i32) -> f32 {
    <f32 as FloatBits>::two_pow(power)
}

/// High 32 bits of a double, as a signed word.
#[inline]
pub(crate) fn hi_word(value: f64) -> i32 {
    (value.to_bits() >> 32) as i32
}

/// Double with the low 32 bits cleared.
#[inline]
pub(crate) fn clear_lo_word(value: f64) -> f64 {
    f64::from_bits(value.to_bits() & 0xFFFF_FFFF_0000_0000)
}

/// Index of the `bits` most significant stored mantissa bits of a double.
#[inline]
pub(crate) fn top_mantissa_index(value: f64, bits: u32) -> usize {
    ((value.to_bits() & <f64 as FloatBits>::MANTISSA_MASK) >> (52 - bits)) as usize
}
