//! Integer arithmetic with explicit overflow policy
//!
//! `*_exact` functions report overflow as [`Error::Overflow`], `*_bounded`
//! functions saturate to the type's range instead.

use num_traits::PrimInt;

use crate::error::{Error, Result};

/// `a + b`, or an overflow error.
pub fn add_exact<T: PrimInt>(a: T, b: T) -> Result<T> {
    a.checked_add(&b).ok_or_else(|| Error::overflow("add_exact"))
}

/// `a - b`, or an overflow error.
pub fn subtract_exact<T: PrimInt>(a: T, b: T) -> Result<T> {
    a.checked_sub(&b).ok_or_else(|| Error::overflow("subtract_exact"))
}

/// `a * b`, or an overflow error.
pub fn multiply_exact<T: PrimInt>(a: T, b: T) -> Result<T> {
    a.checked_mul(&b).ok_or_else(|| Error::overflow("multiply_exact"))
}

/// `-a`, or an overflow error for the minimum value of a signed type and
/// every non-zero value of an unsigned one.
pub fn negate_exact<T: PrimInt>(a: T) -> Result<T> {
    T::zero()
        .checked_sub(&a)
        .ok_or_else(|| Error::overflow("negate_exact"))
}

/// `a + b`, saturated.
#[inline]
pub fn add_bounded<T: PrimInt>(a: T, b: T) -> T {
    a.saturating_add(b)
}

/// `a - b`, saturated.
#[inline]
pub fn subtract_bounded<T: PrimInt>(a: T, b: T) -> T {
    a.saturating_sub(b)
}

/// `a * b`, saturated.
pub fn multiply_bounded<T: PrimInt>(a: T, b: T) -> T {
    match a.checked_mul(&b) {
        Some(product) => product,
        None if (a < T::zero()) != (b < T::zero()) => T::min_value(),
        None => T::max_value(),
    }
}

/// Narrow an `i64` to `i32`, or an overflow error.
pub fn to_int_exact(value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| Error::overflow("to_int_exact"))
}

/// Narrow an `i64` to `i32`, saturated.
#[inline]
pub fn to_int_bounded(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// `floor(log2(value))` for a strictly positive integer.
pub fn log2<T: PrimInt>(value: T) -> Result<u32> {
    if value <= T::zero() {
        return Err(Error::invalid_argument("value", "log2 requires a positive integer"));
    }
    let width = T::zero().count_zeros();
    Ok(width - 1 - value.leading_zeros())
}
