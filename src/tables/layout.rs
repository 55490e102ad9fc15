//! Sizes, steps and indexers of every lookup table
//!
//! Argument-indexed tables have `2^n + 1` slots so both ends of the covered
//! interval (and special angles like π/2) fall exactly on a slot. Mantissa
//! indexed tables have `2^n` slots.

use crate::consts::{PIO2_HI, PIO2_LO, TWO_PI_HI, TWO_PI_LO};

/// Largest index allowed in `i * DELTA_HI` products so they stay exact.
const MAX_EXACT_INDEX: f64 = ((1 << 20) - 1) as f64;

// ============================================================================
// Sine / cosine: [0, 2π]
// ============================================================================

pub(crate) const SIN_COS_TABS_SIZE: usize = (1 << 11) + 1;
pub(crate) const SIN_COS_DELTA_HI: f64 = TWO_PI_HI / (SIN_COS_TABS_SIZE - 1) as f64;
pub(crate) const SIN_COS_DELTA_LO: f64 = TWO_PI_LO / (SIN_COS_TABS_SIZE - 1) as f64;
pub(crate) const SIN_COS_INDEXER: f64 = 1.0 / (SIN_COS_DELTA_HI + SIN_COS_DELTA_LO);
/// Above this, table indexes would exceed 20 bits and need reduction first.
pub(crate) const SIN_COS_MAX_VALUE_FOR_INT_MODULO: f64 = MAX_EXACT_INDEX / SIN_COS_INDEXER;

// ============================================================================
// Tangent: [0, π/2] virtually, stored up to 77 degrees
// ============================================================================

pub(crate) const TAN_VIRTUAL_TABS_SIZE: usize = (1 << 12) + 1;
/// Highest virtual index: the slot of π/2.
pub(crate) const TAN_HALF_PI_INDEX: i32 = (TAN_VIRTUAL_TABS_SIZE - 1) as i32;
pub(crate) const TAN_DELTA_HI: f64 = PIO2_HI / (TAN_VIRTUAL_TABS_SIZE - 1) as f64;
pub(crate) const TAN_DELTA_LO: f64 = PIO2_LO / (TAN_VIRTUAL_TABS_SIZE - 1) as f64;
pub(crate) const TAN_INDEXER: f64 = 1.0 / (TAN_DELTA_HI + TAN_DELTA_LO);
/// 77 degrees, in radians
pub(crate) const TAN_MAX_VALUE_FOR_TABS: f64 = 1.3439035240356338;
pub(crate) const TAN_TABS_SIZE: usize =
    ((TAN_MAX_VALUE_FOR_TABS / (PIO2_HI + PIO2_LO)) * (TAN_VIRTUAL_TABS_SIZE - 1) as f64) as usize
        + 1;
pub(crate) const TAN_MAX_VALUE_FOR_INT_MODULO: f64 = MAX_EXACT_INDEX / TAN_INDEXER;

// ============================================================================
// Arcsine: [0, sin(73°)]
// ============================================================================

pub(crate) const ASIN_MAX_VALUE_FOR_TABS: f64 = 0.9563047559630354;
pub(crate) const ASIN_TABS_SIZE: usize = (1 << 13) + 1;
pub(crate) const ASIN_DELTA: f64 = ASIN_MAX_VALUE_FOR_TABS / (ASIN_TABS_SIZE - 1) as f64;
pub(crate) const ASIN_INDEXER: f64 = 1.0 / ASIN_DELTA;

// ============================================================================
// Arctangent: [0, tan(74°)]
// ============================================================================

pub(crate) const ATAN_MAX_VALUE_FOR_TABS: f64 = 3.4874144438409087;
pub(crate) const ATAN_TABS_SIZE: usize = (1 << 12) + 1;
pub(crate) const ATAN_DELTA: f64 = ATAN_MAX_VALUE_FOR_TABS / (ATAN_TABS_SIZE - 1) as f64;
pub(crate) const ATAN_INDEXER: f64 = 1.0 / ATAN_DELTA;

// ============================================================================
// Exponential
// ============================================================================

/// exp overflows above this (ln(f64::MAX))
pub(crate) const EXP_OVERFLOW_LIMIT: f64 = 709.782712893383973096;
/// exp underflows to 0 below this (ln of the smallest subnormal, minus half an ulp)
pub(crate) const EXP_UNDERFLOW_LIMIT: f64 = -745.133219101941108420;
pub(crate) const EXP_MIN_INT_LIMIT: i32 = -745;
pub(crate) const EXP_MAX_INT_LIMIT: i32 = 709;
pub(crate) const EXP_HI_TABS_SIZE: usize = (EXP_MAX_INT_LIMIT - EXP_MIN_INT_LIMIT + 1) as usize;

pub(crate) const EXP_LO_INDEXING_DIV_SHIFT: u32 = 10;
pub(crate) const EXP_LO_INDEXING: f64 = (1 << EXP_LO_INDEXING_DIV_SHIFT) as f64;
pub(crate) const EXP_LO_TAB_MID_INDEX: i32 = 1 << EXP_LO_INDEXING_DIV_SHIFT;
pub(crate) const EXP_LO_TABS_SIZE: usize = (1 << 11) + 1;

// ============================================================================
// Logarithm and roots: mantissa-indexed
// ============================================================================

pub(crate) const LOG_BITS: u32 = 12;
pub(crate) const LOG_TABS_SIZE: usize = 1 << LOG_BITS;

pub(crate) const ROOT_LO_BITS: u32 = 12;
pub(crate) const ROOT_LO_TABS_SIZE: usize = 1 << ROOT_LO_BITS;
/// One slot per unbiased exponent in [-1074, 1023].
pub(crate) const ROOT_HI_TABS_SIZE: usize = 1023 + 1074 + 1;
/// Offset from an unbiased exponent to its high-table slot.
pub(crate) const ROOT_HI_EXPONENT_OFFSET: i32 = 1074;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(SIN_COS_TABS_SIZE, 2049);
        assert_eq!(TAN_TABS_SIZE, 3505);
        assert_eq!(ASIN_TABS_SIZE, 8193);
        assert_eq!(ATAN_TABS_SIZE, 4097);
        assert_eq!(EXP_HI_TABS_SIZE, 1455);
        assert_eq!(ROOT_HI_TABS_SIZE, 2098);
    }

    #[test]
    fn test_range_limits() {
        assert!((ASIN_MAX_VALUE_FOR_TABS - 73f64.to_radians().sin()).abs() < 1e-15);
        assert!((ATAN_MAX_VALUE_FOR_TABS - 74f64.to_radians().tan()).abs() < 1e-14);
        assert!((TAN_MAX_VALUE_FOR_TABS - 77f64.to_radians()).abs() < 1e-15);
        // Products of a 20-bit index with the high step stay exact.
        let i = (SIN_COS_MAX_VALUE_FOR_INT_MODULO * SIN_COS_INDEXER + 0.5) as i64;
        assert!(i < 1 << 20);
        let i = (TAN_MAX_VALUE_FOR_INT_MODULO * TAN_INDEXER + 0.5) as i64;
        assert!(i < 1 << 20);
    }
}
