//! Shared numeric constants
//!
//! Multiples of π are stored as high/low pairs: the high part keeps only 33
//! significant bits so `n * HI` is exact for any `n < 2^20`, and the low part
//! carries the next 53 bits. Subtracting `n*HI` then `n*LO` removes a multiple
//! of the constant without the cancellation a single rounded product causes.

// ============================================================================
// π/2, π and 2π as high/low splits (high part: 33 bits)
// ============================================================================

/// First 33 bits of π/2
pub(crate) const PIO2_HI: f64 = 1.57079632673412561417e+00; // 0x3FF921FB54400000
/// π/2 - PIO2_HI
pub(crate) const PIO2_LO: f64 = 6.07710050650619224932e-11; // 0x3DD0B4611A626331
pub(crate) const PI_HI: f64 = 2.0 * PIO2_HI;
pub(crate) const PI_LO: f64 = 2.0 * PIO2_LO;
pub(crate) const TWO_PI_HI: f64 = 4.0 * PIO2_HI;
pub(crate) const TWO_PI_LO: f64 = 4.0 * PIO2_LO;

/// 2/π, 1/π and 1/(2π) rounded to nearest
pub(crate) const PIO2_INV: f64 = 6.36619772367581382433e-01;
pub(crate) const PI_INV: f64 = 3.18309886183790691216e-01;
pub(crate) const TWO_PI_INV: f64 = 1.59154943091895345608e-01;

// Extra π/2 chunks for the cancellation-aware medium reduction.
pub(crate) const PIO2_2: f64 = 6.07710050630396597660e-11; // 0x3DD0B4611A600000
pub(crate) const PIO2_2T: f64 = 2.02226624879595063154e-21; // 0x3BA3198A2E037073
pub(crate) const PIO2_3: f64 = 2.02226624871116645580e-21; // 0x3BA3198A2E000000
pub(crate) const PIO2_3T: f64 = 8.47842766036889956997e-32; // 0x397B839A252049C1

// ============================================================================
// π/2 and π as double-double (high part: nearest double)
// ============================================================================

pub(crate) const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;
pub(crate) const HALF_PI_LO: f64 = 6.12323399573676603587e-17;
pub(crate) const QUARTER_PI: f64 = std::f64::consts::FRAC_PI_4;
pub(crate) const PI: f64 = std::f64::consts::PI;
pub(crate) const PI_DD_LO: f64 = 1.22464679914735317720e-16;
pub(crate) const TWO_PI: f64 = std::f64::consts::TAU;

// ============================================================================
// Logarithms and powers of two
// ============================================================================

pub(crate) const LOG_2: f64 = std::f64::consts::LN_2;
pub(crate) const INV_LOG_10: f64 = std::f64::consts::LOG10_E;
/// ln(f64::MAX)
pub(crate) const LOG_DOUBLE_MAX_VALUE: f64 = 7.09782712893383973096e+02;
/// ln(2^27)
pub(crate) const LOG_TWO_POW_27: f64 = 1.87149738751185238352e+01;

pub(crate) const TWO_POW_24: f64 = 16777216.0;
pub(crate) const TWO_POW_M24: f64 = 5.9604644775390625e-8;
pub(crate) const TWO_POW_26: f64 = 67108864.0;
pub(crate) const TWO_POW_M26: f64 = 1.4901161193847656e-8;
pub(crate) const TWO_POW_M27: f64 = 7.450580596923828e-9;
pub(crate) const TWO_POW_M28: f64 = 3.725290298461914e-9;
pub(crate) const TWO_POW_28: f64 = 268435456.0;
pub(crate) const TWO_POW_52: f64 = 4503599627370496.0;
pub(crate) const TWO_POW_53: f64 = 9007199254740992.0;
pub(crate) const TWO_POW_M55: f64 = 2.7755575615628914e-17;
pub(crate) const TWO_POW_66: f64 = 7.378697629483821e19;
pub(crate) const TWO_POW_78: f64 = 3.0223145490365729e23;

// ============================================================================
// Taylor factorial reciprocals
// ============================================================================

pub(crate) const ONE_DIV_F2: f64 = 1.0 / 2.0;
pub(crate) const ONE_DIV_F3: f64 = 1.0 / 6.0;
pub(crate) const ONE_DIV_F4: f64 = 1.0 / 24.0;
pub(crate) const ONE_DIV_F5: f64 = 1.0 / 120.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_constants_are_exact_sums() {
        assert_eq!(PIO2_HI.to_bits(), 0x3FF9_21FB_5440_0000);
        assert_eq!(PIO2_LO.to_bits(), 0x3DD0_B461_1A62_6331);
        // The high part leaves room for a 20-bit multiplier.
        assert_eq!(PIO2_HI.to_bits() & 0xF_FFFF, 0);
        assert_eq!(PIO2_HI + PIO2_LO, HALF_PI);
        assert_eq!(TWO_PI_HI + TWO_PI_LO, TWO_PI);
    }

    #[test]
    fn test_powers_of_two() {
        assert_eq!(TWO_POW_52, 2f64.powi(52));
        assert_eq!(TWO_POW_M55, 2f64.powi(-55));
        assert_eq!(TWO_POW_66, 2f64.powi(66));
        assert_eq!(TWO_POW_78, 2f64.powi(78));
        assert_eq!(TWO_POW_M28, 2f64.powi(-28));
    }
}
