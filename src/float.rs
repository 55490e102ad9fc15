//! IEEE-754 layout description for the supported floating-point widths
//!
//! [`FloatBits`] connects a Rust float type to the constants of its binary
//! encoding (exponent bias, mantissa width, field masks) so bit-level code can
//! be written once and instantiated for both `f32` and `f64`.
//!
//! | Type  | Bits  | Int   | Mantissa | Bias | Min exponent (subnormal) |
//! |-------|-------|-------|----------|------|--------------------------|
//! | `f32` | `u32` | `i32` | 23       | 127  | -149                     |
//! | `f64` | `u64` | `i64` | 52       | 1023 | -1074                    |

use num_traits::{Float, PrimInt, Signed};

/// Floating-point types whose raw IEEE-754 encoding is accessible.
///
/// # Bounds
/// - `Float` - arithmetic, comparisons and classification (num-traits)
/// - `Send + Sync + 'static` - values cross threads freely
///
/// `Bits` is the unsigned raw representation, `Int` the signed integer type of
/// the same width (used as the result of integer rounding).
pub trait FloatBits: Float + Send + Sync + 'static {
    /// Raw unsigned bit pattern type
    type Bits: PrimInt + Send + Sync;
    /// Signed integer of the same width
    type Int: PrimInt + Signed + Send + Sync;

    /// Total number of bits in the encoding
    const TOTAL_BITS: u32;
    /// Number of explicitly stored mantissa bits
    const MANTISSA_BITS: u32;
    /// Exponent bias
    const EXPONENT_BIAS: i32;
    /// Largest unbiased exponent of a finite value
    const MAX_EXPONENT: i32;
    /// Smallest unbiased exponent of a normal value
    const MIN_NORMAL_EXPONENT: i32;
    /// Exponent of the smallest positive subnormal value
    const MIN_EXPONENT: i32;
    /// Mask selecting the sign bit
    const SIGN_MASK: Self::Bits;
    /// Mask selecting the exponent field
    const EXPONENT_MASK: Self::Bits;
    /// Mask selecting the stored mantissa field
    const MANTISSA_MASK: Self::Bits;

    /// Reinterpret as raw bits, without any normalization.
    fn to_raw_bits(self) -> Self::Bits;

    /// Reinterpret raw bits as a float, without any normalization.
    fn from_raw_bits(bits: Self::Bits) -> Self;

    /// Biased exponent field, in `[0, 2*bias+1]`.
    fn biased_exponent(self) -> i32;

    /// Exact `2^power`, subnormal when needed, `0` below the subnormal range
    /// and `+Infinity` above the finite range.
    fn two_pow(power: i32) -> Self;

    /// Truncation toward zero for values with `|self| < 2^MANTISSA_BITS`.
    fn truncate_small(self) -> Self;

    /// Round to nearest integer, ties toward positive infinity.
    ///
    /// NaN gives 0, out of range values saturate.
    fn round_half_up(self) -> Self::Int;

    /// Saturating conversion to the signed integer type (NaN gives 0).
    fn to_int_saturating(self) -> Self::Int;
}

macro_rules! impl_float_bits {
    ($float:ty, $bits:ty, $int:ty, total: $total:expr, mantissa: $mant:expr, bias: $bias:expr) => {
        impl FloatBits for $float {
            type Bits = $bits;
            type Int = $int;

            const TOTAL_BITS: u32 = $total;
            const MANTISSA_BITS: u32 = $mant;
            const EXPONENT_BIAS: i32 = $bias;
            const MAX_EXPONENT: i32 = $bias;
            const MIN_NORMAL_EXPONENT: i32 = 1 - $bias;
            const MIN_EXPONENT: i32 = 1 - $bias - $mant;
            const SIGN_MASK: $bits = 1 << ($total - 1);
            const EXPONENT_MASK: $bits = !(1 << ($total - 1)) & !((1 << $mant) - 1);
            const MANTISSA_MASK: $bits = (1 << $mant) - 1;

            #[inline]
            fn to_raw_bits(self) -> $bits {
                self.to_bits()
            }

            #[inline]
            fn from_raw_bits(bits: $bits) -> Self {
                <$float>::from_bits(bits)
            }

            #[inline]
            fn biased_exponent(self) -> i32 {
                ((self.to_bits() & Self::EXPONENT_MASK) >> $mant) as i32
            }

            #[inline]
            fn two_pow(power: i32) -> Self {
                if power < Self::MIN_NORMAL_EXPONENT {
                    if power >= Self::MIN_EXPONENT {
                        // Subnormal: a single mantissa bit.
                        let shift = power - Self::MIN_EXPONENT;
                        <$float>::from_bits((1 as $bits) << shift)
                    } else {
                        0.0
                    }
                } else if power > Self::MAX_EXPONENT {
                    <$float>::INFINITY
                } else {
                    <$float>::from_bits(((power + $bias) as $bits) << $mant)
                }
            }

            #[inline]
            fn truncate_small(self) -> Self {
                (self as $int) as $float
            }

            #[inline]
            fn round_half_up(self) -> $int {
                let bits = self.to_bits() as $int;
                let biased = self.biased_exponent();
                // Drop every bit past the comma except the first one, then
                // "+1 >> 1" rounds half up in two's complement.
                let shift = ($mant - 1) + $bias - biased;
                if shift & -($total as i32) == 0 {
                    let mut extended = ((1 as $int) << $mant) | (bits & (Self::MANTISSA_MASK as $int));
                    if bits < 0 {
                        extended = -extended;
                    }
                    ((extended >> shift) + 1) >> 1
                } else {
                    // Infinity, NaN, a mathematical integer, or a magnitude
                    // below one half.
                    self as $int
                }
            }

            #[inline]
            fn to_int_saturating(self) -> $int {
                self as $int
            }
        }
    };
}

impl_float_bits!(f32, u32, i32, total: 32, mantissa: 23, bias: 127);
impl_float_bits!(f64, u64, i64, total: 64, mantissa: 52, bias: 1023);
