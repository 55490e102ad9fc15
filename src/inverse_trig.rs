//! Arcsine, arccosine and arctangent
//!
//! Arguments inside the tabulated range go through the Taylor tables; the
//! tails (close to ±1 for asin, large magnitudes for atan) use the rational
//! and reciprocal expansions of fdlibm, which converge fast there.

use crate::bits::{clear_lo_word, hi_word, sign_bit};
use crate::config::use_platform;
use crate::consts::{HALF_PI, HALF_PI_LO, PI, QUARTER_PI, TWO_POW_66};
use crate::tables::layout::{
    ASIN_DELTA, ASIN_INDEXER, ASIN_MAX_VALUE_FOR_TABS, ATAN_DELTA, ATAN_INDEXER,
    ATAN_MAX_VALUE_FOR_TABS,
};
use crate::tables::tables;

// ============================================================================
// fdlibm asin tail: asin(x) = π/2 - 2·asin(sqrt((1-x)/2))
// ============================================================================

const ASIN_PIO4_HI: f64 = 7.85398163397448278999e-01;
const ASIN_PS: [f64; 6] = [
    1.66666666666666657415e-01,
    -3.25565818622400915405e-01,
    2.01212532134862925881e-01,
    -4.00555345006794114027e-02,
    7.91534994289814532176e-04,
    3.47933107596021167570e-05,
];
const ASIN_QS: [f64; 4] = [
    -2.40339491173441421878e+00,
    2.02094576023350569471e+00,
    -6.88283971605453293030e-01,
    7.70381505559019352791e-02,
];
/// High word of 0.975: above it, the sqrt needs no hi/lo split.
const ASIN_SPLIT_HI_WORD: i32 = 0x3FEF_3333;

// ============================================================================
// fdlibm atan tail: atan(x) = π/2 + atan(-1/x)
// ============================================================================

const ATAN_T: [f64; 11] = [
    3.33333333333329318027e-01,
    -1.99999999998764832476e-01,
    1.42857142725034663711e-01,
    -1.11111104054623557880e-01,
    9.09088713343650656196e-02,
    -7.69187620504482999495e-02,
    6.66107313738753120669e-02,
    -5.83357013379057348645e-02,
    4.97687799461593236017e-02,
    -3.65315727442169155270e-02,
    1.62858201153657823623e-02,
];

const THREE_QUARTER_PI: f64 = 3.0 * QUARTER_PI;

/// Arcsine, in `[-π/2, π/2]`.
///
/// Odd; exactly `±π/2` at `±1`; NaN outside `[-1, 1]` and for NaN.
pub fn asin(value: f64) -> f64 {
    if use_platform() {
        return value.asin();
    }
    let negate = value.is_sign_negative();
    let x = value.abs();
    let result = if x <= ASIN_MAX_VALUE_FOR_TABS {
        let index = (x * ASIN_INDEXER + 0.5) as usize;
        let delta = x - index as f64 * ASIN_DELTA;
        tables().asin.eval(index, delta)
    } else if x < 1.0 {
        asin_tail(x)
    } else if x == 1.0 {
        HALF_PI
    } else {
        return f64::NAN;
    };
    if negate { -result } else { result }
}

fn asin_tail(x: f64) -> f64 {
    let t = (1.0 - x) * 0.5;
    let p = t
        * (ASIN_PS[0]
            + t * (ASIN_PS[1]
                + t * (ASIN_PS[2] + t * (ASIN_PS[3] + t * (ASIN_PS[4] + t * ASIN_PS[5])))));
    let q = 1.0 + t * (ASIN_QS[0] + t * (ASIN_QS[1] + t * (ASIN_QS[2] + t * ASIN_QS[3])));
    let s = t.sqrt();
    let r = p / q;
    if hi_word(x) >= ASIN_SPLIT_HI_WORD {
        HALF_PI - (2.0 * (s + s * r) - HALF_PI_LO)
    } else {
        // Split the sqrt so 2·w is exact and the correction c carries the rest.
        let w = clear_lo_word(s);
        let c = (t - w * w) / (s + w);
        let p = 2.0 * s * r - (HALF_PI_LO - 2.0 * c);
        let q = ASIN_PIO4_HI - 2.0 * w;
        ASIN_PIO4_HI - (p - q)
    }
}

/// Arcsine with the argument clamped to `[-1, 1]` first.
///
/// Tolerates arguments slightly out of domain because of rounding errors.
pub fn asin_in_range(value: f64) -> f64 {
    if value <= -1.0 {
        -HALF_PI
    } else if value >= 1.0 {
        HALF_PI
    } else {
        asin(value)
    }
}

/// Arccosine, in `[0, π]`.
///
/// `acos(1) = 0`, `acos(-1) = π`; NaN outside `[-1, 1]` and for NaN.
pub fn acos(value: f64) -> f64 {
    if use_platform() {
        return value.acos();
    }
    HALF_PI - (asin(value) - HALF_PI_LO)
}

/// Arccosine with the argument clamped to `[-1, 1]` first.
pub fn acos_in_range(value: f64) -> f64 {
    if value <= -1.0 {
        PI
    } else if value >= 1.0 {
        0.0
    } else {
        acos(value)
    }
}

/// Arctangent, in `[-π/2, π/2]`.
///
/// Odd; exactly `±π/4` at `±1` and `±π/2` for `|value| >= 2^66`.
pub fn atan(value: f64) -> f64 {
    if use_platform() {
        return value.atan();
    }
    let negate = value.is_sign_negative();
    let x = value.abs();
    let result = if x == 1.0 {
        QUARTER_PI
    } else if x <= ATAN_MAX_VALUE_FOR_TABS {
        let index = (x * ATAN_INDEXER + 0.5) as usize;
        let delta = x - index as f64 * ATAN_DELTA;
        tables().atan.eval(index, delta)
    } else if x < TWO_POW_66 {
        atan_tail(x)
    } else if x.is_nan() {
        return f64::NAN;
    } else {
        HALF_PI
    };
    if negate { -result } else { result }
}

fn atan_tail(x: f64) -> f64 {
    let x = -1.0 / x;
    let x2 = x * x;
    let x4 = x2 * x2;
    let s1 = x2
        * (ATAN_T[0]
            + x4 * (ATAN_T[2]
                + x4 * (ATAN_T[4] + x4 * (ATAN_T[6] + x4 * (ATAN_T[8] + x4 * ATAN_T[10])))));
    let s2 = x4 * (ATAN_T[1] + x4 * (ATAN_T[3] + x4 * (ATAN_T[5] + x4 * (ATAN_T[7] + x4 * ATAN_T[9]))));
    HALF_PI - ((x * (s1 + s2) - HALF_PI_LO) - x)
}

/// Angle of the point `(x, y)`, in `[-π, π]`.
///
/// Follows the usual quadrant rules, including signed zeros and infinities:
/// `atan2(±0, -0) = ±π`, `atan2(±0, +0) = ±0`, `atan2(±∞, -∞) = ±3π/4`.
pub fn atan2(y: f64, x: f64) -> f64 {
    if use_platform() {
        return y.atan2(x);
    }
    if x > 0.0 {
        if y == 0.0 {
            return y;
        }
        if x == f64::INFINITY {
            return if y == f64::INFINITY {
                QUARTER_PI
            } else if y == f64::NEG_INFINITY {
                -QUARTER_PI
            } else if y > 0.0 {
                0.0
            } else if y < 0.0 {
                -0.0
            } else {
                f64::NAN
            };
        }
        atan(y / x)
    } else if x < 0.0 {
        if y == 0.0 {
            return sign_bit(y) as f64 * PI;
        }
        if x == f64::NEG_INFINITY {
            if y == f64::INFINITY {
                THREE_QUARTER_PI
            } else if y == f64::NEG_INFINITY {
                -THREE_QUARTER_PI
            } else if y > 0.0 {
                PI
            } else if y < 0.0 {
                -PI
            } else {
                f64::NAN
            }
        } else if y > 0.0 {
            HALF_PI + atan(-x / y)
        } else if y < 0.0 {
            -HALF_PI - atan(x / y)
        } else {
            f64::NAN
        }
    } else if x == 0.0 {
        if y == 0.0 {
            return if x.is_sign_negative() { sign_bit(y) as f64 * PI } else { y };
        }
        if y > 0.0 {
            HALF_PI
        } else if y < 0.0 {
            -HALF_PI
        } else {
            f64::NAN
        }
    } else {
        f64::NAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tol: f64, msg: &str) {
        assert!((a - b).abs() <= tol, "{msg}: {a} vs {b} (tol {tol})");
    }

    #[test]
    fn test_asin_acos_whole_domain() {
        for k in -1000..=1000 {
            let x = k as f64 / 1000.0;
            assert_close(asin(x), libm::asin(x), 2e-16 * 8.0, &format!("asin({x})"));
            assert_close(acos(x), libm::acos(x), 2e-16 * 8.0, &format!("acos({x})"));
        }
        // Both sides of the 0.975 split.
        for &x in &[0.96, 0.97, 0.9749, 0.9751, 0.99, 0.999999] {
            assert_close(asin(x), libm::asin(x), 1e-15, &format!("asin({x})"));
        }
    }

    #[test]
    fn test_asin_edges() {
        assert_eq!(asin(1.0), HALF_PI);
        assert_eq!(asin(-1.0), -HALF_PI);
        assert_eq!(asin(-0.0).to_bits(), (-0.0f64).to_bits());
        assert!(asin(1.0000000000000002).is_nan());
        assert!(asin(-2.0).is_nan());
        assert!(asin(f64::NAN).is_nan());
        assert_eq!(acos(1.0), 0.0);
        assert_eq!(acos(-1.0), PI);
        assert!(acos(f64::INFINITY).is_nan());
        assert_eq!(asin_in_range(1.5), HALF_PI);
        assert_eq!(asin_in_range(-1.0000001), -HALF_PI);
        assert_eq!(acos_in_range(-3.0), PI);
        assert_eq!(acos_in_range(1.0000001), 0.0);
        assert!(acos_in_range(f64::NAN).is_nan());
    }

    #[test]
    fn test_atan() {
        for k in -4000..=4000 {
            let x = k as f64 * 0.0025;
            assert_close(atan(x), libm::atan(x), 1e-15, &format!("atan({x})"));
        }
        for &x in &[4.0, 17.5, 1e3, 1e10, 1e19, 7e19] {
            assert_close(atan(x), libm::atan(x), 1e-15, &format!("atan({x})"));
        }
        assert_eq!(atan(1.0), QUARTER_PI);
        assert_eq!(atan(-1.0), -QUARTER_PI);
        assert_eq!(atan(1e30), HALF_PI);
        assert_eq!(atan(f64::NEG_INFINITY), -HALF_PI);
        assert_eq!(atan(-0.0).to_bits(), (-0.0f64).to_bits());
        assert!(atan(f64::NAN).is_nan());
    }

    #[test]
    fn test_atan2_quadrants() {
        let points = [(1.0, 2.0), (-1.0, 2.0), (1.0, -2.0), (-1.0, -2.0), (3.0, 1e-3), (-5.0, -0.1)];
        for &(y, x) in &points {
            assert_close(atan2(y, x), libm::atan2(y, x), 2e-15, &format!("atan2({y}, {x})"));
        }
    }

    #[test]
    fn test_atan2_special_values() {
        let inf = f64::INFINITY;
        assert_eq!(atan2(0.0, 1.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(atan2(-0.0, 1.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(atan2(0.0, -1.0), PI);
        assert_eq!(atan2(-0.0, -1.0), -PI);
        assert_eq!(atan2(0.0, 0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(atan2(-0.0, 0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(atan2(0.0, -0.0), PI);
        assert_eq!(atan2(-0.0, -0.0), -PI);
        assert_eq!(atan2(inf, inf), QUARTER_PI);
        assert_eq!(atan2(-inf, inf), -QUARTER_PI);
        assert_eq!(atan2(inf, -inf), THREE_QUARTER_PI);
        assert_eq!(atan2(-inf, -inf), -THREE_QUARTER_PI);
        assert_eq!(atan2(5.0, inf), 0.0);
        assert_eq!(atan2(-5.0, inf).to_bits(), (-0.0f64).to_bits());
        assert_eq!(atan2(5.0, -inf), PI);
        assert_eq!(atan2(-5.0, -inf), -PI);
        assert_eq!(atan2(2.0, 0.0), HALF_PI);
        assert_eq!(atan2(-2.0, -0.0), -HALF_PI);
        assert!(atan2(f64::NAN, 1.0).is_nan());
        assert!(atan2(f64::NAN, inf).is_nan());
        assert!(atan2(f64::NAN, -1.0).is_nan());
        assert!(atan2(f64::NAN, -inf).is_nan());
        assert!(atan2(f64::NAN, 0.0).is_nan());
        assert!(atan2(1.0, f64::NAN).is_nan());
    }
}
