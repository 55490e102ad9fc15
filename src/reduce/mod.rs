//! Argument reduction for periodic functions
//!
//! Two families:
//! - accurate reductions, exact to the last bits over the whole double
//!   range: a split-constant subtraction up to `2^20·π/2`, and the
//!   multi-limb kernel of [`payne_hanek`] beyond;
//! - fast reductions, a single multiply-subtract that loses accuracy
//!   linearly with the magnitude of the argument.
//!
//! The `normalize_*` helpers return in-range angles untouched and reduce
//! everything else.

mod payne_hanek;

use crate::bits::exponent;
use crate::consts::{
    HALF_PI, HALF_PI_LO, PI, PI_DD_LO, PI_HI, PI_INV, PI_LO, PIO2_2, PIO2_2T, PIO2_3, PIO2_3T,
    PIO2_HI, PIO2_INV, PIO2_LO, QUARTER_PI, TWO_PI, TWO_PI_HI, TWO_PI_INV, TWO_PI_LO, TWO_POW_26,
    TWO_POW_M26,
};

/// Split-constant reductions are accurate up to this magnitude.
const MEDIUM_LIMIT: f64 = 1048576.0 * HALF_PI;
/// Fast reduction does a single step up to this magnitude.
const FAST_DIRECT_LIMIT: f64 = TWO_POW_26 * TWO_PI;
/// Fast reduction gives up (returns 0) above this magnitude.
const FAST_COARSE_LIMIT: f64 = 4503599627370496.0 * TWO_PI;

/// `x` written as `quadrant·π/2 + hi + lo` (modulo 2π).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PiO2Remainder {
    /// In `[0, 3]`
    pub quadrant: i32,
    /// Remainder, `|hi| <= π/4` (slightly above near the medium limit)
    pub hi: f64,
    /// Rounding residual of `hi`
    pub lo: f64,
}

/// Accurate reduction modulo π/2 of a finite value.
///
/// Callers filter out infinities and NaN.
pub(crate) fn remainder_pi_o2(x: f64) -> PiO2Remainder {
    let negative = x < 0.0;
    let ax = x.abs();
    let (n, hi, lo) = if ax <= QUARTER_PI {
        (0, ax, 0.0)
    } else if ax <= MEDIUM_LIMIT {
        rem_pio2_medium(ax)
    } else {
        payne_hanek::rem_pio2_large(ax)
    };
    if negative {
        PiO2Remainder { quadrant: (-n) & 3, hi: -hi, lo: -lo }
    } else {
        PiO2Remainder { quadrant: n & 3, hi, lo }
    }
}

/// `ax - n·π/2` with n the nearest integer, for `0 <= ax <= 2^20·π/2`.
///
/// Refines with further chunks of π/2 when the first subtraction cancels
/// too many leading bits.
fn rem_pio2_medium(ax: f64) -> (i32, f64, f64) {
    let n = (ax * PIO2_INV + 0.5) as i32;
    let fnn = n as f64;
    let mut r = ax - fnn * PIO2_HI;
    let mut w = fnn * PIO2_LO;
    let mut y0 = r - w;

    let ex = exponent(ax);
    if ex - exponent(y0) > 16 {
        let t = r;
        w = fnn * PIO2_2;
        r = t - w;
        w = fnn * PIO2_2T - ((t - r) - w);
        y0 = r - w;
        if ex - exponent(y0) > 49 {
            let t = r;
            w = fnn * PIO2_3;
            r = t - w;
            w = fnn * PIO2_3T - ((t - r) - w);
            y0 = r - w;
        }
    }
    let y1 = (r - y0) - w;
    (n, y0, y1)
}

/// Accurate remainder of `angle` modulo 2π, in `[-π, π]`.
///
/// Infinities and NaN give NaN.
pub fn remainder_two_pi(angle: f64) -> f64 {
    let negative = angle < 0.0;
    let mut a = angle.abs();
    if a <= MEDIUM_LIMIT {
        let n = ((a * TWO_PI_INV + 0.5) as i32) as f64;
        a = (a - n * TWO_PI_HI) - n * TWO_PI_LO;
        if a < -PI {
            a = (a + TWO_PI_HI) + TWO_PI_LO;
        } else if a > PI {
            a = (a - TWO_PI_HI) - TWO_PI_LO;
        }
    } else if a < f64::INFINITY {
        let r = remainder_pi_o2(a);
        a = match r.quadrant {
            0 => r.hi + r.lo,
            1 => HALF_PI + (r.hi + (r.lo + HALF_PI_LO)),
            2 if r.hi < 0.0 => PI + (r.hi + (r.lo + PI_DD_LO)),
            2 => -PI + (r.hi + (r.lo - PI_DD_LO)),
            _ => -HALF_PI + (r.hi + (r.lo - HALF_PI_LO)),
        };
    } else {
        return f64::NAN;
    }
    if negative { -a } else { a }
}

/// Accurate remainder of `angle` modulo π, in `[-π/2, π/2]`.
///
/// Infinities and NaN give NaN.
pub fn remainder_pi(angle: f64) -> f64 {
    let negative = angle < 0.0;
    let mut a = angle.abs();
    if a <= MEDIUM_LIMIT {
        let n = ((a * PI_INV + 0.5) as i32) as f64;
        a = (a - n * PI_HI) - n * PI_LO;
        if a < -HALF_PI {
            a = (a + PI_HI) + PI_LO;
        } else if a > HALF_PI {
            a = (a - PI_HI) - PI_LO;
        }
    } else if a < f64::INFINITY {
        let r = remainder_pi_o2(a);
        a = match r.quadrant & 1 {
            0 => r.hi + r.lo,
            _ if r.hi < 0.0 => HALF_PI + (r.hi + (r.lo + HALF_PI_LO)),
            _ => -HALF_PI + (r.hi + (r.lo - HALF_PI_LO)),
        };
    } else {
        return f64::NAN;
    }
    if negative { -a } else { a }
}

/// Fast remainder of `angle` modulo 2π, roughly in `[-π, π]`.
///
/// Absolute error grows like `|angle|·2^-52`. Above `2^52·2π` no digit of
/// the remainder is known and 0 is returned. Infinities and NaN give NaN.
pub fn remainder_two_pi_fast(angle: f64) -> f64 {
    let negative = angle < 0.0;
    let mut a = angle.abs();
    if a > FAST_DIRECT_LIMIT {
        if a > FAST_COARSE_LIMIT {
            return if a < f64::INFINITY { 0.0 } else { f64::NAN };
        }
        // Coarse pass: strip a multiple of 2^26·2π.
        let k = (a * (TWO_PI_INV * TWO_POW_M26)).trunc() * TWO_POW_26;
        a = (a - k * TWO_PI_HI) - k * TWO_PI_LO;
    }
    let n = ((a * TWO_PI_INV + 0.5) as i64) as f64;
    a = (a - n * TWO_PI_HI) - n * TWO_PI_LO;
    if negative { -a } else { a }
}

/// `angle` reduced into `[-π, π]`, untouched when already there.
pub fn normalize_minus_pi_pi(angle: f64) -> f64 {
    if (-PI..=PI).contains(&angle) {
        return angle;
    }
    remainder_two_pi(angle)
}

/// Fast version of [`normalize_minus_pi_pi`].
pub fn normalize_minus_pi_pi_fast(angle: f64) -> f64 {
    if (-PI..=PI).contains(&angle) {
        return angle;
    }
    remainder_two_pi_fast(angle)
}

/// `angle` reduced into `[0, 2π]`, untouched when already there.
pub fn normalize_zero_two_pi(angle: f64) -> f64 {
    if (0.0..=TWO_PI).contains(&angle) {
        return angle;
    }
    shift_into_zero_two_pi(remainder_two_pi(angle))
}

/// Fast version of [`normalize_zero_two_pi`].
pub fn normalize_zero_two_pi_fast(angle: f64) -> f64 {
    if (0.0..=TWO_PI).contains(&angle) {
        return angle;
    }
    shift_into_zero_two_pi(remainder_two_pi_fast(angle))
}

/// `angle` reduced into `[-π/2, π/2]` modulo π, untouched when already there.
pub fn normalize_minus_half_pi_half_pi(angle: f64) -> f64 {
    if (-HALF_PI..=HALF_PI).contains(&angle) {
        return angle;
    }
    remainder_pi(angle)
}

#[inline]
fn shift_into_zero_two_pi(r: f64) -> f64 {
    if r < 0.0 { (r + TWO_PI_HI) + TWO_PI_LO } else { r }
}
