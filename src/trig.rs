//! Sine, cosine and tangent
//!
//! The angle is mapped to the nearest table anchor `a_i = i·Δ` and the
//! fractional offset `δ = angle - a_i`, then the anchor's Taylor expansion is
//! evaluated in Horner form. Derivatives of sine and cosine are sine and
//! cosine themselves, so two tables serve both functions; tangent has its own
//! value and derivative tables.
//!
//! Angles too large for an exact `i·Δ` product are first reduced modulo π/2
//! with the accurate reducer.

use crate::config::use_platform;
use crate::consts::{ONE_DIV_F2, ONE_DIV_F3, ONE_DIV_F4, QUARTER_PI};
use crate::reduce::remainder_pi_o2;
use crate::tables::layout::{
    SIN_COS_DELTA_HI, SIN_COS_DELTA_LO, SIN_COS_INDEXER, SIN_COS_MAX_VALUE_FOR_INT_MODULO,
    SIN_COS_TABS_SIZE, TAN_DELTA_HI, TAN_DELTA_LO, TAN_HALF_PI_INDEX, TAN_INDEXER,
    TAN_MAX_VALUE_FOR_INT_MODULO, TAN_TABS_SIZE,
};
use crate::tables::{MathTables, tables};

const PI_DIV_180: f64 = 0.017453292519943295;
const PI_DIV_180_LO: f64 = 2.9486522708701687e-19;
const ONE_EIGHTY_DIV_PI: f64 = 57.29577951308232;
const ONE_EIGHTY_DIV_PI_LO: f64 = -1.9878495670576283e-15;

/// Mask keeping a sin/cos index within one period (last slot equals first).
const SIN_COS_INDEX_MASK: i32 = SIN_COS_TABS_SIZE as i32 - 2;

/// Sine.
///
/// Within a few ulps of the exact value over the whole double range.
/// `sin(±0) = ±0`; infinities and NaN give NaN.
pub fn sin(angle: f64) -> f64 {
    if use_platform() {
        return angle.sin();
    }
    let t = tables();
    let a = angle.abs();
    let result = if a > SIN_COS_MAX_VALUE_FOR_INT_MODULO {
        if a == f64::INFINITY {
            return f64::NAN;
        }
        let r = remainder_pi_o2(a);
        match r.quadrant {
            0 => sin_reduced(t, r.hi, r.lo),
            1 => cos_reduced(t, r.hi, r.lo),
            2 => -sin_reduced(t, r.hi, r.lo),
            _ => -cos_reduced(t, r.hi, r.lo),
        }
    } else {
        let (i, delta) = sin_cos_anchor(a, 0.0);
        sin_poly(t, i, delta)
    };
    if angle.is_sign_negative() { -result } else { result }
}

/// Cosine.
///
/// Infinities and NaN give NaN.
pub fn cos(angle: f64) -> f64 {
    if use_platform() {
        return angle.cos();
    }
    let t = tables();
    let a = angle.abs();
    if a > SIN_COS_MAX_VALUE_FOR_INT_MODULO {
        if a == f64::INFINITY {
            return f64::NAN;
        }
        let r = remainder_pi_o2(a);
        match r.quadrant {
            0 => cos_reduced(t, r.hi, r.lo),
            1 => -sin_reduced(t, r.hi, r.lo),
            2 => -cos_reduced(t, r.hi, r.lo),
            _ => sin_reduced(t, r.hi, r.lo),
        }
    } else {
        let (i, delta) = sin_cos_anchor(a, 0.0);
        cos_poly(t, i, delta)
    }
}

/// Sine and cosine from a single reduction: `(sin(angle), cos(angle))`.
pub fn sin_and_cos(angle: f64) -> (f64, f64) {
    if use_platform() {
        return angle.sin_cos();
    }
    let t = tables();
    let a = angle.abs();
    let (sin, cos) = if a > SIN_COS_MAX_VALUE_FOR_INT_MODULO {
        if a == f64::INFINITY {
            return (f64::NAN, f64::NAN);
        }
        let r = remainder_pi_o2(a);
        let (s, c) = if r.hi < 0.0 {
            let (i, delta) = sin_cos_anchor(-r.hi, -r.lo);
            (-sin_poly(t, i, delta), cos_poly(t, i, delta))
        } else {
            let (i, delta) = sin_cos_anchor(r.hi, r.lo);
            (sin_poly(t, i, delta), cos_poly(t, i, delta))
        };
        match r.quadrant {
            0 => (s, c),
            1 => (c, -s),
            2 => (-s, -c),
            _ => (-c, s),
        }
    } else {
        let (i, delta) = sin_cos_anchor(a, 0.0);
        (sin_poly(t, i, delta), cos_poly(t, i, delta))
    };
    (if angle.is_sign_negative() { -sin } else { sin }, cos)
}

/// Quick sine: absolute error around 1e-7 for `|angle| < ~3e3`.
///
/// No range reduction: accuracy degrades with magnitude and the result is
/// meaningless for `|angle| > ~6e6`.
pub fn sin_quick(angle: f64) -> f64 {
    if use_platform() {
        return angle.sin();
    }
    cos_quick(angle - QUARTER_PI * 2.0)
}

/// Quick cosine, see [`sin_quick`].
pub fn cos_quick(angle: f64) -> f64 {
    if use_platform() {
        return angle.cos();
    }
    if angle.is_infinite() {
        return f64::NAN;
    }
    let t = tables();
    let (i, delta) = sin_cos_anchor(angle.abs(), 0.0);
    let (s, c) = (t.sin.get(i), t.cos.get(i));
    c + delta * (-s + delta * (-c * ONE_DIV_F2))
}

/// Tangent.
///
/// Odd; `tan(±0) = ±0`; infinities and NaN give NaN.
pub fn tan(angle: f64) -> f64 {
    if use_platform() {
        return angle.tan();
    }
    let t = tables();
    let mut angle = angle;
    let mut negate = false;
    if angle.is_sign_negative() {
        angle = -angle;
        negate = true;
    }
    if angle > TAN_MAX_VALUE_FOR_INT_MODULO {
        if angle == f64::INFINITY {
            return f64::NAN;
        }
        // The low part of the remainder matters near the poles.
        let r = remainder_pi_o2(angle);
        let tan_r = tan_reduced(t, r.hi, r.lo);
        let result = if r.quadrant & 1 == 0 { tan_r } else { -1.0 / tan_r };
        return if negate { -result } else { result };
    }

    let index = (angle * TAN_INDEXER + 0.5) as i32;
    let mut delta = (angle - index as f64 * TAN_DELTA_HI) - index as f64 * TAN_DELTA_LO;
    // Modulo π: two quarter periods of virtual slots.
    let mut index = index & (2 * TAN_HALF_PI_INDEX - 1);
    if index > TAN_HALF_PI_INDEX {
        index = 2 * TAN_HALF_PI_INDEX - index;
        delta = -delta;
        negate = !negate;
    }

    let result = if (index as usize) < TAN_TABS_SIZE {
        t.tan.eval(index as usize, delta)
    } else {
        // Past the stored range: tan(x) = 1/tan(π/2 - x).
        let mirrored = (TAN_HALF_PI_INDEX - index) as usize;
        1.0 / t.tan.eval_backward(mirrored, delta)
    };
    if negate { -result } else { result }
}

/// Degrees to radians.
#[inline]
pub fn to_radians(angdeg: f64) -> f64 {
    angdeg * PI_DIV_180 + angdeg * PI_DIV_180_LO
}

/// Radians to degrees.
#[inline]
pub fn to_degrees(angrad: f64) -> f64 {
    angrad * ONE_EIGHTY_DIV_PI + angrad * ONE_EIGHTY_DIV_PI_LO
}

/// Nearest sin/cos slot of `a >= 0` and the offset from its anchor.
#[inline(always)]
fn sin_cos_anchor(a: f64, lo: f64) -> (usize, f64) {
    let index = (a * SIN_COS_INDEXER + 0.5) as i32;
    let delta = ((a - index as f64 * SIN_COS_DELTA_HI) - index as f64 * SIN_COS_DELTA_LO) + lo;
    ((index & SIN_COS_INDEX_MASK) as usize, delta)
}

#[inline(always)]
fn sin_poly(t: &MathTables, i: usize, delta: f64) -> f64 {
    let (s, c) = (t.sin.get(i), t.cos.get(i));
    s + delta * (c + delta * (-s * ONE_DIV_F2 + delta * (-c * ONE_DIV_F3 + delta * s * ONE_DIV_F4)))
}

#[inline(always)]
fn cos_poly(t: &MathTables, i: usize, delta: f64) -> f64 {
    let (s, c) = (t.sin.get(i), t.cos.get(i));
    c + delta * (-s + delta * (-c * ONE_DIV_F2 + delta * (s * ONE_DIV_F3 + delta * c * ONE_DIV_F4)))
}

/// Sine of a reduced angle `x + lo`, `|x| <= ~π/4`.
#[inline]
fn sin_reduced(t: &MathTables, x: f64, lo: f64) -> f64 {
    if x < 0.0 {
        let (i, delta) = sin_cos_anchor(-x, -lo);
        -sin_poly(t, i, delta)
    } else {
        let (i, delta) = sin_cos_anchor(x, lo);
        sin_poly(t, i, delta)
    }
}

/// Cosine of a reduced angle `x + lo`, `|x| <= ~π/4`.
#[inline]
fn cos_reduced(t: &MathTables, x: f64, lo: f64) -> f64 {
    let (i, delta) = if x < 0.0 { sin_cos_anchor(-x, -lo) } else { sin_cos_anchor(x, lo) };
    cos_poly(t, i, delta)
}

/// Tangent of a reduced angle `x + lo`, `|x| <= ~π/4`.
#[inline]
fn tan_reduced(t: &MathTables, x: f64, lo: f64) -> f64 {
    let (a, lo) = if x < 0.0 { (-x, -lo) } else { (x, lo) };
    let index = (a * TAN_INDEXER + 0.5) as i32;
    let delta = ((a - index as f64 * TAN_DELTA_HI) - index as f64 * TAN_DELTA_LO) + lo;
    let result = t.tan.eval(index as usize, delta);
    if x < 0.0 { -result } else { result }
}
