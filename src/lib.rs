//! # tabmath
//!
//! **Table-driven fast approximations of floating-point math functions.**
//!
//! tabmath replaces runtime transcendental evaluation with short Taylor
//! polynomials anchored on precomputed lookup tables. Results stay within a
//! few ULPs of a correctly rounded reference; the `*_quick` variants trade
//! accuracy (down to a few percent) for a handful of instructions.
//!
//! ## Functions
//!
//! - **Trigonometry**: `sin`, `cos`, `sin_and_cos`, `tan`, `asin`, `acos`,
//!   `atan`, `atan2`, degree/radian conversions
//! - **Angle reduction**: accurate reduction of huge arguments modulo 2π, π
//!   and π/2, plus cheap `*_fast` variants
//! - **Exponentials and logarithms**: `exp`, `expm1`, `log`, `log10`, `log1p`
//! - **Roots and powers**: `sqrt`, `cbrt`, `hypot`, `pow`, `pow_int`
//! - **Hyperbolic**: `sinh`, `cosh`, `tanh`, their inverses and the
//!   cancellation-free `cosh_m1`, `acosh1p`
//! - **Rounding and bits**: generic over `f32`/`f64` through [`FloatBits`]
//! - **Integers**: overflow-checked and saturating arithmetic in [`int_ops`]
//!
//! ## Quick Start
//!
//! ```rust
//! use tabmath::prelude::*;
//!
//! // Optional: build every table up front instead of on first use.
//! tabmath::init();
//!
//! let (s, c) = sin_and_cos(1e20 * std::f64::consts::PI);
//! assert!((s * s + c * c - 1.0).abs() < 1e-14);
//! assert_eq!(atan2(0.0, 0.0), 0.0);
//! assert!((pow(2.0, 10.0) - 1024.0).abs() < 1e-12);
//! ```
//!
//! ## Configuration
//!
//! Behavior switches are read once from the environment (see [`config`]):
//!
//! - `TABMATH_USE_PLATFORM_LIBRARY`: delegate everything to `std`
//! - `TABMATH_USE_REDEFINED_LOG`: table-driven `log`/`log10`
//! - `TABMATH_USE_REDEFINED_SQRT`: table-driven `sqrt`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod baseline;
pub mod bits;
pub mod config;
mod consts;
pub mod error;
mod exp;
pub mod float;
mod hyperbolic;
pub mod int_ops;
mod inverse_trig;
mod log;
mod pow;
pub mod reduce;
mod root;
pub mod rounding;
pub mod tables;
mod trig;

pub use exp::{exp, exp_quick, expm1};
pub use hyperbolic::{acosh, acosh1p, asinh, atanh, cosh, cosh_m1, sinh, sinh_and_cosh, tanh};
pub use inverse_trig::{acos, acos_in_range, asin, asin_in_range, atan, atan2};
pub use log::{log, log_quick, log10, log1p};
pub use pow::{pow, pow_int, pow_quick, pow2, pow3};
pub use reduce::{
    normalize_minus_half_pi_half_pi, normalize_minus_pi_pi, normalize_minus_pi_pi_fast,
    normalize_zero_two_pi, normalize_zero_two_pi_fast, remainder_pi, remainder_two_pi,
    remainder_two_pi_fast,
};
pub use root::{cbrt, hypot, inv_sqrt_quick, inv_sqrt_quick_f32, sqrt, sqrt_quick, sqrt_quick_f32};
pub use rounding::{ceil, floor, next_down, next_up, rint, round, round_even, scalb, signum, ulp};
pub use tables::init;
pub use trig::{cos, cos_quick, sin, sin_and_cos, sin_quick, tan, to_degrees, to_radians};

pub use bits::copy_sign;
pub use float::FloatBits;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::MathConfig;
    pub use crate::error::{Error, Result};
    pub use crate::float::FloatBits;

    pub use crate::exp::{exp, expm1};
    pub use crate::hyperbolic::{acosh, asinh, atanh, cosh, sinh, sinh_and_cosh, tanh};
    pub use crate::inverse_trig::{acos, asin, atan, atan2};
    pub use crate::log::{log, log10, log1p};
    pub use crate::pow::pow;
    pub use crate::root::{cbrt, hypot, sqrt};
    pub use crate::trig::{cos, sin, sin_and_cos, tan};
}
