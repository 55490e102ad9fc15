//! Reference math used to populate the lookup tables
//!
//! Table construction only needs a handful of correctly implemented (but
//! slow) functions. They are reached through [`BaselineMath`] so the builder
//! can be fed either the pure-Rust [`Libm`] port, which yields identical
//! tables on every platform, or the [`Platform`] implementation backed by
//! `std`.

/// Slow but correct scalar math consumed by the table builder.
pub trait BaselineMath: Send + Sync {
    /// Sine
    fn sin(&self, x: f64) -> f64;
    /// Cosine
    fn cos(&self, x: f64) -> f64;
    /// Tangent
    fn tan(&self, x: f64) -> f64;
    /// Arcsine
    fn asin(&self, x: f64) -> f64;
    /// Arctangent
    fn atan(&self, x: f64) -> f64;
    /// `e^x`
    fn exp(&self, x: f64) -> f64;
    /// `e^x - 1`
    fn expm1(&self, x: f64) -> f64;
    /// Natural logarithm
    fn log(&self, x: f64) -> f64;
    /// Square root
    fn sqrt(&self, x: f64) -> f64;
    /// Cube root
    fn cbrt(&self, x: f64) -> f64;
    /// `x^y`
    fn pow(&self, x: f64, y: f64) -> f64;
}

/// Baseline backed by the `libm` crate (fdlibm port, deterministic).
#[derive(Debug, Clone, Copy, Default)]
pub struct Libm;

/// Baseline backed by the `std` float methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct Platform;

impl BaselineMath for Libm {
    #[inline]
    fn sin(&self, x: f64) -> f64 {
        libm::sin(x)
    }
    #[inline]
    fn cos(&self, x: f64) -> f64 {
        libm::cos(x)
    }
    #[inline]
    fn tan(&self, x: f64) -> f64 {
        libm::tan(x)
    }
    #[inline]
    fn asin(&self, x: f64) -> f64 {
        libm::asin(x)
    }
    #[inline]
    fn atan(&self, x: f64) -> f64 {
        libm::atan(x)
    }
    #[inline]
    fn exp(&self, x: f64) -> f64 {
        libm::exp(x)
    }
    #[inline]
    fn expm1(&self, x: f64) -> f64 {
        libm::expm1(x)
    }
    #[inline]
    fn log(&self, x: f64) -> f64 {
        libm::log(x)
    }
    #[inline]
    fn sqrt(&self, x: f64) -> f64 {
        libm::sqrt(x)
    }
    #[inline]
    fn cbrt(&self, x: f64) -> f64 {
        libm::cbrt(x)
    }
    #[inline]
    fn pow(&self, x: f64, y: f64) -> f64 {
        libm::pow(x, y)
    }
}

impl BaselineMath for Platform {
    #[inline]
    fn sin(&self, x: f64) -> f64 {
        x.sin()
    }
    #[inline]
    fn cos(&self, x: f64) -> f64 {
        x.cos()
    }
    #[inline]
    fn tan(&self, x: f64) -> f64 {
        x.tan()
    }
    #[inline]
    fn asin(&self, x: f64) -> f64 {
        x.asin()
    }
    #[inline]
    fn atan(&self, x: f64) -> f64 {
        x.atan()
    }
    #[inline]
    fn exp(&self, x: f64) -> f64 {
        x.exp()
    }
    #[inline]
    fn expm1(&self, x: f64) -> f64 {
        x.exp_m1()
    }
    #[inline]
    fn log(&self, x: f64) -> f64 {
        x.ln()
    }
    #[inline]
    fn sqrt(&self, x: f64) -> f64 {
        x.sqrt()
    }
    #[inline]
    fn cbrt(&self, x: f64) -> f64 {
        x.cbrt()
    }
    #[inline]
    fn pow(&self, x: f64, y: f64) -> f64 {
        x.powf(y)
    }
}
