//! Integration tests for roots and powers

mod common;

use common::{assert_close, log_uniform, uniform};
use tabmath::{
    cbrt, hypot, inv_sqrt_quick, inv_sqrt_quick_f32, pow, pow_int, pow_quick, pow2, pow3, sqrt,
    sqrt_quick, sqrt_quick_f32,
};

// ============================================================================
// Roots
// ============================================================================

#[test]
fn test_sqrt_random() {
    for x in log_uniform(10_000, -300.0, 300.0) {
        let x = x.abs();
        assert_close(sqrt(x), x.sqrt(), 5e-16, 0.0, &format!("sqrt({x})"));
    }
}

#[test]
fn test_cbrt_random() {
    for x in log_uniform(20_000, -307.0, 307.0) {
        assert_close(cbrt(x), libm::cbrt(x), 1e-15, 0.0, &format!("cbrt({x})"));
    }
}

#[test]
fn test_cbrt_perfect_cubes() {
    for k in 1..=1000 {
        let n = k as f64;
        assert_close(cbrt(n * n * n), n, 1e-15, 0.0, &format!("cbrt({n}^3)"));
        assert_close(cbrt(-n * n * n), -n, 1e-15, 0.0, &format!("cbrt(-{n}^3)"));
    }
}

#[test]
fn test_hypot_random() {
    let xs = log_uniform(5_000, -150.0, 150.0);
    let ys = log_uniform(5_000, -150.0, 150.0);
    for (&x, &y) in xs.iter().zip(&ys) {
        assert_close(hypot(x, y), libm::hypot(x, y), 1e-15, 0.0, &format!("hypot({x}, {y})"));
    }
}

#[test]
fn test_hypot_extreme_magnitudes() {
    let cases = [(1e300, 1e300), (1e-300, 1e-300), (3e200, 4e200), (3e-200, 4e-200)];
    for &(x, y) in &cases {
        assert_close(hypot(x, y), libm::hypot(x, y), 1e-15, 0.0, &format!("hypot({x}, {y})"));
    }
    assert_close(hypot(3e200, 4e200), 5e200, 1e-15, 0.0, "hypot(3e200, 4e200)");
}

#[test]
fn test_quick_roots_random() {
    for x in log_uniform(10_000, -30.0, 30.0) {
        let x = x.abs();
        assert_close(sqrt_quick(x), x.sqrt(), 4e-2, 0.0, &format!("sqrt_quick({x})"));
        assert_close(inv_sqrt_quick(x), 1.0 / x.sqrt(), 4e-2, 0.0, &format!("inv_sqrt_quick({x})"));
        let xf = x as f32;
        let exact = (xf as f64).sqrt();
        assert_close(sqrt_quick_f32(xf) as f64, exact, 5e-2, 0.0, &format!("sqrt_quick_f32({xf})"));
        assert_close(
            inv_sqrt_quick_f32(xf) as f64,
            1.0 / exact,
            4e-2,
            0.0,
            &format!("inv_sqrt_quick_f32({xf})"),
        );
    }
}

// ============================================================================
// Powers
// ============================================================================

#[test]
fn test_pow_random_positive_base() {
    let bases = uniform(10_000, 0.01, 100.0);
    let powers = uniform(10_000, -50.0, 50.0);
    for (&x, &y) in bases.iter().zip(&powers) {
        let expected = libm::pow(x, y);
        let scale = (y * libm::log(x)).abs().max(1.0);
        assert_close(pow(x, y), expected, 2e-15 * scale, 0.0, &format!("pow({x}, {y})"));
    }
}

#[test]
fn test_pow_negative_base_integer_powers() {
    for x in uniform(2_000, -10.0, -0.1) {
        for y in [-5.0, -2.0, 2.0, 3.0, 7.0] {
            let expected = libm::pow(x, y);
            assert_close(pow(x, y), expected, 1e-14, 0.0, &format!("pow({x}, {y})"));
        }
        assert!(pow(x, 0.5).is_nan(), "pow({x}, 0.5)");
    }
}

#[test]
fn test_pow_quick_moderate_results() {
    let bases = uniform(10_000, 0.1, 10.0);
    let powers = uniform(10_000, -0.8, 0.8);
    for (&x, &y) in bases.iter().zip(&powers) {
        let expected = libm::pow(x, y);
        assert_close(pow_quick(x, y), expected, 4e-3, 0.0, &format!("pow_quick({x}, {y})"));
    }
}

#[test]
fn test_pow_int_matches_powi() {
    for x in uniform(2_000, -3.0, 3.0) {
        for n in -20..=20 {
            let expected = libm::pow(x, n as f64);
            assert_close(pow_int(x, n), expected, 1e-14, 1e-300, &format!("pow_int({x}, {n})"));
        }
    }
    assert_eq!(pow_int(2.0, 1023), 2f64.powi(1023));
    assert_eq!(pow_int(2.0, 1024), f64::INFINITY);
    assert_eq!(pow_int(-2.0, -3), -0.125);
    assert_eq!(pow_int(0.5, 1074), f64::from_bits(1));
}

#[test]
fn test_small_powers() {
    for x in uniform(1_000, -1e100, 1e100) {
        assert_eq!(pow2(x), x * x);
        assert_eq!(pow3(x), x * x * x);
    }
}
