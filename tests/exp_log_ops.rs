//! Integration tests for exponentials and logarithms

mod common;

use common::{assert_allclose_f64, assert_close, log_uniform, uniform};
use tabmath::{exp, exp_quick, expm1, log, log_quick, log10, log1p};

// ============================================================================
// Exponentials
// ============================================================================

#[test]
fn test_exp_random() {
    let xs = uniform(20_000, -700.0, 709.0);
    let actual: Vec<f64> = xs.iter().map(|&x| exp(x)).collect();
    let expected: Vec<f64> = xs.iter().map(|&x| libm::exp(x)).collect();
    assert_allclose_f64(&actual, &expected, 2e-15, 0.0, "exp over [-700, 709)");
    for x in uniform(20_000, -1.0, 1.0) {
        assert_close(exp(x), libm::exp(x), 2e-15, 0.0, &format!("exp({x})"));
    }
}

#[test]
fn test_exp_subnormal_results() {
    for x in uniform(1_000, -745.0, -708.5) {
        let expected = libm::exp(x);
        assert_close(exp(x), expected, 2e-15, f64::from_bits(1), &format!("exp({x})"));
    }
}

#[test]
fn test_exp_overflow_underflow() {
    assert_eq!(exp(710.0), f64::INFINITY);
    assert_eq!(exp(-746.0), 0.0);
    assert!(exp(709.78).is_finite());
    assert!(exp(-745.0) > 0.0);
}

#[test]
fn test_expm1_random() {
    for x in log_uniform(20_000, -20.0, 2.5) {
        assert_close(expm1(x), libm::expm1(x), 2e-15, 0.0, &format!("expm1({x})"));
    }
}

#[test]
fn test_exp_quick_random() {
    for x in uniform(10_000, -700.0, 700.0) {
        assert_close(exp_quick(x), libm::exp(x), 4.5e-2, 0.0, &format!("exp_quick({x})"));
    }
}

#[test]
fn test_exp_quick_range_limits() {
    assert!(exp_quick(700.0).is_finite() && exp_quick(700.0) > 0.0);
    assert!(exp_quick(-700.0) > 0.0);
    // Saturated bit patterns past the valid range.
    assert!(exp_quick(800.0).is_nan());
    assert!(exp_quick(-800.0) < 0.0);
}

// ============================================================================
// Logarithms
// ============================================================================

#[test]
fn test_log_random() {
    for x in log_uniform(20_000, -307.0, 308.0) {
        let x = x.abs();
        let expected = libm::log(x);
        assert_close(log(x), expected, 2e-15, 2e-15, &format!("log({x})"));
        assert_close(log10(x), libm::log10(x), 2e-15, 2e-15, &format!("log10({x})"));
    }
}

#[test]
fn test_log_inverts_exp() {
    for x in uniform(5_000, -700.0, 700.0) {
        assert_close(log(exp(x)), x, 1e-15, 2e-15, &format!("log(exp({x}))"));
    }
}

#[test]
fn test_log10_powers_of_ten() {
    for k in -300..=300 {
        let x: f64 = format!("1e{k}").parse().unwrap();
        assert_close(log10(x), k as f64, 0.0, 1e-13, &format!("log10(1e{k})"));
    }
}

#[test]
fn test_log1p_random() {
    for x in uniform(20_000, -0.999, 10.0) {
        let expected = libm::log1p(x);
        assert_close(log1p(x), expected, 1e-14, 0.0, &format!("log1p({x})"));
    }
    for x in log_uniform(5_000, -300.0, -1.0) {
        let expected = libm::log1p(x);
        assert_close(log1p(x), expected, 1e-14, 0.0, &format!("log1p({x})"));
    }
}

#[test]
fn test_log_quick_random() {
    for x in log_uniform(10_000, -300.0, 300.0) {
        let x = x.abs();
        let expected = libm::log(x);
        assert_close(log_quick(x), expected, 2e-3, 0.0, &format!("log_quick({x})"));
    }
}
