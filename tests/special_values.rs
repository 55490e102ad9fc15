//! Integration tests for NaN, infinity and signed-zero handling

mod common;

use common::{SPECIALS, assert_same_bits};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use tabmath::prelude::*;
use tabmath::{cosh_m1, expm1, log_quick, pow_int, sqrt_quick};

type Unary = fn(f64) -> f64;

const UNARY: [(&str, Unary); 22] = [
    ("sin", sin),
    ("cos", cos),
    ("tan", tan),
    ("asin", asin),
    ("acos", acos),
    ("atan", atan),
    ("exp", exp),
    ("expm1", expm1),
    ("log", log),
    ("log10", log10),
    ("log1p", log1p),
    ("sqrt", sqrt),
    ("cbrt", cbrt),
    ("sinh", sinh),
    ("cosh", cosh),
    ("cosh_m1", cosh_m1),
    ("tanh", tanh),
    ("asinh", asinh),
    ("acosh", acosh),
    ("atanh", atanh),
    ("log_quick", log_quick),
    ("sqrt_quick", sqrt_quick),
];

#[test]
fn test_nan_in_nan_out() {
    for (name, f) in UNARY {
        if name.ends_with("_quick") {
            continue;
        }
        assert!(f(f64::NAN).is_nan(), "{name}(NaN)");
    }
    assert!(atan2(f64::NAN, 1.0).is_nan());
    assert!(hypot(f64::NAN, 1.0).is_nan());
    assert!(pow(f64::NAN, 2.0).is_nan());
}

#[test]
fn test_specials_never_panic() {
    for (_, f) in UNARY {
        for &x in &SPECIALS {
            let _ = f(x);
        }
    }
    for &y in &SPECIALS {
        for &x in &SPECIALS {
            let _ = atan2(y, x);
            let _ = hypot(y, x);
            let _ = pow(y, x);
        }
        let _ = pow_int(y, i32::MIN);
        let _ = sin_and_cos(y);
        let _ = sinh_and_cosh(y);
    }
}

#[test]
fn test_odd_functions_are_bit_symmetric() {
    let odd: [(&str, Unary); 9] = [
        ("sin", sin),
        ("tan", tan),
        ("asin", asin),
        ("atan", atan),
        ("cbrt", cbrt),
        ("sinh", sinh),
        ("tanh", tanh),
        ("asinh", asinh),
        ("atanh", atanh),
    ];
    let samples = [1e-300, 1e-9, 0.1, 0.5, 0.9, 0.99, 1.5, 3.0, 42.0, 1e6, 1e20, 1e300];
    for (name, f) in odd {
        for &x in &samples {
            assert_same_bits(f(-x), -f(x), &format!("{name}(-{x})"));
        }
        assert_same_bits(f(-0.0), -0.0, &format!("{name}(-0)"));
        assert_same_bits(f(0.0), 0.0, &format!("{name}(+0)"));
    }
}

#[test]
fn test_even_functions_are_bit_symmetric() {
    let even: [(&str, Unary); 3] = [("cos", cos), ("cosh", cosh), ("cosh_m1", cosh_m1)];
    for (name, f) in even {
        for &x in &[1e-300, 0.1, 2.0, 100.0, 1e10, 1e300] {
            assert_same_bits(f(-x), f(x), &format!("{name}(-{x})"));
        }
    }
}

#[test]
fn test_documented_scenarios() {
    assert_eq!(sqrt(4.0), 2.0);
    assert!(sqrt(-1.0).is_nan());
    assert_eq!(pow(2.0, 10.0).round(), 1024.0);
    assert!((pow(2.0, 10.0) - 1024.0).abs() < 1e-12);
    assert_eq!(pow(0.0, -1.0), f64::INFINITY);
    assert!(pow(-1.0, 0.5).is_nan());
    assert_eq!(atan2(0.0, -0.0), PI);
    assert_eq!(atan2(-0.0, -0.0), -PI);
    assert_eq!(atan2(-0.0, 0.0).to_bits(), (-0.0f64).to_bits());
    let (s, c) = sin_and_cos(1e20 * PI);
    assert!((s * s + c * c - 1.0).abs() < 1e-14);
}

#[test]
fn test_infinities() {
    let inf = f64::INFINITY;
    assert!(sin(inf).is_nan() && cos(-inf).is_nan() && tan(inf).is_nan());
    assert_eq!(atan(inf), FRAC_PI_2);
    assert_eq!(atan2(inf, inf), FRAC_PI_4);
    assert_eq!(exp(inf), inf);
    assert_eq!(exp(-inf), 0.0);
    assert_eq!(expm1(-inf), -1.0);
    assert_eq!(log(inf), inf);
    assert_eq!(log(0.0), -inf);
    assert_eq!(log1p(-1.0), -inf);
    assert_eq!(cbrt(-inf), -inf);
    assert_eq!(sinh(-inf), -inf);
    assert_eq!(cosh(-inf), inf);
    assert_eq!(tanh(-inf), -1.0);
    assert_eq!(asinh(-inf), -inf);
    assert_eq!(acosh(inf), inf);
    assert_eq!(atanh(1.0), inf);
    assert_eq!(atanh(-1.0), -inf);
    assert_eq!(hypot(-inf, f64::NAN), inf);
    assert_eq!(pow(-inf, 3.0), -inf);
    assert_eq!(pow(0.5, inf), 0.0);
    assert_eq!(pow(2.0, -inf), 0.0);
}

#[test]
fn test_domain_errors() {
    assert!(asin(1.5).is_nan());
    assert!(acos(-1.5).is_nan());
    assert!(log(-1e-300).is_nan());
    assert!(log1p(-1.5).is_nan());
    assert!(acosh(0.999).is_nan());
    assert!(atanh(1.5).is_nan());
    assert!(pow(-8.0, 1.0 / 3.0).is_nan());
}
