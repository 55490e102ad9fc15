//! Common test utilities
#![allow(dead_code)]

use rand::Rng;

/// Assert `actual` is within `atol + rtol * |expected|` of `expected`
pub fn assert_close(actual: f64, expected: f64, rtol: f64, atol: f64, msg: &str) {
    let diff = (actual - expected).abs();
    let tol = atol + rtol * expected.abs();
    assert!(
        diff <= tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        actual,
        expected,
        diff,
        tol
    );
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert both values are NaN, or have identical bits
pub fn assert_same_bits(actual: f64, expected: f64, msg: &str) {
    if expected.is_nan() {
        assert!(actual.is_nan(), "{}: expected NaN, got {}", msg, actual);
    } else {
        assert_eq!(actual.to_bits(), expected.to_bits(), "{}: {} vs {}", msg, actual, expected);
    }
}

/// `count` uniform samples in `[lo, hi)`
pub fn uniform(count: usize, lo: f64, hi: f64) -> Vec<f64> {
    let mut rng = rand::rng();
    (0..count).map(|_| rng.random_range(lo..hi)).collect()
}

/// `count` samples spread log-uniformly over `[10^lo_exp, 10^hi_exp)`, both signs
pub fn log_uniform(count: usize, lo_exp: f64, hi_exp: f64) -> Vec<f64> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let magnitude = 10f64.powf(rng.random_range(lo_exp..hi_exp));
            if rng.random_bool(0.5) { magnitude } else { -magnitude }
        })
        .collect()
}

/// Values every function must handle without panicking
pub const SPECIALS: [f64; 12] = [
    0.0,
    -0.0,
    1.0,
    -1.0,
    f64::MIN_POSITIVE,
    -f64::MIN_POSITIVE,
    4.9e-324,
    f64::MAX,
    f64::MIN,
    f64::INFINITY,
    f64::NEG_INFINITY,
    f64::NAN,
];
