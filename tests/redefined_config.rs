//! Integration tests for the table-driven `log` and `sqrt`
//!
//! Runs as its own test binary with every table-driven implementation
//! enabled.

mod common;

use common::{assert_close, log_uniform, uniform};
use tabmath::config::{MathConfig, config};
use tabmath::prelude::*;

fn use_tables() {
    MathConfig::all_redefined().install().unwrap();
}

#[test]
fn test_config_in_effect() {
    use_tables();
    let cfg = config();
    assert!(!cfg.use_platform_library);
    assert!(cfg.use_redefined_log && cfg.use_redefined_sqrt);
}

#[test]
fn test_table_log_random() {
    use_tables();
    for x in log_uniform(20_000, -307.0, 308.0) {
        let x = x.abs();
        assert_close(log(x), libm::log(x), 2e-15, 2e-15, &format!("log({x})"));
        assert_close(log10(x), libm::log10(x), 4e-15, 2e-15, &format!("log10({x})"));
    }
    for x in uniform(10_000, 0.9, 1.2) {
        assert_close(log(x), libm::log(x), 1e-14, 0.0, &format!("log({x})"));
    }
}

#[test]
fn test_table_log_special_values() {
    use_tables();
    assert_eq!(log(1.0), 0.0);
    assert_eq!(log(0.0), f64::NEG_INFINITY);
    assert_eq!(log(f64::INFINITY), f64::INFINITY);
    assert!(log(-1.0).is_nan());
    assert!(log10(f64::NAN).is_nan());
    assert_close(log(f64::from_bits(1)), -744.4400719213812, 1e-15, 0.0, "log(min subnormal)");
}

#[test]
fn test_table_sqrt_random() {
    use_tables();
    for x in log_uniform(20_000, -307.0, 308.0) {
        let x = x.abs();
        assert_close(sqrt(x), x.sqrt(), 1e-15, 0.0, &format!("sqrt({x})"));
    }
    for k in 1..=1000 {
        let n = k as f64;
        assert_close(sqrt(n * n), n, 1e-15, 0.0, &format!("sqrt({n}^2)"));
    }
}

#[test]
fn test_table_sqrt_special_values() {
    use_tables();
    assert_eq!(sqrt(4.0), 2.0);
    assert!(sqrt(-1.0).is_nan());
    assert_eq!(sqrt(-0.0).to_bits(), (-0.0f64).to_bits());
    assert_eq!(sqrt(f64::INFINITY), f64::INFINITY);
    assert!(sqrt(f64::NAN).is_nan());
}

#[test]
fn test_dependent_functions_with_table_log_and_sqrt() {
    use_tables();
    for x in uniform(5_000, 0.01, 100.0) {
        assert_close(pow(x, 2.5), libm::pow(x, 2.5), 5e-14, 0.0, &format!("pow({x}, 2.5)"));
        assert_close(asinh(x), libm::asinh(x), 3e-14, 0.0, &format!("asinh({x})"));
        assert_close(hypot(x, 1.0), libm::hypot(x, 1.0), 2e-15, 0.0, &format!("hypot({x}, 1)"));
    }
}
