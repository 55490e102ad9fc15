//! One-shot construction of [`MathTables`] from a baseline library

use std::time::Instant;

use super::layout::*;
use super::{LookupTable, MathTables, RootTable, TaylorTable};
use crate::baseline::BaselineMath;
use crate::error::Result;

/// Populates every lookup table from a [`BaselineMath`] implementation.
///
/// ```
/// use tabmath::baseline::Libm;
/// use tabmath::tables::TableBuilder;
///
/// let tables = TableBuilder::new(Libm).build().unwrap();
/// assert!(tables.total_entries() > 50_000);
/// ```
#[derive(Debug, Clone)]
pub struct TableBuilder<B: BaselineMath> {
    baseline: B,
}

impl<B: BaselineMath> TableBuilder<B> {
    /// Create a builder reading reference values from `baseline`.
    pub fn new(baseline: B) -> Self {
        Self { baseline }
    }

    /// Build and validate every table.
    pub fn build(&self) -> Result<MathTables> {
        let _span = tracing::debug_span!("build_tables").entered();
        let started = Instant::now();

        let (sin, cos) = self.sin_cos();
        let tables = MathTables {
            sin,
            cos,
            tan: self.tan(),
            asin: self.asin(),
            atan: self.atan(),
            exp_hi: self.exp_hi(),
            exp_lo_pos: self.exp_lo_pos(),
            exp_lo_neg: self.exp_lo_neg(),
            log_x_log: self.log_x_log(),
            log_x_inv: LookupTable::from_fn(LOG_TABS_SIZE, |i| 1.0 / mantissa_at(i, LOG_BITS)),
            sqrt: self.sqrt(),
            cbrt: self.cbrt(),
        };
        tables.validate()?;

        tracing::debug!(
            tables = tables.entries().len(),
            entries = tables.total_entries(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "lookup tables built"
        );
        Ok(tables)
    }

    fn sin_cos(&self) -> (LookupTable, LookupTable) {
        let b = &self.baseline;
        let quarter = (SIN_COS_TABS_SIZE - 1) / 4;
        let angle = |i: usize| i as f64 * SIN_COS_DELTA_HI + i as f64 * SIN_COS_DELTA_LO;

        // Force exact zeros at π, 2π (sine) and π/2, 3π/2 (cosine).
        let sin = LookupTable::from_fn(SIN_COS_TABS_SIZE, |i| {
            if i == 2 * quarter || i == 4 * quarter {
                0.0
            } else {
                b.sin(angle(i))
            }
        });
        let cos = LookupTable::from_fn(SIN_COS_TABS_SIZE, |i| {
            if i == quarter || i == 3 * quarter {
                0.0
            } else {
                b.cos(angle(i))
            }
        });
        (sin, cos)
    }

    fn tan(&self) -> TaylorTable {
        let b = &self.baseline;
        let angle = |i: usize| i as f64 * TAN_DELTA_HI + i as f64 * TAN_DELTA_LO;
        let sin_cos = |i: usize| {
            let a = angle(i);
            (b.sin(a), b.cos(a))
        };

        TaylorTable {
            value: LookupTable::from_fn(TAN_TABS_SIZE, |i| b.tan(angle(i))),
            d1: LookupTable::from_fn(TAN_TABS_SIZE, |i| {
                let (_, c) = sin_cos(i);
                1.0 / (c * c)
            }),
            d2: LookupTable::from_fn(TAN_TABS_SIZE, |i| {
                let (s, c) = sin_cos(i);
                (2.0 * s / (c * c * c)) / 2.0
            }),
            d3: LookupTable::from_fn(TAN_TABS_SIZE, |i| {
                let (s, c) = sin_cos(i);
                let c2 = c * c;
                (2.0 * (1.0 + 2.0 * s * s) / (c2 * c2)) / 6.0
            }),
            d4: LookupTable::from_fn(TAN_TABS_SIZE, |i| {
                let (s, c) = sin_cos(i);
                let c2 = c * c;
                (8.0 * s * (2.0 + s * s) / (c2 * c2 * c)) / 24.0
            }),
        }
    }

    fn asin(&self) -> TaylorTable {
        let b = &self.baseline;
        let x = |i: usize| i as f64 * ASIN_DELTA;
        // (1 - x²)^(-k/2)
        let one_minus_x2_pow = |i: usize, k: f64| b.pow(1.0 - x(i) * x(i), -k / 2.0);

        TaylorTable {
            value: LookupTable::from_fn(ASIN_TABS_SIZE, |i| b.asin(x(i))),
            d1: LookupTable::from_fn(ASIN_TABS_SIZE, |i| one_minus_x2_pow(i, 1.0)),
            d2: LookupTable::from_fn(ASIN_TABS_SIZE, |i| x(i) * one_minus_x2_pow(i, 3.0) / 2.0),
            d3: LookupTable::from_fn(ASIN_TABS_SIZE, |i| {
                let x = x(i);
                (1.0 + 2.0 * x * x) * one_minus_x2_pow(i, 5.0) / 6.0
            }),
            d4: LookupTable::from_fn(ASIN_TABS_SIZE, |i| {
                let x = x(i);
                x * (9.0 + 6.0 * x * x) * one_minus_x2_pow(i, 7.0) / 24.0
            }),
        }
    }

    fn atan(&self) -> TaylorTable {
        let b = &self.baseline;
        let x = |i: usize| i as f64 * ATAN_DELTA;
        let one_plus_x2 = |i: usize| 1.0 + x(i) * x(i);

        TaylorTable {
            value: LookupTable::from_fn(ATAN_TABS_SIZE, |i| b.atan(x(i))),
            d1: LookupTable::from_fn(ATAN_TABS_SIZE, |i| 1.0 / one_plus_x2(i)),
            d2: LookupTable::from_fn(ATAN_TABS_SIZE, |i| {
                let p = one_plus_x2(i);
                (-2.0 * x(i) / (p * p)) / 2.0
            }),
            d3: LookupTable::from_fn(ATAN_TABS_SIZE, |i| {
                let (x, p) = (x(i), one_plus_x2(i));
                ((6.0 * x * x - 2.0) / (p * p * p)) / 6.0
            }),
            d4: LookupTable::from_fn(ATAN_TABS_SIZE, |i| {
                let (x, p) = (x(i), one_plus_x2(i));
                (24.0 * x * (1.0 - x * x) / (p * p * p * p)) / 24.0
            }),
        }
    }

    fn exp_hi(&self) -> LookupTable {
        LookupTable::from_fn(EXP_HI_TABS_SIZE, |i| {
            self.baseline.exp((i as i32 + EXP_MIN_INT_LIMIT) as f64)
        })
    }

    fn exp_lo_pos(&self) -> LookupTable {
        LookupTable::from_fn(EXP_LO_TABS_SIZE, |i| self.baseline.exp(exp_lo_argument(i)))
    }

    /// `1 - e^-x`, evaluated as `-expm1(-x)` to keep precision near 0.
    fn exp_lo_neg(&self) -> LookupTable {
        LookupTable::from_fn(EXP_LO_TABS_SIZE, |i| -self.baseline.expm1(-exp_lo_argument(i)))
    }

    fn log_x_log(&self) -> LookupTable {
        LookupTable::from_fn(LOG_TABS_SIZE, |i| self.baseline.log(mantissa_at(i, LOG_BITS)))
    }

    fn sqrt(&self) -> RootTable {
        let b = &self.baseline;
        let exponent = |i: usize| i as f64 - ROOT_HI_EXPONENT_OFFSET as f64;
        RootTable {
            hi: LookupTable::from_fn(ROOT_HI_TABS_SIZE, |i| b.pow(2.0, exponent(i) * 0.5) * 0.5),
            hi_slope: LookupTable::from_fn(ROOT_HI_TABS_SIZE, |i| {
                b.pow(2.0, -exponent(i) * 0.5)
            }),
            lo: LookupTable::from_fn(ROOT_LO_TABS_SIZE, |i| b.sqrt(mantissa_at(i, ROOT_LO_BITS))),
            lo_slope: LookupTable::from_fn(ROOT_LO_TABS_SIZE, |i| {
                1.0 / b.sqrt(mantissa_at(i, ROOT_LO_BITS))
            }),
        }
    }

    fn cbrt(&self) -> RootTable {
        let b = &self.baseline;
        let exponent = |i: usize| i as f64 - ROOT_HI_EXPONENT_OFFSET as f64;
        RootTable {
            hi: LookupTable::from_fn(ROOT_HI_TABS_SIZE, |i| {
                b.pow(2.0, exponent(i) / 3.0) * 0.5
            }),
            hi_slope: LookupTable::from_fn(ROOT_HI_TABS_SIZE, |i| {
                (4.0 / 3.0) * b.pow(2.0, -2.0 * exponent(i) / 3.0)
            }),
            lo: LookupTable::from_fn(ROOT_LO_TABS_SIZE, |i| b.cbrt(mantissa_at(i, ROOT_LO_BITS))),
            lo_slope: LookupTable::from_fn(ROOT_LO_TABS_SIZE, |i| {
                let r = b.cbrt(mantissa_at(i, ROOT_LO_BITS));
                1.0 / (r * r)
            }),
        }
    }
}

/// Argument anchored at slot `i` of the low exp tables, in [-1, 1].
fn exp_lo_argument(i: usize) -> f64 {
    (i as i32 - EXP_LO_TAB_MID_INDEX) as f64 / EXP_LO_INDEXING
}

/// `1 + i/2^bits`
fn mantissa_at(i: usize, bits: u32) -> f64 {
    1.0 + i as f64 / (1u64 << bits) as f64
}
