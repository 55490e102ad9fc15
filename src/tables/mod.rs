//! Precomputed lookup tables
//!
//! Every table-driven function reads its anchors from one immutable
//! [`MathTables`] snapshot. The snapshot is built on first use (or eagerly
//! through [`crate::init`]) and published through a `OnceLock`, which makes
//! it visible to all threads without any locking on the hot path.
//!
//! # Families
//!
//! | Family | Tables | Indexed by |
//! |--------|--------|------------|
//! | sin/cos | value | angle in [0, 2π] |
//! | tan | value + 4 scaled derivatives | angle in [0, 77°] |
//! | asin | value + 4 scaled derivatives | argument in [0, sin 73°] |
//! | atan | value + 4 scaled derivatives | argument in [0, tan 74°] |
//! | exp | integer part, fractional part, `1 - e^-x` | argument |
//! | log | `ln(1+m)`, `1/(1+m)` | top 12 mantissa bits |
//! | sqrt/cbrt | exponent part + slope, mantissa part + slope | exponent, mantissa |

mod builder;
pub(crate) mod layout;

pub use builder::TableBuilder;

use std::sync::OnceLock;

use crate::baseline::Libm;
use crate::error::{Error, Result};
use layout::*;

/// Immutable, fixed-size sequence of precomputed values.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable(Box<[f64]>);

impl LookupTable {
    pub(crate) fn from_fn(len: usize, f: impl FnMut(usize) -> f64) -> Self {
        Self((0..len).map(f).collect())
    }

    /// Value at `index`.
    #[inline(always)]
    pub fn get(&self, index: usize) -> f64 {
        self.0[index]
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the table has no slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All values, in index order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Function values plus their first four derivatives divided by `k!`.
///
/// Evaluating at slot `i` and offset `d` is the degree-4 Taylor expansion
/// around the slot's anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct TaylorTable {
    pub(crate) value: LookupTable,
    pub(crate) d1: LookupTable,
    pub(crate) d2: LookupTable,
    pub(crate) d3: LookupTable,
    pub(crate) d4: LookupTable,
}

impl TaylorTable {
    /// `f(a_i + d)` in Horner form.
    #[inline(always)]
    pub(crate) fn eval(&self, index: usize, delta: f64) -> f64 {
        self.value.get(index)
            + delta
                * (self.d1.get(index)
                    + delta
                        * (self.d2.get(index)
                            + delta * (self.d3.get(index) + delta * self.d4.get(index))))
    }

    /// `f(a_i - d)` in Horner form.
    #[inline(always)]
    pub(crate) fn eval_backward(&self, index: usize, delta: f64) -> f64 {
        self.value.get(index)
            - delta
                * (self.d1.get(index)
                    - delta
                        * (self.d2.get(index)
                            - delta * (self.d3.get(index) - delta * self.d4.get(index))))
    }

    /// Slots per table.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// `true` when the tables have no slot.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn tables(&self) -> [&LookupTable; 5] {
        [&self.value, &self.d1, &self.d2, &self.d3, &self.d4]
    }
}

/// Split anchors for a root: one factor per binary exponent, one per top
/// mantissa bits, each with the slope used by the Newton refinement.
#[derive(Debug, Clone, PartialEq)]
pub struct RootTable {
    pub(crate) hi: LookupTable,
    pub(crate) hi_slope: LookupTable,
    pub(crate) lo: LookupTable,
    pub(crate) lo_slope: LookupTable,
}

impl RootTable {
    fn tables(&self) -> [&LookupTable; 4] {
        [&self.hi, &self.hi_slope, &self.lo, &self.lo_slope]
    }
}

/// Every lookup table, built once.
#[derive(Debug, Clone, PartialEq)]
pub struct MathTables {
    pub(crate) sin: LookupTable,
    pub(crate) cos: LookupTable,
    pub(crate) tan: TaylorTable,
    pub(crate) asin: TaylorTable,
    pub(crate) atan: TaylorTable,
    pub(crate) exp_hi: LookupTable,
    pub(crate) exp_lo_pos: LookupTable,
    pub(crate) exp_lo_neg: LookupTable,
    pub(crate) log_x_log: LookupTable,
    pub(crate) log_x_inv: LookupTable,
    pub(crate) sqrt: RootTable,
    pub(crate) cbrt: RootTable,
}

impl MathTables {
    /// Named view of every table, for validation and inspection.
    pub fn entries(&self) -> Vec<(&'static str, &LookupTable)> {
        let [tan, tan_d1, tan_d2, tan_d3, tan_d4] = self.tan.tables();
        let [asin, asin_d1, asin_d2, asin_d3, asin_d4] = self.asin.tables();
        let [atan, atan_d1, atan_d2, atan_d3, atan_d4] = self.atan.tables();
        let [sqrt_hi, sqrt_hi_slope, sqrt_lo, sqrt_lo_slope] = self.sqrt.tables();
        let [cbrt_hi, cbrt_hi_slope, cbrt_lo, cbrt_lo_slope] = self.cbrt.tables();
        vec![
            ("sin", &self.sin),
            ("cos", &self.cos),
            ("tan", tan),
            ("tan_d1", tan_d1),
            ("tan_d2", tan_d2),
            ("tan_d3", tan_d3),
            ("tan_d4", tan_d4),
            ("asin", asin),
            ("asin_d1", asin_d1),
            ("asin_d2", asin_d2),
            ("asin_d3", asin_d3),
            ("asin_d4", asin_d4),
            ("atan", atan),
            ("atan_d1", atan_d1),
            ("atan_d2", atan_d2),
            ("atan_d3", atan_d3),
            ("atan_d4", atan_d4),
            ("exp_hi", &self.exp_hi),
            ("exp_lo_pos", &self.exp_lo_pos),
            ("exp_lo_neg", &self.exp_lo_neg),
            ("log_x_log", &self.log_x_log),
            ("log_x_inv", &self.log_x_inv),
            ("sqrt_hi", sqrt_hi),
            ("sqrt_hi_slope", sqrt_hi_slope),
            ("sqrt_lo", sqrt_lo),
            ("sqrt_lo_slope", sqrt_lo_slope),
            ("cbrt_hi", cbrt_hi),
            ("cbrt_hi_slope", cbrt_hi_slope),
            ("cbrt_lo", cbrt_lo),
            ("cbrt_lo_slope", cbrt_lo_slope),
        ]
    }

    /// Total number of stored values.
    pub fn total_entries(&self) -> usize {
        self.entries().iter().map(|(_, table)| table.len()).sum()
    }

    /// Check sizes, finiteness and the exact anchors every evaluator relies on.
    pub fn validate(&self) -> Result<()> {
        for (name, table) in self.entries() {
            let expected = expected_len(name);
            if table.len() != expected {
                return Err(Error::table_init(format!(
                    "{name} has {} entries, expected {expected}",
                    table.len()
                )));
            }
            if let Some(index) = table.as_slice().iter().position(|v| !v.is_finite()) {
                return Err(Error::table_init(format!(
                    "{name}[{index}] is not finite ({})",
                    table.get(index)
                )));
            }
        }

        let quarter = (SIN_COS_TABS_SIZE - 1) / 4;
        let exact_zeros = [
            ("sin", &self.sin, 2 * quarter),
            ("sin", &self.sin, 4 * quarter),
            ("cos", &self.cos, quarter),
            ("cos", &self.cos, 3 * quarter),
        ];
        for (name, table, index) in exact_zeros {
            if table.get(index) != 0.0 {
                return Err(Error::table_init(format!(
                    "{name}[{index}] must be exactly 0, got {}",
                    table.get(index)
                )));
            }
        }
        Ok(())
    }
}

fn expected_len(name: &str) -> usize {
    match name.split('_').next() {
        Some("sin") | Some("cos") => SIN_COS_TABS_SIZE,
        Some("tan") => TAN_TABS_SIZE,
        Some("asin") => ASIN_TABS_SIZE,
        Some("atan") => ATAN_TABS_SIZE,
        Some("exp") if name == "exp_hi" => EXP_HI_TABS_SIZE,
        Some("exp") => EXP_LO_TABS_SIZE,
        Some("log") => LOG_TABS_SIZE,
        Some("sqrt") | Some("cbrt") if name.contains("_hi") => ROOT_HI_TABS_SIZE,
        Some("sqrt") | Some("cbrt") => ROOT_LO_TABS_SIZE,
        _ => 0,
    }
}

static TABLES: OnceLock<MathTables> = OnceLock::new();

/// Shared tables, built on first call.
///
/// # Panics
///
/// If the freshly built tables fail validation. No function may run on
/// partially valid tables.
#[inline]
pub(crate) fn tables() -> &'static MathTables {
    TABLES.get_or_init(build_or_abort)
}

#[cold]
fn build_or_abort() -> MathTables {
    match TableBuilder::new(Libm).build() {
        Ok(tables) => tables,
        Err(err) => panic!("{err}"),
    }
}

/// `true` once the shared tables have been built.
pub fn is_initialized() -> bool {
    TABLES.get().is_some()
}

/// Build the shared tables now instead of on first use.
pub fn init() -> &'static MathTables {
    tables()
}
