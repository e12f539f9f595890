//! Ratio Calculator Module
//! The guarded percentage derivation shared by every section.

use polars::prelude::*;

/// Derives `numerator / denominator * 100` over two row-aligned columns.
///
/// A zero denominator yields exactly 0 — never NaN, infinity, or an error.
/// Used for burn rate, revenue achievement, and the per-category burn rate.
pub struct RatioCalculator;

impl RatioCalculator {
    pub fn percent_expr(numerator: &str, denominator: &str) -> Expr {
        when(col(denominator).neq(lit(0.0)))
            .then(col(numerator) / col(denominator) * lit(100.0))
            .otherwise(lit(0.0))
    }
}
