//! Income Status Section
//! Budgeted vs actual revenue generation per project with achievement share.

use crate::data::schema::{ACTUAL_REVENUE, BUDGETED_REVENUE, INCOME_PROJECT};
use crate::stats::RatioCalculator;
use polars::prelude::*;

pub const REVENUE_ACHIEVED: &str = "Revenue Achieved (%)";

/// Income columns with a residual coerce guard and the achievement share.
///
/// The revenue columns go through the main monetary cleaning on load; the
/// cast-and-fill here keeps the section safe on its own inputs regardless.
pub fn income_table(df: &DataFrame) -> PolarsResult<DataFrame> {
    df.clone()
        .lazy()
        .select([
            col(INCOME_PROJECT),
            col(BUDGETED_REVENUE)
                .cast(DataType::Float64)
                .fill_null(lit(0.0)),
            col(ACTUAL_REVENUE)
                .cast(DataType::Float64)
                .fill_null(lit(0.0)),
        ])
        .with_column(
            RatioCalculator::percent_expr(ACTUAL_REVENUE, BUDGETED_REVENUE)
                .alias(REVENUE_ACHIEVED),
        )
        .collect()
}
