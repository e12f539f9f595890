//! Project Budget Section
//! Revised budget vs expenditure per project, plus the derived burn rate.

use crate::data::schema::{EXPENDITURE, NAME_OF_PROJECT, REVISED_BUDGET};
use crate::stats::RatioCalculator;
use polars::prelude::*;

pub const BURN_RATE: &str = "Burn Rate";

/// Project name, revised budget and expenditure, in sheet order.
pub fn budget_table(df: &DataFrame) -> PolarsResult<DataFrame> {
    df.clone()
        .lazy()
        .select([col(NAME_OF_PROJECT), col(REVISED_BUDGET), col(EXPENDITURE)])
        .collect()
}

/// Budget table extended with expenditure as a percentage of revised budget.
pub fn burn_rate_table(df: &DataFrame) -> PolarsResult<DataFrame> {
    budget_table(df)?
        .lazy()
        .with_column(RatioCalculator::percent_expr(EXPENDITURE, REVISED_BUDGET).alias(BURN_RATE))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(df: &DataFrame, name: &str) -> Vec<f64> {
        df.column(name)
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .map(|v| v.unwrap())
            .collect()
    }

    #[test]
    fn burn_rate_is_expenditure_share_of_budget() {
        let df = df!(
            NAME_OF_PROJECT => &["Alpha ", "Beta"],
            REVISED_BUDGET => &[1.0, 4.0],
            EXPENDITURE => &[0.5, 1.0],
            "extra" => &["x", "y"],
        )
        .unwrap();

        let table = burn_rate_table(&df).unwrap();
        assert_eq!(
            table.get_column_names().len(),
            4,
            "only the three budget columns plus the burn rate survive"
        );
        assert_eq!(values(&table, BURN_RATE), vec![50.0, 25.0]);
    }

    #[test]
    fn zero_budget_means_zero_burn_rate() {
        let df = df!(
            NAME_OF_PROJECT => &["Alpha"],
            REVISED_BUDGET => &[0.0],
            EXPENDITURE => &[0.25],
        )
        .unwrap();

        let table = burn_rate_table(&df).unwrap();
        assert_eq!(values(&table, BURN_RATE), vec![0.0]);
    }
}
