//! Cost Category Section
//! Per-project cost-category totals with a category-level burn rate, plus
//! the project selection domain for the filter control.

use crate::data::schema::{
    COST_CATEGORY, CUMULATIVE_BUDGET, CUMULATIVE_EXPENDITURE, PROJECT_NAME,
};
use crate::data::GroupAggregator;
use crate::stats::RatioCalculator;
use polars::prelude::*;

pub use super::budget::BURN_RATE;

/// Distinct project names offered by the filter control, ascending.
pub fn project_options(df: &DataFrame) -> PolarsResult<Vec<String>> {
    GroupAggregator::distinct_values(df, PROJECT_NAME)
}

/// Cost-category totals for one selected project.
pub fn cost_table(df: &DataFrame, project: &str) -> PolarsResult<DataFrame> {
    let guarded = df
        .clone()
        .lazy()
        .with_columns([
            col(CUMULATIVE_BUDGET)
                .cast(DataType::Float64)
                .fill_null(lit(0.0)),
            col(CUMULATIVE_EXPENDITURE)
                .cast(DataType::Float64)
                .fill_null(lit(0.0)),
        ])
        .collect()?;

    let selected = GroupAggregator::filter_equals(&guarded, PROJECT_NAME, project)?;
    let grouped = GroupAggregator::group_sum(
        &selected,
        COST_CATEGORY,
        &[CUMULATIVE_BUDGET, CUMULATIVE_EXPENDITURE],
    )?;

    grouped
        .lazy()
        .with_column(
            RatioCalculator::percent_expr(CUMULATIVE_EXPENDITURE, CUMULATIVE_BUDGET)
                .alias(BURN_RATE),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> DataFrame {
        df!(
            PROJECT_NAME => &["Alpha", " Alpha ", "Beta"],
            COST_CATEGORY => &["Staff", "Staff ", "Staff"],
            CUMULATIVE_BUDGET => &[2.0, 2.0, 10.0],
            CUMULATIVE_EXPENDITURE => &[1.0, 2.0, 5.0],
        )
        .unwrap()
    }

    #[test]
    fn filters_to_the_selected_project_then_groups() {
        let table = cost_table(&fixture(), "Alpha").unwrap();
        assert_eq!(table.height(), 1);

        let budget: Vec<f64> = table
            .column(CUMULATIVE_BUDGET)
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .map(|v| v.unwrap())
            .collect();
        let rate: Vec<f64> = table
            .column(BURN_RATE)
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .map(|v| v.unwrap())
            .collect();
        assert_eq!(budget, vec![4.0]);
        assert_eq!(rate, vec![75.0]);
    }

    #[test]
    fn options_come_from_distinct_trimmed_names() {
        let options = project_options(&fixture()).unwrap();
        assert_eq!(options, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn unknown_project_yields_empty_table() {
        let table = cost_table(&fixture(), "Gamma").unwrap();
        assert_eq!(table.height(), 0);
    }
}
