//! Donor Summary Section
//! Budget and expenditure totals grouped by the donor-side project key.

use crate::data::schema::{DONOR_EXPENDITURE, DONOR_PROJECT, DONOR_REVISED_BUDGET};
use crate::data::{GroupAggregator, NumericCleaner};
use polars::prelude::*;

/// Donor-wise totals, one row per trimmed donor key.
///
/// The donor amount columns sit outside the main monetary set, arrive as raw
/// text, and are NOT rescaled to millions; they are cleaned here instead.
pub fn donor_table(df: &DataFrame) -> PolarsResult<DataFrame> {
    let cleaned =
        NumericCleaner::clean_columns(df.clone(), &[DONOR_REVISED_BUDGET, DONOR_EXPENDITURE])?;
    GroupAggregator::group_sum(
        &cleaned,
        DONOR_PROJECT,
        &[DONOR_REVISED_BUDGET, DONOR_EXPENDITURE],
    )
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
    fn cleans_then_groups_raw_donor_amounts() {
        let df = df!(
            DONOR_PROJECT => &["X", " X ", "Y"],
            DONOR_REVISED_BUDGET => &["1,000", "2,000", "500"],
            DONOR_EXPENDITURE => &["100", "junk", "50"],
        )
        .unwrap();

        let table = donor_table(&df).unwrap();
        assert_eq!(table.height(), 2);

        let keys: Vec<&str> = table
            .column(DONOR_PROJECT)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .map(|v| v.unwrap())
            .collect();
        assert_eq!(keys, vec!["X", "Y"]);
        assert_eq!(values(&table, DONOR_REVISED_BUDGET), vec![3_000.0, 500.0]);
        assert_eq!(values(&table, DONOR_EXPENDITURE), vec![100.0, 50.0]);
    }
}
