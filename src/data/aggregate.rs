//! Grouped Aggregation Module
//! Key-trimmed group-by-sum, distinct value listing, and exact-match filtering.

use polars::prelude::*;
use std::collections::BTreeSet;

/// Grouping and filtering over categorical key columns.
///
/// Keys are trimmed before comparison so visually identical labels collapse
/// to one group.
pub struct GroupAggregator;

impl GroupAggregator {
    fn trimmed_key_expr(key: &str) -> Expr {
        col(key).cast(DataType::String).str().strip_chars(lit(NULL))
    }

    /// One output row per distinct trimmed key, with each value column
    /// summed across the rows sharing that key. Output is sorted by key so
    /// identical input always yields identical output.
    pub fn group_sum(df: &DataFrame, key: &str, value_cols: &[&str]) -> PolarsResult<DataFrame> {
        let aggs: Vec<Expr> = value_cols.iter().map(|name| col(*name).sum()).collect();

        df.clone()
            .lazy()
            .with_column(Self::trimmed_key_expr(key))
            .group_by([col(key)])
            .agg(aggs)
            .sort([key], Default::default())
            .collect()
    }

    /// Distinct trimmed values of a column, ascending.
    pub fn distinct_values(df: &DataFrame, column: &str) -> PolarsResult<Vec<String>> {
        let trimmed = df
            .clone()
            .lazy()
            .select([Self::trimmed_key_expr(column)])
            .collect()?;

        let set: BTreeSet<String> = trimmed
            .column(column)?
            .str()?
            .into_iter()
            .flatten()
            .map(str::to_string)
            .collect();
        Ok(set.into_iter().collect())
    }

    /// Rows whose trimmed `column` equals `value` exactly.
    pub fn filter_equals(df: &DataFrame, column: &str, value: &str) -> PolarsResult<DataFrame> {
        df.clone()
            .lazy()
            .with_column(Self::trimmed_key_expr(column))
            .filter(col(column).eq(lit(value)))
            .collect()
    }
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
    fn trims_keys_before_grouping() {
        let df = df!(
            "key" => &["X", " X "],
            "budget" => &[1_000.0, 2_000.0],
        )
        .unwrap();

        let grouped = GroupAggregator::group_sum(&df, "key", &["budget"]).unwrap();
        assert_eq!(grouped.height(), 1);
        assert_eq!(values(&grouped, "budget"), vec![3_000.0]);
    }

    #[test]
    fn grouping_conserves_column_totals() {
        let df = df!(
            "key" => &["a", "b", "a", "c", "b"],
            "v" => &[1.0, 2.0, 3.0, 4.0, 5.0],
        )
        .unwrap();

        let grouped = GroupAggregator::group_sum(&df, "key", &["v"]).unwrap();
        let total: f64 = values(&grouped, "v").iter().sum();
        assert_eq!(total, 15.0);
    }

    #[test]
    fn group_output_is_key_sorted() {
        let df = df!(
            "key" => &["beta", "alpha", "gamma"],
            "v" => &[1.0, 1.0, 1.0],
        )
        .unwrap();

        let grouped = GroupAggregator::group_sum(&df, "key", &["v"]).unwrap();
        let keys: Vec<&str> = grouped
            .column("key")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .map(|v| v.unwrap())
            .collect();
        assert_eq!(keys, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn distinct_values_are_trimmed_sorted_and_deduped() {
        let df = df!("p" => &["Beta", " Alpha ", "Beta", "Alpha"]).unwrap();
        let distinct = GroupAggregator::distinct_values(&df, "p").unwrap();
        assert_eq!(distinct, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn filter_matches_trimmed_values() {
        let df = df!(
            "p" => &[" Alpha ", "Beta"],
            "v" => &[1.0, 2.0],
        )
        .unwrap();

        let filtered = GroupAggregator::filter_equals(&df, "p", "Alpha").unwrap();
        assert_eq!(filtered.height(), 1);
        assert_eq!(values(&filtered, "v"), vec![1.0]);
    }
}
