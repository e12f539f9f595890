//! Numeric Cleaner Module
//! Coerce-to-zero cleaning and unit rescaling of monetary columns.

use crate::data::schema;
use polars::prelude::*;

/// Cleaning and rescaling of string-encoded currency amounts.
///
/// The coerce policy lives in one place: stringify, drop thousands-separator
/// commas, trim, cast to f64 with failures becoming null, fill null with 0.
/// A cell that fails to parse and a cell that was never there both end up 0.
pub struct NumericCleaner;

impl NumericCleaner {
    /// The shared coerce-to-zero expression for one column.
    fn coerce_expr(name: &str) -> Expr {
        col(name)
            .cast(DataType::String)
            .str()
            .replace_all(lit(","), lit(""), true)
            .str()
            .strip_chars(lit(NULL))
            .cast(DataType::Float64)
            .fill_null(lit(0.0))
    }

    /// Clean every listed column that is present; absent columns are skipped.
    pub fn clean_columns(df: DataFrame, columns: &[&str]) -> PolarsResult<DataFrame> {
        let exprs: Vec<Expr> = columns
            .iter()
            .copied()
            .filter(|name| schema::has_column(&df, name))
            .map(Self::coerce_expr)
            .collect();

        if exprs.is_empty() {
            return Ok(df);
        }
        df.lazy().with_columns(exprs).collect()
    }

    /// Replace remaining missing values across the whole frame with 0
    /// ("0" for text columns, matching the source sheet's filled exports).
    pub fn fill_missing(df: DataFrame) -> PolarsResult<DataFrame> {
        let exprs: Vec<Expr> = df
            .get_columns()
            .iter()
            .map(|column| {
                let name = column.name().as_str();
                match column.dtype() {
                    DataType::String => col(name).fill_null(lit("0")),
                    DataType::Float32 | DataType::Float64 => col(name).fill_null(lit(0.0)),
                    DataType::Int8
                    | DataType::Int16
                    | DataType::Int32
                    | DataType::Int64
                    | DataType::UInt8
                    | DataType::UInt16
                    | DataType::UInt32
                    | DataType::UInt64 => col(name).fill_null(lit(0)),
                    _ => col(name),
                }
            })
            .collect();

        df.lazy().with_columns(exprs).collect()
    }

    /// Convert raw currency units to Million USD.
    ///
    /// Must run exactly once per load, after cleaning and before any
    /// aggregation; the dataset-build path is its only caller.
    pub fn scale_to_millions(df: DataFrame, columns: &[&str]) -> PolarsResult<DataFrame> {
        let exprs: Vec<Expr> = columns
            .iter()
            .copied()
            .filter(|name| schema::has_column(&df, name))
            .map(|name| (col(name) / lit(1_000_000.0)).alias(name))
            .collect();

        if exprs.is_empty() {
            return Ok(df);
        }
        df.lazy().with_columns(exprs).collect()
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
    fn strips_commas_and_whitespace() {
        let df = df!("Revised Budget" => &["1,000,000", " 500,000 "]).unwrap();
        let cleaned = NumericCleaner::clean_columns(df, &["Revised Budget"]).unwrap();
        assert_eq!(values(&cleaned, "Revised Budget"), vec![1_000_000.0, 500_000.0]);
    }

    #[test]
    fn unparseable_and_missing_cells_become_zero() {
        let df = df!("Expenditure" => &[Some("abc"), Some(""), None, Some("42")]).unwrap();
        let cleaned = NumericCleaner::clean_columns(df, &["Expenditure"]).unwrap();
        assert_eq!(values(&cleaned, "Expenditure"), vec![0.0, 0.0, 0.0, 42.0]);
    }

    #[test]
    fn cleaned_columns_are_always_finite() {
        let df = df!("Expenditure" => &[Some("nonsense"), None, Some("1,5,0")]).unwrap();
        let cleaned = NumericCleaner::clean_columns(df, &["Expenditure"]).unwrap();
        assert!(values(&cleaned, "Expenditure").iter().all(|v| v.is_finite()));
    }

    #[test]
    fn absent_columns_are_skipped_silently() {
        let df = df!("Other" => &["x"]).unwrap();
        let cleaned = NumericCleaner::clean_columns(df.clone(), &["Revised Budget"]).unwrap();
        assert_eq!(cleaned, df);
    }

    #[test]
    fn already_numeric_columns_round_trip() {
        let df = df!("Expenditure" => &[250_000.0, 0.0]).unwrap();
        let cleaned = NumericCleaner::clean_columns(df, &["Expenditure"]).unwrap();
        assert_eq!(values(&cleaned, "Expenditure"), vec![250_000.0, 0.0]);
    }

    #[test]
    fn fill_missing_covers_numeric_and_text() {
        let df = df!(
            "amount" => &[Some(1.5), None],
            "label" => &[Some("a"), None],
        )
        .unwrap();
        let filled = NumericCleaner::fill_missing(df).unwrap();

        assert_eq!(values(&filled, "amount"), vec![1.5, 0.0]);
        let labels: Vec<&str> = filled
            .column("label")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .map(|v| v.unwrap())
            .collect();
        assert_eq!(labels, vec!["a", "0"]);
    }

    #[test]
    fn scales_to_millions() {
        let df = df!(
            "Revised Budget" => &[1_000_000.0, 2_500_000.0],
            "untouched" => &[1.0, 2.0],
        )
        .unwrap();
        let scaled = NumericCleaner::scale_to_millions(df, &["Revised Budget"]).unwrap();
        assert_eq!(values(&scaled, "Revised Budget"), vec![1.0, 2.5]);
        assert_eq!(values(&scaled, "untouched"), vec![1.0, 2.0]);
    }
}
