//! Chart Specification Module
//! Serializable chart and table descriptions handed to the presentation layer.

use serde::Serialize;

/// Series color for revised-budget bars.
pub const BUDGET_COLOR: &str = "#00CFFF";
/// Series color for expenditure bars.
pub const EXPENDITURE_COLOR: &str = "#FFD700";

/// Qualitative palette for donut slices.
pub const PALETTE: [&str; 8] = [
    "#66C2A5", "#FC8D62", "#8DA0CB", "#E78AC3", "#A6D854", "#FFD92F", "#E5C494", "#B3B3B3",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Pre-formatted per-bar value labels, when the chart displays them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl BarSeries {
    pub fn new(name: &str, values: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            values,
            color: None,
            labels: None,
        }
    }

    pub fn colored(name: &str, values: Vec<f64>, color: &str, labels: Vec<String>) -> Self {
        Self {
            color: Some(color.to_string()),
            labels: Some(labels),
            ..Self::new(name, values)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LineSeries {
    pub name: String,
    pub values: Vec<f64>,
    /// Plot against the secondary value axis.
    pub secondary_axis: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupedBarChart {
    pub title: String,
    pub theme: Theme,
    pub orientation: Orientation,
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_title: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DonutChart {
    pub title: String,
    pub theme: Theme,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Slice text, pre-formatted as a percentage.
    pub slice_labels: Vec<String>,
    pub hole: f64,
    pub colors: Vec<String>,
}

/// Grouped bars on the primary axis plus line series, sharing one
/// categorical axis.
#[derive(Debug, Clone, Serialize)]
pub struct ComboChart {
    pub title: String,
    pub theme: Theme,
    pub categories: Vec<String>,
    pub bars: Vec<BarSeries>,
    pub lines: Vec<LineSeries>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CostCategoryRow {
    pub cost_category: String,
    pub cumulative_budget: f64,
    pub cumulative_expenditure: f64,
    pub burn_rate: f64,
}

/// The filterable cost-category table: rows for the selected project plus
/// the selection domain for the filter control.
#[derive(Debug, Clone, Serialize)]
pub struct CostBreakdown {
    pub title: String,
    pub selected_project: String,
    pub project_options: Vec<String>,
    pub rows: Vec<CostCategoryRow>,
}
