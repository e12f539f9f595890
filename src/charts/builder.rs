//! Chart Builder Module
//! Pure construction of chart specifications from aggregated tables.

use crate::charts::spec::{
    BarSeries, ComboChart, CostBreakdown, CostCategoryRow, DonutChart, GroupedBarChart,
    LineSeries, Orientation, Theme, BUDGET_COLOR, EXPENDITURE_COLOR, PALETTE,
};
use crate::data::schema::{
    ACTUAL_REVENUE, BUDGETED_REVENUE, COST_CATEGORY, CUMULATIVE_BUDGET, CUMULATIVE_EXPENDITURE,
    DONOR_EXPENDITURE, DONOR_PROJECT, DONOR_REVISED_BUDGET, EXPENDITURE, INCOME_PROJECT,
    NAME_OF_PROJECT, REVISED_BUDGET,
};
use crate::report::budget::BURN_RATE;
use crate::report::income::REVENUE_ACHIEVED;
use polars::prelude::*;

/// Builds one specification value per dashboard section.
pub struct ChartBuilder;

impl ChartBuilder {
    fn f64_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<f64>> {
        let casted = df.column(name)?.cast(&DataType::Float64)?;
        Ok(casted
            .f64()?
            .into_iter()
            .map(|v| v.unwrap_or(0.0))
            .collect())
    }

    fn string_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<String>> {
        let casted = df.column(name)?.cast(&DataType::String)?;
        Ok(casted
            .str()?
            .into_iter()
            .map(|v| v.unwrap_or("").to_string())
            .collect())
    }

    fn million_labels(values: &[f64]) -> Vec<String> {
        values.iter().map(|v| format!("{:.2} M", v)).collect()
    }

    fn percent_labels(values: &[f64]) -> Vec<String> {
        values.iter().map(|v| format!("{:.1}%", v)).collect()
    }

    /// Horizontal grouped bar: revised budget vs expenditure per project.
    pub fn budget_chart(table: &DataFrame) -> PolarsResult<GroupedBarChart> {
        let projects = Self::string_values(table, NAME_OF_PROJECT)?;
        let budget = Self::f64_values(table, REVISED_BUDGET)?;
        let spent = Self::f64_values(table, EXPENDITURE)?;

        Ok(GroupedBarChart {
            title: "Project-wise Budget vs Expenditure".to_string(),
            theme: Theme::Dark,
            orientation: Orientation::Horizontal,
            categories: projects,
            series: vec![
                BarSeries::colored(
                    "Revised Budget",
                    budget.clone(),
                    BUDGET_COLOR,
                    Self::million_labels(&budget),
                ),
                BarSeries::colored(
                    "Expenditure",
                    spent.clone(),
                    EXPENDITURE_COLOR,
                    Self::million_labels(&spent),
                ),
            ],
            x_axis_title: Some("Million USD".to_string()),
            y_axis_title: Some("Project".to_string()),
        })
    }

    /// Donut of burn rate per project.
    pub fn burn_rate_chart(table: &DataFrame) -> PolarsResult<DonutChart> {
        let labels = Self::string_values(table, NAME_OF_PROJECT)?;
        let rates = Self::f64_values(table, BURN_RATE)?;

        Ok(DonutChart {
            title: "Burn Rate (%)".to_string(),
            theme: Theme::Light,
            labels,
            slice_labels: Self::percent_labels(&rates),
            values: rates,
            hole: 0.6,
            colors: PALETTE.iter().map(|c| c.to_string()).collect(),
        })
    }

    /// Combo: actual revenue and achieved % as bars, budgeted revenue as a
    /// line on the secondary axis.
    pub fn income_chart(table: &DataFrame) -> PolarsResult<ComboChart> {
        let projects = Self::string_values(table, INCOME_PROJECT)?;
        let actual = Self::f64_values(table, ACTUAL_REVENUE)?;
        let achieved = Self::f64_values(table, REVENUE_ACHIEVED)?;
        let budgeted = Self::f64_values(table, BUDGETED_REVENUE)?;

        Ok(ComboChart {
            title: "Income Status".to_string(),
            theme: Theme::Light,
            categories: projects,
            bars: vec![
                BarSeries::new("Actual Revenue", actual),
                BarSeries::new("Revenue Achieved %", achieved),
            ],
            lines: vec![LineSeries {
                name: "Budgeted Revenue".to_string(),
                values: budgeted,
                secondary_axis: true,
            }],
        })
    }

    /// Vertical grouped bar of donor-wise totals.
    pub fn donor_chart(table: &DataFrame) -> PolarsResult<GroupedBarChart> {
        let donors = Self::string_values(table, DONOR_PROJECT)?;
        let budget = Self::f64_values(table, DONOR_REVISED_BUDGET)?;
        let spent = Self::f64_values(table, DONOR_EXPENDITURE)?;

        Ok(GroupedBarChart {
            title: "Donor Budget vs Expenditure".to_string(),
            theme: Theme::Light,
            orientation: Orientation::Vertical,
            categories: donors,
            series: vec![
                BarSeries::new("Revised Budget", budget),
                BarSeries::new("Expenditure", spent),
            ],
            x_axis_title: None,
            y_axis_title: None,
        })
    }

    /// The filterable cost-category table for the selected project.
    pub fn cost_breakdown(
        table: &DataFrame,
        selected_project: &str,
        project_options: Vec<String>,
    ) -> PolarsResult<CostBreakdown> {
        let categories = Self::string_values(table, COST_CATEGORY)?;
        let budget = Self::f64_values(table, CUMULATIVE_BUDGET)?;
        let spent = Self::f64_values(table, CUMULATIVE_EXPENDITURE)?;
        let rates = Self::f64_values(table, BURN_RATE)?;

        let rows = categories
            .into_iter()
            .zip(budget)
            .zip(spent)
            .zip(rates)
            .map(
                |(((cost_category, cumulative_budget), cumulative_expenditure), burn_rate)| {
                    CostCategoryRow {
                        cost_category,
                        cumulative_budget,
                        cumulative_expenditure,
                        burn_rate,
                    }
                },
            )
            .collect();

        Ok(CostBreakdown {
            title: "Cost Category-wise Breakdown".to_string(),
            selected_project: selected_project.to_string(),
            project_options,
            rows,
        })
    }
}
