//! Dashboard Orchestration
//! Builds the cleaned Dataset once per load and derives the full view on
//! every render.

use polars::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::charts::{ChartBuilder, ComboChart, CostBreakdown, DonutChart, GroupedBarChart};
use crate::data::schema::{self, SectionAvailability};
use crate::data::{DataLoader, LoaderError, NumericCleaner};
use crate::report;

pub const DASHBOARD_TITLE: &str = "Financial Executive Dashboard";
pub const DASHBOARD_CAPTION: &str = "Auto-updating Financial Dashboard";

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error("dashboard derivation failed: {0}")]
    Polars(#[from] PolarsError),
}

/// The complete page: five sections, each present only when the sheet
/// carries the columns it depends on.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub budget_vs_expenditure: Option<GroupedBarChart>,
    pub burn_rate: Option<DonutChart>,
    pub income_status: Option<ComboChart>,
    pub donor_summary: Option<GroupedBarChart>,
    pub cost_breakdown: Option<CostBreakdown>,
    pub caption: String,
}

/// Owns the cleaned Dataset for one page load. Every render is a pure
/// re-derivation from the Dataset plus the current filter selection.
pub struct Dashboard {
    df: DataFrame,
    availability: SectionAvailability,
}

impl Dashboard {
    /// Fetch the source sheet and build the dashboard in one step.
    pub fn load(url: &str) -> Result<Self, DashboardError> {
        let raw = DataLoader::fetch(url)?;
        Self::from_raw(raw)
    }

    /// Build the Dataset from a freshly parsed frame: clean the monetary
    /// columns, fill remaining gaps, rescale to Million USD. Rescaling
    /// happens here and nowhere else, so it runs exactly once per load.
    pub fn from_raw(raw: DataFrame) -> Result<Self, DashboardError> {
        let df = NumericCleaner::clean_columns(raw, &schema::MONETARY_COLUMNS)?;
        let df = NumericCleaner::fill_missing(df)?;
        let df = NumericCleaner::scale_to_millions(df, &schema::MONETARY_COLUMNS)?;

        let availability = SectionAvailability::detect(&df);
        Ok(Self { df, availability })
    }

    pub fn availability(&self) -> SectionAvailability {
        self.availability
    }

    /// Distinct project names available to the cost-category filter.
    pub fn project_options(&self) -> Vec<String> {
        if !self.availability.cost_category {
            return Vec::new();
        }
        report::cost::project_options(&self.df).unwrap_or_default()
    }

    /// Derive the complete view. `selection` filters the cost-category
    /// section only; a value outside the available project set falls back
    /// to the first option, so an absent project can never be selected.
    pub fn render(&self, selection: Option<&str>) -> Result<DashboardView, DashboardError> {
        let (budget_vs_expenditure, burn_rate) = if self.availability.project_budget {
            let table = report::budget::burn_rate_table(&self.df)?;
            (
                Some(ChartBuilder::budget_chart(&table)?),
                Some(ChartBuilder::burn_rate_chart(&table)?),
            )
        } else {
            (None, None)
        };

        let income_status = if self.availability.income {
            let table = report::income::income_table(&self.df)?;
            Some(ChartBuilder::income_chart(&table)?)
        } else {
            None
        };

        let donor_summary = if self.availability.donor {
            let table = report::donor::donor_table(&self.df)?;
            Some(ChartBuilder::donor_chart(&table)?)
        } else {
            None
        };

        let cost_breakdown = if self.availability.cost_category {
            let options = self.project_options();
            match Self::clamp_selection(selection, &options) {
                Some(project) => {
                    let table = report::cost::cost_table(&self.df, &project)?;
                    Some(ChartBuilder::cost_breakdown(&table, &project, options)?)
                }
                None => None,
            }
        } else {
            None
        };

        Ok(DashboardView {
            title: DASHBOARD_TITLE.to_string(),
            budget_vs_expenditure,
            burn_rate,
            income_status,
            donor_summary,
            cost_breakdown,
            caption: DASHBOARD_CAPTION.to_string(),
        })
    }

    fn clamp_selection(selection: Option<&str>, options: &[String]) -> Option<String> {
        match selection {
            Some(s) if options.iter().any(|o| o == s) => Some(s.to_string()),
            _ => options.first().cloned(),
        }
    }
}
