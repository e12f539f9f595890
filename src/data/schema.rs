//! Sheet Schema Module
//! Column names consumed from the published sheet, and per-section
//! availability derived from them.

use polars::prelude::*;

// Primary project breakdown
pub const NAME_OF_PROJECT: &str = "Name of Project";
pub const REVISED_BUDGET: &str = "Revised Budget";
pub const EXPENDITURE: &str = "Expenditure";

// Income section
pub const INCOME_PROJECT: &str = "Name of Project_Income";
pub const BUDGETED_REVENUE: &str = "Budgeted Revenue Generation";
pub const ACTUAL_REVENUE: &str = "Actual Revenue Generation";

// Donor section (amounts stay in raw currency units)
pub const DONOR_PROJECT: &str = "Name of Project_2";
pub const DONOR_REVISED_BUDGET: &str = "Revised Budget_D";
pub const DONOR_EXPENDITURE: &str = "Expenditure_D";

// Cost-category section
pub const PROJECT_NAME: &str = "Project_Name";
pub const COST_CATEGORY: &str = "Cost Category";
pub const CUMULATIVE_BUDGET: &str = "Cumulative Budget";
pub const CUMULATIVE_EXPENDITURE: &str = "Cumulative Expenditure";

/// Monetary columns cleaned and rescaled to Million USD on load.
pub const MONETARY_COLUMNS: [&str; 6] = [
    REVISED_BUDGET,
    EXPENDITURE,
    BUDGETED_REVENUE,
    ACTUAL_REVENUE,
    CUMULATIVE_BUDGET,
    CUMULATIVE_EXPENDITURE,
];

/// Check whether a column exists in the DataFrame.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|c| c.as_str() == name)
}

fn has_all(df: &DataFrame, names: &[&str]) -> bool {
    names.iter().all(|n| has_column(df, n))
}

/// Which dashboard sections the loaded sheet can support.
///
/// Computed once after cleaning; a section whose columns are missing is
/// omitted from the rendered view rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionAvailability {
    pub project_budget: bool,
    pub income: bool,
    pub donor: bool,
    pub cost_category: bool,
}

impl SectionAvailability {
    pub fn detect(df: &DataFrame) -> Self {
        Self {
            project_budget: has_all(df, &[NAME_OF_PROJECT, REVISED_BUDGET, EXPENDITURE]),
            income: has_all(df, &[INCOME_PROJECT, BUDGETED_REVENUE, ACTUAL_REVENUE]),
            donor: has_all(df, &[DONOR_PROJECT, DONOR_REVISED_BUDGET, DONOR_EXPENDITURE]),
            cost_category: has_all(
                df,
                &[
                    PROJECT_NAME,
                    COST_CATEGORY,
                    CUMULATIVE_BUDGET,
                    CUMULATIVE_EXPENDITURE,
                ],
            ),
        }
    }
}
