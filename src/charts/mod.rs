//! Charts module - chart specification construction

mod builder;
mod spec;

pub use builder::ChartBuilder;
pub use spec::{
    BarSeries, ComboChart, CostBreakdown, CostCategoryRow, DonutChart, GroupedBarChart,
    LineSeries, Orientation, Theme,
};
