//! Data module - source loading, cleaning, and aggregation

mod aggregate;
mod cleaner;
mod loader;
pub mod schema;

pub use aggregate::GroupAggregator;
pub use cleaner::NumericCleaner;
pub use loader::{DataLoader, LoaderError};
