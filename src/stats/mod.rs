//! Stats module - derived ratio computation

mod ratios;

pub use ratios::RatioCalculator;
