//! Report module - per-section table derivations

pub mod budget;
pub mod cost;
pub mod donor;
pub mod income;
