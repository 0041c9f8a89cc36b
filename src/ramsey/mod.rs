//! Ramsey analysis module

pub mod analyzer;
pub mod normalize;

pub use analyzer::{analyze_with, RamseyAnalysis, RamseyAnalyzer};
pub use normalize::normalize;
