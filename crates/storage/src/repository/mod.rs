pub mod chart;
pub mod comparison;
