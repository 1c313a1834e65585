pub mod chart;
pub mod comparison;
pub mod matchup;
pub mod ranking;
