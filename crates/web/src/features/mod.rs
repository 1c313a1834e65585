pub mod charts;
pub mod comparisons;
pub mod matchups;
pub mod rankings;
