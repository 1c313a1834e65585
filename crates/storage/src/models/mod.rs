pub mod category;
pub mod chart;
pub mod comparison;

pub use category::RatingCategory;
pub use chart::{Chart, RatedChart, chart_type_label};
pub use comparison::ComparisonRecord;
