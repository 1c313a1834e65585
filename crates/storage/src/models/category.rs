use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Which of a chart's two rating tracks a comparison affects.
///
/// Stored as a SMALLINT discriminant; the column lookup replaces the dynamic
/// attribute-name dispatch the site previously relied on.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[repr(i16)]
#[serde(rename_all = "snake_case")]
pub enum RatingCategory {
    #[default]
    Standard = 0,
    HardClear = 1,
}

impl RatingCategory {
    pub fn as_column(&self) -> &'static str {
        match self {
            Self::Standard => "rating",
            Self::HardClear => "rating_hc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_distinct() {
        assert_eq!(RatingCategory::Standard.as_column(), "rating");
        assert_eq!(RatingCategory::HardClear.as_column(), "rating_hc");
    }

    #[test]
    fn serde_names_are_snake_case() {
        let json = serde_json::to_string(&RatingCategory::HardClear).unwrap();
        assert_eq!(json, "\"hard_clear\"");
        let back: RatingCategory = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(back, RatingCategory::Standard);
    }
}
