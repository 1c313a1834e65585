use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::Chart;

/// Play style, selecting half of the chart-type range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlayStyle {
    #[default]
    Single,
    Double,
}

impl PlayStyle {
    /// Chart types belonging to this style (normal/hyper/another variants).
    pub fn chart_types(&self) -> [i16; 3] {
        match self {
            Self::Single => [0, 1, 2],
            Self::Double => [3, 4, 5],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateChartRequest {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    #[validate(range(min = 0, max = 5, message = "chart_type must be between 0 and 5"))]
    pub chart_type: i16,
    #[validate(range(min = 1, max = 12, message = "difficulty must be between 1 and 12"))]
    pub difficulty: i16,
    #[validate(range(min = 1))]
    pub note_count: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ChartListFilter {
    pub difficulty: Option<i16>,
    pub style: Option<PlayStyle>,
}

impl ChartListFilter {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(difficulty) = self.difficulty
            && !(1..=12).contains(&difficulty)
        {
            return Err("difficulty must be between 1 and 12".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChartResponse {
    pub chart_id: i32,
    pub title: String,
    pub chart_type: i16,
    pub difficulty: i16,
    pub note_count: Option<i32>,
    pub rating: f64,
    pub rating_hc: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Chart> for ChartResponse {
    fn from(chart: Chart) -> Self {
        Self {
            chart_id: chart.chart_id,
            title: chart.title,
            chart_type: chart.chart_type,
            difficulty: chart.difficulty,
            note_count: chart.note_count,
            rating: chart.rating,
            rating_hc: chart.rating_hc,
            created_at: chart.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_partition_the_type_range() {
        let single = PlayStyle::Single.chart_types();
        let double = PlayStyle::Double.chart_types();
        for t in 0..=5i16 {
            assert_ne!(single.contains(&t), double.contains(&t));
        }
    }

    #[test]
    fn style_deserializes_lowercase() {
        let style: PlayStyle = serde_json::from_str("\"double\"").unwrap();
        assert_eq!(style, PlayStyle::Double);
    }
}
