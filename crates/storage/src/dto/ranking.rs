use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::dto::chart::PlayStyle;
use crate::models::RatingCategory;

#[derive(Debug, Deserialize, IntoParams)]
pub struct RankingFilter {
    /// Difficulty tier to rank (1-12).
    pub difficulty: i16,
    #[serde(default)]
    pub category: RatingCategory,
    #[serde(default)]
    pub style: PlayStyle,
}

impl RankingFilter {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=12).contains(&self.difficulty) {
            return Err("difficulty must be between 1 and 12".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RankingEntry {
    /// 1-based position within the tier; ties broken by ascending chart id.
    pub rank: i64,
    pub chart_id: i32,
    pub title: String,
    pub chart_type: String,
    pub rating: f64,
}
