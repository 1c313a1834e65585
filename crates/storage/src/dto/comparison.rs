use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{ComparisonRecord, RatingCategory};

/// One head-to-head outcome. `winner_chart_id`/`loser_chart_id` lose their
/// positional meaning when `drawn` is set.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitComparisonRequest {
    #[validate(range(min = 1))]
    pub winner_chart_id: i32,
    #[validate(range(min = 1))]
    pub loser_chart_id: i32,
    #[serde(default)]
    pub drawn: bool,
    #[serde(default)]
    pub category: RatingCategory,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ComparisonResponse {
    pub record_id: i64,
    pub winner_chart_id: i32,
    pub loser_chart_id: i32,
    pub drawn: bool,
    pub category: RatingCategory,
    /// Rating of the winning chart after the update.
    pub winner_rating: f64,
    /// Rating of the losing chart after the update.
    pub loser_rating: f64,
    pub created_at: DateTime<Utc>,
}

impl ComparisonResponse {
    pub fn new(record: ComparisonRecord, winner_rating: f64, loser_rating: f64) -> Self {
        Self {
            record_id: record.record_id,
            winner_chart_id: record.winner_chart_id,
            loser_chart_id: record.loser_chart_id,
            drawn: record.drawn,
            category: record.rating_category,
            winner_rating,
            loser_rating,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RecomputeParams {
    #[serde(default)]
    pub category: RatingCategory,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecomputeResponse {
    pub category: RatingCategory,
    pub records_replayed: u64,
}
