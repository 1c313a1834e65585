use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::RatingCategory;

/// Append-only audit row, one per accepted comparison. Kept so a category's
/// ratings can be regenerated from scratch by replaying the log.
///
/// For a draw the two participants are stored in submission order; only the
/// `drawn` flag carries meaning, not which side landed in `winner_chart_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ComparisonRecord {
    pub record_id: i64,
    pub winner_chart_id: i32,
    pub loser_chart_id: i32,
    pub drawn: bool,
    pub rating_category: RatingCategory,
    pub created_at: DateTime<Utc>,
}
