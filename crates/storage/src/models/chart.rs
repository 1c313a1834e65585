use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A playable song + difficulty + style unit. Both ratings start at the
/// 1200 baseline (column default) and are only ever touched by comparison
/// submissions or a full recompute.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Chart {
    pub chart_id: i32,
    pub title: String,
    pub chart_type: i16,
    pub difficulty: i16,
    pub note_count: Option<i32>,
    pub rating: f64,
    pub rating_hc: f64,
    pub created_at: DateTime<Utc>,
}

/// Projection used by the matchup sampler and the ranking listing: one chart
/// with the rating of whichever category the caller asked for.
#[derive(Debug, Clone, FromRow)]
pub struct RatedChart {
    pub chart_id: i32,
    pub title: String,
    pub chart_type: i16,
    pub rating: f64,
}

/// Short label for a chart type, e.g. "SPH" for single-play hyper.
/// Types 0..=2 are single-play, 3..=5 double-play.
pub fn chart_type_label(chart_type: i16) -> &'static str {
    match chart_type {
        0 => "SPN",
        1 => "SPH",
        2 => "SPA",
        3 => "DPN",
        4 => "DPH",
        5 => "DPA",
        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_cover_both_play_styles() {
        assert_eq!(chart_type_label(0), "SPN");
        assert_eq!(chart_type_label(2), "SPA");
        assert_eq!(chart_type_label(3), "DPN");
        assert_eq!(chart_type_label(5), "DPA");
        assert_eq!(chart_type_label(9), "???");
    }
}
