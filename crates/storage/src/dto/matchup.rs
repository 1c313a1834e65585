use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::dto::chart::PlayStyle;
use crate::models::{RatedChart, chart_type_label};
use crate::services::matchmaking;

#[derive(Debug, Deserialize, IntoParams)]
pub struct MatchupFilter {
    /// Difficulty tier to draw the pool from (1-12).
    pub difficulty: i16,
    #[serde(default)]
    pub style: PlayStyle,
    /// Widest acceptable rating gap between the two candidates.
    #[serde(default = "default_max_gap")]
    pub max_gap: f64,
}

fn default_max_gap() -> f64 {
    matchmaking::DEFAULT_MAX_GAP
}

impl MatchupFilter {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=12).contains(&self.difficulty) {
            return Err("difficulty must be between 1 and 12".to_string());
        }
        if !self.max_gap.is_finite() || self.max_gap < 0.0 {
            return Err("max_gap must be a non-negative number".to_string());
        }
        Ok(())
    }
}

/// One side of a proposed matchup. The pair is unordered; the winner is
/// decided by the submitted outcome, not by position here.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MatchupChart {
    pub chart_id: i32,
    pub title: String,
    pub chart_type: String,
}

impl From<&RatedChart> for MatchupChart {
    fn from(chart: &RatedChart) -> Self {
        Self {
            chart_id: chart.chart_id,
            title: chart.title.clone(),
            chart_type: chart_type_label(chart.chart_type).to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MatchupResponse {
    pub charts: Vec<MatchupChart>,
}
