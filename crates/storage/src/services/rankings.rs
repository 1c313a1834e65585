use sqlx::PgPool;

use crate::dto::ranking::{RankingEntry, RankingFilter};
use crate::error::Result;
use crate::models::{RatedChart, chart_type_label};
use crate::repository::chart::ChartRepository;

/// Rank a tier's charts by descending rating, ties broken by ascending
/// chart id so repeated listings of the same state are identical.
pub fn rank_charts(mut charts: Vec<RatedChart>) -> Vec<RankingEntry> {
    charts.sort_by(|a, b| {
        b.rating
            .total_cmp(&a.rating)
            .then(a.chart_id.cmp(&b.chart_id))
    });

    charts
        .into_iter()
        .enumerate()
        .map(|(index, chart)| RankingEntry {
            rank: index as i64 + 1,
            chart_id: chart.chart_id,
            title: chart.title,
            chart_type: chart_type_label(chart.chart_type).to_string(),
            rating: round_rating(chart.rating),
        })
        .collect()
}

/// Displayed ratings are rounded to three decimals.
fn round_rating(rating: f64) -> f64 {
    (rating * 1000.0).round() / 1000.0
}

pub async fn list_rankings(pool: &PgPool, filter: &RankingFilter) -> Result<Vec<RankingEntry>> {
    let repo = ChartRepository::new(pool);
    let charts = repo
        .list_rated_by_tier(filter.difficulty, filter.style, filter.category)
        .await?;

    Ok(rank_charts(charts))
}
