use std::collections::BTreeMap;

use sqlx::PgPool;

use crate::dto::comparison::{ComparisonResponse, SubmitComparisonRequest};
use crate::error::{Result, StorageError};
use crate::models::{ComparisonRecord, RatingCategory};
use crate::repository::{chart, comparison};
use crate::services::elo;

/// Apply one comparison outcome: update both ratings of the requested
/// category and append the audit record, all in one transaction.
///
/// Missing ids surface `NotFound` before anything else, including the
/// self-comparison check. Rows are locked in ascending chart-id order, so
/// concurrent submissions that share a chart serialize on it instead of
/// deadlocking, and a failure anywhere rolls the whole submission back.
pub async fn submit_comparison(
    pool: &PgPool,
    req: &SubmitComparisonRequest,
) -> Result<ComparisonResponse> {
    let mut tx = pool.begin().await?;

    if req.winner_chart_id == req.loser_chart_id {
        chart::rating_for_update(&mut tx, req.winner_chart_id, req.category).await?;
        return Err(StorageError::InvalidComparison);
    }

    let (low, high) = if req.winner_chart_id < req.loser_chart_id {
        (req.winner_chart_id, req.loser_chart_id)
    } else {
        (req.loser_chart_id, req.winner_chart_id)
    };
    let low_rating = chart::rating_for_update(&mut tx, low, req.category).await?;
    let high_rating = chart::rating_for_update(&mut tx, high, req.category).await?;

    let (winner_rating, loser_rating) = if req.winner_chart_id == low {
        (low_rating, high_rating)
    } else {
        (high_rating, low_rating)
    };

    let (new_winner, new_loser) = elo::rate_pair(
        winner_rating,
        loser_rating,
        req.drawn,
        elo::DEFAULT_K_FACTOR,
    );

    chart::store_rating(&mut tx, req.winner_chart_id, req.category, new_winner).await?;
    chart::store_rating(&mut tx, req.loser_chart_id, req.category, new_loser).await?;

    let record = comparison::insert_record(
        &mut tx,
        req.winner_chart_id,
        req.loser_chart_id,
        req.drawn,
        req.category,
    )
    .await?;

    tx.commit().await?;

    Ok(ComparisonResponse::new(record, new_winner, new_loser))
}

/// Rebuild one category's ratings from its comparison log: reset every chart
/// to the baseline, then replay the log in submission order. Runs in a
/// single transaction so readers never observe a half-replayed state.
pub async fn recompute_ratings(pool: &PgPool, category: RatingCategory) -> Result<u64> {
    let mut tx = pool.begin().await?;

    chart::reset_ratings(&mut tx, category, elo::INITIAL_RATING).await?;

    let records = comparison::list_by_category(&mut tx, category).await?;
    let ratings = replay_records(&records);

    for (chart_id, rating) in &ratings {
        chart::store_rating(&mut tx, *chart_id, category, *rating).await?;
    }

    tx.commit().await?;

    Ok(records.len() as u64)
}

/// Fold a comparison log into final ratings, starting every chart at the
/// baseline. Charts that never appear in the log are absent from the result.
pub fn replay_records(records: &[ComparisonRecord]) -> BTreeMap<i32, f64> {
    let mut ratings: BTreeMap<i32, f64> = BTreeMap::new();

    for record in records {
        let winner = ratings
            .get(&record.winner_chart_id)
            .copied()
            .unwrap_or(elo::INITIAL_RATING);
        let loser = ratings
            .get(&record.loser_chart_id)
            .copied()
            .unwrap_or(elo::INITIAL_RATING);

        let (new_winner, new_loser) =
            elo::rate_pair(winner, loser, record.drawn, elo::DEFAULT_K_FACTOR);

        ratings.insert(record.winner_chart_id, new_winner);
        ratings.insert(record.loser_chart_id, new_loser);
    }

    ratings
}
