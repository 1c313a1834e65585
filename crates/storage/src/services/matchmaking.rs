use rand::Rng;
use sqlx::PgPool;

use crate::dto::matchup::{MatchupChart, MatchupFilter, MatchupResponse};
use crate::error::{Result, StorageError};
use crate::models::{RatedChart, RatingCategory};
use crate::repository::chart::ChartRepository;

/// Widest rating gap a sampled pair may have by default. Close pairs sit
/// near a 50/50 expected outcome, so their comparisons carry the most
/// information.
pub const DEFAULT_MAX_GAP: f64 = 50.0;

/// Cap on rejection-sampling draws. Small or skewed pools may contain no
/// pair within the gap at all; once the cap is hit we fall back to the
/// closest pair seen instead of spinning forever.
pub const MAX_SAMPLE_ATTEMPTS: u32 = 1000;

/// Draw two distinct charts whose rating gap is at most `max_gap`.
///
/// The returned pair is unordered; which side wins is decided by the
/// comparison outcome submitted later.
pub fn sample_pair<'a, R: Rng + ?Sized>(
    pool: &'a [RatedChart],
    max_gap: f64,
    rng: &mut R,
) -> Result<(&'a RatedChart, &'a RatedChart)> {
    if pool.len() < 2 {
        return Err(StorageError::InsufficientCandidates);
    }

    let mut best = (0, 1);
    let mut best_gap = f64::INFINITY;

    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let picked = rand::seq::index::sample(rng, pool.len(), 2);
        let (a, b) = (picked.index(0), picked.index(1));
        let gap = (pool[a].rating - pool[b].rating).abs();

        if gap <= max_gap {
            return Ok((&pool[a], &pool[b]));
        }
        if gap < best_gap {
            best_gap = gap;
            best = (a, b);
        }
    }

    Ok((&pool[best.0], &pool[best.1]))
}

/// Propose a matchup from one difficulty tier. The gap is always measured on
/// the standard rating, whichever category the eventual vote targets.
pub async fn sample_matchup(pool: &PgPool, filter: &MatchupFilter) -> Result<MatchupResponse> {
    let repo = ChartRepository::new(pool);
    let candidates = repo
        .list_rated_by_tier(filter.difficulty, filter.style, RatingCategory::Standard)
        .await?;

    let mut rng = rand::rng();
    let (first, second) = sample_pair(&candidates, filter.max_gap, &mut rng)?;

    Ok(MatchupResponse {
        charts: vec![MatchupChart::from(first), MatchupChart::from(second)],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn chart(chart_id: i32, rating: f64) -> RatedChart {
        RatedChart {
            chart_id,
            title: format!("chart {chart_id}"),
            chart_type: 1,
            rating,
        }
    }

    #[test]
    fn empty_pool_fails_immediately() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = sample_pair(&[], DEFAULT_MAX_GAP, &mut rng).unwrap_err();
        assert!(matches!(err, StorageError::InsufficientCandidates));
    }

    #[test]
    fn single_chart_fails_immediately() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = vec![chart(1, 1200.0)];
        let err = sample_pair(&pool, DEFAULT_MAX_GAP, &mut rng).unwrap_err();
        assert!(matches!(err, StorageError::InsufficientCandidates));
    }

    #[test]
    fn accepted_pairs_are_distinct_and_within_gap() {
        let pool: Vec<RatedChart> = (0..20)
            .map(|i| chart(i, 1150.0 + 10.0 * f64::from(i)))
            .collect();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let (a, b) = sample_pair(&pool, DEFAULT_MAX_GAP, &mut rng).unwrap();
            assert_ne!(a.chart_id, b.chart_id);
            assert!((a.rating - b.rating).abs() <= DEFAULT_MAX_GAP);
        }
    }

    #[test]
    fn hopeless_pool_falls_back_to_closest_pair() {
        // No pair is within 50 points; the closest pair is (2, 3) at 100.
        let pool = vec![
            chart(1, 1000.0),
            chart(2, 1400.0),
            chart(3, 1500.0),
            chart(4, 1800.0),
        ];
        let mut rng = StdRng::seed_from_u64(7);

        let (a, b) = sample_pair(&pool, DEFAULT_MAX_GAP, &mut rng).unwrap();
        let mut ids = [a.chart_id, b.chart_id];
        ids.sort();
        assert_eq!(ids, [2, 3]);
    }

    #[test]
    fn two_chart_pool_with_large_gap_terminates() {
        let pool = vec![chart(1, 1000.0), chart(2, 2000.0)];
        let mut rng = StdRng::seed_from_u64(99);

        let (a, b) = sample_pair(&pool, DEFAULT_MAX_GAP, &mut rng).unwrap();
        assert_ne!(a.chart_id, b.chart_id);
    }

    #[test]
    fn zero_gap_accepts_exact_ties() {
        let pool = vec![chart(1, 1200.0), chart(2, 1200.0)];
        let mut rng = StdRng::seed_from_u64(3);

        let (a, b) = sample_pair(&pool, 0.0, &mut rng).unwrap();
        assert_eq!((a.rating - b.rating).abs(), 0.0);
    }
}
