use sqlx::PgPool;
use storage::{
    dto::matchup::{MatchupFilter, MatchupResponse},
    error::Result,
    services::matchmaking,
};

pub async fn sample_matchup(pool: &PgPool, filter: &MatchupFilter) -> Result<MatchupResponse> {
    matchmaking::sample_matchup(pool, filter).await
}
