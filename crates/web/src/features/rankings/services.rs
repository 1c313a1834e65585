use sqlx::PgPool;
use storage::{
    dto::ranking::{RankingEntry, RankingFilter},
    error::Result,
    services::rankings,
};

pub async fn list_rankings(pool: &PgPool, filter: &RankingFilter) -> Result<Vec<RankingEntry>> {
    rankings::list_rankings(pool, filter).await
}
