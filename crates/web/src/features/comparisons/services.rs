use sqlx::PgPool;
use storage::{
    dto::comparison::{ComparisonResponse, SubmitComparisonRequest},
    error::Result,
    models::RatingCategory,
    services::comparison,
};

pub async fn submit_comparison(
    pool: &PgPool,
    req: &SubmitComparisonRequest,
) -> Result<ComparisonResponse> {
    comparison::submit_comparison(pool, req).await
}

pub async fn recompute_ratings(pool: &PgPool, category: RatingCategory) -> Result<u64> {
    comparison::recompute_ratings(pool, category).await
}
