use sqlx::PgPool;
use storage::{
    dto::chart::{ChartListFilter, CreateChartRequest},
    error::Result,
    models::Chart,
    repository::chart::ChartRepository,
};

pub async fn list_charts(pool: &PgPool, filter: &ChartListFilter) -> Result<Vec<Chart>> {
    let repo = ChartRepository::new(pool);
    repo.list(filter).await
}

pub async fn get_chart(pool: &PgPool, chart_id: i32) -> Result<Chart> {
    let repo = ChartRepository::new(pool);
    repo.find_by_id(chart_id).await
}

/// Create a chart; both rating categories start at the 1200 baseline.
pub async fn create_chart(pool: &PgPool, req: &CreateChartRequest) -> Result<Chart> {
    let repo = ChartRepository::new(pool);
    repo.create(req).await
}
