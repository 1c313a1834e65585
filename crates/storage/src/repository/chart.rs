use sqlx::{PgConnection, PgPool, QueryBuilder};

use crate::dto::chart::{ChartListFilter, CreateChartRequest, PlayStyle};
use crate::error::{Result, StorageError};
use crate::models::{Chart, RatedChart, RatingCategory};

const CHART_COLUMNS: &str =
    "chart_id, title, chart_type, difficulty, note_count, rating, rating_hc, created_at";

/// Repository for chart catalogue reads and creation.
pub struct ChartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ChartRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, chart_id: i32) -> Result<Chart> {
        let mut query = QueryBuilder::new("SELECT ");
        query.push(CHART_COLUMNS);
        query.push(" FROM charts WHERE chart_id = ");
        query.push_bind(chart_id);

        let chart = query
            .build_query_as::<Chart>()
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(chart)
    }

    pub async fn list(&self, filter: &ChartListFilter) -> Result<Vec<Chart>> {
        let mut query = QueryBuilder::new("SELECT ");
        query.push(CHART_COLUMNS);
        query.push(" FROM charts WHERE 1=1");

        if let Some(difficulty) = filter.difficulty {
            query.push(" AND difficulty = ");
            query.push_bind(difficulty);
        }

        if let Some(style) = filter.style {
            query.push(" AND chart_type = ANY(");
            query.push_bind(style.chart_types().to_vec());
            query.push(")");
        }

        query.push(" ORDER BY chart_id");

        let charts = query.build_query_as::<Chart>().fetch_all(self.pool).await?;

        Ok(charts)
    }

    pub async fn create(&self, req: &CreateChartRequest) -> Result<Chart> {
        let mut query =
            QueryBuilder::new("INSERT INTO charts (title, chart_type, difficulty, note_count) ");
        query.push("VALUES (");
        query.push_bind(&req.title);
        query.push(", ");
        query.push_bind(req.chart_type);
        query.push(", ");
        query.push_bind(req.difficulty);
        query.push(", ");
        query.push_bind(req.note_count);
        query.push(") RETURNING ");
        query.push(CHART_COLUMNS);

        let chart = query.build_query_as::<Chart>().fetch_one(self.pool).await?;

        Ok(chart)
    }

    /// All charts of one difficulty tier and play style, carrying the rating
    /// of the requested category. Unordered; ordering is the caller's job.
    pub async fn list_rated_by_tier(
        &self,
        difficulty: i16,
        style: PlayStyle,
        category: RatingCategory,
    ) -> Result<Vec<RatedChart>> {
        let mut query = QueryBuilder::new("SELECT chart_id, title, chart_type, ");
        query.push(category.as_column());
        query.push(" AS rating FROM charts WHERE difficulty = ");
        query.push_bind(difficulty);
        query.push(" AND chart_type = ANY(");
        query.push_bind(style.chart_types().to_vec());
        query.push(")");

        let charts = query
            .build_query_as::<RatedChart>()
            .fetch_all(self.pool)
            .await?;

        Ok(charts)
    }
}

/// Read one chart's rating for `category`, locking the row for the rest of
/// the transaction. Callers must acquire locks in ascending chart-id order.
pub async fn rating_for_update(
    conn: &mut PgConnection,
    chart_id: i32,
    category: RatingCategory,
) -> Result<f64> {
    let mut query = QueryBuilder::new("SELECT ");
    query.push(category.as_column());
    query.push(" FROM charts WHERE chart_id = ");
    query.push_bind(chart_id);
    query.push(" FOR UPDATE");

    let rating = query
        .build_query_scalar::<f64>()
        .fetch_optional(conn)
        .await?
        .ok_or(StorageError::NotFound)?;

    Ok(rating)
}

/// Write back one chart's rating for `category` within a transaction.
pub async fn store_rating(
    conn: &mut PgConnection,
    chart_id: i32,
    category: RatingCategory,
    value: f64,
) -> Result<()> {
    let mut query = QueryBuilder::new("UPDATE charts SET ");
    query.push(category.as_column());
    query.push(" = ");
    query.push_bind(value);
    query.push(" WHERE chart_id = ");
    query.push_bind(chart_id);

    let result = query.build().execute(conn).await?;
    if result.rows_affected() == 0 {
        return Err(StorageError::NotFound);
    }

    Ok(())
}

/// Reset every rating of `category` in one statement (recompute entry point).
pub async fn reset_ratings(
    conn: &mut PgConnection,
    category: RatingCategory,
    baseline: f64,
) -> Result<()> {
    let mut query = QueryBuilder::new("UPDATE charts SET ");
    query.push(category.as_column());
    query.push(" = ");
    query.push_bind(baseline);

    query.build().execute(conn).await?;

    Ok(())
}
