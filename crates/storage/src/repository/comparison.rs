use sqlx::{PgConnection, QueryBuilder};

use crate::error::Result;
use crate::models::{ComparisonRecord, RatingCategory};

const RECORD_COLUMNS: &str =
    "record_id, winner_chart_id, loser_chart_id, drawn, rating_category, created_at";

/// Append one immutable audit row within the submission transaction.
pub async fn insert_record(
    conn: &mut PgConnection,
    winner_chart_id: i32,
    loser_chart_id: i32,
    drawn: bool,
    category: RatingCategory,
) -> Result<ComparisonRecord> {
    let mut query = QueryBuilder::new(
        "INSERT INTO comparison_records (winner_chart_id, loser_chart_id, drawn, rating_category) VALUES (",
    );
    query.push_bind(winner_chart_id);
    query.push(", ");
    query.push_bind(loser_chart_id);
    query.push(", ");
    query.push_bind(drawn);
    query.push(", ");
    query.push_bind(category);
    query.push(") RETURNING ");
    query.push(RECORD_COLUMNS);

    let record = query
        .build_query_as::<ComparisonRecord>()
        .fetch_one(conn)
        .await?;

    Ok(record)
}

/// Full comparison log for one category, in replay order.
pub async fn list_by_category(
    conn: &mut PgConnection,
    category: RatingCategory,
) -> Result<Vec<ComparisonRecord>> {
    let mut query = QueryBuilder::new("SELECT ");
    query.push(RECORD_COLUMNS);
    query.push(" FROM comparison_records WHERE rating_category = ");
    query.push_bind(category);
    query.push(" ORDER BY created_at, record_id");

    let records = query
        .build_query_as::<ComparisonRecord>()
        .fetch_all(conn)
        .await?;

    Ok(records)
}
