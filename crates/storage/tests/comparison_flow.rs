//! Database-backed checks for the comparison submission flow. These need a
//! live Postgres; point DATABASE_URL at one and run with
//! `cargo test -- --ignored`.

use storage::Database;
use storage::dto::chart::CreateChartRequest;
use storage::dto::comparison::SubmitComparisonRequest;
use storage::error::StorageError;
use storage::models::RatingCategory;
use storage::repository::chart::ChartRepository;
use storage::services::comparison;

// Well past anything SERIAL will hand out in a test database.
const MISSING_CHART_ID: i32 = 2_000_000_000;

async fn connect() -> Database {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for ignored tests");
    let db = Database::new(&url).await.expect("failed to connect");
    db.run_migrations().await.expect("failed to migrate");
    db
}

async fn create_chart(db: &Database, title: &str) -> i32 {
    let repo = ChartRepository::new(db.pool());
    let chart = repo
        .create(&CreateChartRequest {
            title: title.to_string(),
            chart_type: 1,
            difficulty: 12,
            note_count: None,
        })
        .await
        .expect("failed to create chart");
    chart.chart_id
}

fn request(winner: i32, loser: i32) -> SubmitComparisonRequest {
    SubmitComparisonRequest {
        winner_chart_id: winner,
        loser_chart_id: loser,
        drawn: false,
        category: RatingCategory::Standard,
    }
}

async fn standard_rating(db: &Database, chart_id: i32) -> f64 {
    let repo = ChartRepository::new(db.pool());
    repo.find_by_id(chart_id)
        .await
        .expect("chart should exist")
        .rating
}

async fn record_count(db: &Database, chart_id: i32) -> i64 {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM comparison_records WHERE winner_chart_id = $1 OR loser_chart_id = $1",
    )
    .bind(chart_id)
    .fetch_one(db.pool())
    .await
    .expect("failed to count records")
}

#[tokio::test]
#[ignore = "requires a live Postgres at DATABASE_URL"]
async fn submission_updates_both_ratings_and_appends_a_record() {
    let db = connect().await;
    let winner = create_chart(&db, "flow winner").await;
    let loser = create_chart(&db, "flow loser").await;

    let outcome = comparison::submit_comparison(db.pool(), &request(winner, loser))
        .await
        .expect("submission should succeed");

    assert_eq!(outcome.winner_rating, 1210.0);
    assert_eq!(outcome.loser_rating, 1190.0);
    assert_eq!(standard_rating(&db, winner).await, 1210.0);
    assert_eq!(standard_rating(&db, loser).await, 1190.0);
    assert_eq!(record_count(&db, winner).await, 1);
}

#[tokio::test]
#[ignore = "requires a live Postgres at DATABASE_URL"]
async fn failed_submission_leaves_no_partial_state() {
    let db = connect().await;
    let winner = create_chart(&db, "atomicity survivor").await;

    // The winner row is read and locked before the loser lookup fails, so a
    // partial update would be visible here if the transaction did not roll
    // back as a unit.
    let err = comparison::submit_comparison(db.pool(), &request(winner, MISSING_CHART_ID))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::NotFound));
    assert_eq!(standard_rating(&db, winner).await, 1200.0);
    assert_eq!(record_count(&db, winner).await, 0);
}

#[tokio::test]
#[ignore = "requires a live Postgres at DATABASE_URL"]
async fn missing_chart_reported_before_self_comparison() {
    let db = connect().await;

    let err = comparison::submit_comparison(db.pool(), &request(MISSING_CHART_ID, MISSING_CHART_ID))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
#[ignore = "requires a live Postgres at DATABASE_URL"]
async fn self_comparison_of_an_existing_chart_is_rejected() {
    let db = connect().await;
    let chart = create_chart(&db, "self comparison").await;

    let err = comparison::submit_comparison(db.pool(), &request(chart, chart))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::InvalidComparison));
    assert_eq!(standard_rating(&db, chart).await, 1200.0);
    assert_eq!(record_count(&db, chart).await, 0);
}
