use axum::{Router, routing::get};
use storage::Database;

use super::handlers::sample_matchup;

pub fn routes() -> Router<Database> {
    Router::new().route("/", get(sample_matchup))
}
