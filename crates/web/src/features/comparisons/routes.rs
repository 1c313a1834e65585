use axum::{Router, routing::post};
use storage::Database;

use super::handlers::{recompute_ratings, submit_comparison};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(submit_comparison))
        .route("/recompute", post(recompute_ratings))
}
