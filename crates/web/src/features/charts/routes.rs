use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_chart, get_chart, list_charts};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_charts).post(create_chart))
        .route("/:id", get(get_chart))
}
