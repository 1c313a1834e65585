use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::ranking::{RankingEntry, RankingFilter},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/rankings",
    params(RankingFilter),
    responses(
        (status = 200, description = "Tier ranking retrieved successfully", body = Vec<RankingEntry>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "rankings"
)]
pub async fn list_rankings(
    State(db): State<Database>,
    Query(filter): Query<RankingFilter>,
) -> Result<Response, WebError> {
    filter.validate().map_err(WebError::BadRequest)?;

    let entries = services::list_rankings(db.pool(), &filter).await?;

    Ok(Json(entries).into_response())
}
