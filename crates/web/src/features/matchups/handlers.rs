use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::matchup::{MatchupFilter, MatchupResponse},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/matchups",
    params(MatchupFilter),
    responses(
        (status = 200, description = "Matchup sampled successfully", body = MatchupResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 422, description = "Fewer than two eligible charts in the tier")
    ),
    tag = "matchups"
)]
pub async fn sample_matchup(
    State(db): State<Database>,
    Query(filter): Query<MatchupFilter>,
) -> Result<Response, WebError> {
    filter.validate().map_err(WebError::BadRequest)?;

    let matchup = services::sample_matchup(db.pool(), &filter).await?;

    Ok(Json(matchup).into_response())
}
