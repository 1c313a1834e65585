use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::comparison::{
        ComparisonResponse, RecomputeParams, RecomputeResponse, SubmitComparisonRequest,
    },
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/comparisons",
    request_body = SubmitComparisonRequest,
    responses(
        (status = 201, description = "Comparison recorded, ratings updated", body = ComparisonResponse),
        (status = 400, description = "Validation error or winner equals loser"),
        (status = 404, description = "Referenced chart not found")
    ),
    tag = "comparisons"
)]
pub async fn submit_comparison(
    State(db): State<Database>,
    Json(req): Json<SubmitComparisonRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let outcome = services::submit_comparison(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(outcome)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/comparisons/recompute",
    params(RecomputeParams),
    responses(
        (status = 200, description = "Ratings regenerated from the comparison log", body = RecomputeResponse)
    ),
    tag = "comparisons"
)]
pub async fn recompute_ratings(
    State(db): State<Database>,
    Query(params): Query<RecomputeParams>,
) -> Result<Response, WebError> {
    let records_replayed = services::recompute_ratings(db.pool(), params.category).await?;

    Ok(Json(RecomputeResponse {
        category: params.category,
        records_replayed,
    })
    .into_response())
}
