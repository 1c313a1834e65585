use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::chart::{ChartListFilter, ChartResponse, CreateChartRequest},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/charts",
    params(ChartListFilter),
    responses(
        (status = 200, description = "List charts successfully", body = Vec<ChartResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "charts"
)]
pub async fn list_charts(
    State(db): State<Database>,
    Query(filter): Query<ChartListFilter>,
) -> Result<Response, WebError> {
    filter.validate().map_err(WebError::BadRequest)?;

    let charts = services::list_charts(db.pool(), &filter).await?;

    let response: Vec<ChartResponse> = charts.into_iter().map(ChartResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/charts/{id}",
    params(
        ("id" = i32, Path, description = "Chart id")
    ),
    responses(
        (status = 200, description = "Chart found", body = ChartResponse),
        (status = 404, description = "Chart not found")
    ),
    tag = "charts"
)]
pub async fn get_chart(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let chart = services::get_chart(db.pool(), id).await?;

    Ok(Json(ChartResponse::from(chart)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/charts",
    request_body = CreateChartRequest,
    responses(
        (status = 201, description = "Chart created successfully", body = ChartResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "charts"
)]
pub async fn create_chart(
    State(db): State<Database>,
    Json(req): Json<CreateChartRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let chart = services::create_chart(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(ChartResponse::from(chart))).into_response())
}
