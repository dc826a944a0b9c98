use crate::{dto::RouteDto, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub async fn routes(State(state): State<Arc<AppState>>) -> Response {
    let result: Vec<_> = state.catalog.routes().iter().map(RouteDto::from).collect();
    Json(result).into_response()
}

pub async fn route(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let route = state.catalog.route_by_id(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(RouteDto::from(route)).into_response())
}
