use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jatra::{
    journey::{matcher, segment},
    shared::geo::Coordinate,
};
use std::{collections::HashMap, sync::Arc};

/// Map path of a route, or of the travelled segment when `from` and `to`
/// are given. Stops without a known coordinate never show up; fewer than
/// two mappable stops means there is nothing to draw.
pub async fn path(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let Some(id) = params.get("route") else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let route = state.catalog.route_by_id(id).ok_or(StatusCode::NOT_FOUND)?;

    let stops = match (params.get("from"), params.get("to")) {
        (Some(from), Some(to)) => {
            let from_index = matcher::find_stop_index(&route.normalized_stops, from)
                .ok_or(StatusCode::NOT_FOUND)?;
            let to_index = matcher::find_stop_index(&route.normalized_stops, to)
                .ok_or(StatusCode::NOT_FOUND)?;
            segment::route_segment(route, from_index, to_index)
        }
        _ => route.stops.to_vec(),
    };

    let coordinates = state.catalog.path(&stops);
    if coordinates.len() < 2 {
        return Ok(Json(Vec::<Coordinate>::new()).into_response());
    }

    let polyline = state.roads.path(&coordinates).await;
    Ok(Json(polyline).into_response())
}
