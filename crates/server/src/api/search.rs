use crate::{dto::JourneyDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jatra::journey::{Planner, filter};
use std::{collections::HashMap, str::FromStr, sync::Arc};

pub async fn search(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let Some(from) = params.get("from") else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let Some(to) = params.get("to") else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let sort = match params.get("sort") {
        Some(value) => value.parse().map_err(|_| StatusCode::BAD_REQUEST)?,
        None => Default::default(),
    };

    let mut journeys = Planner::new(&state.catalog, from, to).sort_by(sort).solve();

    let min_fare: Option<f64> = parse_param(&params, "min_fare")?;
    let max_fare: Option<f64> = parse_param(&params, "max_fare")?;
    if min_fare.is_some() || max_fare.is_some() {
        journeys = filter::by_fare_range(
            &journeys,
            min_fare.unwrap_or(0.0),
            max_fare.unwrap_or(f64::MAX),
        );
    }

    let min_km: Option<f64> = parse_param(&params, "min_km")?;
    let max_km: Option<f64> = parse_param(&params, "max_km")?;
    if min_km.is_some() || max_km.is_some() {
        journeys = filter::by_distance_range(
            &journeys,
            min_km.unwrap_or(0.0),
            max_km.unwrap_or(f64::MAX),
        );
    }

    if let Some(max_minutes) = parse_param(&params, "max_minutes")? {
        journeys = filter::by_max_duration(&journeys, max_minutes);
    }

    let result: Vec<_> = journeys
        .iter()
        .map(|journey| JourneyDto::from(journey, &state.catalog))
        .collect();
    Ok(Json(result).into_response())
}

pub async fn locations(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let result: Vec<String> = match params.get("q") {
        Some(query) => state
            .catalog
            .search_locations(query)
            .into_iter()
            .map(|name| name.to_string())
            .collect(),
        None => state
            .catalog
            .locations()
            .iter()
            .map(|name| name.to_string())
            .collect(),
    };
    Ok(Json(result).into_response())
}

fn parse_param<T: FromStr>(
    params: &HashMap<String, String>,
    key: &str,
) -> Result<Option<T>, StatusCode> {
    match params.get(key) {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| StatusCode::BAD_REQUEST),
        None => Ok(None),
    }
}
