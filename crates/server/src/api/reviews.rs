use crate::{reviews::Review, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use std::{collections::HashMap, sync::Arc};

pub async fn reviews(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let Some(id) = params.get("route") else {
        return Err(StatusCode::BAD_REQUEST);
    };
    Ok(Json(state.reviews.for_route(id).await).into_response())
}

#[derive(Debug, Deserialize)]
pub struct ReviewSubmission {
    pub route_id: String,
    pub rating: u8,
    pub comment: String,
    pub author: String,
}

pub async fn submit_review(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<ReviewSubmission>,
) -> Result<Response, StatusCode> {
    if !(1..=5).contains(&submission.rating) {
        return Err(StatusCode::BAD_REQUEST);
    }
    if state.catalog.route_by_id(&submission.route_id).is_none() {
        return Err(StatusCode::NOT_FOUND);
    }

    let review = Review {
        route_id: submission.route_id,
        rating: submission.rating,
        comment: submission.comment,
        author: submission.author,
        timestamp: Utc::now(),
    };
    state.reviews.submit(&review).await;
    Ok(StatusCode::ACCEPTED.into_response())
}
