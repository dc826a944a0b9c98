use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

const DEFAULT_STORE_URL: &str = "http://localhost:4100/records/reviews";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub route_id: String,
    pub rating: u8,
    pub comment: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

/// Review record store collaborator, keyed by route id. Lookups degrade
/// to an empty list and submissions to a dropped write; the caller never
/// sees a network failure.
pub struct ReviewStore {
    client: reqwest::Client,
    base_url: String,
}

impl Default for ReviewStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewStore {
    pub fn new() -> Self {
        let base_url =
            std::env::var("REVIEW_STORE_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.to_string());
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub async fn for_route(&self, route_id: &str) -> Vec<Review> {
        match self.fetch(route_id).await {
            Ok(reviews) => reviews,
            Err(err) => {
                warn!("Review store failed: {err}, returning no reviews");
                Vec::new()
            }
        }
    }

    /// Fire and forget append; a rejected or failed write is logged and
    /// dropped.
    pub async fn submit(&self, review: &Review) -> bool {
        match self.client.post(&self.base_url).json(review).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!("Review store rejected submission: {}", response.status());
                false
            }
            Err(err) => {
                warn!("Review store failed: {err}, dropping submission");
                false
            }
        }
    }

    async fn fetch(&self, route_id: &str) -> Result<Vec<Review>, reqwest::Error> {
        self.client
            .get(&self.base_url)
            .query(&[("route", route_id)])
            .send()
            .await?
            .json()
            .await
    }
}
