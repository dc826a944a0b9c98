mod api;
mod dto;
mod reviews;
mod roads;
mod state;

use crate::{reviews::ReviewStore, roads::RoadNetwork, state::AppState};
use axum::routing::get;
use jatra::{catalog::Catalog, source::Source};
use std::{sync::Arc, time::Instant};
use tracing::{error, info};

const PORT: u32 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let start_logo = include_str!("../start_logo.txt");
    println!("{}", start_logo);

    info!("Starting server...");
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 2 {
        error!("Missing data directory");
        std::process::exit(1);
    }
    let path = std::path::Path::new(&args[1]).canonicalize().unwrap();

    info!("Loading data...");
    let now = Instant::now();
    let source = Source::new(Default::default()).from_dir(path);
    let catalog = match Catalog::new().load_source(source) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("Failed to load catalog: {err}");
            std::process::exit(1);
        }
    };
    info!("Loading data took {:?}", now.elapsed());

    let state = Arc::new(AppState {
        catalog,
        roads: RoadNetwork::new(),
        reviews: ReviewStore::new(),
    });

    let app = axum::Router::new()
        .route("/search", get(api::search))
        .route("/locations", get(api::locations))
        .route("/routes", get(api::routes))
        .route("/routes/{id}", get(api::route))
        .route("/path", get(api::path))
        .route("/reviews", get(api::reviews).post(api::submit_review))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", PORT))
        .await
        .unwrap();
    info!("Listening to port {PORT}");
    axum::serve(listener, app).await.unwrap();
}
