use crate::{reviews::ReviewStore, roads::RoadNetwork};
use jatra::catalog::Catalog;

pub struct AppState {
    pub catalog: Catalog,
    pub roads: RoadNetwork,
    pub reviews: ReviewStore,
}
