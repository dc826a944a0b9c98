use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

pub mod filter;
pub mod matcher;
pub mod rank;
pub mod segment;
pub mod transfer;

mod result;
pub use rank::SortKey;
pub use result::*;

use crate::catalog::{Catalog, Route};

/// Filters the catalog down to routes that touch both locations at
/// distinct stops. Direction agnostic: the consumer works out the travel
/// direction from the segment afterwards. Catalog order is kept.
pub fn search_direct<'a>(catalog: &'a Catalog, from: &str, to: &str) -> Vec<&'a Route> {
    if from.is_empty() || to.is_empty() {
        return Vec::new();
    }
    let normalized_from = from.to_lowercase();
    let normalized_to = to.to_lowercase();

    catalog
        .routes()
        .par_iter()
        .filter(|route| {
            let from_index = matcher::find_stop_index(&route.normalized_stops, &normalized_from);
            let to_index = matcher::find_stop_index(&route.normalized_stops, &normalized_to);
            match (from_index, to_index) {
                (Some(from_index), Some(to_index)) => from_index != to_index,
                _ => false,
            }
        })
        .collect()
}

/// Plans journeys between two named locations over an immutable catalog.
pub struct Planner<'a> {
    catalog: &'a Catalog,
    from: &'a str,
    to: &'a str,
    sort: SortKey,
}

impl<'a> Planner<'a> {
    pub fn new(catalog: &'a Catalog, from: &'a str, to: &'a str) -> Self {
        Self {
            catalog,
            from,
            to,
            sort: SortKey::default(),
        }
    }

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort = key;
        self
    }

    /// Direct journeys when any exist, connecting journeys otherwise,
    /// sorted by the configured key.
    pub fn solve(&self) -> Vec<Journey> {
        let journeys = self.direct();
        let journeys = if journeys.is_empty() {
            debug!(
                "No direct route from {} to {}, trying transfers",
                self.from, self.to
            );
            self.connections()
        } else {
            journeys
        };
        rank::sort_routes(&journeys, self.sort)
    }

    /// One journey per direct route, each carrying its travelled segment.
    pub fn direct(&self) -> Vec<Journey> {
        search_direct(self.catalog, self.from, self.to)
            .into_iter()
            .filter_map(|route| {
                let stops = leg(route, self.from, self.to)?;
                Some(Journey::direct(route, stops))
            })
            .collect()
    }

    /// Two leg journeys, one candidate per transfer point. The first
    /// matching route wins for each leg; a point whose legs land on the
    /// same route is skipped, that pairing is already a direct journey.
    pub fn connections(&self) -> Vec<Journey> {
        transfer::find_transfer_points(self.catalog, self.from, self.to)
            .into_iter()
            .filter_map(|point| {
                let first = *search_direct(self.catalog, self.from, point.as_ref()).first()?;
                let second = *search_direct(self.catalog, point.as_ref(), self.to).first()?;
                if first.id == second.id {
                    return None;
                }
                let first_leg = leg(first, self.from, point.as_ref())?;
                let second_leg = leg(second, point.as_ref(), self.to)?;
                Some(Journey::connecting(
                    first, second, point, first_leg, second_leg,
                ))
            })
            .collect()
    }
}

fn leg(route: &Route, from: &str, to: &str) -> Option<Vec<Arc<str>>> {
    let from_index = matcher::find_stop_index(&route.normalized_stops, from)?;
    let to_index = matcher::find_stop_index(&route.normalized_stops, to)?;
    Some(segment::route_segment(route, from_index, to_index))
}
