use std::{collections::HashSet, sync::Arc};

use crate::{catalog::Catalog, journey::matcher};

/// Stops where a two leg journey can switch buses: reachable from `from`
/// on some route's forward continuation, and ahead of `to` on some route
/// containing `to`. The two routes need not agree on stop order.
///
/// This is candidate generation, not a shortest path search; the result
/// may contain points that only allow inefficient transfers. Display
/// names are kept, first encounter order, no duplicates.
pub fn find_transfer_points(catalog: &Catalog, from: &str, to: &str) -> Vec<Arc<str>> {
    if from.is_empty() || to.is_empty() {
        return Vec::new();
    }
    let normalized_from = from.to_lowercase();
    let normalized_to = to.to_lowercase();

    // Every stop that lies after an occurrence of `from` on any route.
    let mut reachable: HashSet<&Arc<str>> = HashSet::new();
    for route in catalog.routes() {
        if let Some(from_index) =
            matcher::find_stop_index(&route.normalized_stops, &normalized_from)
        {
            for stop in route.normalized_stops[from_index + 1..].iter() {
                reachable.insert(stop);
            }
        }
    }

    let mut seen: HashSet<Arc<str>> = HashSet::new();
    let mut transfer_points: Vec<Arc<str>> = Vec::new();
    for route in catalog.routes() {
        if let Some(to_index) = matcher::find_stop_index(&route.normalized_stops, &normalized_to) {
            for (i, stop) in route.normalized_stops[..to_index].iter().enumerate() {
                if reachable.contains(stop) && seen.insert(route.stops[i].clone()) {
                    transfer_points.push(route.stops[i].clone());
                }
            }
        }
    }
    transfer_points
}
