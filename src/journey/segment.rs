use std::sync::Arc;

use crate::catalog::Route;

/// The travelled part of a route between two resolved stop positions,
/// both ends inclusive. When the journey runs against the stored stop
/// order the slice is reversed, so the result always starts at
/// `from_index`'s stop and ends at `to_index`'s.
pub fn route_segment(route: &Route, from_index: usize, to_index: usize) -> Vec<Arc<str>> {
    if from_index == to_index {
        return Vec::new();
    }

    if from_index < to_index {
        route.stops[from_index..=to_index].to_vec()
    } else {
        let mut segment = route.stops[to_index..=from_index].to_vec();
        segment.reverse();
        segment
    }
}
