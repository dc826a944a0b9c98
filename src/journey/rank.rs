use std::str::FromStr;

use crate::shared::Metrics;

/// The route with the lowest fare. Empty input gives None; on a tie the
/// earliest element wins.
pub fn cheapest<T: Metrics>(items: &[T]) -> Option<&T> {
    items
        .iter()
        .reduce(|best, item| if item.fare() < best.fare() { item } else { best })
}

/// The route with the shortest travel time. Same tie and empty rules as
/// [`cheapest`].
pub fn fastest<T: Metrics>(items: &[T]) -> Option<&T> {
    items.iter().reduce(|best, item| {
        if item.duration_minutes() < best.duration_minutes() {
            item
        } else {
            best
        }
    })
}

/// The route covering the least distance. Same tie and empty rules as
/// [`cheapest`].
pub fn shortest<T: Metrics>(items: &[T]) -> Option<&T> {
    items.iter().reduce(|best, item| {
        if item.distance_km() < best.distance_km() {
            item
        } else {
            best
        }
    })
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Fare,
    Time,
    Distance,
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fare" => Ok(Self::Fare),
            "time" => Ok(Self::Time),
            "distance" => Ok(Self::Distance),
            _ => Err(()),
        }
    }
}

/// Ascending stable sort into a new list; the input is left untouched.
pub fn sort_routes<T: Metrics + Clone>(items: &[T], key: SortKey) -> Vec<T> {
    let mut sorted = items.to_vec();
    match key {
        SortKey::Fare => sorted.sort_by(|a, b| a.fare().total_cmp(&b.fare())),
        SortKey::Time => sorted.sort_by_key(|item| item.duration_minutes()),
        SortKey::Distance => sorted.sort_by(|a, b| a.distance_km().total_cmp(&b.distance_km())),
    }
    sorted
}
