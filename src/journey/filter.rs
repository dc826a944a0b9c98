use crate::shared::Metrics;

/// Inclusive range filters over routes or journeys. Each one returns a new
/// list, keeps the input order and composes by chaining.
pub fn by_fare_range<T: Metrics + Clone>(items: &[T], min: f64, max: f64) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.fare() >= min && item.fare() <= max)
        .cloned()
        .collect()
}

pub fn by_distance_range<T: Metrics + Clone>(items: &[T], min_km: f64, max_km: f64) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.distance_km() >= min_km && item.distance_km() <= max_km)
        .cloned()
        .collect()
}

pub fn by_max_duration<T: Metrics + Clone>(items: &[T], max_minutes: u32) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.duration_minutes() <= max_minutes)
        .cloned()
        .collect()
}
