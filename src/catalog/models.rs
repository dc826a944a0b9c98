use std::sync::Arc;

use crate::shared::Metrics;

/// One bus line with its derived cost model. Stop order encodes the
/// physical traversal order of the line.
#[derive(Debug, Default, Clone)]
pub struct Route {
    pub index: u32,
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub service_type: Arc<str>,
    pub stops: Box<[Arc<str>]>,
    pub normalized_stops: Box<[Arc<str>]>,
    pub fare: f64,
    pub distance_km: f64,
    pub duration_minutes: u32,
}

impl Route {
    pub fn start(&self) -> Option<&Arc<str>> {
        self.stops.first()
    }

    pub fn end(&self) -> Option<&Arc<str>> {
        self.stops.last()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }
}

impl Metrics for Route {
    fn fare(&self) -> f64 {
        self.fare
    }

    fn distance_km(&self) -> f64 {
        self.distance_km
    }

    fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
}
