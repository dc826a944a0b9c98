use rayon::prelude::*;
use std::{collections::HashMap, sync::Arc};
use tracing::{info, warn};

mod models;
pub mod parse;
pub use models::*;

use crate::{
    shared::fare,
    shared::geo::Coordinate,
    source::{self, Source},
};

type IdToIndex = HashMap<Arc<str>, usize>;
type NameToCoordinate = HashMap<Arc<str>, Coordinate>;

/// The full set of bus lines, built once at startup and read only after
/// that. Every search function borrows it; nothing mutates it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    routes: Box<[Route]>,
    route_lookup: Arc<IdToIndex>,
    locations: Box<[Arc<str>]>,
    coordinates: Arc<NameToCoordinate>,
}

impl Catalog {
    pub fn new() -> Self {
        Default::default()
    }

    /// Builds a catalog from already shaped routes. Lookups and the
    /// location directory are derived; no coordinates are attached.
    pub fn from_routes(mut routes: Vec<Route>) -> Self {
        let mut route_lookup: IdToIndex = HashMap::new();
        routes.iter_mut().enumerate().for_each(|(index, route)| {
            route.index = index as u32;
            route_lookup.insert(route.id.clone(), index);
        });

        let mut locations: Vec<Arc<str>> = routes
            .iter()
            .flat_map(|route| route.stops.iter().cloned())
            .collect();
        locations.sort();
        locations.dedup();

        Self {
            routes: routes.into(),
            route_lookup: route_lookup.into(),
            locations: locations.into(),
            coordinates: Default::default(),
        }
    }

    /// Streams raw records out of the source and derives each route's stop
    /// list and cost model. Buses whose route string parses to no stops are
    /// dropped with a warning.
    pub fn load_source(mut self, source: Source) -> Result<Self, source::Error> {
        let mut route_lookup: IdToIndex = HashMap::new();
        let mut routes: Vec<Route> = Vec::new();
        source.stream_buses(|(_, bus)| {
            let stops = parse::stops(&bus.route);
            if stops.is_empty() {
                warn!("Dropping {}: route string has no stops", bus.bus_name);
                return;
            }
            let normalized_stops: Box<[Arc<str>]> = stops
                .iter()
                .map(|stop| Arc::from(stop.to_lowercase()))
                .collect();

            let count = stops.len() as i64;
            let distance_km =
                fare::round_to_tenth(fare::distance_from_stops(count, fare::KM_PER_STOP));
            let rate_per_km = bus.rate_per_km.unwrap_or(fare::RATE_PER_KM);
            let min_fare = bus.min_fare.unwrap_or(fare::MIN_FARE);

            let index = routes.len();
            let value = Route {
                index: index as u32,
                id: format!("bus-{index}").into(),
                name: bus.bus_name.into(),
                service_type: bus.service_type.into(),
                stops: stops.into(),
                normalized_stops,
                fare: fare::fare_for_distance(distance_km, rate_per_km, min_fare).round(),
                distance_km,
                duration_minutes: fare::travel_time(count, fare::MINUTES_PER_STOP),
            };
            route_lookup.insert(value.id.clone(), index);
            routes.push(value);
        })?;
        self.routes = routes.into();
        self.route_lookup = route_lookup.into();

        let mut coordinates: NameToCoordinate = HashMap::new();
        source.stream_locations(|(_, location)| {
            coordinates.insert(
                location.name.into(),
                Coordinate {
                    latitude: location.latitude,
                    longitude: location.longitude,
                },
            );
        })?;
        self.coordinates = coordinates.into();

        let mut locations: Vec<Arc<str>> = self
            .routes
            .iter()
            .flat_map(|route| route.stops.iter().cloned())
            .collect();
        locations.sort();
        locations.dedup();
        self.locations = locations.into();

        info!(
            "Catalog loaded: {} routes, {} locations",
            self.routes.len(),
            self.locations.len()
        );
        Ok(self)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Get a route with the given id.
    /// If no route is found with the given id None is returned.
    pub fn route_by_id(&self, id: &str) -> Option<&Route> {
        let index = self.route_lookup.get(id)?;
        Some(&self.routes[*index])
    }

    /// Every stop name that appears on some route, sorted and unique.
    pub fn locations(&self) -> &[Arc<str>] {
        &self.locations
    }

    /// Case-insensitive substring scan over the location directory, used
    /// for pick-a-stop autocompletion. An empty needle matches nothing.
    pub fn search_locations(&self, needle: &str) -> Vec<Arc<str>> {
        if needle.is_empty() {
            return Vec::new();
        }
        let normalized_needle = needle.to_lowercase();
        self.locations
            .par_iter()
            .filter(|location| location.to_lowercase().contains(&normalized_needle))
            .cloned()
            .collect()
    }

    /// Exact-name lookup into the coordinate table.
    pub fn coordinate(&self, stop: &str) -> Option<Coordinate> {
        self.coordinates.get(stop).copied()
    }

    /// Projects a stop sequence onto the map. Stops without a known
    /// coordinate are silently dropped; this only feeds display paths,
    /// never search results.
    pub fn path(&self, stops: &[Arc<str>]) -> Vec<Coordinate> {
        stops
            .iter()
            .filter_map(|stop| self.coordinate(stop))
            .collect()
    }
}
