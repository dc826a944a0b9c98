use std::sync::Arc;

use crate::{catalog::Route, shared::Metrics, shared::fare};

/// A found connection between two locations, with the travelled stop
/// sequence and its derived cost. Built per search, never stored.
#[derive(Debug, Clone)]
pub struct Journey {
    pub kind: JourneyKind,
    pub stops: Vec<Arc<str>>,
    pub fare: f64,
    pub distance_km: f64,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone)]
pub enum JourneyKind {
    Direct {
        route_id: Arc<str>,
    },
    Connecting {
        first_route_id: Arc<str>,
        second_route_id: Arc<str>,
        transfer_point: Arc<str>,
    },
}

impl Journey {
    pub fn direct(route: &Route, stops: Vec<Arc<str>>) -> Self {
        let (fare, distance_km, duration_minutes) = leg_cost(stops.len());
        Self {
            kind: JourneyKind::Direct {
                route_id: route.id.clone(),
            },
            stops,
            fare,
            distance_km,
            duration_minutes,
        }
    }

    pub fn connecting(
        first: &Route,
        second: &Route,
        transfer_point: Arc<str>,
        first_leg: Vec<Arc<str>>,
        second_leg: Vec<Arc<str>>,
    ) -> Self {
        let (first_fare, first_km, first_minutes) = leg_cost(first_leg.len());
        let (second_fare, second_km, second_minutes) = leg_cost(second_leg.len());

        // The transfer stop closes the first leg and opens the second;
        // keep it once.
        let mut stops = first_leg;
        stops.extend(second_leg.into_iter().skip(1));

        Self {
            kind: JourneyKind::Connecting {
                first_route_id: first.id.clone(),
                second_route_id: second.id.clone(),
                transfer_point,
            },
            stops,
            fare: first_fare + second_fare,
            distance_km: fare::round_to_tenth(first_km + second_km),
            duration_minutes: first_minutes + second_minutes,
        }
    }

    pub fn is_direct(&self) -> bool {
        matches!(self.kind, JourneyKind::Direct { .. })
    }

    pub fn transfer_point(&self) -> Option<&Arc<str>> {
        match &self.kind {
            JourneyKind::Direct { .. } => None,
            JourneyKind::Connecting { transfer_point, .. } => Some(transfer_point),
        }
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }
}

impl Metrics for Journey {
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

/// Fare, distance and duration of one travelled leg with the given number
/// of stops. Segments are priced with the default rate, not a per bus one.
fn leg_cost(stop_count: usize) -> (f64, f64, u32) {
    let count = stop_count as i64;
    let distance_km = fare::round_to_tenth(fare::distance_from_stops(count, fare::KM_PER_STOP));
    let amount = fare::segment_fare(distance_km, fare::RATE_PER_KM, fare::MIN_FARE);
    let minutes = fare::travel_time(count, fare::MINUTES_PER_STOP);
    (amount, distance_km, minutes)
}
