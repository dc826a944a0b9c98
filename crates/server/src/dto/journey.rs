use crate::dto::RouteDto;
use jatra::{
    catalog::Catalog,
    journey::{Journey, JourneyKind},
    shared::fare,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyDto {
    pub kind: String,
    pub routes: Vec<RouteDto>,
    pub transfer_point: Option<String>,
    pub stops: Vec<String>,
    pub total_stops: usize,
    pub fare: f64,
    pub distance_km: f64,
    pub duration_minutes: u32,
    pub duration: String,
}

impl JourneyDto {
    pub fn from(journey: &Journey, catalog: &Catalog) -> Self {
        let (kind, route_ids, transfer_point) = match &journey.kind {
            JourneyKind::Direct { route_id } => ("direct", vec![route_id.clone()], None),
            JourneyKind::Connecting {
                first_route_id,
                second_route_id,
                transfer_point,
            } => (
                "connecting",
                vec![first_route_id.clone(), second_route_id.clone()],
                Some(transfer_point.to_string()),
            ),
        };
        let routes = route_ids
            .iter()
            .filter_map(|id| catalog.route_by_id(id))
            .map(RouteDto::from)
            .collect();

        Self {
            kind: kind.to_string(),
            routes,
            transfer_point,
            stops: journey.stops.iter().map(|stop| stop.to_string()).collect(),
            total_stops: journey.stop_count(),
            fare: journey.fare,
            distance_km: journey.distance_km,
            duration_minutes: journey.duration_minutes,
            duration: fare::format_duration(journey.duration_minutes as i64),
        }
    }
}
