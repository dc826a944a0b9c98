use jatra::{catalog::Route, shared::fare};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDto {
    pub id: String,
    pub name: String,
    pub service_type: String,
    pub start: String,
    pub end: String,
    pub stops: Vec<String>,
    pub fare: f64,
    pub distance_km: f64,
    pub duration_minutes: u32,
    pub duration: String,
}

impl RouteDto {
    pub fn from(route: &Route) -> Self {
        Self {
            id: route.id.to_string(),
            name: route.name.to_string(),
            service_type: route.service_type.to_string(),
            start: route.start().map(|stop| stop.to_string()).unwrap_or_default(),
            end: route.end().map(|stop| stop.to_string()).unwrap_or_default(),
            stops: route.stops.iter().map(|stop| stop.to_string()).collect(),
            fare: route.fare,
            distance_km: route.distance_km,
            duration_minutes: route.duration_minutes,
            duration: fare::format_duration(route.duration_minutes as i64),
        }
    }
}
