use serde::{Deserialize, Serialize};

/// One bus line as published: the route is a single dash delimited string
/// of stop names, each optionally tagged with a Bengali label.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawBus {
    pub bus_name: String,
    pub service_type: String,
    pub rate_per_km: Option<f64>,
    pub min_fare: Option<f64>,
    pub route: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}
