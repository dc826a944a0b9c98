use jatra::shared::geo::Coordinate;
use serde::Deserialize;
use tracing::warn;

const OSRM_API_BASE: &str = "https://router.project-osrm.org/route/v1/driving";

/// Road routing collaborator: a stop sequence's coordinates in, a denser
/// polyline following the road network out. The service is best effort;
/// any failure falls back to the input coordinates (straight lines on the
/// map) and is never surfaced past this module.
pub struct RoadNetwork {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
}

#[derive(Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

impl Default for RoadNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl RoadNetwork {
    pub fn new() -> Self {
        let base_url =
            std::env::var("ROAD_SERVICE_URL").unwrap_or_else(|_| OSRM_API_BASE.to_string());
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Never fails: a service error or an empty answer falls back to the
    /// input coordinates. Fewer than two points is no path at all.
    pub async fn path(&self, coordinates: &[Coordinate]) -> Vec<Coordinate> {
        if coordinates.len() < 2 {
            return Vec::new();
        }
        match self.fetch_path(coordinates).await {
            Ok(Some(path)) => path,
            Ok(None) => {
                warn!("Road service returned no route, using straight lines");
                coordinates.to_vec()
            }
            Err(err) => {
                warn!("Road service failed: {err}, using straight lines");
                coordinates.to_vec()
            }
        }
    }

    async fn fetch_path(
        &self,
        coordinates: &[Coordinate],
    ) -> Result<Option<Vec<Coordinate>>, reqwest::Error> {
        let url = format!(
            "{}/{}?overview=full&geometries=geojson",
            self.base_url,
            coordinate_string(coordinates)
        );
        let response: OsrmResponse = self.client.get(url).send().await?.json().await?;
        if response.code != "Ok" {
            return Ok(None);
        }
        let Some(route) = response.routes.first() else {
            return Ok(None);
        };
        // The service answers lon,lat pairs
        let path = route
            .geometry
            .coordinates
            .iter()
            .map(|pair| Coordinate {
                latitude: pair[1],
                longitude: pair[0],
            })
            .collect();
        Ok(Some(path))
    }
}

// The service wants "lon,lat;lon,lat"
fn coordinate_string(coordinates: &[Coordinate]) -> String {
    coordinates
        .iter()
        .map(|coordinate| format!("{},{}", coordinate.longitude, coordinate.latitude))
        .collect::<Vec<_>>()
        .join(";")
}
