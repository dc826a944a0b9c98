pub mod fare;
pub mod geo;

pub use geo::*;

/// Common accessors for anything that carries the three derived route
/// metrics. Filters and rankers are generic over this so they work on
/// catalog routes and assembled journeys alike.
pub trait Metrics {
    fn fare(&self) -> f64;
    fn distance_km(&self) -> f64;
    fn duration_minutes(&self) -> u32;
}

impl<T: Metrics> Metrics for &T {
    fn fare(&self) -> f64 {
        (*self).fare()
    }

    fn distance_km(&self) -> f64 {
        (*self).distance_km()
    }

    fn duration_minutes(&self) -> u32 {
        (*self).duration_minutes()
    }
}
