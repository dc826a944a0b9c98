use std::sync::Arc;

use jatra::{catalog::Route, journey::filter};

fn route(id: &str, fare: f64, distance_km: f64, minutes: u32) -> Route {
    Route {
        index: 0,
        id: id.into(),
        name: id.into(),
        service_type: "local".into(),
        stops: [Arc::from("A"), Arc::from("B")].into(),
        normalized_stops: [Arc::from("a"), Arc::from("b")].into(),
        fare,
        distance_km,
        duration_minutes: minutes,
    }
}

fn fleet() -> Vec<Route> {
    vec![
        route("bus-0", 50.0, 10.0, 50),
        route("bus-1", 80.0, 18.0, 90),
        route("bus-2", 100.0, 20.0, 100),
        route("bus-3", 120.0, 25.0, 120),
    ]
}

#[test]
fn fare_range_is_boundary_inclusive() {
    let kept = filter::by_fare_range(&fleet(), 80.0, 100.0);
    let fares: Vec<f64> = kept.iter().map(|route| route.fare).collect();
    assert_eq!(fares, [80.0, 100.0]);
}

#[test]
fn fare_range_no_matches() {
    assert!(filter::by_fare_range(&fleet(), 200.0, 300.0).is_empty());
}

#[test]
fn fare_range_single_match() {
    let kept = filter::by_fare_range(&fleet(), 120.0, 120.0);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id.as_ref(), "bus-3");
}

#[test]
fn distance_range_is_boundary_inclusive() {
    let kept = filter::by_distance_range(&fleet(), 10.0, 20.0);
    let distances: Vec<f64> = kept.iter().map(|route| route.distance_km).collect();
    assert_eq!(distances, [10.0, 18.0, 20.0]);
}

#[test]
fn distance_range_no_matches() {
    assert!(filter::by_distance_range(&fleet(), 100.0, 200.0).is_empty());
}

#[test]
fn max_duration_keeps_exact_limit() {
    let kept = filter::by_max_duration(&fleet(), 90);
    let minutes: Vec<u32> = kept.iter().map(|route| route.duration_minutes).collect();
    assert_eq!(minutes, [50, 90]);
}

#[test]
fn max_duration_impossible_limit() {
    assert!(filter::by_max_duration(&fleet(), 10).is_empty());
}

#[test]
fn filters_keep_input_order() {
    let kept = filter::by_fare_range(&fleet(), 0.0, 1000.0);
    let ids: Vec<&str> = kept.iter().map(|route| route.id.as_ref()).collect();
    assert_eq!(ids, ["bus-0", "bus-1", "bus-2", "bus-3"]);
}

#[test]
fn filters_chain() {
    let routes = fleet();
    let affordable = filter::by_fare_range(&routes, 0.0, 100.0);
    let quick = filter::by_max_duration(&affordable, 90);
    let ids: Vec<&str> = quick.iter().map(|route| route.id.as_ref()).collect();
    assert_eq!(ids, ["bus-0", "bus-1"]);
}

#[test]
fn filters_leave_input_alone() {
    let routes = fleet();
    let _ = filter::by_fare_range(&routes, 80.0, 100.0);
    assert_eq!(routes.len(), 4);
    assert_eq!(routes[0].id.as_ref(), "bus-0");
}
