use std::sync::Arc;

use jatra::{
    catalog::Route,
    journey::rank::{self, SortKey},
    shared::Metrics,
};

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
        route("bus-0", 80.0, 18.0, 90),
        route("bus-1", 100.0, 20.0, 100),
        route("bus-2", 50.0, 10.0, 50),
        route("bus-3", 120.0, 25.0, 120),
    ]
}

#[test]
fn cheapest_picks_lowest_fare() {
    let routes = fleet();
    let best = rank::cheapest(&routes).unwrap();
    assert_eq!(best.id.as_ref(), "bus-2");
    assert_eq!(best.fare, 50.0);
}

#[test]
fn fastest_picks_lowest_duration() {
    let routes = fleet();
    let best = rank::fastest(&routes).unwrap();
    assert_eq!(best.id.as_ref(), "bus-2");
}

#[test]
fn shortest_picks_lowest_distance() {
    let routes = fleet();
    let best = rank::shortest(&routes).unwrap();
    assert_eq!(best.id.as_ref(), "bus-2");
}

#[test]
fn reducers_on_empty_input() {
    let routes: Vec<Route> = Vec::new();
    assert!(rank::cheapest(&routes).is_none());
    assert!(rank::fastest(&routes).is_none());
    assert!(rank::shortest(&routes).is_none());
}

#[test]
fn reducers_on_single_input() {
    let routes = vec![route("bus-0", 80.0, 18.0, 90)];
    assert_eq!(rank::cheapest(&routes).unwrap().id.as_ref(), "bus-0");
}

#[test]
fn cheapest_tie_first_wins() {
    let routes = vec![
        route("bus-0", 80.0, 18.0, 90),
        route("bus-1", 80.0, 20.0, 100),
    ];
    assert_eq!(rank::cheapest(&routes).unwrap().id.as_ref(), "bus-0");
}

#[test]
fn fastest_tie_first_wins() {
    let routes = vec![
        route("bus-0", 80.0, 18.0, 90),
        route("bus-1", 100.0, 20.0, 90),
    ];
    assert_eq!(rank::fastest(&routes).unwrap().id.as_ref(), "bus-0");
}

#[test]
fn shortest_tie_first_wins() {
    let routes = vec![
        route("bus-0", 80.0, 18.0, 90),
        route("bus-1", 100.0, 18.0, 100),
    ];
    assert_eq!(rank::shortest(&routes).unwrap().id.as_ref(), "bus-0");
}

#[test]
fn sort_by_fare() {
    let sorted = rank::sort_routes(&fleet(), SortKey::Fare);
    assert_eq!(sorted.first().unwrap().fare, 50.0);
    assert_eq!(sorted.last().unwrap().fare, 120.0);
}

#[test]
fn sort_by_time() {
    let sorted = rank::sort_routes(&fleet(), SortKey::Time);
    assert_eq!(sorted.first().unwrap().duration_minutes, 50);
    assert_eq!(sorted.last().unwrap().duration_minutes, 120);
}

#[test]
fn sort_by_distance() {
    let sorted = rank::sort_routes(&fleet(), SortKey::Distance);
    assert_eq!(sorted.first().unwrap().distance_km, 10.0);
    assert_eq!(sorted.last().unwrap().distance_km, 25.0);
}

#[test]
fn sort_leaves_input_alone() {
    let routes = fleet();
    let before: Vec<String> = routes.iter().map(|r| r.id.to_string()).collect();
    let _ = rank::sort_routes(&routes, SortKey::Fare);
    let after: Vec<String> = routes.iter().map(|r| r.id.to_string()).collect();
    assert_eq!(before, after);
}

#[test]
fn sort_is_stable_on_ties() {
    let routes = vec![
        route("bus-0", 80.0, 18.0, 90),
        route("bus-1", 80.0, 20.0, 100),
        route("bus-2", 50.0, 10.0, 50),
    ];
    let sorted = rank::sort_routes(&routes, SortKey::Fare);
    assert_eq!(sorted[0].id.as_ref(), "bus-2");
    assert_eq!(sorted[1].id.as_ref(), "bus-0");
    assert_eq!(sorted[2].id.as_ref(), "bus-1");
}

#[test]
fn sort_key_defaults_to_fare() {
    assert_eq!(SortKey::default(), SortKey::Fare);
    let sorted = rank::sort_routes(&fleet(), Default::default());
    assert_eq!(sorted.first().unwrap().fare, 50.0);
}

#[test]
fn sort_key_parses_from_str() {
    assert_eq!("fare".parse(), Ok(SortKey::Fare));
    assert_eq!("time".parse(), Ok(SortKey::Time));
    assert_eq!("distance".parse(), Ok(SortKey::Distance));
    assert!("stops".parse::<SortKey>().is_err());
}

#[test]
fn reducers_work_through_references() {
    let routes = fleet();
    let refs: Vec<&Route> = routes.iter().collect();
    let best = rank::cheapest(&refs).unwrap();
    assert_eq!(best.fare(), 50.0);
}
