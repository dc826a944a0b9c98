use jatra::{catalog::Catalog, source::Source};

fn load_dir() -> Catalog {
    let data_path = format!("{}/tests/data", env!("CARGO_MANIFEST_DIR"));
    let source = Source::new(Default::default()).from_dir(data_path.into());
    Catalog::new().load_source(source).unwrap()
}

#[test]
fn load_drops_empty_route_strings() {
    let catalog = load_dir();
    // Five rows in the fixture, one with an empty route string.
    assert_eq!(catalog.routes().len(), 4);
}

#[test]
fn load_assigns_sequential_ids() {
    let catalog = load_dir();
    assert_eq!(catalog.routes()[0].id.as_ref(), "bus-0");
    assert_eq!(catalog.routes()[2].id.as_ref(), "bus-2");
    assert_eq!(catalog.route_by_id("bus-1").unwrap().name.as_ref(), "Victor Classic");
    assert!(catalog.route_by_id("bus-9").is_none());
}

#[test]
fn load_strips_labels_and_leading_dash() {
    let catalog = load_dir();
    let route = catalog.route_by_id("bus-1").unwrap();
    assert_eq!(route.start().unwrap().as_ref(), "Abdullahpur");
    assert_eq!(route.end().unwrap().as_ref(), "Sadarghat");
    assert_eq!(route.stop_count(), 7);

    let raida = catalog.route_by_id("bus-0").unwrap();
    assert_eq!(raida.stops[1].as_ref(), "Mirpur 10");
}

#[test]
fn load_derives_cost_model() {
    let catalog = load_dir();

    // 8 stops at 1.2 km and 5 min each, fare 9.6 * 2.45 rounded.
    let raida = catalog.route_by_id("bus-0").unwrap();
    assert_eq!(raida.distance_km, 9.6);
    assert_eq!(raida.fare, 24.0);
    assert_eq!(raida.duration_minutes, 40);

    // Per bus rate 2.2 with minimum 15.
    let victor = catalog.route_by_id("bus-1").unwrap();
    assert_eq!(victor.distance_km, 8.4);
    assert_eq!(victor.fare, 18.0);

    // Missing rate and minimum fall back to the defaults.
    let bihongo = catalog.route_by_id("bus-2").unwrap();
    assert_eq!(bihongo.fare, 21.0);
    assert_eq!(bihongo.duration_minutes, 35);
}

#[test]
fn load_short_route_clamps_to_minimum_fare() {
    let catalog = load_dir();
    // Two stops price at 2.4 * 2.45, well below the minimum.
    let chalti = catalog.route_by_id("bus-3").unwrap();
    assert_eq!(chalti.stop_count(), 2);
    assert_eq!(chalti.distance_km, 2.4);
    assert_eq!(chalti.fare, 10.0);
    assert_eq!(chalti.duration_minutes, 10);
}

#[test]
fn load_from_zip_matches_dir() {
    let zip_path = format!("{}/tests/data/bundle.zip", env!("CARGO_MANIFEST_DIR"));
    let source = Source::new(Default::default()).from_zip(zip_path.into());
    let catalog = Catalog::new().load_source(source).unwrap();

    let from_dir = load_dir();
    assert_eq!(catalog.routes().len(), from_dir.routes().len());
    assert_eq!(catalog.locations().len(), from_dir.locations().len());
    assert_eq!(
        catalog.route_by_id("bus-0").unwrap().fare,
        from_dir.route_by_id("bus-0").unwrap().fare
    );
}

#[test]
fn load_without_locations_file() {
    let data_path = format!("{}/tests/data/minimal", env!("CARGO_MANIFEST_DIR"));
    let source = Source::new(Default::default()).from_dir(data_path.into());
    let catalog = Catalog::new().load_source(source).unwrap();
    assert_eq!(catalog.routes().len(), 4);
    assert!(catalog.coordinate("Farmgate").is_none());
}

#[test]
fn empty_source_gives_empty_catalog() {
    let catalog = Catalog::new()
        .load_source(Source::new(Default::default()))
        .unwrap();
    assert!(catalog.routes().is_empty());
    assert!(catalog.locations().is_empty());
}

#[test]
fn missing_buses_file_is_an_error() {
    let data_path = format!("{}/tests", env!("CARGO_MANIFEST_DIR"));
    let source = Source::new(Default::default()).from_dir(data_path.into());
    assert!(Catalog::new().load_source(source).is_err());
}

#[test]
fn locations_are_sorted_and_unique() {
    let catalog = load_dir();
    let locations = catalog.locations();
    assert!(!locations.is_empty());
    for pair in locations.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn location_search_is_case_insensitive_substring() {
    let catalog = load_dir();
    let hits = catalog.search_locations("mirpur");
    let names: Vec<&str> = hits.iter().map(|name| name.as_ref()).collect();
    assert_eq!(names, ["Mirpur 1", "Mirpur 10", "Mirpur 12"]);
    assert!(catalog.search_locations("").is_empty());
    assert!(catalog.search_locations("xyz").is_empty());
}

#[test]
fn coordinate_lookup_is_exact() {
    let catalog = load_dir();
    let farmgate = catalog.coordinate("Farmgate").unwrap();
    assert!((farmgate.latitude - 23.7580).abs() < 1e-9);
    assert!(catalog.coordinate("farmgate").is_none());
}

#[test]
fn path_drops_unmapped_stops() {
    let catalog = load_dir();
    // Raida touches 8 stops, 6 of them have coordinates.
    let raida = catalog.route_by_id("bus-0").unwrap();
    let path = catalog.path(&raida.stops);
    assert_eq!(path.len(), 6);

    // Bihongo has no mapped stops at all.
    let bihongo = catalog.route_by_id("bus-2").unwrap();
    assert!(catalog.path(&bihongo.stops).is_empty());
}
