pub struct Config {
    pub buses_path: String,
    pub locations_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buses_path: "buses.csv".into(),
            locations_path: "locations.csv".into(),
        }
    }
}
