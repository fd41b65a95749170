use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded CSV data for all monitored coastal locations.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/locations.csv");

/// A monitored location (city) shown on the dashboard map and selectors.
///
/// The location name doubles as the generator seed input and the key of the
/// persisted alert configuration, so it must stay stable across releases.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Location {
    /// Parse a CSV string of location data into a vector of Locations.
    ///
    /// Expected CSV columns (with headers): NAME, REGION, LATITUDE, LONGITUDE
    pub fn parse_location_csv(csv_object: &str) -> Result<Vec<Location>, csv::Error> {
        let mut location_list: Vec<Location> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let name = record.get(0).unwrap_or("").trim();
            if name.is_empty() {
                continue;
            }
            let region = record.get(1).unwrap_or("").trim().to_string();
            let latitude = record
                .get(2)
                .unwrap_or("0.0")
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0);
            let longitude = record
                .get(3)
                .unwrap_or("0.0")
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0);
            location_list.push(Location {
                name: name.to_string(),
                region,
                latitude,
                longitude,
            });
        }
        Ok(location_list)
    }

    /// All locations from the embedded fixture.
    pub fn get_location_vector() -> Vec<Location> {
        match Location::parse_location_csv(CSV_OBJECT) {
            Ok(locations) => locations,
            Err(e) => {
                log::warn!("[AQS] location: embedded fixture failed to parse: {}", e);
                Vec::new()
            }
        }
    }

    /// Look up a location by name, ignoring ASCII case.
    pub fn find(name: &str) -> Option<Location> {
        Location::get_location_vector()
            .into_iter()
            .find(|l| l.name.eq_ignore_ascii_case(name.trim()))
    }
}

/// Latitude/longitude bounding box used to project locations onto the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoBounds {
    /// Smallest box enclosing every location, grown by `padding` degrees.
    pub fn enclosing(locations: &[Location], padding: f64) -> Option<GeoBounds> {
        let first = locations.first()?;
        let mut bounds = GeoBounds {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lon: first.longitude,
            max_lon: first.longitude,
        };
        for l in &locations[1..] {
            bounds.min_lat = bounds.min_lat.min(l.latitude);
            bounds.max_lat = bounds.max_lat.max(l.latitude);
            bounds.min_lon = bounds.min_lon.min(l.longitude);
            bounds.max_lon = bounds.max_lon.max(l.longitude);
        }
        bounds.min_lat -= padding;
        bounds.max_lat += padding;
        bounds.min_lon -= padding;
        bounds.max_lon += padding;
        Some(bounds)
    }

    /// Equirectangular projection into a `width` x `height` canvas.
    /// North is up, so latitude is inverted on the y axis.
    pub fn project(&self, latitude: f64, longitude: f64, width: f64, height: f64) -> (f64, f64) {
        let lon_span = (self.max_lon - self.min_lon).max(f64::EPSILON);
        let lat_span = (self.max_lat - self.min_lat).max(f64::EPSILON);
        let x = (longitude - self.min_lon) / lon_span * width;
        let y = (self.max_lat - latitude) / lat_span * height;
        (x, y)
    }
}
