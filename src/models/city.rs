//! City model: lodging, food and sightseeing attributes of a stop

use serde::Serialize;

/// Geographic position of a city, used for map display only
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format as a coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Hotel offered at a stop
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Hotel {
    pub name: &'static str,
    /// Price per night per traveler
    pub nightly_rate: f64,
}

/// Local cuisine at a stop
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Cuisine {
    pub label: &'static str,
    /// Food spend per day per traveler
    pub daily_rate: f64,
}

/// A city a route passes through
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub hotel: Hotel,
    pub food: Cuisine,
    /// Main sight
    pub landmark: &'static str,
    pub coordinates: Coordinates,
}
