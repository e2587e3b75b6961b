//! Built-in routes and city reference data
//!
//! The tables are closed: four routes out of Sofia and the eleven cities they
//! pass through. They are built once on first use and never mutated, so any
//! number of estimates can read them concurrently.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::models::{City, Coordinates, Cuisine, Hotel};
use crate::{PlannerError, Result};

static DATASET: LazyLock<Dataset> = LazyLock::new(Dataset::builtin);

/// Returns the process-wide dataset.
pub fn dataset() -> &'static Dataset {
    &DATASET
}

/// A named, ordered sequence of cities to visit
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Route {
    /// Stable identifier, e.g. `bg-de`
    pub slug: &'static str,
    /// Display label
    pub label: &'static str,
    /// Compact flag form, e.g. `🇧🇬→🇩🇪`
    pub flags: &'static str,
    /// City names in travel order
    pub cities: Vec<&'static str>,
}

impl Route {
    fn matches(&self, key: &str) -> bool {
        let compact: String = key.chars().filter(|c| !c.is_whitespace()).collect();
        self.slug.eq_ignore_ascii_case(key) || self.label == key || self.flags == compact
    }

    /// City names joined the way the itinerary headline shows them
    #[must_use]
    pub fn line(&self) -> String {
        self.cities.join(" ➡️ ")
    }
}

#[derive(Debug)]
pub struct Dataset {
    routes: Vec<Route>,
    cities: HashMap<&'static str, City>,
}

impl Dataset {
    fn builtin() -> Self {
        let routes = vec![
            Route {
                slug: "bg-de",
                label: "🇩🇪 България → Германия",
                flags: "🇧🇬→🇩🇪",
                cities: vec!["София", "Белград", "Виена", "Мюнхен"],
            },
            Route {
                slug: "bg-it",
                label: "🇮🇹 България → Италия",
                flags: "🇧🇬→🇮🇹",
                cities: vec!["София", "Скопие", "Тирана", "Рим"],
            },
            Route {
                slug: "bg-fr",
                label: "🇫🇷 България → Франция",
                flags: "🇧🇬→🇫🇷",
                cities: vec!["София", "Белград", "Загреб", "Париж"],
            },
            Route {
                slug: "bg-ro",
                label: "🇷🇴 България → Румъния",
                flags: "🇧🇬→🇷🇴",
                cities: vec!["София", "Русе", "Букурещ"],
            },
        ];

        let cities = [
            city("София", ("Hotel Sofia Center", 70.0), ("Българска кухня", 20.0), "Александър Невски", (42.6977, 23.3219)),
            city("Белград", ("Belgrade Inn", 65.0), ("Сръбска скара", 22.0), "Калемегдан", (44.7866, 20.4489)),
            city("Виена", ("Vienna City Hotel", 90.0), ("Виенски шницел", 30.0), "Шьонбрун", (48.2082, 16.3738)),
            city("Мюнхен", ("Munich Central", 95.0), ("Немска кухня", 28.0), "Мариенплац", (48.1351, 11.5820)),
            city("Скопие", ("Skopje Hotel", 60.0), ("Македонска кухня", 18.0), "Каменният мост", (41.9973, 21.4280)),
            city("Тирана", ("Tirana Plaza", 75.0), ("Албанска кухня", 20.0), "Скендербег", (41.3275, 19.8187)),
            city("Рим", ("Rome Central", 110.0), ("Италианска кухня", 35.0), "Колизеум", (41.9028, 12.4964)),
            city("Загреб", ("Zagreb Inn", 80.0), ("Хърватска кухня", 25.0), "Горни град", (45.8150, 15.9819)),
            city("Париж", ("Paris Boutique", 130.0), ("Френска кухня", 40.0), "Айфеловата кула", (48.8566, 2.3522)),
            city("Русе", ("Hotel Riga", 55.0), ("Българска кухня", 18.0), "Доходното здание", (43.8356, 25.9657)),
            city("Букурещ", ("Bucharest Center", 70.0), ("Румънска кухня", 22.0), "Парламентът", (44.4268, 26.1025)),
        ]
        .into_iter()
        .map(|c| (c.name, c))
        .collect();

        Self { routes, cities }
    }

    /// All routes in display order
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// All cities, sorted by name
    #[must_use]
    pub fn cities(&self) -> Vec<&City> {
        let mut cities: Vec<&City> = self.cities.values().collect();
        cities.sort_by_key(|c| c.name);
        cities
    }

    /// Look up a route by slug, display label or flag shorthand
    pub fn route(&self, key: &str) -> Result<&Route> {
        let key = key.trim();
        self.routes
            .iter()
            .find(|route| route.matches(key))
            .ok_or_else(|| PlannerError::key_not_found("route", key))
    }

    pub fn city(&self, name: &str) -> Result<&City> {
        self.cities
            .get(name.trim())
            .ok_or_else(|| PlannerError::key_not_found("city", name))
    }

    pub fn coordinates(&self, name: &str) -> Result<Coordinates> {
        self.city(name).map(|c| c.coordinates)
    }

    /// Resolve every stop of `route` in travel order
    pub fn route_cities(&self, route: &Route) -> Result<Vec<&City>> {
        route.cities.iter().map(|name| self.city(name)).collect()
    }
}

fn city(
    name: &'static str,
    hotel: (&'static str, f64),
    food: (&'static str, f64),
    landmark: &'static str,
    (latitude, longitude): (f64, f64),
) -> City {
    City {
        name,
        hotel: Hotel {
            name: hotel.0,
            nightly_rate: hotel.1,
        },
        food: Cuisine {
            label: food.0,
            daily_rate: food.1,
        },
        landmark,
        coordinates: Coordinates::new(latitude, longitude),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_table_sizes() {
        assert_eq!(dataset().routes().len(), 4);
        assert_eq!(dataset().cities().len(), 11);
    }

    #[test]
    fn test_every_route_resolves() {
        for route in dataset().routes() {
            let cities = dataset().route_cities(route).unwrap();
            assert_eq!(cities.len(), route.cities.len());
            assert_eq!(cities[0].name, "София");
        }
    }

    #[rstest]
    #[case("bg-de")]
    #[case("BG-DE")]
    #[case("🇩🇪 България → Германия")]
    #[case("🇧🇬→🇩🇪")]
    #[case("🇧🇬 → 🇩🇪")]
    fn test_route_lookup_keys(#[case] key: &str) {
        let route = dataset().route(key).unwrap();
        assert_eq!(route.cities, vec!["София", "Белград", "Виена", "Мюнхен"]);
    }

    #[test]
    fn test_route_lookup_miss() {
        let err = dataset().route("bg-gr").unwrap_err();
        assert!(matches!(err, PlannerError::KeyNotFound { kind: "route", .. }));
    }

    #[test]
    fn test_city_lookup() {
        let vienna = dataset().city("Виена").unwrap();
        assert_eq!(vienna.hotel.name, "Vienna City Hotel");
        assert_eq!(vienna.hotel.nightly_rate, 90.0);
        assert_eq!(vienna.food.daily_rate, 30.0);
        assert_eq!(vienna.landmark, "Шьонбрун");

        let err = dataset().city("Атина").unwrap_err();
        assert!(matches!(err, PlannerError::KeyNotFound { kind: "city", .. }));
    }

    #[test]
    fn test_coordinates_lookup() {
        let paris = dataset().coordinates("Париж").unwrap();
        assert_eq!(paris, Coordinates::new(48.8566, 2.3522));
        assert!(dataset().coordinates("Лондон").is_err());
    }

    #[test]
    fn test_route_line() {
        let route = dataset().route("bg-ro").unwrap();
        assert_eq!(route.line(), "София ➡️ Русе ➡️ Букурещ");
    }
}
