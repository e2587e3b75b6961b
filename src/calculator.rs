//! Trip cost model
//!
//! Costs are a fixed formula over the dataset:
//!
//! ```text
//! distance  = 300 × (stops − 1)
//! transport = distance × rate(mode)
//! food      = Σ food_rate(city)  × days          (per traveler)
//! hotel     = Σ hotel_rate(city) × days          (per traveler)
//! total     = (transport + (food + hotel) × travelers) × tier
//! ```
//!
//! Lodging is charged for every stop for the full trip length. Every function
//! here is pure: the same inputs always give bit-identical output.

use tracing::{debug, instrument};

use crate::dataset::Dataset;
use crate::models::{City, PricingTier, TransportMode, TripEstimate, TripRequest};
use crate::{PlannerError, Result};

/// Placeholder distance between two consecutive stops
pub const DISTANCE_BETWEEN_CITIES: f64 = 300.0;

/// Distance covered by a route with `stops` cities
#[must_use]
pub fn route_distance(stops: usize) -> f64 {
    DISTANCE_BETWEEN_CITIES * stops.saturating_sub(1) as f64
}

/// Itemize the cost of visiting `cities` in order.
///
/// Fails with [`PlannerError::InvalidInput`] when `days` or `travelers` is
/// zero. A non-positive budget reports a full progress ratio.
#[instrument(level = "debug", skip(cities), fields(stops = cities.len()))]
pub fn calculate(
    cities: &[&City],
    transport: TransportMode,
    days: u32,
    travelers: u32,
    tier: PricingTier,
    budget: f64,
) -> Result<TripEstimate> {
    if days < 1 {
        return Err(PlannerError::invalid_input("Days must be at least 1"));
    }
    if travelers < 1 {
        return Err(PlannerError::invalid_input("Travelers must be at least 1"));
    }

    let total_distance = route_distance(cities.len());
    let transport_cost = transport.travel_cost(total_distance);

    let days = f64::from(days);
    let mut food_per_person = 0.0;
    let mut hotel_per_person = 0.0;
    for city in cities {
        food_per_person += city.food.daily_rate * days;
        hotel_per_person += city.hotel.nightly_rate * days;
    }

    let travelers = f64::from(travelers);
    let total_cost =
        (transport_cost + (food_per_person + hotel_per_person) * travelers) * tier.multiplier();

    let budget_ratio = if budget > 0.0 {
        (total_cost / budget).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let estimate = TripEstimate {
        total_distance,
        transport_cost,
        food_cost: food_per_person * travelers,
        hotel_cost: hotel_per_person * travelers,
        total_cost,
        within_budget: total_cost <= budget,
        budget_ratio,
    };
    debug!(total = estimate.total_cost, within_budget = estimate.within_budget, "Trip estimated");
    Ok(estimate)
}

/// Estimate a request against `dataset`.
///
/// An unknown route is the user's mistake and reported as invalid input;
/// a route naming a city the dataset lacks is reported as a lookup miss.
pub fn estimate(dataset: &Dataset, request: &TripRequest) -> Result<TripEstimate> {
    let route = dataset
        .route(&request.route)
        .map_err(|_| PlannerError::invalid_input(format!("Unknown route '{}'", request.route)))?;
    let cities = dataset.route_cities(route)?;
    calculate(
        &cities,
        request.transport,
        request.days,
        request.travelers,
        request.tier,
        request.budget,
    )
}
