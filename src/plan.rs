//! Complete result of a planning action
//!
//! Bundles the cost estimate with everything a presentation layer shows next
//! to it: the stops in order with their hotel, food and sight, and the points
//! to put on a map.

use serde::Serialize;
use tracing::{info, instrument};

use crate::calculator;
use crate::dataset::Dataset;
use crate::models::{City, Coordinates, PricingTier, TransportMode, TripEstimate, TripRequest};
use crate::{PlannerError, Result};

#[derive(Debug, Clone, Serialize)]
pub struct TripPlan {
    pub route_slug: &'static str,
    pub route_label: &'static str,
    /// Stop names joined by arrows
    pub route_line: String,
    pub transport: TransportMode,
    pub tier: PricingTier,
    pub days: u32,
    pub travelers: u32,
    pub budget: f64,
    pub estimate: TripEstimate,
    /// Stops in travel order
    pub itinerary: Vec<City>,
}

impl TripPlan {
    /// Map points in travel order
    #[must_use]
    pub fn map_points(&self) -> Vec<Coordinates> {
        self.itinerary.iter().map(|c| c.coordinates).collect()
    }
}

/// Validate `request`, estimate it and collect the itinerary.
#[instrument(skip(dataset), fields(route = %request.route))]
pub fn plan_trip(dataset: &Dataset, request: &TripRequest) -> Result<TripPlan> {
    request.validate()?;

    let route = dataset
        .route(&request.route)
        .map_err(|_| PlannerError::invalid_input(format!("Unknown route '{}'", request.route)))?;
    let cities = dataset.route_cities(route)?;
    let estimate = calculator::calculate(
        &cities,
        request.transport,
        request.days,
        request.travelers,
        request.tier,
        request.budget,
    )?;
    let itinerary = cities.into_iter().cloned().collect();

    info!(
        route = route.slug,
        total = estimate.total_cost,
        within_budget = estimate.within_budget,
        "Trip planned"
    );

    Ok(TripPlan {
        route_slug: route.slug,
        route_label: route.label,
        route_line: route.line(),
        transport: request.transport,
        tier: request.tier,
        days: request.days,
        travelers: request.travelers,
        budget: request.budget,
        estimate,
        itinerary,
    })
}
