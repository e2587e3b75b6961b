//! Trip request and the estimate derived from it

use serde::Serialize;

use crate::models::{PricingTier, TransportMode};
use crate::{PlannerError, Result};

/// Selectable trip length in days
pub const DAYS_RANGE: std::ops::RangeInclusive<u32> = 1..=14;
/// Selectable party size
pub const TRAVELERS_RANGE: std::ops::RangeInclusive<u32> = 1..=6;

/// One planning action: the user's selections
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRequest {
    /// Route slug, label or flag shorthand
    pub route: String,
    pub transport: TransportMode,
    pub days: u32,
    pub travelers: u32,
    pub tier: PricingTier,
    /// Money available for the whole party
    pub budget: f64,
}

impl TripRequest {
    /// Build a request from free-form selector strings.
    ///
    /// Fails with [`PlannerError::InvalidInput`] for unknown selectors or
    /// values outside the selectable ranges. The route is only resolved
    /// when the trip is planned.
    pub fn parse(
        route: &str,
        transport: &str,
        days: u32,
        travelers: u32,
        tier: &str,
        budget: f64,
    ) -> Result<Self> {
        let request = Self {
            route: route.trim().to_string(),
            transport: transport.parse()?,
            days,
            travelers,
            tier: tier.parse()?,
            budget,
        };
        request.validate()?;
        Ok(request)
    }

    /// Check the numeric selections against the selectable ranges
    pub fn validate(&self) -> Result<()> {
        if self.route.is_empty() {
            return Err(PlannerError::invalid_input("Route cannot be empty"));
        }
        if !DAYS_RANGE.contains(&self.days) {
            return Err(PlannerError::invalid_input(format!(
                "Days must be between {} and {}, got {}",
                DAYS_RANGE.start(),
                DAYS_RANGE.end(),
                self.days
            )));
        }
        if !TRAVELERS_RANGE.contains(&self.travelers) {
            return Err(PlannerError::invalid_input(format!(
                "Travelers must be between {} and {}, got {}",
                TRAVELERS_RANGE.start(),
                TRAVELERS_RANGE.end(),
                self.travelers
            )));
        }
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(PlannerError::invalid_input(format!(
                "Budget must be a positive amount, got {}",
                self.budget
            )));
        }
        Ok(())
    }
}

/// Itemized cost of a trip compared against the budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TripEstimate {
    /// Placeholder distance covered along the route
    pub total_distance: f64,
    pub transport_cost: f64,
    /// Food for the whole party
    pub food_cost: f64,
    /// Lodging for the whole party
    pub hotel_cost: f64,
    /// Grand total after the tier multiplier
    pub total_cost: f64,
    pub within_budget: bool,
    /// `total_cost / budget` clamped to `[0, 1]` for progress display
    pub budget_ratio: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_valid_request() {
        let request = TripRequest::parse(" bg-de ", "car", 5, 2, "standard", 3000.0).unwrap();
        assert_eq!(request.route, "bg-de");
        assert_eq!(request.transport, TransportMode::Car);
        assert_eq!(request.tier, PricingTier::Standard);
    }

    #[rstest]
    #[case("bg-de", "car", 0, 2, "standard", 3000.0)]
    #[case("bg-de", "car", 15, 2, "standard", 3000.0)]
    #[case("bg-de", "car", 5, 0, "standard", 3000.0)]
    #[case("bg-de", "car", 5, 7, "standard", 3000.0)]
    #[case("bg-de", "boat", 5, 2, "standard", 3000.0)]
    #[case("bg-de", "car", 5, 2, "premium", 3000.0)]
    #[case("bg-de", "car", 5, 2, "standard", 0.0)]
    #[case("bg-de", "car", 5, 2, "standard", f64::NAN)]
    #[case("  ", "car", 5, 2, "standard", 3000.0)]
    fn test_parse_rejects_invalid_input(
        #[case] route: &str,
        #[case] transport: &str,
        #[case] days: u32,
        #[case] travelers: u32,
        #[case] tier: &str,
        #[case] budget: f64,
    ) {
        let err = TripRequest::parse(route, transport, days, travelers, tier, budget).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput { .. }), "{err}");
    }
}
