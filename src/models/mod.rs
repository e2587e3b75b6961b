//! Data models for the trip planner
//!
//! This module contains the core domain models organized by concern:
//! - City: lodging, food and sightseeing attributes of a stop
//! - Transport: travel modes and their per-kilometer rates
//! - Tier: spending style multipliers
//! - Trip: the user's request and the computed estimate

pub mod city;
pub mod tier;
pub mod transport;
pub mod trip;

// Re-export all public types for convenient access
pub use city::{City, Coordinates, Cuisine, Hotel};
pub use tier::PricingTier;
pub use transport::TransportMode;
pub use trip::{DAYS_RANGE, TRAVELERS_RANGE, TripEstimate, TripRequest};
