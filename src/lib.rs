//! Trip planner - cost estimates for predefined road trips out of Sofia
//!
//! This library provides the route and city reference data, the trip cost
//! model, and the JSON API and text report built on top of it.

pub mod api;
pub mod calculator;
pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod models;
pub mod plan;
pub mod report;
pub mod web;

// Re-export core types for public API
pub use calculator::{DISTANCE_BETWEEN_CITIES, calculate, estimate};
pub use config::PlannerConfig;
pub use dataset::{Dataset, Route, dataset};
pub use error::PlannerError;
pub use models::{City, Coordinates, PricingTier, TransportMode, TripEstimate, TripRequest};
pub use plan::{TripPlan, plan_trip};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PlannerError>;
