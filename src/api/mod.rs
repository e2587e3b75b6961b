use axum::{
    Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    PlannerError,
    dataset::{Route, dataset},
    models::{City, Coordinates, PricingTier, TransportMode, TripRequest},
    plan::{TripPlan, plan_trip},
};

#[derive(Serialize, Deserialize)]
pub struct ApiRoute {
    pub slug: String,
    pub label: String,
    pub flags: String,
    pub cities: Vec<String>,
}

impl From<&Route> for ApiRoute {
    fn from(route: &Route) -> Self {
        Self {
            slug: route.slug.to_string(),
            label: route.label.to_string(),
            flags: route.flags.to_string(),
            cities: route.cities.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiTransport {
    pub id: String,
    pub name: String,
    pub rate_per_km: f64,
}

#[derive(Serialize, Deserialize)]
pub struct ApiTier {
    pub id: String,
    pub label: String,
    pub multiplier: f64,
}

/// Selections as the presentation layer sends them
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanRequest {
    pub route: String,
    pub transport: String,
    pub days: u32,
    pub travelers: u32,
    #[serde(default = "default_tier")]
    pub tier: String,
    pub budget: f64,
}

fn default_tier() -> String {
    PricingTier::default().id().to_string()
}

#[derive(Serialize)]
pub struct PlanResponse {
    #[serde(flatten)]
    pub plan: TripPlan,
    pub map_points: Vec<Coordinates>,
}

impl From<TripPlan> for PlanResponse {
    fn from(plan: TripPlan) -> Self {
        Self {
            map_points: plan.map_points(),
            plan,
        }
    }
}

impl IntoResponse for PlannerError {
    fn into_response(self) -> Response {
        let status = match &self {
            PlannerError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            PlannerError::KeyNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        let body = Json(json!({ "error": self.to_string(), "message": self.user_message() }));
        (status, body).into_response()
    }
}

pub fn router() -> Router {
    Router::new()
        .route("/routes", get(get_routes))
        .route("/cities/{name}", get(get_city))
        .route("/transports", get(get_transports))
        .route("/tiers", get(get_tiers))
        .route("/plan", post(create_plan))
}

async fn get_routes() -> Json<Vec<ApiRoute>> {
    Json(dataset().routes().iter().map(ApiRoute::from).collect())
}

async fn get_city(Path(name): Path<String>) -> Result<Json<City>, PlannerError> {
    let city = dataset().city(&name)?;
    Ok(Json(city.clone()))
}

async fn get_transports() -> Json<Vec<ApiTransport>> {
    Json(
        TransportMode::ALL
            .into_iter()
            .map(|mode| ApiTransport {
                id: mode.id().to_string(),
                name: mode.name().to_string(),
                rate_per_km: mode.rate_per_km(),
            })
            .collect(),
    )
}

async fn get_tiers() -> Json<Vec<ApiTier>> {
    Json(
        PricingTier::ALL
            .into_iter()
            .map(|tier| ApiTier {
                id: tier.id().to_string(),
                label: tier.label().to_string(),
                multiplier: tier.multiplier(),
            })
            .collect(),
    )
}

async fn create_plan(Json(payload): Json<PlanRequest>) -> Result<Json<PlanResponse>, PlannerError> {
    tracing::debug!(?payload, "Plan requested");
    let request = TripRequest::parse(
        &payload.route,
        &payload.transport,
        payload.days,
        payload.travelers,
        &payload.tier,
        payload.budget,
    )?;
    let plan = plan_trip(dataset(), &request)?;
    Ok(Json(plan.into()))
}
