use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::info;

use super::request::{AssessmentRequest, AssessmentResponse};
use super::RiskEngine;
use crate::error::AppError;

/// Router exposing journey assessment and location lookups.
pub fn assessment_router(engine: Arc<RiskEngine>) -> Router {
    Router::new()
        .route("/api/v1/routes/assess", post(assess_handler))
        .route("/api/v1/locations", get(locations_handler))
        .route(
            "/api/v1/locations/:origin/destinations",
            get(destinations_handler),
        )
        .with_state(engine)
}

#[derive(Debug, Serialize)]
pub struct LocationsView {
    pub locations: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationsView {
    pub origin: String,
    pub known_origin: bool,
    pub destinations: Vec<String>,
}

pub(crate) async fn assess_handler(
    State(engine): State<Arc<RiskEngine>>,
    Json(request): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let request = request.validate()?;
    let assessment = request.assess(&engine);

    info!(
        origin = %request.origin,
        destination = %request.destination,
        probability = assessment.probability,
        risk_level = assessment.risk_level.label(),
        hops = assessment.path.len(),
        "journey assessed"
    );

    Ok(Json(AssessmentResponse::from_assessment(
        assessment,
        request.include_breakdown,
    )))
}

pub(crate) async fn locations_handler(State(engine): State<Arc<RiskEngine>>) -> Json<LocationsView> {
    Json(LocationsView {
        locations: engine.graph().locations().map(str::to_string).collect(),
    })
}

pub(crate) async fn destinations_handler(
    State(engine): State<Arc<RiskEngine>>,
    Path(origin): Path<String>,
) -> Json<DestinationsView> {
    let graph = engine.graph();
    Json(DestinationsView {
        known_origin: graph.contains(&origin),
        destinations: graph
            .destination_options(&origin)
            .into_iter()
            .map(str::to_string)
            .collect(),
        origin,
    })
}
