use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::assessment::{
    assessment_router, LocationGraph, RiskEngine, RiskModel, SafeCode, TransportMode,
    UserRiskProfile,
};

/// `A - B - C` with only the middle stop carrying risk.
pub(super) fn three_stop_graph() -> LocationGraph {
    LocationGraph::new()
        .with_neighbors("A", ["B"])
        .with_neighbors("B", ["A", "C"])
        .with_neighbors("C", ["B"])
        .with_risk("B", 0.5)
}

pub(super) fn three_stop_engine() -> RiskEngine {
    RiskEngine::new(three_stop_graph(), RiskModel::default())
}

pub(super) fn healthy_commuter() -> UserRiskProfile {
    UserRiskProfile {
        age: 30,
        vaccinated: true,
        has_preexisting: false,
        safe_code: SafeCode::Green,
        transportation_mode: TransportMode::Public,
    }
}

pub(super) fn router_for(engine: RiskEngine) -> axum::Router {
    assessment_router(Arc::new(engine))
}

pub(super) fn json_post(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("body serializes")))
        .expect("request builds")
}

pub(super) fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
