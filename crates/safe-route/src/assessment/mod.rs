//! Route risk assessment: location graph, shortest-path resolution, route and
//! personal risk scoring, and the logistic classifier that turns both into a
//! traffic-light risk level.
//!
//! The engine is immutable once built and every assessment is a pure function
//! of its inputs, so one instance can be shared across request handlers.

pub mod catalog;
pub mod classifier;
pub mod graph;
pub mod loader;
pub mod path;
pub mod profile;
pub mod request;
pub mod route;
pub mod router;

#[cfg(test)]
mod tests;

pub use catalog::DEFAULT_ORIGIN;
pub use classifier::{sigmoid, RiskLevel, RiskModel};
pub use graph::LocationGraph;
pub use loader::{GraphLoadError, GraphLoader};
pub use path::shortest_path;
pub use profile::{SafeCode, UserRiskProfile};
pub use request::{AssessmentRequest, AssessmentResponse, UserInfo, ValidationError};
pub use route::{route_risk, RouteRisk, TransportMode, BASELINE_ROUTE_RISK};
pub use router::assessment_router;

use crate::config::EngineConfig;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Probability reported when a red safe-code short-circuits the assessment.
pub const RED_CODE_PROBABILITY: f64 = 0.99;

/// Stateless assessor combining a location graph with a risk model.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    graph: LocationGraph,
    model: RiskModel,
}

impl RiskEngine {
    pub fn new(graph: LocationGraph, model: RiskModel) -> Self {
        Self { graph, model }
    }

    /// Build the engine for a deployment, loading its graph document if one is configured.
    pub fn from_config(config: &EngineConfig) -> Result<Self, GraphLoadError> {
        let graph = match &config.graph_path {
            Some(path) => GraphLoader::from_path(path)?,
            None => {
                info!("using built-in Hong Kong location graph");
                LocationGraph::hong_kong()
            }
        };
        Ok(Self::new(graph, config.model))
    }

    pub fn graph(&self) -> &LocationGraph {
        &self.graph
    }

    pub fn model(&self) -> RiskModel {
        self.model
    }

    /// Assess a journey with the engine's configured model.
    pub fn assess(&self, origin: &str, destination: &str, user: &UserRiskProfile) -> Assessment {
        self.assess_with(origin, destination, user, self.model)
    }

    /// Assess a journey with an explicit model, e.g. one carrying per-request overrides.
    pub fn assess_with(
        &self,
        origin: &str,
        destination: &str,
        user: &UserRiskProfile,
        model: RiskModel,
    ) -> Assessment {
        if user.safe_code == SafeCode::Red {
            debug!(origin, destination, "red safe code overrides route assessment");
            return Assessment {
                probability: RED_CODE_PROBABILITY,
                risk_level: RiskLevel::Red,
                path: Vec::new(),
                breakdown: AssessmentBreakdown::red_code_override(),
            };
        }

        let route = route_risk(&self.graph, origin, destination, &user.transportation_mode);
        if route.path.is_empty() {
            warn!(origin, destination, "no route between locations, using baseline risk");
        }

        let personal_risk = user.personal_risk();
        let score = model.score(route.risk, personal_risk);
        let probability = sigmoid(score);
        let risk_level = RiskLevel::from_probability(probability);

        debug!(
            origin,
            destination,
            route_risk = route.risk,
            personal_risk,
            score,
            probability,
            risk_level = risk_level.label(),
            "route assessed"
        );

        Assessment {
            probability,
            risk_level,
            path: route.path,
            breakdown: AssessmentBreakdown {
                route_risk: Some(route.risk),
                transport_multiplier: Some(route.multiplier),
                personal_risk: Some(personal_risk),
                score: Some(score),
                red_code_override: false,
            },
        }
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new(LocationGraph::hong_kong(), RiskModel::default())
    }
}

/// Outcome of a single journey assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub probability: f64,
    pub risk_level: RiskLevel,
    pub path: Vec<String>,
    pub breakdown: AssessmentBreakdown,
}

/// Intermediate values behind an assessment, kept for audits.
///
/// Every numeric field is `None` when the red safe-code override fired.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentBreakdown {
    pub route_risk: Option<f64>,
    pub transport_multiplier: Option<f64>,
    pub personal_risk: Option<f64>,
    pub score: Option<f64>,
    pub red_code_override: bool,
}

impl AssessmentBreakdown {
    fn red_code_override() -> Self {
        Self {
            route_risk: None,
            transport_multiplier: None,
            personal_risk: None,
            score: None,
            red_code_override: true,
        }
    }
}
