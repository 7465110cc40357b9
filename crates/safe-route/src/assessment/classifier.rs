use serde::{Deserialize, Serialize};

pub const GREEN_CEILING: f64 = 0.33;
pub const YELLOW_CEILING: f64 = 0.66;

/// Linear weights and bias fed into the logistic classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskModel {
    /// `[route_weight, personal_weight]`
    pub weights: [f64; 2],
    pub bias: f64,
}

impl Default for RiskModel {
    fn default() -> Self {
        Self {
            weights: [2.5, 2.0],
            bias: -3.0,
        }
    }
}

impl RiskModel {
    /// Copy of this model with any caller-supplied overrides applied.
    pub fn with_overrides(self, weights: Option<[f64; 2]>, bias: Option<f64>) -> Self {
        Self {
            weights: weights.unwrap_or(self.weights),
            bias: bias.unwrap_or(self.bias),
        }
    }

    pub fn score(&self, route_risk: f64, personal_risk: f64) -> f64 {
        self.weights[0] * route_risk + self.weights[1] * personal_risk + self.bias
    }

    pub fn is_finite(&self) -> bool {
        self.weights.iter().all(|w| w.is_finite()) && self.bias.is_finite()
    }
}

pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Traffic-light classification of an assessment probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Green,
    Yellow,
    Red,
}

impl RiskLevel {
    pub fn from_probability(probability: f64) -> Self {
        if probability < GREEN_CEILING {
            Self::Green
        } else if probability < YELLOW_CEILING {
            Self::Yellow
        } else {
            Self::Red
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}
