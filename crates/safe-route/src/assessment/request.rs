use super::classifier::{RiskLevel, RiskModel};
use super::profile::{SafeCode, UserRiskProfile};
use super::route::TransportMode;
use super::{Assessment, AssessmentBreakdown, RiskEngine};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Journey assessment request accepted at the service boundary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default, rename = "userInfo", alias = "user_info")]
    pub user_info: UserInfo,
    #[serde(default)]
    pub weights: Option<[f64; 2]>,
    #[serde(default)]
    pub bias: Option<f64>,
    #[serde(default, alias = "includeBreakdown")]
    pub include_breakdown: bool,
}

/// Traveller attributes as submitted. Absent fields fall back to the
/// planner's default traveller and contribute no additional risk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub vaccinated: Option<bool>,
    #[serde(default)]
    pub has_preexisting: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_optional_safe_code")]
    pub safe_code: Option<SafeCode>,
    #[serde(default, deserialize_with = "deserialize_optional_mode")]
    pub transportation_mode: Option<TransportMode>,
}

impl UserInfo {
    pub fn into_profile(self) -> UserRiskProfile {
        let defaults = UserRiskProfile::default();
        UserRiskProfile {
            age: self.age.unwrap_or(defaults.age),
            vaccinated: self.vaccinated.unwrap_or(defaults.vaccinated),
            has_preexisting: self.has_preexisting.unwrap_or(defaults.has_preexisting),
            safe_code: self.safe_code.unwrap_or(defaults.safe_code),
            transportation_mode: self
                .transportation_mode
                .unwrap_or(defaults.transportation_mode),
        }
    }
}

fn deserialize_optional_safe_code<'de, D>(deserializer: D) -> Result<Option<SafeCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|value| SafeCode::from_label(&value)))
}

fn deserialize_optional_mode<'de, D>(deserializer: D) -> Result<Option<TransportMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|value| TransportMode::from_label(&value)))
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingOrigin,
    MissingDestination,
    NonFiniteModel,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingOrigin => write!(f, "origin is required"),
            ValidationError::MissingDestination => write!(f, "destination is required"),
            ValidationError::NonFiniteModel => {
                write!(f, "weights and bias must be finite numbers")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Request that passed boundary validation.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub origin: String,
    pub destination: String,
    pub profile: UserRiskProfile,
    pub weights: Option<[f64; 2]>,
    pub bias: Option<f64>,
    pub include_breakdown: bool,
}

impl AssessmentRequest {
    pub fn validate(self) -> Result<ValidatedRequest, ValidationError> {
        let origin = self.origin.trim().to_string();
        if origin.is_empty() {
            return Err(ValidationError::MissingOrigin);
        }
        let destination = self.destination.trim().to_string();
        if destination.is_empty() {
            return Err(ValidationError::MissingDestination);
        }

        let weights_finite = self
            .weights
            .map_or(true, |weights| weights.iter().all(|w| w.is_finite()));
        let bias_finite = self.bias.map_or(true, f64::is_finite);
        if !weights_finite || !bias_finite {
            return Err(ValidationError::NonFiniteModel);
        }

        Ok(ValidatedRequest {
            origin,
            destination,
            profile: self.user_info.into_profile(),
            weights: self.weights,
            bias: self.bias,
            include_breakdown: self.include_breakdown,
        })
    }
}

impl ValidatedRequest {
    pub fn model(&self, base: RiskModel) -> RiskModel {
        base.with_overrides(self.weights, self.bias)
    }

    pub fn assess(&self, engine: &RiskEngine) -> Assessment {
        engine.assess_with(
            &self.origin,
            &self.destination,
            &self.profile,
            self.model(engine.model()),
        )
    }
}

/// Wire shape of an assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub probability: f64,
    pub risk_level: RiskLevel,
    pub path: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<AssessmentBreakdown>,
}

impl AssessmentResponse {
    pub fn from_assessment(assessment: Assessment, include_breakdown: bool) -> Self {
        Self {
            probability: assessment.probability,
            risk_level: assessment.risk_level,
            path: assessment.path,
            breakdown: include_breakdown.then_some(assessment.breakdown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_user_fields_take_planner_defaults() {
        let request: AssessmentRequest = serde_json::from_str(
            r#"{ "origin": "A", "destination": "C", "userInfo": { "age": 65 } }"#,
        )
        .expect("request parses");

        let validated = request.validate().expect("request validates");
        assert_eq!(validated.profile.age, 65);
        assert!(validated.profile.vaccinated);
        assert!(!validated.profile.has_preexisting);
        assert_eq!(validated.profile.safe_code, SafeCode::Green);
        assert_eq!(validated.profile.transportation_mode, TransportMode::Public);
    }

    #[test]
    fn codes_and_modes_parse_leniently() {
        let request: AssessmentRequest = serde_json::from_str(
            r#"{
                "origin": "A",
                "destination": "C",
                "userInfo": { "safe_code": "YELLOW", "transportation_mode": "Hovercraft" }
            }"#,
        )
        .expect("request parses");

        let profile = request.validate().expect("validates").profile;
        assert_eq!(profile.safe_code, SafeCode::Yellow);
        assert_eq!(profile.transportation_mode.multiplier(), 1.0);
    }

    #[test]
    fn blank_endpoints_fail_validation() {
        let request = AssessmentRequest {
            origin: "  ".to_string(),
            destination: "C".to_string(),
            ..AssessmentRequest::default()
        };
        assert_eq!(
            request.validate().expect_err("blank origin"),
            ValidationError::MissingOrigin
        );

        let request = AssessmentRequest {
            origin: "A".to_string(),
            ..AssessmentRequest::default()
        };
        assert_eq!(
            request.validate().expect_err("missing destination"),
            ValidationError::MissingDestination
        );
    }

    #[test]
    fn response_uses_camel_case_and_hides_breakdown_by_default() {
        let engine = RiskEngine::default();
        let assessment = engine.assess("CUHK", "CUHK", &UserRiskProfile::default());
        let response = AssessmentResponse::from_assessment(assessment, false);
        let json = serde_json::to_value(&response).expect("serializes");

        assert_eq!(json["riskLevel"], "green");
        assert_eq!(json["path"], serde_json::json!(["CUHK"]));
        assert!(json.get("breakdown").is_none());
    }

    #[test]
    fn breakdown_keys_share_the_response_casing() {
        let request: AssessmentRequest = serde_json::from_str(
            r#"{ "origin": "CUHK", "destination": "HKU", "includeBreakdown": true }"#,
        )
        .expect("request parses");
        let validated = request.validate().expect("validates");
        assert!(validated.include_breakdown);

        let assessment = validated.assess(&RiskEngine::default());
        let response = AssessmentResponse::from_assessment(assessment, validated.include_breakdown);
        let json = serde_json::to_value(&response).expect("serializes");

        let breakdown = &json["breakdown"];
        assert!(breakdown["routeRisk"].is_number());
        assert!(breakdown["transportMultiplier"].is_number());
        assert!(breakdown["personalRisk"].is_number());
        assert_eq!(breakdown["redCodeOverride"], false);
        assert!(breakdown.get("route_risk").is_none());
    }
}
