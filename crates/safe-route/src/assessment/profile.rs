use super::route::TransportMode;
use serde::Serialize;

pub const PERSONAL_RISK_BASE: f64 = 0.2;
pub const SENIOR_AGE: u32 = 60;

/// Self-reported traffic-light health code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SafeCode {
    #[default]
    Green,
    Yellow,
    Red,
}

impl SafeCode {
    /// Case-insensitive parse. Unrecognised codes are treated as absent (green).
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "yellow" => Self::Yellow,
            "red" => Self::Red,
            _ => Self::Green,
        }
    }
}

/// Traveller attributes supplied with each assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRiskProfile {
    pub age: u32,
    pub vaccinated: bool,
    pub has_preexisting: bool,
    pub safe_code: SafeCode,
    pub transportation_mode: TransportMode,
}

impl Default for UserRiskProfile {
    fn default() -> Self {
        Self {
            age: 30,
            vaccinated: true,
            has_preexisting: false,
            safe_code: SafeCode::Green,
            transportation_mode: TransportMode::Public,
        }
    }
}

impl UserRiskProfile {
    /// Additive personal risk contribution. Not a probability; may exceed 1.0.
    pub fn personal_risk(&self) -> f64 {
        let mut risk = PERSONAL_RISK_BASE;
        if !self.vaccinated {
            risk += 0.3;
        }
        if self.has_preexisting {
            risk += 0.2;
        }
        if self.age >= SENIOR_AGE {
            risk += 0.2;
        }
        if self.safe_code == SafeCode::Yellow {
            risk += 0.2;
        }
        risk
    }
}
