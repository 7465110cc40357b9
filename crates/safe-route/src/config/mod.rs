use crate::assessment::{RiskModel, DEFAULT_ORIGIN};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub engine: EngineConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            engine: EngineConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Deployment graph and classifier defaults.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Graph document to load; the built-in Hong Kong network when unset.
    pub graph_path: Option<PathBuf>,
    pub model: RiskModel,
    pub default_origin: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            graph_path: None,
            model: RiskModel::default(),
            default_origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

impl EngineConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let graph_path = non_blank_var("SAFE_ROUTE_GRAPH").map(PathBuf::from);

        let weights = match non_blank_var("SAFE_ROUTE_WEIGHTS") {
            Some(raw) => parse_weights(&raw)?,
            None => defaults.model.weights,
        };

        let bias = match non_blank_var("SAFE_ROUTE_BIAS") {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or(ConfigError::InvalidBias)?,
            None => defaults.model.bias,
        };

        let default_origin =
            non_blank_var("SAFE_ROUTE_DEFAULT_ORIGIN").unwrap_or(defaults.default_origin);

        Ok(Self {
            graph_path,
            model: RiskModel { weights, bias },
            default_origin,
        })
    }
}

/// Blank values count as unset.
fn non_blank_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_weights(raw: &str) -> Result<[f64; 2], ConfigError> {
    let parsed: Vec<f64> = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| ConfigError::InvalidWeights)?;

    match parsed.as_slice() {
        [route, personal] if route.is_finite() && personal.is_finite() => Ok([*route, *personal]),
        _ => Err(ConfigError::InvalidWeights),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidWeights,
    InvalidBias,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidWeights => write!(
                f,
                "SAFE_ROUTE_WEIGHTS must be two comma-separated finite numbers"
            ),
            ConfigError::InvalidBias => write!(f, "SAFE_ROUTE_BIAS must be a finite number"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort | ConfigError::InvalidWeights | ConfigError::InvalidBias => {
                None
            }
        }
    }
}
