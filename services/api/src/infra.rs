use metrics_exporter_prometheus::PrometheusHandle;
use safe_route::assessment::{RiskEngine, SafeCode, TransportMode};
use safe_route::config::{AppConfig, EngineConfig};
use safe_route::error::AppError;
use safe_route::telemetry;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Bootstrap for the one-shot commands: installs the same subscriber as
/// `serve`, then returns engine settings with an optional graph override.
pub(crate) fn engine_config(graph: Option<PathBuf>) -> Result<EngineConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(with_graph_override(config.engine, graph))
}

fn with_graph_override(mut config: EngineConfig, graph: Option<PathBuf>) -> EngineConfig {
    if let Some(path) = graph {
        config.graph_path = Some(path);
    }
    config
}

pub(crate) fn build_engine(config: &EngineConfig) -> Result<Arc<RiskEngine>, AppError> {
    Ok(Arc::new(RiskEngine::from_config(config)?))
}

pub(crate) fn parse_safe_code(raw: &str) -> Result<SafeCode, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "green" | "yellow" | "red" => Ok(SafeCode::from_label(raw)),
        _ => Err(format!("'{raw}' is not one of green, yellow, red")),
    }
}

pub(crate) fn parse_mode(raw: &str) -> Result<TransportMode, String> {
    if raw.trim().is_empty() {
        return Err("transportation mode cannot be blank".to_string());
    }
    Ok(TransportMode::from_label(raw))
}
