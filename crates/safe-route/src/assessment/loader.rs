use super::graph::LocationGraph;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum GraphLoadError {
    #[error("failed to read graph document: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid graph CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("risk weight for '{location}' must be a finite number, got {value}")]
    InvalidRisk { location: String, value: f64 },
    #[error("graph document declares no locations")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct CsvLocationRow {
    location: String,
    #[serde(default)]
    risk: Option<f64>,
    #[serde(default)]
    neighbors: Option<String>,
}

/// Reads location graphs from JSON or CSV documents.
///
/// JSON documents mirror the graph itself:
/// `{ "adjacency": { "A": ["B"] }, "risk": { "B": 0.5 } }`.
/// CSV documents carry one row per location with the header
/// `location,risk,neighbors`, neighbors separated by `;`. A row with no
/// neighbors only records a risk weight.
pub struct GraphLoader;

impl GraphLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<LocationGraph, GraphLoadError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        let graph = if is_csv {
            Self::from_csv_reader(reader)?
        } else {
            Self::from_json_reader(reader)?
        };

        info!(
            path = %path.display(),
            locations = graph.len(),
            "loaded location graph"
        );
        Ok(graph)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<LocationGraph, GraphLoadError> {
        let graph: LocationGraph = serde_json::from_reader(reader)?;
        validate(graph)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<LocationGraph, GraphLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut graph = LocationGraph::new();
        for row in csv_reader.deserialize::<CsvLocationRow>() {
            let row = row?;
            if row.location.is_empty() {
                continue;
            }
            if let Some(weight) = row.risk {
                graph.set_risk(&row.location, weight);
            }

            let neighbors = row.neighbors.unwrap_or_default();
            for neighbor in neighbors
                .split(';')
                .map(str::trim)
                .filter(|name| !name.is_empty())
            {
                graph.add_neighbor(&row.location, neighbor);
            }
        }

        validate(graph)
    }
}

fn validate(graph: LocationGraph) -> Result<LocationGraph, GraphLoadError> {
    if graph.is_empty() {
        return Err(GraphLoadError::Empty);
    }
    if let Some((location, value)) = graph.risk_weights().find(|(_, weight)| !weight.is_finite())
    {
        return Err(GraphLoadError::InvalidRisk {
            location: location.to_string(),
            value,
        });
    }
    Ok(graph)
}
