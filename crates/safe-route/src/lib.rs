//! Route risk assessment for pandemic-safe journey planning.
//!
//! The [`assessment`] module holds the engine; [`config`], [`error`] and
//! [`telemetry`] carry the service plumbing shared with the API binary.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
