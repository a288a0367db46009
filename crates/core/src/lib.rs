//! Shared building blocks for hostpulse: configuration, the metrics provider
//! contract, response shapes, errors, the liveness probe, and lifecycle glue.

pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod lifecycle;
pub mod probe;
pub mod provider;
pub mod report;
