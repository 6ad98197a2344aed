//! Building analysis: parameters, metrics, optimization, scoring, and
//! recommendations.

pub mod advisor;
pub mod building;
pub mod metrics;
pub mod optimize;
pub mod pipeline;
pub mod score;
