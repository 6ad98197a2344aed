//! The full analysis pipeline: features → prediction → metrics →
//! optimization → score → recommendations.
//!
//! One `analyze` call is one synchronous pipeline run over pure functions;
//! there is no shared mutable state between runs, so independent buildings
//! can be analyzed in parallel. `analyze_population` does exactly that with
//! rayon, one worker per candidate design, sharing the injected model
//! read-only.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai::predictor::{predict, LoadEstimate, RegressionModel, ScalingTransform};
use crate::error::EngineError;
use crate::sim::advisor::{recommend, AdvisorReport};
use crate::sim::building::{BuildingParameters, FeatureVector};
use crate::sim::metrics::EnergyTariff;
use crate::sim::optimize::{optimize, OptimizationResult};
use crate::sim::score::{score, SustainabilityScore};

/// Structured output of one full analysis run.
///
/// Everything the presentation layer needs, with no formatting applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The inputs the report was computed from.
    pub params: BuildingParameters,
    pub setback_degrees: u8,
    /// Predicted baseline loads.
    pub loads: LoadEstimate,
    /// Baseline and optimized metrics with savings deltas.
    pub optimization: OptimizationResult,
    /// Score over baseline consumption.
    pub score: SustainabilityScore,
    /// Advisory findings.
    pub advisor: AdvisorReport,
}

/// Run the full pipeline for one building.
///
/// Validation, prediction, or setback-range failures abort the run and are
/// returned to the caller; no partial report is produced.
pub fn analyze(
    params: &BuildingParameters,
    setback_degrees: u8,
    tariff: &EnergyTariff,
    scaler: &dyn ScalingTransform,
    model: &dyn RegressionModel,
) -> Result<AnalysisReport, EngineError> {
    let features = FeatureVector::build(params)?;
    let loads = predict(&features, scaler, model)?;
    let optimization = optimize(&loads, setback_degrees, tariff)?;
    let score = score(optimization.baseline.total_energy);
    let advisor = recommend(params, setback_degrees);

    debug!(
        total_energy = optimization.baseline.total_energy,
        energy_saved = optimization.energy_saved,
        score = score.value,
        "analysis complete"
    );

    Ok(AnalysisReport {
        params: *params,
        setback_degrees,
        loads,
        optimization,
        score,
        advisor,
    })
}

/// Analyze a population of candidate designs in parallel.
///
/// Each candidate runs the same pipeline as [`analyze`] under the same
/// setback and tariff. The first failing candidate fails the whole call
/// (results are deterministic, so which one fails does not depend on
/// scheduling). Requires the injected capabilities to be safe for
/// concurrent read-only use, which the bundled artifacts are.
pub fn analyze_population(
    population: &[BuildingParameters],
    setback_degrees: u8,
    tariff: &EnergyTariff,
    scaler: &dyn ScalingTransform,
    model: &dyn RegressionModel,
) -> Result<Vec<AnalysisReport>, EngineError> {
    population
        .par_iter()
        .map(|params| analyze(params, setback_degrees, tariff, scaler, model))
        .collect()
}
