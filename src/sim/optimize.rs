//! Thermostat-setback optimization simulation.
//!
//! Heating and cooling respond to a setback with different reduction rates:
//! 5% per degree for heating, 4% per degree for cooling. The asymmetry
//! models the different thermal response of heating and cooling systems and
//! is part of the domain contract, not an artifact to merge.

use serde::{Deserialize, Serialize};

use crate::ai::predictor::LoadEstimate;
use crate::error::EngineError;
use crate::sim::metrics::{derive, DerivedMetrics, EnergyTariff};

/// Heating load reduction per degree of setback.
const HEATING_REDUCTION_PER_DEGREE: f64 = 0.05;
/// Cooling load reduction per degree of setback.
const COOLING_REDUCTION_PER_DEGREE: f64 = 0.04;
/// Largest supported setback, in degrees.
pub const MAX_SETBACK_DEGREES: u8 = 3;

/// kg CO₂ absorbed by one tree per year, for the eco-impact equivalence.
const CARBON_PER_TREE_KG: f64 = 21.0;

/// Baseline and optimized metrics with their savings deltas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub baseline: DerivedMetrics,
    pub optimized: DerivedMetrics,
    /// kWh saved: baseline minus optimized total energy.
    pub energy_saved: f64,
    /// kg CO₂ saved.
    pub carbon_saved: f64,
    /// Cost saved under the tariff.
    pub cost_saved: f64,
}

impl OptimizationResult {
    /// Trees-planted equivalent of the annual carbon saving.
    pub fn trees_equivalent(&self) -> f64 {
        self.carbon_saved / CARBON_PER_TREE_KG
    }

    /// Energy saving as a percentage of baseline consumption.
    ///
    /// Zero when the baseline itself is zero.
    pub fn percent_saved(&self) -> f64 {
        if self.baseline.total_energy == 0.0 {
            0.0
        } else {
            self.energy_saved / self.baseline.total_energy * 100.0
        }
    }
}

/// Simulate a thermostat setback and recompute metrics for the reduced
/// loads.
///
/// `setback_degrees` must be in `[0, MAX_SETBACK_DEGREES]`; larger values
/// are a [`EngineError::OutOfRange`] rather than a silent clamp. At zero
/// setback all savings are exactly zero.
pub fn optimize(
    load: &LoadEstimate,
    setback_degrees: u8,
    tariff: &EnergyTariff,
) -> Result<OptimizationResult, EngineError> {
    if setback_degrees > MAX_SETBACK_DEGREES {
        return Err(EngineError::OutOfRange {
            field: "setback_degrees",
            value: setback_degrees as f64,
            min: 0.0,
            max: MAX_SETBACK_DEGREES as f64,
        });
    }

    let degrees = setback_degrees as f64;
    // Clamped at zero; with the current rates and degree cap the factors
    // stay well positive, but the clamp guards future rate changes.
    let optimized_load = LoadEstimate {
        heating: (load.heating * (1.0 - HEATING_REDUCTION_PER_DEGREE * degrees)).max(0.0),
        cooling: (load.cooling * (1.0 - COOLING_REDUCTION_PER_DEGREE * degrees)).max(0.0),
    };

    let baseline = derive(load, tariff);
    let optimized = derive(&optimized_load, tariff);

    Ok(OptimizationResult {
        baseline,
        optimized,
        energy_saved: baseline.total_energy - optimized.total_energy,
        carbon_saved: baseline.carbon - optimized.carbon,
        cost_saved: baseline.cost - optimized.cost,
    })
}
