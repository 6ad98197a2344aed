//! Derived energy metrics: consumption, carbon, cost, and rating.

use serde::{Deserialize, Serialize};

use crate::ai::predictor::LoadEstimate;

/// Tariff and emission configuration for metric derivation.
///
/// Defaults match the reference deployment (grid emission factor 0.82 kg
/// CO₂/kWh, unit price 6 per kWh) but are plain configuration, overridable
/// for other regions and tariffs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyTariff {
    /// Grid carbon intensity (kg CO₂ per kWh).
    pub emission_factor: f64,
    /// Electricity price per kWh, in the caller's currency.
    pub price_per_unit: f64,
}

impl Default for EnergyTariff {
    fn default() -> Self {
        Self {
            emission_factor: 0.82,
            price_per_unit: 6.0,
        }
    }
}

/// Discrete energy rating bands over total consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyRating {
    /// Total below 30 kWh.
    APlus,
    /// Total below 50 kWh.
    B,
    /// Everything above.
    C,
}

impl EnergyRating {
    /// Band thresholds, half-open, first match wins.
    pub fn from_total_energy(total_energy: f64) -> Self {
        if total_energy < 30.0 {
            EnergyRating::APlus
        } else if total_energy < 50.0 {
            EnergyRating::B
        } else {
            EnergyRating::C
        }
    }

    /// Display label matching the reference dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            EnergyRating::APlus => "A+",
            EnergyRating::B => "B",
            EnergyRating::C => "C",
        }
    }

    /// Qualitative description of the band.
    pub fn description(&self) -> &'static str {
        match self {
            EnergyRating::APlus => "Excellent",
            EnergyRating::B => "Good",
            EnergyRating::C => "High Usage",
        }
    }
}

/// Metrics derived from a load estimate under a given tariff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Total consumption (kWh): heating + cooling.
    pub total_energy: f64,
    /// Carbon footprint (kg CO₂).
    pub carbon: f64,
    /// Monetary cost under the tariff.
    pub cost: f64,
    /// Discrete rating band.
    pub rating: EnergyRating,
}

/// Derive consumption, carbon, cost, and rating from a load estimate.
///
/// Pure arithmetic; recomputed per scenario (baseline, optimized), never
/// mutated in place.
pub fn derive(load: &LoadEstimate, tariff: &EnergyTariff) -> DerivedMetrics {
    let total_energy = load.heating + load.cooling;
    DerivedMetrics {
        total_energy,
        carbon: total_energy * tariff.emission_factor,
        cost: total_energy * tariff.price_per_unit,
        rating: EnergyRating::from_total_energy(total_energy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_reference_example() {
        let load = LoadEstimate {
            heating: 20.0,
            cooling: 15.0,
        };
        let metrics = derive(&load, &EnergyTariff::default());
        assert_eq!(metrics.total_energy, 35.0);
        assert!((metrics.carbon - 28.7).abs() < 1e-9);
        assert!((metrics.cost - 210.0).abs() < 1e-9);
        assert_eq!(metrics.rating, EnergyRating::B);
    }

    #[test]
    fn derive_is_exact_arithmetic() {
        let load = LoadEstimate {
            heating: 12.3,
            cooling: 7.7,
        };
        let tariff = EnergyTariff {
            emission_factor: 0.5,
            price_per_unit: 11.0,
        };
        let metrics = derive(&load, &tariff);
        assert_eq!(metrics.total_energy, load.heating + load.cooling);
        assert_eq!(metrics.carbon, metrics.total_energy * tariff.emission_factor);
        assert_eq!(metrics.cost, metrics.total_energy * tariff.price_per_unit);
    }

    #[test]
    fn rating_band_boundaries() {
        assert_eq!(EnergyRating::from_total_energy(29.999), EnergyRating::APlus);
        assert_eq!(EnergyRating::from_total_energy(30.0), EnergyRating::B);
        assert_eq!(EnergyRating::from_total_energy(49.999), EnergyRating::B);
        assert_eq!(EnergyRating::from_total_energy(50.0), EnergyRating::C);
    }

    #[test]
    fn rating_labels() {
        assert_eq!(EnergyRating::APlus.label(), "A+");
        assert_eq!(EnergyRating::APlus.description(), "Excellent");
        assert_eq!(EnergyRating::C.description(), "High Usage");
    }

    #[test]
    fn alternate_tariff_scales_linearly() {
        let load = LoadEstimate {
            heating: 10.0,
            cooling: 10.0,
        };
        let base = derive(&load, &EnergyTariff::default());
        let doubled = derive(
            &load,
            &EnergyTariff {
                emission_factor: 1.64,
                price_per_unit: 12.0,
            },
        );
        assert_eq!(doubled.carbon, base.carbon * 2.0);
        assert_eq!(doubled.cost, base.cost * 2.0);
        // rating depends on energy only, not tariff
        assert_eq!(doubled.rating, base.rating);
    }

    #[test]
    fn zero_load_is_a_plus() {
        let metrics = derive(
            &LoadEstimate {
                heating: 0.0,
                cooling: 0.0,
            },
            &EnergyTariff::default(),
        );
        assert_eq!(metrics.total_energy, 0.0);
        assert_eq!(metrics.rating, EnergyRating::APlus);
    }
}
