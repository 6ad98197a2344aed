//! Building design parameters and feature vector assembly.
//!
//! The eight physical parameters describe the building envelope the way the
//! upstream regression model was trained on them (the ENB2012 efficiency
//! dataset conventions). `FeatureVector::build` is the single place where
//! raw parameters are validated and ordered for inference; the element order
//! is a hard contract with the fitted scaler and model.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Number of model input features.
pub const NUM_FEATURES: usize = 8;

/// Feature names in the exact order the scaler and model were fit on.
///
/// Any change to the upstream training order requires a matching change
/// here; the order-contract test in this module pins it.
pub const FEATURE_ORDER: [&str; NUM_FEATURES] = [
    "relative_compactness",
    "surface_area",
    "wall_area",
    "roof_area",
    "overall_height",
    "orientation",
    "glazing_area",
    "glazing_distribution",
];

/// Physical design parameters of a single building.
///
/// Orientation and glazing distribution are integer-coded categories but are
/// carried as `f64` at this boundary: callers (sliders, config files, test
/// harnesses) supply reals, and [`FeatureVector::build`] validates
/// integrality along with the range checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingParameters {
    /// Relative compactness, dimensionless, 0.5 to 1.0.
    pub relative_compactness: f64,
    /// Total surface area (m²), 500 to 1000.
    pub surface_area: f64,
    /// Wall area (m²), 200 to 500.
    pub wall_area: f64,
    /// Roof area (m²), 100 to 300.
    pub roof_area: f64,
    /// Overall height (m), 2.5 to 5.0.
    pub overall_height: f64,
    /// Orientation code, integer 2 to 5 (2=N, 3=E, 4=S, 5=W).
    pub orientation: f64,
    /// Glazing area as a ratio of floor area, 0.0 to 0.4.
    pub glazing_area: f64,
    /// Glazing distribution code, integer 0 to 5.
    pub glazing_distribution: f64,
}

impl Default for BuildingParameters {
    /// Mid-range defaults matching the reference dashboard's initial slider
    /// positions.
    fn default() -> Self {
        Self {
            relative_compactness: 0.8,
            surface_area: 700.0,
            wall_area: 300.0,
            roof_area: 200.0,
            overall_height: 3.5,
            orientation: 3.0,
            glazing_area: 0.2,
            glazing_distribution: 2.0,
        }
    }
}

/// Ordered model input: the eight features in [`FEATURE_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; NUM_FEATURES]);

impl FeatureVector {
    /// Assemble and validate the feature vector for one building.
    ///
    /// Fails with [`EngineError::OutOfRange`] if any field is outside its
    /// declared range, or [`EngineError::NonIntegral`] if orientation or
    /// glazing distribution carry a fractional part. The UI constrains these
    /// bounds too, but the core may be invoked headlessly and validates on
    /// its own.
    pub fn build(params: &BuildingParameters) -> Result<Self, EngineError> {
        check_range("relative_compactness", params.relative_compactness, 0.5, 1.0)?;
        check_range("surface_area", params.surface_area, 500.0, 1000.0)?;
        check_range("wall_area", params.wall_area, 200.0, 500.0)?;
        check_range("roof_area", params.roof_area, 100.0, 300.0)?;
        check_range("overall_height", params.overall_height, 2.5, 5.0)?;
        check_range("orientation", params.orientation, 2.0, 5.0)?;
        check_integral("orientation", params.orientation)?;
        check_range("glazing_area", params.glazing_area, 0.0, 0.4)?;
        check_range("glazing_distribution", params.glazing_distribution, 0.0, 5.0)?;
        check_integral("glazing_distribution", params.glazing_distribution)?;

        Ok(FeatureVector([
            params.relative_compactness,
            params.surface_area,
            params.wall_area,
            params.roof_area,
            params.overall_height,
            params.orientation,
            params.glazing_area,
            params.glazing_distribution,
        ]))
    }

    /// Construct directly from raw ordered values.
    ///
    /// Used by scaling transforms to re-wrap their output; performs no
    /// validation since scaled values legitimately leave the raw ranges.
    pub fn from_raw(values: [f64; NUM_FEATURES]) -> Self {
        FeatureVector(values)
    }

    /// The features as an ordered slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// The features as the fixed-size array.
    pub fn as_array(&self) -> [f64; NUM_FEATURES] {
        self.0
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), EngineError> {
    // NaN fails both comparisons and is rejected here as well.
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(EngineError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn check_integral(field: &'static str, value: f64) -> Result<(), EngineError> {
    if value.fract() == 0.0 {
        Ok(())
    } else {
        Err(EngineError::NonIntegral { field, value })
    }
}
