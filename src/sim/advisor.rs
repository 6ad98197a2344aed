//! Rule-based energy advisor.
//!
//! Four independent rules over the raw design parameters and the setback
//! setting. All rules are evaluated; none short-circuits another. When no
//! rule fires the report carries a distinguished baseline flag so the
//! presentation layer can render a neutral message instead of nothing.

use serde::{Deserialize, Serialize};

use crate::sim::building::BuildingParameters;

/// What part of the building a recommendation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationCategory {
    Windows,
    Shape,
    Insulation,
    Thermostat,
}

/// How a recommendation should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// A problem worth fixing.
    Warning,
    /// A good practice already in effect.
    Success,
}

/// One advisory finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub severity: Severity,
    pub message: String,
}

/// The full advisor output for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorReport {
    /// Findings in rule evaluation order; ordering is presentational only.
    pub recommendations: Vec<Recommendation>,
    /// True when no rule fired: the building runs at baseline with no
    /// actionable findings.
    pub baseline: bool,
}

/// Glazing ratio above which window upgrades are recommended.
const GLAZING_WARNING_THRESHOLD: f64 = 0.3;
/// Compactness below which the building shape is flagged.
const COMPACTNESS_WARNING_THRESHOLD: f64 = 0.7;
/// Surface area (m²) above which insulation is flagged.
const SURFACE_WARNING_THRESHOLD: f64 = 850.0;

/// Evaluate the advisory rule set against the inputs.
pub fn recommend(params: &BuildingParameters, setback_degrees: u8) -> AdvisorReport {
    let mut recommendations = Vec::new();

    if params.glazing_area > GLAZING_WARNING_THRESHOLD {
        recommendations.push(Recommendation {
            category: RecommendationCategory::Windows,
            severity: Severity::Warning,
            message: "High glazing area detected. Install double-glazed windows or smart \
                      shading."
                .to_string(),
        });
    }
    if params.relative_compactness < COMPACTNESS_WARNING_THRESHOLD {
        recommendations.push(Recommendation {
            category: RecommendationCategory::Shape,
            severity: Severity::Warning,
            message: "Low compactness. Consider improving building shape efficiency."
                .to_string(),
        });
    }
    if params.surface_area > SURFACE_WARNING_THRESHOLD {
        recommendations.push(Recommendation {
            category: RecommendationCategory::Insulation,
            severity: Severity::Warning,
            message: "Large surface area. High-performance insulation is recommended."
                .to_string(),
        });
    }
    if setback_degrees > 0 {
        recommendations.push(Recommendation {
            category: RecommendationCategory::Thermostat,
            severity: Severity::Success,
            message: format!(
                "Reducing the thermostat by {setback_degrees}\u{b0}C is the easiest way to \
                 save."
            ),
        });
    }

    let baseline = recommendations.is_empty();
    AdvisorReport {
        recommendations,
        baseline,
    }
}
