//! Sustainability scoring.
//!
//! The score subtracts total consumption (kWh) directly from 100 points.
//! That conflation of units is an intentional simplification inherited from
//! the source domain and kept as-is.

use serde::{Deserialize, Serialize};

/// Qualitative score bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLevel {
    /// Score above 80.
    Excellent,
    /// Score above 60.
    Good,
    /// Score above 40.
    Average,
    /// Everything at or below 40.
    NeedsImprovement,
}

impl ScoreLevel {
    /// Display label matching the reference dashboard.
    pub fn description(&self) -> &'static str {
        match self {
            ScoreLevel::Excellent => "Excellent",
            ScoreLevel::Good => "Good",
            ScoreLevel::Average => "Average",
            ScoreLevel::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// A 0-100 sustainability score with its qualitative band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityScore {
    pub value: f64,
    pub level: ScoreLevel,
}

/// Score baseline total consumption: `max(0, 100 - total_energy)`.
///
/// Thresholds evaluated in order: > 80 Excellent, > 60 Good, > 40 Average,
/// else NeedsImprovement.
pub fn score(total_energy: f64) -> SustainabilityScore {
    let value = (100.0 - total_energy).max(0.0);
    let level = if value > 80.0 {
        ScoreLevel::Excellent
    } else if value > 60.0 {
        ScoreLevel::Good
    } else if value > 40.0 {
        ScoreLevel::Average
    } else {
        ScoreLevel::NeedsImprovement
    };
    SustainabilityScore { value, level }
}
