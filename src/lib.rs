//! Building energy estimation and optimization engine.
//!
//! Estimates a building's heating and cooling loads from eight physical
//! design parameters through an injected scaler and regression model,
//! derives consumption/carbon/cost metrics and a discrete rating, simulates
//! a thermostat-setback intervention, scores sustainability, and produces
//! rule-based recommendations. All results come back as structured data;
//! rendering belongs to the caller.
//!
//! ```
//! use greenhome::{
//!     analyze, BuildingParameters, EnergyTariff, EngineError, FeatureVector,
//!     RegressionModel, ScalingTransform,
//! };
//!
//! struct IdentityScaler;
//! impl ScalingTransform for IdentityScaler {
//!     fn transform(&self, f: &FeatureVector) -> Result<FeatureVector, EngineError> {
//!         Ok(*f)
//!     }
//! }
//!
//! struct StubModel;
//! impl RegressionModel for StubModel {
//!     fn infer(&self, _: &FeatureVector) -> Result<Vec<f64>, EngineError> {
//!         Ok(vec![20.0, 15.0])
//!     }
//! }
//!
//! let report = analyze(
//!     &BuildingParameters::default(),
//!     2,
//!     &EnergyTariff::default(),
//!     &IdentityScaler,
//!     &StubModel,
//! )
//! .unwrap();
//! assert_eq!(report.optimization.baseline.total_energy, 35.0);
//! ```

pub mod ai;
pub mod error;
pub mod sim;

pub use ai::artifacts::{OnnxRegressor, StandardScaler};
pub use ai::predictor::{predict, LoadEstimate, RegressionModel, ScalingTransform};
pub use error::EngineError;
pub use sim::advisor::{
    recommend, AdvisorReport, Recommendation, RecommendationCategory, Severity,
};
pub use sim::building::{BuildingParameters, FeatureVector, FEATURE_ORDER, NUM_FEATURES};
pub use sim::metrics::{derive, DerivedMetrics, EnergyRating, EnergyTariff};
pub use sim::optimize::{optimize, OptimizationResult, MAX_SETBACK_DEGREES};
pub use sim::pipeline::{analyze, analyze_population, AnalysisReport};
pub use sim::score::{score, ScoreLevel, SustainabilityScore};
