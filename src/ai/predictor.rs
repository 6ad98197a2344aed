//! Load prediction through injected model capabilities.
//!
//! The core never knows what kind of model it is talking to (linear
//! regression, tree ensemble, neural network); it only requires the two
//! capabilities below. The collaborator loads the fitted artifacts before
//! invoking the pipeline, and anything satisfying the traits (including the
//! stubs used in tests) can stand in for them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineError;
use crate::sim::building::FeatureVector;

/// A fitted feature-normalization transform.
///
/// Must accept exactly one [`FeatureVector`]-shaped input, fit on the same
/// feature order.
pub trait ScalingTransform: Send + Sync {
    fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, EngineError>;
}

/// A trained regression model mapping scaled features to raw outputs.
///
/// The contract with the core is only the output shape: exactly two finite,
/// non-negative reals in (heating, cooling) order. Shape enforcement lives
/// in [`predict`], not in implementations.
pub trait RegressionModel: Send + Sync {
    fn infer(&self, features: &FeatureVector) -> Result<Vec<f64>, EngineError>;
}

/// Predicted energy demand for one building, in kWh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadEstimate {
    /// Heating load (kWh), non-negative.
    pub heating: f64,
    /// Cooling load (kWh), non-negative.
    pub cooling: f64,
}

/// Normalize a feature vector and run model inference.
///
/// Fails with [`EngineError::Inference`] if the model output does not have
/// exactly two finite, non-negative components; the offending raw output is
/// carried in the error for diagnosis. A failed inference is reported
/// upward, never retried or masked with fallback values.
pub fn predict(
    features: &FeatureVector,
    scaler: &dyn ScalingTransform,
    model: &dyn RegressionModel,
) -> Result<LoadEstimate, EngineError> {
    let scaled = scaler.transform(features)?;
    let raw = model.infer(&scaled)?;

    if raw.len() != 2 {
        return Err(EngineError::Inference {
            reason: format!("expected 2 outputs (heating, cooling), got {}", raw.len()),
            raw,
        });
    }
    for (idx, &value) in raw.iter().enumerate() {
        if !value.is_finite() {
            return Err(EngineError::Inference {
                reason: format!("output {idx} is not finite"),
                raw,
            });
        }
        if value < 0.0 {
            return Err(EngineError::Inference {
                reason: format!("output {idx} is negative ({value})"),
                raw,
            });
        }
    }

    let estimate = LoadEstimate {
        heating: raw[0],
        cooling: raw[1],
    };
    debug!(
        heating = estimate.heating,
        cooling = estimate.cooling,
        "predicted thermal loads"
    );
    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::building::BuildingParameters;

    /// Pass-through scaler for tests.
    pub struct IdentityScaler;

    impl ScalingTransform for IdentityScaler {
        fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, EngineError> {
            Ok(*features)
        }
    }

    /// Model stub returning a fixed raw output vector.
    pub struct FixedModel(pub Vec<f64>);

    impl RegressionModel for FixedModel {
        fn infer(&self, _features: &FeatureVector) -> Result<Vec<f64>, EngineError> {
            Ok(self.0.clone())
        }
    }

    fn features() -> FeatureVector {
        FeatureVector::build(&BuildingParameters::default()).unwrap()
    }

    #[test]
    fn predict_maps_outputs_in_heating_cooling_order() {
        let estimate = predict(&features(), &IdentityScaler, &FixedModel(vec![20.0, 15.0]))
            .unwrap();
        assert_eq!(estimate.heating, 20.0);
        assert_eq!(estimate.cooling, 15.0);
    }

    #[test]
    fn wrong_arity_is_an_inference_error() {
        let err = predict(&features(), &IdentityScaler, &FixedModel(vec![20.0]))
            .unwrap_err();
        match err {
            EngineError::Inference { raw, .. } => assert_eq!(raw, vec![20.0]),
            other => panic!("expected Inference, got {:?}", other),
        }

        let err = predict(
            &features(),
            &IdentityScaler,
            &FixedModel(vec![1.0, 2.0, 3.0]),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::Inference { .. }));
    }

    #[test]
    fn negative_output_is_an_inference_error() {
        let err = predict(&features(), &IdentityScaler, &FixedModel(vec![-1.0, 5.0]))
            .unwrap_err();
        match err {
            EngineError::Inference { reason, raw } => {
                assert!(reason.contains("negative"));
                assert_eq!(raw, vec![-1.0, 5.0]);
            }
            other => panic!("expected Inference, got {:?}", other),
        }
    }

    #[test]
    fn non_finite_output_is_an_inference_error() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = predict(&features(), &IdentityScaler, &FixedModel(vec![10.0, bad]))
                .unwrap_err();
            assert!(matches!(err, EngineError::Inference { .. }), "for {bad}");
        }
    }

    #[test]
    fn scaler_errors_propagate() {
        struct FailingScaler;
        impl ScalingTransform for FailingScaler {
            fn transform(&self, _: &FeatureVector) -> Result<FeatureVector, EngineError> {
                Err(EngineError::ModelUnavailable {
                    reason: "scaler not fitted".to_string(),
                })
            }
        }
        let err = predict(&features(), &FailingScaler, &FixedModel(vec![1.0, 1.0]))
            .unwrap_err();
        assert!(matches!(err, EngineError::ModelUnavailable { .. }));
    }

    #[test]
    fn zero_loads_are_valid() {
        let estimate = predict(&features(), &IdentityScaler, &FixedModel(vec![0.0, 0.0]))
            .unwrap();
        assert_eq!(estimate.heating, 0.0);
        assert_eq!(estimate.cooling, 0.0);
    }
}
