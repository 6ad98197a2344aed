//! Concrete model artifacts loaded from persisted storage.
//!
//! The collaborator fits and exports two artifacts offline: the regression
//! model as ONNX and the feature scaler as a small JSON document of
//! per-feature means and scales. This module adapts both onto the capability
//! traits in [`crate::ai::predictor`]. The ONNX session is wrapped in
//! `Mutex` for thread-safe interior mutability (ORT `Session::run` needs
//! `&mut`), so one loaded model can serve parallel population analysis.

use std::path::Path;
use std::sync::{Arc, Mutex};

use ndarray::Array2;
use ort::session::Session;
use ort::value::TensorRef;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai::predictor::{RegressionModel, ScalingTransform};
use crate::error::EngineError;
use crate::sim::building::{FeatureVector, NUM_FEATURES};

/// Fitted standard scaler: `(x - mean) / scale` per feature.
///
/// Serialized field order matches [`crate::sim::building::FEATURE_ORDER`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub means: [f64; NUM_FEATURES],
    pub scales: [f64; NUM_FEATURES],
}

impl StandardScaler {
    /// Load a fitted scaler from its JSON artifact.
    ///
    /// A missing file, malformed document, or zero/non-finite scale entry is
    /// a [`EngineError::ModelUnavailable`]: the capability is unusable and
    /// the pipeline must not run with it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| EngineError::ModelUnavailable {
            reason: format!("scaler artifact {}: {e}", path.display()),
        })?;
        let scaler: StandardScaler =
            serde_json::from_str(&data).map_err(|e| EngineError::ModelUnavailable {
                reason: format!("scaler artifact {}: {e}", path.display()),
            })?;
        scaler.validate()?;
        debug!(path = %path.display(), "loaded standard scaler");
        Ok(scaler)
    }

    fn validate(&self) -> Result<(), EngineError> {
        for (idx, &scale) in self.scales.iter().enumerate() {
            if !scale.is_finite() || scale == 0.0 {
                return Err(EngineError::ModelUnavailable {
                    reason: format!("scaler has unusable scale {scale} at feature {idx}"),
                });
            }
        }
        for (idx, &mean) in self.means.iter().enumerate() {
            if !mean.is_finite() {
                return Err(EngineError::ModelUnavailable {
                    reason: format!("scaler has non-finite mean at feature {idx}"),
                });
            }
        }
        Ok(())
    }
}

impl ScalingTransform for StandardScaler {
    fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, EngineError> {
        let mut out = features.as_array();
        for (idx, value) in out.iter_mut().enumerate() {
            *value = (*value - self.means[idx]) / self.scales[idx];
        }
        Ok(FeatureVector::from_raw(out))
    }
}

/// ONNX-backed regression model.
///
/// Expects a model exported with a single `(1, 8)` float input and a single
/// `(1, 2)` float output in (heating, cooling) order.
#[derive(Debug)]
pub struct OnnxRegressor {
    session: Arc<Mutex<Session>>,
    path: String,
}

impl OnnxRegressor {
    /// Load an ONNX model file into an inference session.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EngineError::ModelUnavailable {
                reason: format!("ONNX model file not found: {}", path.display()),
            });
        }

        let session = Session::builder()
            .map_err(|e| EngineError::ModelUnavailable {
                reason: format!("failed to create session builder: {e}"),
            })?
            .commit_from_file(path)
            .map_err(|e| EngineError::ModelUnavailable {
                reason: format!("failed to load ONNX model {}: {e}", path.display()),
            })?;

        debug!(path = %path.display(), "loaded ONNX regression model");
        Ok(OnnxRegressor {
            session: Arc::new(Mutex::new(session)),
            path: path.display().to_string(),
        })
    }

    /// Path the model was loaded from.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl RegressionModel for OnnxRegressor {
    fn infer(&self, features: &FeatureVector) -> Result<Vec<f64>, EngineError> {
        let input: Vec<f32> = features.as_slice().iter().map(|&x| x as f32).collect();
        let input_arr = Array2::from_shape_vec((1, NUM_FEATURES), input).map_err(|e| {
            EngineError::Inference {
                reason: format!("failed to shape input tensor: {e}"),
                raw: Vec::new(),
            }
        })?;

        let mut session = self.session.lock().map_err(|_| EngineError::ModelUnavailable {
            reason: "ONNX session lock poisoned".to_string(),
        })?;

        let tensor = TensorRef::from_array_view(&input_arr).map_err(|e| EngineError::Inference {
            reason: format!("failed to create input tensor: {e}"),
            raw: Vec::new(),
        })?;

        let outputs = session
            .run(ort::inputs![tensor])
            .map_err(|e| EngineError::Inference {
                reason: format!("ONNX inference failed: {e}"),
                raw: Vec::new(),
            })?;

        if outputs.len() == 0 {
            return Err(EngineError::Inference {
                reason: "model produced no outputs".to_string(),
                raw: Vec::new(),
            });
        }

        let array = outputs[0]
            .try_extract_array::<f32>()
            .map_err(|e| EngineError::Inference {
                reason: format!("failed to extract output tensor: {e}"),
                raw: Vec::new(),
            })?;

        Ok(array.iter().map(|&x| x as f64).collect())
    }
}
