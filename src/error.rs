//! Error taxonomy for the analysis pipeline.
//!
//! Every failure aborts the current analysis and is reported to the caller
//! with enough context to act on (which field, which bound, which raw model
//! output). No component substitutes defaults for bad input, and nothing
//! retries: all failures here are deterministic for a given input.

use thiserror::Error;

/// Errors produced by the energy estimation pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// An input parameter is outside its declared domain.
    #[error("{field} = {value} is outside the valid range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// An integer-valued parameter carries a fractional part.
    #[error("{field} = {value} must be a whole number")]
    NonIntegral { field: &'static str, value: f64 },

    /// An injected model or scaler capability is missing or unloadable.
    #[error("model unavailable: {reason}")]
    ModelUnavailable { reason: String },

    /// The model returned malformed or out-of-range output.
    ///
    /// Carries the raw output vector for diagnosis.
    #[error("inference failed: {reason} (raw output: {raw:?})")]
    Inference { reason: String, raw: Vec<f64> },
}

impl EngineError {
    /// True for errors caused by caller-supplied input rather than the
    /// injected model artifacts.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::OutOfRange { .. } | EngineError::NonIntegral { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::EngineError;

    #[test]
    fn out_of_range_names_field_and_bounds() {
        let err = EngineError::OutOfRange {
            field: "surface_area",
            value: 1200.0,
            min: 500.0,
            max: 1000.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("surface_area"));
        assert!(msg.contains("500"));
        assert!(msg.contains("1000"));
        assert!(err.is_validation());
    }

    #[test]
    fn inference_error_carries_raw_output() {
        let err = EngineError::Inference {
            reason: "expected 2 outputs, got 3".to_string(),
            raw: vec![1.0, 2.0, 3.0],
        };
        assert!(err.to_string().contains("3.0"));
        assert!(!err.is_validation());
    }
}
