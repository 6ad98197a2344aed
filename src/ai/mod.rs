//! Model inference: capability traits and the persisted-artifact adapters.

pub mod artifacts;
pub mod predictor;
