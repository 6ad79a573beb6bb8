//! Error types for the pipeline engine domain.

mod engine_error;

pub use engine_error::EngineError;
