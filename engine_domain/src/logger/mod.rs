//! The per-run logging facade injected into the execution engine.

mod engine_logger;

pub use engine_logger::{noop_logger, EngineLogger, NoOpLogger};
