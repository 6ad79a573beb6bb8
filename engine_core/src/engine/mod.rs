//! The execution engine: delivery, readiness, propagation, and finalize.

mod execution_engine;

pub use execution_engine::{ExecutionEngine, DEFAULT_WORKER_LIMIT};
