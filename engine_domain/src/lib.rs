// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Engine Domain
//!
//! The pure, infrastructure-free core of the pipeline engine: the node
//! contract, the configuration value tree, the edge type system, the error
//! taxonomy, and the logging facade every node and the engine itself are
//! written against.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                engine_core                   │  registry, loader, engine,
//! │        (depends on engine_domain)             │  demonstration nodes
//! └─────────────────────────────────────────────┘
//!                       │
//!                       ▼
//! ┌─────────────────────────────────────────────┐
//! │               engine_domain                  │  Node, NodeOutput,
//! │         (no tokio, no tracing, no I/O)        │  ConfigValue, TypeDescriptor,
//! └─────────────────────────────────────────────┘  EngineError, EngineLogger
//! ```
//!
//! This crate has no knowledge of YAML, the registry, or the scheduler — it
//! only defines the contracts those layers build on.

pub mod error;
pub mod logger;
pub mod node;
pub mod types;
pub mod value;

pub use error::EngineError;
pub use logger::{noop_logger, EngineLogger, NoOpLogger};
pub use node::{Node, NodeOutput, NodeValue};
pub use types::TypeDescriptor;
pub use value::ConfigValue;
