// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

// Production code safety enforced via CI and `make lint-strict`
// (lib/bins checked separately from tests - tests may use unwrap/expect)

//! # Engine Core
//!
//! The node registry, pipeline loader, and execution engine for a declarative
//! data-pipeline system. A pipeline is authored as a YAML document naming a
//! directed graph of nodes; this crate turns that document into a running
//! graph and drives it to completion.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      engine_bootstrap                       │
//! │  (CLI, configuration, signal handling, exit codes)           │
//! └─────────────────────────────────────────────────────────────┘
//!                                │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        engine_core                          │
//! │  registry (§4.2) → loader (§4.3) → engine (§4.4)              │
//! │  plus the demonstration node plugins under `nodes`            │
//! └─────────────────────────────────────────────────────────────┘
//!                                │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       engine_domain                          │
//! │  Node, NodeOutput, ConfigValue, TypeDescriptor, EngineError   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Core Concepts
//!
//! ### Pipeline document
//! A pipeline is named, has one entrypoint node, and a list of node entries
//! each naming a registered `type` and an optional free-form `config` block.
//!
//! ### Nodes
//! Every node implements [`engine_domain::Node`]: it's invoked with whatever
//! inputs it asked for via `required_inputs`, and returns a tagged
//! [`engine_domain::NodeOutput`] describing what to deliver downstream.
//!
//! ### Delivery and readiness
//! The engine buffers partial input per node and decides readiness under a
//! single lock; `run` itself always executes outside that lock.

pub mod engine;
pub mod loader;
pub mod nodes;
pub mod registry;

pub use engine::{ExecutionEngine, DEFAULT_WORKER_LIMIT};
pub use engine_domain::{ConfigValue, EngineError, EngineLogger, Node, NodeOutput, NodeValue, TypeDescriptor};
pub use loader::{build_pipeline_from_yaml, LoadedPipeline};
pub use registry::NodeRegistry;
