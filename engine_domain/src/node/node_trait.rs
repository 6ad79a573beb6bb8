// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Node Contract
//!
//! Every pipeline stage implements [`Node`]. A node is handed whatever inputs
//! it declared through [`Node::required_inputs`] (or `None` if it declares
//! none) and returns a [`NodeOutput`] describing what, if anything, should be
//! delivered to its wired children.

use crate::error::EngineError;
use crate::logger::EngineLogger;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// The payload type carried across edges. Kept dynamically typed because a
/// node's output shape is not known to the engine ahead of time — only the
/// declared [`TypeDescriptor`](crate::types::TypeDescriptor) constrains it.
pub type NodeValue = serde_json::Value;

/// What a node's `run` or `finalize` produced.
///
/// Four shapes cover every delivery pattern the engine supports:
/// - `None`: nothing to deliver (terminal node, or side-effect-only node).
/// - `Map`: deliver each entry to the child wired under that key, sequentially.
/// - `Pairs`: like `Map`, but delivered concurrently (one task per pair) and
///   allows repeated keys to fan out to the same child more than once.
/// - `Value`: a single unnamed value, delivered to every wired child.
#[derive(Debug, Clone)]
pub enum NodeOutput {
    None,
    Map(BTreeMap<String, NodeValue>),
    Pairs(Vec<(String, NodeValue)>),
    Value(NodeValue),
}

impl NodeOutput {
    pub fn is_none(&self) -> bool {
        matches!(self, NodeOutput::None)
    }
}

/// A pipeline node.
///
/// Implementors are registered with the node registry under a `type` string
/// and constructed from a [`ConfigValue`](crate::value::ConfigValue) at load
/// time. The engine calls `run` once per readiness trigger and, for nodes that
/// declare [`Node::defer_output`], calls `finalize` exactly once after the run
/// completes.
#[async_trait]
pub trait Node: Send + Sync {
    /// The node's instance name, unique within a pipeline.
    fn name(&self) -> &str;

    /// Named inputs this node requires before it becomes ready to run.
    /// `None` means the node runs as soon as it receives any single delivery
    /// (or immediately, if it is the entrypoint with no incoming edges).
    fn required_inputs(&self) -> Option<&[String]> {
        None
    }

    /// Whether this node withholds its output until `finalize` is called,
    /// rather than returning it from `run`.
    fn defer_output(&self) -> bool {
        false
    }

    /// The semantic type this node declares for whatever it emits. Used only
    /// for edge validation at wiring time; defaults to `Any`, which is always
    /// compatible.
    fn output_type(&self) -> crate::types::TypeDescriptor {
        crate::types::TypeDescriptor::Any
    }

    /// The semantic type this node declares for whatever it expects to
    /// receive. Used only for edge validation at wiring time; defaults to
    /// `Any`.
    fn input_type(&self) -> crate::types::TypeDescriptor {
        crate::types::TypeDescriptor::Any
    }

    /// Executes the node against its collected inputs.
    ///
    /// `logger` is the current run's logger, propagated to every node at the
    /// start of the run rather than stored on the node itself — the wired
    /// graph stays immutable even though the logger changes per run.
    async fn run(
        &self,
        inputs: Option<BTreeMap<String, NodeValue>>,
        logger: &dyn EngineLogger,
    ) -> Result<NodeOutput, EngineError>;

    /// Called once after the run completes for nodes with `defer_output() ==
    /// true`. The default produces nothing.
    async fn finalize(&self, _logger: &dyn EngineLogger) -> Result<NodeOutput, EngineError> {
        Ok(NodeOutput::None)
    }
}
