// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Buffer Node
//!
//! A `defer_output` node: every delivery it receives during the main
//! traversal is accumulated, and nothing is emitted until the finalize phase,
//! when the accumulated mapping is flushed downstream in one shot.
//!
//! Declares `required_inputs = ["value"]` rather than none, for the same
//! reason [`crate::nodes::PassthroughNode`] does: a node with no declared
//! required inputs is always invoked with a null input by the engine, so a
//! node that means to accumulate what it's handed has to ask for it by name.

use async_trait::async_trait;
use engine_domain::{EngineError, EngineLogger, Node, NodeOutput, NodeValue};
use parking_lot::Mutex;
use std::collections::BTreeMap;

pub struct BufferNode {
    name: String,
    required: Vec<String>,
    accumulated: Mutex<BTreeMap<String, NodeValue>>,
}

impl BufferNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: vec!["value".to_string()],
            accumulated: Mutex::new(BTreeMap::new()),
        }
    }
}

#[async_trait]
impl Node for BufferNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn required_inputs(&self) -> Option<&[String]> {
        Some(&self.required)
    }

    fn defer_output(&self) -> bool {
        true
    }

    async fn run(
        &self,
        inputs: Option<BTreeMap<String, NodeValue>>,
        _logger: &dyn EngineLogger,
    ) -> Result<NodeOutput, EngineError> {
        if let Some(map) = inputs {
            self.accumulated.lock().extend(map);
        }
        Ok(NodeOutput::None)
    }

    async fn finalize(&self, _logger: &dyn EngineLogger) -> Result<NodeOutput, EngineError> {
        let accumulated = std::mem::take(&mut *self.accumulated.lock());
        if accumulated.is_empty() {
            Ok(NodeOutput::None)
        } else {
            Ok(NodeOutput::Map(accumulated))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accumulates_across_runs_and_flushes_on_finalize() {
        let node = BufferNode::new("b");
        let mut first = BTreeMap::new();
        first.insert("a".to_string(), serde_json::json!(1));
        node.run(Some(first), &engine_domain::NoOpLogger).await.unwrap();

        let mut second = BTreeMap::new();
        second.insert("b".to_string(), serde_json::json!(2));
        node.run(Some(second), &engine_domain::NoOpLogger).await.unwrap();

        let out = node.finalize(&engine_domain::NoOpLogger).await.unwrap();
        match out {
            NodeOutput::Map(m) => {
                assert_eq!(m.get("a"), Some(&serde_json::json!(1)));
                assert_eq!(m.get("b"), Some(&serde_json::json!(2)));
            }
            _ => panic!("expected Map"),
        }
    }

    #[tokio::test]
    async fn finalize_with_nothing_accumulated_is_none() {
        let node = BufferNode::new("b");
        assert!(node.finalize(&engine_domain::NoOpLogger).await.unwrap().is_none());
    }

    #[test]
    fn declares_value_as_its_only_required_input() {
        let node = BufferNode::new("b");
        assert_eq!(node.required_inputs(), Some(["value".to_string()].as_slice()));
    }
}
