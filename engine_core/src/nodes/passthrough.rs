// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Passthrough Node
//!
//! Forwards its single declared input, `value`, unchanged. A structural
//! placeholder for exercising the engine end-to-end, grounded in the
//! teacher's `PassThroughService` (data in, data out, nothing transformed).
//!
//! Declares `required_inputs = ["value"]` rather than none: a node with no
//! declared required inputs is always invoked with a null input by the
//! engine (see [`crate::engine::ExecutionEngine::deliver`]), so a node that
//! means to forward what it's handed has to ask for it by name.

use async_trait::async_trait;
use engine_domain::{EngineError, EngineLogger, Node, NodeOutput, NodeValue};
use std::collections::BTreeMap;

pub struct PassthroughNode {
    name: String,
    required: Vec<String>,
}

impl PassthroughNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: vec!["value".to_string()],
        }
    }
}

#[async_trait]
impl Node for PassthroughNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn required_inputs(&self) -> Option<&[String]> {
        Some(&self.required)
    }

    async fn run(
        &self,
        inputs: Option<BTreeMap<String, NodeValue>>,
        _logger: &dyn EngineLogger,
    ) -> Result<NodeOutput, EngineError> {
        // Re-emit under the same key: a bare `NodeOutput::Value` delivers
        // with a null key, which a required-input consumer never picks up
        // (see the engine's delivery protocol), so the key has to survive.
        match inputs {
            Some(mut map) => Ok(map
                .remove("value")
                .map(|v| NodeOutput::Map(BTreeMap::from([("value".to_string(), v)])))
                .unwrap_or(NodeOutput::None)),
            None => Ok(NodeOutput::None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn forwards_the_value_key_unchanged() {
        let node = PassthroughNode::new("p");
        let mut inputs = BTreeMap::new();
        inputs.insert("value".to_string(), serde_json::json!("hello"));
        let out = node.run(Some(inputs), &engine_domain::NoOpLogger).await.unwrap();
        match out {
            NodeOutput::Map(map) => assert_eq!(map.get("value"), Some(&serde_json::json!("hello"))),
            _ => panic!("expected Map"),
        }
    }

    #[test]
    fn declares_value_as_its_only_required_input() {
        let node = PassthroughNode::new("p");
        assert_eq!(node.required_inputs(), Some(["value".to_string()].as_slice()));
    }
}
