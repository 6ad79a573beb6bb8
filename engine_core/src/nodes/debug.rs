// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Debug Node
//!
//! Logs its received `value` at debug level, then passes it through
//! unchanged. Grounded in the teacher's `DebugService`, which calculates a
//! checksum and emits metrics as data flows past a point in a stage chain;
//! this node keeps the "diagnostic tap" role but drops the Prometheus
//! integration, since this engine has no stage-level metrics surface.
//!
//! Logs through whichever logger the engine propagates for the current run
//! (see [`Node::run`]) rather than one fixed at construction time.

use async_trait::async_trait;
use engine_domain::{EngineError, EngineLogger, Node, NodeOutput, NodeValue};
use std::collections::BTreeMap;

pub struct DebugNode {
    name: String,
    required: Vec<String>,
}

impl DebugNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: vec!["value".to_string()],
        }
    }
}

#[async_trait]
impl Node for DebugNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn required_inputs(&self) -> Option<&[String]> {
        Some(&self.required)
    }

    async fn run(
        &self,
        inputs: Option<BTreeMap<String, NodeValue>>,
        logger: &dyn EngineLogger,
    ) -> Result<NodeOutput, EngineError> {
        match inputs {
            Some(mut map) => {
                let value = map.remove("value");
                logger.debug(&format!("[{}] received value: {value:?}", self.name));
                Ok(value
                    .map(|v| NodeOutput::Map(BTreeMap::from([("value".to_string(), v)])))
                    .unwrap_or(NodeOutput::None))
            }
            None => Ok(NodeOutput::None),
        }
    }
}
