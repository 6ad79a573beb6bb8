// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Const Node
//!
//! An entry-style node with no declared required inputs, which emits the
//! fixed value given in its `params.config.value` on every trigger.

use async_trait::async_trait;
use engine_domain::{ConfigValue, EngineError, EngineLogger, Node, NodeOutput, NodeValue};
use std::collections::BTreeMap;

pub struct ConstNode {
    name: String,
    value: NodeValue,
}

impl ConstNode {
    pub fn new(name: impl Into<String>, config: &ConfigValue) -> Result<Self, EngineError> {
        let value = config_value_to_node_value(config.get("value").unwrap_or(&ConfigValue::Null));
        Ok(Self {
            name: name.into(),
            value,
        })
    }
}

fn config_value_to_node_value(value: &ConfigValue) -> NodeValue {
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}

#[async_trait]
impl Node for ConstNode {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(
        &self,
        _inputs: Option<BTreeMap<String, NodeValue>>,
        _logger: &dyn EngineLogger,
    ) -> Result<NodeOutput, EngineError> {
        Ok(NodeOutput::Map(BTreeMap::from([("value".to_string(), self.value.clone())])))
    }
}
