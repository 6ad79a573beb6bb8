// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Join Node
//!
//! A generic fan-in node. Its `required_inputs` are read from
//! `params.config.required`; once every key has been delivered, it emits the
//! merged mapping of everything it received.

use async_trait::async_trait;
use engine_domain::{ConfigValue, EngineError, EngineLogger, Node, NodeOutput, NodeValue};
use std::collections::BTreeMap;

pub struct JoinNode {
    name: String,
    required: Vec<String>,
}

impl JoinNode {
    pub fn new(name: impl Into<String>, config: &ConfigValue) -> Result<Self, EngineError> {
        let name = name.into();
        let required = config
            .get("required")
            .and_then(ConfigValue::as_list)
            .map(|items| {
                items
                    .iter()
                    .filter_map(ConfigValue::as_str)
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .ok_or_else(|| EngineError::missing_config(&name, "required"))?;

        if required.is_empty() {
            return Err(EngineError::missing_config(&name, "required"));
        }

        Ok(Self { name, required })
    }
}

#[async_trait]
impl Node for JoinNode {
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
        Ok(inputs.map(NodeOutput::Map).unwrap_or(NodeOutput::None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_required(keys: &[&str]) -> ConfigValue {
        let mut m = std::collections::BTreeMap::new();
        m.insert(
            "required".to_string(),
            ConfigValue::List(keys.iter().map(|k| ConfigValue::String(k.to_string())).collect()),
        );
        ConfigValue::Map(m)
    }

    #[test]
    fn missing_required_key_fails_construction() {
        let err = JoinNode::new("j", &ConfigValue::Null).unwrap_err();
        assert!(matches!(err, EngineError::MissingRequiredConfig { .. }));
    }

    #[tokio::test]
    async fn emits_the_merged_inputs() {
        let node = JoinNode::new("j", &config_with_required(&["a", "b"])).unwrap();
        let mut inputs = BTreeMap::new();
        inputs.insert("a".to_string(), serde_json::json!(1));
        inputs.insert("b".to_string(), serde_json::json!(2));
        let out = node.run(Some(inputs.clone()), &engine_domain::NoOpLogger).await.unwrap();
        match out {
            NodeOutput::Map(m) => assert_eq!(m, inputs),
            _ => panic!("expected Map"),
        }
    }
}
