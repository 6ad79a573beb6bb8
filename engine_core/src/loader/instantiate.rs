// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Loader Phase 4 — Instantiate & Wire
//!
//! Resolves every node's class via the registry, constructs it, wires
//! `outputs` edges (mutually, producer→consumer and consumer←producer),
//! checks declared edge types, and verifies `entrypoint` names an
//! instantiated node.

use super::document::PipelineDocument;
use crate::registry::NodeRegistry;
use engine_domain::{ConfigValue, EngineError, Node, TypeDescriptor};
use std::collections::HashMap;
use std::sync::Arc;

/// A fully instantiated, wired pipeline ready to be handed to the execution
/// engine.
pub struct LoadedPipeline {
    pub name: String,
    pub entrypoint: String,
    pub nodes: HashMap<String, Arc<dyn Node>>,
    /// producer name -> ordered list of consumer names.
    pub edges: HashMap<String, Vec<String>>,
}

pub fn instantiate_and_wire(doc: &PipelineDocument, registry: &NodeRegistry) -> Result<LoadedPipeline, EngineError> {
    let pipeline = &doc.pipeline;
    let name = pipeline.name.clone().ok_or(EngineError::MissingPipelineName)?;

    let mut nodes: HashMap<String, Arc<dyn Node>> = HashMap::new();
    for node_doc in &pipeline.nodes {
        let node_name = node_doc
            .name
            .clone()
            .ok_or_else(|| EngineError::SchemaError(vec!["pipeline.nodes[].name must be a present string".to_string()]))?;
        let type_name = node_doc
            .type_name
            .clone()
            .ok_or_else(|| EngineError::SchemaError(vec!["pipeline.nodes[].type must be a present string".to_string()]))?;
        let config = node_doc
            .params
            .get("config")
            .cloned()
            .unwrap_or(ConfigValue::Null);

        let node = registry.instantiate(&type_name, &node_name, &config)?;
        nodes.insert(node_name, Arc::from(node));
    }

    let mut edges: HashMap<String, Vec<String>> = HashMap::new();
    for node_doc in &pipeline.nodes {
        let producer_name = node_doc
            .name
            .clone()
            .ok_or_else(|| EngineError::SchemaError(vec!["pipeline.nodes[].name must be a present string".to_string()]))?;
        let producer = nodes.get(&producer_name).expect("just inserted above in this same function");

        for target_name in &node_doc.outputs {
            let consumer = nodes.get(target_name).ok_or_else(|| {
                EngineError::SchemaError(vec![format!(
                    "node {producer_name} declares output to unknown node {target_name}"
                )])
            })?;

            if !TypeDescriptor::are_compatible(&producer.output_type(), &consumer.input_type()) {
                return Err(EngineError::EdgeTypeError {
                    producer: producer_name.clone(),
                    consumer: target_name.clone(),
                    output_type: producer.output_type().to_string(),
                    input_type: consumer.input_type().to_string(),
                });
            }

            edges.entry(producer_name.clone()).or_default().push(target_name.clone());
        }
    }

    let entrypoint = pipeline.entrypoint.clone().ok_or(EngineError::MissingPipelineName)?;
    if !nodes.contains_key(&entrypoint) {
        return Err(EngineError::UnknownEntrypoint(entrypoint));
    }

    Ok(LoadedPipeline {
        name,
        entrypoint,
        nodes,
        edges,
    })
}
