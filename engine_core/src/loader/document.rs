// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Pipeline Document Shape
//!
//! The raw, deserialized shape of a pipeline YAML/JSON document, before
//! schema validation narrows the optional fields into the guaranteed-present
//! ones the rest of the loader works with.

use engine_domain::ConfigValue;
use serde::Deserialize;

/// Top-level document: one `pipeline` key.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineDocument {
    pub pipeline: PipelineSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSection {
    pub name: Option<String>,
    pub entrypoint: Option<String>,
    #[serde(default)]
    pub nodes: Vec<NodeDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeDocument {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub params: ConfigValue,
    #[serde(default)]
    pub outputs: Vec<String>,
}
