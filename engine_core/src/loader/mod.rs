// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Pipeline Loader
//!
//! Four phases, run in order, any failure aborting the build: [`parse`],
//! [`expand_vars`], [`validate_schema`], [`instantiate_and_wire`].

pub mod document;
pub mod expand_vars;
pub mod instantiate;
pub mod parse;
pub mod validate_schema;

pub use document::{NodeDocument, PipelineDocument, PipelineSection};
pub use expand_vars::{EnvLookup, ProcessEnv};
pub use instantiate::LoadedPipeline;

use crate::registry::NodeRegistry;
use engine_domain::EngineError;

/// Runs all four loader phases against `source`, using the process
/// environment for variable expansion.
pub fn build_pipeline_from_yaml(source: &str, registry: &NodeRegistry) -> Result<LoadedPipeline, EngineError> {
    build_pipeline_from_yaml_with_env(source, registry, &ProcessEnv)
}

/// Same as [`build_pipeline_from_yaml`], but with an injectable environment
/// lookup, so tests can exercise variable expansion deterministically.
pub fn build_pipeline_from_yaml_with_env(
    source: &str,
    registry: &NodeRegistry,
    env: &dyn EnvLookup,
) -> Result<LoadedPipeline, EngineError> {
    let raw = parse::parse(source)?;
    let expanded = expand_vars::expand_vars(&raw, env)?;
    let document = validate_schema::validate_schema(&expanded)?;
    instantiate::instantiate_and_wire(&document, registry)
}
