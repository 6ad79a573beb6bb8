// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Domain Error System
//!
//! This module provides the hierarchical error system for the pipeline engine
//! domain. It categorizes failures by the phase or component that raised them,
//! so load-time errors (registry, loader) and run-time errors (node execution)
//! can be told apart without inspecting a message string.
//!
//! ## Error Categories
//!
//! - **Load-phase errors**: `UnresolvedVariable`, `SchemaError`, `UnknownNodeType`,
//!   `InvalidNodeBinding`, `EdgeTypeError`, `UnknownEntrypoint`,
//!   `MissingPipelineName`. Any of these aborts the pipeline build; no engine is
//!   returned.
//! - **Construction errors**: `MissingRequiredConfig`, raised by a node's own
//!   constructor when a required parameter is absent.
//! - **Execution errors**: `NodeExecutionError`, raised when a node's `run` or
//!   `finalize` fails. Fatal for the whole run; not retried.

use thiserror::Error;

/// Domain-specific errors for the pipeline engine.
///
/// Each variant corresponds to exactly one of the conditions in the error
/// taxonomy: it names the phase or component that can raise it, not a generic
/// catch-all.
#[derive(Error, Debug, Clone)]
pub enum EngineError {
    /// A `${NAME}` placeholder had no corresponding environment variable.
    #[error("unresolved variable: ${{{0}}}")]
    UnresolvedVariable(String),

    /// The parsed document violated the required pipeline document shape.
    /// Carries every violation found, not just the first.
    #[error("schema error: {}", .0.join("; "))]
    SchemaError(Vec<String>),

    /// A node's `type` string has no registered plugin.
    #[error("unknown node type: {0}")]
    UnknownNodeType(String),

    /// A type name was registered in the binding table but failed to resolve
    /// to a usable constructor.
    #[error("invalid node binding for type {type_name}: {reason}")]
    InvalidNodeBinding { type_name: String, reason: String },

    /// Declared output/input types across an edge are incompatible.
    #[error("edge type error: {producer} (output: {output_type}) -> {consumer} (input: {input_type})")]
    EdgeTypeError {
        producer: String,
        consumer: String,
        output_type: String,
        input_type: String,
    },

    /// `pipeline.entrypoint` names no instantiated node.
    #[error("unknown entrypoint: {0}")]
    UnknownEntrypoint(String),

    /// `pipeline.name` was not present in the document.
    #[error("missing pipeline name")]
    MissingPipelineName,

    /// A node's own required configuration key was absent.
    #[error("node {node} missing required config key: {key}")]
    MissingRequiredConfig { node: String, key: String },

    /// A node's `run` or `finalize` raised.
    #[error("node {node} execution failed: {source}")]
    NodeExecutionError { node: String, source: String },

    /// Wraps an I/O failure encountered while reading a pipeline document.
    #[error("io error: {0}")]
    IoError(String),

    /// Wraps a YAML parse failure encountered while reading a pipeline document.
    #[error("yaml parse error: {0}")]
    ParseError(String),
}

impl EngineError {
    /// Creates a node-execution error from any displayable source.
    pub fn node_execution_failed(node: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::NodeExecutionError {
            node: node.into(),
            source: source.to_string(),
        }
    }

    /// Creates a missing-required-config error.
    pub fn missing_config(node: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingRequiredConfig {
            node: node.into(),
            key: key.into(),
        }
    }

    /// Whether this error occurred while building the pipeline (as opposed to
    /// while running it). Load-phase failures always abort the build; none of
    /// them are retryable.
    pub fn is_load_error(&self) -> bool {
        !matches!(self, EngineError::NodeExecutionError { .. })
    }

    /// Whether retrying the same operation might succeed without any change
    /// to the pipeline document or node configuration — transient failures
    /// only, such as a stalled I/O read. Schema/wiring/registry errors are
    /// never recoverable: retrying without editing the document just
    /// reproduces them.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EngineError::IoError(_))
    }

    /// A short, stable category tag, useful for metrics and exit-code mapping.
    pub fn category(&self) -> &'static str {
        match self {
            EngineError::UnresolvedVariable(_) => "variable",
            EngineError::SchemaError(_) => "schema",
            EngineError::UnknownNodeType(_) => "registry",
            EngineError::InvalidNodeBinding { .. } => "registry",
            EngineError::EdgeTypeError { .. } => "wiring",
            EngineError::UnknownEntrypoint(_) => "wiring",
            EngineError::MissingPipelineName => "wiring",
            EngineError::MissingRequiredConfig { .. } => "config",
            EngineError::NodeExecutionError { .. } => "execution",
            EngineError::IoError(_) => "io",
            EngineError::ParseError(_) => "parse",
        }
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<serde_yaml::Error> for EngineError {
    fn from(err: serde_yaml::Error) -> Self {
        EngineError::ParseError(err.to_string())
    }
}
