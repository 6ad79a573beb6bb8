// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Loader Phase 3 — Schema Validation
//!
//! Confirms the expanded document has the required shape before anything is
//! instantiated: `pipeline.name`, `pipeline.entrypoint`, and each node's
//! `name`/`type` are required strings. `params` and `outputs` are optional and
//! `params` may carry arbitrary unknown keys. Every violation is collected
//! before failing, rather than stopping at the first.

use super::document::PipelineDocument;
use engine_domain::EngineError;

/// Validates `value` against the pipeline document shape and, on success,
/// deserializes it into a [`PipelineDocument`].
pub fn validate_schema(value: &serde_yaml::Value) -> Result<PipelineDocument, EngineError> {
    let mut violations = Vec::new();

    let pipeline = value.get("pipeline");
    let Some(pipeline) = pipeline else {
        return Err(EngineError::SchemaError(vec!["missing top-level key: pipeline".to_string()]));
    };

    if pipeline.get("name").and_then(|v| v.as_str()).is_none() {
        violations.push("pipeline.name must be a present string".to_string());
    }
    if pipeline.get("entrypoint").and_then(|v| v.as_str()).is_none() {
        violations.push("pipeline.entrypoint must be a present string".to_string());
    }

    let nodes = pipeline.get("nodes").and_then(|v| v.as_sequence());
    match nodes {
        None => violations.push("pipeline.nodes must be a sequence".to_string()),
        Some(nodes) => {
            for (i, node) in nodes.iter().enumerate() {
                if node.get("name").and_then(|v| v.as_str()).is_none() {
                    violations.push(format!("pipeline.nodes[{i}].name must be a present string"));
                }
                if node.get("type").and_then(|v| v.as_str()).is_none() {
                    violations.push(format!("pipeline.nodes[{i}].type must be a present string"));
                }
            }
        }
    }

    if !violations.is_empty() {
        return Err(EngineError::SchemaError(violations));
    }

    serde_yaml::from_value(value.clone())
        .map_err(|e| EngineError::SchemaError(vec![e.to_string()]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> serde_yaml::Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn valid_document_deserializes() {
        let value = parse(
            r#"
pipeline:
  name: demo
  entrypoint: a
  nodes:
    - name: a
      type: passthrough
"#,
        );
        let doc = validate_schema(&value).unwrap();
        assert_eq!(doc.pipeline.name.as_deref(), Some("demo"));
        assert_eq!(doc.pipeline.nodes.len(), 1);
    }

    #[test]
    fn missing_name_and_entrypoint_collects_both_violations() {
        let value = parse(
            r#"
pipeline:
  nodes:
    - name: a
      type: passthrough
"#,
        );
        let err = validate_schema(&value).unwrap_err();
        match err {
            EngineError::SchemaError(violations) => {
                assert!(violations.iter().any(|v| v.contains("pipeline.name")));
                assert!(violations.iter().any(|v| v.contains("pipeline.entrypoint")));
            }
            _ => panic!("expected SchemaError"),
        }
    }

    #[test]
    fn node_missing_type_is_a_violation() {
        let value = parse(
            r#"
pipeline:
  name: demo
  entrypoint: a
  nodes:
    - name: a
"#,
        );
        let err = validate_schema(&value).unwrap_err();
        assert!(matches!(err, EngineError::SchemaError(v) if v.iter().any(|s| s.contains("type"))));
    }

    #[test]
    fn unknown_params_keys_are_permitted() {
        let value = parse(
            r#"
pipeline:
  name: demo
  entrypoint: a
  nodes:
    - name: a
      type: passthrough
      params:
        config:
          any: thing
        extra_unknown_key: 1
"#,
        );
        assert!(validate_schema(&value).is_ok());
    }
}
