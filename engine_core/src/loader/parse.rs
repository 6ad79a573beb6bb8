// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Loader Phase 1 — Parse
//!
//! Reads a pipeline document from a YAML string into a
//! [`serde_yaml::Value`], kept untyped until after variable expansion so that
//! `${NAME}` placeholders can be substituted into string scalars anywhere in
//! the tree regardless of where the eventual schema expects them.

use engine_domain::EngineError;

/// Parses `source` into a generic YAML value tree.
pub fn parse(source: &str) -> Result<serde_yaml::Value, EngineError> {
    serde_yaml::from_str(source).map_err(EngineError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_document() {
        let yaml = r#"
pipeline:
  name: demo
  entrypoint: a
  nodes:
    - name: a
      type: passthrough
"#;
        let value = parse(yaml).unwrap();
        assert!(value.get("pipeline").is_some());
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = parse("pipeline: [unterminated").unwrap_err();
        assert!(matches!(err, EngineError::ParseError(_)));
    }
}
