// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # CLI Security Validation
//!
//! Applies path canonicalization and argument pattern checks to everything
//! `clap` hands back, so no raw user string reaches the loader or file
//! system unchecked.

use std::path::PathBuf;
use thiserror::Error;

/// A CLI argument failed validation.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid value for --{arg}: {reason}")]
    InvalidValue { arg: String, reason: String },

    #[error("invalid path {path}: {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("malformed --input mapping: {0} (expected KEY=VALUE)")]
    MalformedInput(String),
}

/// Patterns that should never appear in a path or free-form argument: shell
/// metacharacters and parent-directory traversal.
const DANGEROUS_PATTERNS: &[&str] = &["..", ";", "|", "&", "$(", "`", "\n"];

pub struct SecureArgParser;

impl SecureArgParser {
    /// Validates a free-form string argument (a name, not a path) contains
    /// no shell metacharacters or traversal sequences.
    pub fn validate_argument(value: &str) -> Result<(), ParseError> {
        for pattern in DANGEROUS_PATTERNS {
            if value.contains(pattern) {
                return Err(ParseError::InvalidValue {
                    arg: value.to_string(),
                    reason: format!("contains disallowed sequence '{pattern}'"),
                });
            }
        }
        Ok(())
    }

    /// Validates that `value` names an existing, readable file and returns
    /// its canonicalized form.
    pub fn validate_path(value: &str) -> Result<PathBuf, ParseError> {
        Self::validate_argument(value)?;
        let path = PathBuf::from(value);
        path.canonicalize().map_err(|e| ParseError::InvalidPath {
            path: value.to_string(),
            reason: e.to_string(),
        })
    }

    /// Parses a `KEY=VALUE` string into its parts.
    pub fn parse_key_value(value: &str) -> Result<(String, String), ParseError> {
        match value.split_once('=') {
            Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
            _ => Err(ParseError::MalformedInput(value.to_string())),
        }
    }
}
