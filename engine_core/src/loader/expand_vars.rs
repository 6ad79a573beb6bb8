// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Loader Phase 2 — Variable Expansion
//!
//! Recursively walks the parsed YAML tree, substituting every `${NAME}`
//! occurrence in string scalars with the value of the process environment
//! variable `NAME`. Fails with [`EngineError::UnresolvedVariable`] the first
//! time a referenced name is undefined.

use engine_domain::EngineError;
use regex::Regex;
use std::sync::LazyLock;

static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{(\w+)\}").unwrap());

/// Environment lookup, abstracted so tests can inject a fake environment
/// instead of mutating the process's real one.
pub trait EnvLookup {
    fn get(&self, name: &str) -> Option<String>;
}

/// Looks up variables in the real process environment.
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Expands every `${NAME}` token in every string scalar of `value`.
pub fn expand_vars(value: &serde_yaml::Value, env: &dyn EnvLookup) -> Result<serde_yaml::Value, EngineError> {
    match value {
        serde_yaml::Value::String(s) => Ok(serde_yaml::Value::String(expand_string(s, env)?)),
        serde_yaml::Value::Sequence(seq) => {
            let mut out = Vec::with_capacity(seq.len());
            for item in seq {
                out.push(expand_vars(item, env)?);
            }
            Ok(serde_yaml::Value::Sequence(out))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut out = serde_yaml::Mapping::new();
            for (k, v) in map {
                let expanded_key = expand_vars(k, env)?;
                let expanded_value = expand_vars(v, env)?;
                out.insert(expanded_key, expanded_value);
            }
            Ok(serde_yaml::Value::Mapping(out))
        }
        other => Ok(other.clone()),
    }
}

fn expand_string(s: &str, env: &dyn EnvLookup) -> Result<String, EngineError> {
    let mut last_err = None;
    let result = VAR_PATTERN.replace_all(s, |caps: &regex::Captures| {
        let name = &caps[1];
        match env.get(name) {
            Some(v) => v,
            None => {
                last_err = Some(EngineError::UnresolvedVariable(name.to_string()));
                String::new()
            }
        }
    });
    match last_err {
        Some(err) => Err(err),
        None => Ok(result.into_owned()),
    }
}
