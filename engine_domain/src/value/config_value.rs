// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Configuration Value Tree
//!
//! A pipeline document's `params.config` block is free-form: each node type
//! defines its own shape and the loader doesn't know it in advance. `ConfigValue`
//! is the tagged tree that block is parsed into, handed to a node's constructor
//! unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A dynamically-typed configuration value.
///
/// Mirrors the shape YAML/JSON can produce. Node constructors pattern-match on
/// this to pull out what they need, returning
/// [`EngineError::MissingRequiredConfig`](crate::error::EngineError::MissingRequiredConfig)
/// when a required key is absent or of the wrong shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<ConfigValue>),
    Map(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, ConfigValue>> {
        match self {
            ConfigValue::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::List(l) => Some(l.as_slice()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Looks up `key` in a `Map` variant, returning `None` for any other
    /// variant or a missing key.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.as_map().and_then(|m| m.get(key))
    }
}

impl Default for ConfigValue {
    fn default() -> Self {
        ConfigValue::Map(BTreeMap::new())
    }
}
