// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Node Registry
//!
//! Maps a pipeline document's `type` strings to node constructors.
//!
//! ## Two-Map Design
//!
//! The registry keeps two maps, mirroring the Python engine it's descended
//! from:
//! - **Binding table** (`bindings`): every `type` string that's been
//!   registered, paired with the constructor that knows how to build it.
//!   Populated once, at startup, by every built-in and plugin registration
//!   call.
//! - **Live cache** (`live`): constructors actually invoked during this
//!   process's lifetime. Kept separate so `registered_types()` can report the
//!   full catalog (for `list-node-types`) while `resolved_types()` reports only
//!   what's actually been instantiated, useful for diagnostics.
//!
//! A constructor takes the node's instance name and its `params.config`
//! value, and returns a boxed [`Node`] or an [`EngineError::MissingRequiredConfig`]
//! if the config doesn't satisfy what the node requires. Separately, the
//! registry itself rejects a constructor that builds a node whose
//! [`Node::name`](engine_domain::Node::name) doesn't match the name it was
//! asked to build, with [`EngineError::InvalidNodeBinding`] — the Rust
//! equivalent of the original reflective lookup finding a name bound to
//! something other than a usable class.

use engine_domain::{ConfigValue, EngineError, Node};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// A node constructor: given an instance name and its config block, builds a
/// boxed node or reports why it couldn't.
pub type NodeConstructor =
    Arc<dyn Fn(&str, &ConfigValue) -> Result<Box<dyn Node>, EngineError> + Send + Sync>;

/// The pipeline-wide registry of node types.
#[derive(Clone)]
pub struct NodeRegistry {
    bindings: Arc<RwLock<HashMap<String, NodeConstructor>>>,
    live: Arc<RwLock<Vec<String>>>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self {
            bindings: Arc::new(RwLock::new(HashMap::new())),
            live: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Registers a node type under `type_name`. Registering the same name
    /// twice replaces the earlier constructor, matching the original
    /// module-scan behavior of last-writer-wins.
    pub fn register(&self, type_name: impl Into<String>, constructor: NodeConstructor) {
        self.bindings.write().insert(type_name.into(), constructor);
    }

    /// Looks up and invokes the constructor for `type_name`.
    ///
    /// Returns [`EngineError::UnknownNodeType`] if no binding exists, and
    /// records the resolved type name in the live cache on success.
    pub fn instantiate(
        &self,
        type_name: &str,
        node_name: &str,
        config: &ConfigValue,
    ) -> Result<Box<dyn Node>, EngineError> {
        let ctor = {
            let bindings = self.bindings.read();
            bindings
                .get(type_name)
                .cloned()
                .ok_or_else(|| EngineError::UnknownNodeType(type_name.to_string()))?
        };
        let node = ctor(node_name, config)?;
        if node.name() != node_name {
            return Err(EngineError::InvalidNodeBinding {
                type_name: type_name.to_string(),
                reason: format!(
                    "constructor for type {type_name} built a node named {:?} instead of the requested {node_name:?}",
                    node.name()
                ),
            });
        }
        self.live.write().push(type_name.to_string());
        Ok(node)
    }

    /// Every `type` string registered, in no particular order. Backs the
    /// `list-node-types` CLI command.
    pub fn registered_types(&self) -> Vec<String> {
        self.bindings.read().keys().cloned().collect()
    }

    /// Every `type` string actually instantiated so far in this process.
    pub fn resolved_types(&self) -> Vec<String> {
        self.live.read().clone()
    }

    pub fn is_registered(&self, type_name: &str) -> bool {
        self.bindings.read().contains_key(type_name)
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
