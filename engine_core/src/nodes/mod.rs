// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Demonstration Node Plugins
//!
//! Trivial node types that exist only to exercise the engine end-to-end —
//! no business-specific readers or writers. Each registers itself into a
//! [`NodeRegistry`] via [`register_builtin_nodes`].

mod buffer;
mod const_node;
mod debug;
mod join;
mod passthrough;

pub use buffer::BufferNode;
pub use const_node::ConstNode;
pub use debug::DebugNode;
pub use join::JoinNode;
pub use passthrough::PassthroughNode;

use crate::registry::NodeRegistry;
use engine_domain::Node;
use std::sync::Arc;

/// Registers every demonstration node type under its conventional name.
pub fn register_builtin_nodes(registry: &NodeRegistry) {
    registry.register("passthrough", Arc::new(|name, _config| Ok(Box::new(PassthroughNode::new(name)) as Box<dyn Node>)));
    registry.register("debug", Arc::new(|name, _config| Ok(Box::new(DebugNode::new(name)) as Box<dyn Node>)));
    registry.register("const", Arc::new(|name, config| Ok(Box::new(ConstNode::new(name, config)?) as Box<dyn Node>)));
    registry.register("join", Arc::new(|name, config| Ok(Box::new(JoinNode::new(name, config)?) as Box<dyn Node>)));
    registry.register("buffer", Arc::new(|name, _config| Ok(Box::new(BufferNode::new(name)) as Box<dyn Node>)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_all_five_builtin_types() {
        let registry = NodeRegistry::new();
        register_builtin_nodes(&registry);
        let types = registry.registered_types();
        for expected in ["passthrough", "debug", "const", "join", "buffer"] {
            assert!(types.contains(&expected.to_string()), "missing {expected}");
        }
    }
}
