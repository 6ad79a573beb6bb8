//! The node-type registry: binding table and live cache.

mod node_registry;

pub use node_registry::{NodeConstructor, NodeRegistry};
