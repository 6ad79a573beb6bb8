//! The node contract every pipeline stage implements.

mod node_trait;

pub use node_trait::{Node, NodeOutput, NodeValue};
