//! S6: an edge between a producer and consumer with incompatible declared
//! types is rejected at load time, before any node runs.

use async_trait::async_trait;
use engine_core::{build_pipeline_from_yaml, NodeRegistry};
use engine_domain::{EngineError, EngineLogger, Node, NodeOutput, NodeValue, TypeDescriptor};
use std::collections::BTreeMap;
use std::sync::Arc;

struct TypedNode {
    name: String,
    output_type: TypeDescriptor,
    input_type: TypeDescriptor,
}

#[async_trait]
impl Node for TypedNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn output_type(&self) -> TypeDescriptor {
        self.output_type.clone()
    }

    fn input_type(&self) -> TypeDescriptor {
        self.input_type.clone()
    }

    async fn run(
        &self,
        _inputs: Option<BTreeMap<String, NodeValue>>,
        _logger: &dyn EngineLogger,
    ) -> Result<NodeOutput, EngineError> {
        Ok(NodeOutput::None)
    }
}

#[test]
fn mismatched_edge_types_abort_the_build() {
    let registry = NodeRegistry::new();
    registry.register(
        "produces_int",
        Arc::new(|name, _config| {
            Ok(Box::new(TypedNode {
                name: name.to_string(),
                output_type: TypeDescriptor::named("int"),
                input_type: TypeDescriptor::Any,
            }) as Box<dyn Node>)
        }),
    );
    registry.register(
        "consumes_string",
        Arc::new(|name, _config| {
            Ok(Box::new(TypedNode {
                name: name.to_string(),
                output_type: TypeDescriptor::Any,
                input_type: TypeDescriptor::named("string"),
            }) as Box<dyn Node>)
        }),
    );

    let yaml = r#"
pipeline:
  name: mismatch
  entrypoint: a
  nodes:
    - name: a
      type: produces_int
      outputs: [b]
    - name: b
      type: consumes_string
"#;
    let err = build_pipeline_from_yaml(yaml, &registry).unwrap_err();
    match err {
        EngineError::EdgeTypeError { producer, consumer, .. } => {
            assert_eq!(producer, "a");
            assert_eq!(consumer, "b");
        }
        other => panic!("expected EdgeTypeError, got {other:?}"),
    }
}
