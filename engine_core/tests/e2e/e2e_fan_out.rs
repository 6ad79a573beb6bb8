//! S3: fan-out by key. A single `run` returning a multi-key mapping
//! delivers every key to every wired child; a child only actually reacts
//! once the keys it declared as `required_inputs` have all arrived, so two
//! children wired to the same producer can each pick out a different slice
//! of the same emission.

use async_trait::async_trait;
use engine_core::nodes::register_builtin_nodes;
use engine_core::{build_pipeline_from_yaml, ExecutionEngine, NodeRegistry};
use engine_domain::{EngineError, EngineLogger, Node, NodeOutput, NodeValue};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

struct SplitterNode {
    name: String,
}

#[async_trait]
impl Node for SplitterNode {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(
        &self,
        _inputs: Option<BTreeMap<String, NodeValue>>,
        _logger: &dyn EngineLogger,
    ) -> Result<NodeOutput, EngineError> {
        let mut out = BTreeMap::new();
        out.insert("x".to_string(), serde_json::json!(1));
        out.insert("y".to_string(), serde_json::json!(2));
        Ok(NodeOutput::Map(out))
    }
}

struct RecordingSinkNode {
    name: String,
    key: &'static str,
    required: Vec<String>,
    seen: Arc<Mutex<Vec<NodeValue>>>,
}

#[async_trait]
impl Node for RecordingSinkNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn required_inputs(&self) -> Option<&[String]> {
        Some(&self.required)
    }

    async fn run(
        &self,
        inputs: Option<BTreeMap<String, NodeValue>>,
        _logger: &dyn EngineLogger,
    ) -> Result<NodeOutput, EngineError> {
        if let Some(map) = inputs {
            if let Some(v) = map.get(self.key) {
                self.seen.lock().unwrap().push(v.clone());
            }
        }
        Ok(NodeOutput::None)
    }
}

#[tokio::test]
async fn fan_out_routes_each_key_to_the_child_that_requires_it() {
    let registry = NodeRegistry::new();
    register_builtin_nodes(&registry);

    let seen_x = Arc::new(Mutex::new(Vec::new()));
    let seen_y = Arc::new(Mutex::new(Vec::new()));

    registry.register(
        "splitter",
        Arc::new(|name, _config| Ok(Box::new(SplitterNode { name: name.to_string() }) as Box<dyn Node>)),
    );

    {
        let seen_x = seen_x.clone();
        registry.register(
            "sink_x",
            Arc::new(move |name, _config| {
                Ok(Box::new(RecordingSinkNode {
                    name: name.to_string(),
                    key: "x",
                    required: vec!["x".to_string()],
                    seen: seen_x.clone(),
                }) as Box<dyn Node>)
            }),
        );
    }
    {
        let seen_y = seen_y.clone();
        registry.register(
            "sink_y",
            Arc::new(move |name, _config| {
                Ok(Box::new(RecordingSinkNode {
                    name: name.to_string(),
                    key: "y",
                    required: vec!["y".to_string()],
                    seen: seen_y.clone(),
                }) as Box<dyn Node>)
            }),
        );
    }

    let yaml = r#"
pipeline:
  name: fanout
  entrypoint: splitter
  nodes:
    - name: splitter
      type: splitter
      outputs: [join_x, join_y]
    - name: join_x
      type: sink_x
    - name: join_y
      type: sink_y
"#;
    let loaded = build_pipeline_from_yaml(yaml, &registry).unwrap();
    let engine = ExecutionEngine::from_loaded(loaded);
    engine.run(None, true).await.unwrap();

    assert_eq!(*seen_x.lock().unwrap(), vec![serde_json::json!(1)]);
    assert_eq!(*seen_y.lock().unwrap(), vec![serde_json::json!(2)]);
}
