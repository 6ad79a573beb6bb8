// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Execution Engine
//!
//! Traverses the wired graph from the entry node, running each reached node
//! exactly once per distinct input-set delivery, with bounded parallelism.
//!
//! ## State
//!
//! - `nodes`: the graph, name to node.
//! - `edges`: producer name to its ordered list of consumer names.
//! - `buffers`: the per-node input buffer, guarded by one `parking_lot::Mutex`
//!   held only across the readiness decision — never across `run` itself.
//! - `worker_semaphore`: caps the number of concurrently executing nodes.
//!
//! `run`'s own future recurses through [`deliver`]/[`execute`]/[`propagate`];
//! because `deliver` can call itself (directly, or via a spawned task), it is
//! boxed to give the recursive `async fn` a known size.

use crate::loader::LoadedPipeline;
use engine_domain::{EngineError, EngineLogger, Node, NodeOutput, NodeValue, NoOpLogger};
use futures::future::BoxFuture;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// The graph, plus the shared state needed to run it.
pub struct ExecutionEngine {
    nodes: HashMap<String, Arc<dyn Node>>,
    edges: HashMap<String, Vec<String>>,
    entrypoint: String,
    buffers: Mutex<HashMap<String, BTreeMap<String, NodeValue>>>,
    worker_semaphore: Semaphore,
    logger: Arc<dyn EngineLogger>,
}

/// Default bound on concurrently active output propagations, used when the
/// caller doesn't specify one.
pub const DEFAULT_WORKER_LIMIT: usize = 4;

impl ExecutionEngine {
    /// Builds an engine from a loaded pipeline, with `worker_limit` bounding
    /// concurrent deliveries dispatched from a list-valued result, and
    /// `logger` receiving every node's diagnostic output for this run.
    pub fn new(loaded: LoadedPipeline, worker_limit: usize, logger: Arc<dyn EngineLogger>) -> Arc<Self> {
        Arc::new(Self {
            nodes: loaded.nodes,
            edges: loaded.edges,
            entrypoint: loaded.entrypoint,
            buffers: Mutex::new(HashMap::new()),
            worker_semaphore: Semaphore::new(worker_limit.max(1)),
            logger,
        })
    }

    /// Like [`ExecutionEngine::new`], with a no-op logger and the default
    /// worker limit.
    pub fn from_loaded(loaded: LoadedPipeline) -> Arc<Self> {
        Self::new(loaded, DEFAULT_WORKER_LIMIT, Arc::new(NoOpLogger))
    }

    pub fn entrypoint(&self) -> &str {
        &self.entrypoint
    }

    pub fn node_names(&self) -> Vec<String> {
        self.nodes.keys().cloned().collect()
    }

    /// Runs the pipeline starting at its entrypoint.
    ///
    /// If `initial_input` is a non-empty mapping, one delivery per `(key,
    /// value)` pair is dispatched concurrently; otherwise a single bare
    /// delivery kicks off the entry node. When `wait` is true, blocks until
    /// every dispatched delivery has settled and then runs the finalize
    /// phase.
    ///
    /// The engine's current logger is the one propagated to every node this
    /// run, passed as an argument into each `run`/`finalize` call rather than
    /// stored on the node — the wired graph stays immutable across runs even
    /// though the logger can differ between them.
    pub async fn run(
        self: &Arc<Self>,
        initial_input: Option<BTreeMap<String, NodeValue>>,
        wait: bool,
    ) -> Result<(), EngineError> {
        self.logger.info(&format!("starting run at entrypoint {}", self.entrypoint));

        let mut handles = Vec::new();
        match initial_input {
            Some(map) if !map.is_empty() => {
                for (key, value) in map {
                    let engine = Arc::clone(self);
                    let entry = self.entrypoint.clone();
                    handles.push(tokio::spawn(async move { engine.deliver(entry, Some(key), Some(value)).await }));
                }
            }
            _ => {
                let engine = Arc::clone(self);
                let entry = self.entrypoint.clone();
                handles.push(tokio::spawn(async move { engine.deliver(entry, None, None).await }));
            }
        }

        if !wait {
            return Ok(());
        }

        for handle in handles {
            handle
                .await
                .map_err(|e| EngineError::node_execution_failed(&self.entrypoint, e))??;
        }

        self.finalize_phase().await
    }

    /// `deliver(target, key, value)`: stores the delivery under `key` (if
    /// present), decides readiness under the buffer lock, and executes the
    /// target if ready.
    pub fn deliver(
        self: &Arc<Self>,
        target: String,
        key: Option<String>,
        value: Option<NodeValue>,
    ) -> BoxFuture<'_, Result<(), EngineError>> {
        Box::pin(async move {
            let Some(node) = self.nodes.get(&target).cloned() else {
                // Not wired to anything real; nothing to do.
                return Ok(());
            };

            let required = node.required_inputs().map(|r| r.to_vec());
            let req_nonempty = required.as_ref().filter(|r| !r.is_empty());

            let exec_input = {
                let mut buffers = self.buffers.lock();
                let buffer = buffers.entry(target.clone()).or_default();
                if let (Some(k), Some(v)) = (&key, &value) {
                    buffer.insert(k.clone(), v.clone());
                }

                match req_nonempty {
                    None => Some(None),
                    Some(req) => {
                        let ready = req.iter().all(|k| buffer.contains_key(k));
                        if ready {
                            let input = req
                                .iter()
                                .map(|k| (k.clone(), buffer[k].clone()))
                                .collect::<BTreeMap<_, _>>();
                            Some(Some(input))
                        } else {
                            None
                        }
                    }
                }
            };

            let Some(exec_input) = exec_input else {
                return Ok(());
            };

            self.execute(target, exec_input).await
        })
    }

    async fn execute(
        self: &Arc<Self>,
        target: String,
        input: Option<BTreeMap<String, NodeValue>>,
    ) -> Result<(), EngineError> {
        let node = self.nodes[&target].clone();
        let _permit = self
            .worker_semaphore
            .acquire()
            .await
            .map_err(|_| EngineError::node_execution_failed(&target, "worker pool closed"))?;

        self.logger.debug(&format!("executing node {target}"));
        let output = node
            .run(input, self.logger.as_ref())
            .await
            .map_err(|e| EngineError::node_execution_failed(&target, e))?;

        self.buffers.lock().remove(&target);

        if output.is_none() && node.defer_output() {
            self.logger.debug(&format!("node {target} deferred output until finalize"));
            return Ok(());
        }

        self.propagate(&target, output).await
    }

    async fn propagate(self: &Arc<Self>, producer: &str, output: NodeOutput) -> Result<(), EngineError> {
        let children = self.edges.get(producer).cloned().unwrap_or_default();
        if children.is_empty() {
            return Ok(());
        }

        match output {
            NodeOutput::None => Ok(()),
            NodeOutput::Value(value) => {
                for child in &children {
                    self.deliver(child.clone(), None, Some(value.clone())).await?;
                }
                Ok(())
            }
            NodeOutput::Map(map) => {
                for child in &children {
                    for (key, value) in &map {
                        self.deliver(child.clone(), Some(key.clone()), Some(value.clone())).await?;
                    }
                }
                Ok(())
            }
            NodeOutput::Pairs(pairs) => {
                let mut handles = Vec::with_capacity(children.len() * pairs.len());
                for child in &children {
                    for (key, value) in &pairs {
                        let engine = Arc::clone(self);
                        let child = child.clone();
                        let key = key.clone();
                        let value = value.clone();
                        handles.push(tokio::spawn(
                            async move { engine.deliver(child, Some(key), Some(value)).await },
                        ));
                    }
                }
                for handle in handles {
                    handle
                        .await
                        .map_err(|e| EngineError::node_execution_failed(producer, e))??;
                }
                Ok(())
            }
        }
    }

    async fn finalize_phase(self: &Arc<Self>) -> Result<(), EngineError> {
        let deferred: Vec<String> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.defer_output())
            .map(|(name, _)| name.clone())
            .collect();

        for name in deferred {
            let node = self.nodes[&name].clone();
            self.logger.debug(&format!("finalizing node {name}"));
            let output = node
                .finalize(self.logger.as_ref())
                .await
                .map_err(|e| EngineError::node_execution_failed(&name, e))?;
            if !output.is_none() {
                self.propagate(&name, output).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::build_pipeline_from_yaml;
    use crate::nodes::register_builtin_nodes;
    use crate::registry::NodeRegistry;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn registry_with_builtins() -> NodeRegistry {
        let registry = NodeRegistry::new();
        register_builtin_nodes(&registry);
        registry
    }

    // S1: linear chain A -> B -> C, entry with no required_inputs executes once.
    #[tokio::test]
    async fn s1_linear_chain_runs_entry_once() {
        let registry = registry_with_builtins();
        let yaml = r#"
pipeline:
  name: s1
  entrypoint: a
  nodes:
    - name: a
      type: passthrough
      outputs: [b]
    - name: b
      type: passthrough
      outputs: [c]
    - name: c
      type: passthrough
"#;
        let loaded = build_pipeline_from_yaml(yaml, &registry).unwrap();
        let engine = ExecutionEngine::from_loaded(loaded);
        let mut input = BTreeMap::new();
        input.insert("value".to_string(), serde_json::json!(1));
        engine.run(Some(input), true).await.unwrap();
    }

    // S2: fan-in join, J requires both data_1 and data_2.
    #[tokio::test]
    async fn s2_fan_in_join_executes_once_with_both_keys() {
        let registry = registry_with_builtins();
        register_test_counter(&registry);

        let yaml = r#"
pipeline:
  name: s2
  entrypoint: m
  nodes:
    - name: m
      type: passthrough
      outputs: [j]
    - name: j
      type: counting_join
      params:
        config:
          required: [data_1, data_2]
"#;
        let loaded = build_pipeline_from_yaml(yaml, &registry).unwrap();
        let engine = ExecutionEngine::from_loaded(loaded);

        engine.deliver("j".to_string(), Some("data_1".to_string()), Some(serde_json::json!(1))).await.unwrap();
        assert_eq!(COUNTER.load(Ordering::SeqCst), 0);
        engine.deliver("j".to_string(), Some("data_2".to_string()), Some(serde_json::json!(2))).await.unwrap();
        assert_eq!(COUNTER.load(Ordering::SeqCst), 1);
    }

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    struct CountingJoinNode {
        required: Vec<String>,
    }

    #[async_trait::async_trait]
    impl Node for CountingJoinNode {
        fn name(&self) -> &str {
            "counting_join"
        }
        fn required_inputs(&self) -> Option<&[String]> {
            Some(&self.required)
        }
        async fn run(
            &self,
            inputs: Option<BTreeMap<String, NodeValue>>,
            _logger: &dyn EngineLogger,
        ) -> Result<NodeOutput, EngineError> {
            assert!(inputs.is_some());
            COUNTER.fetch_add(1, Ordering::SeqCst);
            Ok(NodeOutput::None)
        }
    }

    fn register_test_counter(registry: &NodeRegistry) {
        registry.register(
            "counting_join",
            Arc::new(|_name, config| {
                let required = config
                    .get("required")
                    .and_then(|v| v.as_list())
                    .map(|l| l.iter().filter_map(|v| v.as_str().map(str::to_string)).collect())
                    .unwrap_or_default();
                Ok(Box::new(CountingJoinNode { required }) as Box<dyn Node>)
            }),
        );
    }

    // S4: deferred emission via finalize.
    #[tokio::test]
    async fn s4_deferred_node_emits_only_from_finalize() {
        let registry = registry_with_builtins();
        let seen: Arc<Mutex<Vec<NodeValue>>> = Arc::new(Mutex::new(Vec::new()));
        register_recording_sink(&registry, "recording_sink", seen.clone());

        let yaml = r#"
pipeline:
  name: s4
  entrypoint: d
  nodes:
    - name: d
      type: buffer
      outputs: [sink]
    - name: sink
      type: recording_sink
"#;
        let loaded = build_pipeline_from_yaml(yaml, &registry).unwrap();
        let engine = ExecutionEngine::from_loaded(loaded);

        engine
            .deliver("d".to_string(), Some("value".to_string()), Some(serde_json::json!(42)))
            .await
            .unwrap();
        assert!(seen.lock().is_empty(), "sink must not run before finalize");

        engine.finalize_phase().await.unwrap();
        assert_eq!(*seen.lock(), vec![serde_json::json!(42)]);
    }

    struct RecordingSinkNode {
        name: String,
        required: Vec<String>,
        seen: Arc<Mutex<Vec<NodeValue>>>,
    }

    #[async_trait::async_trait]
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
            if let Some(mut map) = inputs {
                if let Some(v) = map.remove("value") {
                    self.seen.lock().push(v);
                }
            }
            Ok(NodeOutput::None)
        }
    }

    fn register_recording_sink(registry: &NodeRegistry, type_name: &str, seen: Arc<Mutex<Vec<NodeValue>>>) {
        registry.register(
            type_name,
            Arc::new(move |name, _config| {
                Ok(Box::new(RecordingSinkNode {
                    name: name.to_string(),
                    required: vec!["value".to_string()],
                    seen: seen.clone(),
                }) as Box<dyn Node>)
            }),
        );
    }
}
