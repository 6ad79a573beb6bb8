//! S5: variable expansion, success and failure, exercised through the public
//! `build_pipeline_from_yaml` entry point (process environment, not the
//! injectable test double used by the loader's own unit tests).

use engine_core::nodes::register_builtin_nodes;
use engine_core::{build_pipeline_from_yaml, NodeRegistry};
use engine_domain::EngineError;

fn registry() -> NodeRegistry {
    let registry = NodeRegistry::new();
    register_builtin_nodes(&registry);
    registry
}

#[test]
fn defined_variable_resolves_and_the_pipeline_builds() {
    std::env::set_var("E2E_ENTRY_NAME", "a");
    let yaml = r#"
pipeline:
  name: demo
  entrypoint: ${E2E_ENTRY_NAME}
  nodes:
    - name: ${E2E_ENTRY_NAME}
      type: passthrough
"#;
    let loaded = build_pipeline_from_yaml(yaml, &registry()).unwrap();
    std::env::remove_var("E2E_ENTRY_NAME");
    assert_eq!(loaded.entrypoint, "a");
}

#[test]
fn undefined_variable_aborts_the_build() {
    std::env::remove_var("E2E_DOES_NOT_EXIST");
    let yaml = r#"
pipeline:
  name: demo
  entrypoint: ${E2E_DOES_NOT_EXIST}
  nodes:
    - name: a
      type: passthrough
"#;
    let err = build_pipeline_from_yaml(yaml, &registry()).unwrap_err();
    assert!(matches!(err, EngineError::UnresolvedVariable(var) if var == "E2E_DOES_NOT_EXIST"));
}
