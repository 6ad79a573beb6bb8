// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Composition Root
//!
//! Parses and validates CLI arguments, wires signal handling and the node
//! registry, dispatches to the requested subcommand, and maps the outcome to
//! a process exit code.

use engine_bootstrap::cli::ValidatedCommand;
use engine_bootstrap::exit_code::{map_parse_error_to_exit_code, result_to_exit_code, ExitCode};
use engine_bootstrap::logger::TracingEngineLogger;
use engine_bootstrap::shutdown::{CancellationToken, ShutdownCoordinator, DEFAULT_GRACE_PERIOD_SECS};
use engine_bootstrap::{bootstrap_cli, config, signals};
use engine_core::nodes::register_builtin_nodes;
use engine_core::{build_pipeline_from_yaml, ExecutionEngine, NodeRegistry};
use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> ProcessExitCode {
    let validated = match bootstrap_cli() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("argument error: {e}");
            return to_process_code(map_parse_error_to_exit_code(&e));
        }
    };

    init_tracing(validated.verbose);

    let coordinator = Arc::new(ShutdownCoordinator::new(Duration::from_secs(DEFAULT_GRACE_PERIOD_SECS)));
    let cancel = coordinator.token();
    signals::install(coordinator);

    let config_path = validated.config.clone();
    let outcome = match validated.command {
        ValidatedCommand::Run { pipeline, input, no_wait, workers } => {
            run_pipeline(pipeline, input, no_wait, workers, config_path, cancel).await
        }
        ValidatedCommand::Validate { pipeline } => validate_pipeline(pipeline),
        ValidatedCommand::ListNodeTypes => {
            list_node_types();
            Ok(())
        }
    };

    if let Err(ref e) = outcome {
        eprintln!("error: {e}");
    }

    to_process_code(result_to_exit_code(&outcome))
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}

fn to_process_code(code: ExitCode) -> ProcessExitCode {
    ProcessExitCode::from(code.code() as u8)
}

fn registry_with_builtins() -> NodeRegistry {
    let registry = NodeRegistry::new();
    register_builtin_nodes(&registry);
    registry
}

async fn run_pipeline(
    pipeline: PathBuf,
    input: Vec<(String, String)>,
    no_wait: bool,
    workers: Option<usize>,
    config_path: Option<PathBuf>,
    cancel: CancellationToken,
) -> Result<(), engine_domain::EngineError> {
    let settings = config::load(config_path.as_deref())
        .map_err(|e| engine_domain::EngineError::SchemaError(vec![format!("configuration error: {e}")]))?;

    let source = std::fs::read_to_string(&pipeline)?;
    let registry = registry_with_builtins();
    let loaded = build_pipeline_from_yaml(&source, &registry)?;

    let logger: Arc<dyn engine_domain::EngineLogger> = Arc::new(TracingEngineLogger::new());
    let worker_limit = workers.unwrap_or(settings.default_workers).max(1);
    let engine = ExecutionEngine::new(loaded, worker_limit, logger);

    let initial_input = if input.is_empty() {
        None
    } else {
        Some(
            input
                .into_iter()
                .map(|(k, v)| (k, serde_json::Value::String(v)))
                .collect(),
        )
    };

    // CLI `--no-wait` always wins; absent that, the layered config decides.
    let wait = if no_wait { false } else { settings.default_wait };

    tokio::select! {
        result = engine.run(initial_input, wait) => result,
        _ = cancel.cancelled() => {
            tracing::warn!("run interrupted by shutdown signal before completion");
            Ok(())
        }
    }
}

fn validate_pipeline(pipeline: std::path::PathBuf) -> Result<(), engine_domain::EngineError> {
    let source = std::fs::read_to_string(&pipeline)?;
    let registry = registry_with_builtins();
    let loaded = build_pipeline_from_yaml(&source, &registry)?;
    println!("pipeline '{}' is valid ({} node(s))", loaded.name, loaded.nodes.len());
    Ok(())
}

fn list_node_types() {
    let registry = registry_with_builtins();
    for type_name in registry.registered_types() {
        println!("{type_name}");
    }
}
