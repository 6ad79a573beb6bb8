// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Bootstrap Configuration
//!
//! Layers configuration sources in increasing precedence: a bundled default,
//! an optional `engine.toml`/`engine.yaml` file, environment variables
//! prefixed `ENGINE_`, and finally explicit CLI flags (applied by the caller
//! after [`load`] returns).
//!
//! Uses the `config` crate the way the teacher's infrastructure layer builds
//! its own layered settings.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Engine-wide settings sourced from file/env, before CLI overrides are
/// applied.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Default bound on concurrent node deliveries, used when `--workers`
    /// is not given on the command line.
    #[serde(default = "default_workers")]
    pub default_workers: usize,

    /// Whether `run` waits for the pipeline to drain before returning,
    /// absent an explicit `--no-wait` flag.
    #[serde(default = "default_wait")]
    pub default_wait: bool,
}

fn default_workers() -> usize {
    8
}

fn default_wait() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_workers: default_workers(),
            default_wait: default_wait(),
        }
    }
}

/// Loads configuration from an optional file path, layered over environment
/// variables and a built-in default.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but fails to parse, or if a
/// value fails to deserialize into [`EngineConfig`].
pub fn load(config_path: Option<&Path>) -> Result<EngineConfig, ConfigError> {
    let mut builder = Config::builder()
        .set_default("default_workers", default_workers() as i64)?
        .set_default("default_wait", default_wait())?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path));
    } else {
        builder = builder
            .add_source(File::with_name("engine").required(false))
            .add_source(File::with_name("/etc/engine/engine").required(false));
    }

    builder = builder.add_source(Environment::with_prefix("ENGINE"));

    builder.build()?.try_deserialize()
}
