// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # CLI Structure
//!
//! `clap`-derived argument structure. Parsing here is purely syntactic; see
//! `validator` for the security and range checks applied afterward.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Declarative data-pipeline execution engine.
#[derive(Parser, Debug)]
#[command(name = "engine", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to an `engine.toml`/`engine.yaml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a pipeline document, build it, and run it to completion.
    Run {
        /// Path to the pipeline YAML document.
        pipeline: PathBuf,

        /// Initial input delivered to the entrypoint node, as `KEY=VALUE`.
        /// May be repeated.
        #[arg(long = "input", value_name = "KEY=VALUE")]
        input: Vec<String>,

        /// Return immediately after triggering the entrypoint instead of
        /// waiting for the run to drain.
        #[arg(long)]
        no_wait: bool,

        /// Override the configured bound on concurrent node deliveries.
        #[arg(long)]
        workers: Option<usize>,
    },

    /// Parse and validate a pipeline document without running it.
    Validate {
        /// Path to the pipeline YAML document.
        pipeline: PathBuf,
    },

    /// List every node type registered in the built-in registry.
    ListNodeTypes,
}

/// Parses `std::env::args`, exiting the process on a usage error (clap's
/// default behavior for `--help`/`--version`/malformed arguments).
pub fn parse_cli() -> Cli {
    Cli::parse()
}
