// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Command-Line Interface Module
//!
//! Bootstrap-layer CLI handling with security-first design.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  1. parser::parse_cli()             │  Parse CLI with clap
//! └─────────────────┬───────────────────┘
//!                   ↓
//! ┌─────────────────────────────────────┐
//! │  2. validate_cli()                  │  Security validation
//! └─────────────────┬───────────────────┘
//!                   ↓
//! ┌─────────────────────────────────────┐
//! │  3. ValidatedCli                    │  Safe, validated config
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `parser` - CLI structure and clap parsing
//! - `validator` - Security validation layer

pub mod parser;
pub mod validator;

pub use parser::{parse_cli, Cli, Commands};
pub use validator::{ParseError, SecureArgParser};

use std::path::PathBuf;

/// Validated CLI configuration.
///
/// All paths are canonicalized and all values are range-checked before the
/// composition root ever sees them.
#[derive(Debug, Clone)]
pub struct ValidatedCli {
    pub command: ValidatedCommand,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}

/// Validated command variants, one per subcommand in [`Commands`].
#[derive(Debug, Clone)]
pub enum ValidatedCommand {
    Run {
        pipeline: PathBuf,
        input: Vec<(String, String)>,
        no_wait: bool,
        workers: Option<usize>,
    },
    Validate {
        pipeline: PathBuf,
    },
    ListNodeTypes,
}

/// Parses and validates CLI arguments in one step.
///
/// # Errors
///
/// Returns [`ParseError`] if any path or value fails validation.
pub fn parse_and_validate() -> Result<ValidatedCli, ParseError> {
    let cli = parse_cli();
    validate_cli(cli)
}

fn validate_cli(cli: Cli) -> Result<ValidatedCli, ParseError> {
    let config = if let Some(ref path) = cli.config {
        SecureArgParser::validate_argument(&path.to_string_lossy())?;
        Some(path.clone())
    } else {
        None
    };

    let command = match cli.command {
        Commands::Run { pipeline, input, no_wait, workers } => {
            let validated_pipeline = SecureArgParser::validate_path(&pipeline.to_string_lossy())?;

            let mut validated_input = Vec::with_capacity(input.len());
            for entry in &input {
                validated_input.push(SecureArgParser::parse_key_value(entry)?);
            }

            if let Some(w) = workers {
                if w == 0 || w > 1024 {
                    return Err(ParseError::InvalidValue {
                        arg: "workers".to_string(),
                        reason: "must be between 1 and 1024".to_string(),
                    });
                }
            }

            ValidatedCommand::Run {
                pipeline: validated_pipeline,
                input: validated_input,
                no_wait,
                workers,
            }
        }
        Commands::Validate { pipeline } => {
            let validated_pipeline = SecureArgParser::validate_path(&pipeline.to_string_lossy())?;
            ValidatedCommand::Validate { pipeline: validated_pipeline }
        }
        Commands::ListNodeTypes => ValidatedCommand::ListNodeTypes,
    };

    Ok(ValidatedCli {
        command,
        verbose: cli.verbose,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workers_of_zero_is_rejected() {
        let cli = Cli {
            command: Commands::Run {
                pipeline: PathBuf::from("Cargo.toml"),
                input: vec![],
                no_wait: false,
                workers: Some(0),
            },
            verbose: false,
            config: None,
        };
        assert!(validate_cli(cli).is_err());
    }

    #[test]
    fn malformed_input_mapping_is_rejected() {
        let cli = Cli {
            command: Commands::Run {
                pipeline: PathBuf::from("Cargo.toml"),
                input: vec!["no-equals-sign".to_string()],
                no_wait: false,
                workers: None,
            },
            verbose: false,
            config: None,
        };
        assert!(validate_cli(cli).is_err());
    }

    #[test]
    fn list_node_types_always_validates() {
        let cli = Cli {
            command: Commands::ListNodeTypes,
            verbose: true,
            config: None,
        };
        let validated = validate_cli(cli).unwrap();
        assert!(matches!(validated.command, ValidatedCommand::ListNodeTypes));
    }
}
