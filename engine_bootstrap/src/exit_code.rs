// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Process Exit Codes
//!
//! Maps domain and CLI failures onto the BSD `sysexits.h` convention, so a
//! calling shell or orchestrator can branch on exit status without parsing
//! stderr.

use crate::cli::ParseError;
use engine_domain::EngineError;

/// Process exit status.
///
/// Mirrors a subset of `sysexits.h`: `Ok` for success, and one category per
/// kind of failure this binary can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful termination.
    Ok = 0,
    /// Command-line usage error (bad flags, bad argument values).
    Usage = 64,
    /// Input data was incorrect in some way (schema, variable, wiring errors).
    DataErr = 65,
    /// An input file did not exist or was not readable.
    NoInput = 66,
    /// Internal software error (node execution failure).
    Software = 70,
    /// I/O error.
    IoErr = 74,
}

impl ExitCode {
    /// Raw process exit status for this code.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Maps an [`EngineError`] to the exit code a CLI invocation should return.
pub fn map_error_to_exit_code(error: &EngineError) -> ExitCode {
    match error.category() {
        "variable" | "schema" | "registry" | "wiring" | "config" => ExitCode::DataErr,
        "execution" => ExitCode::Software,
        "io" => ExitCode::IoErr,
        "parse" => ExitCode::DataErr,
        _ => ExitCode::Software,
    }
}

/// Maps a CLI [`ParseError`] to the exit code the process should return.
pub fn map_parse_error_to_exit_code(_error: &ParseError) -> ExitCode {
    ExitCode::Usage
}

/// Converts a pipeline build/run result into the exit code to return from
/// `main`.
pub fn result_to_exit_code<T>(result: &Result<T, EngineError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::Ok,
        Err(e) => map_error_to_exit_code(e),
    }
}
