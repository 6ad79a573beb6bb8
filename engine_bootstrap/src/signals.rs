// /////////////////////////////////////////////////////////////////////////////
// Adaptive Pipeline RS
// Copyright (c) 2025 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Signal Handling
//!
//! Wires `SIGINT`/`SIGTERM` (Unix) or Ctrl-C (all platforms) to a
//! [`ShutdownCoordinator`], so an in-flight pipeline run gets a chance to
//! drain before the process exits. This is a bootstrap-layer concern only —
//! the execution engine itself has no notion of cancellation (see the
//! concurrency model's treatment of cancellation).

use crate::shutdown::ShutdownCoordinator;
use std::sync::Arc;

/// Spawns a task that waits for a termination signal and, upon receiving
/// one, calls [`ShutdownCoordinator::initiate_shutdown`].
///
/// Returns immediately; the signal wait happens in the background.
pub fn install(coordinator: Arc<ShutdownCoordinator>) {
    tokio::spawn(async move {
        wait_for_signal().await;
        coordinator.initiate_shutdown();
    });
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");
    let mut sigterm = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

    tokio::select! {
        _ = sigint.recv() => {}
        _ = sigterm.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
