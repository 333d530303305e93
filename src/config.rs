// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use clap::ValueEnum;
use std::path::PathBuf;

/// What to do when listing one kind fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicy {
    /// Stop the whole run at the first failed kind
    #[default]
    Abort,
    /// Report the failed kind and carry on with the next one
    Continue,
}

/// Inventory run configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Explicit kubeconfig path; None uses the default resolution chain
    pub kubeconfig: Option<PathBuf>,
    /// Label selector passed verbatim to every list request; empty lists everything
    pub selector: String,
    pub on_error: FailurePolicy,
}
