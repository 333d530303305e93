// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line surface

use crate::config::{Config, FailurePolicy};
use crate::constants::DEFAULT_LOG_LEVEL;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "kube-inventory",
    version,
    about = "List every object you can read across all resource kinds of a cluster"
)]
pub struct Cli {
    /// Path to kubeconfig file.
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<String>,

    /// Label selector.
    #[arg(long, short = 'l', value_name = "EXPR", default_value = "")]
    pub selector: String,

    /// Behaviour when listing a resource kind fails.
    #[arg(long, value_enum, default_value_t = FailurePolicy::Abort)]
    pub on_error: FailurePolicy,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Ignored when RUST_LOG is set.
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            // An empty path means the default chain
            kubeconfig: self
                .kubeconfig
                .as_deref()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            selector: self.selector.clone(),
            on_error: self.on_error,
        }
    }

    /// Log filter directive implied by the -v count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => DEFAULT_LOG_LEVEL,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
