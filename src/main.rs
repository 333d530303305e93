// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use kube_inventory::cli::Cli;
use kube_inventory::inventory::{exit_status, walk};
use kube_inventory::kubernetes::connect;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries the object listing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = cli.config();
    debug!("Configuration loaded: {:?}", config);

    let client = match connect(config.kubeconfig.as_deref()).await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Connected to Kubernetes cluster");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = walk(&client, &config, &mut out).await;
    drop(out);

    match &result {
        Ok(summary) if !summary.is_complete() => {
            info!("{} resource kinds could not be listed", summary.failed.len());
        }
        Ok(_) => {}
        Err(e) => eprintln!("{}", e),
    }
    ExitCode::from(exit_status(&result))
}
