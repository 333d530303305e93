// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation from an explicit kubeconfig or the default resolution chain

use crate::error::{InventoryError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, info, instrument};

const STARTING_CONFIG: &str = "error getting starting config";
const REST_CONFIG: &str = "error getting REST config";

/// Connect to the cluster described by `kubeconfig`, or infer the connection
/// from KUBECONFIG, ~/.kube/config or the in-cluster environment.
#[instrument]
pub async fn connect(kubeconfig: Option<&Path>) -> Result<Client> {
    let config = match kubeconfig {
        Some(path) => {
            let kubeconfig = read_kubeconfig(path)?;
            KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                .await
                .map_err(|e| InventoryError::config(REST_CONFIG, e))?
        }
        None => {
            debug!("No kubeconfig given, inferring configuration");
            KConfig::infer()
                .await
                .map_err(|e| InventoryError::config(REST_CONFIG, e))?
        }
    };

    info!("Connecting to {}", config.cluster_url);
    Client::try_from(config).map_err(|e| InventoryError::config(REST_CONFIG, e))
}

/// Read a kubeconfig file, resolving relative certificate, key and token
/// paths against the file's directory
fn read_kubeconfig(path: &Path) -> Result<Kubeconfig> {
    Kubeconfig::read_from(path).map_err(|e| InventoryError::config(STARTING_CONFIG, e))
}
