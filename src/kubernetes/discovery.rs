// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Capability discovery: which resources the API server serves, per preferred group version

use crate::error::{InventoryError, Result};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{APIGroup, APIResourceList};
use kube::Client;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Fetch the resource lists of every API group, keeping each resource once
/// under its group's preferred version.
///
/// Blocks are returned in server order: the core group first, then the named
/// groups as `/apis` lists them, each in advertised version order.
/// Any failed request aborts discovery.
#[instrument(skip(client))]
pub async fn server_preferred_resources(client: &Client) -> Result<Vec<APIResourceList>> {
    let mut blocks = Vec::new();

    let core = client
        .list_core_api_versions()
        .await
        .map_err(InventoryError::DiscoveryUnavailable)?;
    let mut fetched = Vec::with_capacity(core.versions.len());
    for version in &core.versions {
        let resources = client
            .list_core_api_resources(version)
            .await
            .map_err(InventoryError::DiscoveryUnavailable)?;
        fetched.push((version.clone(), resources));
    }
    // The core group has no preferred version; the first one advertised wins
    let preferred = core.versions.first().cloned().unwrap_or_default();
    blocks.extend(select_preferred(&preferred, fetched));

    let groups = client
        .list_api_groups()
        .await
        .map_err(InventoryError::DiscoveryUnavailable)?;
    for group in &groups.groups {
        blocks.extend(fetch_group(client, group).await?);
    }

    debug!("Discovered {} group versions", blocks.len());
    Ok(blocks)
}

async fn fetch_group(client: &Client, group: &APIGroup) -> Result<Vec<APIResourceList>> {
    let mut fetched = Vec::with_capacity(group.versions.len());
    for version in &group.versions {
        let resources = client
            .list_api_group_resources(&version.group_version)
            .await
            .map_err(InventoryError::DiscoveryUnavailable)?;
        fetched.push((version.version.clone(), resources));
    }

    let preferred = group
        .preferred_version
        .as_ref()
        .or_else(|| group.versions.first())
        .map(|v| v.version.clone())
        .unwrap_or_default();

    debug!(
        "Group '{}' serves {} versions, preferred {}",
        group.name,
        fetched.len(),
        preferred
    );
    Ok(select_preferred(&preferred, fetched))
}

/// Keep every top-level resource of a group exactly once.
///
/// A resource served by the preferred version stays there; otherwise it stays
/// in the first version that serves it. Subresources such as `pods/log` are
/// dropped, as are versions left without resources.
fn select_preferred(
    preferred_version: &str,
    fetched: Vec<(String, APIResourceList)>,
) -> Vec<APIResourceList> {
    let mut claimed: HashSet<String> = fetched
        .iter()
        .filter(|(version, _)| version == preferred_version)
        .flat_map(|(_, list)| list.resources.iter())
        .filter(|r| !is_subresource(&r.name))
        .map(|r| r.name.clone())
        .collect();

    fetched
        .into_iter()
        .filter_map(|(version, mut list)| {
            let is_preferred = version == preferred_version;
            list.resources.retain(|r| {
                !is_subresource(&r.name) && (is_preferred || claimed.insert(r.name.clone()))
            });
            (!list.resources.is_empty()).then_some(list)
        })
        .collect()
}

fn is_subresource(name: &str) -> bool {
    name.contains('/')
}
