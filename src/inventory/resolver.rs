// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resolution of discovered resources into listable coordinates

use crate::constants::verbs;
use crate::error::Result;
use crate::kubernetes::server_preferred_resources;
use crate::types::ResourceCoordinate;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{APIResource, APIResourceList};
use kube::Client;
use tracing::{debug, info, instrument};

/// Discover every kind the server serves and return the ones that can be listed,
/// in the order the server advertises them.
#[instrument(skip(client))]
pub async fn resolve(client: &Client) -> Result<Vec<ResourceCoordinate>> {
    let blocks = server_preferred_resources(client).await?;
    let coordinates = resolve_listable(&blocks)?;
    info!("Resolved {} listable resource kinds", coordinates.len());
    Ok(coordinates)
}

/// Turn discovery blocks into coordinates, skipping resources without the list verb.
///
/// A single unparsable group-version fails the whole resolution.
pub fn resolve_listable(blocks: &[APIResourceList]) -> Result<Vec<ResourceCoordinate>> {
    let mut coordinates = Vec::new();

    for block in blocks {
        for resource in &block.resources {
            if !supports_list(resource) {
                debug!(
                    "Skipping {} in {}: list not supported",
                    resource.name, block.group_version
                );
                continue;
            }
            coordinates.push(ResourceCoordinate::from_group_version(
                &block.group_version,
                &resource.name,
            )?);
        }
    }

    Ok(coordinates)
}

fn supports_list(resource: &APIResource) -> bool {
    resource.verbs.iter().any(|v| v == verbs::LIST)
}
