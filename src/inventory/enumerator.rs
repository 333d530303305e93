// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Listing of objects for one resource coordinate

use crate::error::{InventoryError, Result};
use crate::types::{ObjectRecord, ResourceCoordinate};
use kube::{
    api::{DynamicObject, ListParams},
    core::{ObjectList, Request},
    Client,
};
use tracing::{debug, instrument};

/// List every object of `coordinate` across all namespaces, in response order.
///
/// An empty `label_selector` lists without a filter. Only the first page the
/// server returns is read.
#[instrument(skip(client), fields(coordinate = %coordinate))]
pub async fn list_objects(
    client: &Client,
    coordinate: &ResourceCoordinate,
    label_selector: &str,
) -> Result<Vec<ObjectRecord>> {
    let list_failed = |source: kube::Error| InventoryError::ListFailed {
        coordinate: coordinate.clone(),
        source,
    };

    let request = Request::new(coordinate.url_path())
        .list(&list_params(label_selector))
        .map_err(|e| list_failed(kube::Error::BuildRequest(e)))?;

    let list: ObjectList<DynamicObject> = client.request(request).await.map_err(list_failed)?;

    debug!("Listed {} objects", list.items.len());
    Ok(list.items.iter().map(ObjectRecord::from_object).collect())
}

fn list_params(label_selector: &str) -> ListParams {
    let lp = ListParams::default();
    if label_selector.is_empty() {
        lp
    } else {
        lp.labels(label_selector)
    }
}
