// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Drives resolution and listing, writing one text block per object.

use crate::config::{Config, FailurePolicy};
use crate::constants::output;
use crate::error::{InventoryError, Result};
use crate::inventory::{enumerator::list_objects, resolver::resolve};
use crate::types::{ObjectRecord, ResourceCoordinate};
use kube::Client;
use std::io::Write;
use tracing::{info, instrument};

/// Counters of a finished walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub kinds: usize,
    pub objects: usize,
    /// Kinds whose listing failed under [`FailurePolicy::Continue`]
    pub failed: Vec<ResourceCoordinate>,
}

impl WalkSummary {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Walk every listable kind of the cluster and write its objects to `out`.
///
/// Kinds are processed one at a time in discovery order; all output of a kind
/// is written before the next one is listed.
#[instrument(skip(client, config, out), fields(selector = %config.selector))]
pub async fn walk<W: Write>(
    client: &Client,
    config: &Config,
    out: &mut W,
) -> Result<WalkSummary> {
    let coordinates = resolve(client).await?;
    let mut summary = WalkSummary::default();

    for coordinate in coordinates {
        writeln!(out, "{} {}", output::PROCESSING, coordinate)?;
        summary.kinds += 1;

        let records = match list_objects(client, &coordinate, &config.selector).await {
            Ok(records) => records,
            Err(e @ InventoryError::ListFailed { .. })
                if config.on_error == FailurePolicy::Continue =>
            {
                // Keep the diagnostic after its Processing line on a shared terminal
                out.flush()?;
                eprintln!("{}", e);
                summary.failed.push(coordinate);
                continue;
            }
            Err(e) => return Err(e),
        };

        for record in &records {
            write_record(out, record)?;
        }
        summary.objects += records.len();
        out.flush()?;
    }
    out.flush()?;

    info!(
        "Walked {} kinds, {} objects, {} failed",
        summary.kinds,
        summary.objects,
        summary.failed.len()
    );
    Ok(summary)
}

/// Process exit status of a walk: 0 only when every listable kind was listed
pub fn exit_status(result: &Result<WalkSummary>) -> u8 {
    match result {
        Ok(summary) if summary.is_complete() => 0,
        _ => 1,
    }
}

fn write_record<W: Write>(out: &mut W, record: &ObjectRecord) -> std::io::Result<()> {
    if !record.is_cluster_scoped() {
        writeln!(out, "{}: {}", output::NAMESPACE, record.namespace)?;
    }
    writeln!(out, "{}: {}\n", output::NAME, record.name)
}
