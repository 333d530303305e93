// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::coordinate::ResourceCoordinate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("{context}: {message}")]
    ConfigError {
        context: &'static str,
        message: String,
    },

    #[error("error getting server preferred resources: {0}")]
    DiscoveryUnavailable(#[source] kube::Error),

    #[error("error parsing GroupVersion {group_version}: {reason}")]
    MalformedCoordinate {
        group_version: String,
        reason: String,
    },

    #[error("error listing {coordinate}: {source}")]
    ListFailed {
        coordinate: ResourceCoordinate,
        #[source]
        source: kube::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] std::io::Error),
}

impl InventoryError {
    pub(crate) fn config(context: &'static str, err: impl std::fmt::Display) -> Self {
        InventoryError::ConfigError {
            context,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
