// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{InventoryError, Result};
use kube::{Resource, ResourceExt};
use std::fmt;

/// Identifies one listable kind on the API server
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceCoordinate {
    /// API group, empty for the core group
    pub group: String,
    pub version: String,
    /// Plural lowercase resource name
    pub resource: String,
}

impl ResourceCoordinate {
    pub fn new(group: &str, version: &str, resource: &str) -> Self {
        Self {
            group: group.to_string(),
            version: version.to_string(),
            resource: resource.to_string(),
        }
    }

    /// Build a coordinate from a discovery group-version string and a resource name
    pub fn from_group_version(group_version: &str, resource: &str) -> Result<Self> {
        let (group, version) = parse_group_version(group_version)?;
        Ok(Self {
            group,
            version,
            resource: resource.to_string(),
        })
    }

    /// Collection path spanning all namespaces
    pub fn url_path(&self) -> String {
        if self.group.is_empty() {
            format!("/api/{}/{}", self.version, self.resource)
        } else {
            format!("/apis/{}/{}/{}", self.group, self.version, self.resource)
        }
    }
}

impl fmt::Display for ResourceCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}, Resource={}",
            self.group, self.version, self.resource
        )
    }
}

/// Split "group/version" (or a bare core "version") into its parts
pub fn parse_group_version(group_version: &str) -> Result<(String, String)> {
    let malformed = |reason: &str| InventoryError::MalformedCoordinate {
        group_version: group_version.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = group_version.split('/').collect();
    let (group, version) = match parts.as_slice() {
        [version] => ("", *version),
        [group, version] => {
            if group.is_empty() {
                return Err(malformed("empty group before '/'"));
            }
            (*group, *version)
        }
        _ => return Err(malformed("unexpected GroupVersion string")),
    };

    if version.is_empty() {
        return Err(malformed("empty version"));
    }

    Ok((group.to_string(), version.to_string()))
}

/// Namespace and name of one listed object
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectRecord {
    /// Empty for cluster-scoped objects
    pub namespace: String,
    pub name: String,
}

impl ObjectRecord {
    pub fn from_object<K: Resource>(object: &K) -> Self {
        Self {
            namespace: object.namespace().unwrap_or_default(),
            name: object.name_any(),
        }
    }

    pub fn is_cluster_scoped(&self) -> bool {
        self.namespace.is_empty()
    }
}
