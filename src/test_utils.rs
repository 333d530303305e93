// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking the discovery and list endpoints of an API server.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A mock HTTP service that returns predefined responses for exact GET paths
/// and records every request URI it receives.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<String, (u16, String)>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for GET requests on exactly this path (query ignored)
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    /// Serve an empty core group and an empty group list
    pub fn with_empty_discovery(self) -> Self {
        self.on_get("/api", 200, &api_versions_json(&[]))
            .on_get("/apis", 200, &api_group_list_json(&[]))
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// Path and query of every request seen so far, in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Value of `key` in the query string of the first request to `path`
    pub fn query_param(&self, path: &str, key: &str) -> Option<String> {
        self.requests().iter().find_map(|uri| {
            let (p, query) = uri.split_once('?').unwrap_or((uri.as_str(), ""));
            if p != path {
                return None;
            }
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.into_owned())
        })
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let path = req.uri().path().to_string();
        let path_and_query = req
            .uri()
            .path_and_query()
            .map(|pq| pq.to_string())
            .unwrap_or_else(|| path.clone());
        self.requests.lock().unwrap().push(path_and_query);

        let response = if req.method() == http::Method::GET {
            self.responses.lock().unwrap().get(&path).cloned()
        } else {
            None
        };

        Box::pin(async move {
            let (status, body) =
                response.unwrap_or_else(|| (404, status_json(404, "NotFound", "not found")));
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// `/api` response advertising the given core versions
pub fn api_versions_json(versions: &[&str]) -> String {
    json!({
        "kind": "APIVersions",
        "versions": versions,
        "serverAddressByClientCIDRs": [
            { "clientCIDR": "0.0.0.0/0", "serverAddress": "10.0.0.1:6443" }
        ]
    })
    .to_string()
}

/// `/apis` response; each entry is (group, versions, preferred version)
pub fn api_group_list_json(groups: &[(&str, &[&str], &str)]) -> String {
    let groups: Vec<_> = groups
        .iter()
        .map(|(name, versions, preferred)| {
            let versions: Vec<_> = versions
                .iter()
                .map(|v| json!({ "groupVersion": format!("{name}/{v}"), "version": v }))
                .collect();
            json!({
                "name": name,
                "versions": versions,
                "preferredVersion": {
                    "groupVersion": format!("{name}/{preferred}"),
                    "version": preferred
                }
            })
        })
        .collect();

    json!({ "kind": "APIGroupList", "apiVersion": "v1", "groups": groups }).to_string()
}

/// APIResourceList response; each entry is (plural name, kind, namespaced, verbs)
pub fn api_resource_list_json(
    group_version: &str,
    resources: &[(&str, &str, bool, &[&str])],
) -> String {
    let resources: Vec<_> = resources
        .iter()
        .map(|(name, kind, namespaced, verbs)| {
            json!({
                "name": name,
                "singularName": "",
                "namespaced": namespaced,
                "kind": kind,
                "verbs": verbs
            })
        })
        .collect();

    json!({
        "kind": "APIResourceList",
        "apiVersion": "v1",
        "groupVersion": group_version,
        "resources": resources
    })
    .to_string()
}

/// List response; each entry is (namespace, name), None for cluster-scoped objects
pub fn object_list_json(objects: &[(Option<&str>, &str)]) -> String {
    let items: Vec<_> = objects
        .iter()
        .map(|(namespace, name)| {
            let mut metadata = json!({ "name": name, "uid": format!("uid-{name}") });
            if let Some(ns) = namespace {
                metadata["namespace"] = json!(ns);
            }
            json!({ "metadata": metadata })
        })
        .collect();

    json!({
        "kind": "List",
        "apiVersion": "v1",
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}

/// Create a failure Status response
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    json!({
        "kind": "Status",
        "apiVersion": "v1",
        "metadata": {},
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}
