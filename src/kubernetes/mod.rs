// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation and API discovery.

pub mod client;
pub mod discovery;

pub use client::connect;
pub use discovery::server_preferred_resources;
