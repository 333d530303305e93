// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource coordinates and listed object records.

pub mod coordinate;

pub use coordinate::{ObjectRecord, ResourceCoordinate};
