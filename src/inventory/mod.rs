// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Discovery-then-enumeration walk over every listable kind.

pub mod enumerator;
pub mod resolver;
pub mod walker;

pub use enumerator::list_objects;
pub use resolver::{resolve, resolve_listable};
pub use walker::{exit_status, walk, WalkSummary};
