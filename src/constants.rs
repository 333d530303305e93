// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Discovery verb tokens
pub mod verbs {
    /// A kind is only enumerated when it advertises this verb
    pub const LIST: &str = "list";
}

/// Log filter used when RUST_LOG is unset and no -v flag is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Labels of the plain text output, consumed by existing scripts
pub mod output {
    pub const PROCESSING: &str = "Processing";
    pub const NAMESPACE: &str = "Namespace";
    pub const NAME: &str = "Name";
}
