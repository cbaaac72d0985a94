// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// What the window currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Waiting for the manifest.
    Loading,
    /// The manifest could not be loaded.
    Error,
    Gallery,
    /// A concept is selected.
    Detail,
}
