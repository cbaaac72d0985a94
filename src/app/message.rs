// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::speech::PlaybackEvent;
use crate::domain::concept::ConceptsData;
use crate::error::Error;
use crate::ui::{gallery, viewer};
use iced::keyboard;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    ManifestLoaded(Result<ConceptsData, Error>),
    Gallery(gallery::Message),
    Detail(viewer::Message),
    /// A speech or fallback-tone step finished.
    Speech(PlaybackEvent),
    /// Show or hide the technical details of the full-screen error.
    ToggleErrorDetails,
    DismissWarning,
    KeyPressed(keyboard::Key),
    Tick(Instant),
}

/// Runtime flags passed in from the launcher.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`).
    pub lang: Option<String>,
    /// Server root; overrides `[source] base_url`.
    pub base_url: Option<String>,
    /// Manifest path under the server root; overrides `[source] manifest_path`.
    pub manifest: Option<String>,
    /// Optional config directory (overrides the platform default and the env var).
    pub config_dir: Option<String>,
}
