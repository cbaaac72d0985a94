// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//!
//! # Available Ports
//!
//! - [`asset`]: Read-only access to the static concept server
//! - [`speech`]: Text-to-speech capability
//! - [`tone`]: Audio feedback beep
//!
//! # Design Notes
//!
//! - No Iced, `reqwest` or `cpal` types cross these traits
//! - Traits are `Send + Sync` so adapters can be shared through `Arc`
//! - Async operations return boxed futures that callers hand to `Task::perform`

pub mod asset;
pub mod speech;
pub mod tone;

pub use asset::{AssetSource, FetchError, FetchResult};
pub use speech::{SpeechEngine, SpeechError, Utterance, Voice};
pub use tone::{ToneError, TonePlayer, ToneSpec};
