// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: Static server access via `reqwest` (implements [`AssetSource`])
//! - [`audio`]: Fallback tone via `cpal` (implements [`TonePlayer`])
//! - [`speech`]: Subprocess synthesizer (implements [`SpeechEngine`])
//!
//! [`AssetSource`]: crate::application::port::AssetSource
//! [`TonePlayer`]: crate::application::port::TonePlayer
//! [`SpeechEngine`]: crate::application::port::SpeechEngine

pub mod audio;
pub mod http;
pub mod speech;

pub use audio::CpalTonePlayer;
pub use http::HttpAssetSource;
pub use speech::CommandSpeechEngine;
