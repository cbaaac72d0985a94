// SPDX-License-Identifier: MPL-2.0
//! Concept detail screen: carousel, lightbox, audio controls and description.
//!
//! [`state::ViewerState`] holds the pure navigation/zoom/rotation rules;
//! [`component::State`] wires them to asset resolution, decoding and the
//! description fetch for one session.

pub mod component;
pub mod description;
pub mod lightbox;
pub mod media_view;
pub mod state;
pub mod view;

pub use component::{Effect, Message, State, UpdateEnv, ViewEnv};
pub use state::ViewerState;
