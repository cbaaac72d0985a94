// SPDX-License-Identifier: MPL-2.0
//! Concept gallery screen.

pub mod state;
pub mod view;

pub use state::{Effect, Message, State, Thumbnail};
