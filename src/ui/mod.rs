// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each one
//! owns its state, handles its own messages and reports effects to the app.
//!
//! # Screens
//!
//! - [`gallery`] - Card grid of every concept in the manifest
//! - [`viewer`] - Concept detail with carousel, lightbox and description
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display, loading)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod styles;
pub mod theming;
pub mod viewer;
pub mod widgets;
