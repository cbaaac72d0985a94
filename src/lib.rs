// SPDX-License-Identifier: MPL-2.0
//! `concept_lens` is a desktop gallery for animated series concepts built
//! with the Iced GUI framework.
//!
//! Concepts are read from a static server (a JSON manifest plus one folder
//! per concept). The gallery shows one card per concept; the detail view
//! adds an image carousel, a zoomable lightbox, the formatted description
//! and spoken playback of that description.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
