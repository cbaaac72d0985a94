// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across screens.
//!
//! - [`error_display`] - Error panel with optional collapsible details
//! - [`loading`] - Spinner with caption

pub mod error_display;
pub mod loading;
