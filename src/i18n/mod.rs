// SPDX-License-Identifier: MPL-2.0
//! Localized strings for the gallery, the detail view and error messages.
//!
//! Translations are Fluent `.ftl` files embedded at build time. The locale
//! comes from `--lang`, then `[general] language`, then the system locale,
//! and falls back to `en-US`.

pub mod fluent;
