// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`loader`]: Manifest and description loading
//! - [`resolver`]: Asset format probing
//! - [`speech`]: Speech playback controller with tone fallback
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives application services through Iced tasks

pub mod loader;
pub mod port;
pub mod resolver;
pub mod speech;
