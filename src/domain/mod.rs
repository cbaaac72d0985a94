// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery rules with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`concept`]: Manifest entries ([`Concept`](concept::Concept),
//!   [`ConceptsData`](concept::ConceptsData)) and [`SessionKey`](concept::SessionKey)
//! - [`asset`]: Extension priorities, numbered names, animated detection
//! - [`description`]: Description markup blocks
//! - [`ui`]: Lightbox value objects ([`ZoomFactor`](ui::newtypes::ZoomFactor),
//!   [`RotationAngle`](ui::newtypes::RotationAngle))

pub mod asset;
pub mod concept;
pub mod description;
pub mod ui;
