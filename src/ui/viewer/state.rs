// SPDX-License-Identifier: MPL-2.0
//! Carousel and lightbox state for one detail session.
//!
//! The index wraps in both directions over the resolved asset count. Zoom
//! and rotation only matter in fullscreen and are reset whenever fullscreen
//! is entered, left, or the image changes while it is open.

use crate::domain::ui::{RotationAngle, ZoomFactor};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewerState {
    index: usize,
    count: usize,
    fullscreen: bool,
    zoom: ZoomFactor,
    rotation: RotationAngle,
}

impl ViewerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to defaults with no assets.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sets the number of resolved assets. The index is kept when still in
    /// range; fullscreen is left when nothing remains to show.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if self.index >= count {
            self.index = 0;
        }
        if count == 0 {
            self.fullscreen = false;
            self.reset_view();
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomFactor {
        self.zoom
    }

    #[must_use]
    pub fn rotation(&self) -> RotationAngle {
        self.rotation
    }

    /// True when navigation controls are meaningful.
    #[must_use]
    pub fn has_multiple(&self) -> bool {
        self.count > 1
    }

    /// Advances with wraparound. Returns `false` when there is nothing to navigate.
    pub fn next(&mut self) -> bool {
        if self.count <= 1 {
            return false;
        }
        self.index = (self.index + 1) % self.count;
        self.after_index_change();
        true
    }

    /// Steps back with wraparound. Returns `false` when there is nothing to navigate.
    pub fn prev(&mut self) -> bool {
        if self.count <= 1 {
            return false;
        }
        self.index = (self.index + self.count - 1) % self.count;
        self.after_index_change();
        true
    }

    /// Jumps to `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }
        let changed = index != self.index;
        self.index = index;
        self.after_index_change();
        changed
    }

    /// Enters fullscreen at the current index with a fresh view.
    pub fn open_fullscreen(&mut self) -> bool {
        if self.count == 0 {
            return false;
        }
        self.fullscreen = true;
        self.reset_view();
        true
    }

    pub fn close_fullscreen(&mut self) {
        self.fullscreen = false;
        self.reset_view();
    }

    /// Returns `false` at the upper bound.
    pub fn zoom_in(&mut self) -> bool {
        let zoomed = self.zoom.zoom_in();
        let changed = zoomed != self.zoom;
        self.zoom = zoomed;
        changed
    }

    /// Returns `false` at the lower bound.
    pub fn zoom_out(&mut self) -> bool {
        let zoomed = self.zoom.zoom_out();
        let changed = zoomed != self.zoom;
        self.zoom = zoomed;
        changed
    }

    pub fn rotate(&mut self) {
        self.rotation = self.rotation.rotate_clockwise();
    }

    /// Zoom 100 %, no rotation.
    pub fn reset_view(&mut self) {
        self.zoom = ZoomFactor::default();
        self.rotation = RotationAngle::default();
    }

    fn after_index_change(&mut self) {
        if self.fullscreen {
            self.reset_view();
        }
    }
}
