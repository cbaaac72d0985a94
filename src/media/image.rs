// SPDX-License-Identifier: MPL-2.0
//! Static image decoding (PNG, JPEG, GIF, WebP).

use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Decodes an encoded image held in memory.
    ///
    /// Multi-frame containers yield their first frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`](crate::error::Error::Decode) if the bytes are
    /// not a supported image format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let decoded = image_rs::load_from_memory(bytes)?;
        let (width, height) = decoded.dimensions();
        Ok(Self::from_rgba(width, height, decoded.to_rgba8().into_vec()))
    }

    /// Size in bytes of the RGBA pixel buffer.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}
