// SPDX-License-Identifier: MPL-2.0
//! Decoding of fetched concept assets into displayable media.
//!
//! Assets whose name marks them as animated are decoded frame by frame; if
//! that fails the same bytes are decoded as a still image and the result is
//! flagged so the viewer knows the animation was dropped.

pub mod animation;
pub mod cache;
pub mod image;

pub use animation::{Animation, Frame};
pub use cache::DecodedCache;
pub use image::ImageData;

use crate::application::port::AssetSource;
use crate::domain::asset::{self, AssetKind};
use crate::error::{Error, Result};
use std::sync::Arc;
use std::time::Duration;

/// A decoded asset.
#[derive(Debug, Clone)]
pub enum MediaData {
    Image(ImageData),
    Animation(Arc<Animation>),
}

impl MediaData {
    /// Frame to display `elapsed` after the asset was first shown.
    #[must_use]
    pub fn frame_at(&self, elapsed: Duration) -> &ImageData {
        match self {
            MediaData::Image(image) => image,
            MediaData::Animation(animation) => animation.frame_at(elapsed),
        }
    }

    #[must_use]
    pub fn is_animated(&self) -> bool {
        matches!(self, MediaData::Animation(_))
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        let first = self.frame_at(Duration::ZERO);
        (first.width, first.height)
    }
}

/// Result of decoding one asset.
#[derive(Debug, Clone)]
pub struct DecodedAsset {
    pub media: MediaData,
    /// The asset should have animated but was shown as a still image.
    pub animation_failed: bool,
}

/// Decodes `bytes` according to the rendering policy for `file_name`.
///
/// # Errors
///
/// Returns [`Error::Decode`](crate::error::Error::Decode) when neither the
/// animated nor the static decoder accepts the data.
pub fn decode_asset(file_name: &str, bytes: &[u8]) -> Result<DecodedAsset> {
    let wants_animation = match AssetKind::from_file_name(file_name) {
        AssetKind::Animated => true,
        // Animated WebP plays even though it is not in the animated set.
        AssetKind::Static => {
            asset::extension(file_name).as_deref() == Some("webp")
                && animation::is_animated_webp(bytes)
        }
    };

    if wants_animation {
        match animation::decode(file_name, bytes) {
            Ok(decoded) if decoded.frame_count() > 1 => {
                return Ok(DecodedAsset {
                    media: MediaData::Animation(Arc::new(decoded)),
                    animation_failed: false,
                });
            }
            Ok(_) => {}
            Err(err) => {
                tracing::debug!(file = file_name, error = %err, "animation decode failed, using still image");
                let image = ImageData::from_bytes(bytes)?;
                return Ok(DecodedAsset {
                    media: MediaData::Image(image),
                    animation_failed: true,
                });
            }
        }
    }

    Ok(DecodedAsset {
        media: MediaData::Image(ImageData::from_bytes(bytes)?),
        animation_failed: false,
    })
}

/// Downloads the asset at `path` and decodes it off the async runtime.
///
/// # Errors
///
/// Returns [`Error::Fetch`] if the download fails, or [`Error::Decode`] if
/// the bytes cannot be displayed.
pub async fn fetch_decoded(
    source: Arc<dyn AssetSource>,
    path: String,
    file_name: String,
) -> Result<DecodedAsset> {
    let bytes = source.fetch_bytes(&path).await?;
    tokio::task::spawn_blocking(move || decode_asset(&file_name, &bytes))
        .await
        .map_err(|e| Error::Decode(format!("decoder task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes() -> Vec<u8> {
        let img = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, ImageFormat::Png).expect("encode png");
        bytes.into_inner()
    }

    #[test]
    fn static_png_is_an_image() {
        let decoded = decode_asset("concept.png", &png_bytes()).expect("decodes");
        assert!(!decoded.media.is_animated());
        assert!(!decoded.animation_failed);
        assert_eq!(decoded.media.dimensions(), (3, 2));
    }

    #[test]
    fn plain_png_named_apng_falls_back_to_still() {
        let decoded = decode_asset("concept2.apng", &png_bytes()).expect("decodes");
        assert!(!decoded.media.is_animated());
        assert!(decoded.animation_failed);
    }

    #[test]
    fn undecodable_bytes_fail() {
        assert!(decode_asset("concept.webm", b"\x1a\x45\xdf\xa3").is_err());
    }
}
