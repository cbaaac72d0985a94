// SPDX-License-Identifier: MPL-2.0
//! Animated image decoding and frame timing.
//!
//! GIF and APNG frames come from the `image` crate's [`AnimationDecoder`];
//! animated WebP goes through `webp-animation`, which composites frames and
//! reports end timestamps. AVIF sequences and WebM have no decoder here and
//! report [`Error::Decode`] so the viewer can fall back to a static image.

use super::image::ImageData;
use crate::config::defaults::DEFAULT_FRAME_DELAY_MS;
use crate::domain::asset;
use crate::error::{Error, Result};
use image_rs::codecs::gif::GifDecoder;
use image_rs::codecs::png::PngDecoder;
use image_rs::AnimationDecoder;
use std::io::Cursor;
use std::time::Duration;

/// WebP chunk that only appears in animated files.
const WEBP_ANIMATION_MARKER: &[u8; 4] = b"ANMF";

/// How far into a WebP file the animation marker is looked for.
const WEBP_MARKER_SCAN_BYTES: usize = 1024;

#[derive(Debug, Clone)]
pub struct Frame {
    pub image: ImageData,
    pub delay: Duration,
}

/// A decoded, looping animation.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<Frame>,
    total: Duration,
}

impl Animation {
    /// Builds an animation from frames. Zero delays get the default delay.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if `frames` is empty.
    pub fn new(frames: Vec<Frame>) -> Result<Self> {
        if frames.is_empty() {
            return Err(Error::Decode("animation has no frames".into()));
        }
        let frames: Vec<Frame> = frames
            .into_iter()
            .map(|frame| Frame {
                delay: if frame.delay.is_zero() {
                    Duration::from_millis(DEFAULT_FRAME_DELAY_MS)
                } else {
                    frame.delay
                },
                ..frame
            })
            .collect();
        let total = frames.iter().map(|f| f.delay).sum();
        Ok(Self { frames, total })
    }

    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Length of one loop.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.total
    }

    #[must_use]
    pub fn first_frame(&self) -> &ImageData {
        &self.frames[0].image
    }

    /// Index of the frame shown `elapsed` after playback started, looping forever.
    #[must_use]
    pub fn frame_index_at(&self, elapsed: Duration) -> usize {
        let total = self.total.as_micros();
        if total == 0 {
            return 0;
        }
        let mut position = elapsed.as_micros() % total;
        for (index, frame) in self.frames.iter().enumerate() {
            let delay = frame.delay.as_micros();
            if position < delay {
                return index;
            }
            position -= delay;
        }
        self.frames.len() - 1
    }

    #[must_use]
    pub fn frame_at(&self, elapsed: Duration) -> &ImageData {
        &self.frames[self.frame_index_at(elapsed)].image
    }
}

/// Decodes an animation, choosing the decoder from the file name.
///
/// # Errors
///
/// Returns [`Error::Decode`] for unsupported containers or corrupt data.
pub fn decode(file_name: &str, bytes: &[u8]) -> Result<Animation> {
    match asset::extension(file_name).as_deref() {
        Some("gif") => decode_gif(bytes),
        Some("apng" | "png") => decode_apng(bytes),
        Some("webp") => decode_webp(bytes),
        Some(other) => Err(Error::Decode(format!(
            "no animation decoder for .{other} files"
        ))),
        None => Err(Error::Decode(format!("{file_name} has no extension"))),
    }
}

/// Checks the first bytes of a WebP file for animation frames.
#[must_use]
pub fn is_animated_webp(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(WEBP_MARKER_SCAN_BYTES)];
    head.windows(WEBP_ANIMATION_MARKER.len())
        .any(|window| window == WEBP_ANIMATION_MARKER)
}

fn decode_gif(bytes: &[u8]) -> Result<Animation> {
    let decoder = GifDecoder::new(Cursor::new(bytes))?;
    collect_frames(decoder)
}

fn decode_apng(bytes: &[u8]) -> Result<Animation> {
    let decoder = PngDecoder::new(Cursor::new(bytes))?;
    if !decoder.is_apng()? {
        return Err(Error::Decode("PNG has no animation control chunk".into()));
    }
    collect_frames(decoder.apng()?)
}

fn collect_frames<'a>(decoder: impl AnimationDecoder<'a>) -> Result<Animation> {
    let frames = decoder
        .into_frames()
        .map(|frame| {
            let frame = frame?;
            let (numer, denom) = frame.delay().numer_denom_ms();
            let delay_ms = if denom == 0 { 0 } else { numer / denom };
            let buffer = frame.into_buffer();
            let (width, height) = buffer.dimensions();
            Ok(Frame {
                image: ImageData::from_rgba(width, height, buffer.into_vec()),
                delay: Duration::from_millis(u64::from(delay_ms)),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Animation::new(frames)
}

fn decode_webp(bytes: &[u8]) -> Result<Animation> {
    let decoder = webp_animation::Decoder::new(bytes)
        .map_err(|e| Error::Decode(format!("failed to decode WebP: {e:?}")))?;

    // Timestamps mark the end of each frame.
    let mut previous_end = 0i32;
    let frames = decoder
        .into_iter()
        .map(|frame| {
            let end = frame.timestamp();
            let delay_ms = u64::try_from(end - previous_end).unwrap_or(0);
            previous_end = end;
            let (width, height) = frame.dimensions();
            Frame {
                image: ImageData::from_rgba(width, height, frame.data().to_vec()),
                delay: Duration::from_millis(delay_ms),
            }
        })
        .collect();
    Animation::new(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::codecs::gif::GifEncoder;
    use image_rs::{Delay, Rgba, RgbaImage};

    fn frame(delay_ms: u64) -> Frame {
        Frame {
            image: ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]),
            delay: Duration::from_millis(delay_ms),
        }
    }

    fn gif_bytes(frame_count: usize, delay_ms: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut bytes);
            let frames = (0..frame_count).map(|i| {
                let shade = (i * 60) as u8;
                image_rs::Frame::from_parts(
                    RgbaImage::from_pixel(2, 2, Rgba([shade, 0, 0, 255])),
                    0,
                    0,
                    Delay::from_numer_denom_ms(delay_ms, 1),
                )
            });
            encoder.encode_frames(frames).expect("encode gif");
        }
        bytes
    }

    #[test]
    fn empty_animation_is_rejected() {
        assert!(Animation::new(Vec::new()).is_err());
    }

    #[test]
    fn zero_delay_uses_default() {
        let animation = Animation::new(vec![frame(0)]).expect("one frame");
        assert_eq!(
            animation.duration(),
            Duration::from_millis(DEFAULT_FRAME_DELAY_MS)
        );
    }

    #[test]
    fn frame_index_follows_delays_and_loops() {
        let animation = Animation::new(vec![frame(100), frame(50), frame(200)]).expect("frames");
        assert_eq!(animation.frame_index_at(Duration::ZERO), 0);
        assert_eq!(animation.frame_index_at(Duration::from_millis(99)), 0);
        assert_eq!(animation.frame_index_at(Duration::from_millis(100)), 1);
        assert_eq!(animation.frame_index_at(Duration::from_millis(160)), 2);
        assert_eq!(animation.frame_index_at(Duration::from_millis(350)), 0);
        assert_eq!(animation.frame_index_at(Duration::from_millis(460)), 1);
    }

    #[test]
    fn decodes_gif_frames() {
        let animation = decode("loop.gif", &gif_bytes(3, 80)).expect("gif decodes");
        assert_eq!(animation.frame_count(), 3);
        assert_eq!(animation.first_frame().width, 2);
    }

    #[test]
    fn video_containers_are_unsupported() {
        assert!(matches!(
            decode("clip.webm", b"\x1a\x45\xdf\xa3"),
            Err(Error::Decode(_))
        ));
        assert!(matches!(decode("seq.avifs", b""), Err(Error::Decode(_))));
    }

    #[test]
    fn webp_marker_detection() {
        let mut animated = b"RIFF\0\0\0\0WEBPVP8X".to_vec();
        animated.extend_from_slice(b"\0\0\0\0ANIM\0\0ANMF");
        assert!(is_animated_webp(&animated));
        assert!(!is_animated_webp(b"RIFF\0\0\0\0WEBPVP8 "));
    }
}
