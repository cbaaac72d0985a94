// SPDX-License-Identifier: MPL-2.0
//! Tone output using cpal.
//!
//! Each tone gets its own short-lived output stream on a dedicated thread:
//! `cpal::Stream` is not `Send` on every platform, so the stream is created,
//! kept alive and dropped on the same thread.

use crate::application::port::{ToneError, TonePlayer, ToneSpec};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::mpsc;
use std::time::Duration;

/// Extra time the stream stays open after the tone so the tail is not cut.
const STREAM_TAIL: Duration = Duration::from_millis(50);

/// Plays tones on the system's default output device.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpalTonePlayer;

impl TonePlayer for CpalTonePlayer {
    fn play(&self, tone: ToneSpec) -> Result<(), ToneError> {
        let (ready_tx, ready_rx) = mpsc::channel();

        std::thread::Builder::new()
            .name("concept-lens-tone".into())
            .spawn(move || match start_stream(tone) {
                Ok(stream) => {
                    let _ = ready_tx.send(Ok(()));
                    std::thread::sleep(tone.duration + STREAM_TAIL);
                    drop(stream);
                }
                Err(err) => {
                    let _ = ready_tx.send(Err(err));
                }
            })
            .map_err(|e| ToneError::Stream(format!("failed to spawn tone thread: {e}")))?;

        ready_rx
            .recv()
            .map_err(|_| ToneError::Stream("tone thread exited early".into()))?
    }
}

fn start_stream(tone: ToneSpec) -> Result<cpal::Stream, ToneError> {
    let host = cpal::default_host();
    let device = host.default_output_device().ok_or(ToneError::NoDevice)?;
    let supported_config = device
        .default_output_config()
        .map_err(|e| ToneError::Stream(format!("failed to get audio config: {e}")))?;

    let sample_format = supported_config.sample_format();
    let config: cpal::StreamConfig = supported_config.into();

    let stream = match sample_format {
        cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config, tone)?,
        cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config, tone)?,
        cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config, tone)?,
        other => {
            return Err(ToneError::Stream(format!(
                "unsupported sample format {other:?}"
            )))
        }
    };

    stream
        .play()
        .map_err(|e| ToneError::Stream(format!("failed to start audio stream: {e}")))?;
    Ok(stream)
}

fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    tone: ToneSpec,
) -> Result<cpal::Stream, ToneError> {
    let sample_rate = config.sample_rate.0;
    let channels = usize::from(config.channels).max(1);
    let total_frames = tone.frame_count(sample_rate);
    let mut frame: u64 = 0;

    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                for chunk in data.chunks_mut(channels) {
                    let value = if frame < total_frames {
                        tone.sample(frame, sample_rate)
                    } else {
                        0.0
                    };
                    frame = frame.saturating_add(1);
                    for sample in chunk.iter_mut() {
                        *sample = T::from_sample(value);
                    }
                }
            },
            |err| {
                tracing::warn!(error = %err, "tone output error");
            },
            None,
        )
        .map_err(|e| ToneError::Stream(format!("failed to build audio stream: {e}")))
}
