// SPDX-License-Identifier: MPL-2.0
//! Audio feedback port: a short synthesized beep.

use crate::config::defaults::{
    TONE_DURATION_MS, TONE_END_GAIN, TONE_FREQUENCY_HZ, TONE_START_GAIN,
};
use std::fmt;
use std::time::Duration;

/// Shape of a sine tone whose gain decays exponentially.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub frequency_hz: f32,
    pub start_gain: f32,
    pub end_gain: f32,
    pub duration: Duration,
}

impl Default for ToneSpec {
    fn default() -> Self {
        Self {
            frequency_hz: TONE_FREQUENCY_HZ,
            start_gain: TONE_START_GAIN,
            end_gain: TONE_END_GAIN,
            duration: Duration::from_millis(TONE_DURATION_MS),
        }
    }
}

impl ToneSpec {
    /// Gain at `elapsed` into the tone, or `0.0` once the tone is over.
    ///
    /// `gain(t) = start * (end / start)^(t / duration)`
    #[must_use]
    pub fn gain_at(&self, elapsed: Duration) -> f32 {
        if elapsed >= self.duration || self.duration.is_zero() {
            return 0.0;
        }
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.start_gain * (self.end_gain / self.start_gain).powf(progress)
    }

    /// Mono sample at index `n` for the given sample rate.
    #[must_use]
    pub fn sample(&self, n: u64, sample_rate: u32) -> f32 {
        let t = n as f64 / f64::from(sample_rate.max(1));
        let phase = 2.0 * std::f64::consts::PI * f64::from(self.frequency_hz) * t;
        phase.sin() as f32 * self.gain_at(Duration::from_secs_f64(t))
    }

    /// Number of frames the tone lasts at `sample_rate`.
    #[must_use]
    pub fn frame_count(&self, sample_rate: u32) -> u64 {
        (self.duration.as_secs_f64() * f64::from(sample_rate)).ceil() as u64
    }
}

/// Errors while playing a tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToneError {
    NoDevice,
    Stream(String),
}

impl fmt::Display for ToneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneError::NoDevice => write!(f, "No audio output device found"),
            ToneError::Stream(msg) => write!(f, "Audio stream error: {msg}"),
        }
    }
}

impl std::error::Error for ToneError {}

/// Port for emitting a tone on the default audio output.
pub trait TonePlayer: Send + Sync {
    /// Starts the tone and returns once playback has begun.
    /// Playback continues in the background for `tone.duration`.
    fn play(&self, tone: ToneSpec) -> Result<(), ToneError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tone_is_800hz_half_second() {
        let tone = ToneSpec::default();
        assert_eq!(tone.frequency_hz, 800.0);
        assert_eq!(tone.duration, Duration::from_millis(500));
    }

    #[test]
    fn gain_decays_from_start_to_end() {
        let tone = ToneSpec::default();
        assert!((tone.gain_at(Duration::ZERO) - 0.1).abs() < 1e-6);
        let near_end = tone.gain_at(Duration::from_millis(499));
        assert!(near_end > 0.01 && near_end < 0.0105);
        assert_eq!(tone.gain_at(Duration::from_millis(500)), 0.0);
    }

    #[test]
    fn gain_is_geometric_midway() {
        let tone = ToneSpec::default();
        let mid = tone.gain_at(Duration::from_millis(250));
        let expected = (0.1_f32 * 0.01).sqrt();
        assert!((mid - expected).abs() < 1e-4);
    }

    #[test]
    fn samples_stay_within_gain() {
        let tone = ToneSpec::default();
        for n in 0..tone.frame_count(8_000) {
            assert!(tone.sample(n, 8_000).abs() <= tone.start_gain + 1e-6);
        }
    }

    #[test]
    fn frame_count_matches_duration() {
        assert_eq!(ToneSpec::default().frame_count(48_000), 24_000);
    }
}
