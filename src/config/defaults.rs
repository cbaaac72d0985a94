// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and viewer constants.
//!
//! # Categories
//!
//! - **Asset scan**: numbered image cap
//! - **Source**: manifest location and HTTP connect timeout
//! - **Speech**: utterance parameters and text limits
//! - **Tone**: fallback beep shape and timing

// ==========================================================================
// Asset Scan Defaults
// ==========================================================================

/// Maximum number of numbered images probed per concept.
pub const MAX_NUMBERED_IMAGES: usize = 10;

// ==========================================================================
// Source Defaults
// ==========================================================================

/// Base URL used when neither the CLI nor the config file provides one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Manifest path relative to the base URL.
pub const DEFAULT_MANIFEST_PATH: &str = "concepts.json";

/// HTTP connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Minimum accepted connect timeout.
pub const MIN_CONNECT_TIMEOUT_SECS: u64 = 1;

/// Maximum accepted connect timeout.
pub const MAX_CONNECT_TIMEOUT_SECS: u64 = 120;

/// Maximum number of redirects followed per request.
pub const MAX_REDIRECTS: usize = 10;

// ==========================================================================
// Speech Defaults
// ==========================================================================

/// Speech rate (1.0 = engine normal speed).
pub const DEFAULT_SPEECH_RATE: f32 = 0.9;

/// Speech pitch (1.0 = engine default pitch).
pub const DEFAULT_SPEECH_PITCH: f32 = 1.0;

/// Speech volume (0.0 to 1.0).
pub const DEFAULT_SPEECH_VOLUME: f32 = 1.0;

/// Language requested from the speech engine.
pub const DEFAULT_SPEECH_LANGUAGE: &str = "en-US";

/// Preferred voices have a language starting with this prefix.
pub const PREFERRED_VOICE_LANG_PREFIX: &str = "en";

/// Voices whose name contains this marker are skipped when choosing a voice.
pub const EXCLUDED_VOICE_MARKER: &str = "Google";

/// Maximum number of characters handed to the speech engine.
pub const SPEECH_MAX_CHARS: usize = 1000;

/// Suffix appended to truncated speech text.
pub const SPEECH_TRUNCATION_SUFFIX: &str = "...";

/// Bounds accepted for configured speech rate.
pub const MIN_SPEECH_RATE: f32 = 0.1;
pub const MAX_SPEECH_RATE: f32 = 10.0;

// ==========================================================================
// Tone Defaults
// ==========================================================================

/// Frequency of the fallback tone in Hz.
pub const TONE_FREQUENCY_HZ: f32 = 800.0;

/// Initial gain of the fallback tone.
pub const TONE_START_GAIN: f32 = 0.1;

/// Gain reached at the end of the tone (exponential decay).
pub const TONE_END_GAIN: f32 = 0.01;

/// Duration of the fallback tone in milliseconds.
pub const TONE_DURATION_MS: u64 = 500;

/// Delay before the playing flag clears after the tone was emitted.
pub const TONE_PLAYING_CLEAR_MS: u64 = 500;

/// Delay before the playing flag clears when the tone itself failed.
pub const TONE_FAILURE_CLEAR_MS: u64 = 1000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Frame delay used when an animated file reports a zero delay.
pub const DEFAULT_FRAME_DELAY_MS: u64 = 100;

/// Number of decoded assets kept in memory for the session.
pub const DECODED_CACHE_CAPACITY: usize = 32;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_NUMBERED_IMAGES > 0);

    // Source validation
    assert!(MIN_CONNECT_TIMEOUT_SECS > 0);
    assert!(MAX_CONNECT_TIMEOUT_SECS >= MIN_CONNECT_TIMEOUT_SECS);
    assert!(DEFAULT_CONNECT_TIMEOUT_SECS >= MIN_CONNECT_TIMEOUT_SECS);
    assert!(DEFAULT_CONNECT_TIMEOUT_SECS <= MAX_CONNECT_TIMEOUT_SECS);

    // Speech validation
    assert!(DEFAULT_SPEECH_RATE >= MIN_SPEECH_RATE);
    assert!(DEFAULT_SPEECH_RATE <= MAX_SPEECH_RATE);
    assert!(DEFAULT_SPEECH_VOLUME >= 0.0);
    assert!(DEFAULT_SPEECH_VOLUME <= 1.0);
    assert!(SPEECH_MAX_CHARS > SPEECH_TRUNCATION_SUFFIX.len());

    // Tone validation
    assert!(TONE_FREQUENCY_HZ > 0.0);
    assert!(TONE_START_GAIN > TONE_END_GAIN);
    assert!(TONE_END_GAIN > 0.0);
    assert!(TONE_FAILURE_CLEAR_MS >= TONE_PLAYING_CLEAR_MS);

    assert!(DEFAULT_FRAME_DELAY_MS > 0);
    assert!(DECODED_CACHE_CAPACITY > 0);
};
