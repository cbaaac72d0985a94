// SPDX-License-Identifier: MPL-2.0
//! Text-to-speech port definition.
//!
//! The [`SpeechEngine`] trait is the opaque speech capability: list voices,
//! speak one utterance, cancel. The [`SpeechController`](crate::application::speech::SpeechController)
//! owns the single engine handle and decides what to say.

use futures_util::future::BoxFuture;
use std::fmt;

/// A synthesizer voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    /// Engine-specific identifier passed back when speaking.
    pub name: String,
    /// BCP 47-style language tag (e.g. `en-US`, `en-gb`).
    pub lang: String,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// One request to speak.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// 1.0 is the engine's normal speed.
    pub rate: f32,
    /// 1.0 is the engine's default pitch.
    pub pitch: f32,
    /// 0.0 to 1.0.
    pub volume: f32,
    pub lang: String,
    /// `None` lets the engine pick its default voice for `lang`.
    pub voice: Option<Voice>,
}

/// Errors reported by a speech engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    /// No synthesizer is available on this system.
    Unsupported,

    /// The utterance was cancelled before it finished.
    Cancelled,

    /// The synthesizer could not be started.
    Launch(String),

    /// The synthesizer ran but reported a failure.
    Synthesis(String),
}

impl fmt::Display for SpeechError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeechError::Unsupported => write!(f, "Speech synthesis is not supported"),
            SpeechError::Cancelled => write!(f, "Speech was cancelled"),
            SpeechError::Launch(msg) => write!(f, "Failed to start speech synthesizer: {msg}"),
            SpeechError::Synthesis(msg) => write!(f, "Speech synthesis failed: {msg}"),
        }
    }
}

impl std::error::Error for SpeechError {}

/// Port for a text-to-speech capability.
///
/// Implementations hold at most one active utterance: `speak` replaces any
/// utterance that is still running, and `cancel` is idempotent.
pub trait SpeechEngine: Send + Sync {
    /// Lists available voices. May wait until the engine has loaded them.
    fn voices(&self) -> BoxFuture<'_, Vec<Voice>>;

    /// Speaks `utterance`. The future resolves when speech ends, fails, or
    /// is cancelled (`Err(SpeechError::Cancelled)`).
    fn speak(&self, utterance: Utterance) -> BoxFuture<'static, Result<(), SpeechError>>;

    /// Cancels the active utterance, if any.
    fn cancel(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let err = SpeechError::Synthesis("exit status 1".into());
        assert_eq!(err.to_string(), "Speech synthesis failed: exit status 1");
    }
}
