// SPDX-License-Identifier: MPL-2.0
//! Speech playback controller.
//!
//! Owns the single [`SpeechEngine`] handle and the fallback [`TonePlayer`].
//! Every playback gets a generation number; events carrying an older
//! generation are ignored, so a superseded utterance can never clear the
//! playing flag of the current one. The current generation is shared with
//! the playback futures, which give up without speaking once they are
//! outdated.
//!
//! The controller never spawns work itself: [`SpeechController::play`] and
//! [`SpeechController::handle`] return futures that the caller runs (the app
//! wraps them in `Task::future`) and feeds back through `handle`.

use crate::application::port::{
    SpeechEngine, SpeechError, TonePlayer, ToneSpec, Utterance, Voice,
};
use crate::config::defaults::{
    DEFAULT_SPEECH_LANGUAGE, DEFAULT_SPEECH_PITCH, DEFAULT_SPEECH_RATE, DEFAULT_SPEECH_VOLUME,
    EXCLUDED_VOICE_MARKER, PREFERRED_VOICE_LANG_PREFIX, SPEECH_MAX_CHARS,
    SPEECH_TRUNCATION_SUFFIX, TONE_FAILURE_CLEAR_MS, TONE_PLAYING_CLEAR_MS,
};
use crate::config::SpeechConfig;
use futures_util::future::BoxFuture;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

// =============================================================================
// Text preparation
// =============================================================================

/// Removes heading markers: 1 to 6 `#` followed by one whitespace character.
/// Longer runs keep their leading excess `#`.
fn strip_heading_markers(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '#' {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let run = chars[i..].iter().take_while(|&&c| c == '#').count();
        let before_space = chars.get(i + run).is_some_and(|c| c.is_whitespace());
        if before_space {
            out.extend(std::iter::repeat_n('#', run.saturating_sub(6)));
            i += run + 1;
        } else {
            out.extend(std::iter::repeat_n('#', run));
            i += run;
        }
    }
    out
}

/// Replaces every newline / whitespace / newline span with `". "`.
fn collapse_blank_lines(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '\n' {
            let run_end = i
                + 1
                + chars[i + 1..]
                    .iter()
                    .take_while(|c| c.is_whitespace())
                    .count();
            if let Some(last_newline) = (i + 1..run_end).rev().find(|&j| chars[j] == '\n') {
                out.push_str(". ");
                i = last_newline + 1;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

fn is_speakable(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() || ".,!?;:-".contains(c)
}

/// Turns description markup into plain speakable text.
#[must_use]
pub fn sanitize(text: &str) -> String {
    let text = strip_heading_markers(text);
    let text = collapse_blank_lines(&text);
    let text = text.replace('\n', " ");
    let text: String = text.chars().filter(|&c| is_speakable(c)).collect();
    text.trim().to_string()
}

/// Limits `text` to `max_chars` characters, appending `...` when cut.
#[must_use]
pub fn truncate(text: String, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], SPEECH_TRUNCATION_SUFFIX),
        None => text,
    }
}

/// First English voice that is not a Google network voice.
#[must_use]
pub fn select_voice(voices: &[Voice]) -> Option<Voice> {
    voices
        .iter()
        .find(|v| {
            v.lang.starts_with(PREFERRED_VOICE_LANG_PREFIX)
                && !v.name.contains(EXCLUDED_VOICE_MARKER)
        })
        .cloned()
}

// =============================================================================
// Settings and events
// =============================================================================

/// Utterance parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechSettings {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    pub language: String,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            rate: DEFAULT_SPEECH_RATE,
            pitch: DEFAULT_SPEECH_PITCH,
            volume: DEFAULT_SPEECH_VOLUME,
            language: DEFAULT_SPEECH_LANGUAGE.to_string(),
        }
    }
}

impl From<&SpeechConfig> for SpeechSettings {
    fn from(config: &SpeechConfig) -> Self {
        Self {
            rate: config.effective_rate(),
            pitch: config.effective_pitch(),
            volume: config.effective_volume(),
            language: config.effective_language(),
        }
    }
}

/// How a playback attempt ended.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackOutcome {
    Finished,
    Cancelled,
    Failed(SpeechError),
    /// The fallback tone ran its course.
    FallbackDone { tone_played: bool },
}

/// Completion of a playback future, tagged with its generation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackEvent {
    pub generation: u64,
    pub outcome: PlaybackOutcome,
}

/// Future driving one playback step.
pub type Playback = BoxFuture<'static, PlaybackEvent>;

// =============================================================================
// SpeechController
// =============================================================================

pub struct SpeechController {
    engine: Option<Arc<dyn SpeechEngine>>,
    tone: Arc<dyn TonePlayer>,
    settings: SpeechSettings,
    generation: Arc<AtomicU64>,
    playing: bool,
    clear_delay: Duration,
    failure_clear_delay: Duration,
}

impl std::fmt::Debug for SpeechController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechController")
            .field("supported", &self.engine.is_some())
            .field("generation", &self.generation())
            .field("playing", &self.playing)
            .finish_non_exhaustive()
    }
}

impl SpeechController {
    /// `engine` is `None` when no synthesizer is available; every playback
    /// then goes straight to the tone.
    pub fn new(
        engine: Option<Arc<dyn SpeechEngine>>,
        tone: Arc<dyn TonePlayer>,
        settings: SpeechSettings,
    ) -> Self {
        Self {
            engine,
            tone,
            settings,
            generation: Arc::new(AtomicU64::new(0)),
            playing: false,
            clear_delay: Duration::from_millis(TONE_PLAYING_CLEAR_MS),
            failure_clear_delay: Duration::from_millis(TONE_FAILURE_CLEAR_MS),
        }
    }

    /// Overrides how long the playing flag stays set after the tone
    /// (played, failed).
    #[must_use]
    pub fn with_fallback_delays(mut self, played: Duration, failed: Duration) -> Self {
        self.clear_delay = played;
        self.failure_clear_delay = failed;
        self
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.engine.is_some()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Cancels any active playback, including futures that have not
    /// reached the engine yet. Idempotent.
    pub fn stop(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(engine) = &self.engine {
            engine.cancel();
        }
        self.playing = false;
    }

    /// Starts speaking `text`, replacing any active playback.
    pub fn play(&mut self, text: &str) -> Playback {
        self.stop();
        self.playing = true;
        let generation = self.generation();
        let text = truncate(sanitize(text), SPEECH_MAX_CHARS);

        let Some(engine) = self.engine.clone() else {
            tracing::debug!("speech unsupported, playing fallback tone");
            return self.fallback(generation);
        };

        let settings = self.settings.clone();
        let current = Arc::clone(&self.generation);
        Box::pin(async move {
            let voices = engine.voices().await;
            if current.load(Ordering::SeqCst) != generation {
                tracing::trace!(generation, "playback outdated before speaking");
                return PlaybackEvent {
                    generation,
                    outcome: PlaybackOutcome::Cancelled,
                };
            }
            let utterance = Utterance {
                text,
                rate: settings.rate,
                pitch: settings.pitch,
                volume: settings.volume,
                lang: settings.language,
                voice: select_voice(&voices),
            };
            let outcome = match engine.speak(utterance).await {
                Ok(()) => PlaybackOutcome::Finished,
                Err(SpeechError::Cancelled) => PlaybackOutcome::Cancelled,
                Err(err) => PlaybackOutcome::Failed(err),
            };
            PlaybackEvent {
                generation,
                outcome,
            }
        })
    }

    /// Play/Stop button: stops when playing, otherwise plays.
    /// Empty text does nothing.
    pub fn toggle(&mut self, text: &str) -> Option<Playback> {
        if text.is_empty() {
            return None;
        }
        if self.playing {
            self.stop();
            None
        } else {
            Some(self.play(text))
        }
    }

    /// Applies a completed playback step. Returns the follow-up step, if any.
    pub fn handle(&mut self, event: PlaybackEvent) -> Option<Playback> {
        let current = self.generation();
        if event.generation != current {
            tracing::trace!(
                stale = event.generation,
                current,
                "ignoring superseded playback event"
            );
            return None;
        }

        match event.outcome {
            PlaybackOutcome::Finished
            | PlaybackOutcome::Cancelled
            | PlaybackOutcome::FallbackDone { .. } => {
                self.playing = false;
                None
            }
            PlaybackOutcome::Failed(err) => {
                tracing::warn!(error = %err, "speech failed, playing fallback tone");
                Some(self.fallback(event.generation))
            }
        }
    }

    fn fallback(&self, generation: u64) -> Playback {
        let tone = Arc::clone(&self.tone);
        let current = Arc::clone(&self.generation);
        let clear_delay = self.clear_delay;
        let failure_clear_delay = self.failure_clear_delay;

        Box::pin(async move {
            if current.load(Ordering::SeqCst) != generation {
                return PlaybackEvent {
                    generation,
                    outcome: PlaybackOutcome::FallbackDone { tone_played: false },
                };
            }
            let played = tokio::task::spawn_blocking(move || tone.play(ToneSpec::default())).await;
            let tone_played = match played {
                Ok(Ok(())) => true,
                Ok(Err(err)) => {
                    tracing::warn!(error = %err, "fallback tone unavailable");
                    false
                }
                Err(err) => {
                    tracing::warn!(error = %err, "fallback tone task failed");
                    false
                }
            };
            let delay = if tone_played {
                clear_delay
            } else {
                failure_clear_delay
            };
            tokio::time::sleep(delay).await;
            PlaybackEvent {
                generation,
                outcome: PlaybackOutcome::FallbackDone { tone_played },
            }
        })
    }
}

impl Drop for SpeechController {
    fn drop(&mut self) {
        if let Some(engine) = &self.engine {
            engine.cancel();
        }
    }
}
