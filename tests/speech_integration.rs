// SPDX-License-Identifier: MPL-2.0
use concept_lens::application::port::{
    SpeechEngine, SpeechError, ToneError, TonePlayer, ToneSpec, Utterance, Voice,
};
use concept_lens::application::speech::{
    PlaybackOutcome, SpeechController, SpeechSettings,
};
use futures_util::future::BoxFuture;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Records every utterance; fails when `fail` is set.
#[derive(Default)]
struct RecordingEngine {
    spoken: Mutex<Vec<Utterance>>,
    cancels: AtomicUsize,
    fail: bool,
}

impl RecordingEngine {
    fn texts(&self) -> Vec<String> {
        self.spoken
            .lock()
            .unwrap()
            .iter()
            .map(|u| u.text.clone())
            .collect()
    }
}

impl SpeechEngine for RecordingEngine {
    fn voices(&self) -> BoxFuture<'_, Vec<Voice>> {
        Box::pin(std::future::ready(vec![
            Voice::new("Google US English", "en-US"),
            Voice::new("Samantha", "en-US"),
        ]))
    }

    fn speak(&self, utterance: Utterance) -> BoxFuture<'static, Result<(), SpeechError>> {
        self.spoken.lock().unwrap().push(utterance);
        let result = if self.fail {
            Err(SpeechError::Synthesis("no audio device".into()))
        } else {
            Ok(())
        };
        Box::pin(std::future::ready(result))
    }

    fn cancel(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
struct CountingTone {
    plays: AtomicUsize,
}

impl TonePlayer for CountingTone {
    fn play(&self, _tone: ToneSpec) -> Result<(), ToneError> {
        self.plays.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn controller(engine: Option<Arc<RecordingEngine>>, tone: Arc<CountingTone>) -> SpeechController {
    SpeechController::new(
        engine.map(|e| e as Arc<dyn SpeechEngine>),
        tone,
        SpeechSettings::default(),
    )
    .with_fallback_delays(Duration::ZERO, Duration::ZERO)
}

#[tokio::test]
async fn second_play_replaces_the_first() {
    let engine = Arc::new(RecordingEngine::default());
    let mut speech = controller(Some(Arc::clone(&engine)), Arc::default());

    let first = speech.play("First concept.");
    let second = speech.play("Second concept.");
    assert!(speech.is_playing());

    let event = second.await;
    assert_eq!(event.outcome, PlaybackOutcome::Finished);
    assert!(speech.handle(event).is_none());
    assert!(!speech.is_playing());

    // The superseded playback completes but changes nothing.
    let stale = first.await;
    assert!(speech.handle(stale).is_none());
    assert!(!speech.is_playing());

    assert!(engine.cancels.load(Ordering::SeqCst) >= 2);
    assert_eq!(engine.texts(), vec!["Second concept.".to_string()]);
}

#[tokio::test]
async fn stop_before_first_poll_speaks_nothing() {
    let engine = Arc::new(RecordingEngine::default());
    let mut speech = controller(Some(Arc::clone(&engine)), Arc::default());

    let playback = speech.play("First concept.");
    speech.stop();
    let event = playback.await;

    assert_eq!(event.outcome, PlaybackOutcome::Cancelled);
    assert!(engine.texts().is_empty());
    assert!(speech.handle(event).is_none());
    assert!(!speech.is_playing());
}

#[tokio::test]
async fn stopped_fallback_skips_the_tone() {
    let tone = Arc::new(CountingTone::default());
    let mut speech = controller(None, Arc::clone(&tone));

    let playback = speech.play("Anything");
    speech.stop();
    let event = playback.await;

    assert!(speech.handle(event).is_none());
    assert_eq!(tone.plays.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn utterance_uses_settings_and_preferred_voice() {
    let engine = Arc::new(RecordingEngine::default());
    let mut speech = controller(Some(Arc::clone(&engine)), Arc::default());

    let _ = speech.play("# Title\n\n- **bold** point").await;

    let spoken = engine.spoken.lock().unwrap();
    let utterance = &spoken[0];
    assert_eq!(utterance.text, "Title. - bold point");
    assert_eq!(utterance.lang, "en-US");
    assert!((utterance.rate - 0.9).abs() < f32::EPSILON);
    assert_eq!(
        utterance.voice.as_ref().map(|v| v.name.as_str()),
        Some("Samantha")
    );
}

#[tokio::test]
async fn failed_speech_falls_back_to_tone() {
    let engine = Arc::new(RecordingEngine {
        fail: true,
        ..RecordingEngine::default()
    });
    let tone = Arc::new(CountingTone::default());
    let mut speech = controller(Some(engine), Arc::clone(&tone));

    let event = speech.play("Unlucky.").await;
    assert!(matches!(event.outcome, PlaybackOutcome::Failed(_)));
    let fallback = speech.handle(event).expect("fallback tone");
    assert!(speech.is_playing());

    let done = fallback.await;
    assert_eq!(
        done.outcome,
        PlaybackOutcome::FallbackDone { tone_played: true }
    );
    assert!(speech.handle(done).is_none());
    assert!(!speech.is_playing());
    assert_eq!(tone.plays.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unsupported_speech_plays_tone_only() {
    let tone = Arc::new(CountingTone::default());
    let mut speech = controller(None, Arc::clone(&tone));
    assert!(!speech.is_supported());

    let playback = speech.toggle("Anything").expect("tone playback");
    assert!(speech.is_playing());
    let done = playback.await;
    assert!(speech.handle(done).is_none());
    assert!(!speech.is_playing());
    assert_eq!(tone.plays.load(Ordering::SeqCst), 1);
}

#[test]
fn toggle_stops_active_playback() {
    let engine = Arc::new(RecordingEngine::default());
    let mut speech = controller(Some(Arc::clone(&engine)), Arc::default());

    assert!(speech.toggle("").is_none());
    assert!(!speech.is_playing());

    let _playback = speech.toggle("Hello").expect("starts playing");
    assert!(speech.is_playing());
    assert!(speech.toggle("Hello").is_none());
    assert!(!speech.is_playing());
}

#[tokio::test]
async fn stop_outdates_running_playback() {
    let engine = Arc::new(RecordingEngine::default());
    let mut speech = controller(Some(engine), Arc::default());

    let playback = speech.play("Hello");
    speech.stop();
    let event = playback.await;
    assert_ne!(event.generation, speech.generation());
    assert!(speech.handle(event).is_none());
    assert!(!speech.is_playing());
}
