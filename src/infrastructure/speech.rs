// SPDX-License-Identifier: MPL-2.0
//! Speech synthesis through a command-line synthesizer.
//!
//! Supports `espeak-ng` / `espeak` (Linux, Windows) and `say` (macOS). One
//! child process is active at a time; starting a new utterance or calling
//! [`cancel`](SpeechEngine::cancel) kills the previous one.

use crate::application::port::{SpeechEngine, SpeechError, Utterance, Voice};
use futures_util::future::BoxFuture;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Mutex;
use tokio::process::Command;
use tokio::sync::{oneshot, OnceCell};

/// Programs tried, in order, when no synthesizer is configured.
const CANDIDATE_PROGRAMS: [&str; 3] = ["espeak-ng", "espeak", "say"];

/// Words per minute at rate 1.0.
const BASE_WORDS_PER_MINUTE: f32 = 175.0;

/// Command-line dialect of a synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Synthesizer {
    Espeak,
    Say,
}

impl Synthesizer {
    /// Guesses the dialect from the program name. Unknown programs are
    /// assumed to accept espeak options.
    #[must_use]
    pub fn from_program(program: &Path) -> Self {
        let stem = program
            .file_stem()
            .map(|s| s.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        if stem == "say" {
            Synthesizer::Say
        } else {
            Synthesizer::Espeak
        }
    }
}

/// Speech engine backed by a synthesizer subprocess.
pub struct CommandSpeechEngine {
    program: PathBuf,
    synthesizer: Synthesizer,
    voices: OnceCell<Vec<Voice>>,
    active: Mutex<Option<oneshot::Sender<()>>>,
}

impl std::fmt::Debug for CommandSpeechEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpeechEngine")
            .field("program", &self.program)
            .field("synthesizer", &self.synthesizer)
            .finish_non_exhaustive()
    }
}

impl CommandSpeechEngine {
    #[must_use]
    pub fn new(program: PathBuf) -> Self {
        let synthesizer = Synthesizer::from_program(&program);
        Self {
            program,
            synthesizer,
            voices: OnceCell::new(),
            active: Mutex::new(None),
        }
    }

    /// Finds a synthesizer: the configured command if given, otherwise the
    /// first known program on `PATH`. Returns `None` when speech is unsupported.
    #[must_use]
    pub fn detect(configured: Option<&str>) -> Option<Self> {
        let program = match configured.map(str::trim).filter(|c| !c.is_empty()) {
            Some(command) => {
                let path = Path::new(command);
                if path.components().count() > 1 {
                    path.is_file().then(|| path.to_path_buf())
                } else {
                    find_in_path(command)
                }
            }
            None => CANDIDATE_PROGRAMS.iter().find_map(|name| find_in_path(name)),
        };

        match program {
            Some(program) => {
                tracing::info!(program = %program.display(), "speech synthesizer found");
                Some(Self::new(program))
            }
            None => {
                tracing::info!("no speech synthesizer found, using tone feedback");
                None
            }
        }
    }

    async fn list_voices(&self) -> Vec<Voice> {
        let args: &[&str] = match self.synthesizer {
            Synthesizer::Espeak => &["--voices"],
            Synthesizer::Say => &["-v", "?"],
        };
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await;

        match output {
            Ok(output) if output.status.success() => {
                let listing = String::from_utf8_lossy(&output.stdout);
                let voices = match self.synthesizer {
                    Synthesizer::Espeak => parse_espeak_voices(&listing),
                    Synthesizer::Say => parse_say_voices(&listing),
                };
                tracing::debug!(count = voices.len(), "speech voices loaded");
                voices
            }
            Ok(output) => {
                tracing::debug!(status = %output.status, "voice listing failed");
                Vec::new()
            }
            Err(err) => {
                tracing::debug!(error = %err, "voice listing failed");
                Vec::new()
            }
        }
    }
}

impl SpeechEngine for CommandSpeechEngine {
    fn voices(&self) -> BoxFuture<'_, Vec<Voice>> {
        Box::pin(async move { self.voices.get_or_init(|| self.list_voices()).await.clone() })
    }

    fn speak(&self, utterance: Utterance) -> BoxFuture<'static, Result<(), SpeechError>> {
        let (cancel_tx, cancel_rx) = oneshot::channel();
        if let Ok(mut active) = self.active.lock() {
            if let Some(previous) = active.replace(cancel_tx) {
                let _ = previous.send(());
            }
        }

        let mut command = Command::new(&self.program);
        command
            .args(build_args(self.synthesizer, &utterance))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        Box::pin(async move {
            let mut child = command
                .spawn()
                .map_err(|e| SpeechError::Launch(e.to_string()))?;

            tokio::select! {
                status = child.wait() => match status {
                    Ok(status) if status.success() => Ok(()),
                    Ok(status) => Err(SpeechError::Synthesis(format!("synthesizer exited with {status}"))),
                    Err(err) => Err(SpeechError::Synthesis(err.to_string())),
                },
                _ = cancel_rx => {
                    if let Err(err) = child.kill().await {
                        tracing::debug!(error = %err, "failed to kill synthesizer");
                    }
                    Err(SpeechError::Cancelled)
                }
            }
        })
    }

    fn cancel(&self) {
        if let Ok(mut active) = self.active.lock() {
            if let Some(sender) = active.take() {
                let _ = sender.send(());
            }
        }
    }
}

/// Command-line arguments for one utterance.
#[must_use]
pub fn build_args(synthesizer: Synthesizer, utterance: &Utterance) -> Vec<String> {
    let words_per_minute = (BASE_WORDS_PER_MINUTE * utterance.rate)
        .round()
        .clamp(80.0, 450.0) as u32;
    let mut args = Vec::new();

    match synthesizer {
        Synthesizer::Espeak => {
            let pitch = (50.0 * utterance.pitch).round().clamp(0.0, 99.0) as u32;
            let amplitude = (100.0 * utterance.volume).round().clamp(0.0, 200.0) as u32;
            let voice = utterance
                .voice
                .as_ref()
                .map_or_else(|| utterance.lang.to_ascii_lowercase(), |v| v.name.clone());
            args.extend([
                "-s".to_string(),
                words_per_minute.to_string(),
                "-p".to_string(),
                pitch.to_string(),
                "-a".to_string(),
                amplitude.to_string(),
                "-v".to_string(),
                voice,
            ]);
        }
        Synthesizer::Say => {
            if let Some(voice) = &utterance.voice {
                args.extend(["-v".to_string(), voice.name.clone()]);
            }
            args.extend(["-r".to_string(), words_per_minute.to_string()]);
        }
    }

    // A leading dash would be read as an option.
    if utterance.text.starts_with('-') {
        args.push(format!(" {}", utterance.text));
    } else {
        args.push(utterance.text.clone());
    }
    args
}

/// Parses `espeak-ng --voices` output.
#[must_use]
pub fn parse_espeak_voices(listing: &str) -> Vec<Voice> {
    listing
        .lines()
        .skip(1)
        .filter_map(|line| {
            let columns: Vec<&str> = line.split_whitespace().collect();
            match columns.as_slice() {
                [_priority, lang, _age_gender, name, ..] => Some(Voice::new(*name, *lang)),
                _ => None,
            }
        })
        .collect()
}

/// Parses `say -v ?` output (`Name   en_US    # sample sentence`).
#[must_use]
pub fn parse_say_voices(listing: &str) -> Vec<Voice> {
    listing
        .lines()
        .filter_map(|line| {
            let head = line.split('#').next()?.trim_end();
            let (name, lang) = head.rsplit_once(char::is_whitespace)?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(Voice::new(name, lang.replace('_', "-")))
        })
        .collect()
}

fn find_in_path(program: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths).find_map(|dir| {
        let candidate = dir.join(program);
        if candidate.is_file() {
            return Some(candidate);
        }
        let with_exe = candidate.with_extension("exe");
        with_exe.is_file().then_some(with_exe)
    })
}
