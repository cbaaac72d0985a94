// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! detail view.
//!
//! The `App` struct wires together the screens, localization, the asset
//! source and the speech controller, and translates screen effects into
//! side effects like starting playback or opening a concept.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::loader;
use crate::application::port::{AssetSource, FetchError, FetchResult, SpeechEngine};
use crate::application::speech::{SpeechController, SpeechSettings};
use crate::config::{self, Config};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{CommandSpeechEngine, CpalTonePlayer, HttpAssetSource};
use crate::media::DecodedCache;
use crate::ui::theming::ThemeMode;
use crate::ui::{gallery, viewer};
use futures_util::future::BoxFuture;
use iced::{window, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Why the manifest could not be loaded, on [`Screen::Error`].
    manifest_error: Option<Error>,
    gallery: gallery::State,
    detail: Option<viewer::State>,
    source: Arc<dyn AssetSource>,
    manifest_path: String,
    speech: SpeechController,
    /// Decoded assets shared across detail sessions.
    cache: DecodedCache,
    /// Bumped every time a concept is opened.
    generation: u64,
    theme_mode: ThemeMode,
    error_details_visible: bool,
    /// i18n key of a startup warning (unreadable settings file).
    warning: Option<String>,
    spinner_rotation: f32,
    last_tick: Option<std::time::Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("generation", &self.generation)
            .field("speech", &self.speech)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Speech engine, tone player and settings from `[speech]`.
fn build_speech(config: &Config) -> SpeechController {
    let engine: Option<Arc<dyn SpeechEngine>> = if config.speech.is_enabled() {
        CommandSpeechEngine::detect(config.speech.command.as_deref())
            .map(|engine| Arc::new(engine) as Arc<dyn SpeechEngine>)
    } else {
        tracing::info!("speech disabled in settings");
        None
    };
    if engine.is_none() {
        tracing::info!("no speech synthesizer, audio feedback only");
    }
    SpeechController::new(
        engine,
        Arc::new(CpalTonePlayer),
        SpeechSettings::from(&config.speech),
    )
}

impl App {
    /// Builds the application from the launcher flags and starts the
    /// manifest fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let base_url = flags
            .base_url
            .clone()
            .unwrap_or_else(|| config.source.effective_base_url());
        let manifest_path = flags
            .manifest
            .clone()
            .map(|path| path.trim_start_matches('/').to_string())
            .unwrap_or_else(|| config.source.effective_manifest_path());

        let speech = build_speech(&config);
        let theme_mode = config.general.theme_mode;

        match HttpAssetSource::new(&base_url, config.source.connect_timeout()) {
            Ok(source) => {
                tracing::info!(%base_url, manifest = %manifest_path, "starting");
                let source: Arc<dyn AssetSource> = Arc::new(source);
                let app =
                    Self::with_source(i18n, source, manifest_path, speech, theme_mode, warning);
                let task = app.load_manifest();
                (app, task)
            }
            Err(err) => {
                tracing::warn!(%base_url, error = %err, "invalid server address");
                let source: Arc<dyn AssetSource> = Arc::new(UnreachableSource(err.clone()));
                let mut app =
                    Self::with_source(i18n, source, manifest_path, speech, theme_mode, warning);
                app.manifest_failed(Error::Fetch(err));
                (app, Task::none())
            }
        }
    }

    /// App in the loading state, reading from `source`.
    pub fn with_source(
        i18n: I18n,
        source: Arc<dyn AssetSource>,
        manifest_path: String,
        speech: SpeechController,
        theme_mode: ThemeMode,
        warning: Option<String>,
    ) -> Self {
        Self {
            i18n,
            screen: Screen::Loading,
            manifest_error: None,
            gallery: gallery::State::default(),
            detail: None,
            source,
            manifest_path,
            speech,
            cache: DecodedCache::default(),
            generation: 0,
            theme_mode,
            error_details_visible: false,
            warning,
            spinner_rotation: 0.0,
            last_tick: None,
        }
    }

    /// Task fetching and parsing the manifest.
    pub fn load_manifest(&self) -> Task<Message> {
        let source = Arc::clone(&self.source);
        let path = self.manifest_path.clone();
        Task::future(async move {
            Message::ManifestLoaded(loader::load_manifest(source.as_ref(), &path).await)
        })
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    #[must_use]
    pub fn detail(&self) -> Option<&viewer::State> {
        self.detail.as_ref()
    }

    #[must_use]
    pub fn speech(&self) -> &SpeechController {
        &self.speech
    }

    fn title(&self) -> String {
        match &self.detail {
            Some(detail) => format!(
                "{} - {}",
                detail.concept().title,
                self.i18n.tr("window-title")
            ),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let animating = match self.screen {
            Screen::Loading => true,
            Screen::Error => false,
            Screen::Gallery => self.gallery.is_resolving(),
            Screen::Detail => self.detail.as_ref().is_some_and(viewer::State::needs_ticks),
        };
        Subscription::batch([
            subscription::keyboard(),
            subscription::ticks(animating),
        ])
    }

    fn manifest_failed(&mut self, err: Error) {
        self.manifest_error = Some(err);
        self.screen = Screen::Error;
    }
}

/// Stand-in source when the configured base URL cannot be parsed.
struct UnreachableSource(FetchError);

impl AssetSource for UnreachableSource {
    fn probe(&self, _path: &str) -> BoxFuture<'_, FetchResult<bool>> {
        Box::pin(std::future::ready(Err(self.0.clone())))
    }

    fn fetch_text(&self, _path: &str) -> BoxFuture<'_, FetchResult<String>> {
        Box::pin(std::future::ready(Err(self.0.clone())))
    }

    fn fetch_bytes(&self, _path: &str) -> BoxFuture<'_, FetchResult<Vec<u8>>> {
        Box::pin(std::future::ready(Err(self.0.clone())))
    }
}
