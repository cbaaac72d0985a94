// SPDX-License-Identifier: MPL-2.0
//! Detail view component: image carousel, lightbox and description.
//!
//! Every async result carries the [`SessionKey`] it was issued for and is
//! dropped when it does not match the open session.

use crate::application::loader::{self, LoadState};
use crate::application::port::{AssetSource, FetchError};
use crate::application::resolver;
use crate::config::defaults::MAX_NUMBERED_IMAGES;
use crate::domain::asset::ResolvedAssets;
use crate::domain::concept::{Concept, SessionKey};
use crate::domain::description::{self, DescriptionBlock};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, DecodedAsset, DecodedCache, MediaData};
use crate::ui::viewer::state::ViewerState;
use crate::ui::viewer::{lightbox, view};
use crate::ui::widgets::animated_spinner;
use iced::keyboard::{self, key::Named};
use iced::{Element, Task};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    AssetsResolved {
        session: SessionKey,
        files: Vec<String>,
    },
    DescriptionLoaded {
        session: SessionKey,
        result: Result<String, FetchError>,
    },
    MediaLoaded {
        session: SessionKey,
        index: usize,
        result: Result<DecodedAsset, Error>,
    },
    BackToGallery,
    Next,
    Previous,
    Select(usize),
    OpenFullscreen,
    CloseFullscreen,
    ZoomIn,
    ZoomOut,
    Rotate,
    ResetView,
    ToggleSpeech,
    KeyPressed(keyboard::Key),
    Tick(Instant),
}

/// Requests for the application shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    BackToGallery,
    /// Play/Stop pressed with the loaded description text.
    ToggleSpeech(String),
}

/// Description text with its parsed blocks.
#[derive(Debug, Clone)]
pub struct Description {
    pub text: String,
    pub blocks: Vec<DescriptionBlock>,
}

#[derive(Debug, Clone)]
pub enum MediaSlot {
    Loading,
    Ready(MediaData),
    Failed,
}

/// Things the detail view needs from the shell while updating.
pub struct UpdateEnv<'a> {
    pub source: &'a Arc<dyn AssetSource>,
    pub cache: &'a mut DecodedCache,
}

/// Things the detail view needs from the shell while rendering.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub speech_supported: bool,
    pub speech_playing: bool,
}

#[derive(Debug)]
pub struct State {
    concept: Arc<Concept>,
    session: SessionKey,
    assets: ResolvedAssets,
    viewer: ViewerState,
    description: LoadState<Description>,
    slots: Vec<MediaSlot>,
    /// Current asset should animate but is shown as a still image.
    animation_failed: bool,
    shown_at: Instant,
    now: Instant,
    spinner_rotation: f32,
}

impl State {
    /// Opens `concept` and starts asset resolution and the description fetch.
    pub fn open(
        concept: Arc<Concept>,
        generation: u64,
        source: &Arc<dyn AssetSource>,
    ) -> (Self, Task<Message>) {
        let session = SessionKey::new(&concept, generation);
        let now = Instant::now();
        tracing::debug!(concept = %concept.id, generation, "opening concept");

        let resolve = {
            let source = Arc::clone(source);
            let concept = Arc::clone(&concept);
            let session = session.clone();
            Task::future(async move {
                let files =
                    resolver::resolve_numbered_images(source.as_ref(), &concept, MAX_NUMBERED_IMAGES)
                        .await;
                Message::AssetsResolved { session, files }
            })
        };
        let describe = {
            let source = Arc::clone(source);
            let concept = Arc::clone(&concept);
            let session = session.clone();
            Task::future(async move {
                let result = loader::load_description(source.as_ref(), &concept).await;
                Message::DescriptionLoaded { session, result }
            })
        };

        let state = Self {
            concept,
            session,
            assets: ResolvedAssets::pending(),
            viewer: ViewerState::new(),
            description: LoadState::Loading,
            slots: Vec::new(),
            animation_failed: false,
            shown_at: now,
            now,
            spinner_rotation: 0.0,
        };
        (state, Task::batch([resolve, describe]))
    }

    #[must_use]
    pub fn concept(&self) -> &Concept {
        &self.concept
    }

    #[must_use]
    pub fn session(&self) -> &SessionKey {
        &self.session
    }

    #[must_use]
    pub fn assets(&self) -> &ResolvedAssets {
        &self.assets
    }

    #[must_use]
    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    #[must_use]
    pub fn description(&self) -> &LoadState<Description> {
        &self.description
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&MediaSlot> {
        self.slots.get(index)
    }

    #[must_use]
    pub fn animation_failed(&self) -> bool {
        self.animation_failed
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Media of the current index, if decoded.
    #[must_use]
    pub fn current_media(&self) -> Option<&MediaData> {
        match self.slots.get(self.viewer.index()) {
            Some(MediaSlot::Ready(media)) => Some(media),
            _ => None,
        }
    }

    /// Frame of the current asset at the latest tick.
    #[must_use]
    pub fn current_frame(&self) -> Option<&media::ImageData> {
        self.current_media()
            .map(|media| media.frame_at(self.now.saturating_duration_since(self.shown_at)))
    }

    /// Whether the view changes over time (spinners or animation frames).
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        !self.assets.is_complete()
            || self.description.is_loading()
            || self.current_media().is_some_and(MediaData::is_animated)
            || matches!(self.slots.get(self.viewer.index()), Some(MediaSlot::Loading))
    }

    pub fn handle_message(&mut self, message: Message, env: UpdateEnv<'_>) -> (Effect, Task<Message>) {
        match message {
            Message::AssetsResolved { session, files } => {
                if !self.is_current(&session) {
                    return (Effect::None, Task::none());
                }
                self.viewer.set_count(files.len());
                self.slots = vec![MediaSlot::Loading; files.len()];
                self.assets = ResolvedAssets::complete(files);
                let mut tasks = Vec::with_capacity(self.assets.len());
                for index in 0..self.assets.len() {
                    tasks.push(self.load_slot(index, env.source, env.cache));
                }
                self.restart_clock();
                (Effect::None, Task::batch(tasks))
            }
            Message::DescriptionLoaded { session, result } => {
                if !self.is_current(&session) {
                    return (Effect::None, Task::none());
                }
                self.description = match result {
                    Ok(text) => LoadState::Ready(Description {
                        blocks: description::parse(&text),
                        text,
                    }),
                    Err(err) => LoadState::Failed(err.reason().to_string()),
                };
                (Effect::None, Task::none())
            }
            Message::MediaLoaded {
                session,
                index,
                result,
            } => {
                if !self.is_current(&session) || index >= self.slots.len() {
                    return (Effect::None, Task::none());
                }
                let slot = match result {
                    Ok(decoded) => {
                        if decoded.animation_failed {
                            if index == self.viewer.index() {
                                self.animation_failed = true;
                            }
                        } else if let Some(path) = self.path_of(index) {
                            env.cache.insert(path, decoded.media.clone());
                        }
                        MediaSlot::Ready(decoded.media)
                    }
                    Err(err) => {
                        tracing::warn!(index, error = %err, "asset could not be loaded");
                        MediaSlot::Failed
                    }
                };
                self.slots[index] = slot;
                if index == self.viewer.index() {
                    self.restart_clock();
                }
                (Effect::None, Task::none())
            }
            Message::BackToGallery => (Effect::BackToGallery, Task::none()),
            Message::Next => {
                let changed = self.viewer.next();
                (Effect::None, self.after_navigation(changed, env))
            }
            Message::Previous => {
                let changed = self.viewer.prev();
                (Effect::None, self.after_navigation(changed, env))
            }
            Message::Select(index) => {
                let changed = self.viewer.select(index);
                (Effect::None, self.after_navigation(changed, env))
            }
            Message::OpenFullscreen => {
                self.viewer.open_fullscreen();
                (Effect::None, Task::none())
            }
            Message::CloseFullscreen => {
                self.viewer.close_fullscreen();
                (Effect::None, Task::none())
            }
            Message::ZoomIn => {
                self.viewer.zoom_in();
                (Effect::None, Task::none())
            }
            Message::ZoomOut => {
                self.viewer.zoom_out();
                (Effect::None, Task::none())
            }
            Message::Rotate => {
                self.viewer.rotate();
                (Effect::None, Task::none())
            }
            Message::ResetView => {
                self.viewer.reset_view();
                (Effect::None, Task::none())
            }
            Message::ToggleSpeech => match self.description.ready() {
                Some(description) if !description.text.is_empty() => (
                    Effect::ToggleSpeech(description.text.clone()),
                    Task::none(),
                ),
                _ => (Effect::None, Task::none()),
            },
            Message::KeyPressed(key) => self.handle_key(key, env),
            Message::Tick(now) => {
                let elapsed = now.saturating_duration_since(self.now).as_secs_f32();
                self.spinner_rotation = animated_spinner::advance(self.spinner_rotation, elapsed);
                self.now = now;
                (Effect::None, Task::none())
            }
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        if self.viewer.is_fullscreen() {
            lightbox::view(self, env.i18n)
        } else {
            view::detail(self, env)
        }
    }

    fn handle_key(&mut self, key: keyboard::Key, env: UpdateEnv<'_>) -> (Effect, Task<Message>) {
        let fullscreen = self.viewer.is_fullscreen();
        let message = match key.as_ref() {
            keyboard::Key::Named(Named::Escape) if fullscreen => Message::CloseFullscreen,
            keyboard::Key::Named(Named::Escape) => Message::BackToGallery,
            keyboard::Key::Named(Named::ArrowRight) => Message::Next,
            keyboard::Key::Named(Named::ArrowLeft) => Message::Previous,
            keyboard::Key::Character("+" | "=") if fullscreen => Message::ZoomIn,
            keyboard::Key::Character("-" | "_") if fullscreen => Message::ZoomOut,
            keyboard::Key::Character("r" | "R") if fullscreen => Message::Rotate,
            _ => return (Effect::None, Task::none()),
        };
        self.handle_message(message, env)
    }

    fn is_current(&self, session: &SessionKey) -> bool {
        if *session == self.session {
            true
        } else {
            tracing::trace!(
                stale = session.generation,
                current = self.session.generation,
                "dropping stale result"
            );
            false
        }
    }

    fn path_of(&self, index: usize) -> Option<String> {
        self.assets
            .get(index)
            .map(|file| self.concept.asset_path(file))
    }

    fn restart_clock(&mut self) {
        self.shown_at = Instant::now();
        self.now = self.shown_at;
    }

    fn after_navigation(&mut self, changed: bool, env: UpdateEnv<'_>) -> Task<Message> {
        if !changed {
            return Task::none();
        }
        self.animation_failed = false;
        self.restart_clock();

        // Assets shown as stills after a failed animation get another try.
        let index = self.viewer.index();
        let retry = matches!(self.slots.get(index), Some(MediaSlot::Ready(media)) if !media.is_animated())
            && self
                .path_of(index)
                .is_some_and(|path| !env.cache.contains(&path))
            && self.assets.get(index).is_some_and(crate::domain::asset::is_animated);
        if retry {
            self.slots[index] = MediaSlot::Loading;
            return self.load_slot(index, env.source, env.cache);
        }
        Task::none()
    }

    fn load_slot(
        &mut self,
        index: usize,
        source: &Arc<dyn AssetSource>,
        cache: &mut DecodedCache,
    ) -> Task<Message> {
        let (Some(file), Some(path)) = (
            self.assets.get(index).map(str::to_string),
            self.path_of(index),
        ) else {
            return Task::none();
        };

        if let Some(media) = cache.get(&path) {
            self.slots[index] = MediaSlot::Ready(media.clone());
            return Task::none();
        }

        let source = Arc::clone(source);
        let session = self.session.clone();
        Task::future(async move {
            let result = media::fetch_decoded(source, path, file).await;
            Message::MediaLoaded {
                session,
                index,
                result,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::FetchResult;
    use futures_util::future::BoxFuture;

    struct EmptySource;

    impl AssetSource for EmptySource {
        fn probe(&self, _path: &str) -> BoxFuture<'_, FetchResult<bool>> {
            Box::pin(std::future::ready(Ok(false)))
        }

        fn fetch_text(&self, _path: &str) -> BoxFuture<'_, FetchResult<String>> {
            Box::pin(std::future::ready(Err(FetchError::from_status(404, None))))
        }

        fn fetch_bytes(&self, _path: &str) -> BoxFuture<'_, FetchResult<Vec<u8>>> {
            Box::pin(std::future::ready(Err(FetchError::from_status(404, None))))
        }
    }

    fn concept(id: &str) -> Arc<Concept> {
        Arc::new(Concept {
            id: id.to_string(),
            title: format!("{id} title"),
            folder: id.to_string(),
            main_image: format!("{id}.png"),
            images: Vec::new(),
            text_file: format!("{id}.txt"),
        })
    }

    fn source() -> Arc<dyn AssetSource> {
        Arc::new(EmptySource)
    }

    fn still() -> DecodedAsset {
        DecodedAsset {
            media: MediaData::Image(media::ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])),
            animation_failed: false,
        }
    }

    fn send(state: &mut State, message: Message, cache: &mut DecodedCache) -> Effect {
        let source = source();
        state
            .handle_message(
                message,
                UpdateEnv {
                    source: &source,
                    cache,
                },
            )
            .0
    }

    fn opened_with(files: &[&str], cache: &mut DecodedCache) -> State {
        let (mut state, _task) = State::open(concept("dragons"), 1, &source());
        let session = state.session().clone();
        send(
            &mut state,
            Message::AssetsResolved {
                session,
                files: files.iter().map(|f| f.to_string()).collect(),
            },
            cache,
        );
        state
    }

    #[test]
    fn resolved_assets_set_viewer_count() {
        let mut cache = DecodedCache::default();
        let state = opened_with(&["dragons.png", "dragons2.gif"], &mut cache);
        assert!(state.assets().is_complete());
        assert_eq!(state.viewer().count(), 2);
        assert!(matches!(state.slot(1), Some(MediaSlot::Loading)));
    }

    #[test]
    fn stale_results_are_ignored() {
        let mut cache = DecodedCache::default();
        let (mut state, _task) = State::open(concept("dragons"), 2, &source());
        let stale = SessionKey::new(state.concept(), 1);

        send(
            &mut state,
            Message::AssetsResolved {
                session: stale.clone(),
                files: vec!["dragons.png".into()],
            },
            &mut cache,
        );
        send(
            &mut state,
            Message::DescriptionLoaded {
                session: stale,
                result: Ok("# Old".into()),
            },
            &mut cache,
        );

        assert!(!state.assets().is_complete());
        assert!(state.description().is_loading());
    }

    #[test]
    fn decoded_media_fills_slot_and_cache() {
        let mut cache = DecodedCache::default();
        let mut state = opened_with(&["dragons.png"], &mut cache);
        let session = state.session().clone();
        send(
            &mut state,
            Message::MediaLoaded {
                session,
                index: 0,
                result: Ok(still()),
            },
            &mut cache,
        );
        assert!(state.current_media().is_some());
        assert!(cache.contains("dragons/dragons.png"));
    }

    #[test]
    fn cached_media_is_reused_on_reopen() {
        let mut cache = DecodedCache::default();
        cache.insert("dragons/dragons.png".into(), still().media);
        let state = opened_with(&["dragons.png"], &mut cache);
        assert!(state.current_media().is_some());
    }

    #[test]
    fn failed_description_keeps_reason() {
        let mut cache = DecodedCache::default();
        let (mut state, _task) = State::open(concept("dragons"), 1, &source());
        let session = state.session().clone();
        send(
            &mut state,
            Message::DescriptionLoaded {
                session,
                result: Err(FetchError::from_status(404, None)),
            },
            &mut cache,
        );
        assert_eq!(state.description().error(), Some("Not Found"));
    }

    #[test]
    fn toggle_speech_needs_loaded_text() {
        let mut cache = DecodedCache::default();
        let (mut state, _task) = State::open(concept("dragons"), 1, &source());
        assert_eq!(
            send(&mut state, Message::ToggleSpeech, &mut cache),
            Effect::None
        );

        let session = state.session().clone();
        send(
            &mut state,
            Message::DescriptionLoaded {
                session,
                result: Ok("# Dragons\nFire.".into()),
            },
            &mut cache,
        );
        assert_eq!(
            send(&mut state, Message::ToggleSpeech, &mut cache),
            Effect::ToggleSpeech("# Dragons\nFire.".into())
        );
    }

    #[test]
    fn escape_closes_fullscreen_then_leaves() {
        let mut cache = DecodedCache::default();
        let mut state = opened_with(&["dragons.png"], &mut cache);
        send(&mut state, Message::OpenFullscreen, &mut cache);
        let escape = keyboard::Key::Named(Named::Escape);

        assert_eq!(
            send(&mut state, Message::KeyPressed(escape.clone()), &mut cache),
            Effect::None
        );
        assert!(!state.viewer().is_fullscreen());
        assert_eq!(
            send(&mut state, Message::KeyPressed(escape), &mut cache),
            Effect::BackToGallery
        );
    }

    #[test]
    fn zoom_keys_only_work_in_fullscreen() {
        let mut cache = DecodedCache::default();
        let mut state = opened_with(&["dragons.png"], &mut cache);
        send(
            &mut state,
            Message::KeyPressed(keyboard::Key::Character("+".into())),
            &mut cache,
        );
        assert_eq!(state.viewer().zoom().value(), 1.0);

        send(&mut state, Message::OpenFullscreen, &mut cache);
        send(
            &mut state,
            Message::KeyPressed(keyboard::Key::Character("+".into())),
            &mut cache,
        );
        assert_eq!(state.viewer().zoom().value(), 1.25);
    }
}
