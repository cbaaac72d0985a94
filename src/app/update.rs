// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screens report what they need through effects; this module turns those
//! into navigation, speech playback and follow-up tasks.

use super::{App, Message, Screen};
use crate::application::speech::Playback;
use crate::domain::concept::{Concept, ConceptsData};
use crate::error::Error;
use crate::ui::widgets::animated_spinner;
use crate::ui::{gallery, viewer};
use iced::Task;
use std::sync::Arc;
use std::time::Instant;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ManifestLoaded(Ok(data)) => self.handle_manifest(data),
            Message::ManifestLoaded(Err(err)) => {
                tracing::warn!(error = %err, "manifest unavailable");
                self.manifest_failed(err);
                Task::none()
            }
            Message::Gallery(message) => self.handle_gallery_message(message),
            Message::Detail(message) => self.handle_detail_message(message),
            Message::Speech(event) => match self.speech.handle(event) {
                Some(next) => speech_task(next),
                None => Task::none(),
            },
            Message::ToggleErrorDetails => {
                self.error_details_visible = !self.error_details_visible;
                Task::none()
            }
            Message::DismissWarning => {
                self.warning = None;
                Task::none()
            }
            Message::KeyPressed(key) => {
                if self.screen == Screen::Detail {
                    self.handle_detail_message(viewer::Message::KeyPressed(key))
                } else {
                    Task::none()
                }
            }
            Message::Tick(now) => self.handle_tick(now),
        }
    }

    fn handle_manifest(&mut self, data: ConceptsData) -> Task<Message> {
        if data.is_empty() {
            tracing::info!("manifest lists no concepts");
        }
        let (gallery, task) = gallery::State::new(data, &self.source);
        self.gallery = gallery;
        self.screen = Screen::Gallery;
        task.map(Message::Gallery)
    }

    fn handle_gallery_message(&mut self, message: gallery::Message) -> Task<Message> {
        let (effect, task) = self.gallery.handle_message(message, &self.source);
        let task = task.map(Message::Gallery);
        match effect {
            gallery::Effect::None => task,
            gallery::Effect::OpenConcept(concept) => Task::batch([task, self.open_concept(concept)]),
        }
    }

    /// Starts a new detail session for `concept`.
    pub fn open_concept(&mut self, concept: Arc<Concept>) -> Task<Message> {
        self.speech.stop();
        self.generation += 1;
        let (detail, task) = viewer::State::open(concept, self.generation, &self.source);
        self.detail = Some(detail);
        self.screen = Screen::Detail;
        task.map(Message::Detail)
    }

    /// Leaves the detail view. Playback never outlives it.
    pub fn close_detail(&mut self) {
        self.speech.stop();
        self.detail = None;
        self.screen = Screen::Gallery;
    }

    fn handle_detail_message(&mut self, message: viewer::Message) -> Task<Message> {
        let Some(detail) = self.detail.as_mut() else {
            return Task::none();
        };
        let (effect, task) = detail.handle_message(
            message,
            viewer::UpdateEnv {
                source: &self.source,
                cache: &mut self.cache,
            },
        );
        let task = task.map(Message::Detail);

        match effect {
            viewer::Effect::None => task,
            viewer::Effect::BackToGallery => {
                self.close_detail();
                Task::none()
            }
            viewer::Effect::ToggleSpeech(text) => match self.speech.toggle(&text) {
                Some(playback) => Task::batch([task, speech_task(playback)]),
                None => task,
            },
        }
    }

    fn handle_tick(&mut self, now: Instant) -> Task<Message> {
        let elapsed = self
            .last_tick
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f32());
        self.last_tick = Some(now);
        self.spinner_rotation = animated_spinner::advance(self.spinner_rotation, elapsed);

        if self.screen == Screen::Detail {
            self.handle_detail_message(viewer::Message::Tick(now))
        } else {
            Task::none()
        }
    }

    /// Why the manifest could not be loaded, on the error screen.
    #[must_use]
    pub fn manifest_error(&self) -> Option<&Error> {
        self.manifest_error.as_ref()
    }
}

fn speech_task(playback: Playback) -> Task<Message> {
    Task::future(playback).map(Message::Speech)
}
