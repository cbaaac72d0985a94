// SPDX-License-Identifier: MPL-2.0
//! Gallery cards and their thumbnail lifecycle.

use crate::application::port::AssetSource;
use crate::application::resolver;
use crate::domain::concept::{Concept, ConceptsData};
use crate::error::Error;
use crate::media::{self, DecodedAsset, ImageData};
use futures_util::future::BoxFuture;
use iced::Task;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Message {
    ThumbnailResolved {
        index: usize,
        file: String,
    },
    ThumbnailLoaded {
        index: usize,
        result: Result<DecodedAsset, Error>,
    },
    Open(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenConcept(Arc<Concept>),
}

#[derive(Debug, Clone)]
pub enum Thumbnail {
    /// Probing for the preferred format.
    Resolving,
    Loading(String),
    Ready(ImageData),
    /// Nothing could be shown; the card displays "image not found".
    Missing,
}

#[derive(Debug, Clone)]
pub struct Card {
    pub concept: Arc<Concept>,
    pub thumbnail: Thumbnail,
}

#[derive(Debug, Default)]
pub struct State {
    cards: Vec<Card>,
}

impl State {
    /// Builds one card per concept and starts resolving every thumbnail.
    pub fn new(data: ConceptsData, source: &Arc<dyn AssetSource>) -> (Self, Task<Message>) {
        let cards: Vec<Card> = data
            .concepts
            .into_iter()
            .map(|concept| Card {
                concept: Arc::new(concept),
                thumbnail: Thumbnail::Resolving,
            })
            .collect();

        let task = Task::batch(thumbnail_jobs(&cards, source).into_iter().map(Task::future));

        (Self { cards }, task)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True while any card still shows a spinner.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.cards
            .iter()
            .any(|card| matches!(card.thumbnail, Thumbnail::Resolving | Thumbnail::Loading(_)))
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        source: &Arc<dyn AssetSource>,
    ) -> (Effect, Task<Message>) {
        match message {
            Message::ThumbnailResolved { index, file } => {
                let Some(card) = self.cards.get_mut(index) else {
                    return (Effect::None, Task::none());
                };
                let path = card.concept.asset_path(&file);
                card.thumbnail = Thumbnail::Loading(file.clone());

                let source = Arc::clone(source);
                let task = Task::future(async move {
                    let result = media::fetch_decoded(source, path, file).await;
                    Message::ThumbnailLoaded { index, result }
                });
                (Effect::None, task)
            }
            Message::ThumbnailLoaded { index, result } => {
                let Some(card) = self.cards.get_mut(index) else {
                    return (Effect::None, Task::none());
                };
                card.thumbnail = match result {
                    Ok(decoded) => {
                        Thumbnail::Ready(decoded.media.frame_at(Duration::ZERO).clone())
                    }
                    Err(err) => {
                        tracing::debug!(
                            concept = %card.concept.id,
                            error = %err,
                            "thumbnail unavailable"
                        );
                        Thumbnail::Missing
                    }
                };
                (Effect::None, Task::none())
            }
            Message::Open(index) => match self.cards.get(index) {
                Some(card) => (
                    Effect::OpenConcept(Arc::clone(&card.concept)),
                    Task::none(),
                ),
                None => (Effect::None, Task::none()),
            },
        }
    }
}

/// One thumbnail resolution per card; no cards means no probes.
fn thumbnail_jobs(
    cards: &[Card],
    source: &Arc<dyn AssetSource>,
) -> Vec<BoxFuture<'static, Message>> {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let source = Arc::clone(source);
            let concept = Arc::clone(&card.concept);
            let job: BoxFuture<'static, Message> = Box::pin(async move {
                let file = resolver::resolve_thumbnail(source.as_ref(), &concept).await;
                Message::ThumbnailResolved { index, file }
            });
            job
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{FetchError, FetchResult};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Finds nothing; counts probes.
    #[derive(Default)]
    struct NoSource {
        probes: AtomicUsize,
    }

    impl AssetSource for NoSource {
        fn probe(&self, _path: &str) -> BoxFuture<'_, FetchResult<bool>> {
            self.probes.fetch_add(1, Ordering::SeqCst);
            Box::pin(std::future::ready(Ok(false)))
        }

        fn fetch_text(&self, _path: &str) -> BoxFuture<'_, FetchResult<String>> {
            Box::pin(std::future::ready(Err(FetchError::from_status(404, None))))
        }

        fn fetch_bytes(&self, _path: &str) -> BoxFuture<'_, FetchResult<Vec<u8>>> {
            Box::pin(std::future::ready(Err(FetchError::from_status(404, None))))
        }
    }

    fn data(ids: &[&str]) -> ConceptsData {
        ConceptsData {
            concepts: ids
                .iter()
                .map(|id| Concept {
                    id: (*id).to_string(),
                    title: id.to_uppercase(),
                    folder: (*id).to_string(),
                    main_image: format!("{id}.png"),
                    images: Vec::new(),
                    text_file: format!("{id}.txt"),
                })
                .collect(),
        }
    }

    fn gallery(ids: &[&str]) -> (State, Arc<dyn AssetSource>) {
        let source: Arc<dyn AssetSource> = Arc::new(NoSource::default());
        let (state, _task) = State::new(data(ids), &source);
        (state, source)
    }

    #[test]
    fn cards_start_resolving() {
        let (state, _) = gallery(&["moon", "sea"]);
        assert_eq!(state.cards().len(), 2);
        assert!(matches!(state.cards()[0].thumbnail, Thumbnail::Resolving));
    }

    #[test]
    fn empty_manifest_has_no_cards() {
        let (state, _) = gallery(&[]);
        assert!(state.is_empty());
    }

    async fn probes_for(ids: &[&str]) -> usize {
        let counting = Arc::new(NoSource::default());
        let source: Arc<dyn AssetSource> = counting.clone();
        let (state, _task) = State::new(data(ids), &source);
        let jobs = thumbnail_jobs(state.cards(), &source);
        let messages = futures_util::future::join_all(jobs).await;
        assert_eq!(messages.len(), ids.len());
        counting.probes.load(Ordering::SeqCst)
    }

    #[tokio::test]
    async fn empty_manifest_issues_no_probes() {
        assert_eq!(probes_for(&[]).await, 0);
        // Each card tries every thumbnail format once when nothing exists.
        assert!(probes_for(&["moon"]).await > 0);
    }

    #[test]
    fn failed_thumbnail_is_missing() {
        let (mut state, source) = gallery(&["moon"]);
        state.handle_message(
            Message::ThumbnailResolved {
                index: 0,
                file: "moon.png".into(),
            },
            &source,
        );
        assert!(matches!(
            state.cards()[0].thumbnail,
            Thumbnail::Loading(ref f) if f == "moon.png"
        ));

        state.handle_message(
            Message::ThumbnailLoaded {
                index: 0,
                result: Err(Error::Decode("broken".into())),
            },
            &source,
        );
        assert!(matches!(state.cards()[0].thumbnail, Thumbnail::Missing));
    }

    #[test]
    fn open_emits_concept() {
        let (mut state, source) = gallery(&["moon", "sea"]);
        let (effect, _) = state.handle_message(Message::Open(1), &source);
        match effect {
            Effect::OpenConcept(concept) => assert_eq!(concept.id, "sea"),
            Effect::None => panic!("expected a concept"),
        }
        let (effect, _) = state.handle_message(Message::Open(7), &source);
        assert_eq!(effect, Effect::None);
    }
}
