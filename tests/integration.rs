// SPDX-License-Identifier: MPL-2.0
use concept_lens::app::{App, Message, Screen};
use concept_lens::application::loader;
use concept_lens::application::port::{
    AssetSource, FetchError, FetchResult, ToneError, TonePlayer, ToneSpec,
};
use concept_lens::application::speech::{SpeechController, SpeechSettings};
use concept_lens::config::{self, Config};
use concept_lens::domain::concept::ConceptsData;
use concept_lens::error::Error;
use concept_lens::i18n::fluent::I18n;
use concept_lens::ui::theming::ThemeMode;
use concept_lens::ui::{gallery, viewer};
use futures_util::future::BoxFuture;
use iced::keyboard::{key::Named, Key};
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::tempdir;

/// Serves fixed text bodies; every other path is a 404.
#[derive(Default)]
struct StaticSource {
    texts: HashMap<String, String>,
}

impl StaticSource {
    fn with_text(mut self, path: &str, body: &str) -> Self {
        self.texts.insert(path.to_string(), body.to_string());
        self
    }
}

impl AssetSource for StaticSource {
    fn probe(&self, path: &str) -> BoxFuture<'_, FetchResult<bool>> {
        Box::pin(std::future::ready(Ok(self.texts.contains_key(path))))
    }

    fn fetch_text(&self, path: &str) -> BoxFuture<'_, FetchResult<String>> {
        let result = self
            .texts
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::from_status(404, None));
        Box::pin(std::future::ready(result))
    }

    fn fetch_bytes(&self, _path: &str) -> BoxFuture<'_, FetchResult<Vec<u8>>> {
        Box::pin(std::future::ready(Err(FetchError::from_status(404, None))))
    }
}

struct SilentTone;

impl TonePlayer for SilentTone {
    fn play(&self, _tone: ToneSpec) -> Result<(), ToneError> {
        Ok(())
    }
}

const MANIFEST: &str = r#"{
    "concepts": [
        {
            "id": "moon",
            "title": "Moon Garden",
            "folder": "moon",
            "mainImage": "moon.png",
            "images": ["moon.png"],
            "textFile": "moon.txt"
        },
        {
            "id": "sea",
            "title": "Deep Sea",
            "folder": "sea",
            "mainImage": "sea.png",
            "textFile": "sea.txt"
        }
    ]
}"#;

fn app() -> App {
    let source: Arc<dyn AssetSource> = Arc::new(StaticSource::default());
    let speech = SpeechController::new(None, Arc::new(SilentTone), SpeechSettings::default());
    App::with_source(
        I18n::new(Some("en-US".into()), &Config::default()),
        source,
        "concepts.json".to_string(),
        speech,
        ThemeMode::Dark,
        None,
    )
}

fn gallery_app() -> App {
    let mut app = app();
    let data = loader::parse_manifest(MANIFEST).expect("manifest parses");
    let _ = app.update(Message::ManifestLoaded(Ok(data)));
    app
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut cfg = Config::default();
    cfg.general.language = Some("en-US".to_string());
    config::save_to_path(&cfg, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    assert_eq!(
        I18n::new(None, &loaded).current_locale().to_string(),
        "en-US"
    );

    cfg.general.language = Some("fr".to_string());
    config::save_to_path(&cfg, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("detail-back"), "Retour à la galerie");
}

#[test]
fn cli_language_wins_over_config() {
    let mut cfg = Config::default();
    cfg.general.language = Some("fr".to_string());
    let i18n = I18n::new(Some("en-US".into()), &cfg);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[tokio::test]
async fn manifest_is_fetched_from_source() {
    let source = StaticSource::default().with_text("concepts.json", MANIFEST);
    let data = loader::load_manifest(&source, "concepts.json")
        .await
        .expect("manifest loads");
    assert_eq!(data.concepts.len(), 2);
    assert_eq!(data.concepts[1].title, "Deep Sea");
}

#[tokio::test]
async fn missing_manifest_is_a_fetch_error() {
    let source = StaticSource::default();
    let err = loader::load_manifest(&source, "concepts.json")
        .await
        .expect_err("manifest is missing");
    match err {
        Error::Fetch(fetch) => assert_eq!(fetch.reason(), "Not Found"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_manifest_is_a_manifest_error() {
    let source = StaticSource::default().with_text("concepts.json", "{ \"concepts\": 3 }");
    let err = loader::load_manifest(&source, "concepts.json")
        .await
        .expect_err("manifest is malformed");
    assert!(matches!(err, Error::Manifest(_)));
}

#[test]
fn app_starts_on_loading_screen() {
    let app = app();
    assert_eq!(app.screen(), Screen::Loading);
    assert!(app.detail().is_none());
}

#[test]
fn manifest_failure_shows_error_screen() {
    let mut app = app();
    let _ = app.update(Message::ManifestLoaded(Err(Error::Fetch(
        FetchError::Transport("connection refused".into()),
    ))));
    assert_eq!(app.screen(), Screen::Error);
    assert!(matches!(app.manifest_error(), Some(Error::Fetch(_))));
}

#[test]
fn empty_manifest_shows_empty_gallery() {
    let mut app = app();
    let _ = app.update(Message::ManifestLoaded(Ok(ConceptsData::default())));
    assert_eq!(app.screen(), Screen::Gallery);
    assert!(app.gallery().is_empty());
    assert!(!app.gallery().is_resolving());
}

#[test]
fn opening_a_card_starts_a_detail_session() {
    let mut app = gallery_app();
    assert_eq!(app.gallery().cards().len(), 2);

    let _ = app.update(Message::Gallery(gallery::Message::Open(1)));
    assert_eq!(app.screen(), Screen::Detail);
    let detail = app.detail().expect("detail open");
    assert_eq!(detail.concept().id, "sea");
    assert!(detail.description().is_loading());
    assert!(!detail.assets().is_complete());
}

#[test]
fn results_for_a_previous_session_are_ignored() {
    let mut app = gallery_app();
    let _ = app.update(Message::Gallery(gallery::Message::Open(0)));
    let first = app.detail().expect("detail open").session().clone();

    let _ = app.update(Message::KeyPressed(Key::Named(Named::Escape)));
    let _ = app.update(Message::Gallery(gallery::Message::Open(0)));
    let second = app.detail().expect("detail reopened").session().clone();
    assert_ne!(first, second);

    let _ = app.update(Message::Detail(viewer::Message::AssetsResolved {
        session: first,
        files: vec!["moon.png".into(), "moon2.png".into()],
    }));
    let _ = app.update(Message::Detail(viewer::Message::DescriptionLoaded {
        session: second.clone(),
        result: Ok("# Moon Garden".into()),
    }));

    let detail = app.detail().expect("detail open");
    assert!(!detail.assets().is_complete());
    assert!(detail.description().ready().is_some());
}

#[test]
fn escape_returns_to_gallery_and_stops_speech() {
    let mut app = gallery_app();
    let _ = app.update(Message::Gallery(gallery::Message::Open(0)));
    let session = app.detail().expect("detail open").session().clone();
    let _ = app.update(Message::Detail(viewer::Message::DescriptionLoaded {
        session,
        result: Ok("A garden on the moon.".into()),
    }));

    let _ = app.update(Message::Detail(viewer::Message::ToggleSpeech));
    assert!(app.speech().is_playing());

    let _ = app.update(Message::KeyPressed(Key::Named(Named::Escape)));
    assert_eq!(app.screen(), Screen::Gallery);
    assert!(app.detail().is_none());
    assert!(!app.speech().is_playing());
}

#[test]
fn keys_are_ignored_outside_the_detail_view() {
    let mut app = gallery_app();
    let _ = app.update(Message::KeyPressed(Key::Named(Named::Escape)));
    assert_eq!(app.screen(), Screen::Gallery);
}

#[test]
fn error_details_toggle() {
    let mut app = app();
    let _ = app.update(Message::ManifestLoaded(Err(Error::Manifest("bad".into()))));
    let _ = app.update(Message::ToggleErrorDetails);
    let _ = app.update(Message::ToggleErrorDetails);
    assert_eq!(app.screen(), Screen::Error);
}
