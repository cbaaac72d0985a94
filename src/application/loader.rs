// SPDX-License-Identifier: MPL-2.0
//! Manifest and description loading.

use crate::application::port::{AssetSource, FetchError};
use crate::domain::concept::{Concept, ConceptsData};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;

/// Progress of a one-shot load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> LoadState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConceptRecord {
    id: String,
    title: String,
    folder: String,
    main_image: String,
    #[serde(default)]
    images: Vec<String>,
    text_file: String,
}

#[derive(Debug, Deserialize)]
struct ManifestRecord {
    concepts: Vec<ConceptRecord>,
}

impl From<ConceptRecord> for Concept {
    fn from(record: ConceptRecord) -> Self {
        Concept {
            id: record.id,
            title: record.title,
            folder: record.folder,
            main_image: record.main_image,
            images: record.images,
            text_file: record.text_file,
        }
    }
}

/// Parses manifest JSON. Entries repeating an earlier `id` are dropped.
pub fn parse_manifest(json: &str) -> Result<ConceptsData> {
    let record: ManifestRecord = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    let mut concepts = Vec::with_capacity(record.concepts.len());

    for entry in record.concepts {
        if seen.insert(entry.id.clone()) {
            concepts.push(Concept::from(entry));
        } else {
            tracing::warn!(id = %entry.id, "duplicate concept id in manifest, skipping");
        }
    }

    Ok(ConceptsData { concepts })
}

/// Fetches and parses the manifest at `manifest_path`.
pub async fn load_manifest(source: &dyn AssetSource, manifest_path: &str) -> Result<ConceptsData> {
    let body = source.fetch_text(manifest_path).await.map_err(|err| {
        tracing::warn!(path = %manifest_path, error = %err, "manifest fetch failed");
        Error::Fetch(err)
    })?;
    let data = parse_manifest(&body)?;
    tracing::info!(count = data.concepts.len(), "manifest loaded");
    Ok(data)
}

/// Fetches the raw description body of `concept`.
pub async fn load_description(
    source: &dyn AssetSource,
    concept: &Concept,
) -> std::result::Result<String, FetchError> {
    let path = concept.description_path();
    source.fetch_text(&path).await.inspect_err(|err| {
        tracing::warn!(%path, error = %err, "description fetch failed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::FetchResult;
    use futures_util::future::BoxFuture;
    use std::collections::HashMap;

    struct TextSource(HashMap<String, FetchResult<String>>);

    impl AssetSource for TextSource {
        fn probe(&self, path: &str) -> BoxFuture<'_, FetchResult<bool>> {
            Box::pin(std::future::ready(Ok(self.0.contains_key(path))))
        }

        fn fetch_text(&self, path: &str) -> BoxFuture<'_, FetchResult<String>> {
            let result = self
                .0
                .get(path)
                .cloned()
                .unwrap_or_else(|| Err(FetchError::from_status(404, None)));
            Box::pin(std::future::ready(result))
        }

        fn fetch_bytes(&self, path: &str) -> BoxFuture<'_, FetchResult<Vec<u8>>> {
            let result = self.0.get(path).cloned().map(|r| r.map(String::into_bytes));
            Box::pin(std::future::ready(
                result.unwrap_or_else(|| Err(FetchError::from_status(404, None))),
            ))
        }
    }

    const MANIFEST: &str = r#"{
        "concepts": [
            {
                "id": "sky-pirates",
                "title": "Sky Pirates",
                "folder": "sky_pirates",
                "mainImage": "sky_pirates.png",
                "images": ["sky_pirates.png", "sky_pirates2.png"],
                "textFile": "sky_pirates.txt"
            },
            {
                "id": "deep-sea",
                "title": "Deep Sea",
                "folder": "deep_sea",
                "mainImage": "deep_sea.jpg",
                "textFile": "deep_sea.txt"
            }
        ]
    }"#;

    #[test]
    fn parses_camel_case_manifest() {
        let data = parse_manifest(MANIFEST).expect("valid manifest");
        assert_eq!(data.concepts.len(), 2);
        assert_eq!(data.concepts[0].main_image, "sky_pirates.png");
        assert_eq!(data.concepts[0].images.len(), 2);
        assert!(data.concepts[1].images.is_empty());
        assert_eq!(data.concepts[1].text_file, "deep_sea.txt");
    }

    #[test]
    fn empty_manifest_is_valid() {
        let data = parse_manifest(r#"{"concepts": []}"#).expect("valid manifest");
        assert!(data.is_empty());
    }

    #[test]
    fn missing_fields_are_rejected() {
        let result = parse_manifest(r#"{"concepts": [{"id": "x"}]}"#);
        assert!(matches!(result, Err(Error::Manifest(_))));
    }

    #[test]
    fn duplicate_ids_keep_first_entry() {
        let json = r#"{"concepts": [
            {"id": "a", "title": "First", "folder": "a", "mainImage": "a.png", "textFile": "a.txt"},
            {"id": "a", "title": "Second", "folder": "b", "mainImage": "b.png", "textFile": "b.txt"}
        ]}"#;
        let data = parse_manifest(json).expect("valid manifest");
        assert_eq!(data.concepts.len(), 1);
        assert_eq!(data.concepts[0].title, "First");
    }

    #[tokio::test]
    async fn load_manifest_reports_fetch_failure() {
        let source = TextSource(HashMap::new());
        let result = load_manifest(&source, "concepts.json").await;
        assert!(matches!(
            result,
            Err(Error::Fetch(FetchError::Status(404, _)))
        ));
    }

    #[tokio::test]
    async fn load_manifest_parses_body() {
        let source = TextSource(HashMap::from([(
            "concepts.json".to_string(),
            Ok(MANIFEST.to_string()),
        )]));
        let data = load_manifest(&source, "concepts.json")
            .await
            .expect("manifest loads");
        assert!(data.find("deep-sea").is_some());
    }

    #[tokio::test]
    async fn load_description_uses_folder_and_text_file() {
        let data = parse_manifest(MANIFEST).expect("valid manifest");
        let source = TextSource(HashMap::from([(
            "sky_pirates/sky_pirates.txt".to_string(),
            Ok("# Sky Pirates".to_string()),
        )]));
        let text = load_description(&source, &data.concepts[0]).await;
        assert_eq!(text.as_deref(), Ok("# Sky Pirates"));

        let missing = load_description(&source, &data.concepts[1]).await;
        assert_eq!(missing, Err(FetchError::from_status(404, None)));
    }

    #[test]
    fn load_state_accessors() {
        let loading: LoadState<u8> = LoadState::default();
        assert!(loading.is_loading());
        assert_eq!(LoadState::Ready(3).ready(), Some(&3));
        assert_eq!(LoadState::<u8>::Failed("boom".into()).error(), Some("boom"));
    }
}
