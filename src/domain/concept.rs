// SPDX-License-Identifier: MPL-2.0
//! Concept entries and the detail-session key.

/// One gallery entry: a title, an asset folder and a description file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    /// Unique identifier within the manifest.
    pub id: String,
    pub title: String,
    /// Asset directory, relative to the server root.
    pub folder: String,
    /// Preferred gallery thumbnail filename.
    pub main_image: String,
    /// Listed images. Informational only: the viewer discovers images by probing.
    pub images: Vec<String>,
    /// Description filename inside `folder`.
    pub text_file: String,
}

impl Concept {
    /// Base name shared by the numbered images: `text_file` without `.txt`.
    #[must_use]
    pub fn image_base_name(&self) -> String {
        self.text_file.replacen(".txt", "", 1)
    }

    /// Base name used for thumbnail probing: `main_image` without its extension.
    #[must_use]
    pub fn thumbnail_base_name(&self) -> &str {
        strip_extension(&self.main_image)
    }

    /// Server path of a file inside this concept's folder.
    #[must_use]
    pub fn asset_path(&self, file_name: &str) -> String {
        let folder = self.folder.trim_matches('/');
        if folder.is_empty() {
            file_name.to_string()
        } else {
            format!("{folder}/{file_name}")
        }
    }

    /// Server path of the description file.
    #[must_use]
    pub fn description_path(&self) -> String {
        self.asset_path(&self.text_file)
    }
}

/// Removes a trailing `.ext` from the last path segment, if any.
#[must_use]
pub fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(pos) => {
            let ext = &file_name[pos + 1..];
            if ext.is_empty() || ext.contains('/') {
                file_name
            } else {
                &file_name[..pos]
            }
        }
        None => file_name,
    }
}

/// The full manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptsData {
    pub concepts: Vec<Concept>,
}

impl ConceptsData {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Concept> {
        self.concepts.iter().find(|c| c.id == id)
    }
}

/// Identifies the detail view an async result was issued for.
///
/// The generation is bumped every time a concept is opened, so reopening the
/// same concept still invalidates results from the previous visit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub folder: String,
    pub text_file: String,
    pub generation: u64,
}

impl SessionKey {
    #[must_use]
    pub fn new(concept: &Concept, generation: u64) -> Self {
        Self {
            folder: concept.folder.clone(),
            text_file: concept.text_file.clone(),
            generation,
        }
    }
}
