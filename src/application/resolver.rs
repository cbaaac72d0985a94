// SPDX-License-Identifier: MPL-2.0
//! Asset format resolution.
//!
//! Concept folders publish each image in whichever formats the author
//! exported. The resolver probes candidate extensions in priority order and
//! keeps the first one the server has. A failed probe is the same as a
//! missing file: absence is an expected outcome, never an error.

use crate::application::port::AssetSource;
use crate::domain::asset::{
    candidate_file_names, numbered_base_name, EXTENSION_PRIORITY, THUMBNAIL_EXTENSIONS,
};
use crate::domain::concept::Concept;

/// Returns the first `{base_name}.{ext}` present in the concept folder.
pub async fn resolve_format(
    source: &dyn AssetSource,
    concept: &Concept,
    base_name: &str,
    extensions: &[&str],
) -> Option<String> {
    for candidate in candidate_file_names(base_name, extensions) {
        let path = concept.asset_path(&candidate);
        match source.probe(&path).await {
            Ok(true) => return Some(candidate),
            Ok(false) => {}
            Err(err) => {
                tracing::debug!(%path, error = %err, "probe failed, treating as absent");
            }
        }
    }
    None
}

/// Discovers the numbered images of a concept (`name`, `name2`, `name3`, ...).
///
/// Scanning stops at the first number with no file in any format, so
/// `name.png` + `name3.png` without `name2.*` yields only `name.png`.
pub async fn resolve_numbered_images(
    source: &dyn AssetSource,
    concept: &Concept,
    max_images: usize,
) -> Vec<String> {
    let base_name = concept.image_base_name();
    let mut found = Vec::new();

    for index in 0..max_images {
        let candidate_base = numbered_base_name(&base_name, index);
        match resolve_format(source, concept, &candidate_base, &EXTENSION_PRIORITY).await {
            Some(file) => found.push(file),
            None => break,
        }
    }

    tracing::debug!(
        concept = %concept.id,
        count = found.len(),
        "numbered image scan finished"
    );
    found
}

/// Picks the gallery thumbnail, falling back to the literal `main_image`.
pub async fn resolve_thumbnail(source: &dyn AssetSource, concept: &Concept) -> String {
    resolve_format(
        source,
        concept,
        concept.thumbnail_base_name(),
        &THUMBNAIL_EXTENSIONS,
    )
    .await
    .unwrap_or_else(|| concept.main_image.clone())
}
