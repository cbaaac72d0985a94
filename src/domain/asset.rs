// SPDX-License-Identifier: MPL-2.0
//! Asset naming rules: extension priorities, numbered variants and
//! animated-format detection.

/// Extensions probed for each numbered viewer image, best first.
pub const EXTENSION_PRIORITY: [&str; 9] = [
    "avif", "avifs", "webp", "png", "jpg", "jpeg", "webm", "apng", "gif",
];

/// Reduced list probed for gallery thumbnails.
pub const THUMBNAIL_EXTENSIONS: [&str; 4] = ["avif", "png", "jpg", "jpeg"];

/// Extensions rendered as looping animations.
pub const ANIMATED_EXTENSIONS: [&str; 4] = ["avifs", "webm", "apng", "gif"];

/// How an asset should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Static,
    Animated,
}

impl AssetKind {
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Self {
        if is_animated(file_name) {
            AssetKind::Animated
        } else {
            AssetKind::Static
        }
    }
}

/// Lowercased extension of `file_name`, if any.
#[must_use]
pub fn extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    if ext.is_empty() || ext.contains('/') {
        None
    } else {
        Some(ext.to_ascii_lowercase())
    }
}

/// True when the name ends in one of [`ANIMATED_EXTENSIONS`], ignoring case.
#[must_use]
pub fn is_animated(file_name: &str) -> bool {
    extension(file_name).is_some_and(|ext| ANIMATED_EXTENSIONS.contains(&ext.as_str()))
}

/// Candidate filenames for `base_name`, in the order of `extensions`.
#[must_use]
pub fn candidate_file_names(base_name: &str, extensions: &[&str]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| format!("{base_name}.{ext}"))
        .collect()
}

/// Base name of the `index`-th numbered image: `base` for 0, `base{index+1}` after.
#[must_use]
pub fn numbered_base_name(base_name: &str, index: usize) -> String {
    if index == 0 {
        base_name.to_string()
    } else {
        format!("{base_name}{}", index + 1)
    }
}

/// Human-readable label for an asset: first `.png` removed, underscores as spaces.
#[must_use]
pub fn display_name(file_name: &str) -> String {
    file_name.replacen(".png", "", 1).replace('_', " ")
}

/// Resolved image filenames for one concept plus a completion flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedAssets {
    files: Vec<String>,
    complete: bool,
}

impl ResolvedAssets {
    /// Resolution has not finished yet.
    #[must_use]
    pub fn pending() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn complete(files: Vec<String>) -> Self {
        Self {
            files,
            complete: true,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.files.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animated_detection_is_case_insensitive() {
        assert!(is_animated("loop.GIF"));
        assert!(is_animated("clip.webm"));
        assert!(is_animated("seq.avifs"));
        assert!(!is_animated("still.avif"));
        assert!(!is_animated("still.webp"));
        assert!(!is_animated("gif"));
    }

    #[test]
    fn asset_kind_follows_extension() {
        assert_eq!(AssetKind::from_file_name("a.apng"), AssetKind::Animated);
        assert_eq!(AssetKind::from_file_name("a.png"), AssetKind::Static);
    }

    #[test]
    fn numbered_names_skip_one() {
        assert_eq!(numbered_base_name("dragon", 0), "dragon");
        assert_eq!(numbered_base_name("dragon", 1), "dragon2");
        assert_eq!(numbered_base_name("dragon", 9), "dragon10");
    }

    #[test]
    fn candidates_follow_priority_order() {
        let names = candidate_file_names("x", &EXTENSION_PRIORITY);
        assert_eq!(names.first().map(String::as_str), Some("x.avif"));
        assert_eq!(names.last().map(String::as_str), Some("x.gif"));
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn display_name_cleans_png_and_underscores() {
        assert_eq!(display_name("night_city_2.png"), "night city 2");
        assert_eq!(display_name("night_city.webp"), "night city.webp");
    }

    #[test]
    fn resolved_assets_pending_is_incomplete() {
        let pending = ResolvedAssets::pending();
        assert!(!pending.is_complete());
        assert!(pending.is_empty());

        let done = ResolvedAssets::complete(vec!["a.png".into()]);
        assert!(done.is_complete());
        assert_eq!(done.get(0), Some("a.png"));
        assert_eq!(done.get(1), None);
    }
}
