//! Per-kind behavior for the manifest builder.
//!
//! Photos and videos go through the same pipeline but differ in a handful of
//! places. Filters and the missing-root policy are carried as data on
//! [`MediaKind`]; the thumbnail fallback is fixed by the record types in
//! [`crate::types`]:
//!
//! | | Photo | Video |
//! |---|---|---|
//! | Media directory | `assets/photos` | `assets/videos` |
//! | Candidate files | any extension | `mp4 webm mov m4v ogv` |
//! | Thumbnail files | any extension | `jpg jpeg png webp` |
//! | No thumbnail found | `thumb` = `src` | `thumb` = `null` |
//! | Media root missing | error, exit 1 | message, exit 0 |
//! | MIME type | none | from extension |
//!
//! The fallback and missing-root asymmetries are kept for compatibility with
//! existing gallery pages. See `DESIGN.md` before unifying them.

use std::path::Path;

/// Extensions accepted as video sources (lowercase, no dot).
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "m4v", "ogv"];

/// Extensions accepted as video thumbnails (lowercase, no dot).
pub const THUMBNAIL_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// MIME type used when a video extension is not recognized.
pub const DEFAULT_VIDEO_MIME: &str = "video/mp4";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
}

/// How a missing media root directory is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingRootPolicy {
    /// Fail the run.
    Fail,
    /// Report it and finish successfully without writing anything.
    Skip,
}

impl MediaKind {
    /// Directory under the project root holding this kind's media.
    pub fn media_dir(self) -> &'static str {
        match self {
            MediaKind::Photo => "assets/photos",
            MediaKind::Video => "assets/videos",
        }
    }

    /// Extension filter for candidate files. `None` accepts everything.
    pub fn source_extensions(self) -> Option<&'static [&'static str]> {
        match self {
            MediaKind::Photo => None,
            MediaKind::Video => Some(VIDEO_EXTENSIONS),
        }
    }

    /// Extension filter for thumbnail files. `None` accepts everything.
    pub fn thumbnail_extensions(self) -> Option<&'static [&'static str]> {
        match self {
            MediaKind::Photo => None,
            MediaKind::Video => Some(THUMBNAIL_IMAGE_EXTENSIONS),
        }
    }

    pub fn missing_root_policy(self) -> MissingRootPolicy {
        match self {
            MediaKind::Photo => MissingRootPolicy::Fail,
            MediaKind::Video => MissingRootPolicy::Skip,
        }
    }
}

/// Check a file name's extension against an optional allow-list, ignoring case.
pub fn extension_allowed(name: &str, allowed: Option<&[&str]>) -> bool {
    let Some(allowed) = allowed else {
        return true;
    };
    Path::new(name)
        .extension()
        .map(|ext| {
            let ext = ext.to_string_lossy();
            allowed.iter().any(|a| a.eq_ignore_ascii_case(&ext))
        })
        .unwrap_or(false)
}

/// Map a video source path to its MIME type.
///
/// Unknown extensions fall back to [`DEFAULT_VIDEO_MIME`]; candidate
/// filtering means that branch is not normally reached.
pub fn classify_mime_type(src: &str) -> &'static str {
    let ext = Path::new(src)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "ogv" => "video/ogg",
        "mov" => "video/quicktime",
        _ => DEFAULT_VIDEO_MIME,
    }
}
