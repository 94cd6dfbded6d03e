//! Manifest records.
//!
//! These are the only types serialized into `manifest.json`. Field order
//! here is the key order in the output.

use serde::Serialize;

/// A photo entry. `thumb` falls back to `src` when no thumbnail matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoEntry {
    pub src: String,
    pub thumb: String,
    pub alt: String,
}

/// A video entry. `thumb` is `null` when no thumbnail matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoEntry {
    pub src: String,
    pub thumb: Option<String>,
    pub alt: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// One manifest record, serialized without a variant tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MediaEntry {
    Photo(PhotoEntry),
    Video(VideoEntry),
}

impl MediaEntry {
    pub fn src(&self) -> &str {
        match self {
            MediaEntry::Photo(p) => &p.src,
            MediaEntry::Video(v) => &v.src,
        }
    }

    pub fn alt(&self) -> &str {
        match self {
            MediaEntry::Photo(p) => &p.alt,
            MediaEntry::Video(v) => &v.alt,
        }
    }

    /// Thumbnail path, if the entry has one.
    pub fn thumb(&self) -> Option<&str> {
        match self {
            MediaEntry::Photo(p) => Some(&p.thumb),
            MediaEntry::Video(v) => v.thumb.as_deref(),
        }
    }
}
