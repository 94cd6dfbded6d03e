//! Manifest building and writing.
//!
//! [`run`] is the whole pipeline for one kind:
//!
//! ```text
//! resolve paths → list candidates → list thumbnails
//!               → per file: match thumb, derive alt, classify type
//!               → sort by src → write manifest.json
//! ```
//!
//! Nothing is written until every entry has been built. When the media root
//! is missing, the photo kind fails with [`ManifestError::Scan`] while the
//! video kind returns [`RunOutcome::Skipped`]; in both cases any existing
//! manifest is left alone.

use crate::config::ManifestPaths;
use crate::kind::{MediaKind, MissingRootPolicy, classify_mime_type};
use crate::naming::{derive_label, parse_file_name};
use crate::scan::{self, ScanError};
use crate::types::{MediaEntry, PhotoEntry, VideoEntry};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ManifestError {
    /// The missing media root, if that is what went wrong.
    pub fn missing_root(&self) -> Option<&Path> {
        match self {
            ManifestError::Scan(ScanError::MissingRoot(path)) => Some(path),
            _ => None,
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The manifest was written.
    Written { path: PathBuf, count: usize },
    /// The media root was missing and the kind tolerates that.
    Skipped { missing: PathBuf },
}

/// Build the sorted entry list for `paths.kind`.
pub fn build_manifest(paths: &ManifestPaths) -> Result<Vec<MediaEntry>, ManifestError> {
    let kind = paths.kind;
    let files = scan::list_candidate_files(&paths.media_root, kind.source_extensions())?;
    let thumbs = scan::list_thumbnails(&paths.thumbs_dir, kind.thumbnail_extensions())?;

    let mut entries: Vec<MediaEntry> = files
        .iter()
        .map(|filename| {
            let base = parse_file_name(filename).base;
            let src = paths.src_for(filename);
            let thumb = scan::match_thumbnail(&base, &thumbs).map(|t| paths.thumb_for(t));
            let alt = derive_label(&base);
            // Unmatched photos point at themselves; unmatched videos get null
            match kind {
                MediaKind::Photo => MediaEntry::Photo(PhotoEntry {
                    thumb: thumb.unwrap_or_else(|| src.clone()),
                    src,
                    alt,
                }),
                MediaKind::Video => MediaEntry::Video(VideoEntry {
                    thumb,
                    mime_type: classify_mime_type(&src).to_string(),
                    src,
                    alt,
                }),
            }
        })
        .collect();

    entries.sort_by(|a, b| a.src().cmp(b.src()));
    Ok(entries)
}

/// Serialize entries as pretty JSON with a trailing newline, replacing `path`.
pub fn write_manifest(path: &Path, entries: &[MediaEntry]) -> Result<(), ManifestError> {
    let mut json = serde_json::to_string_pretty(entries)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}

/// Build and write the manifest for one kind.
pub fn run(paths: &ManifestPaths) -> Result<RunOutcome, ManifestError> {
    let entries = match build_manifest(paths) {
        Ok(entries) => entries,
        Err(ManifestError::Scan(ScanError::MissingRoot(missing)))
            if paths.kind.missing_root_policy() == MissingRootPolicy::Skip =>
        {
            return Ok(RunOutcome::Skipped { missing });
        }
        Err(e) => return Err(e),
    };

    write_manifest(&paths.manifest_path, &entries)?;
    Ok(RunOutcome::Written {
        path: paths.manifest_path.clone(),
        count: entries.len(),
    })
}
