//! Directory listing and thumbnail matching.
//!
//! Both listings are flat (no recursion) and keep the order the filesystem
//! returns entries in. Candidates get sorted later by the builder; thumbnails
//! never do, so when several thumbnails share a base name the first one
//! listed wins.
//!
//! ## Candidate files
//!
//! A media root entry is a candidate when it is a regular file (symlinks are
//! followed), is not hidden, is not the thumbnail directory or the manifest
//! itself, and passes the kind's extension filter.
//!
//! ## Thumbnail matching
//!
//! A thumbnail matches base name `b` when its file name starts with `b.`,
//! compared case-insensitively. The base name is compared as literal text,
//! so `photo(1)` only matches `photo(1).png` and friends.

use crate::config::{MANIFEST_FILE_NAME, THUMBS_DIR_NAME};
use crate::kind::extension_allowed;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Missing directory: {}", .0.display())]
    MissingRoot(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// List candidate media file names directly inside `media_root`.
pub fn list_candidate_files(
    media_root: &Path,
    extensions: Option<&[&str]>,
) -> Result<Vec<String>, ScanError> {
    if !media_root.exists() {
        return Err(ScanError::MissingRoot(media_root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(media_root)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        // Skip hidden files and our own outputs
        if name.starts_with('.') || name == THUMBS_DIR_NAME || name == MANIFEST_FILE_NAME {
            continue;
        }
        if entry.path().is_file() && extension_allowed(&name, extensions) {
            files.push(name);
        }
    }
    Ok(files)
}

/// List thumbnail file names directly inside `thumbs_dir`.
///
/// A missing thumbnail directory is not an error; it just means no
/// thumbnails.
pub fn list_thumbnails(
    thumbs_dir: &Path,
    extensions: Option<&[&str]>,
) -> Result<Vec<String>, ScanError> {
    if !thumbs_dir.exists() {
        return Ok(Vec::new());
    }

    let mut thumbs = Vec::new();
    for entry in fs::read_dir(thumbs_dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.path().is_file() && extension_allowed(&name, extensions) {
            thumbs.push(name);
        }
    }
    Ok(thumbs)
}

/// Find the first thumbnail whose name is `base` followed by a dot.
pub fn match_thumbnail<'a>(base: &str, thumbnails: &'a [String]) -> Option<&'a str> {
    let prefix = format!("{}.", base.to_lowercase());
    thumbnails
        .iter()
        .find(|name| name.to_lowercase().starts_with(&prefix))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{THUMBNAIL_IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
    use crate::test_helpers::touch;
    use tempfile::TempDir;

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    // =========================================================================
    // Candidate listing
    // =========================================================================

    #[test]
    fn missing_root_is_reported() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("nope");
        let result = list_candidate_files(&root, None);
        assert!(matches!(result, Err(ScanError::MissingRoot(p)) if p == root));
    }

    #[test]
    fn missing_root_message_names_path() {
        let err = ScanError::MissingRoot(PathBuf::from("/x/assets/photos"));
        assert_eq!(err.to_string(), "Missing directory: /x/assets/photos");
    }

    #[test]
    fn excludes_thumbs_manifest_hidden_and_dirs() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("a.jpg"));
        touch(&root.join("notes.txt"));
        touch(&root.join("manifest.json"));
        touch(&root.join(".DS_Store"));
        touch(&root.join("thumbs/a.png"));
        fs::create_dir_all(root.join("nested")).unwrap();

        let files = sorted(list_candidate_files(root, None).unwrap());
        assert_eq!(files, names(&["a.jpg", "notes.txt"]));
    }

    #[test]
    fn file_named_thumbs_is_excluded() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("thumbs"));
        touch(&tmp.path().join("b.jpg"));

        let files = list_candidate_files(tmp.path(), None).unwrap();
        assert_eq!(files, names(&["b.jpg"]));
    }

    #[test]
    fn video_filter_keeps_only_video_extensions() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        for name in ["a.mp4", "b.WEBM", "c.mov", "d.m4v", "e.ogv", "notes.txt", "f.jpg", "noext"] {
            touch(&root.join(name));
        }

        let files = sorted(list_candidate_files(root, Some(VIDEO_EXTENSIONS)).unwrap());
        assert_eq!(files, names(&["a.mp4", "b.WEBM", "c.mov", "d.m4v", "e.ogv"]));
    }

    #[test]
    fn empty_root_lists_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(list_candidate_files(tmp.path(), None).unwrap().is_empty());
    }

    // =========================================================================
    // Thumbnail listing
    // =========================================================================

    #[test]
    fn missing_thumbs_dir_is_empty() {
        let tmp = TempDir::new().unwrap();
        let thumbs = list_thumbnails(&tmp.path().join("thumbs"), None).unwrap();
        assert!(thumbs.is_empty());
    }

    #[test]
    fn thumbnails_skip_directories() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("a.png"));
        fs::create_dir_all(tmp.path().join("sub.png")).unwrap();

        let thumbs = list_thumbnails(tmp.path(), None).unwrap();
        assert_eq!(thumbs, names(&["a.png"]));
    }

    #[test]
    fn video_thumbnails_filtered_by_image_extension() {
        let tmp = TempDir::new().unwrap();
        for name in ["a.jpg", "b.JPEG", "c.png", "d.webp", "e.gif", "f.mp4"] {
            touch(&tmp.path().join(name));
        }

        let thumbs = sorted(list_thumbnails(tmp.path(), Some(THUMBNAIL_IMAGE_EXTENSIONS)).unwrap());
        assert_eq!(thumbs, names(&["a.jpg", "b.JPEG", "c.png", "d.webp"]));
    }

    #[test]
    fn photo_thumbnails_accept_any_extension() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("a.gif"));
        touch(&tmp.path().join("b"));

        let thumbs = sorted(list_thumbnails(tmp.path(), None).unwrap());
        assert_eq!(thumbs, names(&["a.gif", "b"]));
    }

    // =========================================================================
    // Matching
    // =========================================================================

    #[test]
    fn matches_same_base_any_extension() {
        let thumbs = names(&["other.jpg", "photo.png"]);
        assert_eq!(match_thumbnail("photo", &thumbs), Some("photo.png"));
    }

    #[test]
    fn match_is_case_insensitive() {
        let thumbs = names(&["PHOTO.PNG"]);
        assert_eq!(match_thumbnail("Photo", &thumbs), Some("PHOTO.PNG"));
    }

    #[test]
    fn requires_dot_after_base() {
        let thumbs = names(&["photo2.png", "photography.jpg"]);
        assert_eq!(match_thumbnail("photo", &thumbs), None);
    }

    #[test]
    fn must_start_with_base() {
        let thumbs = names(&["my-photo.png"]);
        assert_eq!(match_thumbnail("photo", &thumbs), None);
    }

    #[test]
    fn first_listed_match_wins() {
        let thumbs = names(&["beach.webp", "beach.jpg"]);
        assert_eq!(match_thumbnail("beach", &thumbs), Some("beach.webp"));

        let thumbs = names(&["beach.jpg", "beach.webp"]);
        assert_eq!(match_thumbnail("beach", &thumbs), Some("beach.jpg"));
    }

    #[test]
    fn special_characters_match_literally() {
        let thumbs = names(&["photo1.png", "photo(1).png"]);
        assert_eq!(match_thumbnail("photo(1)", &thumbs), Some("photo(1).png"));

        let thumbs = names(&["photoX1.png", "photo1.png"]);
        assert_eq!(match_thumbnail("photo.1", &thumbs), None);
        assert_eq!(match_thumbnail("photo+", &names(&["photoo.png"])), None);
        assert_eq!(match_thumbnail("a*", &names(&["aaa.png", "a.png"])), None);
    }

    #[test]
    fn multi_dot_thumbnail_matches_base() {
        let thumbs = names(&["clip.poster.jpg"]);
        assert_eq!(match_thumbnail("clip", &thumbs), Some("clip.poster.jpg"));
    }

    #[test]
    fn no_thumbnails_no_match() {
        assert_eq!(match_thumbnail("photo", &[]), None);
    }
}
