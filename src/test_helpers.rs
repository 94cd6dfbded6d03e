//! Shared test utilities for the media-manifest test suite.
//!
//! Builds throwaway asset trees inside a temp directory so each test runs
//! against its own project root.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = project_with(&["assets/photos/a.jpg", "assets/photos/thumbs/a.png"]);
//! let paths = ManifestPaths::resolve(tmp.path(), MediaKind::Photo);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::MediaEntry;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create an empty file, creating parent directories as needed.
pub fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, b"fake media").unwrap();
}

/// A temp project root containing the given files (paths relative to root).
pub fn project_with(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for file in files {
        touch(&tmp.path().join(file));
    }
    tmp
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All `src` values in manifest order.
pub fn srcs(entries: &[MediaEntry]) -> Vec<&str> {
    entries.iter().map(MediaEntry::src).collect()
}

/// Find an entry by `src`. Panics if not found.
pub fn find_entry<'a>(entries: &'a [MediaEntry], src: &str) -> &'a MediaEntry {
    entries.iter().find(|e| e.src() == src).unwrap_or_else(|| {
        let available = srcs(entries);
        panic!("entry '{src}' not found. Available: {available:?}")
    })
}
