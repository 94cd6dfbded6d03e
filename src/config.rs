//! Fixed asset layout.
//!
//! The tool reads no config files, flags or environment variables. The
//! layout below is still gathered into one [`ManifestPaths`] value so the
//! builder can be pointed at any project root (tests use temp directories):
//!
//! ```text
//! <project root>/
//! └── assets/
//!     ├── photos/
//!     │   ├── manifest.json        # written by `photos`
//!     │   ├── thumbs/
//!     │   └── ...
//!     └── videos/
//!         ├── manifest.json        # written by `videos`
//!         ├── thumbs/
//!         └── ...
//! ```

use crate::kind::MediaKind;
use std::path::{Path, PathBuf};

/// Name of the thumbnail subdirectory inside each media root.
pub const THUMBS_DIR_NAME: &str = "thumbs";

/// Name of the manifest file inside each media root.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Resolved locations for one kind.
///
/// Filesystem paths are used for reading and writing; the `*_prefix`
/// strings are the root-relative, forward-slash forms written into the
/// manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPaths {
    pub kind: MediaKind,
    pub media_root: PathBuf,
    pub thumbs_dir: PathBuf,
    pub manifest_path: PathBuf,
    /// e.g. `assets/photos`
    pub src_prefix: String,
    /// e.g. `assets/photos/thumbs`
    pub thumb_prefix: String,
}

impl ManifestPaths {
    pub fn resolve(project_root: &Path, kind: MediaKind) -> Self {
        let media_dir = kind.media_dir();
        let media_root = media_dir
            .split('/')
            .fold(project_root.to_path_buf(), |acc, part| acc.join(part));
        Self {
            kind,
            thumbs_dir: media_root.join(THUMBS_DIR_NAME),
            manifest_path: media_root.join(MANIFEST_FILE_NAME),
            media_root,
            src_prefix: media_dir.to_string(),
            thumb_prefix: format!("{media_dir}/{THUMBS_DIR_NAME}"),
        }
    }

    /// Root-relative manifest path for a media file name.
    pub fn src_for(&self, filename: &str) -> String {
        format!("{}/{}", self.src_prefix, filename)
    }

    /// Root-relative manifest path for a thumbnail file name.
    pub fn thumb_for(&self, filename: &str) -> String {
        format!("{}/{}", self.thumb_prefix, filename)
    }
}
