//! # Media Manifest
//!
//! Builds the JSON manifests a gallery page reads to show photos and videos.
//! The filesystem is the data source: every file in the media directory
//! becomes an entry, and a file in `thumbs/` with the same base name becomes
//! its thumbnail.
//!
//! # Pipeline
//!
//! ```text
//! assets/photos/          ─┐
//! assets/photos/thumbs/   ─┴→  assets/photos/manifest.json
//! ```
//!
//! Each run lists the two directories, joins files to thumbnails by base
//! name, derives a label from the filename, sorts by path and overwrites the
//! manifest. There is no state between runs; unchanged inputs give
//! byte-identical output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`kind`] | Photo vs. video: extension filters, fallbacks, MIME types |
//! | [`config`] | Fixed asset layout resolved against a project root |
//! | [`scan`] | Flat directory listing and thumbnail matching |
//! | [`naming`] | Base name splitting and `alt` label derivation |
//! | [`types`] | Manifest records serialized to JSON |
//! | [`manifest`] | Builds, sorts and writes the manifest |
//! | [`output`] | CLI output formatting |
//!
//! # Example
//!
//! ```no_run
//! use media_manifest::config::ManifestPaths;
//! use media_manifest::kind::MediaKind;
//! use media_manifest::manifest;
//! use std::path::Path;
//!
//! let paths = ManifestPaths::resolve(Path::new("."), MediaKind::Photo);
//! let entries = manifest::build_manifest(&paths)?;
//! manifest::write_manifest(&paths.manifest_path, &entries)?;
//! # Ok::<(), manifest::ManifestError>(())
//! ```

pub mod config;
pub mod kind;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
