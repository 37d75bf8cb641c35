//! Property-source glue for propmerge.
//!
//! This module handles:
//! - Loading TOML property files into string maps
//! - Splitting comma-separated source-name lists with prototype injection
//! - Manifest files describing a whole merge run

pub mod loader;
pub mod manifest;
pub mod splitter;

pub use loader::{load_source, load_sources, parse_source_str};
pub use manifest::{Manifest, parse_manifest_file, parse_manifest_str};
pub use splitter::NameSplitter;
