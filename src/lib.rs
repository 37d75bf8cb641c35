//! Propmerge - merge layered property maps and resolve placeholders.
//!
//! This library provides the core functionality for propmerge, including:
//! - Tokenizing `${key}` placeholders under configurable delimiters
//! - Merging ordered property maps with last-write-wins override
//! - Two resolution strategies: recursive squash (with circular-reference
//!   detection) and a single-pass reference tree
//! - Loading TOML property sources and splitting source-name lists
//!
//! # Example
//!
//! ```
//! use propmerge::{Algorithm, PropertyMap, merge};
//!
//! let mut prototype = PropertyMap::new();
//! prototype.insert("greeting".to_string(), "hello ${name}".to_string());
//!
//! let mut overlay = PropertyMap::new();
//! overlay.insert("name".to_string(), "world".to_string());
//!
//! let resolved = merge(Algorithm::BuildTree, &[prototype, overlay]).unwrap();
//! assert_eq!(resolved["greeting"], "hello world");
//! ```

pub mod error;
pub mod resolve;
pub mod sources;
pub mod syntax;

pub use error::{MergeError, Result};
pub use resolve::{Algorithm, PropertyMap, merge, merge_with, resolve_values, resolve_values_with};
pub use syntax::Delimiters;
