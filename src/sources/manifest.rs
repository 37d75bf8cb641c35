use crate::error::{MergeError, Result};
use crate::resolve::Algorithm;
use crate::syntax::Delimiters;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A whole merge run described as a TOML file.
///
/// Either `sources` lists the property files directly, or `list` names them
/// as a comma-separated string expanded through `name-prefix`/`name-suffix`
/// (with per-file prototype discovery via `prototype-key`). The two forms
/// are mutually exclusive.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Manifest {
	/// Resolution strategy.
	#[serde(default = "default_algorithm")]
	pub algorithm: Algorithm,

	/// Text that opens a placeholder.
	#[serde(default = "default_prefix")]
	pub placeholder_prefix: String,

	/// Text that closes a placeholder.
	#[serde(default = "default_suffix")]
	pub placeholder_suffix: String,

	/// Property files to merge, in override order (later wins).
	#[serde(default)]
	pub sources: Vec<PathBuf>,

	/// Comma-separated source names, expanded via the name splitter.
	#[serde(default)]
	pub list: Option<String>,

	/// Prefix wrapped around each name from `list`.
	#[serde(default)]
	pub name_prefix: Option<String>,

	/// Suffix wrapped around each name from `list`.
	#[serde(default)]
	pub name_suffix: Option<String>,

	/// Key inside a listed source file naming its comma-separated prototype
	/// sources. Only consulted when `list` is used.
	#[serde(default = "default_prototype_key")]
	pub prototype_key: String,
}

fn default_algorithm() -> Algorithm {
	Algorithm::BuildTree
}

fn default_prefix() -> String {
	"${".to_string()
}

fn default_suffix() -> String {
	"}".to_string()
}

fn default_prototype_key() -> String {
	"prototype".to_string()
}

impl Manifest {
	/// Reject field combinations that cannot be honored together.
	pub fn validate(&self) -> Result<()> {
		if !self.sources.is_empty() && self.list.is_some() {
			return Err(MergeError::MutuallyExclusive {
				option1: "sources".to_string(),
				option2: "list".to_string(),
			});
		}
		Ok(())
	}

	/// The placeholder delimiter pair this manifest configures.
	pub fn delimiters(&self) -> Delimiters {
		Delimiters::new(self.placeholder_prefix.as_str(), self.placeholder_suffix.as_str())
	}
}

/// Parse a manifest file from the given path.
pub fn parse_manifest_file(path: &Path) -> Result<Manifest> {
	let content = std::fs::read_to_string(path).map_err(|source| MergeError::ManifestRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_manifest_str(&content, path)
}

/// Parse a manifest from a string (useful for testing).
pub fn parse_manifest_str(content: &str, path: &Path) -> Result<Manifest> {
	let manifest: Manifest =
		toml::from_str(content).map_err(|source| MergeError::ManifestParse {
			path: path.to_path_buf(),
			source,
		})?;

	manifest.validate()?;

	Ok(manifest)
}
