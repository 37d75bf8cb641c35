use std::path::PathBuf;

/// Library-level structured errors for propmerge.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
	#[error("Circular reference: '{key}' is already being resolved on this path")]
	CircularReference { key: String },

	#[error("Reference chain exceeded {limit} levels while rendering '{key}'")]
	ReferenceDepthExceeded { key: String, limit: usize },

	#[error("Placeholder delimiters must not be empty")]
	EmptyDelimiters,

	#[error("Failed to compile placeholder pattern for delimiters '{prefix}' / '{suffix}'")]
	DelimiterPattern {
		prefix: String,
		suffix: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to read source file: {path}")]
	SourceRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse source file: {path}")]
	SourceParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Value for key '{key}' is not a string in source file: {path}")]
	NonStringValue { path: PathBuf, key: String },

	#[error("Failed to read manifest: {path}")]
	ManifestRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse manifest: {path}")]
	ManifestParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Mutually exclusive options: {option1} and {option2}")]
	MutuallyExclusive { option1: String, option2: String },
}

/// Result type alias using MergeError.
pub type Result<T> = std::result::Result<T, MergeError>;
