use crate::error::{MergeError, Result};
use regex::Regex;

/// The delimiter pair wrapped around key references in property values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
	/// Text that opens a placeholder.
	pub prefix: String,

	/// Text that closes a placeholder.
	pub suffix: String,
}

impl Default for Delimiters {
	fn default() -> Self {
		Delimiters {
			prefix: "${".to_string(),
			suffix: "}".to_string(),
		}
	}
}

impl Delimiters {
	/// Build a delimiter pair from any string-like prefix and suffix.
	pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
		Delimiters {
			prefix: prefix.into(),
			suffix: suffix.into(),
		}
	}
}

/// One parsed span of a raw property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
	/// Verbatim text containing no placeholder.
	Literal(String),

	/// A delimiter-wrapped key reference.
	Placeholder {
		/// The bare referenced key, delimiters stripped.
		key: String,

		/// The full matched text, kept so an unresolved reference can be
		/// reproduced verbatim in the output.
		original: String,
	},
}

/// Splits raw property values into literal and placeholder tokens.
///
/// Matching is non-greedy: the first suffix after a prefix closes the
/// placeholder, so nested delimiters are not a thing. An unterminated prefix
/// is plain literal text, never a parse failure. The tokenizer is stateless
/// and reentrant; the same input always yields the same tokens.
#[derive(Debug)]
pub struct Tokenizer {
	delimiters: Delimiters,
	pattern: Regex,
}

impl Tokenizer {
	/// Compile a tokenizer for the given delimiter pair.
	///
	/// The delimiters are matched literally; an empty prefix or suffix is
	/// rejected because it would match everywhere.
	pub fn new(delimiters: &Delimiters) -> Result<Self> {
		if delimiters.prefix.is_empty() || delimiters.suffix.is_empty() {
			return Err(MergeError::EmptyDelimiters);
		}

		let pattern_str = format!(
			"{}(.*?){}",
			regex::escape(&delimiters.prefix),
			regex::escape(&delimiters.suffix)
		);
		let pattern = Regex::new(&pattern_str).map_err(|source| MergeError::DelimiterPattern {
			prefix: delimiters.prefix.clone(),
			suffix: delimiters.suffix.clone(),
			source,
		})?;

		Ok(Tokenizer {
			delimiters: delimiters.clone(),
			pattern,
		})
	}

	/// The delimiter pair this tokenizer was compiled for.
	pub fn delimiters(&self) -> &Delimiters {
		&self.delimiters
	}

	/// Split `value` into an ordered token sequence.
	///
	/// Concatenating the tokens' original text reconstructs `value` exactly.
	/// A value without placeholders yields a single literal spanning the
	/// whole input; empty literal spans between placeholders are omitted.
	pub fn tokenize(&self, value: &str) -> Vec<Token> {
		let mut tokens = Vec::new();
		let mut unclaimed = 0;

		for m in self.pattern.find_iter(value) {
			if m.start() > unclaimed {
				tokens.push(Token::Literal(value[unclaimed..m.start()].to_string()));
			}
			unclaimed = m.end();

			let original = m.as_str();
			let key = original[self.delimiters.prefix.len()..original.len() - self.delimiters.suffix.len()]
				.to_string();
			tokens.push(Token::Placeholder {
				key,
				original: original.to_string(),
			});
		}

		if tokens.is_empty() {
			return vec![Token::Literal(value.to_string())];
		}

		if unclaimed < value.len() {
			tokens.push(Token::Literal(value[unclaimed..].to_string()));
		}

		tokens
	}
}
