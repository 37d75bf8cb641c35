use crate::error::{MergeError, Result};
use crate::resolve::PropertyMap;
use crate::syntax::{Token, Tokenizer};
use std::collections::HashSet;

/// Resolve every value in the squashed map independently.
///
/// Each top-level key is resolved from its raw string; referenced keys are
/// re-resolved from their raw strings on every visit rather than cached.
/// Simple and cycle-safe, at the cost of repeated work when many values
/// reference the same key.
pub(crate) fn resolve(flat: &PropertyMap, tokenizer: &Tokenizer) -> Result<PropertyMap> {
	let mut resolved = PropertyMap::new();
	for (key, value) in flat {
		let mut visiting = HashSet::new();
		visiting.insert(key.clone());
		resolved.insert(key.clone(), resolve_value(flat, value, &mut visiting, tokenizer)?);
	}
	Ok(resolved)
}

/// Resolve one raw value, recursing into referenced keys.
///
/// `visiting` holds every key on the active resolution path; meeting one of
/// them again is a circular reference. Each recursion removes its key on the
/// way out, so sibling references to the same key are fine.
fn resolve_value(
	flat: &PropertyMap,
	value: &str,
	visiting: &mut HashSet<String>,
	tokenizer: &Tokenizer,
) -> Result<String> {
	let mut out = String::new();
	for token in tokenizer.tokenize(value) {
		match token {
			Token::Literal(text) => out.push_str(&text),
			Token::Placeholder { key, original } => match flat.get(&key) {
				Some(raw) => {
					if !visiting.insert(key.clone()) {
						return Err(MergeError::CircularReference { key });
					}
					out.push_str(&resolve_value(flat, raw, visiting, tokenizer)?);
					visiting.remove(&key);
				}
				// Default values are not supported; an unresolved reference
				// keeps its original delimited text.
				None => out.push_str(&original),
			},
		}
	}
	Ok(out)
}
