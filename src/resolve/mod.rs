//! Map merging and placeholder resolution.
//!
//! This module handles:
//! - Flattening an ordered list of property maps (later maps win per key)
//! - Strategy selection between the squash and tree resolvers
//! - The public `merge` / `resolve_values` entry points

pub mod squash;
pub mod tree;

use crate::error::Result;
use crate::syntax::{Delimiters, Tokenizer};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Map of property keys to raw or resolved string values.
pub type PropertyMap = BTreeMap<String, String>;

/// Resolution strategy for a merge call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
	/// Squash all maps into one, then resolve each value independently by
	/// walking its raw string and recursing into referenced keys. Detects
	/// circular references and fails the whole merge on them.
	SimpleSquash,

	/// Build a node graph so every value is parsed exactly once; forward
	/// references bind through shared pending nodes after all keys are
	/// registered. Does not detect cycles; a depth guard stops runaway
	/// rendering instead.
	BuildTree,
}

/// Merge `inputs` into one fully resolved map using the default `${key}`
/// delimiters. Later maps override earlier ones for the same key; zero
/// inputs yield an empty map.
pub fn merge(algorithm: Algorithm, inputs: &[PropertyMap]) -> Result<PropertyMap> {
	merge_with(algorithm, inputs, &Delimiters::default())
}

/// Merge with a custom placeholder delimiter pair.
pub fn merge_with(
	algorithm: Algorithm,
	inputs: &[PropertyMap],
	delimiters: &Delimiters,
) -> Result<PropertyMap> {
	let tokenizer = Tokenizer::new(delimiters)?;
	let flat = flatten(inputs);
	match algorithm {
		Algorithm::SimpleSquash => squash::resolve(&flat, &tokenizer),
		Algorithm::BuildTree => tree::resolve(&flat, &tokenizer),
	}
}

/// Resolve placeholders within a single, already-merged map.
pub fn resolve_values(algorithm: Algorithm, input: &PropertyMap) -> Result<PropertyMap> {
	resolve_values_with(algorithm, input, &Delimiters::default())
}

/// Single-map form of [`merge_with`].
pub fn resolve_values_with(
	algorithm: Algorithm,
	input: &PropertyMap,
	delimiters: &Delimiters,
) -> Result<PropertyMap> {
	merge_with(algorithm, std::slice::from_ref(input), delimiters)
}

/// Squash the ordered input maps into one; later maps win per key.
fn flatten(inputs: &[PropertyMap]) -> PropertyMap {
	let mut flat = PropertyMap::new();
	for input in inputs {
		flat.extend(input.iter().map(|(k, v)| (k.clone(), v.clone())));
	}
	flat
}
