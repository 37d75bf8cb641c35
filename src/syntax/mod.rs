//! Placeholder syntax for propmerge.
//!
//! This module handles:
//! - The configurable delimiter pair wrapped around key references
//! - Splitting raw property values into literal and placeholder tokens

pub mod tokenizer;

pub use tokenizer::{Delimiters, Token, Tokenizer};
