use crate::error::{MergeError, Result};
use crate::resolve::PropertyMap;
use std::path::Path;

/// Load one property source from the given path.
///
/// A source is a TOML file whose top-level entries are all string values;
/// dotted keys must be quoted (`"app.url" = "..."`). Values are taken as
/// raw text, placeholders included.
pub fn load_source(path: &Path) -> Result<PropertyMap> {
	let content = std::fs::read_to_string(path).map_err(|source| MergeError::SourceRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_source_str(&content, path)
}

/// Parse a property source from a string (useful for testing).
pub fn parse_source_str(content: &str, path: &Path) -> Result<PropertyMap> {
	let table: toml::Table = toml::from_str(content).map_err(|source| MergeError::SourceParse {
		path: path.to_path_buf(),
		source,
	})?;

	let mut map = PropertyMap::new();
	for (key, value) in table {
		match value.as_str() {
			Some(text) => {
				map.insert(key, text.to_string());
			}
			None => {
				return Err(MergeError::NonStringValue {
					path: path.to_path_buf(),
					key,
				});
			}
		}
	}
	Ok(map)
}

/// Load an ordered list of sources; order is preserved for merging.
pub fn load_sources<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PropertyMap>> {
	paths.iter().map(|path| load_source(path.as_ref())).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_source() {
		let map = parse_source_str("", &PathBuf::from("test.toml")).unwrap();
		assert!(map.is_empty());
	}

	#[test]
	fn test_parse_plain_and_dotted_keys() {
		let content = r#"
name = "sample"
"app.url" = "http://${host}/api"
"#;
		let map = parse_source_str(content, &PathBuf::from("test.toml")).unwrap();
		assert_eq!(map["name"], "sample");
		assert_eq!(map["app.url"], "http://${host}/api");
	}

	#[test]
	fn test_non_string_value_rejected() {
		let result = parse_source_str("port = 8080", &PathBuf::from("test.toml"));
		match result.unwrap_err() {
			MergeError::NonStringValue { key, .. } => assert_eq!(key, "port"),
			other => panic!("Expected NonStringValue, got {other:?}"),
		}
	}

	#[test]
	fn test_invalid_toml_rejected() {
		let result = parse_source_str("not toml ===", &PathBuf::from("test.toml"));
		assert!(matches!(result.unwrap_err(), MergeError::SourceParse { .. }));
	}

	#[test]
	fn test_load_source_missing_file() {
		let result = load_source(Path::new("/nonexistent/propmerge-test.toml"));
		assert!(matches!(result.unwrap_err(), MergeError::SourceRead { .. }));
	}

	#[test]
	fn test_load_sources_preserves_order() {
		let dir = tempfile::tempdir().unwrap();
		let first = dir.path().join("first.toml");
		let second = dir.path().join("second.toml");
		std::fs::write(&first, "key = \"one\"\n").unwrap();
		std::fs::write(&second, "key = \"two\"\n").unwrap();

		let maps = load_sources(&[&first, &second]).unwrap();
		assert_eq!(maps.len(), 2);
		assert_eq!(maps[0]["key"], "one");
		assert_eq!(maps[1]["key"], "two");
	}
}
