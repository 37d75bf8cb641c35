use std::collections::HashSet;

/// Splits comma-separated source-name lists into ordered name vectors.
///
/// Each name is wrapped with an optional prefix and suffix (say, a directory
/// and a file extension). An optional prototype lookup receives the wrapped
/// name and may return a further comma-separated list of unwrapped prototype
/// names; those are expanded recursively and inserted ahead of the name that
/// declared them, so prototype sources end up earlier in merge order and get
/// overridden by their inheritors.
#[derive(Default)]
pub struct NameSplitter {
	prefix: Option<String>,
	suffix: Option<String>,
	prototype_lookup: Option<Box<dyn Fn(&str) -> Option<String>>>,
}

impl NameSplitter {
	pub fn new() -> Self {
		NameSplitter::default()
	}

	/// Wrap every split name with this prefix.
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	/// Wrap every split name with this suffix.
	pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
		self.suffix = Some(suffix.into());
		self
	}

	/// Look up prototype names for a wrapped name. Returning `None` or a
	/// blank string means the name has no prototypes.
	pub fn with_prototype_lookup(
		mut self,
		lookup: impl Fn(&str) -> Option<String> + 'static,
	) -> Self {
		self.prototype_lookup = Some(Box::new(lookup));
		self
	}

	/// Split `list` on commas, trimming entries and dropping empty ones.
	///
	/// Prototype expansion runs at most once per wrapped name, so a
	/// prototype chain that loops back on itself stops instead of recursing
	/// forever.
	pub fn split(&self, list: &str) -> Vec<String> {
		let mut expanded = HashSet::new();
		self.split_into(list, &mut expanded)
	}

	fn split_into(&self, list: &str, expanded: &mut HashSet<String>) -> Vec<String> {
		let mut result = Vec::new();
		for name in list.split(',') {
			let name = name.trim();
			if name.is_empty() {
				continue;
			}
			let wrapped = self.wrap(name);
			if let Some(lookup) = &self.prototype_lookup
				&& expanded.insert(wrapped.clone())
				&& let Some(prototypes) = lookup(&wrapped)
				&& !prototypes.trim().is_empty()
			{
				result.extend(self.split_into(&prototypes, expanded));
			}
			result.push(wrapped);
		}
		result
	}

	fn wrap(&self, name: &str) -> String {
		let mut wrapped = String::new();
		if let Some(prefix) = &self.prefix {
			wrapped.push_str(prefix);
		}
		wrapped.push_str(name);
		if let Some(suffix) = &self.suffix {
			wrapped.push_str(suffix);
		}
		wrapped
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_plain_split_by_default() {
		assert_eq!(NameSplitter::new().split("a,b,c"), vec!["a", "b", "c"]);
	}

	#[test]
	fn test_trims_and_drops_empty_entries() {
		assert_eq!(NameSplitter::new().split(" a ,, c ,"), vec!["a", "c"]);
	}

	#[test]
	fn test_prefix_and_suffix_wrap_each_entry() {
		let splitter = NameSplitter::new()
			.with_prefix("conf/")
			.with_suffix(".toml");
		assert_eq!(
			splitter.split("a,b"),
			vec!["conf/a.toml", "conf/b.toml"]
		);
	}

	#[test]
	fn test_prototypes_injected_ahead_and_wrapped() {
		let splitter = NameSplitter::new()
			.with_prefix("c:")
			.with_suffix(".p")
			.with_prototype_lookup(|wrapped| {
				if wrapped == "c:thenPrototyped.p" {
					Some("proto1,proto2".to_string())
				} else {
					None
				}
			});
		assert_eq!(
			splitter.split("firstNoProto,thenPrototyped"),
			vec!["c:firstNoProto.p", "c:proto1.p", "c:proto2.p", "c:thenPrototyped.p"]
		);
	}

	#[test]
	fn test_recursive_prototypes() {
		let splitter = NameSplitter::new().with_prototype_lookup(|wrapped| match wrapped {
			"child" => Some("parent".to_string()),
			"parent" => Some("grandparent".to_string()),
			_ => None,
		});
		assert_eq!(
			splitter.split("child"),
			vec!["grandparent", "parent", "child"]
		);
	}

	#[test]
	fn test_prototype_cycle_terminates() {
		// a and b name each other as prototypes; expansion stops once each
		// name has been looked up.
		let splitter = NameSplitter::new().with_prototype_lookup(|wrapped| match wrapped {
			"a" => Some("b".to_string()),
			"b" => Some("a".to_string()),
			_ => None,
		});
		assert_eq!(splitter.split("a"), vec!["a", "b", "a"]);
	}

	#[test]
	fn test_blank_prototype_result_ignored() {
		let splitter = NameSplitter::new().with_prototype_lookup(|_| Some(" ".to_string()));
		assert_eq!(splitter.split("noProto"), vec!["noProto"]);
	}
}
