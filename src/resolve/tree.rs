use crate::error::{MergeError, Result};
use crate::resolve::PropertyMap;
use crate::syntax::{Token, Tokenizer};
use std::collections::HashMap;

/// Deepest chain of reference links the renderer will follow.
///
/// The tree strategy has no cycle detection; without a guard a reference
/// cycle would recurse until the stack overflows. Only following a bound
/// pending reference counts against the limit, so the guard fires on
/// cycles, not on legitimately deep configurations. Callers that need real
/// cycle diagnostics should use the squash strategy.
const MAX_RENDER_DEPTH: usize = 1024;

/// Index of a node in the arena owned by [`ResolutionTree`].
type NodeId = usize;

#[derive(Debug)]
enum Node {
	/// Verbatim text.
	Literal(String),

	/// Ordered concatenation of child nodes.
	Composite(Vec<NodeId>),

	/// Reference to a key that was unknown when first seen. One pending node
	/// is shared by every value referencing the key early; binding it once
	/// propagates to all of them.
	Pending {
		/// The original delimited text, rendered verbatim when the key turns
		/// out to be undefined.
		original: String,
		target: Option<NodeId>,
	},
}

/// Resolve the squashed map by building each value's node graph exactly once,
/// then rendering every key.
pub(crate) fn resolve(flat: &PropertyMap, tokenizer: &Tokenizer) -> Result<PropertyMap> {
	let mut tree = ResolutionTree::new();
	for (key, value) in flat {
		tree.register(key, value, tokenizer);
	}
	tree.bind_pending();
	tree.render_all()
}

struct ResolutionTree {
	/// Arena of all nodes; ids are indices. Nothing outlives one merge call.
	nodes: Vec<Node>,

	/// Root node per registered key.
	definitions: HashMap<String, NodeId>,

	/// Shared pending node per not-yet-registered referenced name.
	pending: HashMap<String, NodeId>,
}

impl ResolutionTree {
	fn new() -> Self {
		ResolutionTree {
			nodes: Vec::new(),
			definitions: HashMap::new(),
			pending: HashMap::new(),
		}
	}

	fn push(&mut self, node: Node) -> NodeId {
		self.nodes.push(node);
		self.nodes.len() - 1
	}

	/// Parse one raw value and record its root node under `key`.
	///
	/// Placeholder tokens become a direct link when the referenced key is
	/// already registered, otherwise the shared pending node for that name.
	fn register(&mut self, key: &str, value: &str, tokenizer: &Tokenizer) {
		let mut parts = Vec::new();
		for token in tokenizer.tokenize(value) {
			let id = match token {
				Token::Literal(text) => self.push(Node::Literal(text)),
				Token::Placeholder { key: name, original } => {
					match self.definitions.get(&name) {
						Some(&defined) => defined,
						None => self.pending_node(name, original),
					}
				}
			};
			parts.push(id);
		}

		// The tokenizer always yields at least one token; a single part
		// needs no composite wrapping.
		let root = if parts.len() == 1 {
			parts[0]
		} else {
			self.push(Node::Composite(parts))
		};
		self.definitions.insert(key.to_string(), root);
	}

	fn pending_node(&mut self, name: String, original: String) -> NodeId {
		if let Some(&id) = self.pending.get(&name) {
			return id;
		}
		let id = self.push(Node::Pending {
			original,
			target: None,
		});
		self.pending.insert(name, id);
		id
	}

	/// Point every pending reference at its key's definition. Names that were
	/// never registered stay unbound and render their original text.
	fn bind_pending(&mut self) {
		for (name, &id) in &self.pending {
			let target = self.definitions.get(name).copied();
			if let Node::Pending { target: slot, .. } = &mut self.nodes[id] {
				*slot = target;
			}
		}
	}

	/// Render every registered key to its final string.
	fn render_all(&self) -> Result<PropertyMap> {
		let mut resolved = PropertyMap::new();
		for (key, &id) in &self.definitions {
			resolved.insert(key.clone(), self.render(key, id, 0)?);
		}
		Ok(resolved)
	}

	fn render(&self, key: &str, id: NodeId, depth: usize) -> Result<String> {
		if depth > MAX_RENDER_DEPTH {
			return Err(MergeError::ReferenceDepthExceeded {
				key: key.to_string(),
				limit: MAX_RENDER_DEPTH,
			});
		}
		match &self.nodes[id] {
			Node::Literal(text) => Ok(text.clone()),
			// Direct links always point at earlier-registered keys, so a
			// loop can only close through a bound pending reference; plain
			// composite traversal does not count against the limit.
			Node::Composite(children) => {
				let mut out = String::new();
				for &child in children {
					out.push_str(&self.render(key, child, depth)?);
				}
				Ok(out)
			}
			Node::Pending { original, target } => match target {
				Some(target) => self.render(key, *target, depth + 1),
				None => Ok(original.clone()),
			},
		}
	}
}
