use crate::parser::{
	Element,
	ParseContext,
	XElement,
};

/// Cursor over the child elements of one node
///
/// Inner data consumes children from the front, in schema order.
pub struct Children<'x> {
	nodes: Vec<&'x XElement>,
	position: usize,
}

impl<'x> Children<'x> {
	/// Collect the children of `node` that `accepts` knows about
	///
	/// Unknown children are skipped: silently (debug log) under an extension point, with a
	/// diagnostic otherwise.
	pub fn new(
		ctx: &mut ParseContext<'_>,
		node: &'x XElement,
		accepts: &dyn Fn(&str) -> bool,
		ignore_unknown: bool,
	) -> Self {
		let mut nodes = Vec::with_capacity(node.children.len());
		for child in &node.children {
			if accepts(&child.name) {
				nodes.push(child);
			} else if ignore_unknown {
				log::debug!("{}: skipping extension element <{}>", ctx.path(), child.name);
			} else {
				ctx.unknown_element(&child.name);
			}
		}
		Self { nodes, position: 0 }
	}

	/// Next unconsumed child
	pub fn peek(&self) -> Option<&'x XElement> {
		self.nodes.get(self.position).copied()
	}

	/// Tag of next unconsumed child
	pub fn peek_tag(&self) -> Option<&'x str> {
		self.peek().map(|node| node.name.as_str())
	}

	/// Consume next child
	pub fn advance(&mut self) -> Option<&'x XElement> {
		let node = self.peek()?;
		self.position += 1;
		Some(node)
	}

	/// Number of consumed children
	pub fn position(&self) -> usize {
		self.position
	}

	/// Report all children nothing consumed
	pub fn finish(self, ctx: &mut ParseContext<'_>) {
		for node in &self.nodes[self.position..] {
			ctx.unexpected_element(&node.name);
		}
	}
}

/// Data representing zero or more sibling elements
///
/// If `E` implements `Element`, `E`, `Option<E>` and `Vec<E>` implement `Inner`; groups
/// (structs) and choices (enums) can be derived.
pub trait Inner: Default {
	/// Whether a child with this tag can be consumed anywhere inside
	fn accepts(tag: &str) -> bool;

	/// Whether the inner data can start with a child with this tag
	fn starts_with(tag: &str) -> bool;

	/// Whether the inner data may consume no children at all
	fn is_optional() -> bool;

	/// Consume children from the cursor
	///
	/// Returns false if mandatory parts were missing or failed to parse.
	fn parse_inner(&mut self, ctx: &mut ParseContext<'_>, children: &mut Children<'_>) -> bool;
}

/// Exactly one element
impl<E: Element> Inner for E {
	fn accepts(tag: &str) -> bool {
		tag == E::TAG
	}

	fn starts_with(tag: &str) -> bool {
		tag == E::TAG
	}

	fn is_optional() -> bool {
		false
	}

	fn parse_inner(&mut self, ctx: &mut ParseContext<'_>, children: &mut Children<'_>) -> bool {
		match children.peek() {
			Some(node) if node.name == E::TAG => {
				children.advance();
				self.from_xml(ctx, node)
			},
			other => {
				ctx.missing_element(E::TAG, other.map(|node| node.name.as_str()));
				false
			},
		}
	}
}

/// Optional inner data; failures inside are recorded but don't propagate
impl<I: Inner> Inner for Option<I> {
	fn accepts(tag: &str) -> bool {
		I::accepts(tag)
	}

	fn starts_with(tag: &str) -> bool {
		I::starts_with(tag)
	}

	fn is_optional() -> bool {
		true
	}

	fn parse_inner(&mut self, ctx: &mut ParseContext<'_>, children: &mut Children<'_>) -> bool {
		*self = match children.peek_tag() {
			Some(tag) if I::starts_with(tag) => {
				let mut inner = I::default();
				inner.parse_inner(ctx, children);
				Some(inner)
			},
			_ => None,
		};
		true
	}
}

/// Repeated inner data; failures inside are recorded but don't propagate
impl<I: Inner> Inner for Vec<I> {
	fn accepts(tag: &str) -> bool {
		I::accepts(tag)
	}

	fn starts_with(tag: &str) -> bool {
		I::starts_with(tag)
	}

	fn is_optional() -> bool {
		true
	}

	fn parse_inner(&mut self, ctx: &mut ParseContext<'_>, children: &mut Children<'_>) -> bool {
		self.clear();
		while let Some(tag) = children.peek_tag() {
			if !I::starts_with(tag) {
				break;
			}
			let before = children.position();
			let mut inner = I::default();
			inner.parse_inner(ctx, children);
			self.push(inner);
			if children.position() == before {
				// nothing consumed; stop instead of looping forever
				break;
			}
		}
		true
	}
}
