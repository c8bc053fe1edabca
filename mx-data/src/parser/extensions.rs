use crate::{
	diagnostics::Diagnostics,
	errors,
	parser::{
		Element,
		ParseContext,
		ParseOptions,
		XElement,
	},
	Result,
};

/// Extension methods to parse elements directly from nodes or text
pub trait ElementExt: Element {
	/// Populate the element from a node, recording problems in `diagnostics`
	fn parse_from_xml(&mut self, diagnostics: &mut Diagnostics, node: &XElement) -> bool {
		let mut ctx = ParseContext::new(diagnostics);
		self.from_xml(&mut ctx, node)
	}

	/// Build the element from a root node
	///
	/// Fails if the root tag doesn't match; otherwise returns the (possibly partial) element and
	/// whether the parse succeeded without error diagnostics.
	fn from_root(node: &XElement, diagnostics: &mut Diagnostics, options: ParseOptions) -> Result<(Self, bool)> {
		if node.name != Self::TAG {
			return Err(errors::unexpected_root(&node.name));
		}
		let mut element = Self::default();
		let mut ctx = ParseContext::with_options(diagnostics, options);
		let ok = element.from_xml(&mut ctx, node);
		Ok((element, ok && !diagnostics.has_errors()))
	}

	/// Parse a document whose root is this element
	fn from_xml_str(text: &str, diagnostics: &mut Diagnostics) -> Result<(Self, bool)> {
		let root = crate::quick_xml::read_tree(text)?;
		Self::from_root(&root, diagnostics, ParseOptions::default())
	}
}

impl<E: Element> ElementExt for E {}
