use crate::{
	parser::{
		ParseContext,
		XElement,
	},
	FixedElement,
};

/// Element that can be populated from a parsed XML node
///
/// Usually derived; `from_xml` drives the generated `parse_attributes` and `parse_contents`.
pub trait Element: FixedElement + Default {
	/// Populate attributes from the node; false if a mandatory attribute is missing or invalid
	fn parse_attributes(&mut self, ctx: &mut ParseContext<'_>, node: &XElement) -> bool;

	/// Populate text value or child elements from the node
	fn parse_contents(&mut self, ctx: &mut ParseContext<'_>, node: &XElement) -> bool;

	/// Populate the element from a node
	///
	/// A node with a different tag is rejected without touching `self`.
	fn from_xml(&mut self, ctx: &mut ParseContext<'_>, node: &XElement) -> bool {
		if node.name != Self::TAG {
			ctx.wrong_tag(Self::TAG, &node.name);
			return false;
		}
		ctx.enter(Self::TAG);
		let attributes_ok = self.parse_attributes(ctx, node);
		let contents_ok = self.parse_contents(ctx, node);
		ctx.leave();
		attributes_ok && contents_ok
	}
}

/// Attribute container that can be populated from a parsed XML node
pub trait Attributes: Default {
	/// Keys of all declared attributes (used to detect unknown ones)
	const KEYS: &'static [&'static str];

	/// Look up all declared attributes; false if a mandatory one is missing or invalid
	fn parse_attributes(&mut self, ctx: &mut ParseContext<'_>, node: &XElement) -> bool;
}
