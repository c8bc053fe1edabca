use crate::{
	serializer::Stream,
	FixedElement,
	Result,
};

/// Element that can be serialized.
///
/// `has_attributes` and `has_contents` must agree with what the stream functions write:
/// [`Stream::element`] writes `<tag/>` when both are false.
pub trait Element: FixedElement {
	/// Whether `stream_attributes` writes anything
	fn has_attributes(&self) -> bool;

	/// Whether `stream_contents` writes anything
	fn has_contents(&self) -> bool;

	/// Write ` key="value"` pairs of present attributes in declaration order
	fn stream_attributes(&self, out: &mut Stream<'_>) -> Result<()>;

	/// Write the tag
	fn stream_name(&self, out: &mut Stream<'_>) -> Result<()> {
		out.write_str(Self::TAG)
	}

	/// Write text value or child elements
	///
	/// Child elements are written on their own lines at `indent + 1`.  Sets `is_one_line_only`
	/// if the closing tag can follow on the same line (no contents, or a text value).
	fn stream_contents(&self, out: &mut Stream<'_>, indent: usize, is_one_line_only: &mut bool) -> Result<()>;

	/// Write the complete element at the given indentation
	fn to_stream(&self, out: &mut Stream<'_>, indent: usize) -> Result<()> {
		out.element(self, indent)
	}
}

/// Attribute container that can be serialized
pub trait Attributes {
	/// Whether any attribute is written
	fn has_attributes(&self) -> bool;

	/// Write ` key="value"` pairs of present attributes in declaration order
	fn stream_attributes(&self, out: &mut Stream<'_>) -> Result<()>;
}
