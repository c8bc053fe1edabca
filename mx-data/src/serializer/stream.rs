use crate::{
	serializer::Element,
	Result,
};
use std::{
	borrow::Cow,
	fmt,
};

/// Default indentation unit
pub const INDENT: &str = "  ";

/// Serializer configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
	/// Indentation unit written once per nesting level
	pub indent: Cow<'static, str>,
	/// Write the `<?xml ...?>` declaration (and a document type, if given) before the root
	pub declaration: bool,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			indent: Cow::Borrowed(INDENT),
			declaration: true,
		}
	}
}

/// Indentation-aware XML text writer
pub struct Stream<'w> {
	out: &'w mut dyn fmt::Write,
	indent: Cow<'static, str>,
}

impl<'w> Stream<'w> {
	/// Writer with the default indentation unit
	pub fn new(out: &'w mut dyn fmt::Write) -> Self {
		Self {
			out,
			indent: Cow::Borrowed(INDENT),
		}
	}

	/// Writer with the indentation unit from `options`
	pub fn with_options(out: &'w mut dyn fmt::Write, options: &Options) -> Self {
		Self {
			out,
			indent: options.indent.clone(),
		}
	}

	/// Write raw (already escaped) text
	pub fn write_str(&mut self, text: &str) -> Result<()> {
		self.out.write_str(text)?;
		Ok(())
	}

	/// Write `level` indentation units
	pub fn indent(&mut self, level: usize) -> Result<()> {
		for _ in 0..level {
			self.out.write_str(&self.indent)?;
		}
		Ok(())
	}

	/// Start a new line
	pub fn newline(&mut self) -> Result<()> {
		self.write_str("\n")
	}

	/// Write ` key="value"` with the value escaped
	pub fn attribute(&mut self, key: &str, value: &str) -> Result<()> {
		self.out.write_char(' ')?;
		self.out.write_str(key)?;
		self.out.write_str("=\"")?;
		self.out.write_str(&quick_xml::escape::escape(value))?;
		self.out.write_char('"')?;
		Ok(())
	}

	/// Write escaped text content
	pub fn text(&mut self, text: &str) -> Result<()> {
		self.write_str(&quick_xml::escape::escape(text))
	}

	/// Write an element (and everything below) starting at indentation `level`
	///
	/// The caller is responsible for the line break in front of the element.
	pub fn element<E: Element + ?Sized>(&mut self, element: &E, level: usize) -> Result<()> {
		self.indent(level)?;
		self.write_str("<")?;
		element.stream_name(self)?;
		if element.has_attributes() {
			element.stream_attributes(self)?;
		}
		if !element.has_contents() {
			return self.write_str("/>");
		}
		self.write_str(">")?;
		let mut is_one_line_only = false;
		element.stream_contents(self, level, &mut is_one_line_only)?;
		if !is_one_line_only {
			self.newline()?;
			self.indent(level)?;
		}
		self.write_str("</")?;
		element.stream_name(self)?;
		self.write_str(">")
	}
}

/// Serialize a single element (no declaration) into a string
pub fn to_string<E: Element + ?Sized>(element: &E) -> Result<String> {
	let mut out = String::new();
	Stream::new(&mut out).element(element, 0)?;
	Ok(out)
}

/// Serialize a document: optional declaration and document type, then the root element
///
/// `doctype` is the complete `<!DOCTYPE ...>` line, if any.
pub fn serialize_document<E: Element + ?Sized>(root: &E, doctype: Option<&str>, options: &Options) -> Result<String> {
	let mut out = String::new();
	{
		let mut stream = Stream::with_options(&mut out, options);
		if options.declaration {
			stream.write_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#)?;
			stream.newline()?;
			if let Some(doctype) = doctype {
				stream.write_str(doctype)?;
				stream.newline()?;
			}
		}
		stream.element(root, 0)?;
		stream.newline()?;
	}
	Ok(out)
}
