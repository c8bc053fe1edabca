use indexmap::IndexMap;

/// Generic parsed XML element: name, attributes, child elements and text
///
/// Text is the concatenation of all text and CDATA nodes directly inside the element
/// (including whitespace between child elements).  Comments and processing instructions are not
/// kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XElement {
	/// qualified tag
	pub name: String,
	/// attributes in document order
	pub attributes: IndexMap<String, String>,
	/// child elements in document order
	pub children: Vec<XElement>,
	/// direct text content
	pub text: String,
}

impl XElement {
	/// Element without attributes, children or text
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	/// Builder: add an attribute
	pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.insert(key.into(), value.into());
		self
	}

	/// Builder: add a child element
	pub fn with_child(mut self, child: XElement) -> Self {
		self.children.push(child);
		self
	}

	/// Builder: append text
	pub fn with_text(mut self, text: &str) -> Self {
		self.text.push_str(text);
		self
	}

	/// Look up an attribute value
	pub fn attribute(&self, key: &str) -> Option<&str> {
		self.attributes.get(key).map(String::as_str)
	}

	/// First child with the given tag
	pub fn child(&self, name: &str) -> Option<&XElement> {
		self.children.iter().find(|c| c.name == name)
	}

	/// Whether the text content is empty or only whitespace
	pub fn has_only_whitespace(&self) -> bool {
		self.text.trim().is_empty()
	}
}
