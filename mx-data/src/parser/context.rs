use crate::{
	diagnostics::{
		Diagnostic,
		DiagnosticKind,
		Diagnostics,
		Severity,
	},
	parser::XElement,
	values::FormatError,
};

/// Parser configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
	/// Record unknown elements and attributes as errors instead of warnings
	///
	/// Content under extension points (`ignore_unknown`) is still skipped silently.
	pub strict: bool,
}

/// State threaded through a parse: diagnostics sink, options and the current element path
pub struct ParseContext<'d> {
	diagnostics: &'d mut Diagnostics,
	options: ParseOptions,
	path: Vec<&'static str>,
}

impl<'d> ParseContext<'d> {
	/// New context with default options
	pub fn new(diagnostics: &'d mut Diagnostics) -> Self {
		Self::with_options(diagnostics, ParseOptions::default())
	}

	/// New context
	pub fn with_options(diagnostics: &'d mut Diagnostics, options: ParseOptions) -> Self {
		Self {
			diagnostics,
			options,
			path: Vec::new(),
		}
	}

	/// Configured options
	pub fn options(&self) -> ParseOptions {
		self.options
	}

	/// Descend into an element
	pub fn enter(&mut self, tag: &'static str) {
		self.path.push(tag);
		log::trace!("parsing {}", self.path());
	}

	/// Leave the element entered last
	pub fn leave(&mut self) {
		self.path.pop();
	}

	/// Current element path, `/` if at document level
	pub fn path(&self) -> String {
		if self.path.is_empty() {
			return "/".into();
		}
		let mut path = String::new();
		for tag in &self.path {
			path.push('/');
			path.push_str(tag);
		}
		path
	}

	/// Record a diagnostic at the current path
	pub fn report(&mut self, severity: Severity, kind: DiagnosticKind, message: String) {
		let path = self.path();
		self.diagnostics.push(Diagnostic {
			severity,
			kind,
			path,
			message,
		});
	}

	fn unknown_severity(&self) -> Severity {
		if self.options.strict {
			Severity::Error
		} else {
			Severity::Warning
		}
	}

	pub(crate) fn wrong_tag(&mut self, expected: &str, found: &str) {
		self.report(
			Severity::Error,
			DiagnosticKind::WrongTag,
			format!("expected <{}>, found <{}>", expected, found),
		);
	}

	pub(crate) fn unknown_element(&mut self, tag: &str) {
		let severity = self.unknown_severity();
		self.report(severity, DiagnosticKind::UnknownElement, format!("skipped unknown element <{}>", tag));
	}

	pub(crate) fn unexpected_element(&mut self, tag: &str) {
		self.report(
			Severity::Error,
			DiagnosticKind::UnexpectedElement,
			format!("skipped element <{}> at a position where it isn't allowed", tag),
		);
	}

	/// Mandatory element with the given tag is missing
	pub fn missing_element(&mut self, tag: &str, found: Option<&str>) {
		let message = match found {
			Some(found) => format!("expected <{}>, found <{}>", tag, found),
			None => format!("expected <{}>", tag),
		};
		self.report(Severity::Error, DiagnosticKind::MissingElement, message);
	}

	/// None of the alternatives of a choice matched
	pub fn missing_choice(&mut self, choice: &str, found: Option<&str>) {
		let message = match found {
			Some(found) => format!("no alternative of {} starts with <{}>", choice, found),
			None => format!("expected one alternative of {}", choice),
		};
		self.report(Severity::Error, DiagnosticKind::MissingElement, message);
	}

	pub(crate) fn unknown_attribute(&mut self, key: &str) {
		let severity = self.unknown_severity();
		self.report(severity, DiagnosticKind::UnknownAttribute, format!("ignored unknown attribute {:?}", key));
	}

	/// Mandatory attribute is missing
	pub fn missing_attribute(&mut self, key: &str) {
		self.report(Severity::Error, DiagnosticKind::MissingAttribute, format!("expected attribute {:?}", key));
	}

	/// Attribute value failed to parse; the attribute stays absent
	pub fn invalid_attribute(&mut self, key: &str, error: &FormatError) {
		self.report(Severity::Error, DiagnosticKind::InvalidValue, format!("attribute {:?}: {}", key, error));
	}

	/// Text value failed to parse
	pub fn invalid_text(&mut self, error: &FormatError) {
		self.report(Severity::Error, DiagnosticKind::InvalidValue, error.to_string());
	}

	/// Check for attributes outside of `known`
	pub fn check_attributes(&mut self, node: &XElement, known: &[&str], ignore_unknown: bool) {
		for key in node.attributes.keys() {
			if known.contains(&key.as_str()) || key == "xmlns" || key.starts_with("xmlns:") {
				continue;
			}
			if ignore_unknown {
				log::debug!("{}: ignoring attribute {:?}", self.path(), key);
			} else {
				self.unknown_attribute(key);
			}
		}
	}

	/// Check that an element with only child elements doesn't carry text
	pub fn check_text(&mut self, node: &XElement, ignore_unknown: bool) {
		if node.has_only_whitespace() {
			return;
		}
		if ignore_unknown {
			log::debug!("{}: ignoring text {:?}", self.path(), node.text.trim());
		} else {
			self.report(
				Severity::Warning,
				DiagnosticKind::UnexpectedText,
				format!("ignored text {:?}", node.text.trim()),
			);
		}
	}

	/// Check that an element without child fields has no children
	pub fn check_no_children(&mut self, node: &XElement, ignore_unknown: bool) {
		for child in &node.children {
			if ignore_unknown {
				log::debug!("{}: ignoring element <{}>", self.path(), child.name);
			} else {
				self.unknown_element(&child.name);
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn paths() {
		let mut diagnostics = Diagnostics::new();
		let mut ctx = ParseContext::new(&mut diagnostics);
		assert_eq!(ctx.path(), "/");
		ctx.enter("score-partwise");
		ctx.enter("part");
		assert_eq!(ctx.path(), "/score-partwise/part");
		ctx.missing_attribute("id");
		ctx.leave();
		ctx.unknown_element("foo");
		ctx.leave();
		assert_eq!(diagnostics.len(), 2);
		assert_eq!(diagnostics.entries()[0].path, "/score-partwise/part");
		assert_eq!(diagnostics.entries()[1].path, "/score-partwise");
		assert_eq!(diagnostics.entries()[1].severity, Severity::Warning);
	}

	#[test]
	fn strict_unknown() {
		let mut diagnostics = Diagnostics::new();
		let mut ctx = ParseContext::with_options(&mut diagnostics, ParseOptions { strict: true });
		let node = XElement::new("a").with_attribute("xmlns", "urn:x").with_attribute("bogus", "1");
		ctx.check_attributes(&node, &[], false);
		assert!(diagnostics.has_errors());
		assert_eq!(diagnostics.len(), 1);
	}
}
