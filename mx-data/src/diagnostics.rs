//! Structured parse diagnostics
//!
//! Parsing a well-formed tree never aborts on schema mismatches; every problem becomes a
//! [`Diagnostic`] tied to the path of the element it was found in.  The list renders as
//! human-readable text through `Display`.

use std::fmt;

/// How bad a diagnostic is
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
	/// Content was skipped; the tree is still complete for everything recognized
	Warning,
	/// Content was lost or a mandatory piece is missing
	Error,
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Warning => "warning",
			Self::Error => "error",
		})
	}
}

/// What went wrong
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
	/// Node tag is not the expected element
	WrongTag,
	/// Child element no field of the parent accepts
	UnknownElement,
	/// Known child element at a position where it isn't allowed
	UnexpectedElement,
	/// Mandatory child element not found
	MissingElement,
	/// Attribute the element doesn't declare
	UnknownAttribute,
	/// Mandatory attribute not found
	MissingAttribute,
	/// Attribute or text value isn't a legal lexical form
	InvalidValue,
	/// Non-whitespace text in an element that only has child elements
	UnexpectedText,
}

impl fmt::Display for DiagnosticKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::WrongTag => "wrong tag",
			Self::UnknownElement => "unknown element",
			Self::UnexpectedElement => "unexpected element",
			Self::MissingElement => "missing element",
			Self::UnknownAttribute => "unknown attribute",
			Self::MissingAttribute => "missing attribute",
			Self::InvalidValue => "invalid value",
			Self::UnexpectedText => "unexpected text",
		})
	}
}

/// One recorded problem
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
	/// severity
	pub severity: Severity,
	/// category
	pub kind: DiagnosticKind,
	/// slash separated element path, e.g. `/score-partwise/part/measure`
	pub path: String,
	/// human-readable details
	pub message: String,
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({}) at {}: {}", self.severity, self.kind, self.path, self.message)
	}
}

/// Sink accumulating diagnostics
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
	entries: Vec<Diagnostic>,
}

impl Diagnostics {
	/// Empty sink
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a diagnostic
	pub fn push(&mut self, diagnostic: Diagnostic) {
		self.entries.push(diagnostic);
	}

	/// All recorded diagnostics in order
	pub fn entries(&self) -> &[Diagnostic] {
		&self.entries
	}

	/// Nothing recorded
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of recorded diagnostics
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Any diagnostic with `Severity::Error`
	pub fn has_errors(&self) -> bool {
		self.entries.iter().any(|d| d.severity == Severity::Error)
	}

	/// Diagnostics of a given kind
	pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> + '_ {
		self.entries.iter().filter(move |d| d.kind == kind)
	}

	/// Forget everything recorded so far
	pub fn clear(&mut self) {
		self.entries.clear();
	}
}

impl fmt::Display for Diagnostics {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for d in &self.entries {
			writeln!(f, "{}", d)?;
		}
		Ok(())
	}
}

impl<'a> IntoIterator for &'a Diagnostics {
	type Item = &'a Diagnostic;
	type IntoIter = std::slice::Iter<'a, Diagnostic>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
