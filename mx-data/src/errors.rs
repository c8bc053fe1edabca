#![allow(missing_docs)] // helper names should be good enough
//! Fatal errors and helper functions to generate common ones
//!
//! Only problems that prevent building a tree at all end up here (ill-formed XML, an unexpected
//! root element, failing output streams).  Schema mismatches inside a well-formed tree are
//! recorded as [`Diagnostics`](crate::diagnostics::Diagnostics) instead.

use crate::values::FormatError;

/// Error type of this crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// XML syntax violation reported by the tokenizer
	#[error("ill-formed XML at line {line}, column {column}: {source}")]
	Xml {
		/// 1-based line of the offending input
		line: usize,
		/// 1-based column of the offending input
		column: usize,
		/// tokenizer error
		#[source]
		source: quick_xml::Error,
	},
	/// Input ended before the document was complete
	#[error("unexpected end of input: {msg}")]
	UnexpectedEof {
		/// what was missing
		msg: String,
	},
	/// Non-whitespace text outside of the root element
	#[error("unexpected text outside of the root element")]
	UnexpectedText,
	/// More than one element at document level
	#[error("more than one root element (found <{tag}>)")]
	MultipleRoots {
		/// tag of the second root
		tag: String,
	},
	/// Root element isn't one this document type supports
	#[error("unexpected root element <{tag}>")]
	UnexpectedRoot {
		/// tag of the root
		tag: String,
	},
	/// Names or text that are not valid UTF-8
	#[error("invalid UTF-8 in XML input: {0}")]
	NonUtf8(#[from] std::str::Utf8Error),
	/// Lexical value that failed to parse where no diagnostics sink was available
	#[error(transparent)]
	Format(#[from] FormatError),
	/// Formatting into the output stream failed
	#[error("failed writing XML output")]
	Fmt(#[from] std::fmt::Error),
	/// I/O failure writing a document
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// Convert a byte offset into the input to a 1-based (line, column) pair
pub fn line_column(text: &str, position: usize) -> (usize, usize) {
	let mut end = position.min(text.len());
	while !text.is_char_boundary(end) {
		end -= 1;
	}
	let prefix = &text[..end];
	let line = prefix.matches('\n').count() + 1;
	let column = match prefix.rfind('\n') {
		Some(newline) => prefix[newline + 1..].chars().count() + 1,
		None => prefix.chars().count() + 1,
	};
	(line, column)
}

pub fn xml_syntax(text: &str, position: usize, source: quick_xml::Error) -> Error {
	let (line, column) = line_column(text, position);
	Error::Xml { line, column, source }
}

pub fn unexpected_eof(msg: &str) -> Error {
	Error::UnexpectedEof { msg: msg.into() }
}

pub fn unexpected_text() -> Error {
	Error::UnexpectedText
}

pub fn multiple_roots(tag: &str) -> Error {
	Error::MultipleRoots { tag: tag.into() }
}

pub fn unexpected_root(tag: &str) -> Error {
	Error::UnexpectedRoot { tag: tag.into() }
}

#[cfg(test)]
mod test {
	use super::line_column;

	#[test]
	fn positions() {
		let text = "<a>\n  <b>\n</a>";
		assert_eq!(line_column(text, 0), (1, 1));
		assert_eq!(line_column(text, 4), (2, 1));
		assert_eq!(line_column(text, 6), (2, 3));
		assert_eq!(line_column(text, 1000), (3, 5));
	}
}
