//! Typed wrappers for XML schema primitives
//!
//! Every value type parses through `FromStr` (with `Err = FormatError`) and formats through
//! `Display`; the formatted text is the canonical lexical form and parses back to an equal value.
//!
//! Schema vocabularies build their own types with [`value_enum!`](crate::value_enum),
//! [`decimal_value!`](crate::decimal_value) and [`integer_value!`](crate::integer_value).

mod macros;
mod primitives;

pub use self::primitives::{
	XsDate,
	XsId,
	XsIdRef,
	XsNmToken,
	XsString,
	XsToken,
};
pub use rust_decimal::Decimal;

use rust_decimal::prelude::{
	FromPrimitive,
	ToPrimitive,
};
use std::{
	borrow::Cow,
	convert::Infallible,
	num::{
		ParseFloatError,
		ParseIntError,
	},
	str::ParseBoolError,
};

/// Text isn't a legal lexical form for a value type
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid {type_name} {text:?}: {reason}")]
pub struct FormatError {
	/// name of the value type
	pub type_name: Cow<'static, str>,
	/// offending text
	pub text: String,
	/// why the text was rejected
	pub reason: String,
}

impl FormatError {
	/// Build a new error
	pub fn new(type_name: impl Into<Cow<'static, str>>, text: impl Into<String>, reason: impl Into<String>) -> Self {
		Self {
			type_name: type_name.into(),
			text: text.into(),
			reason: reason.into(),
		}
	}

	/// Token is not part of an enumeration
	pub fn unknown_token(type_name: &'static str, text: &str) -> Self {
		Self::new(type_name, text, "unknown token")
	}

	/// Value is outside the range a type allows
	pub fn out_of_range(type_name: &'static str, text: impl Into<String>, domain: &str) -> Self {
		Self::new(type_name, text, format!("expected {}", domain))
	}

	/// Fill in the offending text if the source error didn't know it
	pub fn with_text(mut self, text: &str) -> Self {
		if self.text.is_empty() {
			self.text = text.to_owned();
		}
		self
	}
}

impl From<ParseIntError> for FormatError {
	fn from(e: ParseIntError) -> Self {
		Self::new("integer", String::new(), e.to_string())
	}
}

impl From<ParseFloatError> for FormatError {
	fn from(e: ParseFloatError) -> Self {
		Self::new("float", String::new(), e.to_string())
	}
}

impl From<ParseBoolError> for FormatError {
	fn from(e: ParseBoolError) -> Self {
		Self::new("boolean", String::new(), e.to_string())
	}
}

impl From<Infallible> for FormatError {
	fn from(e: Infallible) -> Self {
		match e {}
	}
}

/// Parse an `xs:decimal` lexical form
///
/// Accepts an optional sign, digits and at most one decimal point (no exponent, no digit
/// separators); surrounding whitespace is collapsed away.
pub fn parse_decimal(type_name: &'static str, text: &str) -> Result<Decimal, FormatError> {
	let trimmed = text.trim();
	let digits = trimmed.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(trimmed);
	let mut seen_digit = false;
	let mut seen_point = false;
	for c in digits.chars() {
		match c {
			'0'..='9' => seen_digit = true,
			'.' if !seen_point => seen_point = true,
			_ => return Err(FormatError::new(type_name, text, "not a decimal number")),
		}
	}
	if !seen_digit {
		return Err(FormatError::new(type_name, text, "not a decimal number"));
	}
	trimmed
		.strip_prefix('+')
		.unwrap_or(trimmed)
		.parse::<Decimal>()
		.map_err(|e| FormatError::new(type_name, text, e.to_string()))
}

/// Canonical `xs:decimal` text: no trailing zeros, no trailing point, no negative zero
pub fn format_decimal(value: Decimal) -> String {
	value.normalize().to_string()
}

/// Convert a float into a decimal, rounding to the shortest representation
pub fn decimal_from_f64(type_name: &'static str, value: f64) -> Result<Decimal, FormatError> {
	Decimal::from_f64(value).ok_or_else(|| FormatError::new(type_name, value.to_string(), "not representable as decimal"))
}

/// Convert a decimal into a float (zero if the conversion isn't possible)
pub fn decimal_to_f64(value: Decimal) -> f64 {
	value.to_f64().unwrap_or_default()
}
