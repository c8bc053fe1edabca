use crate::values::FormatError;
use chrono::NaiveDate;
use std::{
	fmt,
	str::FromStr,
};

/// `xs:string`: any text, kept verbatim
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct XsString(pub String);

impl XsString {
	/// Wrap text
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Wrapped text
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for XsString {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}

impl From<String> for XsString {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl fmt::Display for XsString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for XsString {
	type Err = FormatError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		Ok(Self(text.to_owned()))
	}
}

fn collapse_whitespace(text: &str) -> String {
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `xs:token`: whitespace collapsed text
///
/// Construction normalizes, so the stored text is always in canonical form.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct XsToken(String);

impl XsToken {
	/// Collapse whitespace of text and wrap it
	pub fn new(value: &str) -> Self {
		Self(collapse_whitespace(value))
	}

	/// Wrapped text
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for XsToken {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl fmt::Display for XsToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for XsToken {
	type Err = FormatError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		Ok(Self::new(text))
	}
}

fn is_name_start(c: char) -> bool {
	c.is_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_' || c == '-' || c == '.'
}

fn check_ncname(type_name: &'static str, text: &str) -> Result<String, FormatError> {
	let trimmed = text.trim();
	let mut chars = trimmed.chars();
	match chars.next() {
		Some(c) if is_name_start(c) => (),
		Some(_) => return Err(FormatError::new(type_name, text, "must start with a letter or '_'")),
		None => return Err(FormatError::new(type_name, text, "must not be empty")),
	}
	if chars.all(is_name_char) {
		Ok(trimmed.to_owned())
	} else {
		Err(FormatError::new(type_name, text, "contains characters not allowed in a name"))
	}
}

macro_rules! ncname_type {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		///
		/// The default value is empty (not a legal lexical form); it marks an identifier that still
		/// needs to be assigned.
		#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
		pub struct $name(String);

		impl $name {
			/// Check and wrap a name
			pub fn new(value: &str) -> Result<Self, FormatError> {
				check_ncname(stringify!($name), value).map(Self)
			}

			/// Wrapped name
			pub fn as_str(&self) -> &str {
				&self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(&self.0)
			}
		}

		impl FromStr for $name {
			type Err = FormatError;

			fn from_str(text: &str) -> Result<Self, Self::Err> {
				Self::new(text)
			}
		}
	};
}

ncname_type! {
	/// `xs:ID`: document-unique identifier
	XsId
}

ncname_type! {
	/// `xs:IDREF`: reference to an `xs:ID`
	XsIdRef
}

impl From<&XsId> for XsIdRef {
	fn from(id: &XsId) -> Self {
		Self(id.0.clone())
	}
}

impl From<&XsIdRef> for XsId {
	fn from(id: &XsIdRef) -> Self {
		Self(id.0.clone())
	}
}

/// `xs:NMTOKEN`: one or more name characters
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct XsNmToken(String);

impl XsNmToken {
	/// Check and wrap a name token
	pub fn new(value: &str) -> Result<Self, FormatError> {
		let trimmed = value.trim();
		if !trimmed.is_empty() && trimmed.chars().all(|c| is_name_char(c) || c == ':') {
			Ok(Self(trimmed.to_owned()))
		} else {
			Err(FormatError::new("XsNmToken", value, "expected name characters"))
		}
	}

	/// Wrapped name token
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for XsNmToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for XsNmToken {
	type Err = FormatError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		Self::new(text)
	}
}

/// `xs:date` without timezone (`YYYY-MM-DD`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct XsDate(pub NaiveDate);

impl Default for XsDate {
	fn default() -> Self {
		Self(NaiveDate::default())
	}
}

impl fmt::Display for XsDate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.format("%Y-%m-%d"))
	}
}

impl FromStr for XsDate {
	type Err = FormatError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
			.map(Self)
			.map_err(|e| FormatError::new("XsDate", text, e.to_string()))
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn token_collapses() {
		assert_eq!("  light   barline ".parse::<XsToken>().unwrap().as_str(), "light barline");
	}

	#[test]
	fn names() {
		assert_eq!(XsId::new("P1").unwrap().as_str(), "P1");
		assert!(XsId::new("1P").is_err());
		assert!(XsId::new("").is_err());
		assert!(XsIdRef::new("a b").is_err());
		assert_eq!(XsIdRef::from(&XsId::new("PARTONE").unwrap()).as_str(), "PARTONE");
		assert!(XsNmToken::new("1st").is_ok());
		assert!(XsNmToken::new("").is_err());
	}

	#[test]
	fn date() {
		let date: XsDate = "2016-04-21".parse().unwrap();
		assert_eq!(date.0, NaiveDate::from_ymd_opt(2016, 4, 21).unwrap());
		assert_eq!(date.to_string(), "2016-04-21");
		assert!("21.04.2016".parse::<XsDate>().is_err());
	}

	proptest! {
		#[test]
		fn string_round_trip(text in ".*") {
			let value = XsString::from(text.as_str());
			prop_assert_eq!(value.to_string().parse::<XsString>().unwrap(), value);
		}

		#[test]
		fn token_round_trip(text in "[a-z ]{0,20}") {
			let value = XsToken::new(&text);
			prop_assert_eq!(value.to_string().parse::<XsToken>().unwrap(), value);
		}

		#[test]
		fn id_round_trip(text in "[A-Za-z_][A-Za-z0-9_.-]{0,10}") {
			let value = XsId::new(&text).unwrap();
			prop_assert_eq!(value.to_string().parse::<XsId>().unwrap(), value);
		}

		#[test]
		fn date_round_trip(days in 0i32..100_000) {
			let value = XsDate(NaiveDate::from_num_days_from_ce_opt(days + 1).unwrap());
			prop_assert_eq!(value.to_string().parse::<XsDate>().unwrap(), value);
		}
	}
}
