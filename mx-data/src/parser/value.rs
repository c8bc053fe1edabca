use crate::values::FormatError;

/// Trait to parse attributes and text values
///
/// This is implemented by "marker" types to decide how to parse a type (the same type can be
/// parsed differently depending on the marker type)
pub trait Value<T> {
	/// Parse value from text
	fn parse_value(text: &str) -> Result<T, FormatError>;
}

/// Implements `Value` for all types implementing `std::str::FromStr`; this is a good default.
pub struct ValueDefault;

impl<T> Value<T> for ValueDefault
where
	T: std::str::FromStr,
	T::Err: Into<FormatError>,
{
	fn parse_value(text: &str) -> Result<T, FormatError> {
		text.parse::<T>().map_err(|e| e.into().with_text(text))
	}
}

/// Implements `Value` for `String`: text is taken verbatim.
pub struct ValueString;

impl Value<String> for ValueString {
	fn parse_value(text: &str) -> Result<String, FormatError> {
		Ok(text.to_owned())
	}
}
