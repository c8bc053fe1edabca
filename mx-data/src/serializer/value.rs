use std::borrow::Cow;

/// Trait to serialize attributes and text values
///
/// This is implemented by "marker" types to decide how to serialize a type (the same type can be
/// serialized differently depending on the marker type)
pub trait Value<T> {
	/// Serialize value to (unescaped) text
	fn serialize_value(data: &T) -> Cow<'_, str>;
}

/// Implements `Value` for all types implementing `std::fmt::Display`; this is a good default.
pub struct ValueDefault;

impl<T: std::fmt::Display> Value<T> for ValueDefault {
	fn serialize_value(data: &T) -> Cow<'_, str> {
		Cow::Owned(data.to_string())
	}
}

/// Implements `Value` for all types implementing `AsRef<str>`.
pub struct ValueString;

impl<T: AsRef<str>> Value<T> for ValueString {
	fn serialize_value(data: &T) -> Cow<'_, str> {
		Cow::Borrowed(data.as_ref())
	}
}
