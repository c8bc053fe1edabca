use crate::{
	parser,
	serializer,
};

#[cfg(feature = "derive")]
pub use mx_data_derive::{
	Attributes,
	Element,
	Inner,
};

/// Element with a fixed tag
pub trait FixedElement {
	/// XML tag
	const TAG: &'static str;
}

/// Combining `parser::Element` and `serializer::Element`.
///
/// Can be derived (if `derive` feature is active).
pub trait Element: parser::Element + serializer::Element {}

impl<E: parser::Element + serializer::Element> Element for E {}

/// Combining `parser::Inner` and `serializer::Inner`.
///
/// Can be derived (if `derive` feature is active).
pub trait Inner: parser::Inner + serializer::Inner {}

impl<E: parser::Inner + serializer::Inner> Inner for E {}

/// Combining `parser::Attributes` and `serializer::Attributes`.
///
/// Can be derived (if `derive` feature is active).
pub trait Attributes: parser::Attributes + serializer::Attributes {}

impl<A: parser::Attributes + serializer::Attributes> Attributes for A {}
