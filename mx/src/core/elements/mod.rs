#![allow(missing_docs)]
//! MusicXML elements
//!
//! Every element type implements `mx_data::Element`; groups (`#[derive(Inner)]` structs) and
//! choices (`#[derive(Inner)]` enums) describe the child sequences.  Field order is schema order.
//! Elements that only wrap a value get a `new(value)` constructor.
//!
//! Type names are the schema's element and group names in camel case; field and variant names
//! are the child element names in snake case.  Items only get documentation where the name alone
//! doesn't say what they hold.

/// Element holding a single text value, optionally with an attribute container
macro_rules! value_element {
	($(#[$meta:meta])* $name:ident($ty:ty)) => {
		#[derive(::mx_data::Element, Clone, Debug, Default, PartialEq)]
		$(#[$meta])*
		pub struct $name {
			/// Text content
			#[mx_data(value)]
			pub value: $ty,
		}

		impl $name {
			/// Element with the given value
			pub fn new(value: $ty) -> Self {
				Self { value }
			}
		}
	};
	($(#[$meta:meta])* $name:ident($ty:ty) with $attributes:ty) => {
		#[derive(::mx_data::Element, Clone, Debug, Default, PartialEq)]
		$(#[$meta])*
		pub struct $name {
			/// Attributes of the element
			#[mx_data(attributes)]
			pub attributes: $attributes,
			/// Text content
			#[mx_data(value)]
			pub value: $ty,
		}

		impl $name {
			/// Element with the given value and no attributes
			pub fn new(value: $ty) -> Self {
				Self {
					value,
					..Self::default()
				}
			}
		}
	};
}

/// Element without contents, optionally with an attribute container
macro_rules! empty_element {
	($(#[$meta:meta])* $name:ident) => {
		#[derive(::mx_data::Element, Clone, Debug, Default, PartialEq)]
		$(#[$meta])*
		pub struct $name;
	};
	($(#[$meta:meta])* $name:ident with $attributes:ty) => {
		#[derive(::mx_data::Element, Clone, Debug, Default, PartialEq)]
		$(#[$meta])*
		pub struct $name {
			/// Attributes of the element
			#[mx_data(attributes)]
			pub attributes: $attributes,
		}
	};
}

mod attributes;
mod barline;
mod common;
mod defaults;
mod direction;
mod notations;
mod note;
mod score;

pub use self::{
	attributes::*,
	barline::*,
	common::*,
	defaults::*,
	direction::*,
	notations::*,
	note::*,
	score::*,
};
