//! Derive `mx-data` trait implementations
//!
//! Deriving supports the following attributes on the type:
//! - `#[mx_data(tag = "...")]`: XML tag (only for deriving `Element`); defaults to the type name
//!   in kebab-case (`PageMargins` -> `page-margins`)
//! - `#[mx_data(crate = "...")]`: Path of the `mx-data` crate in local scope; defaults to
//!   `::mx_data`
//! - `#[mx_data(ignore_unknown)]`: Skip unknown attributes, child elements and text (only for
//!   deriving `Element`); used for extension points
//!
//! And the following attributes on fields:
//! - `#[mx_data(attributes)]`: The attribute container of the element (only for deriving
//!   `Element`)
//! - `#[mx_data(value)]`: The text value of the element (only for deriving `Element`); `String`
//!   values are taken verbatim, everything else goes through `FromStr`/`Display`
//! - `#[mx_data(rename = "...")]`: Attribute key (only for deriving `Attributes`); defaults to the
//!   field name with `_` replaced by `-`
//!
//! Fields of an `Element` without these attributes are child elements in schema order.
#![warn(missing_docs)]

extern crate proc_macro;

mod attributes;
mod element;
mod parser;
mod serialize;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derive `mx-data::{FixedElement, parser::Element, serializer::Element}`
#[proc_macro_derive(Element, attributes(mx_data))]
pub fn derive_element(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	TokenStream::from(match element::Element::from_derive_input(&input) {
		Ok(input) => {
			let mut output = serialize::derive_element(&input);
			output.extend(parser::derive_element(&input));
			output
		},
		Err(e) => e.write_errors(),
	})
}

/// Derive `mx-data::{parser,serializer}::Inner`
///
/// Structs are groups (all fields in order), enums are choices (one field per variant; the first
/// variant is the default).
#[proc_macro_derive(Inner, attributes(mx_data))]
pub fn derive_inner(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	TokenStream::from(match element::Inner::from_derive_input(&input) {
		Ok(input) => {
			let mut output = serialize::derive_inner(&input);
			output.extend(parser::derive_inner(&input));
			output
		},
		Err(e) => e.write_errors(),
	})
}

/// Derive `mx-data::{parser,serializer}::Attributes`
///
/// `Option<V>` fields are optional attributes, all other fields are mandatory.
#[proc_macro_derive(Attributes, attributes(mx_data))]
pub fn derive_attributes(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	TokenStream::from(match attributes::Attributes::from_derive_input(&input) {
		Ok(input) => attributes::derive_attributes(&input),
		Err(e) => e.write_errors(),
	})
}
