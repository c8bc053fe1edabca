//! Traits and helper structs to parse XML
//!
//! Parsing works on a generic tree ([`XElement`]) built by an adaptor (see
//! [`quick_xml`](crate::quick_xml)).  Each element type populates itself from a node
//! (`Element::from_xml`); child elements are consumed in schema order through a
//! [`Children`] cursor by `Inner` implementations.  If `E` implements `Element`, `E`, `Option<E>`
//! and `Vec<E>` automatically implement `Inner`.
//!
//! Problems inside a well-formed tree never abort: they are recorded in a
//! [`Diagnostics`](crate::diagnostics::Diagnostics) sink via [`ParseContext`] and the affected
//! field stays absent (or at its default).

mod context;
mod core;
mod extensions;
mod inner;
mod tree;
mod value;

pub use self::{
	context::{
		ParseContext,
		ParseOptions,
	},
	core::{
		Attributes,
		Element,
	},
	extensions::ElementExt,
	inner::{
		Children,
		Inner,
	},
	tree::XElement,
	value::{
		Value,
		ValueDefault,
		ValueString,
	},
};
