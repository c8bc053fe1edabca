//! Traits and helper structs to serialize XML
//!
//! Elements describe themselves through `Element` (attribute and content presence plus streaming
//! functions); the [`Stream`] writer turns that into indented text.  Elements with neither
//! attributes nor contents become `<tag/>`, elements whose contents is a single text value stay on
//! one line, everything else puts each child on its own line.

mod core;
mod inner;
mod stream;
mod value;

pub use self::{
	core::{
		Attributes,
		Element,
	},
	inner::Inner,
	stream::{
		serialize_document,
		to_string,
		Options,
		Stream,
		INDENT,
	},
	value::{
		Value,
		ValueDefault,
		ValueString,
	},
};
