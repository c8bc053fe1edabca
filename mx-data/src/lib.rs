#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]
//! Element framework for schema-driven XML documents.
//!
//! A schema vocabulary (like MusicXML) consists of many element types, each with its own
//! attributes, optional children, choice groups and ordering rules.  This crate provides the
//! uniform contract all of them implement and the machinery around it:
//!
//! - [`values`]: typed wrappers for schema primitives with a canonical lexical form, and macros to
//!   define enumerations and bounded numbers;
//! - [`serializer`]: `has_attributes`/`has_contents` queries and streaming functions, plus the
//!   indentation-aware [`serializer::Stream`] writer that collapses empty and text-only elements;
//! - [`parser`]: population of elements from a generic XML tree, consuming children in schema
//!   order and recording problems as structured [`diagnostics`] instead of aborting;
//! - [`quick_xml`]: builds the generic tree from text.
//!
//! If the `derive` feature is enabled the following traits can be derived:
//! - `Element`: `FixedElement`, `parser::Element` and `serializer::Element` for a struct with an
//!   optional attribute container field (`#[mx_data(attributes)]`) and either a text value field
//!   (`#[mx_data(value)]`) or child fields (anything implementing `Inner`);
//! - `Inner`: groups (structs of child fields) and choices (enums with one field per variant);
//! - `Attributes`: attribute containers (structs of `Option<V>` or mandatory `V` fields).

pub mod diagnostics;
pub mod errors;
pub mod parser;
pub mod quick_xml;
pub mod serializer;
mod traits;
pub mod values;

#[cfg(all(test, feature = "derive"))]
mod test_struct;

pub use self::{
	errors::Error,
	traits::{
		Attributes,
		Element,
		FixedElement,
		Inner,
	},
};

/// Result alias with our error type included
pub type Result<T> = std::result::Result<T, Error>;
