//! MusicXML object model: value types, elements and the document root

pub mod elements;
pub mod values;

mod document;

pub use self::document::{
	Document,
	DocumentChoice,
	PARTWISE_DOCTYPE,
	TIMEWISE_DOCTYPE,
};
