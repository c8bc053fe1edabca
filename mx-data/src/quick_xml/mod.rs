//! Adaptor for [`quick-xml`](https://crates.io/crates/quick-xml)
//!
//! Builds the generic [`XElement`](crate::parser::XElement) tree the parser works on.  The
//! serializer uses quick-xml's escaping.

mod parser;

pub use self::parser::read_tree;
