#![warn(missing_docs)]
//! MusicXML 3.0 documents in three layers.
//!
//! - [`core`]: the complete element tree of a MusicXML document.  Every element is a plain Rust
//!   type implementing the `mx_data` element contract, so documents serialize to text and parse
//!   back with diagnostics.  [`core::Document`] holds either a partwise or a timewise score.
//! - [`api`]: a simplified score model (parts, measures, notes, directions, layout) without the
//!   schema's nesting.
//! - [`mapping`]: conversion between the two, plus helpers to go straight from text to
//!   [`api::ScoreData`] and back.
//!
//! ```
//! use mx::api::{MeasureData, NoteData, PartData, PitchData, ScoreData};
//! use mx::core::values::{NoteTypeValue, StepEnum};
//!
//! let mut part = PartData::new("P1", "Flute");
//! part.measures.push(MeasureData {
//! 	number: "1".into(),
//! 	notes: vec![NoteData::pitched(0, PitchData { step: StepEnum::G, alter: 0, octave: 4 }, NoteTypeValue::Whole, 4)],
//! 	..MeasureData::default()
//! });
//! let score = ScoreData {
//! 	parts: vec![part],
//! 	..ScoreData::default()
//! };
//!
//! let text = mx::mapping::write_score(&score).unwrap();
//! assert!(text.contains("<step>G</step>"));
//! let (read, diagnostics) = mx::mapping::read_score(&text).unwrap();
//! assert!(diagnostics.is_empty());
//! assert_eq!(read, score);
//! ```

pub mod api;
pub mod core;
pub mod mapping;
