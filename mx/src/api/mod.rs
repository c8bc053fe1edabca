//! Simplified score model
//!
//! Plain data structs describing what a score contains without the schema's nesting.  Convert
//! from and to documents with [`crate::mapping`].

mod layout;
mod part;
mod score;

pub use self::{
	layout::{
		AppearanceData,
		AppearanceType,
		LayoutData,
		PageLayoutData,
		PageMarginsData,
		UNSPECIFIED,
	},
	part::{
		BarlineData,
		ClefData,
		DirectionData,
		KeyData,
		MeasureData,
		NoteData,
		PartData,
		PitchData,
		TempoData,
		TimeSignatureData,
	},
	score::{
		EncodingData,
		MusicXmlVersion,
		PageTextData,
		PartGroupData,
		ScoreData,
		SupportedItem,
		DEFAULT_TICKS_PER_QUARTER,
	},
};
