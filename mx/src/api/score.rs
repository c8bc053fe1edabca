use crate::{
	api::{
		LayoutData,
		PartData,
	},
	core::{
		values::{
			GroupBarlineValue,
			GroupSymbolValue,
		},
		DocumentChoice,
	},
};
use chrono::NaiveDate;

/// MusicXML version written to (or read from) the root's `version` attribute
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MusicXmlVersion {
	/// No `version` attribute
	#[default]
	Unspecified,
	/// MusicXML 3.0
	ThreePointZero,
}

impl MusicXmlVersion {
	/// Attribute text; `None` omits the attribute
	pub fn as_str(self) -> Option<&'static str> {
		match self {
			Self::Unspecified => None,
			Self::ThreePointZero => Some("3.0"),
		}
	}

	/// Version of an attribute value; anything but 3.0 is unspecified
	pub fn parse(text: &str) -> Self {
		match text.trim() {
			"3.0" | "3" => Self::ThreePointZero,
			_ => Self::Unspecified,
		}
	}
}

/// Whether the encoding supports some element, attribute or value
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SupportedItem {
	/// Element the support applies to
	pub element_name: String,
	/// Attribute of that element, or empty
	pub attribute_name: String,
	/// `yes` or `no`
	pub is_supported: bool,
	/// Restricts the statement to one attribute value, or empty
	pub specific_value: String,
}

/// Contents of `<encoding>` in the identification header
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodingData {
	/// First `<encoder>`
	pub encoder: String,
	/// `<encoding-date>`
	pub encoding_date: Option<NaiveDate>,
	/// Every `<software>` in order
	pub software: Vec<String>,
	/// `<encoding-description>`
	pub encoding_description: String,
	/// Every `<supports>` in order
	pub supported_items: Vec<SupportedItem>,
}

impl EncodingData {
	/// No `<encoding>` element is written when true
	pub fn is_empty(&self) -> bool {
		self.encoder.is_empty()
			&& self.encoding_date.is_none()
			&& self.software.is_empty()
			&& self.encoding_description.is_empty()
			&& self.supported_items.is_empty()
	}
}

/// Text placed on a page (title, composer, ...), written as `<credit>`
#[derive(Clone, Debug, PartialEq)]
pub struct PageTextData {
	/// 1-based page
	pub page_number: u32,
	/// Words of the `<credit-words>`
	pub text: String,
	/// Credit type (`title`, `composer`, ...), empty if unknown
	pub description: String,
	/// Horizontal position in tenths
	pub default_x: Option<f64>,
	/// Vertical position in tenths
	pub default_y: Option<f64>,
}

impl Default for PageTextData {
	fn default() -> Self {
		Self {
			page_number: 1,
			text: String::new(),
			description: String::new(),
			default_x: None,
			default_y: None,
		}
	}
}

impl PageTextData {
	/// Text on the first page without a position
	pub fn new(text: &str, description: &str) -> Self {
		Self {
			text: text.to_owned(),
			description: description.to_owned(),
			..Self::default()
		}
	}
}

/// Bracket or brace around consecutive parts (indices into `ScoreData::parts`, inclusive)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartGroupData {
	/// First part in the group
	pub first_part_index: usize,
	/// Last part in the group
	pub last_part_index: usize,
	/// `<group-name>`
	pub name: String,
	/// `<group-abbreviation>`
	pub abbreviation: String,
	/// Bracket, brace, ...
	pub symbol: Option<GroupSymbolValue>,
	/// Whether barlines run through the group
	pub barline: Option<GroupBarlineValue>,
}

/// Simplified view of a complete score
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreData {
	/// Root `version` attribute
	pub music_xml_version: MusicXmlVersion,
	/// Root layout used when writing
	pub music_xml_type: DocumentChoice,
	/// `<work-title>`
	pub work_title: String,
	/// `<work-number>`
	pub work_number: String,
	/// `<movement-title>`
	pub movement_title: String,
	/// `<movement-number>`
	pub movement_number: String,
	/// Creator of type `composer`, or the first untyped creator
	pub composer: String,
	/// Creator of type `lyricist`
	pub lyricist: String,
	/// Creator of type `arranger`
	pub arranger: String,
	/// Creator of type `publisher`
	pub publisher: String,
	/// First `<rights>`
	pub copyright: String,
	/// Encoding header
	pub encoding: EncodingData,
	/// Credits in document order
	pub page_text_items: Vec<PageTextData>,
	/// Contents of `<defaults>`
	pub layout: LayoutData,
	/// Parts in part-list order
	pub parts: Vec<PartData>,
	/// Part groups by start position
	pub part_groups: Vec<PartGroupData>,
	/// Resolution of every tick value in the score, written as `<divisions>`
	pub ticks_per_quarter: u32,
}

/// Ticks per quarter of a new score
pub const DEFAULT_TICKS_PER_QUARTER: u32 = 1;

impl Default for ScoreData {
	fn default() -> Self {
		Self {
			music_xml_version: MusicXmlVersion::default(),
			music_xml_type: DocumentChoice::default(),
			work_title: String::new(),
			work_number: String::new(),
			movement_title: String::new(),
			movement_number: String::new(),
			composer: String::new(),
			lyricist: String::new(),
			arranger: String::new(),
			publisher: String::new(),
			copyright: String::new(),
			encoding: EncodingData::default(),
			page_text_items: Vec::new(),
			layout: LayoutData::default(),
			parts: Vec::new(),
			part_groups: Vec::new(),
			ticks_per_quarter: DEFAULT_TICKS_PER_QUARTER,
		}
	}
}

impl ScoreData {
	/// Measures of the longest part
	pub fn num_measures(&self) -> usize {
		self.parts.iter().map(|part| part.measures.len()).max().unwrap_or(0)
	}

	/// Staves of all parts together
	pub fn num_staves_per_system(&self) -> u32 {
		self.parts.iter().map(PartData::num_staves).sum()
	}

	/// Order notes and directions of every measure by tick position
	///
	/// Events at the same tick keep their relative order.
	pub fn sort(&mut self) {
		for part in &mut self.parts {
			for measure in &mut part.measures {
				measure.sort();
			}
		}
	}

	/// Part with the given id
	pub fn find_part(&self, id: &str) -> Option<&PartData> {
		self.parts.iter().find(|part| part.id == id)
	}
}
