//! Conversion between [`ScoreData`] and [`Document`]
//!
//! Mapping never fails: values that can't be expressed on the other side are skipped and logged
//! with `log::debug!`.  Timewise documents are read through their partwise view.

pub mod header;
pub mod layout;
mod part;

use crate::{
	api::{
		PartData,
		ScoreData,
	},
	core::{
		elements::ScorePartwise,
		values::XsIdRef,
		Document,
		DocumentChoice,
	},
};
use mx_data::{
	diagnostics::Diagnostics,
	values::FormatError,
	Result,
};

use self::part::{
	first_divisions,
	read_part,
	write_part,
	TickScale,
};

/// Value or `None` (logging why)
pub(crate) fn checked<T>(what: &str, value: std::result::Result<T, FormatError>) -> Option<T> {
	match value {
		Ok(value) => Some(value),
		Err(e) => {
			log::debug!("skipping {}: {}", what, e);
			None
		},
	}
}

fn ticks_per_quarter(score: &ScoreData) -> u32 {
	if score.ticks_per_quarter == 0 {
		log::debug!("ticks per quarter is 0, using 1");
		1
	} else {
		score.ticks_per_quarter
	}
}

/// Build a document; the root layout follows `score.music_xml_type`
pub fn to_document(score: &ScoreData) -> Document {
	let (attributes, header) = header::write_header(score);
	let ticks_per_quarter = ticks_per_quarter(score);
	let parts = score
		.parts
		.iter()
		.enumerate()
		.map(|(index, part)| write_part(part, XsIdRef::from(&header::part_id(part, index)), ticks_per_quarter))
		.collect();
	let mut document = Document::Partwise(ScorePartwise { attributes, header, parts });
	if score.music_xml_type == DocumentChoice::Timewise {
		document.convert_contents();
	}
	document
}

fn read_partwise(score: &ScorePartwise, choice: DocumentChoice) -> ScoreData {
	let mut data = ScoreData {
		music_xml_type: choice,
		..ScoreData::default()
	};
	header::read_header(&score.attributes, &score.header, &mut data);
	if let Some(divisions) = first_divisions(&score.parts) {
		data.ticks_per_quarter = (divisions.round() as u32).max(1);
	}
	let mut scale = TickScale::new(data.ticks_per_quarter);
	for part in &score.parts {
		let id = part.attributes.id.as_str();
		let index = match data.parts.iter().position(|existing| existing.id == id) {
			Some(index) => index,
			None => {
				log::debug!("part {:?} is missing in the part list", id);
				data.parts.push(PartData::new(id, ""));
				data.parts.len() - 1
			},
		};
		read_part(part, &mut scale, &mut data.parts[index]);
	}
	data
}

/// Extract score data from a document
pub fn from_document(document: &Document) -> ScoreData {
	match document {
		Document::Partwise(score) => read_partwise(score, DocumentChoice::Partwise),
		Document::Timewise(_) => read_partwise(&document.clone().into_partwise(), DocumentChoice::Timewise),
	}
}

/// Serialize score data as MusicXML text
pub fn write_score(score: &ScoreData) -> Result<String> {
	to_document(score).to_xml_string()
}

/// Parse MusicXML text into score data
///
/// Schema problems don't prevent reading; they are returned next to the data.
pub fn read_score(text: &str) -> Result<(ScoreData, Diagnostics)> {
	let (document, diagnostics) = Document::from_xml_str(text)?;
	Ok((from_document(&document), diagnostics))
}
