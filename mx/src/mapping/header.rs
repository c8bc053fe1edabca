//! Score header: work, identification, encoding, credits and the part list

use crate::{
	api::{
		EncodingData,
		MusicXmlVersion,
		PageTextData,
		PartData,
		PartGroupData,
		ScoreData,
		SupportedItem,
	},
	core::{
		elements::{
			Credit,
			CreditAttributes,
			CreditChoice,
			CreditType,
			CreditWords,
			Creator,
			Defaults,
			DocumentAttributes,
			Encoder,
			Encoding,
			EncodingChoice,
			EncodingDate,
			EncodingDescription,
			GroupAbbreviation,
			GroupBarline,
			GroupName,
			GroupSymbol,
			Identification,
			MovementNumber,
			MovementTitle,
			PartAbbreviation,
			PartGroup,
			PartGroupAttributes,
			PartList,
			PartListItem,
			PartName,
			Rights,
			ScoreHeader,
			ScorePart,
			ScorePartAttributes,
			Software,
			Supports,
			SupportsAttributes,
			TextFormattingAttributes,
			TypedTextAttributes,
			Work,
			WorkNumber,
			WorkTitle,
		},
		values::{
			PositiveInteger,
			StartStop,
			TenthsValue,
			XsDate,
			XsId,
			XsNmToken,
			XsString,
			XsToken,
			YesNo,
		},
	},
	mapping::{
		checked,
		layout::{
			read_layout,
			write_layout,
		},
	},
};

const COMPOSER: &str = "composer";
const LYRICIST: &str = "lyricist";
const ARRANGER: &str = "arranger";
const PUBLISHER: &str = "publisher";

fn non_empty(text: &str) -> Option<XsString> {
	if text.is_empty() {
		None
	} else {
		Some(XsString::from(text))
	}
}

fn typed_text(text: &str, r#type: Option<&str>) -> Option<(TypedTextAttributes, XsString)> {
	let attributes = TypedTextAttributes {
		r#type: r#type.map(XsToken::new),
	};
	Some((attributes, non_empty(text)?))
}

fn write_encoding(data: &EncodingData) -> Option<Encoding> {
	if data.is_empty() {
		return None;
	}
	let mut choices = Vec::new();
	if let Some((attributes, value)) = typed_text(&data.encoder, None) {
		choices.push(EncodingChoice::Encoder(Encoder { attributes, value }));
	}
	if let Some(date) = data.encoding_date {
		choices.push(EncodingChoice::EncodingDate(EncodingDate::new(XsDate(date))));
	}
	for software in &data.software {
		choices.push(EncodingChoice::Software(Software::new(XsString::from(software.as_str()))));
	}
	if let Some(description) = non_empty(&data.encoding_description) {
		choices.push(EncodingChoice::EncodingDescription(EncodingDescription::new(description)));
	}
	for item in &data.supported_items {
		let Some(element) = checked("supports element", XsNmToken::new(&item.element_name)) else {
			continue;
		};
		let attribute = if item.attribute_name.is_empty() {
			None
		} else {
			checked("supports attribute", XsNmToken::new(&item.attribute_name))
		};
		let value = if item.specific_value.is_empty() {
			None
		} else {
			Some(XsToken::new(&item.specific_value))
		};
		choices.push(EncodingChoice::Supports(Supports {
			attributes: SupportsAttributes {
				r#type: if item.is_supported { YesNo::Yes } else { YesNo::No },
				element,
				attribute,
				value,
			},
		}));
	}
	Some(Encoding { choices })
}

fn write_identification(score: &ScoreData) -> Option<Identification> {
	let creators = [
		(COMPOSER, &score.composer),
		(LYRICIST, &score.lyricist),
		(ARRANGER, &score.arranger),
		(PUBLISHER, &score.publisher),
	];
	let identification = Identification {
		creators: creators
			.iter()
			.filter_map(|&(r#type, text)| typed_text(text, Some(r#type)))
			.map(|(attributes, value)| Creator { attributes, value })
			.collect(),
		rights: typed_text(&score.copyright, None)
			.map(|(attributes, value)| Rights { attributes, value })
			.into_iter()
			.collect(),
		encoding: write_encoding(&score.encoding),
		source: None,
	};
	if identification == Identification::default() {
		None
	} else {
		Some(identification)
	}
}

fn write_credit(item: &PageTextData) -> Credit {
	let page = checked("credit page", PositiveInteger::new(item.page_number));
	let position = |what, value: Option<f64>| value.and_then(|value| checked(what, TenthsValue::from_f64(value)));
	let words = CreditWords {
		attributes: TextFormattingAttributes {
			default_x: position("credit default-x", item.default_x),
			default_y: position("credit default-y", item.default_y),
			..TextFormattingAttributes::default()
		},
		value: XsString::from(item.text.as_str()),
	};
	Credit {
		attributes: CreditAttributes { page },
		credit_types: non_empty(&item.description).map(CreditType::new).into_iter().collect(),
		choice: CreditChoice::Words(vec![words]),
	}
}

/// Checked part id, falling back to `P<position>`
pub(crate) fn part_id(part: &PartData, index: usize) -> XsId {
	checked("part id", XsId::new(&part.id)).unwrap_or_else(|| {
		let fallback = format!("P{}", index + 1);
		log::debug!("replacing part id {:?} with {:?}", part.id, fallback);
		XsId::new(&fallback).unwrap_or_default()
	})
}

fn write_score_part(part: &PartData, index: usize) -> ScorePart {
	ScorePart {
		attributes: ScorePartAttributes { id: part_id(part, index) },
		part_name: PartName::new(XsString::from(part.name.as_str())),
		part_abbreviation: non_empty(&part.abbreviation).map(PartAbbreviation::new),
		..ScorePart::default()
	}
}

fn group_marker(group: &PartGroupData, number: usize, r#type: StartStop) -> PartGroup {
	let mut marker = PartGroup {
		attributes: PartGroupAttributes {
			r#type,
			number: Some(XsToken::new(&number.to_string())),
		},
		..PartGroup::default()
	};
	if r#type == StartStop::Start {
		marker.group_name = non_empty(&group.name).map(GroupName::new);
		marker.group_abbreviation = non_empty(&group.abbreviation).map(GroupAbbreviation::new);
		marker.group_symbol = group.symbol.map(GroupSymbol::new);
		marker.group_barline = group.barline.map(GroupBarline::new);
	}
	marker
}

fn write_part_list(score: &ScoreData) -> PartList {
	let groups: Vec<(usize, &PartGroupData)> = score
		.part_groups
		.iter()
		.enumerate()
		.filter(|(_, group)| {
			let valid = group.first_part_index <= group.last_part_index && group.last_part_index < score.parts.len();
			if !valid {
				log::debug!("skipping part group {:?} outside of the part list", group.name);
			}
			valid
		})
		.map(|(index, group)| (index + 1, group))
		.collect();
	let mut items = Vec::new();
	for (index, part) in score.parts.iter().enumerate() {
		for &(number, group) in &groups {
			if group.first_part_index == index {
				items.push(PartListItem::PartGroup(group_marker(group, number, StartStop::Start)));
			}
		}
		items.push(PartListItem::ScorePart(write_score_part(part, index)));
		for &(number, group) in groups.iter().rev() {
			if group.last_part_index == index {
				items.push(PartListItem::PartGroup(group_marker(group, number, StartStop::Stop)));
			}
		}
	}

	let mut part_list = PartList::default();
	let mut items = items.into_iter();
	for item in items.by_ref() {
		match item {
			PartListItem::PartGroup(group) => part_list.groups_before.push(group),
			PartListItem::ScorePart(part) => {
				part_list.score_part = part;
				break;
			},
		}
	}
	part_list.items = items.collect();
	part_list
}

/// Root attributes and header of a score
pub fn write_header(score: &ScoreData) -> (DocumentAttributes, ScoreHeader) {
	let attributes = DocumentAttributes {
		version: score.music_xml_version.as_str().map(XsToken::new),
	};
	let work = Work {
		work_number: non_empty(&score.work_number).map(WorkNumber::new),
		work_title: non_empty(&score.work_title).map(WorkTitle::new),
	};
	let mut defaults = Defaults::default();
	write_layout(&score.layout, &mut defaults);
	let header = ScoreHeader {
		work: if work == Work::default() { None } else { Some(work) },
		movement_number: non_empty(&score.movement_number).map(MovementNumber::new),
		movement_title: non_empty(&score.movement_title).map(MovementTitle::new),
		identification: write_identification(score),
		defaults: if defaults == Defaults::default() { None } else { Some(defaults) },
		credits: score.page_text_items.iter().map(write_credit).collect(),
		part_list: write_part_list(score),
	};
	(attributes, header)
}

fn read_encoding(encoding: &Encoding) -> EncodingData {
	let mut data = EncodingData::default();
	for choice in &encoding.choices {
		match choice {
			EncodingChoice::Encoder(encoder) => {
				if data.encoder.is_empty() {
					data.encoder = encoder.value.0.clone();
				} else {
					log::debug!("skipping additional encoder {:?}", encoder.value.as_str());
				}
			},
			EncodingChoice::EncodingDate(date) => data.encoding_date = Some(date.value.0),
			EncodingChoice::Software(software) => data.software.push(software.value.0.clone()),
			EncodingChoice::EncodingDescription(description) => data.encoding_description = description.value.0.clone(),
			EncodingChoice::Supports(supports) => {
				let attributes = &supports.attributes;
				data.supported_items.push(SupportedItem {
					element_name: attributes.element.as_str().to_owned(),
					attribute_name: attributes.attribute.as_ref().map(|name| name.as_str().to_owned()).unwrap_or_default(),
					is_supported: attributes.r#type == YesNo::Yes,
					specific_value: attributes.value.as_ref().map(|value| value.as_str().to_owned()).unwrap_or_default(),
				});
			},
		}
	}
	data
}

fn read_identification(identification: &Identification, score: &mut ScoreData) {
	for creator in &identification.creators {
		let slot = match creator.attributes.r#type.as_ref().map(XsToken::as_str) {
			Some(COMPOSER) | None => &mut score.composer,
			Some(LYRICIST) => &mut score.lyricist,
			Some(ARRANGER) => &mut score.arranger,
			Some(PUBLISHER) => &mut score.publisher,
			Some(other) => {
				log::debug!("skipping creator of type {:?}", other);
				continue;
			},
		};
		if slot.is_empty() {
			*slot = creator.value.0.clone();
		} else {
			log::debug!("skipping additional creator {:?}", creator.value.as_str());
		}
	}
	if let Some(rights) = identification.rights.first() {
		score.copyright = rights.value.0.clone();
	}
	if let Some(encoding) = &identification.encoding {
		score.encoding = read_encoding(encoding);
	}
}

fn read_credit(credit: &Credit, items: &mut Vec<PageTextData>) {
	let words = match &credit.choice {
		CreditChoice::Words(words) => words,
		CreditChoice::Image(image) => {
			log::debug!("skipping credit image {:?}", image.attributes.source);
			return;
		},
	};
	let page_number = credit.attributes.page.map_or(1, |page| page.value());
	let description = credit.credit_types.first().map(|credit_type| credit_type.value.0.clone()).unwrap_or_default();
	for words in words {
		items.push(PageTextData {
			page_number,
			text: words.value.0.clone(),
			description: description.clone(),
			default_x: words.attributes.default_x.map(|x| x.to_f64()),
			default_y: words.attributes.default_y.map(|y| y.to_f64()),
		});
	}
}

/// Parts (without measures) and part groups declared in the part list
fn read_part_list(part_list: &PartList, score: &mut ScoreData) {
	let items = part_list
		.groups_before
		.iter()
		.cloned()
		.map(PartListItem::PartGroup)
		.chain(std::iter::once(PartListItem::ScorePart(part_list.score_part.clone())))
		.chain(part_list.items.iter().cloned());
	// open groups by number, pointing into `score.part_groups`
	let mut open: Vec<(Option<String>, usize)> = Vec::new();
	for item in items {
		match item {
			// an empty id is what a missing or invalid `id` attribute leaves behind
			PartListItem::ScorePart(part) if part.attributes.id.as_str().is_empty() => {
				log::debug!("skipping score-part {:?} without id", part.part_name.value.0);
			},
			PartListItem::ScorePart(part) => score.parts.push(PartData {
				id: part.attributes.id.as_str().to_owned(),
				name: part.part_name.value.0.clone(),
				abbreviation: part.part_abbreviation.map(|abbreviation| abbreviation.value.0).unwrap_or_default(),
				measures: Vec::new(),
			}),
			PartListItem::PartGroup(group) => {
				let number = group.attributes.number.as_ref().map(|number| number.as_str().to_owned());
				match group.attributes.r#type {
					StartStop::Start => {
						open.push((number, score.part_groups.len()));
						score.part_groups.push(PartGroupData {
							first_part_index: score.parts.len(),
							last_part_index: score.parts.len(),
							name: group.group_name.map(|name| name.value.0).unwrap_or_default(),
							abbreviation: group.group_abbreviation.map(|abbreviation| abbreviation.value.0).unwrap_or_default(),
							symbol: group.group_symbol.map(|symbol| symbol.value),
							barline: group.group_barline.map(|barline| barline.value),
						});
					},
					StartStop::Stop => match open.iter().rposition(|(open_number, _)| *open_number == number) {
						Some(position) => {
							let (_, index) = open.remove(position);
							let group = &mut score.part_groups[index];
							group.last_part_index = score.parts.len().saturating_sub(1).max(group.first_part_index);
						},
						None => log::debug!("skipping stop of part group {:?} that was never started", number),
					},
				}
			},
		}
	}
	for (number, index) in open {
		log::debug!("closing part group {:?} at the end of the part list", number);
		score.part_groups[index].last_part_index = score.parts.len().saturating_sub(1);
	}
	score.part_groups.retain(|group| {
		let empty = group.first_part_index >= score.parts.len();
		if empty {
			log::debug!("skipping part group {:?} without parts", group.name);
		}
		!empty
	});
}

/// Read root attributes and header into `score`
///
/// Parts are added in part list order, without measures.
pub fn read_header(attributes: &DocumentAttributes, header: &ScoreHeader, score: &mut ScoreData) {
	score.music_xml_version = attributes
		.version
		.as_ref()
		.map_or(MusicXmlVersion::Unspecified, |version| MusicXmlVersion::parse(version.as_str()));
	if let Some(work) = &header.work {
		score.work_number = work.work_number.as_ref().map(|number| number.value.0.clone()).unwrap_or_default();
		score.work_title = work.work_title.as_ref().map(|title| title.value.0.clone()).unwrap_or_default();
	}
	score.movement_number = header.movement_number.as_ref().map(|number| number.value.0.clone()).unwrap_or_default();
	score.movement_title = header.movement_title.as_ref().map(|title| title.value.0.clone()).unwrap_or_default();
	if let Some(identification) = &header.identification {
		read_identification(identification, score);
	}
	if let Some(defaults) = &header.defaults {
		score.layout = read_layout(defaults);
	}
	for credit in &header.credits {
		read_credit(credit, &mut score.page_text_items);
	}
	read_part_list(&header.part_list, score);
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::core::values::GroupSymbolValue;
	use chrono::NaiveDate;
	use mx_data::serializer::to_string;
	use pretty_assertions::assert_eq;

	fn read_back(score: &ScoreData) -> ScoreData {
		let (attributes, header) = write_header(score);
		let mut read = ScoreData::default();
		read_header(&attributes, &header, &mut read);
		read
	}

	#[test]
	fn identification() {
		let score = ScoreData {
			music_xml_version: MusicXmlVersion::ThreePointZero,
			work_title: "Simple Measures".into(),
			movement_number: "1".into(),
			composer: "Matthew James Briggs".into(),
			lyricist: "Nobody".into(),
			copyright: "public domain".into(),
			encoding: EncodingData {
				encoder: "mx".into(),
				encoding_date: NaiveDate::from_ymd_opt(2016, 5, 1),
				software: vec!["mx".into(), "Sibelius".into()],
				encoding_description: "test".into(),
				supported_items: vec![SupportedItem {
					element_name: "accidental".into(),
					attribute_name: String::new(),
					is_supported: true,
					specific_value: String::new(),
				}],
			},
			parts: vec![PartData::new("P1", "Flute")],
			..ScoreData::default()
		};
		assert_eq!(read_back(&score), score);

		let (_, header) = write_header(&score);
		let identification = header.identification.as_ref().unwrap();
		let expected = r#"<identification>
  <creator type="composer">Matthew James Briggs</creator>
  <creator type="lyricist">Nobody</creator>
  <rights>public domain</rights>
  <encoding>
    <encoder>mx</encoder>
    <encoding-date>2016-05-01</encoding-date>
    <software>mx</software>
    <software>Sibelius</software>
    <encoding-description>test</encoding-description>
    <supports type="yes" element="accidental"/>
  </encoding>
</identification>"#;
		assert_eq!(to_string(identification).unwrap(), expected);
	}

	#[test]
	fn empty_header() {
		let (attributes, header) = write_header(&ScoreData::default());
		assert_eq!(attributes.version, None);
		assert!(header.work.is_none());
		assert!(header.identification.is_none());
		assert!(header.defaults.is_none());
		assert!(header.credits.is_empty());
	}

	#[test]
	fn credits() {
		let score = ScoreData {
			page_text_items: vec![
				PageTextData {
					default_x: Some(600.0),
					default_y: Some(1500.0),
					..PageTextData::new("Simple Measures", "title")
				},
				PageTextData::new("Matthew James Briggs", "composer"),
			],
			parts: vec![PartData::new("P1", "One")],
			..ScoreData::default()
		};
		assert_eq!(read_back(&score), score);
		let (_, header) = write_header(&score);
		assert_eq!(
			to_string(&header.credits[1]).unwrap(),
			"<credit page=\"1\">\n  <credit-type>composer</credit-type>\n  <credit-words>Matthew James Briggs</credit-words>\n</credit>"
		);
	}

	#[test]
	fn part_groups() {
		let score = ScoreData {
			parts: vec![
				PartData::new("P1", "Violin I"),
				PartData::new("P2", "Violin II"),
				PartData::new("P3", "Viola"),
				PartData::new("P4", "Bass"),
			],
			part_groups: vec![
				PartGroupData {
					first_part_index: 0,
					last_part_index: 2,
					name: "Strings".into(),
					symbol: Some(GroupSymbolValue::Bracket),
					..PartGroupData::default()
				},
				PartGroupData {
					first_part_index: 0,
					last_part_index: 1,
					symbol: Some(GroupSymbolValue::Brace),
					..PartGroupData::default()
				},
			],
			..ScoreData::default()
		};
		let (_, header) = write_header(&score);
		let part_list = &header.part_list;
		assert_eq!(part_list.groups_before.len(), 2);
		assert_eq!(part_list.score_part.attributes.id.as_str(), "P1");
		let ids: Vec<_> = part_list.score_parts().map(|part| part.attributes.id.as_str()).collect();
		assert_eq!(ids, ["P1", "P2", "P3", "P4"]);
		assert_eq!(read_back(&score), score);
	}

	#[test]
	fn invalid_part_id_is_replaced() {
		let score = ScoreData {
			parts: vec![PartData::new("P1", "One"), PartData::new("2 bad", "Two")],
			..ScoreData::default()
		};
		let (_, header) = write_header(&score);
		let ids: Vec<_> = header.part_list.score_parts().map(|part| part.attributes.id.as_str()).collect();
		assert_eq!(ids, ["P1", "P2"]);
	}

	#[test]
	fn score_part_without_id_is_skipped() {
		let (attributes, header) = write_header(&ScoreData::default());
		assert_eq!(header.part_list.score_part.attributes.id.as_str(), "");
		let mut read = ScoreData::default();
		read_header(&attributes, &header, &mut read);
		assert_eq!(read, ScoreData::default());
	}

	#[test]
	fn unterminated_group() {
		let mut header = ScoreHeader::default();
		header.part_list.groups_before.push(PartGroup {
			attributes: PartGroupAttributes {
				r#type: StartStop::Start,
				number: Some(XsToken::new("1")),
			},
			..PartGroup::default()
		});
		header.part_list.score_part.attributes.id = XsId::new("P1").unwrap();
		header.part_list.items.push(PartListItem::ScorePart(ScorePart {
			attributes: ScorePartAttributes { id: XsId::new("P2").unwrap() },
			..ScorePart::default()
		}));
		let mut score = ScoreData::default();
		read_header(&DocumentAttributes::default(), &header, &mut score);
		assert_eq!(score.parts.len(), 2);
		assert_eq!(score.part_groups.len(), 1);
		assert_eq!((score.part_groups[0].first_part_index, score.part_groups[0].last_part_index), (0, 1));
	}
}
