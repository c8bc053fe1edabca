//! Document roots, the score header (work, identification, credits, part list) and measures

use crate::core::{
	elements::{
		Backup,
		Barline,
		ColorAttributes,
		Defaults,
		Direction,
		Forward,
		LayoutGroup,
		Note,
		PositionAttributes,
		PrintObjectAttributes,
		PrintStyleAlignAttributes,
		Properties,
		Sound,
		TextFormattingAttributes,
	},
	values::{
		AccidentalValue,
		Color,
		DecimalValue,
		FontSize,
		FontStyle,
		FontWeight,
		GroupBarlineValue,
		GroupSymbolValue,
		LeftCenterRight,
		MidiChannel,
		Midi128,
		PositiveInteger,
		StartStop,
		TenthsValue,
		Valign,
		XsDate,
		XsId,
		XsIdRef,
		XsNmToken,
		XsString,
		XsToken,
		YesNo,
	},
};
use mx_data::{
	Attributes,
	Element,
	Inner,
};

value_element!(WorkNumber(XsString));
value_element!(WorkTitle(XsString));

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Work {
	pub work_number: Option<WorkNumber>,
	pub work_title: Option<WorkTitle>,
}

value_element!(MovementNumber(XsString));
value_element!(MovementTitle(XsString));

/// Optional `type` token of creators, rights and encoders
#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct TypedTextAttributes {
	pub r#type: Option<XsToken>,
}

value_element! {
	/// Composer, lyricist, arranger, ... distinguished by the `type` attribute
	Creator(XsString) with TypedTextAttributes
}
value_element!(Rights(XsString) with TypedTextAttributes);
value_element!(EncodingDate(XsDate));
value_element!(Encoder(XsString) with TypedTextAttributes);
value_element!(Software(XsString));
value_element!(EncodingDescription(XsString));

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct SupportsAttributes {
	pub r#type: YesNo,
	pub element: XsNmToken,
	pub attribute: Option<XsNmToken>,
	pub value: Option<XsToken>,
}

empty_element! {
	/// Whether the encoding supports an element (or one of its attributes)
	Supports with SupportsAttributes
}

#[derive(Inner, Clone, Debug, PartialEq)]
pub enum EncodingChoice {
	EncodingDate(EncodingDate),
	Encoder(Encoder),
	Software(Software),
	EncodingDescription(EncodingDescription),
	Supports(Supports),
}

/// Encoding metadata in any order
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Encoding {
	pub choices: Vec<EncodingChoice>,
}

value_element!(Source(XsString));

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Identification {
	pub creators: Vec<Creator>,
	pub rights: Vec<Rights>,
	pub encoding: Option<Encoding>,
	pub source: Option<Source>,
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct CreditAttributes {
	pub page: Option<PositiveInteger>,
}

value_element!(CreditType(XsString));
value_element!(CreditWords(XsString) with TextFormattingAttributes);

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct CreditImageAttributes {
	pub source: String,
	pub r#type: XsToken,
	pub height: Option<TenthsValue>,
	pub width: Option<TenthsValue>,
	pub default_x: Option<TenthsValue>,
	pub default_y: Option<TenthsValue>,
	pub relative_x: Option<TenthsValue>,
	pub relative_y: Option<TenthsValue>,
	pub halign: Option<LeftCenterRight>,
	pub valign: Option<Valign>,
}

empty_element!(CreditImage with CreditImageAttributes);

#[derive(Inner, Clone, Debug, PartialEq)]
pub enum CreditChoice {
	Words(Vec<CreditWords>),
	Image(CreditImage),
}

/// Text or image on a specific page, outside of the music
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Credit {
	#[mx_data(attributes)]
	pub attributes: CreditAttributes,
	pub credit_types: Vec<CreditType>,
	pub choice: CreditChoice,
}

value_element!(DisplayText(XsString) with TextFormattingAttributes);
value_element!(AccidentalText(AccidentalValue) with TextFormattingAttributes);

#[derive(Inner, Clone, Debug, PartialEq)]
pub enum DisplayTextOrAccidentalText {
	DisplayText(DisplayText),
	AccidentalText(AccidentalText),
}

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct GroupNameDisplay {
	#[mx_data(attributes)]
	pub attributes: PrintObjectAttributes,
	pub texts: Vec<DisplayTextOrAccidentalText>,
}

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct GroupAbbreviationDisplay {
	#[mx_data(attributes)]
	pub attributes: PrintObjectAttributes,
	pub texts: Vec<DisplayTextOrAccidentalText>,
}

value_element!(GroupName(XsString) with PrintStyleAlignAttributes);
value_element!(GroupAbbreviation(XsString) with PrintStyleAlignAttributes);
value_element!(GroupSymbol(GroupSymbolValue) with PositionAttributes);
value_element!(GroupBarline(GroupBarlineValue) with ColorAttributes);
empty_element!(GroupTime);

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct PartGroupAttributes {
	pub r#type: StartStop,
	pub number: Option<XsToken>,
}

/// Start or stop marker of a bracketed group of parts
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct PartGroup {
	#[mx_data(attributes)]
	pub attributes: PartGroupAttributes,
	pub group_name: Option<GroupName>,
	pub group_name_display: Option<GroupNameDisplay>,
	pub group_abbreviation: Option<GroupAbbreviation>,
	pub group_abbreviation_display: Option<GroupAbbreviationDisplay>,
	pub group_symbol: Option<GroupSymbol>,
	pub group_barline: Option<GroupBarline>,
	pub group_time: Option<GroupTime>,
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct PartNameAttributes {
	pub default_x: Option<TenthsValue>,
	pub default_y: Option<TenthsValue>,
	pub relative_x: Option<TenthsValue>,
	pub relative_y: Option<TenthsValue>,
	pub font_family: Option<String>,
	pub font_style: Option<FontStyle>,
	pub font_size: Option<FontSize>,
	pub font_weight: Option<FontWeight>,
	pub color: Option<Color>,
	pub print_object: Option<YesNo>,
	pub justify: Option<LeftCenterRight>,
}

value_element!(PartName(XsString) with PartNameAttributes);
value_element!(PartAbbreviation(XsString) with PartNameAttributes);
value_element!(Group(XsString));
value_element!(InstrumentName(XsString));
value_element!(InstrumentAbbreviation(XsString));
value_element!(InstrumentSound(XsString));

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct ScoreInstrumentAttributes {
	pub id: XsId,
}

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct ScoreInstrument {
	#[mx_data(attributes)]
	pub attributes: ScoreInstrumentAttributes,
	pub instrument_name: InstrumentName,
	pub instrument_abbreviation: Option<InstrumentAbbreviation>,
	pub instrument_sound: Option<InstrumentSound>,
}

value_element! {
	#[mx_data(tag = "midi-channel")]
	MidiChannelElement(MidiChannel)
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct MidiInstrumentAttributes {
	pub id: XsIdRef,
}

value_element!(MidiName(XsString));
value_element!(MidiProgram(Midi128));
value_element!(Volume(DecimalValue));
value_element!(Pan(DecimalValue));

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct MidiInstrument {
	#[mx_data(attributes)]
	pub attributes: MidiInstrumentAttributes,
	pub midi_channel: Option<MidiChannelElement>,
	pub midi_name: Option<MidiName>,
	pub midi_program: Option<MidiProgram>,
	pub volume: Option<Volume>,
	pub pan: Option<Pan>,
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct ScorePartAttributes {
	pub id: XsId,
}

/// Declaration of one part: name, abbreviation and instruments
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct ScorePart {
	#[mx_data(attributes)]
	pub attributes: ScorePartAttributes,
	pub identification: Option<Identification>,
	pub part_name: PartName,
	pub part_abbreviation: Option<PartAbbreviation>,
	pub groups: Vec<Group>,
	pub score_instruments: Vec<ScoreInstrument>,
	pub midi_instruments: Vec<MidiInstrument>,
}

#[derive(Inner, Clone, Debug, PartialEq)]
pub enum PartListItem {
	PartGroup(PartGroup),
	ScorePart(ScorePart),
}

/// Part declarations with group markers; at least one `<score-part>`
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct PartList {
	pub groups_before: Vec<PartGroup>,
	pub score_part: ScorePart,
	pub items: Vec<PartListItem>,
}

impl PartList {
	/// All score parts in document order
	pub fn score_parts(&self) -> impl Iterator<Item = &ScorePart> + '_ {
		std::iter::once(&self.score_part).chain(self.items.iter().filter_map(|item| match item {
			PartListItem::ScorePart(part) => Some(part),
			PartListItem::PartGroup(_) => None,
		}))
	}
}

/// Everything in front of the music
#[derive(Inner, Clone, Debug, Default, PartialEq)]
pub struct ScoreHeader {
	pub work: Option<Work>,
	pub movement_number: Option<MovementNumber>,
	pub movement_title: Option<MovementTitle>,
	pub identification: Option<Identification>,
	pub defaults: Option<Defaults>,
	pub credits: Vec<Credit>,
	pub part_list: PartList,
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct PrintAttributes {
	pub staff_spacing: Option<TenthsValue>,
	pub new_system: Option<YesNo>,
	pub new_page: Option<YesNo>,
	pub blank_page: Option<PositiveInteger>,
	pub page_number: Option<XsToken>,
}

/// Layout changes at the start of a measure
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Print {
	#[mx_data(attributes)]
	pub attributes: PrintAttributes,
	pub layout: LayoutGroup,
}

/// One entry of the music data in a measure
#[derive(Inner, Clone, Debug, PartialEq)]
pub enum MusicDataChoice {
	Note(Note),
	Backup(Backup),
	Forward(Forward),
	Direction(Direction),
	Properties(Properties),
	Print(Print),
	Sound(Sound),
	Barline(Barline),
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct MeasureAttributes {
	pub number: XsToken,
	pub implicit: Option<YesNo>,
	pub non_controlling: Option<YesNo>,
	pub width: Option<TenthsValue>,
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct PartAttributes {
	pub id: XsIdRef,
}

/// Measure inside a part (partwise layout)
#[derive(Element, Clone, Debug, Default, PartialEq)]
#[mx_data(tag = "measure")]
pub struct PartwiseMeasure {
	#[mx_data(attributes)]
	pub attributes: MeasureAttributes,
	pub music_data: Vec<MusicDataChoice>,
}

/// Part containing measures (partwise layout)
#[derive(Element, Clone, Debug, Default, PartialEq)]
#[mx_data(tag = "part")]
pub struct PartwisePart {
	#[mx_data(attributes)]
	pub attributes: PartAttributes,
	pub measures: Vec<PartwiseMeasure>,
}

/// Part inside a measure (timewise layout)
#[derive(Element, Clone, Debug, Default, PartialEq)]
#[mx_data(tag = "part")]
pub struct TimewisePart {
	#[mx_data(attributes)]
	pub attributes: PartAttributes,
	pub music_data: Vec<MusicDataChoice>,
}

/// Measure containing parts (timewise layout)
#[derive(Element, Clone, Debug, Default, PartialEq)]
#[mx_data(tag = "measure")]
pub struct TimewiseMeasure {
	#[mx_data(attributes)]
	pub attributes: MeasureAttributes,
	pub parts: Vec<TimewisePart>,
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct DocumentAttributes {
	pub version: Option<XsToken>,
}

/// `<score-partwise>` document root
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct ScorePartwise {
	#[mx_data(attributes)]
	pub attributes: DocumentAttributes,
	pub header: ScoreHeader,
	pub parts: Vec<PartwisePart>,
}

/// `<score-timewise>` document root
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct ScoreTimewise {
	#[mx_data(attributes)]
	pub attributes: DocumentAttributes,
	pub header: ScoreHeader,
	pub measures: Vec<TimewiseMeasure>,
}
