//! Measure properties: the `<attributes>` element with divisions, keys, times, staves and clefs

use crate::core::values::{
	self,
	AccidentalValue,
	ClefSign,
	Color,
	FifthsValue,
	FontSize,
	FontStyle,
	FontWeight,
	LeftCenterRight,
	NonNegativeInteger,
	PositiveDivisionsValue,
	Semitones,
	StaffLine,
	StaffNumber,
	StepEnum,
	TenthsValue,
	TimeSymbol,
	Valign,
	XsString,
	YesNo,
};
use mx_data::{
	Attributes,
	Element,
	Inner,
};

value_element! {
	/// Divisions per quarter note for all durations that follow
	Divisions(PositiveDivisionsValue)
}

value_element!(Cancel(FifthsValue));
value_element!(Fifths(FifthsValue));
value_element!(Mode(values::Mode));
value_element!(KeyStep(StepEnum));
value_element!(KeyAlter(Semitones));
value_element!(KeyAccidental(AccidentalValue));

/// Key signature on the circle of fifths
#[derive(Inner, Clone, Debug, Default, PartialEq)]
pub struct TraditionalKey {
	pub cancel: Option<Cancel>,
	pub fifths: Fifths,
	pub mode: Option<Mode>,
}

/// One altered step of a non-traditional key signature
#[derive(Inner, Clone, Debug, Default, PartialEq)]
pub struct NonTraditionalKey {
	pub key_step: KeyStep,
	pub key_alter: KeyAlter,
	pub key_accidental: Option<KeyAccidental>,
}

#[derive(Inner, Clone, Debug, PartialEq)]
pub enum KeyChoice {
	Traditional(TraditionalKey),
	NonTraditional(Vec<NonTraditionalKey>),
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct KeyAttributes {
	pub number: Option<StaffNumber>,
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
}

/// Key signature; the default is C major without mode (`<fifths>0</fifths>`)
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Key {
	#[mx_data(attributes)]
	pub attributes: KeyAttributes,
	pub choice: KeyChoice,
}

impl Key {
	/// Traditional key signature
	pub fn traditional(fifths: FifthsValue, mode: Option<values::Mode>) -> Self {
		Self {
			attributes: KeyAttributes::default(),
			choice: KeyChoice::Traditional(TraditionalKey {
				cancel: None,
				fifths: Fifths::new(fifths),
				mode: mode.map(Mode::new),
			}),
		}
	}
}

value_element!(Beats(XsString));
value_element!(BeatType(XsString));
value_element!(SenzaMisura(XsString));

#[derive(Inner, Clone, Debug, Default, PartialEq)]
pub struct TimeSignature {
	pub beats: Beats,
	pub beat_type: BeatType,
}

impl TimeSignature {
	/// Beats over beat type, like `3/4`
	pub fn new(beats: u32, beat_type: u32) -> Self {
		Self {
			beats: Beats::new(XsString::new(beats.to_string())),
			beat_type: BeatType::new(XsString::new(beat_type.to_string())),
		}
	}
}

#[derive(Inner, Clone, Debug, PartialEq)]
pub enum TimeChoice {
	Signature(Vec<TimeSignature>),
	SenzaMisura(SenzaMisura),
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct TimeAttributes {
	pub number: Option<StaffNumber>,
	pub symbol: Option<TimeSymbol>,
	pub default_x: Option<TenthsValue>,
	pub default_y: Option<TenthsValue>,
	pub relative_x: Option<TenthsValue>,
	pub relative_y: Option<TenthsValue>,
	pub font_family: Option<String>,
	pub font_style: Option<FontStyle>,
	pub font_size: Option<FontSize>,
	pub font_weight: Option<FontWeight>,
	pub color: Option<Color>,
	pub halign: Option<LeftCenterRight>,
	pub valign: Option<Valign>,
	pub print_object: Option<YesNo>,
}

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Time {
	#[mx_data(attributes)]
	pub attributes: TimeAttributes,
	pub choice: TimeChoice,
}

impl Time {
	/// Single time signature
	pub fn signature(beats: u32, beat_type: u32) -> Self {
		Self {
			attributes: TimeAttributes::default(),
			choice: TimeChoice::Signature(vec![TimeSignature::new(beats, beat_type)]),
		}
	}
}

value_element!(Staves(NonNegativeInteger));
value_element!(Sign(ClefSign));
value_element!(Line(StaffLine));
value_element!(ClefOctaveChange(i32));

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct ClefAttributes {
	pub number: Option<StaffNumber>,
	pub additional: Option<YesNo>,
	pub after_barline: Option<YesNo>,
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
}

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Clef {
	#[mx_data(attributes)]
	pub attributes: ClefAttributes,
	pub sign: Sign,
	pub line: Option<Line>,
	pub clef_octave_change: Option<ClefOctaveChange>,
}

value_element!(Diatonic(i32));
value_element!(Chromatic(Semitones));
value_element!(OctaveChange(i32));
empty_element!(Double);

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct TransposeAttributes {
	pub number: Option<StaffNumber>,
}

/// Transposition from written to sounding pitch
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Transpose {
	#[mx_data(attributes)]
	pub attributes: TransposeAttributes,
	pub diatonic: Option<Diatonic>,
	pub chromatic: Chromatic,
	pub octave_change: Option<OctaveChange>,
	pub double: Option<Double>,
}

/// Changes of musical properties (`<attributes>`), usually at the start of a measure
#[derive(Element, Clone, Debug, Default, PartialEq)]
#[mx_data(tag = "attributes")]
pub struct Properties {
	pub divisions: Option<Divisions>,
	pub keys: Vec<Key>,
	pub times: Vec<Time>,
	pub staves: Option<Staves>,
	pub clefs: Vec<Clef>,
	pub transposes: Vec<Transpose>,
}
