//! MusicXML value types
//!
//! Decimal, integer and enumeration types of the MusicXML 3.0 schema, built on the generator
//! macros of `mx-data`.  The schema primitives (`xs:string`, `xs:token`, IDs, dates) are
//! re-exported from `mx_data::values`.

use mx_data::values::FormatError;
use std::{
	fmt,
	str::FromStr,
};

pub use mx_data::values::{
	Decimal,
	XsDate,
	XsId,
	XsIdRef,
	XsNmToken,
	XsString,
	XsToken,
};

mx_data::decimal_value! {
	/// Any decimal
	pub struct DecimalValue, default 0;
}

mx_data::decimal_value! {
	/// Distance in tenths of interline space
	pub struct TenthsValue, default 0;
}

mx_data::decimal_value! {
	/// Absolute length in millimeters
	pub struct MillimetersValue, default 0;
}

mx_data::decimal_value! {
	/// Decimal greater than zero
	pub struct PositiveDecimal where value > 0, default 1;
}

mx_data::decimal_value! {
	/// Decimal of at least zero
	pub struct NonNegativeDecimal where value >= 0, default 0;
}

mx_data::decimal_value! {
	/// Duration in divisions per quarter note
	pub struct DivisionsValue, default 0;
}

mx_data::decimal_value! {
	/// Duration in divisions that must be greater than zero (`<duration>`)
	pub struct PositiveDivisionsValue where value > 0, default 1;
}

mx_data::decimal_value! {
	/// Alteration in semitones (`-1` flat, `1` sharp, `0.5` quarter-tone sharp)
	pub struct Semitones, default 0;
}

mx_data::integer_value! {
	/// Integer of at least zero
	pub struct NonNegativeInteger(u32), default 0;
}

mx_data::integer_value! {
	/// Integer of at least one
	pub struct PositiveInteger(u32) where 1.., default 1;
}

mx_data::integer_value! {
	/// Staff line, counted from the bottom
	pub struct StaffLine(i32), default 1;
}

mx_data::integer_value! {
	/// Octave; middle C starts octave 4
	pub struct OctaveValue(u8) where 0..=9, default 4;
}

mx_data::integer_value! {
	/// Position on the circle of fifths; negative values are flats
	pub struct FifthsValue(i32), default 0;
}

mx_data::integer_value! {
	/// Beam number, 1 being the eighth beam
	pub struct BeamLevel(u8) where 1..=8, default 1;
}

mx_data::integer_value! {
	/// Distinguishes overlapping slurs, ties, tuplets and similar
	pub struct NumberLevel(u8) where 1..=6, default 1;
}

mx_data::integer_value! {
	/// 1-based staff within a part
	pub struct StaffNumber(u32) where 1.., default 1;
}

mx_data::integer_value! {
	/// MIDI channel
	pub struct MidiChannel(u8) where 1..=16, default 1;
}

mx_data::integer_value! {
	/// MIDI program, 1-based
	pub struct Midi128(u8) where 1..=128, default 1;
}

mx_data::value_enum! {
	/// Schema boolean
	pub enum YesNo {
		No = "no",
		Yes = "yes",
	}
}

impl YesNo {
	/// `yes` for true
	pub fn from_bool(value: bool) -> Self {
		if value {
			YesNo::Yes
		} else {
			YesNo::No
		}
	}

	/// Whether this is `yes`
	pub fn is_yes(self) -> bool {
		self == YesNo::Yes
	}
}

mx_data::value_enum! {
	/// Pitch letter
	pub enum StepEnum {
		C = "C",
		D = "D",
		E = "E",
		F = "F",
		G = "G",
		A = "A",
		B = "B",
	}
}

mx_data::value_enum! {
	/// Graphic note type, from 1024th to maxima
	pub enum NoteTypeValue {
		Quarter = "quarter",
		OneThousandTwentyFourth = "1024th",
		FiveHundredTwelfth = "512th",
		TwoHundredFiftySixth = "256th",
		OneHundredTwentyEighth = "128th",
		SixtyFourth = "64th",
		ThirtySecond = "32nd",
		Sixteenth = "16th",
		Eighth = "eighth",
		Half = "half",
		Whole = "whole",
		Breve = "breve",
		Long = "long",
		Maxima = "maxima",
	}
}

impl NoteTypeValue {
	/// Length in 1024th notes
	pub fn length_1024ths(self) -> u32 {
		match self {
			NoteTypeValue::OneThousandTwentyFourth => 1,
			NoteTypeValue::FiveHundredTwelfth => 2,
			NoteTypeValue::TwoHundredFiftySixth => 4,
			NoteTypeValue::OneHundredTwentyEighth => 8,
			NoteTypeValue::SixtyFourth => 16,
			NoteTypeValue::ThirtySecond => 32,
			NoteTypeValue::Sixteenth => 64,
			NoteTypeValue::Eighth => 128,
			NoteTypeValue::Quarter => 256,
			NoteTypeValue::Half => 512,
			NoteTypeValue::Whole => 1024,
			NoteTypeValue::Breve => 2048,
			NoteTypeValue::Long => 4096,
			NoteTypeValue::Maxima => 8192,
		}
	}
}

mx_data::value_enum! {
	/// Clef symbol
	pub enum ClefSign {
		G = "G",
		F = "F",
		C = "C",
		Percussion = "percussion",
		Tab = "TAB",
		Jianpu = "jianpu",
		None = "none",
	}
}

mx_data::value_enum! {
	/// Which pages a page-margins block applies to
	pub enum MarginType {
		Odd = "odd",
		Even = "even",
		Both = "both",
	}
}

mx_data::value_enum! {
	/// Note class a `<note-size>` applies to
	pub enum NoteSizeType {
		Cue = "cue",
		Grace = "grace",
		Large = "large",
	}
}

mx_data::value_enum! {
	/// Key mode
	pub enum Mode {
		Major = "major",
		Minor = "minor",
		Dorian = "dorian",
		Phrygian = "phrygian",
		Lydian = "lydian",
		Mixolydian = "mixolydian",
		Aeolian = "aeolian",
		Ionian = "ionian",
		Locrian = "locrian",
		None = "none",
	}
}

mx_data::value_enum! {
	/// How a time signature is printed
	pub enum TimeSymbol {
		Common = "common",
		Cut = "cut",
		SingleNumber = "single-number",
		Note = "note",
		DottedNote = "dotted-note",
		Normal = "normal",
	}
}

mx_data::value_enum! {
	/// Printed accidental sign
	pub enum AccidentalValue {
		Sharp = "sharp",
		Natural = "natural",
		Flat = "flat",
		DoubleSharp = "double-sharp",
		SharpSharp = "sharp-sharp",
		FlatFlat = "flat-flat",
		NaturalSharp = "natural-sharp",
		NaturalFlat = "natural-flat",
		QuarterFlat = "quarter-flat",
		QuarterSharp = "quarter-sharp",
		ThreeQuartersFlat = "three-quarters-flat",
		ThreeQuartersSharp = "three-quarters-sharp",
		SharpDown = "sharp-down",
		SharpUp = "sharp-up",
		NaturalDown = "natural-down",
		NaturalUp = "natural-up",
		FlatDown = "flat-down",
		FlatUp = "flat-up",
		TripleSharp = "triple-sharp",
		TripleFlat = "triple-flat",
		SlashQuarterSharp = "slash-quarter-sharp",
		SlashSharp = "slash-sharp",
		SlashFlat = "slash-flat",
		DoubleSlashFlat = "double-slash-flat",
		Sori = "sori",
		Koron = "koron",
	}
}

mx_data::value_enum! {
	/// Start or end of a spanner
	pub enum StartStop {
		Start = "start",
		Stop = "stop",
	}
}

mx_data::value_enum! {
	/// Start, end or middle of a spanner
	pub enum StartStopContinue {
		Start = "start",
		Stop = "stop",
		Continue = "continue",
	}
}

mx_data::value_enum! {
	/// Ending bracket type
	pub enum StartStopDiscontinue {
		Start = "start",
		Stop = "stop",
		Discontinue = "discontinue",
	}
}

mx_data::value_enum! {
	/// Placement relative to the staff
	pub enum AboveBelow {
		Above = "above",
		Below = "below",
	}
}

mx_data::value_enum! {
	/// Vertical direction
	pub enum UpDown {
		Up = "up",
		Down = "down",
	}
}

mx_data::value_enum! {
	/// Horizontal alignment
	pub enum LeftCenterRight {
		Left = "left",
		Center = "center",
		Right = "right",
	}
}

mx_data::value_enum! {
	/// Vertical alignment
	pub enum Valign {
		Top = "top",
		Middle = "middle",
		Bottom = "bottom",
		Baseline = "baseline",
	}
}

mx_data::value_enum! {
	/// Upright or italic text
	pub enum FontStyle {
		Normal = "normal",
		Italic = "italic",
	}
}

mx_data::value_enum! {
	/// Normal or bold text
	pub enum FontWeight {
		Normal = "normal",
		Bold = "bold",
	}
}

mx_data::value_enum! {
	/// Named font size
	pub enum CssFontSize {
		XxSmall = "xx-small",
		XSmall = "x-small",
		Small = "small",
		Medium = "medium",
		Large = "large",
		XLarge = "x-large",
		XxLarge = "xx-large",
	}
}

mx_data::value_enum! {
	/// `xml:space`
	pub enum XmlSpace {
		Default = "default",
		Preserve = "preserve",
	}
}

mx_data::value_enum! {
	/// Stem direction
	pub enum StemValue {
		Down = "down",
		Up = "up",
		Double = "double",
		None = "none",
	}
}

mx_data::value_enum! {
	/// Notehead shape
	pub enum NoteheadValue {
		Normal = "normal",
		Slash = "slash",
		Triangle = "triangle",
		Diamond = "diamond",
		Square = "square",
		Cross = "cross",
		X = "x",
		CircleX = "circle-x",
		InvertedTriangle = "inverted triangle",
		ArrowDown = "arrow down",
		ArrowUp = "arrow up",
		Slashed = "slashed",
		BackSlashed = "back slashed",
		Cluster = "cluster",
		CircleDot = "circle dot",
		LeftTriangle = "left triangle",
		Rectangle = "rectangle",
		None = "none",
	}
}

mx_data::value_enum! {
	/// Beam state of a note
	pub enum BeamValue {
		Begin = "begin",
		Continue = "continue",
		End = "end",
		ForwardHook = "forward hook",
		BackwardHook = "backward hook",
	}
}

mx_data::value_enum! {
	/// Hairpin start or end
	pub enum WedgeType {
		Crescendo = "crescendo",
		Diminuendo = "diminuendo",
		Stop = "stop",
		Continue = "continue",
	}
}

mx_data::value_enum! {
	/// Barline style
	pub enum BarStyleEnum {
		Regular = "regular",
		Dotted = "dotted",
		Dashed = "dashed",
		Heavy = "heavy",
		LightLight = "light-light",
		LightHeavy = "light-heavy",
		HeavyLight = "heavy-light",
		HeavyHeavy = "heavy-heavy",
		Tick = "tick",
		Short = "short",
		None = "none",
	}
}

mx_data::value_enum! {
	/// Barline location in a measure
	pub enum RightLeftMiddle {
		Right = "right",
		Left = "left",
		Middle = "middle",
	}
}

mx_data::value_enum! {
	/// Repeat direction
	pub enum BackwardForward {
		Backward = "backward",
		Forward = "forward",
	}
}

mx_data::value_enum! {
	/// Fermata shape; the empty token is the normal fermata
	pub enum FermataShape {
		/// No shape given
		Empty = "",
		Normal = "normal",
		Angled = "angled",
		Square = "square",
		DoubleAngled = "double-angled",
		DoubleSquare = "double-square",
		DoubleDot = "double-dot",
		HalfCurve = "half-curve",
		Curlew = "curlew",
	}
}

mx_data::value_enum! {
	/// Fermata orientation
	pub enum UprightInverted {
		Upright = "upright",
		Inverted = "inverted",
	}
}

mx_data::value_enum! {
	/// Position of a lyric syllable in its word
	pub enum Syllabic {
		Single = "single",
		Begin = "begin",
		End = "end",
		Middle = "middle",
	}
}

mx_data::value_enum! {
	/// Symbol in front of a part group
	pub enum GroupSymbolValue {
		None = "none",
		Brace = "brace",
		Line = "line",
		Bracket = "bracket",
		Square = "square",
	}
}

mx_data::value_enum! {
	/// Whether barlines connect the staves of a part group
	pub enum GroupBarlineValue {
		Yes = "yes",
		No = "no",
		Mensurstrich = "Mensurstrich",
	}
}

mx_data::value_enum! {
	/// Which tuplet numbers are printed
	pub enum ShowTuplet {
		Actual = "actual",
		Both = "both",
		None = "none",
	}
}

mx_data::value_enum! {
	/// Piano pedal mark
	pub enum PedalType {
		Start = "start",
		Stop = "stop",
		Sostenuto = "sostenuto",
		Change = "change",
		Continue = "continue",
	}
}

/// Font size: a CSS size name or a point size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontSize {
	/// CSS size name
	Css(CssFontSize),
	/// Size in points
	Decimal(DecimalValue),
}

impl FontSize {
	/// Whether this is a CSS size name
	pub fn is_css_font_size(&self) -> bool {
		matches!(self, FontSize::Css(_))
	}

	/// Whether this is a point size
	pub fn is_decimal(&self) -> bool {
		matches!(self, FontSize::Decimal(_))
	}
}

impl Default for FontSize {
	fn default() -> Self {
		FontSize::Decimal(DecimalValue::default())
	}
}

impl From<CssFontSize> for FontSize {
	fn from(value: CssFontSize) -> Self {
		FontSize::Css(value)
	}
}

impl From<DecimalValue> for FontSize {
	fn from(value: DecimalValue) -> Self {
		FontSize::Decimal(value)
	}
}

impl fmt::Display for FontSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FontSize::Css(size) => size.fmt(f),
			FontSize::Decimal(size) => size.fmt(f),
		}
	}
}

impl FromStr for FontSize {
	type Err = FormatError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		if let Ok(size) = text.parse::<CssFontSize>() {
			return Ok(FontSize::Css(size));
		}
		text.parse::<DecimalValue>()
			.map(FontSize::Decimal)
			.map_err(|_| FormatError::new("FontSize", text, "expected a CSS font size or a decimal"))
	}
}

/// Color in `#RRGGBB` or `#AARRGGBB` notation (hex digits stored upper case)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
	/// Color from red, green and blue components
	pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
		Self(format!("#{:02X}{:02X}{:02X}", red, green, blue))
	}

	/// Lexical form
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::rgb(0, 0, 0)
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for Color {
	type Err = FormatError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		let trimmed = text.trim();
		let digits = trimmed
			.strip_prefix('#')
			.ok_or_else(|| FormatError::new("Color", text, "must start with '#'"))?;
		if !(digits.len() == 6 || digits.len() == 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
			return Err(FormatError::new("Color", text, "expected 6 or 8 hex digits"));
		}
		Ok(Self(format!("#{}", digits.to_ascii_uppercase())))
	}
}
