//! Notes, rests and their lyrics

use crate::core::{
	elements::{
		EmptyPlacementAttributes,
		ExtendAttributes,
		Notations,
	},
	values::{
		self,
		AboveBelow,
		AccidentalValue,
		BeamLevel,
		BeamValue,
		Color,
		DivisionsValue,
		FontSize,
		FontStyle,
		FontWeight,
		LeftCenterRight,
		NonNegativeDecimal,
		NonNegativeInteger,
		NoteheadValue,
		NoteTypeValue,
		OctaveValue,
		PositiveDivisionsValue,
		Semitones,
		StaffNumber,
		StartStop,
		StemValue,
		StepEnum,
		TenthsValue,
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

value_element!(Step(StepEnum));
value_element!(Alter(Semitones));
value_element!(Octave(OctaveValue));

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Pitch {
	pub step: Step,
	pub alter: Option<Alter>,
	pub octave: Octave,
}

impl Pitch {
	/// Pitch from step, chromatic alteration and octave
	pub fn new(step: StepEnum, alter: Option<Semitones>, octave: OctaveValue) -> Self {
		Self {
			step: Step::new(step),
			alter: alter.map(Alter::new),
			octave: Octave::new(octave),
		}
	}
}

value_element!(DisplayStep(StepEnum));
value_element!(DisplayOctave(OctaveValue));

/// Position on the staff for unpitched notes and rests
#[derive(Inner, Clone, Debug, Default, PartialEq)]
pub struct DisplayStepOctave {
	pub display_step: DisplayStep,
	pub display_octave: DisplayOctave,
}

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Unpitched {
	pub display_step_octave: Option<DisplayStepOctave>,
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct RestAttributes {
	pub measure: Option<YesNo>,
}

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Rest {
	#[mx_data(attributes)]
	pub attributes: RestAttributes,
	pub display_step_octave: Option<DisplayStepOctave>,
}

#[derive(Inner, Clone, Debug, PartialEq)]
pub enum FullNoteChoice {
	Pitch(Pitch),
	Unpitched(Unpitched),
	Rest(Rest),
}

empty_element! {
	/// Note sounds together with the previous note
	Chord
}

#[derive(Inner, Clone, Debug, Default, PartialEq)]
pub struct FullNote {
	pub chord: Option<Chord>,
	pub choice: FullNoteChoice,
}

value_element!(Duration(PositiveDivisionsValue));

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct TieAttributes {
	pub r#type: StartStop,
	pub time_only: Option<XsToken>,
}

empty_element! {
	/// Sound of a tie; the visual counterpart is `<tied>` in the notations
	Tie with TieAttributes
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct GraceAttributes {
	pub steal_time_previous: Option<NonNegativeDecimal>,
	pub steal_time_following: Option<NonNegativeDecimal>,
	pub make_time: Option<DivisionsValue>,
	pub slash: Option<YesNo>,
}

empty_element!(Grace with GraceAttributes);
empty_element!(Cue);

#[derive(Inner, Clone, Debug, Default, PartialEq)]
pub struct NormalNote {
	pub full_note: FullNote,
	pub duration: Duration,
	pub ties: Vec<Tie>,
}

#[derive(Inner, Clone, Debug, Default, PartialEq)]
pub struct GraceNote {
	pub grace: Grace,
	pub full_note: FullNote,
	pub ties: Vec<Tie>,
}

#[derive(Inner, Clone, Debug, Default, PartialEq)]
pub struct CueNote {
	pub cue: Cue,
	pub full_note: FullNote,
	pub duration: Duration,
}

/// Regular, grace or cue note
#[derive(Inner, Clone, Debug, PartialEq)]
pub enum NoteChoice {
	Normal(NormalNote),
	Grace(GraceNote),
	Cue(CueNote),
}

value_element!(Voice(XsString));

value_element! {
	/// Graphic note type (quarter, eighth, ...)
	#[mx_data(tag = "type")]
	NoteType(NoteTypeValue)
}

empty_element!(Dot with EmptyPlacementAttributes);

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct AccidentalAttributes {
	pub cautionary: Option<YesNo>,
	pub editorial: Option<YesNo>,
	pub parentheses: Option<YesNo>,
	pub bracket: Option<YesNo>,
	pub default_x: Option<TenthsValue>,
	pub default_y: Option<TenthsValue>,
	pub relative_x: Option<TenthsValue>,
	pub relative_y: Option<TenthsValue>,
	pub font_family: Option<String>,
	pub font_style: Option<FontStyle>,
	pub font_size: Option<FontSize>,
	pub font_weight: Option<FontWeight>,
	pub color: Option<Color>,
}

value_element!(Accidental(AccidentalValue) with AccidentalAttributes);

value_element!(ActualNotes(NonNegativeInteger));
value_element!(NormalNotes(NonNegativeInteger));
value_element!(NormalType(NoteTypeValue));
empty_element!(NormalDot);

#[derive(Inner, Clone, Debug, Default, PartialEq)]
pub struct NormalTypeDots {
	pub normal_type: NormalType,
	pub normal_dots: Vec<NormalDot>,
}

/// Tuplet ratio: `actual_notes` in the time of `normal_notes`
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct TimeModification {
	pub actual_notes: ActualNotes,
	pub normal_notes: NormalNotes,
	pub normal: Option<NormalTypeDots>,
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct StemAttributes {
	pub default_x: Option<TenthsValue>,
	pub default_y: Option<TenthsValue>,
	pub relative_x: Option<TenthsValue>,
	pub relative_y: Option<TenthsValue>,
	pub color: Option<Color>,
}

value_element!(Stem(StemValue) with StemAttributes);

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct NoteheadAttributes {
	pub filled: Option<YesNo>,
	pub parentheses: Option<YesNo>,
	pub font_family: Option<String>,
	pub font_style: Option<FontStyle>,
	pub font_size: Option<FontSize>,
	pub font_weight: Option<FontWeight>,
	pub color: Option<Color>,
}

value_element!(Notehead(NoteheadValue) with NoteheadAttributes);
value_element!(Staff(StaffNumber));

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct BeamAttributes {
	pub number: Option<BeamLevel>,
	pub repeater: Option<YesNo>,
	pub color: Option<Color>,
}

value_element!(Beam(BeamValue) with BeamAttributes);

value_element!(Syllabic(values::Syllabic));

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct LyricTextAttributes {
	pub font_family: Option<String>,
	pub font_style: Option<FontStyle>,
	pub font_size: Option<FontSize>,
	pub font_weight: Option<FontWeight>,
	pub color: Option<Color>,
	#[mx_data(rename = "xml:lang")]
	pub xml_lang: Option<String>,
}

value_element!(Text(XsString) with LyricTextAttributes);

empty_element! {
	/// Word extension line
	Extend with ExtendAttributes
}

empty_element!(Laughing);
empty_element!(Humming);
empty_element!(EndLine);
empty_element!(EndParagraph);

#[derive(Inner, Clone, Debug, Default, PartialEq)]
pub struct LyricText {
	pub syllabic: Option<Syllabic>,
	pub text: Text,
	pub extend: Option<Extend>,
}

#[derive(Inner, Clone, Debug, PartialEq)]
pub enum LyricChoice {
	Text(LyricText),
	Extend(Extend),
	Laughing(Laughing),
	Humming(Humming),
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct LyricAttributes {
	pub number: Option<XsNmToken>,
	pub name: Option<XsToken>,
	pub justify: Option<LeftCenterRight>,
	pub default_x: Option<TenthsValue>,
	pub default_y: Option<TenthsValue>,
	pub relative_x: Option<TenthsValue>,
	pub relative_y: Option<TenthsValue>,
	pub placement: Option<AboveBelow>,
	pub color: Option<Color>,
	pub print_object: Option<YesNo>,
}

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Lyric {
	#[mx_data(attributes)]
	pub attributes: LyricAttributes,
	pub choice: LyricChoice,
	pub end_line: Option<EndLine>,
	pub end_paragraph: Option<EndParagraph>,
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct NoteAttributes {
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
	pub print_spacing: Option<YesNo>,
	pub dynamics: Option<NonNegativeDecimal>,
	pub end_dynamics: Option<NonNegativeDecimal>,
	pub attack: Option<DivisionsValue>,
	pub release: Option<DivisionsValue>,
	pub pizzicato: Option<YesNo>,
}

/// A note or rest
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Note {
	#[mx_data(attributes)]
	pub attributes: NoteAttributes,
	pub choice: NoteChoice,
	pub voice: Option<Voice>,
	pub note_type: Option<NoteType>,
	pub dots: Vec<Dot>,
	pub accidental: Option<Accidental>,
	pub time_modification: Option<TimeModification>,
	pub stem: Option<Stem>,
	pub notehead: Option<Notehead>,
	pub staff: Option<Staff>,
	pub beams: Vec<Beam>,
	pub notations: Vec<Notations>,
	pub lyrics: Vec<Lyric>,
}

impl Note {
	pub fn full_note(&self) -> &FullNote {
		match &self.choice {
			NoteChoice::Normal(normal) => &normal.full_note,
			NoteChoice::Grace(grace) => &grace.full_note,
			NoteChoice::Cue(cue) => &cue.full_note,
		}
	}

	pub fn full_note_mut(&mut self) -> &mut FullNote {
		match &mut self.choice {
			NoteChoice::Normal(normal) => &mut normal.full_note,
			NoteChoice::Grace(grace) => &mut grace.full_note,
			NoteChoice::Cue(cue) => &mut cue.full_note,
		}
	}

	/// Duration in divisions; grace notes have none
	pub fn duration(&self) -> Option<PositiveDivisionsValue> {
		match &self.choice {
			NoteChoice::Normal(normal) => Some(normal.duration.value),
			NoteChoice::Grace(_) => None,
			NoteChoice::Cue(cue) => Some(cue.duration.value),
		}
	}

	pub fn ties(&self) -> &[Tie] {
		match &self.choice {
			NoteChoice::Normal(normal) => &normal.ties,
			NoteChoice::Grace(grace) => &grace.ties,
			NoteChoice::Cue(_) => &[],
		}
	}

	pub fn is_chord(&self) -> bool {
		self.full_note().chord.is_some()
	}

	pub fn is_rest(&self) -> bool {
		matches!(self.full_note().choice, FullNoteChoice::Rest(_))
	}

	pub fn pitch(&self) -> Option<&Pitch> {
		match &self.full_note().choice {
			FullNoteChoice::Pitch(pitch) => Some(pitch),
			_ => None,
		}
	}
}
