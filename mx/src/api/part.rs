//! Parts, measures and the events inside them
//!
//! Positions and durations are in ticks; `ScoreData::ticks_per_quarter` says how many ticks a
//! quarter note has.

use crate::core::values::{
	AboveBelow,
	AccidentalValue,
	BackwardForward,
	BarStyleEnum,
	BeamValue,
	ClefSign,
	Mode,
	NoteTypeValue,
	RightLeftMiddle,
	StepEnum,
	TimeSymbol,
	WedgeType,
};

/// Traditional key signature; the default is C major without a mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyData {
	/// Sharps (positive) or flats (negative)
	pub fifths: i32,
	/// `major`, `minor`, ...; `None` leaves `<mode>` out
	pub mode: Option<Mode>,
}

/// Time signature such as 3/4
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSignatureData {
	/// Numerator
	pub beats: u32,
	/// Denominator
	pub beat_type: u32,
	/// Common or cut time symbol instead of numbers
	pub symbol: Option<TimeSymbol>,
}

/// Clef sign and position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClefData {
	/// G, F, C, percussion, ...
	pub sign: ClefSign,
	/// Staff line from the bottom, or the sign's default
	pub line: Option<i32>,
	/// Octaves the notes sound above (or below) the written pitch
	pub octave_change: i32,
}

impl ClefData {
	/// G clef on line 2
	pub fn treble() -> Self {
		Self {
			sign: ClefSign::G,
			line: Some(2),
			octave_change: 0,
		}
	}

	/// F clef on line 4
	pub fn bass() -> Self {
		Self {
			sign: ClefSign::F,
			line: Some(4),
			octave_change: 0,
		}
	}
}

/// Barline style or repeat at the start, end or middle of a measure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarlineData {
	/// Where in the measure
	pub location: RightLeftMiddle,
	/// Light-heavy, dashed, ...
	pub style: Option<BarStyleEnum>,
	/// Repeat sign direction
	pub repeat: Option<BackwardForward>,
}

/// Written pitch; the default is middle C
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PitchData {
	/// Letter name
	pub step: StepEnum,
	/// Chromatic alteration in semitones
	pub alter: i32,
	/// Octave, 4 being the one starting at middle C
	pub octave: u8,
}

impl Default for PitchData {
	fn default() -> Self {
		Self {
			step: StepEnum::C,
			alter: 0,
			octave: 4,
		}
	}
}

/// A note, chord member or rest
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteData {
	/// Start relative to the beginning of the measure
	pub tick_position: u32,
	/// Rest instead of a pitched note
	pub is_rest: bool,
	/// Sounds together with the previous note
	pub is_chord: bool,
	/// Grace notes take no time
	pub is_grace: bool,
	/// Ignored for rests
	pub pitch: PitchData,
	/// Printed note type
	pub duration_name: Option<NoteTypeValue>,
	/// Number of dots after the note head
	pub duration_dots: u32,
	/// Sounding length
	pub duration_ticks: u32,
	/// Voice name; notes of different voices overlap
	pub voice: Option<String>,
	/// 1-based staff within the part
	pub staff: u32,
	/// Tied to the next note
	pub tie_start: bool,
	/// Tied from the previous note
	pub tie_stop: bool,
	/// Beam states from the primary beam outwards
	pub beams: Vec<BeamValue>,
	/// Printed accidental
	pub accidental: Option<AccidentalValue>,
}

impl Default for NoteData {
	fn default() -> Self {
		Self {
			tick_position: 0,
			is_rest: false,
			is_chord: false,
			is_grace: false,
			pitch: PitchData::default(),
			duration_name: None,
			duration_dots: 0,
			duration_ticks: 0,
			voice: None,
			staff: 1,
			tie_start: false,
			tie_stop: false,
			beams: Vec::new(),
			accidental: None,
		}
	}
}

impl NoteData {
	/// Pitched note
	pub fn pitched(tick_position: u32, pitch: PitchData, name: NoteTypeValue, ticks: u32) -> Self {
		Self {
			tick_position,
			pitch,
			duration_name: Some(name),
			duration_ticks: ticks,
			..Self::default()
		}
	}

	/// Rest; `name` is `None` for whole-measure rests without a printed type
	pub fn rest(tick_position: u32, name: Option<NoteTypeValue>, ticks: u32) -> Self {
		Self {
			tick_position,
			is_rest: true,
			duration_name: name,
			duration_ticks: ticks,
			..Self::default()
		}
	}

	/// Tick right after the note
	pub fn end_tick(&self) -> u32 {
		if self.is_grace {
			self.tick_position
		} else {
			self.tick_position.saturating_add(self.duration_ticks)
		}
	}
}

/// Metronome mark such as quarter = 96
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TempoData {
	/// Note type of one beat
	pub beat_unit: NoteTypeValue,
	/// Dots of the beat unit
	pub beat_unit_dots: u32,
	/// Beats per minute
	pub per_minute: u32,
}

/// Text, dynamics, wedges and tempo marks at a position
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionData {
	/// Position relative to the beginning of the measure
	pub tick_position: u32,
	/// Above or below the staff
	pub placement: Option<AboveBelow>,
	/// 1-based staff within the part
	pub staff: u32,
	/// Text in order
	pub words: Vec<String>,
	/// Marking names (`"p"`, `"mf"`, ...)
	pub dynamics: Vec<String>,
	/// Crescendo or diminuendo hairpin
	pub wedge: Option<WedgeType>,
	/// Metronome mark
	pub tempo: Option<TempoData>,
}

impl Default for DirectionData {
	fn default() -> Self {
		Self {
			tick_position: 0,
			placement: None,
			staff: 1,
			words: Vec::new(),
			dynamics: Vec::new(),
			wedge: None,
			tempo: None,
		}
	}
}

impl DirectionData {
	/// No content to write; empty directions are skipped
	pub fn is_empty(&self) -> bool {
		self.words.is_empty() && self.dynamics.is_empty() && self.wedge.is_none() && self.tempo.is_none()
	}
}

/// One measure of a part
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeasureData {
	/// Measure number as printed; empty means the 1-based index
	pub number: String,
	/// Key change at the start of the measure
	pub key: Option<KeyData>,
	/// Time signature change
	pub time: Option<TimeSignatureData>,
	/// Clef change
	pub clef: Option<ClefData>,
	/// Barlines in document order
	pub barlines: Vec<BarlineData>,
	/// Notes and rests of all voices
	pub notes: Vec<NoteData>,
	/// Directions of all staves
	pub directions: Vec<DirectionData>,
}

impl MeasureData {
	/// Highest staff any note or direction uses (at least 1)
	pub fn num_staves(&self) -> u32 {
		let notes = self.notes.iter().map(|note| note.staff);
		let directions = self.directions.iter().map(|direction| direction.staff);
		notes.chain(directions).max().unwrap_or(1).max(1)
	}

	/// Stable sort of notes and directions by tick position
	pub fn sort(&mut self) {
		self.notes.sort_by_key(|note| note.tick_position);
		self.directions.sort_by_key(|direction| direction.tick_position);
	}
}

/// One part with its measures
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartData {
	/// Unique id (`score-part/@id`)
	pub id: String,
	/// `<part-name>`
	pub name: String,
	/// `<part-abbreviation>`, empty if none
	pub abbreviation: String,
	/// Measures in order
	pub measures: Vec<MeasureData>,
}

impl PartData {
	/// Part without measures
	pub fn new(id: &str, name: &str) -> Self {
		Self {
			id: id.to_owned(),
			name: name.to_owned(),
			..Self::default()
		}
	}

	/// Highest staff of any measure (at least 1)
	pub fn num_staves(&self) -> u32 {
		self.measures.iter().map(MeasureData::num_staves).max().unwrap_or(1)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn sort_is_stable() {
		let pitch = |step| PitchData {
			step,
			..PitchData::default()
		};
		let mut measure = MeasureData {
			notes: vec![
				NoteData::pitched(2, pitch(StepEnum::E), NoteTypeValue::Half, 2),
				NoteData::pitched(0, pitch(StepEnum::C), NoteTypeValue::Half, 2),
				NoteData {
					is_chord: true,
					..NoteData::pitched(0, pitch(StepEnum::G), NoteTypeValue::Half, 2)
				},
			],
			..MeasureData::default()
		};
		measure.sort();
		let steps: Vec<_> = measure.notes.iter().map(|note| note.pitch.step).collect();
		assert_eq!(steps, [StepEnum::C, StepEnum::G, StepEnum::E]);
	}

	#[test]
	fn staves() {
		let mut part = PartData::new("P1", "Piano");
		assert_eq!(part.num_staves(), 1);
		part.measures.push(MeasureData {
			notes: vec![NoteData {
				staff: 2,
				..NoteData::rest(0, None, 4)
			}],
			..MeasureData::default()
		});
		assert_eq!(part.num_staves(), 2);
		assert_eq!(part.measures[0].notes[0].end_tick(), 4);
	}

	#[test]
	fn end_tick_saturates() {
		let note = NoteData::rest(u32::MAX - 1, None, 8);
		assert_eq!(note.end_tick(), u32::MAX);
	}

	#[test]
	fn key_default_is_c_major() {
		assert_eq!(KeyData::default(), KeyData { fifths: 0, mode: None });
	}
}
