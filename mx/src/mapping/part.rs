//! Parts and measures: properties, notes, directions and barlines
//!
//! Writing walks the events of a measure with a time cursor and emits `<backup>`/`<forward>`
//! whenever the next event doesn't start at the cursor.  Reading replays the same cursor to
//! recover tick positions.

use crate::{
	api::{
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
	core::{
		elements::{
			Accidental,
			Backup,
			Barline,
			BarlineAttributes,
			BarStyle,
			Beam,
			BeamAttributes,
			Chord,
			Clef,
			ClefOctaveChange,
			Direction,
			DirectionAttributes,
			DirectionType,
			DirectionTypeChoice,
			Divisions,
			Dot,
			Duration,
			Dynamics,
			DynamicsChoice,
			Forward,
			FullNote,
			FullNoteChoice,
			Grace,
			GraceNote,
			Key,
			KeyChoice,
			Line,
			MeasureAttributes,
			Metronome,
			MetronomeTempo,
			MusicDataChoice,
			NormalNote,
			Notations,
			NotationsChoice,
			Note,
			NoteChoice,
			NoteType,
			PartAttributes,
			PartwiseMeasure,
			PartwisePart,
			Pitch,
			Properties,
			Repeat,
			RepeatAttributes,
			Rest,
			Sign,
			Staff,
			Staves,
			Tie,
			TieAttributes,
			Tied,
			TiedAttributes,
			Time,
			TimeChoice,
			Voice,
			Wedge,
			WedgeAttributes,
			Words,
		},
		values::{
			BeamLevel,
			Decimal,
			FifthsValue,
			NonNegativeInteger,
			OctaveValue,
			PositiveDivisionsValue,
			RightLeftMiddle,
			Semitones,
			StaffLine,
			StaffNumber,
			StartStop,
			StartStopContinue,
			XsIdRef,
			XsString,
			XsToken,
		},
	},
	mapping::checked,
};

/// `<duration>` of `ticks`; zero has no positive form and is written as one division
fn duration(what: &str, ticks: u32) -> Duration {
	if ticks == 0 {
		log::debug!("writing {} of 0 ticks as 1 division", what);
		return Duration::new(PositiveDivisionsValue::default());
	}
	Duration::new(checked(what, PositiveDivisionsValue::from_f64(f64::from(ticks))).unwrap_or_default())
}

/// Time cursor of a measure being written
struct Cursor {
	tick: u32,
	music_data: Vec<MusicDataChoice>,
}

impl Cursor {
	fn new() -> Self {
		Self {
			tick: 0,
			music_data: Vec::new(),
		}
	}

	fn move_to(&mut self, tick: u32) {
		if tick < self.tick {
			self.music_data.push(MusicDataChoice::Backup(Backup {
				duration: duration("backup", self.tick - tick),
			}));
		} else if tick > self.tick {
			self.music_data.push(MusicDataChoice::Forward(Forward {
				duration: duration("forward", tick - self.tick),
				voice: None,
				staff: None,
			}));
		}
		self.tick = tick;
	}

	fn push(&mut self, item: MusicDataChoice) {
		self.music_data.push(item);
	}
}

fn write_properties(measure: &MeasureData, first: Option<(u32, u32)>) -> Option<Properties> {
	let mut properties = Properties::default();
	if let Some((ticks_per_quarter, staves)) = first {
		properties.divisions = checked("divisions", PositiveDivisionsValue::from_f64(f64::from(ticks_per_quarter))).map(Divisions::new);
		if staves > 1 {
			properties.staves = Some(Staves::new(NonNegativeInteger::new(staves).unwrap_or_default()));
		}
	}
	if let Some(key) = &measure.key {
		properties.keys.extend(checked("fifths", FifthsValue::new(key.fifths)).map(|fifths| Key::traditional(fifths, key.mode)));
	}
	if let Some(time) = &measure.time {
		let mut element = Time::signature(time.beats, time.beat_type);
		element.attributes.symbol = time.symbol;
		properties.times.push(element);
	}
	if let Some(clef) = &measure.clef {
		properties.clefs.push(Clef {
			sign: Sign::new(clef.sign),
			line: clef.line.and_then(|line| checked("clef line", StaffLine::new(line))).map(Line::new),
			clef_octave_change: (clef.octave_change != 0).then(|| ClefOctaveChange::new(clef.octave_change)),
			..Clef::default()
		});
	}
	if properties == Properties::default() {
		None
	} else {
		Some(properties)
	}
}

fn write_barline(barline: &BarlineData) -> Barline {
	Barline {
		attributes: BarlineAttributes {
			location: Some(barline.location),
			..BarlineAttributes::default()
		},
		bar_style: barline.style.map(BarStyle::new),
		repeat: barline.repeat.map(|direction| Repeat {
			attributes: RepeatAttributes { direction, times: None },
		}),
		..Barline::default()
	}
}

fn staff(number: u32, multi_staff: bool) -> Option<Staff> {
	if multi_staff {
		checked("staff", StaffNumber::new(number)).map(Staff::new)
	} else {
		None
	}
}

fn write_pitch(pitch: &PitchData) -> Pitch {
	let alter = if pitch.alter == 0 {
		None
	} else {
		checked("alter", Semitones::new(Decimal::from(pitch.alter)))
	};
	let octave = checked("octave", OctaveValue::new(pitch.octave)).unwrap_or_default();
	Pitch::new(pitch.step, alter, octave)
}

fn write_note(note: &NoteData, chord: bool, multi_staff: bool) -> Note {
	let full_note = FullNote {
		chord: chord.then_some(Chord),
		choice: if note.is_rest {
			FullNoteChoice::Rest(Rest::default())
		} else {
			FullNoteChoice::Pitch(write_pitch(&note.pitch))
		},
	};
	let tie = |r#type| Tie {
		attributes: TieAttributes { r#type, time_only: None },
	};
	let ties: Vec<Tie> = [(note.tie_stop, StartStop::Stop), (note.tie_start, StartStop::Start)]
		.into_iter()
		.filter(|&(set, _)| set)
		.map(|(_, r#type)| tie(r#type))
		.collect();
	let tied: Vec<NotationsChoice> = ties
		.iter()
		.map(|tie| {
			let r#type = match tie.attributes.r#type {
				StartStop::Start => StartStopContinue::Start,
				StartStop::Stop => StartStopContinue::Stop,
			};
			NotationsChoice::Tied(Tied {
				attributes: TiedAttributes {
					r#type,
					..TiedAttributes::default()
				},
			})
		})
		.collect();
	let choice = if note.is_grace {
		NoteChoice::Grace(GraceNote {
			grace: Grace::default(),
			full_note,
			ties,
		})
	} else {
		NoteChoice::Normal(NormalNote {
			full_note,
			duration: duration("note duration", note.duration_ticks),
			ties,
		})
	};
	Note {
		choice,
		voice: note.voice.as_deref().map(|voice| Voice::new(XsString::from(voice))),
		note_type: note.duration_name.map(NoteType::new),
		dots: vec![Dot::default(); note.duration_dots as usize],
		accidental: note.accidental.map(Accidental::new),
		staff: staff(note.staff, multi_staff),
		beams: note
			.beams
			.iter()
			.enumerate()
			.filter_map(|(level, &value)| {
				let number = checked("beam level", BeamLevel::new((level + 1) as u8))?;
				Some(Beam {
					attributes: BeamAttributes {
						number: Some(number),
						..BeamAttributes::default()
					},
					value,
				})
			})
			.collect(),
		notations: if tied.is_empty() {
			Vec::new()
		} else {
			vec![Notations {
				items: tied,
				..Notations::default()
			}]
		},
		..Note::default()
	}
}

fn write_direction(direction: &DirectionData, multi_staff: bool) -> Option<Direction> {
	if direction.is_empty() {
		log::debug!("skipping empty direction at tick {}", direction.tick_position);
		return None;
	}
	let mut types = Vec::new();
	if !direction.words.is_empty() {
		types.push(DirectionTypeChoice::Words(
			direction.words.iter().map(|words| Words::new(XsString::from(words.as_str()))).collect(),
		));
	}
	if !direction.dynamics.is_empty() {
		types.push(DirectionTypeChoice::Dynamics(vec![Dynamics {
			marks: direction.dynamics.iter().map(|name| DynamicsChoice::from_name(name)).collect(),
			..Dynamics::default()
		}]));
	}
	if let Some(r#type) = direction.wedge {
		types.push(DirectionTypeChoice::Wedge(Wedge {
			attributes: WedgeAttributes {
				r#type,
				..WedgeAttributes::default()
			},
		}));
	}
	if let Some(tempo) = &direction.tempo {
		types.push(DirectionTypeChoice::Metronome(Metronome::per_minute(
			tempo.beat_unit,
			tempo.beat_unit_dots as usize,
			&tempo.per_minute.to_string(),
		)));
	}
	Some(Direction {
		attributes: DirectionAttributes {
			placement: direction.placement,
			directive: None,
		},
		direction_types: types.into_iter().map(DirectionType::from).collect(),
		staff: staff(direction.staff, multi_staff),
		..Direction::default()
	})
}

fn write_measure(measure: &MeasureData, index: usize, ticks_per_quarter: u32, staves: u32) -> PartwiseMeasure {
	let multi_staff = staves > 1;
	let mut cursor = Cursor::new();
	let first = (index == 0).then_some((ticks_per_quarter, staves));
	if let Some(properties) = write_properties(measure, first) {
		cursor.push(MusicDataChoice::Properties(properties));
	}
	let (left, other): (Vec<&BarlineData>, Vec<&BarlineData>) =
		measure.barlines.iter().partition(|barline| barline.location == RightLeftMiddle::Left);
	for barline in left {
		cursor.push(MusicDataChoice::Barline(write_barline(barline)));
	}

	let mut directions: Vec<&DirectionData> = measure.directions.iter().collect();
	directions.sort_by_key(|direction| direction.tick_position);
	let mut directions = directions.into_iter().peekable();
	let mut last_start: Option<u32> = None;
	for note in &measure.notes {
		let chord = note.is_chord && last_start == Some(note.tick_position);
		if note.is_chord && !chord {
			log::debug!("writing chord note at tick {} as a separate note", note.tick_position);
		}
		if !chord {
			while let Some(direction) = directions.next_if(|direction| direction.tick_position <= note.tick_position) {
				if let Some(element) = write_direction(direction, multi_staff) {
					cursor.move_to(direction.tick_position);
					cursor.push(MusicDataChoice::Direction(element));
				}
			}
			cursor.move_to(note.tick_position);
			last_start = Some(note.tick_position);
		}
		cursor.push(MusicDataChoice::Note(write_note(note, chord, multi_staff)));
		if !chord {
			cursor.tick = if note.is_grace || note.duration_ticks > 0 {
				note.end_tick()
			} else {
				// zero durations are written as one division
				note.tick_position.saturating_add(1)
			};
		}
	}
	for direction in directions {
		if let Some(element) = write_direction(direction, multi_staff) {
			cursor.move_to(direction.tick_position);
			cursor.push(MusicDataChoice::Direction(element));
		}
	}

	for barline in other {
		cursor.push(MusicDataChoice::Barline(write_barline(barline)));
	}
	let number = if measure.number.is_empty() {
		(index + 1).to_string()
	} else {
		measure.number.clone()
	};
	PartwiseMeasure {
		attributes: MeasureAttributes {
			number: XsToken::new(&number),
			..MeasureAttributes::default()
		},
		music_data: cursor.music_data,
	}
}

/// Partwise `<part>` for a part
pub(crate) fn write_part(part: &PartData, id: XsIdRef, ticks_per_quarter: u32) -> PartwisePart {
	let staves = part.num_staves();
	PartwisePart {
		attributes: PartAttributes { id },
		measures: part
			.measures
			.iter()
			.enumerate()
			.map(|(index, measure)| write_measure(measure, index, ticks_per_quarter, staves))
			.collect(),
	}
}

/// Converts durations in divisions to ticks
#[derive(Clone, Copy, Debug)]
pub(crate) struct TickScale {
	ticks_per_quarter: u32,
	divisions: f64,
}

impl TickScale {
	pub(crate) fn new(ticks_per_quarter: u32) -> Self {
		Self {
			ticks_per_quarter,
			divisions: f64::from(ticks_per_quarter),
		}
	}

	fn set_divisions(&mut self, divisions: f64) {
		self.divisions = divisions;
	}

	fn ticks(&self, divisions: f64) -> u32 {
		(divisions * f64::from(self.ticks_per_quarter) / self.divisions).round().max(0.0) as u32
	}
}

/// First `<divisions>` of any part
pub(crate) fn first_divisions(parts: &[PartwisePart]) -> Option<f64> {
	parts
		.iter()
		.flat_map(|part| &part.measures)
		.flat_map(|measure| &measure.music_data)
		.find_map(|item| match item {
			MusicDataChoice::Properties(Properties {
				divisions: Some(divisions),
				..
			}) => Some(divisions.value.to_f64()),
			_ => None,
		})
}

fn read_properties(properties: &Properties, scale: &mut TickScale, measure: &mut MeasureData) {
	if let Some(divisions) = &properties.divisions {
		scale.set_divisions(divisions.value.to_f64());
	}
	for key in &properties.keys {
		if measure.key.is_some() {
			log::debug!("skipping additional key in measure {:?}", measure.number);
			continue;
		}
		match &key.choice {
			KeyChoice::Traditional(key) => {
				measure.key = Some(KeyData {
					fifths: key.fifths.value.value(),
					mode: key.mode.as_ref().map(|mode| mode.value),
				})
			},
			KeyChoice::NonTraditional(_) => log::debug!("skipping non-traditional key in measure {:?}", measure.number),
		}
	}
	for time in &properties.times {
		if measure.time.is_some() {
			log::debug!("skipping additional time in measure {:?}", measure.number);
			continue;
		}
		match &time.choice {
			TimeChoice::Signature(signatures) => {
				let Some(signature) = signatures.first() else {
					continue;
				};
				match (signature.beats.value.as_str().trim().parse(), signature.beat_type.value.as_str().trim().parse()) {
					(Ok(beats), Ok(beat_type)) => {
						measure.time = Some(TimeSignatureData {
							beats,
							beat_type,
							symbol: time.attributes.symbol,
						})
					},
					_ => log::debug!(
						"skipping time signature {}/{} in measure {:?}",
						signature.beats.value,
						signature.beat_type.value,
						measure.number
					),
				}
			},
			TimeChoice::SenzaMisura(_) => log::debug!("skipping senza-misura in measure {:?}", measure.number),
		}
	}
	if let Some(clef) = properties.clefs.first() {
		if measure.clef.is_none() {
			measure.clef = Some(ClefData {
				sign: clef.sign.value,
				line: clef.line.as_ref().map(|line| line.value.value()),
				octave_change: clef.clef_octave_change.as_ref().map_or(0, |change| change.value),
			});
		}
	}
}

fn read_pitch(note: &Note) -> PitchData {
	match &note.full_note().choice {
		FullNoteChoice::Pitch(pitch) => PitchData {
			step: pitch.step.value,
			alter: pitch.alter.as_ref().map_or(0, |alter| alter.value.to_f64().round() as i32),
			octave: pitch.octave.value.value(),
		},
		FullNoteChoice::Unpitched(unpitched) => match &unpitched.display_step_octave {
			Some(display) => PitchData {
				step: display.display_step.value,
				alter: 0,
				octave: display.display_octave.value.value(),
			},
			None => PitchData::default(),
		},
		FullNoteChoice::Rest(_) => PitchData::default(),
	}
}

fn read_note(note: &Note, tick_position: u32, duration_ticks: u32) -> NoteData {
	let ties = note.ties();
	NoteData {
		tick_position,
		is_rest: note.is_rest(),
		is_chord: note.is_chord(),
		is_grace: matches!(note.choice, NoteChoice::Grace(_)),
		pitch: read_pitch(note),
		duration_name: note.note_type.as_ref().map(|name| name.value),
		duration_dots: note.dots.len() as u32,
		duration_ticks,
		voice: note.voice.as_ref().map(|voice| voice.value.0.clone()),
		staff: note.staff.as_ref().map_or(1, |staff| staff.value.value()),
		tie_start: ties.iter().any(|tie| tie.attributes.r#type == StartStop::Start),
		tie_stop: ties.iter().any(|tie| tie.attributes.r#type == StartStop::Stop),
		beams: note.beams.iter().map(|beam| beam.value).collect(),
		accidental: note.accidental.as_ref().map(|accidental| accidental.value),
	}
}

fn read_direction(direction: &Direction, tick_position: u32) -> DirectionData {
	let mut data = DirectionData {
		tick_position,
		placement: direction.attributes.placement,
		staff: direction.staff.as_ref().map_or(1, |staff| staff.value.value()),
		..DirectionData::default()
	};
	for direction_type in &direction.direction_types {
		match &direction_type.choice {
			DirectionTypeChoice::Words(words) => data.words.extend(words.iter().map(|words| words.value.0.clone())),
			DirectionTypeChoice::Dynamics(dynamics) => {
				let marks = dynamics.iter().flat_map(|dynamics| &dynamics.marks);
				data.dynamics.extend(marks.map(|mark| mark.name().to_owned()));
			},
			DirectionTypeChoice::Wedge(wedge) => data.wedge = Some(wedge.attributes.r#type),
			DirectionTypeChoice::Metronome(metronome) => match &metronome.tempo {
				MetronomeTempo::PerMinute(per_minute) => match per_minute.value.as_str().trim().parse::<f64>() {
					Ok(value) if value >= 0.0 => {
						data.tempo = Some(TempoData {
							beat_unit: metronome.beat.beat_unit.value,
							beat_unit_dots: metronome.beat.beat_unit_dots.len() as u32,
							per_minute: value.round() as u32,
						})
					},
					_ => log::debug!("skipping metronome with per-minute {:?}", per_minute.value.as_str()),
				},
				MetronomeTempo::BeatUnit(_) => log::debug!("skipping metronome relating two beat units"),
			},
			other => log::debug!("skipping direction type {:?}", other),
		}
	}
	data
}

fn read_measure(measure: &PartwiseMeasure, scale: &mut TickScale) -> MeasureData {
	let mut data = MeasureData {
		number: measure.attributes.number.as_str().to_owned(),
		..MeasureData::default()
	};
	let mut cursor: u32 = 0;
	let mut last_start: u32 = 0;
	for item in &measure.music_data {
		match item {
			MusicDataChoice::Properties(properties) => read_properties(properties, scale, &mut data),
			MusicDataChoice::Note(note) => {
				let ticks = note.duration().map_or(0, |duration| scale.ticks(duration.to_f64()));
				let is_grace = matches!(note.choice, NoteChoice::Grace(_));
				let tick_position = if note.is_chord() { last_start } else { cursor };
				data.notes.push(read_note(note, tick_position, ticks));
				if !note.is_chord() && !is_grace {
					last_start = cursor;
					cursor = cursor.saturating_add(ticks);
				}
			},
			MusicDataChoice::Backup(backup) => {
				cursor = cursor.saturating_sub(scale.ticks(backup.duration.value.to_f64()));
			},
			MusicDataChoice::Forward(forward) => {
				cursor = cursor.saturating_add(scale.ticks(forward.duration.value.to_f64()));
			},
			MusicDataChoice::Direction(direction) => {
				let offset = direction.offset.as_ref().map_or(0.0, |offset| offset.value.to_f64());
				let tick_position = if offset < 0.0 {
					cursor.saturating_sub(scale.ticks(-offset))
				} else {
					cursor.saturating_add(scale.ticks(offset))
				};
				let direction = read_direction(direction, tick_position);
				if direction.is_empty() {
					log::debug!("skipping direction without supported contents in measure {:?}", data.number);
				} else {
					data.directions.push(direction);
				}
			},
			MusicDataChoice::Barline(barline) => data.barlines.push(BarlineData {
				location: barline.attributes.location.unwrap_or_default(),
				style: barline.bar_style.as_ref().map(|style| style.value),
				repeat: barline.repeat.as_ref().map(|repeat| repeat.attributes.direction),
			}),
			MusicDataChoice::Print(_) | MusicDataChoice::Sound(_) => {
				log::debug!("skipping print/sound in measure {:?}", data.number);
			},
		}
	}
	data
}

/// Read the measures of a partwise `<part>` into `data`
pub(crate) fn read_part(part: &PartwisePart, scale: &mut TickScale, data: &mut PartData) {
	for measure in &part.measures {
		data.measures.push(read_measure(measure, scale));
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::core::values::{
		AboveBelow,
		AccidentalValue,
		BackwardForward,
		BarStyleEnum,
		BeamValue,
		ClefSign,
		NoteTypeValue,
		StepEnum,
		WedgeType,
		XsId,
	};
	use mx_data::serializer::to_string;
	use pretty_assertions::assert_eq;

	fn round_trip(part: &PartData, ticks_per_quarter: u32) -> PartData {
		let id = XsIdRef::from(&XsId::new("P1").unwrap());
		let written = write_part(part, id, ticks_per_quarter);
		let mut read = PartData::new(&part.id, &part.name);
		read_part(&written, &mut TickScale::new(ticks_per_quarter), &mut read);
		read
	}

	fn pitch(step: StepEnum, octave: u8) -> PitchData {
		PitchData { step, alter: 0, octave }
	}

	#[test]
	fn first_measure_has_properties() {
		let mut part = PartData::new("P1", "One");
		part.measures.push(MeasureData {
			number: "1".into(),
			key: Some(KeyData::default()),
			time: Some(TimeSignatureData {
				beats: 4,
				beat_type: 4,
				symbol: None,
			}),
			clef: Some(ClefData::treble()),
			notes: vec![NoteData::pitched(0, pitch(StepEnum::C, 4), NoteTypeValue::Whole, 4)],
			..MeasureData::default()
		});
		let written = write_part(&part, XsIdRef::from(&XsId::new("P1").unwrap()), 1);
		let expected = r#"<part id="P1">
  <measure number="1">
    <attributes>
      <divisions>1</divisions>
      <key>
        <fifths>0</fifths>
      </key>
      <time>
        <beats>4</beats>
        <beat-type>4</beat-type>
      </time>
      <clef>
        <sign>G</sign>
        <line>2</line>
      </clef>
    </attributes>
    <note>
      <pitch>
        <step>C</step>
        <octave>4</octave>
      </pitch>
      <duration>4</duration>
      <type>whole</type>
    </note>
  </measure>
</part>"#;
		assert_eq!(to_string(&written).unwrap(), expected);
		assert_eq!(round_trip(&part, 1), part);
	}

	#[test]
	fn zero_duration_becomes_one_division() {
		let mut part = PartData::new("P1", "One");
		part.measures.push(MeasureData {
			number: "1".into(),
			notes: vec![
				NoteData::pitched(0, pitch(StepEnum::C, 4), NoteTypeValue::Quarter, 0),
				NoteData::pitched(1, pitch(StepEnum::D, 4), NoteTypeValue::Quarter, 1),
			],
			..MeasureData::default()
		});
		let read = round_trip(&part, 1);
		let notes: Vec<_> = read.measures[0].notes.iter().map(|note| (note.tick_position, note.duration_ticks)).collect();
		assert_eq!(notes, [(0, 1), (1, 1)]);
	}

	#[test]
	fn voices_use_backup() {
		let mut upper = NoteData::pitched(0, pitch(StepEnum::E, 5), NoteTypeValue::Half, 4);
		upper.voice = Some("1".into());
		let mut upper2 = NoteData::pitched(4, pitch(StepEnum::D, 5), NoteTypeValue::Half, 4);
		upper2.voice = Some("1".into());
		let mut lower = NoteData::pitched(0, pitch(StepEnum::C, 4), NoteTypeValue::Whole, 8);
		lower.voice = Some("2".into());
		let mut part = PartData::new("P1", "One");
		part.measures.push(MeasureData {
			number: "1".into(),
			notes: vec![upper, upper2, lower],
			..MeasureData::default()
		});
		let written = write_part(&part, XsIdRef::from(&XsId::new("P1").unwrap()), 2);
		let backups: Vec<f64> = written.measures[0]
			.music_data
			.iter()
			.filter_map(|item| match item {
				MusicDataChoice::Backup(backup) => Some(backup.duration.value.to_f64()),
				_ => None,
			})
			.collect();
		assert_eq!(backups, [8.0]);
		assert_eq!(round_trip(&part, 2), part);
	}

	#[test]
	fn chords_rests_and_grace_notes() {
		let mut grace = NoteData::pitched(0, pitch(StepEnum::B, 4), NoteTypeValue::Eighth, 0);
		grace.is_grace = true;
		let root = NoteData::pitched(0, pitch(StepEnum::C, 5), NoteTypeValue::Half, 2);
		let mut third = NoteData::pitched(0, PitchData { alter: -1, ..pitch(StepEnum::E, 5) }, NoteTypeValue::Half, 2);
		third.is_chord = true;
		third.accidental = Some(AccidentalValue::Flat);
		let mut rest = NoteData::rest(2, Some(NoteTypeValue::Quarter), 1);
		rest.duration_dots = 1;
		let mut part = PartData::new("P1", "One");
		part.measures.push(MeasureData {
			number: "1".into(),
			notes: vec![grace, root, third, rest],
			..MeasureData::default()
		});
		assert_eq!(round_trip(&part, 1), part);
	}

	#[test]
	fn ties_and_beams() {
		let mut first = NoteData::pitched(0, pitch(StepEnum::G, 4), NoteTypeValue::Eighth, 1);
		first.tie_start = true;
		first.beams = vec![BeamValue::Begin];
		let mut second = NoteData::pitched(1, pitch(StepEnum::G, 4), NoteTypeValue::Eighth, 1);
		second.tie_stop = true;
		second.beams = vec![BeamValue::End];
		let mut part = PartData::new("P1", "One");
		part.measures.push(MeasureData {
			number: "1".into(),
			notes: vec![first, second],
			..MeasureData::default()
		});
		let written = write_part(&part, XsIdRef::from(&XsId::new("P1").unwrap()), 2);
		let note = written.measures[0]
			.music_data
			.iter()
			.find_map(|item| match item {
				MusicDataChoice::Note(note) => Some(note),
				_ => None,
			})
			.unwrap();
		assert_eq!(note.notations.len(), 1);
		assert_eq!(note.beams[0].attributes.number, BeamLevel::new(1).ok());
		assert_eq!(round_trip(&part, 2), part);
	}

	#[test]
	fn directions_and_barlines() {
		let mut part = PartData::new("P1", "One");
		part.measures.push(MeasureData {
			number: "1".into(),
			barlines: vec![
				BarlineData {
					location: RightLeftMiddle::Left,
					style: Some(BarStyleEnum::HeavyLight),
					repeat: Some(BackwardForward::Forward),
				},
				BarlineData {
					location: RightLeftMiddle::Right,
					style: Some(BarStyleEnum::LightHeavy),
					repeat: None,
				},
			],
			notes: vec![
				NoteData::pitched(0, pitch(StepEnum::A, 4), NoteTypeValue::Half, 2),
				NoteData::pitched(2, pitch(StepEnum::B, 4), NoteTypeValue::Half, 2),
			],
			directions: vec![
				DirectionData {
					tick_position: 0,
					placement: Some(AboveBelow::Above),
					tempo: Some(TempoData {
						beat_unit: NoteTypeValue::Quarter,
						beat_unit_dots: 0,
						per_minute: 96,
					}),
					words: vec!["Allegro".into()],
					..DirectionData::default()
				},
				DirectionData {
					tick_position: 2,
					placement: Some(AboveBelow::Below),
					dynamics: vec!["mf".into()],
					wedge: Some(WedgeType::Crescendo),
					..DirectionData::default()
				},
				DirectionData {
					tick_position: 3,
					wedge: Some(WedgeType::Stop),
					..DirectionData::default()
				},
			],
			..MeasureData::default()
		});
		assert_eq!(round_trip(&part, 1), part);
	}

	#[test]
	fn divisions_are_rescaled() {
		let mut part = PartData::new("P1", "One");
		part.measures.push(MeasureData {
			number: "1".into(),
			notes: vec![
				NoteData::pitched(0, pitch(StepEnum::C, 4), NoteTypeValue::Quarter, 4),
				NoteData::pitched(4, pitch(StepEnum::D, 4), NoteTypeValue::Quarter, 4),
			],
			..MeasureData::default()
		});
		let written = write_part(&part, XsIdRef::from(&XsId::new("P1").unwrap()), 4);
		let mut read = PartData::default();
		read_part(&written, &mut TickScale::new(8), &mut read);
		let ticks: Vec<_> = read.measures[0].notes.iter().map(|note| (note.tick_position, note.duration_ticks)).collect();
		assert_eq!(ticks, [(0, 8), (8, 8)]);
		assert_eq!(first_divisions(&[written]), Some(4.0));
	}

	#[test]
	fn bass_clef_on_second_staff() {
		let mut low = NoteData::pitched(0, pitch(StepEnum::C, 3), NoteTypeValue::Whole, 4);
		low.staff = 2;
		let mut part = PartData::new("P1", "Piano");
		part.measures.push(MeasureData {
			number: "1".into(),
			clef: Some(ClefData::bass()),
			notes: vec![NoteData::pitched(0, pitch(StepEnum::C, 5), NoteTypeValue::Whole, 4), low],
			..MeasureData::default()
		});
		let written = write_part(&part, XsIdRef::from(&XsId::new("P1").unwrap()), 1);
		match &written.measures[0].music_data[0] {
			MusicDataChoice::Properties(properties) => {
				assert_eq!(properties.staves.as_ref().map(|staves| staves.value.value()), Some(2));
				assert_eq!(properties.clefs[0].sign.value, ClefSign::F);
			},
			other => panic!("unexpected {:?}", other),
		}
		assert_eq!(round_trip(&part, 1), part);
	}
}
