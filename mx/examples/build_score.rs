//! Build a short two-part score and print it as MusicXML
//!
//! Pass `--timewise` to print the timewise layout instead.

use mx::{
	api::{
		ClefData,
		DirectionData,
		KeyData,
		MeasureData,
		MusicXmlVersion,
		NoteData,
		PageTextData,
		PartData,
		PitchData,
		ScoreData,
		TempoData,
		TimeSignatureData,
	},
	core::{
		values::{
			AboveBelow,
			NoteTypeValue,
			StepEnum,
		},
		DocumentChoice,
	},
	mapping,
};

fn note(tick: u32, step: StepEnum, octave: u8, name: NoteTypeValue, ticks: u32) -> NoteData {
	NoteData::pitched(tick, PitchData { step, alter: 0, octave }, name, ticks)
}

fn dotted(mut note: NoteData) -> NoteData {
	note.duration_dots = 1;
	note
}

fn melody() -> PartData {
	let mut part = PartData::new("P1", "Flute");
	part.abbreviation = "Fl.".into();
	part.measures = vec![
		MeasureData {
			number: "1".into(),
			key: Some(KeyData { fifths: 1, mode: None }),
			time: Some(TimeSignatureData {
				beats: 3,
				beat_type: 4,
				symbol: None,
			}),
			clef: Some(ClefData::treble()),
			notes: vec![
				note(0, StepEnum::G, 4, NoteTypeValue::Quarter, 2),
				note(2, StepEnum::B, 4, NoteTypeValue::Quarter, 2),
				note(4, StepEnum::D, 5, NoteTypeValue::Quarter, 2),
			],
			directions: vec![DirectionData {
				placement: Some(AboveBelow::Above),
				tempo: Some(TempoData {
					beat_unit: NoteTypeValue::Quarter,
					beat_unit_dots: 0,
					per_minute: 96,
				}),
				..DirectionData::default()
			}],
			..MeasureData::default()
		},
		MeasureData {
			number: "2".into(),
			notes: vec![dotted(note(0, StepEnum::G, 5, NoteTypeValue::Half, 6))],
			..MeasureData::default()
		},
	];
	part
}

fn bass() -> PartData {
	let mut part = PartData::new("P2", "Cello");
	part.measures = vec![
		MeasureData {
			number: "1".into(),
			key: Some(KeyData { fifths: 1, mode: None }),
			time: Some(TimeSignatureData {
				beats: 3,
				beat_type: 4,
				symbol: None,
			}),
			clef: Some(ClefData::bass()),
			notes: vec![dotted(note(0, StepEnum::G, 2, NoteTypeValue::Half, 6))],
			..MeasureData::default()
		},
		MeasureData {
			number: "2".into(),
			notes: vec![
				note(0, StepEnum::D, 3, NoteTypeValue::Half, 4),
				NoteData::rest(4, Some(NoteTypeValue::Quarter), 2),
			],
			..MeasureData::default()
		},
	];
	part
}

fn main() {
	let timewise = std::env::args().skip(1).any(|arg| arg == "--timewise");
	let score = ScoreData {
		music_xml_version: MusicXmlVersion::ThreePointZero,
		music_xml_type: if timewise { DocumentChoice::Timewise } else { DocumentChoice::Partwise },
		work_title: "Waltz".into(),
		composer: "Anonymous".into(),
		page_text_items: vec![PageTextData::new("Waltz", "title")],
		parts: vec![melody(), bass()],
		ticks_per_quarter: 2,
		..ScoreData::default()
	};

	match mapping::write_score(&score) {
		Ok(text) => println!("{}", text),
		Err(e) => {
			eprintln!("failed to write score: {}", e);
			std::process::exit(1);
		},
	}
}
