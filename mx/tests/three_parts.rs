use mx::{
	api::{
		ClefData,
		KeyData,
		MeasureData,
		MusicXmlVersion,
		NoteData,
		PageTextData,
		PartData,
		PitchData,
		ScoreData,
		TimeSignatureData,
	},
	core::values::{
		NoteTypeValue,
		StepEnum,
	},
	mapping::{
		read_score,
		write_score,
	},
};
use pretty_assertions::assert_eq;

type Note = (StepEnum, u8, NoteTypeValue, u32);

fn measure(number: u32, beats: u32, notes: &[Note]) -> MeasureData {
	let mut tick = 0;
	let notes = notes
		.iter()
		.map(|&(step, octave, name, ticks)| {
			let note = NoteData::pitched(tick, PitchData { step, alter: 0, octave }, name, ticks);
			tick += ticks;
			note
		})
		.collect();
	MeasureData {
		number: number.to_string(),
		key: Some(KeyData::default()),
		time: Some(TimeSignatureData {
			beats,
			beat_type: 4,
			symbol: None,
		}),
		clef: Some(ClefData::treble()),
		notes,
		..MeasureData::default()
	}
}

fn part(id: &str, name: &str, measures: [&[Note]; 3]) -> PartData {
	let mut part = PartData::new(id, name);
	part.measures = measures
		.iter()
		.zip([4, 4, 2])
		.enumerate()
		.map(|(index, (notes, beats))| measure(index as u32 + 1, beats, notes))
		.collect();
	part
}

fn simple_measures() -> ScoreData {
	use NoteTypeValue::{
		Half,
		Quarter,
		Whole,
	};
	use StepEnum::*;

	ScoreData {
		music_xml_version: MusicXmlVersion::ThreePointZero,
		work_title: "Simple Measures".into(),
		page_text_items: vec![PageTextData::new("Matthew James Briggs", "composer")],
		parts: vec![
			part(
				"PARTONE",
				"Part One",
				[&[(C, 4, Whole, 4)], &[(D, 4, Whole, 4)], &[(E, 4, Half, 2)]],
			),
			part(
				"A2",
				"Part Two",
				[
					&[(C, 5, Quarter, 1), (B, 4, Quarter, 1), (A, 4, Quarter, 1), (G, 4, Quarter, 1)],
					&[(A, 4, Whole, 4)],
					&[(A, 4, Quarter, 1), (F, 4, Quarter, 1)],
				],
			),
			part(
				"P3",
				"Part Three",
				[
					&[(A, 3, Quarter, 1), (F, 3, Quarter, 1), (G, 3, Quarter, 1), (A, 3, Quarter, 1)],
					&[(B, 3, Quarter, 1), (C, 4, Quarter, 1), (B, 3, Quarter, 1), (A, 3, Quarter, 1)],
					&[(G, 3, Quarter, 1), (F, 3, Quarter, 1)],
				],
			),
		],
		ticks_per_quarter: 1,
		..ScoreData::default()
	}
}

#[test]
fn first_measure_carries_properties() {
	let text = write_score(&simple_measures()).unwrap();
	let expected = r#"  <part id="PARTONE">
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
    </measure>"#;
	assert!(text.contains(expected), "{}", text);
	assert_eq!(text.matches("<divisions>").count(), 3);
	assert!(text.contains("<beats>2</beats>"));
}

#[test]
fn header_text() {
	let text = write_score(&simple_measures()).unwrap();
	assert!(text.contains("<!DOCTYPE score-partwise"));
	assert!(text.contains(r#"<score-partwise version="3.0">"#), "{}", text);
	assert!(text.contains("<work-title>Simple Measures</work-title>"));
	assert!(text.contains("<credit-type>composer</credit-type>"));
	assert!(text.contains("<credit-words>Matthew James Briggs</credit-words>"));
	for (id, name) in [("PARTONE", "Part One"), ("A2", "Part Two"), ("P3", "Part Three")] {
		assert!(text.contains(&format!(r#"<score-part id="{}">"#, id)));
		assert!(text.contains(&format!("<part-name>{}</part-name>", name)));
		assert!(text.contains(&format!(r#"<part id="{}">"#, id)));
	}
	let part_list = text.find("<part-list>").unwrap();
	let first_part = text.find(r#"<part id="PARTONE">"#).unwrap();
	assert!(part_list < first_part);
}

#[test]
fn reads_back() {
	let score = simple_measures();
	let text = write_score(&score).unwrap();
	let (read, diagnostics) = read_score(&text).unwrap();
	assert!(diagnostics.is_empty(), "{}", diagnostics);
	assert_eq!(read, score);
	assert_eq!(read.num_measures(), 3);
	assert_eq!(read.num_staves_per_system(), 3);
}

#[test]
fn text_is_stable() {
	let text = write_score(&simple_measures()).unwrap();
	let (read, _) = read_score(&text).unwrap();
	assert_eq!(write_score(&read).unwrap(), text);
}
