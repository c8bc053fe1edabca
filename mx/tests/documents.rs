use mx::{
	api::ScoreData,
	core::{
		Document,
		DocumentChoice,
	},
	mapping::{
		from_document,
		read_score,
		write_score,
	},
};
use mx_data::{
	diagnostics::{
		DiagnosticKind,
		Severity,
	},
	parser::ParseOptions,
	Error,
};
use pretty_assertions::assert_eq;

const TWO_VOICES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!DOCTYPE score-partwise PUBLIC "-//Recordare//DTD MusicXML 3.0 Partwise//EN" "http://www.musicxml.org/dtds/partwise.dtd">
<score-partwise version="3.0">
  <part-list>
    <score-part id="P1">
      <part-name>Piano</part-name>
    </score-part>
  </part-list>
  <part id="P1">
    <measure number="1">
      <attributes>
        <divisions>2</divisions>
      </attributes>
      <note>
        <pitch>
          <step>C</step>
          <octave>4</octave>
        </pitch>
        <duration>8</duration>
        <voice>1</voice>
        <type>whole</type>
      </note>
      <note>
        <chord/>
        <pitch>
          <step>E</step>
          <octave>4</octave>
        </pitch>
        <duration>8</duration>
        <voice>1</voice>
        <type>whole</type>
      </note>
      <backup>
        <duration>8</duration>
      </backup>
      <note>
        <rest/>
        <duration>4</duration>
        <voice>2</voice>
        <type>half</type>
      </note>
      <note>
        <pitch>
          <step>G</step>
          <octave>3</octave>
        </pitch>
        <duration>4</duration>
        <voice>2</voice>
        <type>half</type>
      </note>
    </measure>
  </part>
</score-partwise>
"#;

#[test]
fn chords_and_voices() {
	let (score, diagnostics) = read_score(TWO_VOICES).unwrap();
	assert!(diagnostics.is_empty(), "{}", diagnostics);
	assert_eq!(score.ticks_per_quarter, 2);
	assert_eq!(score.parts.len(), 1);
	assert_eq!(score.parts[0].name, "Piano");

	let notes = &score.parts[0].measures[0].notes;
	let positions: Vec<_> = notes.iter().map(|note| (note.tick_position, note.duration_ticks)).collect();
	assert_eq!(positions, [(0, 8), (0, 8), (0, 4), (4, 4)]);
	let chords: Vec<_> = notes.iter().map(|note| note.is_chord).collect();
	assert_eq!(chords, [false, true, false, false]);
	assert!(notes[2].is_rest);
	assert_eq!(notes[3].voice.as_deref(), Some("2"));
}

#[test]
fn unknown_element_is_skipped() {
	let text = TWO_VOICES.replace(
		"      <backup>",
		"      <harmony>\n        <root>\n          <root-step>C</root-step>\n        </root>\n      </harmony>\n      <backup>",
	);
	let (score, diagnostics) = read_score(&text).unwrap();
	let unknown: Vec<_> = diagnostics.of_kind(DiagnosticKind::UnknownElement).collect();
	assert_eq!(unknown.len(), 1);
	assert_eq!(unknown[0].severity, Severity::Warning);
	assert!(unknown[0].message.contains("harmony"));
	assert!(!diagnostics.has_errors());
	// the rest of the measure is unaffected
	assert_eq!(score.parts[0].measures[0].notes.len(), 4);

	let (_, diagnostics) = Document::from_xml_str_with(&text, ParseOptions { strict: true }).unwrap();
	assert!(diagnostics.has_errors());
	let unknown: Vec<_> = diagnostics.of_kind(DiagnosticKind::UnknownElement).collect();
	assert_eq!(unknown[0].severity, Severity::Error);
}

#[test]
fn timewise() {
	let text = r#"<?xml version="1.0" encoding="UTF-8"?>
<score-timewise>
  <part-list>
    <score-part id="P1">
      <part-name>Voice</part-name>
    </score-part>
  </part-list>
  <measure number="1">
    <part id="P1">
      <attributes>
        <divisions>1</divisions>
      </attributes>
      <note>
        <pitch>
          <step>A</step>
          <octave>4</octave>
        </pitch>
        <duration>4</duration>
        <type>whole</type>
      </note>
    </part>
  </measure>
  <measure number="2">
    <part id="P1">
      <note>
        <rest/>
        <duration>4</duration>
      </note>
    </part>
  </measure>
</score-timewise>
"#;
	let (document, diagnostics) = Document::from_xml_str(text).unwrap();
	assert!(diagnostics.is_empty(), "{}", diagnostics);
	assert_eq!(document.choice(), DocumentChoice::Timewise);

	let score = from_document(&document);
	assert_eq!(score.music_xml_type, DocumentChoice::Timewise);
	let measures = &score.parts[0].measures;
	let numbers: Vec<_> = measures.iter().map(|measure| measure.number.as_str()).collect();
	assert_eq!(numbers, ["1", "2"]);
	let rest = &measures[1].notes[0];
	assert!(rest.is_rest);
	assert_eq!(rest.duration_name, None);
	assert_eq!(rest.duration_ticks, 4);

	let partwise = document.clone().into_partwise();
	assert_eq!(partwise.parts.len(), 1);
	assert_eq!(partwise.parts[0].measures.len(), 2);
}

#[test]
fn missing_part_name() {
	let text = TWO_VOICES.replace("      <part-name>Piano</part-name>\n", "");
	let (_, diagnostics) = read_score(&text).unwrap();
	let missing: Vec<_> = diagnostics.of_kind(DiagnosticKind::MissingElement).collect();
	assert_eq!(missing.len(), 1);
	assert!(missing[0].path.ends_with("score-part"), "{}", missing[0].path);
	assert!(diagnostics.has_errors());
}

#[test]
fn huge_durations_saturate() {
	let note = |step: &str| {
		format!(
			"      <note>\n        <pitch>\n          <step>{}</step>\n          <octave>4</octave>\n        </pitch>\n        <duration>3000000000</duration>\n      </note>\n",
			step
		)
	};
	let text = format!(
		r#"<score-partwise>
  <part-list>
    <score-part id="P1">
      <part-name>Organ</part-name>
    </score-part>
  </part-list>
  <part id="P1">
    <measure number="1">
      <attributes>
        <divisions>1</divisions>
      </attributes>
{}{}      <forward>
        <duration>3000000000</duration>
      </forward>
{}    </measure>
  </part>
</score-partwise>
"#,
		note("C"),
		note("D"),
		note("E")
	);
	let (score, diagnostics) = read_score(&text).unwrap();
	assert!(diagnostics.is_empty(), "{}", diagnostics);
	let positions: Vec<_> = score.parts[0].measures[0]
		.notes
		.iter()
		.map(|note| note.tick_position)
		.collect();
	assert_eq!(positions, [0, 3_000_000_000, u32::MAX]);
	assert_eq!(score.parts[0].measures[0].notes[2].end_tick(), u32::MAX);
}

#[test]
fn empty_score() {
	let text = write_score(&ScoreData::default()).unwrap();
	assert!(text.contains(r#"<score-part id="">"#), "{}", text);
	let (read, diagnostics) = read_score(&text).unwrap();
	assert_eq!(read, ScoreData::default());
	// the placeholder's empty id is the only problem
	assert_eq!(diagnostics.len(), 1, "{}", diagnostics);
	assert_eq!(diagnostics.of_kind(DiagnosticKind::InvalidValue).count(), 1);
}

#[test]
fn ill_formed_text() {
	let text = "<score-partwise>\n  <part-list>\n</score-partwise>\n";
	assert!(matches!(read_score(text), Err(Error::Xml { .. })));
}

#[test]
fn unknown_root() {
	let text = "<score-parts><part-list/></score-parts>";
	assert!(matches!(Document::from_xml_str(text), Err(Error::UnexpectedRoot { .. })));
}

#[test]
fn write_to_matches_string() {
	let (document, _) = Document::from_xml_str(TWO_VOICES).unwrap();
	let mut out = Vec::new();
	document.write_to(&mut out).unwrap();
	assert_eq!(String::from_utf8(out).unwrap(), document.to_xml_string().unwrap());
}
