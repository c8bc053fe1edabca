//! Directions (words, dynamics, wedges, tempo marks, ...) and playback sound

use crate::core::{
	elements::{
		Dynamics,
		FontAttributes,
		PrintObjectAttributes,
		PrintStyleAlignAttributes,
		Staff,
		TextFormattingAttributes,
		Voice,
	},
	values::{
		AboveBelow,
		Color,
		DivisionsValue,
		FontSize,
		FontStyle,
		FontWeight,
		LeftCenterRight,
		NonNegativeDecimal,
		NoteTypeValue,
		NumberLevel,
		PedalType,
		StartStopContinue,
		TenthsValue,
		Valign,
		WedgeType,
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

value_element!(Rehearsal(XsString) with TextFormattingAttributes);
empty_element!(Segno with PrintStyleAlignAttributes);
empty_element!(Coda with PrintStyleAlignAttributes);
value_element!(Words(XsString) with TextFormattingAttributes);

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct WedgeAttributes {
	pub r#type: WedgeType,
	pub number: Option<NumberLevel>,
	pub spread: Option<TenthsValue>,
	pub niente: Option<YesNo>,
	pub default_x: Option<TenthsValue>,
	pub default_y: Option<TenthsValue>,
	pub relative_x: Option<TenthsValue>,
	pub relative_y: Option<TenthsValue>,
	pub color: Option<Color>,
}

empty_element! {
	/// Crescendo or diminuendo hairpin
	Wedge with WedgeAttributes
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct DashesAttributes {
	pub r#type: StartStopContinue,
	pub number: Option<NumberLevel>,
	pub default_x: Option<TenthsValue>,
	pub default_y: Option<TenthsValue>,
	pub relative_x: Option<TenthsValue>,
	pub relative_y: Option<TenthsValue>,
	pub color: Option<Color>,
}

empty_element!(Dashes with DashesAttributes);

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct PedalAttributes {
	pub r#type: PedalType,
	pub line: Option<YesNo>,
	pub sign: Option<YesNo>,
	pub default_x: Option<TenthsValue>,
	pub default_y: Option<TenthsValue>,
	pub relative_x: Option<TenthsValue>,
	pub relative_y: Option<TenthsValue>,
	pub color: Option<Color>,
}

empty_element!(Pedal with PedalAttributes);

value_element!(BeatUnit(NoteTypeValue));
empty_element!(BeatUnitDot);
value_element!(PerMinute(XsString) with FontAttributes);

#[derive(Inner, Clone, Debug, Default, PartialEq)]
pub struct MetronomeBeat {
	pub beat_unit: BeatUnit,
	pub beat_unit_dots: Vec<BeatUnitDot>,
}

#[derive(Inner, Clone, Debug, PartialEq)]
pub enum MetronomeTempo {
	PerMinute(PerMinute),
	BeatUnit(MetronomeBeat),
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct MetronomeAttributes {
	pub parentheses: Option<YesNo>,
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
}

/// Tempo mark: a beat unit equals a number per minute or another beat unit
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Metronome {
	#[mx_data(attributes)]
	pub attributes: MetronomeAttributes,
	pub beat: MetronomeBeat,
	pub tempo: MetronomeTempo,
}

impl Metronome {
	/// `beat_unit` (with `dots`) = `per_minute`
	pub fn per_minute(beat_unit: NoteTypeValue, dots: usize, per_minute: &str) -> Self {
		Self {
			attributes: MetronomeAttributes::default(),
			beat: MetronomeBeat {
				beat_unit: BeatUnit::new(beat_unit),
				beat_unit_dots: vec![BeatUnitDot; dots],
			},
			tempo: MetronomeTempo::PerMinute(PerMinute::new(XsString::from(per_minute))),
		}
	}
}

value_element!(OtherDirection(XsString) with PrintObjectAttributes);

#[derive(Inner, Clone, Debug, PartialEq)]
pub enum DirectionTypeChoice {
	Rehearsals(Vec<Rehearsal>),
	Segnos(Vec<Segno>),
	Codas(Vec<Coda>),
	Words(Vec<Words>),
	Wedge(Wedge),
	Dynamics(Vec<Dynamics>),
	Dashes(Dashes),
	Pedal(Pedal),
	Metronome(Metronome),
	OtherDirection(OtherDirection),
}

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct DirectionType {
	pub choice: DirectionTypeChoice,
}

impl From<DirectionTypeChoice> for DirectionType {
	fn from(choice: DirectionTypeChoice) -> Self {
		Self { choice }
	}
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct OffsetAttributes {
	pub sound: Option<YesNo>,
}

value_element! {
	/// Position relative to the current musical location, in divisions
	Offset(DivisionsValue) with OffsetAttributes
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct SoundAttributes {
	pub tempo: Option<NonNegativeDecimal>,
	pub dynamics: Option<NonNegativeDecimal>,
	pub dacapo: Option<YesNo>,
	pub segno: Option<XsToken>,
	pub dalsegno: Option<XsToken>,
	pub coda: Option<XsToken>,
	pub tocoda: Option<XsToken>,
	pub divisions: Option<DivisionsValue>,
	pub forward_repeat: Option<YesNo>,
	pub fine: Option<XsToken>,
	pub time_only: Option<XsToken>,
	pub pizzicato: Option<YesNo>,
}

/// Playback data; MIDI details inside are skipped
#[derive(Element, Clone, Debug, Default, PartialEq)]
#[mx_data(ignore_unknown)]
pub struct Sound {
	#[mx_data(attributes)]
	pub attributes: SoundAttributes,
	pub offset: Option<Offset>,
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct DirectionAttributes {
	pub placement: Option<AboveBelow>,
	pub directive: Option<YesNo>,
}

/// Musical direction not attached to a note
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Direction {
	#[mx_data(attributes)]
	pub attributes: DirectionAttributes,
	pub direction_types: Vec<DirectionType>,
	pub offset: Option<Offset>,
	pub voice: Option<Voice>,
	pub staff: Option<Staff>,
	pub sound: Option<Sound>,
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::core::elements::DynamicsChoice;
	use mx_data::{
		diagnostics::Diagnostics,
		parser::ElementExt,
		serializer::to_string,
	};
	use pretty_assertions::assert_eq;

	#[test]
	fn metronome() {
		let direction = Direction {
			attributes: DirectionAttributes {
				placement: Some(AboveBelow::Above),
				directive: None,
			},
			direction_types: vec![DirectionTypeChoice::Metronome(Metronome::per_minute(NoteTypeValue::Quarter, 1, "72")).into()],
			..Direction::default()
		};
		let expected = r#"<direction placement="above">
  <direction-type>
    <metronome>
      <beat-unit>quarter</beat-unit>
      <beat-unit-dot/>
      <per-minute>72</per-minute>
    </metronome>
  </direction-type>
</direction>"#;
		assert_eq!(to_string(&direction).unwrap(), expected);

		let mut diagnostics = Diagnostics::new();
		let (parsed, ok) = Direction::from_xml_str(expected, &mut diagnostics).unwrap();
		assert!(ok, "{}", diagnostics);
		assert_eq!(parsed, direction);
	}

	#[test]
	fn words_and_dynamics() {
		let text = r#"<direction>
  <direction-type>
    <words font-style="italic">dolce</words>
    <words>e cantabile</words>
  </direction-type>
  <direction-type>
    <dynamics>
      <pp/>
    </dynamics>
  </direction-type>
  <staff>2</staff>
</direction>"#;
		let mut diagnostics = Diagnostics::new();
		let (direction, ok) = Direction::from_xml_str(text, &mut diagnostics).unwrap();
		assert!(ok, "{}", diagnostics);
		match &direction.direction_types[0].choice {
			DirectionTypeChoice::Words(words) => {
				assert_eq!(words.len(), 2);
				assert_eq!(words[1].value.as_str(), "e cantabile");
			},
			other => panic!("unexpected {:?}", other),
		}
		match &direction.direction_types[1].choice {
			DirectionTypeChoice::Dynamics(dynamics) => assert_eq!(dynamics[0].marks, [DynamicsChoice::from_name("pp")]),
			other => panic!("unexpected {:?}", other),
		}
		assert_eq!(to_string(&direction).unwrap(), text);
	}

	#[test]
	fn sound_skips_midi_details() {
		let mut diagnostics = Diagnostics::new();
		let (sound, ok) = Sound::from_xml_str(
			r#"<sound tempo="96" damper-pedal="yes"><midi-instrument id="P1-I1"/></sound>"#,
			&mut diagnostics,
		)
		.unwrap();
		assert!(ok);
		assert!(diagnostics.is_empty());
		assert_eq!(sound.attributes.tempo.map(|tempo| tempo.to_f64()), Some(96.0));
	}
}
