//! Barlines, repeats and endings; cursor moves (`<backup>`, `<forward>`)

use crate::core::{
	elements::{
		Coda,
		ColorAttributes,
		Duration,
		Fermata,
		Segno,
		Staff,
		Voice,
	},
	values::{
		BackwardForward,
		BarStyleEnum,
		Color,
		DivisionsValue,
		FontSize,
		FontStyle,
		FontWeight,
		NonNegativeInteger,
		RightLeftMiddle,
		StartStopDiscontinue,
		TenthsValue,
		XsString,
		XsToken,
		YesNo,
	},
};
use mx_data::{
	Attributes,
	Element,
};

value_element!(BarStyle(BarStyleEnum) with ColorAttributes);

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct EndingAttributes {
	pub number: XsToken,
	pub r#type: StartStopDiscontinue,
	pub print_object: Option<YesNo>,
	pub default_x: Option<TenthsValue>,
	pub default_y: Option<TenthsValue>,
	pub relative_x: Option<TenthsValue>,
	pub relative_y: Option<TenthsValue>,
	pub font_family: Option<String>,
	pub font_style: Option<FontStyle>,
	pub font_size: Option<FontSize>,
	pub font_weight: Option<FontWeight>,
	pub color: Option<Color>,
	pub end_length: Option<TenthsValue>,
	pub text_x: Option<TenthsValue>,
	pub text_y: Option<TenthsValue>,
}

value_element! {
	/// Volta bracket; the text may differ from the `number` list
	Ending(XsString) with EndingAttributes
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct RepeatAttributes {
	pub direction: BackwardForward,
	pub times: Option<NonNegativeInteger>,
}

empty_element!(Repeat with RepeatAttributes);

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct BarlineAttributes {
	pub location: Option<RightLeftMiddle>,
	pub segno: Option<XsToken>,
	pub coda: Option<XsToken>,
	pub divisions: Option<DivisionsValue>,
}

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Barline {
	#[mx_data(attributes)]
	pub attributes: BarlineAttributes,
	pub bar_style: Option<BarStyle>,
	pub segno: Option<Segno>,
	pub coda: Option<Coda>,
	pub fermatas: Vec<Fermata>,
	pub ending: Option<Ending>,
	pub repeat: Option<Repeat>,
}

impl Barline {
	/// Barline with a style at a location
	pub fn styled(location: RightLeftMiddle, style: BarStyleEnum) -> Self {
		Self {
			attributes: BarlineAttributes {
				location: Some(location),
				..BarlineAttributes::default()
			},
			bar_style: Some(BarStyle::new(style)),
			..Self::default()
		}
	}
}

/// Move the cursor back in time
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Backup {
	pub duration: Duration,
}

/// Move the cursor forward in time (invisible rest)
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Forward {
	pub duration: Duration,
	pub voice: Option<Voice>,
	pub staff: Option<Staff>,
}

#[cfg(test)]
mod test {
	use super::*;
	use mx_data::{
		diagnostics::Diagnostics,
		parser::ElementExt,
		serializer::to_string,
	};
	use pretty_assertions::assert_eq;

	#[test]
	fn final_barline() {
		let barline = Barline::styled(RightLeftMiddle::Right, BarStyleEnum::LightHeavy);
		assert_eq!(
			to_string(&barline).unwrap(),
			"<barline location=\"right\">\n  <bar-style>light-heavy</bar-style>\n</barline>"
		);
	}

	#[test]
	fn repeat_with_ending() {
		let text = r#"<barline location="left">
  <ending number="1, 2" type="start">1.-2.</ending>
  <repeat direction="forward"/>
</barline>"#;
		let mut diagnostics = Diagnostics::new();
		let (barline, ok) = Barline::from_xml_str(text, &mut diagnostics).unwrap();
		assert!(ok, "{}", diagnostics);
		let ending = barline.ending.as_ref().unwrap();
		assert_eq!(ending.attributes.number.as_str(), "1, 2");
		assert_eq!(ending.value.as_str(), "1.-2.");
		assert_eq!(barline.repeat.as_ref().unwrap().attributes.direction, BackwardForward::Forward);
		assert_eq!(to_string(&barline).unwrap(), text);
	}

	#[test]
	fn backup_needs_duration() {
		let mut diagnostics = Diagnostics::new();
		let (_, ok) = Backup::from_xml_str("<backup/>", &mut diagnostics).unwrap();
		assert!(!ok);

		let mut diagnostics = Diagnostics::new();
		let (forward, ok) = Forward::from_xml_str("<forward><duration>3</duration></forward>", &mut diagnostics).unwrap();
		assert!(ok);
		assert_eq!(forward.duration.value.to_f64(), 3.0);
	}
}
