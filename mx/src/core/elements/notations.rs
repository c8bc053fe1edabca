//! Notations attached to notes: ties, slurs, tuplets, articulations, dynamics and fermatas

use crate::core::{
	elements::{
		EmptyPlacementAttributes,
		FontColorAttributes,
	},
	values::{
		AboveBelow,
		Color,
		FermataShape,
		FontSize,
		FontStyle,
		FontWeight,
		LeftCenterRight,
		NonNegativeInteger,
		NoteTypeValue,
		NumberLevel,
		ShowTuplet,
		StartStop,
		StartStopContinue,
		TenthsValue,
		UpDown,
		UprightInverted,
		Valign,
		XsString,
		YesNo,
	},
};
use mx_data::{
	Attributes,
	Element,
	FixedElement,
	Inner,
};

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct TiedAttributes {
	pub r#type: StartStopContinue,
	pub number: Option<NumberLevel>,
	pub default_x: Option<TenthsValue>,
	pub default_y: Option<TenthsValue>,
	pub relative_x: Option<TenthsValue>,
	pub relative_y: Option<TenthsValue>,
	pub placement: Option<AboveBelow>,
	pub color: Option<Color>,
}

empty_element!(Tied with TiedAttributes);

/// Same attributes as `<tied>`
pub type SlurAttributes = TiedAttributes;

empty_element!(Slur with SlurAttributes);

value_element!(TupletNumber(NonNegativeInteger) with FontColorAttributes);
value_element!(TupletType(NoteTypeValue) with FontColorAttributes);
empty_element!(TupletDot with FontColorAttributes);

/// Displayed actual notes of a tuplet
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct TupletActual {
	pub tuplet_number: Option<TupletNumber>,
	pub tuplet_type: Option<TupletType>,
	pub tuplet_dots: Vec<TupletDot>,
}

/// Displayed normal notes of a tuplet
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct TupletNormal {
	pub tuplet_number: Option<TupletNumber>,
	pub tuplet_type: Option<TupletType>,
	pub tuplet_dots: Vec<TupletDot>,
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct TupletAttributes {
	pub r#type: StartStop,
	pub number: Option<NumberLevel>,
	pub bracket: Option<YesNo>,
	pub show_number: Option<ShowTuplet>,
	pub show_type: Option<ShowTuplet>,
	pub default_x: Option<TenthsValue>,
	pub default_y: Option<TenthsValue>,
	pub relative_x: Option<TenthsValue>,
	pub relative_y: Option<TenthsValue>,
	pub placement: Option<AboveBelow>,
}

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Tuplet {
	#[mx_data(attributes)]
	pub attributes: TupletAttributes,
	pub tuplet_actual: Option<TupletActual>,
	pub tuplet_normal: Option<TupletNormal>,
}

empty_element!(Accent with EmptyPlacementAttributes);
empty_element!(Staccato with EmptyPlacementAttributes);
empty_element!(Tenuto with EmptyPlacementAttributes);
empty_element!(DetachedLegato with EmptyPlacementAttributes);
empty_element!(Staccatissimo with EmptyPlacementAttributes);
empty_element!(Spiccato with EmptyPlacementAttributes);
empty_element!(Stress with EmptyPlacementAttributes);
empty_element!(Unstress with EmptyPlacementAttributes);

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct StrongAccentAttributes {
	pub r#type: Option<UpDown>,
	pub default_x: Option<TenthsValue>,
	pub default_y: Option<TenthsValue>,
	pub relative_x: Option<TenthsValue>,
	pub relative_y: Option<TenthsValue>,
	pub color: Option<Color>,
	pub placement: Option<AboveBelow>,
}

empty_element!(StrongAccent with StrongAccentAttributes);

#[derive(Inner, Clone, Debug, PartialEq)]
pub enum ArticulationsChoice {
	Accent(Accent),
	StrongAccent(StrongAccent),
	Staccato(Staccato),
	Tenuto(Tenuto),
	DetachedLegato(DetachedLegato),
	Staccatissimo(Staccatissimo),
	Spiccato(Spiccato),
	Stress(Stress),
	Unstress(Unstress),
}

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Articulations {
	pub items: Vec<ArticulationsChoice>,
}

empty_element!(P);
empty_element!(Pp);
empty_element!(Ppp);
empty_element!(F);
empty_element!(Ff);
empty_element!(Fff);
empty_element!(Mp);
empty_element!(Mf);
empty_element!(Sf);
empty_element!(Sfz);
empty_element!(Sfp);
empty_element!(Fp);
empty_element!(Rf);
empty_element!(Rfz);
empty_element!(Fz);
value_element!(OtherDynamics(XsString));

/// One dynamics marking
#[derive(Inner, Clone, Debug, PartialEq)]
pub enum DynamicsChoice {
	P(P),
	Pp(Pp),
	Ppp(Ppp),
	F(F),
	Ff(Ff),
	Fff(Fff),
	Mp(Mp),
	Mf(Mf),
	Sf(Sf),
	Sfz(Sfz),
	Sfp(Sfp),
	Fp(Fp),
	Rf(Rf),
	Rfz(Rfz),
	Fz(Fz),
	OtherDynamics(OtherDynamics),
}

impl DynamicsChoice {
	/// Marking text (`"mf"`, `"sfz"`, ...; the text itself for other dynamics)
	pub fn name(&self) -> &str {
		match self {
			Self::P(_) => P::TAG,
			Self::Pp(_) => Pp::TAG,
			Self::Ppp(_) => Ppp::TAG,
			Self::F(_) => F::TAG,
			Self::Ff(_) => Ff::TAG,
			Self::Fff(_) => Fff::TAG,
			Self::Mp(_) => Mp::TAG,
			Self::Mf(_) => Mf::TAG,
			Self::Sf(_) => Sf::TAG,
			Self::Sfz(_) => Sfz::TAG,
			Self::Sfp(_) => Sfp::TAG,
			Self::Fp(_) => Fp::TAG,
			Self::Rf(_) => Rf::TAG,
			Self::Rfz(_) => Rfz::TAG,
			Self::Fz(_) => Fz::TAG,
			Self::OtherDynamics(other) => other.value.as_str(),
		}
	}

	/// Marking for a name; unknown names become other dynamics
	pub fn from_name(name: &str) -> Self {
		match name {
			"p" => Self::P(P),
			"pp" => Self::Pp(Pp),
			"ppp" => Self::Ppp(Ppp),
			"f" => Self::F(F),
			"ff" => Self::Ff(Ff),
			"fff" => Self::Fff(Fff),
			"mp" => Self::Mp(Mp),
			"mf" => Self::Mf(Mf),
			"sf" => Self::Sf(Sf),
			"sfz" => Self::Sfz(Sfz),
			"sfp" => Self::Sfp(Sfp),
			"fp" => Self::Fp(Fp),
			"rf" => Self::Rf(Rf),
			"rfz" => Self::Rfz(Rfz),
			"fz" => Self::Fz(Fz),
			other => Self::OtherDynamics(OtherDynamics::new(XsString::from(other))),
		}
	}
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct DynamicsAttributes {
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
	pub placement: Option<AboveBelow>,
}

/// Dynamics markings, used both as notation and as direction type
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Dynamics {
	#[mx_data(attributes)]
	pub attributes: DynamicsAttributes,
	pub marks: Vec<DynamicsChoice>,
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct FermataAttributes {
	pub r#type: Option<UprightInverted>,
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

value_element! {
	/// Fermata; an empty shape means the normal one
	Fermata(FermataShape) with FermataAttributes
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct ArpeggiateAttributes {
	pub number: Option<NumberLevel>,
	pub direction: Option<UpDown>,
	pub default_x: Option<TenthsValue>,
	pub default_y: Option<TenthsValue>,
	pub relative_x: Option<TenthsValue>,
	pub relative_y: Option<TenthsValue>,
	pub placement: Option<AboveBelow>,
	pub color: Option<Color>,
}

empty_element!(Arpeggiate with ArpeggiateAttributes);

#[derive(Inner, Clone, Debug, PartialEq)]
pub enum NotationsChoice {
	Tied(Tied),
	Slur(Slur),
	Tuplet(Tuplet),
	Articulations(Articulations),
	Dynamics(Dynamics),
	Fermata(Fermata),
	Arpeggiate(Arpeggiate),
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct NotationsAttributes {
	pub print_object: Option<YesNo>,
}

/// Musical notations attached to a note
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Notations {
	#[mx_data(attributes)]
	pub attributes: NotationsAttributes,
	pub items: Vec<NotationsChoice>,
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
	fn tuplet_actual() {
		let mut actual = TupletActual::default();
		assert_eq!(to_string(&actual).unwrap(), "<tuplet-actual/>");

		actual.tuplet_number = Some(TupletNumber::new(NonNegativeInteger::new(2).unwrap()));
		actual.tuplet_type = Some(TupletType::new(NoteTypeValue::Sixteenth));
		actual.tuplet_dots.push(TupletDot::default());
		let expected = r#"<tuplet-actual>
  <tuplet-number>2</tuplet-number>
  <tuplet-type>16th</tuplet-type>
  <tuplet-dot/>
</tuplet-actual>"#;
		assert_eq!(to_string(&actual).unwrap(), expected);

		let mut diagnostics = Diagnostics::new();
		let (parsed, ok) = TupletActual::from_xml_str(expected, &mut diagnostics).unwrap();
		assert!(ok, "{}", diagnostics);
		assert_eq!(parsed, actual);
	}

	#[test]
	fn fermata_shape() {
		assert_eq!(to_string(&Fermata::default()).unwrap(), "<fermata/>");
		let mut fermata = Fermata::new(FermataShape::Angled);
		fermata.attributes.r#type = Some(UprightInverted::Inverted);
		assert_eq!(to_string(&fermata).unwrap(), r#"<fermata type="inverted">angled</fermata>"#);
	}

	#[test]
	fn dynamics_names() {
		for name in ["p", "mf", "sfz", "fz"] {
			assert_eq!(DynamicsChoice::from_name(name).name(), name);
		}
		let other = DynamicsChoice::from_name("sffz");
		assert!(matches!(other, DynamicsChoice::OtherDynamics(_)));
		assert_eq!(other.name(), "sffz");

		let dynamics = Dynamics {
			marks: vec![DynamicsChoice::from_name("mf")],
			..Dynamics::default()
		};
		assert_eq!(to_string(&dynamics).unwrap(), "<dynamics>\n  <mf/>\n</dynamics>");
	}

	#[test]
	fn notations_in_any_order() {
		let text = r#"<notations>
  <tied type="start"/>
  <fermata/>
  <tuplet type="start" bracket="yes"/>
  <articulations>
    <staccato placement="below"/>
    <strong-accent type="up"/>
  </articulations>
</notations>"#;
		let mut diagnostics = Diagnostics::new();
		let (notations, ok) = Notations::from_xml_str(text, &mut diagnostics).unwrap();
		assert!(ok, "{}", diagnostics);
		assert_eq!(notations.items.len(), 4);
		assert_eq!(to_string(&notations).unwrap(), text);
	}
}
