use crate::{
	diagnostics::{
		DiagnosticKind,
		Diagnostics,
		Severity,
	},
	parser::{
		ElementExt,
		XElement,
	},
	serializer::to_string,
	values::{
		Decimal,
		XsString,
	},
};
use pretty_assertions::assert_eq;

crate::value_enum! {
	pub enum YesNo {
		Yes = "yes",
		No = "no",
	}
}

crate::decimal_value! {
	pub struct Size where value >= 0, default 0;
}

#[derive(crate::Attributes, Clone, Debug, Default, PartialEq)]
#[mx_data(crate = "crate")]
pub struct NameAttributes {
	pub size: Option<Size>,
	pub print_object: Option<YesNo>,
	#[mx_data(rename = "xml:lang")]
	pub xml_lang: Option<String>,
}

#[derive(crate::Attributes, Clone, Debug, Default, PartialEq)]
#[mx_data(crate = "crate")]
pub struct IdAttributes {
	pub id: String,
	pub number: Option<u32>,
}

#[derive(crate::Element, Clone, Debug, Default, PartialEq)]
#[mx_data(crate = "crate")]
pub struct Name {
	#[mx_data(attributes)]
	pub attributes: NameAttributes,
	#[mx_data(value)]
	pub value: String,
}

#[derive(crate::Element, Clone, Debug, Default, PartialEq)]
#[mx_data(crate = "crate")]
pub struct Count {
	#[mx_data(value)]
	pub value: u32,
}

#[derive(crate::Element, Clone, Debug, Default, PartialEq)]
#[mx_data(crate = "crate")]
pub struct Flat;

#[derive(crate::Element, Clone, Debug, Default, PartialEq)]
#[mx_data(crate = "crate")]
pub struct Sharp;

#[derive(crate::Element, Clone, Debug, Default, PartialEq)]
#[mx_data(crate = "crate", tag = "free-text")]
pub struct Text {
	#[mx_data(value)]
	pub value: XsString,
}

#[derive(crate::Inner, Clone, Debug, PartialEq)]
#[mx_data(crate = "crate")]
pub enum Sign {
	Flat(Flat),
	Sharp(Sharp),
}

#[derive(crate::Inner, Clone, Debug, Default, PartialEq)]
#[mx_data(crate = "crate")]
pub struct NameCount {
	pub name: Name,
	pub count: Option<Count>,
}

#[derive(crate::Element, Clone, Debug, Default, PartialEq)]
#[mx_data(crate = "crate")]
pub struct Item {
	#[mx_data(attributes)]
	pub attributes: IdAttributes,
	pub names: Vec<NameCount>,
	pub sign: Option<Sign>,
	pub text: Option<Text>,
}

#[derive(crate::Element, Clone, Debug, Default, PartialEq)]
#[mx_data(crate = "crate")]
pub struct Wrapper {
	pub sign: Sign,
}

#[derive(crate::Element, Clone, Debug, Default, PartialEq)]
#[mx_data(crate = "crate", ignore_unknown)]
pub struct Extensible {
	pub count: Option<Count>,
}

fn parse<E: ElementExt>(text: &str) -> (E, bool, Diagnostics) {
	let mut diagnostics = Diagnostics::new();
	let (element, ok) = E::from_xml_str(text, &mut diagnostics).unwrap();
	(element, ok, diagnostics)
}

#[test]
fn empty_element_collapses() {
	assert_eq!(to_string(&Flat).unwrap(), "<flat/>");
	assert_eq!(to_string(&Name::default()).unwrap(), "<name/>");
	let item = Item {
		attributes: IdAttributes {
			id: "P1".to_owned(),
			number: None,
		},
		..Item::default()
	};
	assert_eq!(to_string(&item).unwrap(), r#"<item id="P1"/>"#);
}

#[test]
fn text_value_on_one_line() {
	let name = Name {
		attributes: NameAttributes {
			size: Some(Size::new(Decimal::new(120, 1)).unwrap()),
			print_object: Some(YesNo::No),
			xml_lang: None,
		},
		value: "Bass & Drums".to_owned(),
	};
	assert_eq!(
		to_string(&name).unwrap(),
		r#"<name size="12" print-object="no">Bass &amp; Drums</name>"#
	);
}

#[test]
fn children_are_indented() {
	let item = Item {
		attributes: IdAttributes {
			id: "P1".to_owned(),
			number: Some(3),
		},
		names: vec![
			NameCount {
				name: Name {
					value: "a".to_owned(),
					..Name::default()
				},
				count: Some(Count { value: 2 }),
			},
			NameCount {
				name: Name::default(),
				count: None,
			},
		],
		sign: Some(Sign::Sharp(Sharp)),
		text: None,
	};
	let expected = r#"<item id="P1" number="3">
  <name>a</name>
  <count>2</count>
  <name/>
  <sharp/>
</item>"#;
	assert_eq!(to_string(&item).unwrap(), expected);

	let (parsed, ok, diagnostics) = parse::<Item>(expected);
	assert!(ok, "{}", diagnostics);
	assert!(diagnostics.is_empty());
	assert_eq!(parsed, item);
}

#[test]
fn self_closing_equals_empty_pair() {
	let (a, ok_a, _) = parse::<Item>(r#"<item id="x"><name></name><flat></flat></item>"#);
	let (b, ok_b, _) = parse::<Item>(r#"<item id="x"><name/><flat/></item>"#);
	assert!(ok_a && ok_b);
	assert_eq!(a, b);
	assert_eq!(a.sign, Some(Sign::Flat(Flat)));
}

#[test]
fn choice_default_is_first_variant() {
	assert_eq!(Sign::default(), Sign::Flat(Flat));
	let (wrapper, ok, diagnostics) = parse::<Wrapper>("<wrapper><sharp/></wrapper>");
	assert!(ok, "{}", diagnostics);
	assert_eq!(wrapper.sign, Sign::Sharp(Sharp));

	let (_, ok, diagnostics) = parse::<Wrapper>("<wrapper/>");
	assert!(!ok);
	assert_eq!(diagnostics.of_kind(DiagnosticKind::MissingElement).count(), 1);
}

#[test]
fn missing_mandatory_attribute() {
	let (item, ok, diagnostics) = parse::<Item>("<item><name>a</name></item>");
	assert!(!ok);
	assert_eq!(item.names.len(), 1);
	let missing: Vec<_> = diagnostics.of_kind(DiagnosticKind::MissingAttribute).collect();
	assert_eq!(missing.len(), 1);
	assert_eq!(missing[0].path, "/item");
}

#[test]
fn invalid_values_are_reported() {
	let (item, ok, diagnostics) =
		parse::<Item>(r#"<item id="i"><name size="-1" print-object="maybe">x</name><count>z</count></item>"#);
	assert!(!ok);
	assert_eq!(item.names[0].name.attributes, NameAttributes::default());
	assert_eq!(item.names[0].name.value, "x");
	assert_eq!(diagnostics.of_kind(DiagnosticKind::InvalidValue).count(), 3);
}

#[test]
fn unknown_data_is_lenient() {
	let (item, ok, diagnostics) = parse::<Item>(r#"<item id="i" color="red"><bogus/><name>n</name></item>"#);
	assert!(ok, "{}", diagnostics);
	assert_eq!(item.names[0].name.value, "n");
	assert_eq!(diagnostics.len(), 2);
	assert!(diagnostics.entries().iter().all(|d| d.severity == Severity::Warning));

	let (_, ok, diagnostics) = parse::<Extensible>(r#"<extensible a="1">text<x/><count>4</count></extensible>"#);
	assert!(ok);
	assert!(diagnostics.is_empty());
}

#[test]
fn misplaced_child_is_an_error() {
	let (_, ok, diagnostics) = parse::<Item>(r#"<item id="i"><flat/><name>n</name></item>"#);
	assert!(!ok);
	assert_eq!(diagnostics.of_kind(DiagnosticKind::UnexpectedElement).count(), 1);
}

#[test]
fn wrong_root() {
	let mut diagnostics = Diagnostics::new();
	assert!(Item::from_xml_str("<other/>", &mut diagnostics).is_err());

	let mut flat = Flat;
	assert!(!flat.parse_from_xml(&mut diagnostics, &XElement::new("sharp")));
	assert_eq!(diagnostics.of_kind(DiagnosticKind::WrongTag).count(), 1);
}

#[test]
fn custom_tag_and_verbatim_strings() {
	let text = Text {
		value: XsString::from("  spaced  "),
	};
	assert_eq!(to_string(&text).unwrap(), "<free-text>  spaced  </free-text>");
	let (parsed, ok, _) = parse::<Text>("<free-text>  spaced  </free-text>");
	assert!(ok);
	assert_eq!(parsed, text);
}
