// use `cargo run -p mx-data --example custom_element` to run from git repository base directory

use mx_data::{
	diagnostics::Diagnostics,
	parser::ElementExt,
	serializer::{
		serialize_document,
		Options,
	},
	Attributes,
	Element,
};

/// attributes shared by all positioned elements
#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct Position {
	pub default_x: Option<f64>,
	pub default_y: Option<f64>,
}

/// an element that customizes its tag and carries a text value
#[derive(Element, Clone, Debug, Default, PartialEq)]
#[mx_data(tag = "words")]
pub struct Label {
	#[mx_data(attributes)]
	pub position: Position,
	#[mx_data(value)]
	pub text: String,
}

fn main() {
	let label = Label {
		position: Position {
			default_x: Some(12.5),
			default_y: None,
		},
		text: "dolce".to_owned(),
	};

	eprintln!("Generating XML output...");
	let document = serialize_document(&label, None, &Options::default()).unwrap();
	println!("{}", document);

	let mut diagnostics = Diagnostics::new();
	let (parsed, ok) = Label::from_xml_str(&document, &mut diagnostics).unwrap();
	eprintln!("parsed back (ok = {}): {:?}", ok, parsed);
	for diagnostic in &diagnostics {
		eprintln!("{}", diagnostic);
	}
}
