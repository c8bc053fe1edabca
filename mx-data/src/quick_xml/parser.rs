use crate::{
	errors,
	parser::XElement,
	Result,
};
use quick_xml::{
	events::{
		BytesStart,
		Event,
	},
	Reader,
};

fn element_from_start(text: &str, position: usize, start: &BytesStart<'_>) -> Result<XElement> {
	let qname = start.name();
	let name = std::str::from_utf8(qname.as_ref())?;
	let mut element = XElement::new(name);
	for attr in start.attributes() {
		let attr = attr.map_err(|e| errors::xml_syntax(text, position, e.into()))?;
		let key = std::str::from_utf8(attr.key.as_ref())?.to_owned();
		let value = attr
			.unescape_value()
			.map_err(|e| errors::xml_syntax(text, position, e))?
			.into_owned();
		element.attributes.insert(key, value);
	}
	Ok(element)
}

fn attach(stack: &mut Vec<XElement>, root: &mut Option<XElement>, element: XElement) -> Result<()> {
	if let Some(parent) = stack.last_mut() {
		parent.children.push(element);
	} else if root.is_some() {
		return Err(errors::multiple_roots(&element.name));
	} else {
		*root = Some(element);
	}
	Ok(())
}

fn add_text(stack: &mut [XElement], text: &str) -> Result<()> {
	if let Some(parent) = stack.last_mut() {
		parent.text.push_str(text);
	} else if !text.trim().is_empty() {
		return Err(errors::unexpected_text());
	}
	Ok(())
}

/// Read a complete document into a tree
///
/// Declaration, document type, comments and processing instructions are skipped.  Any syntax
/// violation is fatal and reported with its line and column.
pub fn read_tree(text: &str) -> Result<XElement> {
	let mut reader = Reader::from_str(text);
	reader.trim_text(false);
	reader.check_end_names(true);

	let mut stack: Vec<XElement> = Vec::new();
	let mut root: Option<XElement> = None;

	loop {
		let position = reader.buffer_position();
		let event = reader.read_event().map_err(|e| errors::xml_syntax(text, position, e))?;
		match event {
			Event::Start(start) => {
				let element = element_from_start(text, position, &start)?;
				if stack.is_empty() && root.is_some() {
					return Err(errors::multiple_roots(&element.name));
				}
				stack.push(element);
			},
			Event::Empty(start) => {
				let element = element_from_start(text, position, &start)?;
				attach(&mut stack, &mut root, element)?;
			},
			Event::End(_) => {
				// end names are checked by the reader
				let element = stack.pop().ok_or_else(|| errors::unexpected_eof("end tag without start tag"))?;
				attach(&mut stack, &mut root, element)?;
			},
			Event::Text(t) => {
				let t = t.unescape().map_err(|e| errors::xml_syntax(text, position, e))?;
				add_text(&mut stack, &t)?;
			},
			Event::CData(c) => {
				let bytes = c.into_inner();
				add_text(&mut stack, std::str::from_utf8(&bytes)?)?;
			},
			Event::Decl(_) | Event::DocType(_) | Event::Comment(_) => (),
			Event::PI(_) => log::debug!("skipping processing instruction"),
			Event::Eof => break,
		}
	}

	if let Some(open) = stack.last() {
		return Err(errors::unexpected_eof(&format!("unclosed element <{}>", open.name)));
	}
	root.ok_or_else(|| errors::unexpected_eof("empty document"))
}

#[cfg(test)]
mod test {
	use super::read_tree;
	use crate::Error;

	#[test]
	fn tree() {
		let root = read_tree(
			r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE a>
<!-- comment -->
<a x="1 &amp; 2"><b>t&lt;u</b><c/><![CDATA[<raw>]]></a>"#,
		)
		.unwrap();
		assert_eq!(root.name, "a");
		assert_eq!(root.attribute("x"), Some("1 & 2"));
		assert_eq!(root.children.len(), 2);
		assert_eq!(root.children[0].text, "t<u");
		assert_eq!(root.children[1].name, "c");
		assert_eq!(root.text, "<raw>");
	}

	#[test]
	fn ill_formed() {
		assert!(matches!(read_tree("<a><b></a>"), Err(Error::Xml { .. })));
		assert!(matches!(read_tree("<a>"), Err(Error::UnexpectedEof { .. })));
		assert!(matches!(read_tree(""), Err(Error::UnexpectedEof { .. })));
		assert!(matches!(read_tree("<a/><b/>"), Err(Error::MultipleRoots { .. })));
		assert!(matches!(read_tree("text<a/>"), Err(Error::UnexpectedText)));
	}

	#[test]
	fn error_location() {
		match read_tree("<a>\n<b></c>\n</a>") {
			Err(Error::Xml { line, .. }) => assert_eq!(line, 2),
			other => panic!("unexpected result {:?}", other),
		}
	}
}
