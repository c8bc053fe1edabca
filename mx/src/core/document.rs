use crate::core::elements::{
	PartAttributes,
	PartwiseMeasure,
	PartwisePart,
	ScorePartwise,
	ScoreTimewise,
	TimewiseMeasure,
	TimewisePart,
};
use mx_data::{
	diagnostics::{
		DiagnosticKind,
		Diagnostics,
		Severity,
	},
	errors,
	parser::{
		ElementExt,
		ParseContext,
		ParseOptions,
		XElement,
	},
	serializer::{
		serialize_document,
		Options,
	},
	FixedElement,
	Result,
};
use std::io;

/// Document type declaration of partwise scores
pub const PARTWISE_DOCTYPE: &str = r#"<!DOCTYPE score-partwise PUBLIC "-//Recordare//DTD MusicXML 3.0 Partwise//EN" "http://www.musicxml.org/dtds/partwise.dtd">"#;

/// Document type declaration of timewise scores
pub const TIMEWISE_DOCTYPE: &str = r#"<!DOCTYPE score-timewise PUBLIC "-//Recordare//DTD MusicXML 3.0 Timewise//EN" "http://www.musicxml.org/dtds/timewise.dtd">"#;

/// Root layout of a document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DocumentChoice {
	/// Parts containing measures
	#[default]
	Partwise,
	/// Measures containing parts
	Timewise,
}

/// A complete MusicXML document
#[derive(Clone, Debug, PartialEq)]
pub enum Document {
	/// `<score-partwise>` root
	Partwise(ScorePartwise),
	/// `<score-timewise>` root
	Timewise(ScoreTimewise),
}

impl Default for Document {
	fn default() -> Self {
		Self::new(DocumentChoice::Partwise)
	}
}

impl Document {
	/// Empty document with the given root
	pub fn new(choice: DocumentChoice) -> Self {
		match choice {
			DocumentChoice::Partwise => Self::Partwise(ScorePartwise::default()),
			DocumentChoice::Timewise => Self::Timewise(ScoreTimewise::default()),
		}
	}

	/// Root layout
	pub fn choice(&self) -> DocumentChoice {
		match self {
			Self::Partwise(_) => DocumentChoice::Partwise,
			Self::Timewise(_) => DocumentChoice::Timewise,
		}
	}

	/// Switch the root layout, moving all measures over
	pub fn convert_contents(&mut self) {
		let converted = match std::mem::take(self) {
			Self::Partwise(score) => Self::Timewise(partwise_to_timewise(score)),
			Self::Timewise(score) => Self::Partwise(timewise_to_partwise(score)),
		};
		*self = converted;
	}

	/// Partwise view of the document (converting if necessary)
	pub fn into_partwise(self) -> ScorePartwise {
		match self {
			Self::Partwise(score) => score,
			Self::Timewise(score) => timewise_to_partwise(score),
		}
	}

	/// `<!DOCTYPE>` declaration matching the root
	pub fn doctype(&self) -> &'static str {
		match self {
			Self::Partwise(_) => PARTWISE_DOCTYPE,
			Self::Timewise(_) => TIMEWISE_DOCTYPE,
		}
	}

	/// Serialize with declaration, document type and default indentation
	pub fn to_xml_string(&self) -> Result<String> {
		self.to_xml_string_with(&Options::default())
	}

	/// Serialize with declaration and document type, formatted by `options`
	pub fn to_xml_string_with(&self, options: &Options) -> Result<String> {
		match self {
			Self::Partwise(score) => serialize_document(score, Some(self.doctype()), options),
			Self::Timewise(score) => serialize_document(score, Some(self.doctype()), options),
		}
	}

	/// Write the text of [`to_xml_string`](Self::to_xml_string) to `out`
	pub fn write_to<W: io::Write>(&self, out: &mut W) -> Result<()> {
		out.write_all(self.to_xml_string()?.as_bytes())?;
		Ok(())
	}

	/// Replace the contents from a root node, picking the layout from its tag
	///
	/// Returns false (with a diagnostic) for roots that are neither `score-partwise` nor
	/// `score-timewise`.
	pub fn parse_from_xml(&mut self, diagnostics: &mut Diagnostics, node: &XElement) -> bool {
		if node.name == ScorePartwise::TAG {
			let mut score = ScorePartwise::default();
			let ok = score.parse_from_xml(diagnostics, node);
			*self = Self::Partwise(score);
			ok
		} else if node.name == ScoreTimewise::TAG {
			let mut score = ScoreTimewise::default();
			let ok = score.parse_from_xml(diagnostics, node);
			*self = Self::Timewise(score);
			ok
		} else {
			let mut ctx = ParseContext::new(diagnostics);
			ctx.report(
				Severity::Error,
				DiagnosticKind::WrongTag,
				format!("expected <{}> or <{}>, found <{}>", ScorePartwise::TAG, ScoreTimewise::TAG, node.name),
			);
			false
		}
	}

	/// Parse document text
	///
	/// Ill-formed XML and unknown roots are errors; schema problems end up in the returned
	/// diagnostics next to the (partial) document.
	pub fn from_xml_str(text: &str) -> Result<(Self, Diagnostics)> {
		Self::from_xml_str_with(text, ParseOptions::default())
	}

	/// Parse document text; `options.strict` turns unknown elements into errors
	pub fn from_xml_str_with(text: &str, options: ParseOptions) -> Result<(Self, Diagnostics)> {
		let root = mx_data::quick_xml::read_tree(text)?;
		let mut diagnostics = Diagnostics::new();
		let (document, ok) = if root.name == ScorePartwise::TAG {
			let (score, ok) = ScorePartwise::from_root(&root, &mut diagnostics, options)?;
			(Self::Partwise(score), ok)
		} else if root.name == ScoreTimewise::TAG {
			let (score, ok) = ScoreTimewise::from_root(&root, &mut diagnostics, options)?;
			(Self::Timewise(score), ok)
		} else {
			return Err(errors::unexpected_root(&root.name));
		};
		log::info!(
			"parsed <{}> document with {} diagnostic(s)",
			root.name,
			diagnostics.len()
		);
		if !ok {
			log::warn!("<{}> document has errors:\n{}", root.name, diagnostics);
		}
		Ok((document, diagnostics))
	}
}

fn partwise_to_timewise(score: ScorePartwise) -> ScoreTimewise {
	let ScorePartwise { attributes, header, parts } = score;
	let mut measures: Vec<TimewiseMeasure> = Vec::new();
	for part in parts {
		let id = part.attributes.id;
		for (index, measure) in part.measures.into_iter().enumerate() {
			if index == measures.len() {
				measures.push(TimewiseMeasure {
					attributes: measure.attributes.clone(),
					parts: Vec::new(),
				});
			}
			measures[index].parts.push(TimewisePart {
				attributes: PartAttributes { id: id.clone() },
				music_data: measure.music_data,
			});
		}
	}
	ScoreTimewise {
		attributes,
		header,
		measures,
	}
}

fn timewise_to_partwise(score: ScoreTimewise) -> ScorePartwise {
	let ScoreTimewise { attributes, header, measures } = score;
	let mut parts: Vec<PartwisePart> = Vec::new();
	for measure in measures {
		for part in measure.parts {
			let index = match parts.iter().position(|existing| existing.attributes.id == part.attributes.id) {
				Some(index) => index,
				None => {
					parts.push(PartwisePart {
						attributes: part.attributes,
						measures: Vec::new(),
					});
					parts.len() - 1
				},
			};
			parts[index].measures.push(PartwiseMeasure {
				attributes: measure.attributes.clone(),
				music_data: part.music_data,
			});
		}
	}
	ScorePartwise { attributes, header, parts }
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::core::{
		elements::{
			MeasureAttributes,
			PartName,
		},
		values::{
			XsId,
			XsIdRef,
			XsString,
			XsToken,
		},
	};
	use pretty_assertions::assert_eq;

	fn two_part_score() -> ScorePartwise {
		let mut score = ScorePartwise::default();
		score.attributes.version = Some(XsToken::new("3.0"));
		score.header.part_list.score_part.attributes.id = XsId::new("P1").unwrap();
		score.header.part_list.score_part.part_name = PartName::new(XsString::from("Flute"));
		for id in ["P1", "P2"] {
			let measures = ["1", "2"]
				.iter()
				.map(|number| PartwiseMeasure {
					attributes: MeasureAttributes {
						number: XsToken::new(number),
						..MeasureAttributes::default()
					},
					music_data: Vec::new(),
				})
				.collect();
			score.parts.push(PartwisePart {
				attributes: PartAttributes {
					id: XsIdRef::new(id).unwrap(),
				},
				measures,
			});
		}
		score
	}

	#[test]
	fn empty_documents() {
		assert_eq!(Document::default().choice(), DocumentChoice::Partwise);
		let timewise = Document::new(DocumentChoice::Timewise);
		let text = timewise.to_xml_string().unwrap();
		assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n<!DOCTYPE score-timewise"));
		assert!(text.contains("<score-timewise>\n  <part-list>\n    <score-part id=\"\">"));
	}

	#[test]
	fn conversion_round_trip() {
		let original = Document::Partwise(two_part_score());
		let mut document = original.clone();
		document.convert_contents();
		match &document {
			Document::Timewise(score) => {
				assert_eq!(score.measures.len(), 2);
				assert_eq!(score.measures[1].attributes.number.as_str(), "2");
				let ids: Vec<_> = score.measures[0].parts.iter().map(|part| part.attributes.id.as_str()).collect();
				assert_eq!(ids, ["P1", "P2"]);
			},
			Document::Partwise(_) => panic!("expected timewise"),
		}
		document.convert_contents();
		assert_eq!(document, original);
	}

	#[test]
	fn parse_document_text() {
		let text = Document::Partwise(two_part_score()).to_xml_string().unwrap();
		assert!(text.contains(PARTWISE_DOCTYPE));
		let (document, diagnostics) = Document::from_xml_str(&text).unwrap();
		assert!(diagnostics.is_empty(), "{}", diagnostics);
		assert_eq!(document.to_xml_string().unwrap(), text);

		let mut out = Vec::new();
		document.write_to(&mut out).unwrap();
		assert_eq!(String::from_utf8(out).unwrap(), text);
	}

	#[test]
	fn unknown_root() {
		assert!(Document::from_xml_str("<score/>").is_err());

		let mut diagnostics = Diagnostics::new();
		let mut document = Document::default();
		assert!(!document.parse_from_xml(&mut diagnostics, &XElement::new("opus")));
		assert_eq!(diagnostics.of_kind(DiagnosticKind::WrongTag).count(), 1);
	}
}
