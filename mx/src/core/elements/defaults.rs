//! Score-wide defaults: scaling, page/system/staff layout, appearance and fonts

use crate::core::{
	elements::FontAttributes,
	values::{
		FontSize,
		FontStyle,
		FontWeight,
		MarginType,
		MillimetersValue,
		NonNegativeDecimal,
		NoteSizeType,
		PositiveDecimal,
		StaffNumber,
		TenthsValue,
		XsNmToken,
		XsString,
		XsToken,
	},
};
use mx_data::{
	Attributes,
	Element,
	Inner,
};

value_element!(Millimeters(MillimetersValue));
value_element!(Tenths(PositiveDecimal));

/// How many millimeters a given number of tenths is
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Scaling {
	pub millimeters: Millimeters,
	pub tenths: Tenths,
}

value_element!(PageHeight(TenthsValue));
value_element!(PageWidth(TenthsValue));
value_element!(LeftMargin(TenthsValue));
value_element!(RightMargin(TenthsValue));
value_element!(TopMargin(TenthsValue));
value_element!(BottomMargin(TenthsValue));

#[derive(Inner, Clone, Debug, Default, PartialEq)]
pub struct PageSize {
	pub page_height: PageHeight,
	pub page_width: PageWidth,
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct PageMarginsAttributes {
	pub r#type: Option<MarginType>,
}

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct PageMargins {
	#[mx_data(attributes)]
	pub attributes: PageMarginsAttributes,
	pub left_margin: LeftMargin,
	pub right_margin: RightMargin,
	pub top_margin: TopMargin,
	pub bottom_margin: BottomMargin,
}

/// Page size and up to two sets of margins (odd/even or both)
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct PageLayout {
	pub size: Option<PageSize>,
	pub page_margins: Vec<PageMargins>,
}

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct SystemMargins {
	pub left_margin: LeftMargin,
	pub right_margin: RightMargin,
}

value_element!(SystemDistance(TenthsValue));
value_element!(TopSystemDistance(TenthsValue));

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct SystemLayout {
	pub system_margins: Option<SystemMargins>,
	pub system_distance: Option<SystemDistance>,
	pub top_system_distance: Option<TopSystemDistance>,
}

value_element!(StaffDistance(TenthsValue));

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct StaffLayoutAttributes {
	pub number: Option<StaffNumber>,
}

#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct StaffLayout {
	#[mx_data(attributes)]
	pub attributes: StaffLayoutAttributes,
	pub staff_distance: Option<StaffDistance>,
}

/// `layout` group shared by `<defaults>` and `<print>`
#[derive(Inner, Clone, Debug, Default, PartialEq)]
pub struct LayoutGroup {
	pub page_layout: Option<PageLayout>,
	pub system_layout: Option<SystemLayout>,
	pub staff_layouts: Vec<StaffLayout>,
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct LineWidthAttributes {
	pub r#type: XsToken,
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct NoteSizeAttributes {
	pub r#type: NoteSizeType,
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct DistanceAttributes {
	pub r#type: XsToken,
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct OtherAppearanceAttributes {
	pub r#type: XsToken,
}

value_element!(LineWidth(TenthsValue) with LineWidthAttributes);
value_element!(NoteSize(NonNegativeDecimal) with NoteSizeAttributes);
value_element!(Distance(TenthsValue) with DistanceAttributes);
value_element!(OtherAppearance(XsString) with OtherAppearanceAttributes);

/// Default line widths, note sizes and distances
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Appearance {
	pub line_widths: Vec<LineWidth>,
	pub note_sizes: Vec<NoteSize>,
	pub distances: Vec<Distance>,
	pub other_appearances: Vec<OtherAppearance>,
}

empty_element!(MusicFont with FontAttributes);
empty_element!(WordFont with FontAttributes);

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct LyricFontAttributes {
	pub number: Option<XsNmToken>,
	pub name: Option<XsToken>,
	pub font_family: Option<String>,
	pub font_style: Option<FontStyle>,
	pub font_size: Option<FontSize>,
	pub font_weight: Option<FontWeight>,
}

#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct LyricLanguageAttributes {
	pub number: Option<XsNmToken>,
	pub name: Option<XsToken>,
	#[mx_data(rename = "xml:lang")]
	pub xml_lang: String,
}

empty_element!(LyricFont with LyricFontAttributes);
empty_element!(LyricLanguage with LyricLanguageAttributes);

/// Score-wide formatting defaults
#[derive(Element, Clone, Debug, Default, PartialEq)]
pub struct Defaults {
	pub scaling: Option<Scaling>,
	pub layout: LayoutGroup,
	pub appearance: Option<Appearance>,
	pub music_font: Option<MusicFont>,
	pub word_font: Option<WordFont>,
	pub lyric_fonts: Vec<LyricFont>,
	pub lyric_languages: Vec<LyricLanguage>,
}

#[cfg(test)]
mod test {
	use super::*;
	use mx_data::{
		diagnostics::{
			DiagnosticKind,
			Diagnostics,
		},
		parser::ElementExt,
		serializer::to_string,
	};
	use pretty_assertions::assert_eq;

	fn tenths(value: f64) -> TenthsValue {
		TenthsValue::from_f64(value).unwrap()
	}

	#[test]
	fn empty_defaults() {
		assert_eq!(to_string(&Defaults::default()).unwrap(), "<defaults/>");
	}

	#[test]
	fn page_layout() {
		let margins = PageMargins {
			attributes: PageMarginsAttributes {
				r#type: Some(MarginType::Both),
			},
			left_margin: LeftMargin::new(tenths(80.0)),
			right_margin: RightMargin::new(tenths(80.0)),
			top_margin: TopMargin::new(tenths(140.5)),
			bottom_margin: BottomMargin::new(tenths(80.0)),
		};
		let defaults = Defaults {
			layout: LayoutGroup {
				page_layout: Some(PageLayout {
					size: Some(PageSize {
						page_height: PageHeight::new(tenths(1760.0)),
						page_width: PageWidth::new(tenths(1360.0)),
					}),
					page_margins: vec![margins],
				}),
				..LayoutGroup::default()
			},
			..Defaults::default()
		};
		let expected = r#"<defaults>
  <page-layout>
    <page-height>1760</page-height>
    <page-width>1360</page-width>
    <page-margins type="both">
      <left-margin>80</left-margin>
      <right-margin>80</right-margin>
      <top-margin>140.5</top-margin>
      <bottom-margin>80</bottom-margin>
    </page-margins>
  </page-layout>
</defaults>"#;
		assert_eq!(to_string(&defaults).unwrap(), expected);

		let mut diagnostics = Diagnostics::new();
		let (parsed, ok) = Defaults::from_xml_str(expected, &mut diagnostics).unwrap();
		assert!(ok, "{}", diagnostics);
		assert_eq!(parsed, defaults);
	}

	#[test]
	fn appearance() {
		let mut line_width = LineWidth::new(tenths(1.5));
		line_width.attributes.r#type = XsToken::new("stem");
		let appearance = Appearance {
			line_widths: vec![line_width],
			..Appearance::default()
		};
		assert_eq!(
			to_string(&appearance).unwrap(),
			"<appearance>\n  <line-width type=\"stem\">1.5</line-width>\n</appearance>"
		);
	}

	#[test]
	fn note_size_requires_type() {
		let mut diagnostics = Diagnostics::new();
		let (appearance, ok) =
			Appearance::from_xml_str("<appearance><note-size>60</note-size></appearance>", &mut diagnostics).unwrap();
		assert!(!ok);
		assert_eq!(appearance.note_sizes.len(), 1);
		assert_eq!(diagnostics.of_kind(DiagnosticKind::MissingAttribute).count(), 1);
	}
}
