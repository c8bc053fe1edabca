//! Attribute containers shared by many elements

use crate::core::values::{
	AboveBelow,
	Color,
	FontSize,
	FontStyle,
	FontWeight,
	LeftCenterRight,
	StartStopContinue,
	TenthsValue,
	Valign,
	XmlSpace,
	YesNo,
};
use mx_data::Attributes;

/// `color`
#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct ColorAttributes {
	pub color: Option<Color>,
}

/// `print-object`
#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct PrintObjectAttributes {
	pub print_object: Option<YesNo>,
}

/// `position` and `color`
#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct PositionAttributes {
	pub default_x: Option<TenthsValue>,
	pub default_y: Option<TenthsValue>,
	pub relative_x: Option<TenthsValue>,
	pub relative_y: Option<TenthsValue>,
	pub color: Option<Color>,
}

/// `font`
#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct FontAttributes {
	pub font_family: Option<String>,
	pub font_style: Option<FontStyle>,
	pub font_size: Option<FontSize>,
	pub font_weight: Option<FontWeight>,
}

/// `font` and `color`
#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct FontColorAttributes {
	pub font_family: Option<String>,
	pub font_style: Option<FontStyle>,
	pub font_size: Option<FontSize>,
	pub font_weight: Option<FontWeight>,
	pub color: Option<Color>,
}

/// `print-style`: position, font and color
#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct PrintStyleAttributes {
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

/// `print-style` and `print-object`
#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct PrintStyleObjectAttributes {
	pub default_x: Option<TenthsValue>,
	pub default_y: Option<TenthsValue>,
	pub relative_x: Option<TenthsValue>,
	pub relative_y: Option<TenthsValue>,
	pub font_family: Option<String>,
	pub font_style: Option<FontStyle>,
	pub font_size: Option<FontSize>,
	pub font_weight: Option<FontWeight>,
	pub color: Option<Color>,
	pub print_object: Option<YesNo>,
}

/// `print-style-align`: print style plus horizontal and vertical alignment
#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct PrintStyleAlignAttributes {
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

/// `empty-placement`: print style and placement
#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct EmptyPlacementAttributes {
	pub default_x: Option<TenthsValue>,
	pub default_y: Option<TenthsValue>,
	pub relative_x: Option<TenthsValue>,
	pub relative_y: Option<TenthsValue>,
	pub font_family: Option<String>,
	pub font_style: Option<FontStyle>,
	pub font_size: Option<FontSize>,
	pub font_weight: Option<FontWeight>,
	pub color: Option<Color>,
	pub placement: Option<AboveBelow>,
}

/// `text-formatting` for words, credits and display texts
#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct TextFormattingAttributes {
	pub justify: Option<LeftCenterRight>,
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
	#[mx_data(rename = "xml:lang")]
	pub xml_lang: Option<String>,
	#[mx_data(rename = "xml:space")]
	pub xml_space: Option<XmlSpace>,
}

/// `extend` (lyric and figured bass extension lines)
#[derive(Attributes, Clone, Debug, Default, PartialEq)]
pub struct ExtendAttributes {
	pub r#type: Option<StartStopContinue>,
	pub default_x: Option<TenthsValue>,
	pub default_y: Option<TenthsValue>,
	pub relative_x: Option<TenthsValue>,
	pub relative_y: Option<TenthsValue>,
	pub color: Option<Color>,
}
