//! `LayoutData` <-> `<defaults>`

use crate::{
	api::{
		AppearanceData,
		AppearanceType,
		LayoutData,
		PageMarginsData,
		UNSPECIFIED,
	},
	core::{
		elements::{
			Appearance,
			BottomMargin,
			Defaults,
			Distance,
			DistanceAttributes,
			LeftMargin,
			LineWidth,
			LineWidthAttributes,
			Millimeters,
			NoteSize,
			NoteSizeAttributes,
			OtherAppearance,
			OtherAppearanceAttributes,
			PageHeight,
			PageLayout,
			PageMargins,
			PageMarginsAttributes,
			PageSize,
			PageWidth,
			RightMargin,
			Scaling,
			StaffDistance,
			StaffLayout,
			SystemDistance,
			SystemLayout,
			SystemMargins,
			Tenths,
			TopMargin,
			TopSystemDistance,
		},
		values::{
			MarginType,
			MillimetersValue,
			NonNegativeDecimal,
			NoteSizeType,
			PositiveDecimal,
			TenthsValue,
			XsString,
			XsToken,
		},
	},
	mapping::checked,
};

fn tenths(what: &str, value: f64) -> Option<TenthsValue> {
	checked(what, TenthsValue::from_f64(value))
}

fn page_margins(r#type: MarginType, [left, right, top, bottom]: [f64; 4]) -> Option<PageMargins> {
	Some(PageMargins {
		attributes: PageMarginsAttributes { r#type: Some(r#type) },
		left_margin: LeftMargin::new(tenths("left margin", left)?),
		right_margin: RightMargin::new(tenths("right margin", right)?),
		top_margin: TopMargin::new(tenths("top margin", top)?),
		bottom_margin: BottomMargin::new(tenths("bottom margin", bottom)?),
	})
}

fn write_page_layout(layout: &LayoutData) -> Option<PageLayout> {
	let data = &layout.page_layout;
	if !data.is_used() {
		return None;
	}
	let mut page_layout = PageLayout::default();
	if data.is_size_specified() {
		if let (Some(height), Some(width)) = (tenths("page height", data.page_height), tenths("page width", data.page_width)) {
			page_layout.size = Some(PageSize {
				page_height: PageHeight::new(height),
				page_width: PageWidth::new(width),
			});
		}
	}
	let margins = &data.page_margins;
	let odd = margins.odd();
	let even = margins.even();
	if margins.are_odd_margins_specified() && margins.are_odd_even_margins_the_same() {
		page_layout.page_margins.extend(page_margins(MarginType::Both, odd));
	} else {
		if margins.are_odd_margins_specified() {
			page_layout.page_margins.extend(page_margins(MarginType::Odd, odd));
		}
		if margins.are_even_margins_specified() {
			page_layout.page_margins.extend(page_margins(MarginType::Even, even));
		}
	}
	Some(page_layout)
}

fn write_system_layout(layout: &LayoutData) -> Option<SystemLayout> {
	let mut system_layout = SystemLayout::default();
	if layout.system_left_margin > 0.0 && layout.system_right_margin > 0.0 {
		if let (Some(left), Some(right)) = (
			tenths("system left margin", layout.system_left_margin),
			tenths("system right margin", layout.system_right_margin),
		) {
			system_layout.system_margins = Some(SystemMargins {
				left_margin: LeftMargin::new(left),
				right_margin: RightMargin::new(right),
			});
		}
	}
	if layout.system_distance > 0.0 {
		system_layout.system_distance = tenths("system distance", layout.system_distance).map(SystemDistance::new);
	}
	if layout.top_system_distance > 0.0 {
		system_layout.top_system_distance = tenths("top system distance", layout.top_system_distance).map(TopSystemDistance::new);
	}
	if system_layout == SystemLayout::default() {
		None
	} else {
		Some(system_layout)
	}
}

fn write_appearance(items: &[AppearanceData]) -> Option<Appearance> {
	let mut appearance = Appearance::default();
	for item in items {
		let sub_type = XsToken::new(&item.appearance_sub_type);
		match item.appearance_type {
			AppearanceType::LineWidth => {
				if let Some(value) = tenths("line width", item.value) {
					appearance.line_widths.push(LineWidth {
						attributes: LineWidthAttributes { r#type: sub_type },
						value,
					});
				}
			},
			AppearanceType::NoteSize => {
				let note_size = checked("note size type", item.appearance_sub_type.parse::<NoteSizeType>())
					.zip(checked("note size", NonNegativeDecimal::from_f64(item.value)));
				if let Some((r#type, value)) = note_size {
					appearance.note_sizes.push(NoteSize {
						attributes: NoteSizeAttributes { r#type },
						value,
					});
				}
			},
			AppearanceType::Distance => {
				if let Some(value) = tenths("distance", item.value) {
					appearance.distances.push(Distance {
						attributes: DistanceAttributes { r#type: sub_type },
						value,
					});
				}
			},
			AppearanceType::OtherAppearance => {
				appearance.other_appearances.push(OtherAppearance {
					attributes: OtherAppearanceAttributes { r#type: sub_type },
					value: XsString::new(format!("{}", item.value)),
				});
			},
		}
	}
	if appearance == Appearance::default() {
		None
	} else {
		Some(appearance)
	}
}

/// Write layout values into `defaults`
///
/// Unspecified values (below zero, or not above zero where zero makes no sense) leave the
/// corresponding elements untouched.
pub fn write_layout(layout: &LayoutData, defaults: &mut Defaults) {
	if layout.scaling_millimeters > 0.0 && layout.scaling_tenths > 0.0 {
		let millimeters = checked("scaling millimeters", MillimetersValue::from_f64(layout.scaling_millimeters));
		let scaling_tenths = checked("scaling tenths", PositiveDecimal::from_f64(layout.scaling_tenths));
		if let (Some(millimeters), Some(scaling_tenths)) = (millimeters, scaling_tenths) {
			defaults.scaling = Some(Scaling {
				millimeters: Millimeters::new(millimeters),
				tenths: Tenths::new(scaling_tenths),
			});
		}
	}
	if let Some(page_layout) = write_page_layout(layout) {
		defaults.layout.page_layout = Some(page_layout);
	}
	if let Some(system_layout) = write_system_layout(layout) {
		defaults.layout.system_layout = Some(system_layout);
	}
	if layout.staff_distance > 0.0 {
		if let Some(distance) = tenths("staff distance", layout.staff_distance) {
			defaults.layout.staff_layouts.push(StaffLayout {
				staff_distance: Some(StaffDistance::new(distance)),
				..StaffLayout::default()
			});
		}
	}
	if let Some(appearance) = write_appearance(&layout.appearance) {
		defaults.appearance = Some(appearance);
	}
}

fn read_margins(margins: &PageMargins, data: &mut PageMarginsData) {
	let values = [
		margins.left_margin.value.to_f64(),
		margins.right_margin.value.to_f64(),
		margins.top_margin.value.to_f64(),
		margins.bottom_margin.value.to_f64(),
	];
	let odd = matches!(margins.attributes.r#type, None | Some(MarginType::Both | MarginType::Odd));
	let even = matches!(margins.attributes.r#type, None | Some(MarginType::Both | MarginType::Even));
	if odd {
		[
			data.odd_page_left_margin,
			data.odd_page_right_margin,
			data.odd_page_top_margin,
			data.odd_page_bottom_margin,
		] = values;
	}
	if even {
		[
			data.even_page_left_margin,
			data.even_page_right_margin,
			data.even_page_top_margin,
			data.even_page_bottom_margin,
		] = values;
	}
}

fn read_appearance(appearance: &Appearance) -> Vec<AppearanceData> {
	let line_widths = appearance
		.line_widths
		.iter()
		.map(|item| AppearanceData::new(AppearanceType::LineWidth, item.attributes.r#type.as_str(), item.value.to_f64()));
	let note_sizes = appearance
		.note_sizes
		.iter()
		.map(|item| AppearanceData::new(AppearanceType::NoteSize, item.attributes.r#type.as_str(), item.value.to_f64()));
	let distances = appearance
		.distances
		.iter()
		.map(|item| AppearanceData::new(AppearanceType::Distance, item.attributes.r#type.as_str(), item.value.to_f64()));
	// the text of other-appearance isn't numeric
	let others = appearance
		.other_appearances
		.iter()
		.map(|item| AppearanceData::new(AppearanceType::OtherAppearance, item.attributes.r#type.as_str(), 0.0));
	line_widths.chain(note_sizes).chain(distances).chain(others).collect()
}

/// Read layout values from `defaults`; absent values are [`UNSPECIFIED`]
pub fn read_layout(defaults: &Defaults) -> LayoutData {
	let mut layout = LayoutData::default();
	if let Some(scaling) = &defaults.scaling {
		layout.scaling_millimeters = scaling.millimeters.value.to_f64();
		layout.scaling_tenths = scaling.tenths.value.to_f64();
	}
	if let Some(page_layout) = &defaults.layout.page_layout {
		if let Some(size) = &page_layout.size {
			layout.page_layout.page_height = size.page_height.value.to_f64();
			layout.page_layout.page_width = size.page_width.value.to_f64();
		}
		for margins in &page_layout.page_margins {
			read_margins(margins, &mut layout.page_layout.page_margins);
		}
	}
	if let Some(system_layout) = &defaults.layout.system_layout {
		if let Some(margins) = &system_layout.system_margins {
			layout.system_left_margin = margins.left_margin.value.to_f64();
			layout.system_right_margin = margins.right_margin.value.to_f64();
		}
		layout.system_distance = system_layout.system_distance.as_ref().map_or(UNSPECIFIED, |distance| distance.value.to_f64());
		layout.top_system_distance = system_layout
			.top_system_distance
			.as_ref()
			.map_or(UNSPECIFIED, |distance| distance.value.to_f64());
	}
	layout.staff_distance = defaults
		.layout
		.staff_layouts
		.iter()
		.find_map(|staff_layout| staff_layout.staff_distance.as_ref())
		.map_or(UNSPECIFIED, |distance| distance.value.to_f64());
	if let Some(appearance) = &defaults.appearance {
		layout.appearance = read_appearance(appearance);
	}
	layout
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::api::PageLayoutData;
	use mx_data::serializer::to_string;
	use pretty_assertions::assert_eq;

	#[test]
	fn unspecified_layout_leaves_defaults_alone() {
		let mut defaults = Defaults::default();
		write_layout(&LayoutData::default(), &mut defaults);
		assert_eq!(defaults, Defaults::default());
		assert_eq!(read_layout(&defaults), LayoutData::default());
	}

	#[test]
	fn both_margins() {
		let layout = LayoutData {
			page_layout: PageLayoutData {
				page_height: 1760.0,
				page_width: 1360.0,
				page_margins: PageMarginsData::both(80.0, 80.0, 140.5, 80.0),
			},
			..LayoutData::default()
		};
		let mut defaults = Defaults::default();
		write_layout(&layout, &mut defaults);
		let page_layout = defaults.layout.page_layout.as_ref().unwrap();
		assert_eq!(page_layout.page_margins.len(), 1);
		assert_eq!(page_layout.page_margins[0].attributes.r#type, Some(MarginType::Both));
		assert_eq!(read_layout(&defaults), layout);
	}

	#[test]
	fn odd_and_even_margins() {
		let mut margins = PageMarginsData::both(10.0, 20.0, 30.0, 40.0);
		margins.even_page_left_margin = 20.0;
		margins.even_page_right_margin = 10.0;
		let layout = LayoutData {
			page_layout: PageLayoutData {
				page_margins: margins,
				..PageLayoutData::default()
			},
			..LayoutData::default()
		};
		let mut defaults = Defaults::default();
		write_layout(&layout, &mut defaults);
		let page_layout = defaults.layout.page_layout.as_ref().unwrap();
		assert!(page_layout.size.is_none());
		let types: Vec<_> = page_layout.page_margins.iter().map(|margins| margins.attributes.r#type).collect();
		assert_eq!(types, [Some(MarginType::Odd), Some(MarginType::Even)]);
		assert_eq!(read_layout(&defaults), layout);
	}

	#[test]
	fn partial_size_is_not_written() {
		let mut layout = LayoutData::default();
		layout.page_layout.page_height = 1000.0;
		let mut defaults = Defaults::default();
		write_layout(&layout, &mut defaults);
		assert!(defaults.layout.page_layout.is_none());
	}

	#[test]
	fn system_and_staff_layout() {
		let layout = LayoutData {
			scaling_millimeters: 7.0,
			scaling_tenths: 40.0,
			system_left_margin: 15.0,
			system_right_margin: 5.0,
			system_distance: 120.0,
			top_system_distance: 70.0,
			staff_distance: 65.0,
			..LayoutData::default()
		};
		let mut defaults = Defaults::default();
		write_layout(&layout, &mut defaults);
		let expected = r#"<defaults>
  <scaling>
    <millimeters>7</millimeters>
    <tenths>40</tenths>
  </scaling>
  <system-layout>
    <system-margins>
      <left-margin>15</left-margin>
      <right-margin>5</right-margin>
    </system-margins>
    <system-distance>120</system-distance>
    <top-system-distance>70</top-system-distance>
  </system-layout>
  <staff-layout>
    <staff-distance>65</staff-distance>
  </staff-layout>
</defaults>"#;
		assert_eq!(to_string(&defaults).unwrap(), expected);
		assert_eq!(read_layout(&defaults), layout);
	}

	#[test]
	fn appearance() {
		let layout = LayoutData {
			appearance: vec![
				AppearanceData::new(AppearanceType::LineWidth, "stem", 1.5),
				AppearanceData::new(AppearanceType::NoteSize, "cue", 60.0),
				AppearanceData::new(AppearanceType::Distance, "beam", 8.0),
			],
			..LayoutData::default()
		};
		let mut defaults = Defaults::default();
		write_layout(&layout, &mut defaults);
		assert_eq!(read_layout(&defaults), layout);
	}

	#[test]
	fn other_appearance_value_is_lost() {
		let layout = LayoutData {
			appearance: vec![AppearanceData::new(AppearanceType::OtherAppearance, "slur-tip", 2.5)],
			..LayoutData::default()
		};
		let mut defaults = Defaults::default();
		write_layout(&layout, &mut defaults);
		let appearance = defaults.appearance.as_ref().unwrap();
		assert_eq!(appearance.other_appearances[0].value.as_str(), "2.5");

		let read = read_layout(&defaults);
		assert_eq!(read.appearance, [AppearanceData::new(AppearanceType::OtherAppearance, "slur-tip", 0.0)]);
	}

	#[test]
	fn invalid_note_size_type_is_skipped() {
		let layout = LayoutData {
			appearance: vec![AppearanceData::new(AppearanceType::NoteSize, "huge", 200.0)],
			..LayoutData::default()
		};
		let mut defaults = Defaults::default();
		write_layout(&layout, &mut defaults);
		assert_eq!(defaults.appearance, None);
		assert_eq!(defaults, Defaults::default());
	}
}
