//! Page, system and staff layout of a score
//!
//! Distances are in tenths (scaling in millimeters); values below zero mean "not specified".

/// Marker for values that aren't specified
pub const UNSPECIFIED: f64 = -1.0;

/// Left, right, top and bottom margins of odd and even pages
#[derive(Clone, Debug, PartialEq)]
pub struct PageMarginsData {
	/// Odd page margins, or [`UNSPECIFIED`]
	pub odd_page_left_margin: f64,
	/// Right margin of odd pages
	pub odd_page_right_margin: f64,
	/// Top margin of odd pages
	pub odd_page_top_margin: f64,
	/// Bottom margin of odd pages
	pub odd_page_bottom_margin: f64,
	/// Even page margins; the same as the odd ones for `type="both"`
	pub even_page_left_margin: f64,
	/// Right margin of even pages
	pub even_page_right_margin: f64,
	/// Top margin of even pages
	pub even_page_top_margin: f64,
	/// Bottom margin of even pages
	pub even_page_bottom_margin: f64,
}

impl Default for PageMarginsData {
	fn default() -> Self {
		Self {
			odd_page_left_margin: UNSPECIFIED,
			odd_page_right_margin: UNSPECIFIED,
			odd_page_top_margin: UNSPECIFIED,
			odd_page_bottom_margin: UNSPECIFIED,
			even_page_left_margin: UNSPECIFIED,
			even_page_right_margin: UNSPECIFIED,
			even_page_top_margin: UNSPECIFIED,
			even_page_bottom_margin: UNSPECIFIED,
		}
	}
}

impl PageMarginsData {
	/// Same margins on odd and even pages
	pub fn both(left: f64, right: f64, top: f64, bottom: f64) -> Self {
		Self {
			odd_page_left_margin: left,
			odd_page_right_margin: right,
			odd_page_top_margin: top,
			odd_page_bottom_margin: bottom,
			even_page_left_margin: left,
			even_page_right_margin: right,
			even_page_top_margin: top,
			even_page_bottom_margin: bottom,
		}
	}

	/// Odd page margins: left, right, top, bottom
	pub fn odd(&self) -> [f64; 4] {
		[
			self.odd_page_left_margin,
			self.odd_page_right_margin,
			self.odd_page_top_margin,
			self.odd_page_bottom_margin,
		]
	}

	/// Even page margins: left, right, top, bottom
	pub fn even(&self) -> [f64; 4] {
		[
			self.even_page_left_margin,
			self.even_page_right_margin,
			self.even_page_top_margin,
			self.even_page_bottom_margin,
		]
	}

	/// All four odd page margins are >= 0
	pub fn are_odd_margins_specified(&self) -> bool {
		self.odd().iter().all(|&margin| margin >= 0.0)
	}

	/// All four even page margins are >= 0
	pub fn are_even_margins_specified(&self) -> bool {
		self.even().iter().all(|&margin| margin >= 0.0)
	}

	/// Odd or even margins complete
	pub fn are_margins_specified(&self) -> bool {
		self.are_odd_margins_specified() || self.are_even_margins_specified()
	}

	/// Written as a single `type="both"` element when true
	pub fn are_odd_even_margins_the_same(&self) -> bool {
		self.odd() == self.even()
	}
}

/// Page size and margins (`<page-layout>`)
#[derive(Clone, Debug, PartialEq)]
pub struct PageLayoutData {
	/// Page height in tenths
	pub page_height: f64,
	/// Page width in tenths
	pub page_width: f64,
	/// Page margins
	pub page_margins: PageMarginsData,
}

impl Default for PageLayoutData {
	fn default() -> Self {
		Self {
			page_height: UNSPECIFIED,
			page_width: UNSPECIFIED,
			page_margins: PageMarginsData::default(),
		}
	}
}

impl PageLayoutData {
	/// Height and width are both >= 0
	pub fn is_size_specified(&self) -> bool {
		self.page_height >= 0.0 && self.page_width >= 0.0
	}

	/// Size or margins specified
	pub fn is_used(&self) -> bool {
		self.is_size_specified() || self.page_margins.are_margins_specified()
	}
}

/// Which `<appearance>` child a value belongs to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AppearanceType {
	/// `<line-width>`
	#[default]
	LineWidth,
	/// `<note-size>`
	NoteSize,
	/// `<distance>`
	Distance,
	/// `<other-appearance>`
	OtherAppearance,
}

/// One appearance value; the sub type is the element's `type` attribute (`stem`, `cue`, `beam`, ...)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppearanceData {
	/// Element the value is written as
	pub appearance_type: AppearanceType,
	/// The `type` attribute
	pub appearance_sub_type: String,
	/// Tenths for line widths and distances, percent for note sizes
	pub value: f64,
}

impl AppearanceData {
	/// Appearance value of the given type and sub type
	pub fn new(appearance_type: AppearanceType, appearance_sub_type: &str, value: f64) -> Self {
		Self {
			appearance_type,
			appearance_sub_type: appearance_sub_type.to_owned(),
			value,
		}
	}
}

/// Score-wide layout (the `<defaults>` element)
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutData {
	/// Millimeters per `scaling_tenths` tenths
	pub scaling_millimeters: f64,
	/// Tenths matching `scaling_millimeters`
	pub scaling_tenths: f64,
	/// Default page layout
	pub page_layout: PageLayoutData,
	/// System margins and distances from `<system-layout>`
	pub system_left_margin: f64,
	/// Right system margin
	pub system_right_margin: f64,
	/// Distance between systems
	pub system_distance: f64,
	/// Distance of the first system from the top margin
	pub top_system_distance: f64,
	/// Distance between staves of a system (`<staff-layout>`)
	pub staff_distance: f64,
	/// Contents of `<appearance>`, in document order
	pub appearance: Vec<AppearanceData>,
}

impl Default for LayoutData {
	fn default() -> Self {
		Self {
			scaling_millimeters: UNSPECIFIED,
			scaling_tenths: UNSPECIFIED,
			page_layout: PageLayoutData::default(),
			system_left_margin: UNSPECIFIED,
			system_right_margin: UNSPECIFIED,
			system_distance: UNSPECIFIED,
			top_system_distance: UNSPECIFIED,
			staff_distance: UNSPECIFIED,
			appearance: Vec::new(),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn margins() {
		let mut margins = PageMarginsData::default();
		assert!(!margins.are_margins_specified());
		assert!(margins.are_odd_even_margins_the_same());

		margins.odd_page_left_margin = 10.0;
		assert!(!margins.are_odd_margins_specified());
		margins.odd_page_right_margin = 10.0;
		margins.odd_page_top_margin = 20.0;
		margins.odd_page_bottom_margin = 20.0;
		assert!(margins.are_odd_margins_specified());
		assert!(!margins.are_even_margins_specified());
		assert!(!margins.are_odd_even_margins_the_same());

		assert!(PageMarginsData::both(1.0, 2.0, 3.0, 4.0).are_odd_even_margins_the_same());
	}

	#[test]
	fn page_layout_usage() {
		let mut page = PageLayoutData::default();
		assert!(!page.is_used());
		page.page_width = 1200.0;
		assert!(!page.is_used());
		page.page_height = 1600.0;
		assert!(page.is_used());
	}
}
