use runposter_core::XY;
use serde::Deserialize;

/// Arrangement of the poster around the drawn tracks.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
	/// Title on top, athlete and statistics at the bottom
	#[default]
	Framed,
	/// Tracks only, with a small margin all around
	Plain,
}

impl Layout {
	/// Top left corner of the area the tracks are drawn into.
	#[must_use]
	pub fn body_offset(&self) -> XY {
		match self {
			Layout::Framed => XY::new(10.0, 30.0),
			Layout::Plain => XY::new(10.0, 10.0),
		}
	}

	/// Width and height of the poster that are not available to the tracks.
	#[must_use]
	pub fn body_margin(&self) -> XY {
		match self {
			Layout::Framed => XY::new(20.0, 60.0),
			Layout::Plain => XY::new(20.0, 20.0),
		}
	}

	#[must_use]
	pub fn has_frame(&self) -> bool {
		matches!(self, Layout::Framed)
	}
}
