//! Colors of a poster, one per drawing role.
//!
//! The style is passed explicitly to every drawer, so several posters with
//! different styles can be rendered side by side.
//!
//! # Example YAML
//! ```yaml
//! colors:
//!   background: "#222222"
//!   track: "#4DD2FF"
//!   track2: "#2D5B9C"
//!   special: "#FFFF00"
//!   text: "#FFFFFF"
//! ```
use runposter_core::Color;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
	/// Poster background
	#[serde(default = "default_background")]
	pub background: Color,

	/// Color of regular tracks, used for the shortest track
	#[serde(default = "default_track")]
	pub track: Color,

	/// Color of the longest regular track; lengths in between are interpolated
	#[serde(default)]
	pub track2: Option<Color>,

	/// Color of special tracks
	#[serde(default = "default_special")]
	pub special: Color,

	/// Second special color, used for the longest distances
	#[serde(default)]
	pub special2: Option<Color>,

	/// Title and statistics
	#[serde(default = "default_text")]
	pub text: Color,
}

fn default_background() -> Color {
	Color::from_rgb(34.0 / 255.0, 34.0 / 255.0, 34.0 / 255.0)
}

fn default_track() -> Color {
	Color::from_rgb(77.0 / 255.0, 210.0 / 255.0, 1.0)
}

fn default_special() -> Color {
	Color::from_rgb(1.0, 1.0, 0.0)
}

fn default_text() -> Color {
	Color::WHITE
}

impl StyleConfig {
	/// Second track color, falling back to the first one.
	#[must_use]
	pub fn track2_or_track(&self) -> Color {
		self.track2.unwrap_or(self.track)
	}

	/// Second special color, falling back to the first one.
	#[must_use]
	pub fn special2_or_special(&self) -> Color {
		self.special2.unwrap_or(self.special)
	}
}

impl Default for StyleConfig {
	fn default() -> Self {
		Self {
			background: default_background(),
			track: default_track(),
			track2: None,
			special: default_special(),
			special2: None,
			text: default_text(),
		}
	}
}
