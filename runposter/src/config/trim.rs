use serde::Deserialize;

/// Trimming of track ends on the laps poster.
///
/// Tracks at least `min_length` meters long lose `distance` meters at both
/// ends before they are drawn.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TrimConfig {
	/// Minimum track length in meters for trimming to apply
	#[serde(default = "default_min_length")]
	pub min_length: f64,

	/// Distance in meters removed at each end
	#[serde(default = "default_distance")]
	pub distance: f64,
}

fn default_min_length() -> f64 {
	1500.0
}

fn default_distance() -> f64 {
	500.0
}

impl TrimConfig {
	#[must_use]
	pub fn applies_to(&self, length: f64) -> bool {
		length >= self.min_length
	}
}

impl Default for TrimConfig {
	fn default() -> Self {
		Self {
			min_length: default_min_length(),
			distance: default_distance(),
		}
	}
}
