use super::{Layout, StyleConfig, TrimConfig};
use anyhow::{Context, Result};
use runposter_core::Units;
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// Everything that shapes a poster apart from the tracks themselves.
///
/// # Example YAML
/// ```yaml
/// title: "Running 2023"
/// athlete: "Jane Doe"
/// width: 200
/// height: 300
/// special_distance: 10
/// special_distance2: 21.1
/// units: imperial
/// layout: framed
/// colors:
///   track: "#4DD2FF"
/// trim:
///   distance: 300
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PosterConfig {
	/// Title printed in the header
	#[serde(default = "default_title")]
	pub title: String,

	/// Name printed in the footer
	#[serde(default = "default_athlete")]
	pub athlete: String,

	/// Poster width in SVG user units
	#[serde(default = "default_width")]
	pub width: f64,

	/// Poster height in SVG user units
	#[serde(default = "default_height")]
	pub height: f64,

	/// Framed with title and statistics, or plain
	#[serde(default)]
	pub layout: Layout,

	#[serde(default)]
	pub colors: StyleConfig,

	/// Tracks at least this long, in kilometers, get the special color
	#[serde(default = "default_special_distance")]
	pub special_distance: f64,

	/// Tracks at least this long, in kilometers, get the second special color
	#[serde(default = "default_special_distance2")]
	pub special_distance2: f64,

	/// Shorter tracks, in kilometers, are not drawn at all
	#[serde(default = "default_min_distance")]
	pub min_distance: f64,

	/// Duration of the animations in seconds
	#[serde(default = "default_animation_time")]
	pub animation_time: f64,

	/// Let tracks fade in year by year
	#[serde(default)]
	pub animate: bool,

	#[serde(default)]
	pub units: Units,

	#[serde(default)]
	pub trim: TrimConfig,
}

fn default_title() -> String {
	String::from("My Tracks")
}

fn default_athlete() -> String {
	String::from("John Doe")
}

fn default_width() -> f64 {
	200.0
}

fn default_height() -> f64 {
	300.0
}

fn default_special_distance() -> f64 {
	10.0
}

fn default_special_distance2() -> f64 {
	20.0
}

fn default_min_distance() -> f64 {
	1.0
}

fn default_animation_time() -> f64 {
	30.0
}

impl Default for PosterConfig {
	fn default() -> Self {
		Self {
			title: default_title(),
			athlete: default_athlete(),
			width: default_width(),
			height: default_height(),
			layout: Layout::default(),
			colors: StyleConfig::default(),
			special_distance: default_special_distance(),
			special_distance2: default_special_distance2(),
			min_distance: default_min_distance(),
			animation_time: default_animation_time(),
			animate: false,
			units: Units::default(),
			trim: TrimConfig::default(),
		}
	}
}

impl PosterConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("failed to open config file {path:?}"))?;
		PosterConfig::from_reader(BufReader::new(file)).with_context(|| format!("failed to parse config file {path:?}"))
	}

	/// Minimum track length in meters.
	#[must_use]
	pub fn min_distance_meters(&self) -> f64 {
		self.min_distance * 1000.0
	}
}
