use anyhow::{Result, bail};
#[cfg(feature = "cli")]
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

const METERS_PER_MILE: f64 = 1609.344;

/// Distance units used for the statistics printed on a poster.
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
	#[default]
	Metric,
	Imperial,
}

impl Units {
	/// Converts meters into kilometers or miles.
	#[must_use]
	pub fn from_meters(&self, meters: f64) -> f64 {
		match self {
			Units::Metric => meters / 1000.0,
			Units::Imperial => meters / METERS_PER_MILE,
		}
	}

	#[must_use]
	pub fn abbreviation(&self) -> &'static str {
		match self {
			Units::Metric => "km",
			Units::Imperial => "mi",
		}
	}
}

impl FromStr for Units {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_ascii_lowercase().as_str() {
			"metric" => Ok(Units::Metric),
			"imperial" => Ok(Units::Imperial),
			_ => bail!("unknown units {s:?}, expected \"metric\" or \"imperial\""),
		}
	}
}

impl fmt::Display for Units {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Units::Metric => "metric",
			Units::Imperial => "imperial",
		})
	}
}
