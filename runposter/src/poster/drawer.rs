use super::{GridDrawer, LapsDrawer, Poster};
use crate::svg::SvgDocument;
use anyhow::{Result, bail};
#[cfg(feature = "cli")]
use clap::ValueEnum;
use runposter_core::XY;
use std::{fmt, str::FromStr};

/// Draws the tracks of a poster into a rectangle of the document.
pub trait TracksDrawer {
	/// Adds the elements for all tracks of `poster` to `doc`, inside the
	/// rectangle of `size` starting at `offset`.
	fn draw(&self, poster: &Poster, doc: &mut SvgDocument, size: XY, offset: XY) -> Result<()>;
}

/// The available poster types.
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerKind {
	/// One small map per track, laid out in a grid
	#[default]
	Grid,
	/// All tracks on top of each other, with start and end markers
	Laps,
}

impl DrawerKind {
	#[must_use]
	pub fn drawer(&self) -> Box<dyn TracksDrawer> {
		match self {
			DrawerKind::Grid => Box::new(GridDrawer),
			DrawerKind::Laps => Box::new(LapsDrawer),
		}
	}
}

impl FromStr for DrawerKind {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_lowercase().as_str() {
			"grid" => Ok(DrawerKind::Grid),
			"laps" => Ok(DrawerKind::Laps),
			_ => bail!("unknown poster type '{s}', expected 'grid' or 'laps'"),
		}
	}
}

impl fmt::Display for DrawerKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			DrawerKind::Grid => "grid",
			DrawerKind::Laps => "laps",
		})
	}
}
