use anyhow::{Context, Result, bail, ensure};
use std::{fmt, str::FromStr};

/// Selection of years to put on a poster.
///
/// Parsed from `all`, a single year like `2023`, or an inclusive range like
/// `2020-2023`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct YearRange {
	range: Option<(i32, i32)>,
}

impl YearRange {
	/// Every year.
	#[must_use]
	pub fn all() -> Self {
		Self { range: None }
	}

	pub fn new(from: i32, to: i32) -> Result<Self> {
		ensure!(from <= to, "year range {from}-{to} is reversed");
		Ok(Self { range: Some((from, to)) })
	}

	#[must_use]
	pub fn contains(&self, year: i32) -> bool {
		self.range.is_none_or(|(from, to)| (from..=to).contains(&year))
	}
}

fn parse_year(text: &str) -> Result<i32> {
	let text = text.trim();
	if text.len() != 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
		bail!("invalid year '{text}', expected four digits");
	}
	text.parse().with_context(|| format!("invalid year '{text}'"))
}

impl FromStr for YearRange {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		let s = s.trim();
		if s.eq_ignore_ascii_case("all") {
			return Ok(Self::all());
		}
		match s.split_once('-') {
			Some((from, to)) => Self::new(parse_year(from)?, parse_year(to)?),
			None => {
				let year = parse_year(s)?;
				Self::new(year, year)
			}
		}
	}
}

impl fmt::Display for YearRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.range {
			None => write!(f, "all"),
			Some((from, to)) if from == to => write!(f, "{from}"),
			Some((from, to)) => write!(f, "{from}-{to}"),
		}
	}
}
