use anyhow::{Result, bail, ensure};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

const FLOAT_ERROR: f64 = 0.000_000_1;

/// An RGB color with components in `[0, 1]`.
///
/// Colors are parsed from `#rgb`/`#rrggbb` strings or a few CSS names and are
/// always written back as lowercase `#rrggbb`.
///
/// # Examples
/// ```
/// use runposter_core::Color;
///
/// let c: Color = "#4DD2FF".parse().unwrap();
/// assert_eq!(c.to_string(), "#4dd2ff");
/// assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
	r: f64,
	g: f64,
	b: f64,
}

impl Color {
	pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
	pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

	/// Creates a color from RGB components; each is clamped into `[0, 1]`.
	#[must_use]
	pub fn from_rgb(r: f64, g: f64, b: f64) -> Self {
		Self {
			r: r.clamp(0.0, 1.0),
			g: g.clamp(0.0, 1.0),
			b: b.clamp(0.0, 1.0),
		}
	}

	#[must_use]
	pub fn rgb(&self) -> (f64, f64, f64) {
		(self.r, self.g, self.b)
	}

	/// Returns `(hue, saturation, luminance)`, each in `[0, 1]`.
	#[must_use]
	pub fn to_hsl(&self) -> (f64, f64, f64) {
		let (r, g, b) = (self.r, self.g, self.b);
		let vmin = r.min(g).min(b);
		let vmax = r.max(g).max(b);
		let diff = vmax - vmin;
		let vsum = vmin + vmax;

		let l = vsum / 2.0;
		if diff < FLOAT_ERROR {
			return (0.0, 0.0, l);
		}

		let s = if l < 0.5 { diff / vsum } else { diff / (2.0 - vsum) };

		let dr = ((vmax - r) / 6.0 + diff / 2.0) / diff;
		let dg = ((vmax - g) / 6.0 + diff / 2.0) / diff;
		let db = ((vmax - b) / 6.0 + diff / 2.0) / diff;

		let mut h = if r == vmax {
			db - dg
		} else if g == vmax {
			1.0 / 3.0 + dr - db
		} else {
			2.0 / 3.0 + dg - dr
		};
		if h < 0.0 {
			h += 1.0;
		}
		if h > 1.0 {
			h -= 1.0;
		}

		(h, s, l)
	}

	/// Builds a color from hue, saturation and luminance in `[0, 1]`.
	#[must_use]
	pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
		if s == 0.0 {
			return Color::from_rgb(l, l, l);
		}

		let v2 = if l < 0.5 { l * (1.0 + s) } else { (l + s) - (s * l) };
		let v1 = 2.0 * l - v2;

		Color::from_rgb(
			hue_to_rgb(v1, v2, h + 1.0 / 3.0),
			hue_to_rgb(v1, v2, h),
			hue_to_rgb(v1, v2, h - 1.0 / 3.0),
		)
	}

	/// Lowercase `#rrggbb`.
	#[must_use]
	pub fn to_hex(&self) -> String {
		let [r, g, b] = [self.r, self.g, self.b].map(|v| (v * 255.0).round_ties_even() as u8);
		format!("#{r:02x}{g:02x}{b:02x}")
	}
}

fn hue_to_rgb(v1: f64, v2: f64, hue: f64) -> f64 {
	let h = hue.rem_euclid(1.0);
	if 6.0 * h < 1.0 {
		v1 + (v2 - v1) * 6.0 * h
	} else if 2.0 * h < 1.0 {
		v2
	} else if 3.0 * h < 2.0 {
		v1 + (v2 - v1) * (2.0 / 3.0 - h) * 6.0
	} else {
		v1
	}
}

fn parse_hex_digits(digits: &str) -> Result<Color> {
	ensure!(
		digits.chars().all(|c| c.is_ascii_hexdigit()),
		"invalid hex digits in color: #{digits}"
	);
	let expanded: String = match digits.len() {
		3 => digits.chars().flat_map(|c| [c, c]).collect(),
		6 => digits.to_string(),
		n => bail!("hex color must have 3 or 6 digits, but has {n}: #{digits}"),
	};
	let channel = |i: usize| -> Result<f64> { Ok(f64::from(u8::from_str_radix(&expanded[i..i + 2], 16)?) / 255.0) };
	Ok(Color::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl FromStr for Color {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		let text = s.trim().to_ascii_lowercase();
		if let Some(digits) = text.strip_prefix('#') {
			return parse_hex_digits(digits);
		}
		Ok(match text.as_str() {
			"black" => Color::BLACK,
			"white" => Color::WHITE,
			"red" => Color::from_rgb(1.0, 0.0, 0.0),
			"green" => Color::from_rgb(0.0, 128.0 / 255.0, 0.0),
			"blue" => Color::from_rgb(0.0, 0.0, 1.0),
			"yellow" => Color::from_rgb(1.0, 1.0, 0.0),
			"gray" | "grey" => Color::from_rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0),
			_ => bail!("unknown color: {s:?}"),
		})
	}
}

impl TryFrom<String> for Color {
	type Error = anyhow::Error;

	fn try_from(value: String) -> Result<Self> {
		value.parse()
	}
}

impl From<Color> for String {
	fn from(value: Color) -> Self {
		value.to_hex()
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_hex())
	}
}

/// Interpolates between two colors in HSL space.
///
/// `ratio` is clamped into `[0, 1]`; hue, saturation and luminance are blended
/// independently. Hue is not wrapped, so red to blue passes through green.
///
/// # Examples
/// ```
/// use runposter_core::{Color, interpolate_color};
///
/// let mid = interpolate_color(&Color::BLACK, &Color::WHITE, 0.5);
/// assert_eq!(mid.to_string(), "#808080");
/// ```
#[must_use]
pub fn interpolate_color(color1: &Color, color2: &Color, ratio: f64) -> Color {
	let ratio = ratio.clamp(0.0, 1.0);
	let (h1, s1, l1) = color1.to_hsl();
	let (h2, s2, l2) = color2.to_hsl();
	Color::from_hsl(
		(1.0 - ratio) * h1 + ratio * h2,
		(1.0 - ratio) * s1 + ratio * s2,
		(1.0 - ratio) * l1 + ratio * l2,
	)
}
