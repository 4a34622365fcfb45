use std::{
	fmt::Debug,
	ops::{Add, AddAssign, Mul, Sub},
};

/// A point or a size in canvas space.
///
/// `XY` is used for pixel coordinates produced by the projector as well as for
/// canvas sizes and offsets handed to the drawers. It is never geographic.
///
/// # Examples
/// ```
/// use runposter_core::XY;
///
/// let size = XY::new(200.0, 300.0);
/// let offset = XY::new(10.0, 20.0);
/// assert_eq!(offset + 0.5 * size, XY::new(110.0, 170.0));
/// ```
#[derive(Clone, Copy, Default, PartialEq)]
pub struct XY {
	pub x: f64,
	pub y: f64,
}

impl XY {
	#[must_use]
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Returns the point as a tuple `(x, y)`.
	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64) {
		(self.x, self.y)
	}

	/// Component-wise multiplication, e.g. a cell index times a cell pitch.
	#[must_use]
	pub fn scale(&self, other: XY) -> XY {
		XY::new(self.x * other.x, self.y * other.y)
	}

	/// Formats the point as `x,y` rounded to two decimals, the way points are
	/// written into SVG attributes.
	#[must_use]
	pub fn to_svg(&self) -> String {
		format!("{:.2},{:.2}", self.x, self.y)
	}
}

impl Add for XY {
	type Output = XY;
	fn add(self, rhs: XY) -> XY {
		XY::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl AddAssign for XY {
	fn add_assign(&mut self, rhs: XY) {
		self.x += rhs.x;
		self.y += rhs.y;
	}
}

impl Sub for XY {
	type Output = XY;
	fn sub(self, rhs: XY) -> XY {
		XY::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Mul<f64> for XY {
	type Output = XY;
	fn mul(self, rhs: f64) -> XY {
		XY::new(self.x * rhs, self.y * rhs)
	}
}

impl Mul<XY> for f64 {
	type Output = XY;
	fn mul(self, rhs: XY) -> XY {
		rhs * self
	}
}

impl From<(f64, f64)> for XY {
	fn from(value: (f64, f64)) -> Self {
		XY::new(value.0, value.1)
	}
}

impl From<[f64; 2]> for XY {
	fn from(value: [f64; 2]) -> Self {
		XY::new(value[0], value[1])
	}
}

impl Debug for XY {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "XY({}, {})", self.x, self.y)
	}
}
