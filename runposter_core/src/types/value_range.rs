use std::fmt::Debug;

/// A running min/max range over `f64` values.
///
/// A new range is undefined; it becomes defined with the first call to
/// [`extend`](Self::extend) and only ever grows afterwards.
///
/// # Examples
/// ```
/// use runposter_core::ValueRange;
///
/// let mut range = ValueRange::new();
/// assert!(!range.is_defined());
/// range.extend(3.0);
/// range.extend(-1.0);
/// assert_eq!(range.lower(), Some(-1.0));
/// assert_eq!(range.upper(), Some(3.0));
/// assert_eq!(range.diameter(), 4.0);
/// ```
#[derive(Clone, Copy, Default, PartialEq)]
pub struct ValueRange {
	bounds: Option<(f64, f64)>,
}

impl ValueRange {
	#[must_use]
	pub fn new() -> Self {
		Self { bounds: None }
	}

	/// Creates a defined range spanning `lower..=upper`.
	#[must_use]
	pub fn from_pair(lower: f64, upper: f64) -> Self {
		Self {
			bounds: Some((lower.min(upper), lower.max(upper))),
		}
	}

	#[must_use]
	pub fn is_defined(&self) -> bool {
		self.bounds.is_some()
	}

	#[must_use]
	pub fn lower(&self) -> Option<f64> {
		self.bounds.map(|b| b.0)
	}

	#[must_use]
	pub fn upper(&self) -> Option<f64> {
		self.bounds.map(|b| b.1)
	}

	/// Width of the range, `0.0` while undefined.
	#[must_use]
	pub fn diameter(&self) -> f64 {
		self.bounds.map_or(0.0, |(lo, hi)| hi - lo)
	}

	/// Grows the range so that it includes `value`.
	pub fn extend(&mut self, value: f64) {
		self.bounds = Some(match self.bounds {
			None => (value, value),
			Some((lo, hi)) => (lo.min(value), hi.max(value)),
		});
	}

	/// Position of `value` inside the range in `[0, 1]`.
	///
	/// Values outside the range are clamped. An undefined range or a range of
	/// zero width yields `0.0`.
	#[must_use]
	pub fn relative_position(&self, value: f64) -> f64 {
		match self.bounds {
			Some((lo, hi)) if hi > lo => ((value - lo) / (hi - lo)).clamp(0.0, 1.0),
			_ => 0.0,
		}
	}
}

impl Extend<f64> for ValueRange {
	fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
		for value in iter {
			ValueRange::extend(self, value);
		}
	}
}

impl FromIterator<f64> for ValueRange {
	fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
		let mut range = ValueRange::new();
		Extend::extend(&mut range, iter);
		range
	}
}

impl Debug for ValueRange {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.bounds {
			Some((lo, hi)) => write!(f, "ValueRange[{lo}, {hi}]"),
			None => write!(f, "ValueRange[undefined]"),
		}
	}
}
