use geo::{Distance, HaversineMeasure, Point};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Mean earth radius used for every distance on a poster, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_367_000.0;

/// An ordered list of points in recording order. Consecutive duplicates are kept.
pub type Polyline = Vec<GeoPoint>;

/// A latitude/longitude pair in degrees.
///
/// Serialized as a `[lat, lng]` array.
///
/// # Examples
/// ```
/// use runposter_geometry::{EARTH_RADIUS_METERS, GeoPoint};
///
/// let a = GeoPoint::new(0.0, 0.0);
/// let b = GeoPoint::new(0.0, 90.0);
/// assert!((a.distance(&b) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert!((a.distance_meters(&b) - EARTH_RADIUS_METERS * std::f64::consts::FRAC_PI_2).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
	pub lat: f64,
	pub lng: f64,
}

impl GeoPoint {
	#[must_use]
	pub const fn new(lat: f64, lng: f64) -> Self {
		Self { lat, lng }
	}

	/// Great-circle distance to `other` as an angle in radians.
	#[must_use]
	pub fn distance(&self, other: &GeoPoint) -> f64 {
		self.distance_meters(other) / EARTH_RADIUS_METERS
	}

	/// Great-circle distance to `other` in meters, using the haversine formula
	/// on a sphere of [`EARTH_RADIUS_METERS`].
	#[must_use]
	pub fn distance_meters(&self, other: &GeoPoint) -> f64 {
		HaversineMeasure::new(EARTH_RADIUS_METERS).distance(Point::from(*self), Point::from(*other))
	}
}

impl From<[f64; 2]> for GeoPoint {
	fn from(value: [f64; 2]) -> Self {
		GeoPoint::new(value[0], value[1])
	}
}

impl From<GeoPoint> for [f64; 2] {
	fn from(value: GeoPoint) -> Self {
		[value.lat, value.lng]
	}
}

impl From<GeoPoint> for Point {
	fn from(value: GeoPoint) -> Self {
		Point::new(value.lng, value.lat)
	}
}

impl Debug for GeoPoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "GeoPoint({}, {})", self.lat, self.lng)
	}
}
