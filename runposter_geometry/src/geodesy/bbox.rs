use super::GeoPoint;
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A latitude/longitude rectangle in degrees.
///
/// Latitudes always satisfy `lat_lo <= lat_hi`. Longitudes may be *inverted*
/// (`lng_lo > lng_hi`), in which case the box wraps across the antimeridian and
/// covers `lng_lo..=180` plus `-180..=lng_hi`.
///
/// # Examples
/// ```
/// use runposter_geometry::{BoundingBox, GeoPoint};
///
/// let bbox = BoundingBox::new(50.0, 55.0, 170.0, -170.0).unwrap();
/// assert!(bbox.is_inverted());
/// assert!(bbox.contains(&GeoPoint::new(52.0, 179.0)));
/// assert!(bbox.contains(&GeoPoint::new(52.0, -175.0)));
/// assert!(!bbox.contains(&GeoPoint::new(52.0, 0.0)));
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct BoundingBox {
	pub lat_lo: f64,
	pub lat_hi: f64,
	pub lng_lo: f64,
	pub lng_hi: f64,
}

impl BoundingBox {
	/// Creates a bounding box and checks it.
	///
	/// Latitudes must lie in `[-90, 90]` with `lat_lo <= lat_hi`, longitudes in
	/// `[-180, 180]`. `lng_lo > lng_hi` describes a box crossing the antimeridian.
	pub fn new(lat_lo: f64, lat_hi: f64, lng_lo: f64, lng_hi: f64) -> Result<Self> {
		BoundingBox {
			lat_lo,
			lat_hi,
			lng_lo,
			lng_hi,
		}
		.checked()
	}

	/// A box covering exactly one point.
	#[must_use]
	pub fn from_point(point: &GeoPoint) -> Self {
		let lng = normalize_lng(point.lng);
		BoundingBox {
			lat_lo: point.lat,
			lat_hi: point.lat,
			lng_lo: lng,
			lng_hi: lng,
		}
	}

	/// The smallest box covering all `points`, or `None` if there are none.
	///
	/// Longitudes are extended the shorter way around the globe, so a track
	/// crossing the antimeridian yields an inverted box instead of one that
	/// spans the whole world.
	pub fn from_points<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Option<Self> {
		let mut points = points.into_iter();
		let mut bbox = BoundingBox::from_point(points.next()?);
		for point in points {
			bbox.extend_point(point);
		}
		Some(bbox)
	}

	fn checked(self) -> Result<Self> {
		ensure!(
			[self.lat_lo, self.lat_hi, self.lng_lo, self.lng_hi]
				.iter()
				.all(|v| v.is_finite()),
			"bounding box coordinates must be finite: {self:?}"
		);
		ensure!(
			self.lat_lo >= -90.0 && self.lat_hi <= 90.0,
			"latitudes must be within [-90, 90]: {self:?}"
		);
		ensure!(
			self.lat_lo <= self.lat_hi,
			"lat_lo must not be greater than lat_hi: {self:?}"
		);
		ensure!(
			(-180.0..=180.0).contains(&self.lng_lo) && (-180.0..=180.0).contains(&self.lng_hi),
			"longitudes must be within [-180, 180]: {self:?}"
		);
		Ok(self)
	}

	/// `true` if the longitude range wraps across the antimeridian.
	#[must_use]
	pub fn is_inverted(&self) -> bool {
		self.lng_lo > self.lng_hi
	}

	/// Longitude span in degrees, accounting for wrap-around.
	#[must_use]
	pub fn lng_span(&self) -> f64 {
		(self.lng_hi - self.lng_lo).rem_euclid(360.0)
	}

	#[must_use]
	pub fn lat_span(&self) -> f64 {
		self.lat_hi - self.lat_lo
	}

	/// `true` if the box has no area, i.e. all points share a latitude or a
	/// longitude.
	#[must_use]
	pub fn is_degenerate(&self) -> bool {
		self.lat_lo == self.lat_hi || self.lng_lo == self.lng_hi
	}

	/// Point-containment test, borders included.
	#[must_use]
	pub fn contains(&self, point: &GeoPoint) -> bool {
		(self.lat_lo..=self.lat_hi).contains(&point.lat) && self.contains_lng(normalize_lng(point.lng))
	}

	fn contains_lng(&self, lng: f64) -> bool {
		if self.is_inverted() {
			lng >= self.lng_lo || lng <= self.lng_hi
		} else {
			// -180 and 180 are the same meridian
			(self.lng_lo..=self.lng_hi).contains(&lng) || (lng == 180.0 && self.lng_lo == -180.0)
		}
	}

	/// Grows the box to include `point`.
	///
	/// The longitude range grows towards whichever side is closer, which may
	/// turn the box into an inverted one.
	pub fn extend_point(&mut self, point: &GeoPoint) {
		self.lat_lo = self.lat_lo.min(point.lat);
		self.lat_hi = self.lat_hi.max(point.lat);

		let lng = normalize_lng(point.lng);
		if self.contains_lng(lng) {
			return;
		}
		let grow_lo = positive_distance(lng, self.lng_lo);
		let grow_hi = positive_distance(self.lng_hi, lng);
		if grow_lo < grow_hi {
			self.lng_lo = lng;
		} else {
			self.lng_hi = lng;
		}
	}

	/// Returns `(lat_lo, lat_hi, lng_lo, lng_hi)`.
	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.lat_lo, self.lat_hi, self.lng_lo, self.lng_hi)
	}
}

/// Maps -180 onto 180 so that the antimeridian has a single representation.
fn normalize_lng(lng: f64) -> f64 {
	if lng == -180.0 { 180.0 } else { lng }
}

/// Degrees needed to travel eastwards from `from` to `to`.
fn positive_distance(from: f64, to: f64) -> f64 {
	(to - from).rem_euclid(360.0)
}

impl Debug for BoundingBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"BoundingBox(lat: {}..{}, lng: {}..{})",
			self.lat_lo, self.lat_hi, self.lng_lo, self.lng_hi
		)
	}
}
