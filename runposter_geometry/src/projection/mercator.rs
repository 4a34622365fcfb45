use super::{Run, RunSplitter};
use crate::{BoundingBox, GeoPoint};
use anyhow::{Result, ensure};
use runposter_core::XY;
use std::f64::consts::{FRAC_PI_4, PI};

/// Polylines longer than this are decimated before projection.
pub const ZOOM_THRESHOLD: usize = 400;

static MAX_MERCATOR_LAT: f64 = 89.9999;

/// Maps a longitude to `x` in `[0, 2]`.
#[must_use]
pub fn lng2x(lng_deg: f64) -> f64 {
	lng_deg / 180.0 + 1.0
}

/// Maps a latitude to Mercator `y`; north is up, so `y` shrinks with latitude.
///
/// Latitudes are clamped just short of the poles, where `y` diverges.
#[must_use]
pub fn lat2y(lat_deg: f64) -> f64 {
	let lat_deg = lat_deg.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
	0.5 - (FRAC_PI_4 * (1.0 + lat_deg / 90.0)).tan().ln() / PI
}

#[must_use]
pub fn latlng2xy(point: &GeoPoint) -> XY {
	XY::new(lng2x(point.lng), lat2y(point.lat))
}

/// Projects lat/lng polylines into a canvas rectangle.
///
/// The bounding box is scaled uniformly so that it fits the canvas while
/// keeping its aspect ratio, and centered inside the canvas. Points outside
/// the bounding box are dropped and split their polyline into separate runs.
///
/// # Examples
/// ```
/// use runposter_core::XY;
/// use runposter_geometry::{BoundingBox, GeoPoint, MercatorProjector};
///
/// let bbox = BoundingBox::new(0.0, 1.0, 0.0, 1.0).unwrap();
/// let projector = MercatorProjector::new(&bbox, XY::new(100.0, 100.0), XY::new(0.0, 0.0))
///     .unwrap()
///     .unwrap();
/// // the box is slightly taller than wide, so it fills the height and is
/// // centered horizontally
/// let south_west = projector.project_point(&GeoPoint::new(0.0, 0.0));
/// let north_east = projector.project_point(&GeoPoint::new(1.0, 1.0));
/// assert!((south_west.y - 100.0).abs() < 1e-6);
/// assert!(north_east.y.abs() < 1e-6);
/// assert!(south_west.x > 0.0);
/// assert!((south_west.x + north_east.x - 100.0).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MercatorProjector {
	bbox: BoundingBox,
	min_x: f64,
	min_y: f64,
	scale: f64,
	origin: XY,
	zoom_threshold: usize,
}

impl MercatorProjector {
	/// Computes scale and translation for `bbox` drawn into `size` at `offset`.
	///
	/// Returns `Ok(None)` if the bounding box has no width or no height, and an
	/// error if the box or the canvas is malformed (non-finite or non-positive).
	pub fn new(bbox: &BoundingBox, size: XY, offset: XY) -> Result<Option<Self>> {
		ensure!(
			size.x > 0.0 && size.y > 0.0 && size.x.is_finite() && size.y.is_finite(),
			"canvas size must be positive and finite: {size:?}"
		);
		ensure!(
			offset.x.is_finite() && offset.y.is_finite(),
			"canvas offset must be finite: {offset:?}"
		);

		let min_x = lng2x(bbox.lng_lo);
		// a single modulo replaces repeated +/-2 corrections for boxes crossing the antimeridian
		let d_x = (lng2x(bbox.lng_hi) - min_x).rem_euclid(2.0);
		let min_y = lat2y(bbox.lat_lo);
		let max_y = lat2y(bbox.lat_hi);
		let d_y = (max_y - min_y).abs();
		ensure!(
			d_x.is_finite() && d_y.is_finite() && min_x.is_finite() && min_y.is_finite(),
			"malformed bounding box: {bbox:?}"
		);

		if d_x == 0.0 || d_y == 0.0 {
			log::debug!("bounding box {bbox:?} has no area, nothing to project");
			return Ok(None);
		}

		let scale = if size.x / size.y <= d_x / d_y {
			size.x / d_x
		} else {
			size.y / d_y
		};
		let origin = offset + 0.5 * (size - scale * XY::new(d_x, -d_y));
		log::trace!("projecting {bbox:?} into {size:?} at {offset:?} with scale {scale}");

		Ok(Some(Self {
			bbox: *bbox,
			min_x,
			min_y,
			scale,
			origin,
			zoom_threshold: ZOOM_THRESHOLD,
		}))
	}

	/// Sets the polyline length above which points are decimated.
	#[must_use]
	pub fn with_zoom_threshold(mut self, zoom_threshold: usize) -> Self {
		self.zoom_threshold = zoom_threshold.max(1);
		self
	}

	#[must_use]
	pub fn scale(&self) -> f64 {
		self.scale
	}

	#[must_use]
	pub fn bbox(&self) -> &BoundingBox {
		&self.bbox
	}

	/// Stride used to decimate a polyline of `len` points.
	#[must_use]
	pub fn step(&self, len: usize) -> usize {
		len / self.zoom_threshold + 1
	}

	/// Projects a single point without checking the bounding box.
	///
	/// Longitudes west of the box are unwrapped by one turn so that boxes
	/// crossing the antimeridian stay contiguous on the canvas.
	#[must_use]
	pub fn project_point(&self, point: &GeoPoint) -> XY {
		let xy = latlng2xy(point);
		let x = (xy.x - self.min_x).rem_euclid(2.0);
		self.origin + self.scale * XY::new(x, xy.y - self.min_y)
	}

	/// Projects one polyline into zero or more runs.
	#[must_use]
	pub fn project_polyline(&self, polyline: &[GeoPoint]) -> Vec<Run> {
		let mut splitter = RunSplitter::new();
		for point in polyline.iter().step_by(self.step(polyline.len())) {
			if self.bbox.contains(point) {
				splitter.inside(self.project_point(point));
			} else {
				splitter.outside();
			}
		}
		splitter.finish()
	}

	/// Projects every polyline and concatenates the runs in input order.
	#[must_use]
	pub fn project_polylines<P: AsRef<[GeoPoint]>>(&self, polylines: &[P]) -> Vec<Run> {
		let runs: Vec<Run> = polylines
			.iter()
			.flat_map(|polyline| self.project_polyline(polyline.as_ref()))
			.collect();
		log::trace!("{} polylines projected into {} runs", polylines.len(), runs.len());
		runs
	}
}

/// Projects `polylines` that lie within `bbox` into the canvas rectangle
/// `offset..offset + size`.
///
/// A bounding box without area yields an empty result.
pub fn project<P: AsRef<[GeoPoint]>>(bbox: &BoundingBox, size: XY, offset: XY, polylines: &[P]) -> Result<Vec<Run>> {
	Ok(match MercatorProjector::new(bbox, size, offset)? {
		Some(projector) => projector.project_polylines(polylines),
		None => Vec::new(),
	})
}
