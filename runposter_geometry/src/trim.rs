//! Trimming of the noisy start and end of a recorded route.
//!
//! GPS recordings often carry jitter around the start and finish, e.g. while
//! waiting for a signal or after stopping the watch late. Trimming cuts a
//! given distance off both ends.

use crate::{GeoPoint, Polyline};

/// Index of the first point, walking along `points`, at which the
/// accumulated distance exceeds `distance`. If it never does, the index of the
/// last visited point.
fn cut_index<'a>(mut points: impl Iterator<Item = (usize, &'a GeoPoint)>, distance: f64) -> usize {
	let Some((mut index, mut previous)) = points.next() else {
		return 0;
	};
	let mut length = 0.0;
	for (i, point) in points {
		length += previous.distance_meters(point);
		previous = point;
		index = i;
		if length > distance {
			break;
		}
	}
	index
}

/// Removes the points within `distance` meters (along the route) of either end.
///
/// Routes with fewer than two points are returned unchanged. The result keeps
/// at least the second point and at most the second to last point of the
/// walk; if both ends overlap, only the middle point is kept, so the result is
/// never empty.
///
/// # Examples
/// ```
/// use runposter_geometry::{GeoPoint, trim_route};
///
/// // 10 points, roughly 111 m apart
/// let route: Vec<GeoPoint> = (0..10).map(|i| GeoPoint::new(0.001 * f64::from(i), 0.0)).collect();
/// let trimmed = trim_route(&route, 250.0);
/// assert_eq!(trimmed, route[3..7]);
/// ```
#[must_use]
pub fn trim_route(route: &[GeoPoint], distance: f64) -> Polyline {
	if route.len() < 2 {
		return route.to_vec();
	}

	let start = cut_index(route.iter().enumerate(), distance).max(1);
	let end = (cut_index(route.iter().enumerate().rev(), distance) + 1).min(route.len());

	if start >= end {
		log::trace!(
			"route of {} points is shorter than twice {distance} m, keeping its middle point",
			route.len()
		);
		return vec![route[route.len() / 2]];
	}

	route[start..end].to_vec()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::EARTH_RADIUS_METERS;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	/// A straight route along the equator with points `spacing` meters apart.
	fn straight_route(count: usize, spacing: f64) -> Polyline {
		let step = (spacing / EARTH_RADIUS_METERS).to_degrees();
		(0..count).map(|i| GeoPoint::new(0.0, step * i as f64)).collect()
	}

	#[rstest]
	#[case(0)]
	#[case(1)]
	fn short_routes_are_unchanged(#[case] count: usize) {
		let route = straight_route(count, 100.0);
		assert_eq!(trim_route(&route, 250.0), route);
	}

	#[test]
	fn ten_points_100m_apart() {
		// cumulative distance exceeds 250 m at the 4th point from each end
		let route = straight_route(10, 100.0);
		let trimmed = trim_route(&route, 250.0);
		assert_eq!(trimmed, route[3..7].to_vec());
	}

	#[test]
	fn zero_distance_drops_only_the_endpoints() {
		let route = straight_route(10, 100.0);
		assert_eq!(trim_route(&route, 0.0), route[1..9].to_vec());
	}

	#[test]
	fn long_route_keeps_the_middle() {
		let route = straight_route(100, 10.0);
		let trimmed = trim_route(&route, 105.0);
		// 110 m is reached at index 11 from the start and index 88 from the end
		assert_eq!(trimmed, route[11..89].to_vec());
	}

	#[rstest]
	#[case(2)]
	#[case(5)]
	#[case(6)]
	#[case(7)]
	fn routes_within_threshold_keep_one_point(#[case] count: usize) {
		let route = straight_route(count, 100.0);
		assert_eq!(trim_route(&route, 250.0), vec![route[count / 2]]);
	}

	#[test]
	fn two_points_far_apart_keep_one() {
		let route = straight_route(2, 1000.0);
		// both cuts land on the other end
		assert_eq!(trim_route(&route, 250.0), vec![route[1]]);
	}

	#[test]
	fn duplicate_points_do_not_count() {
		let mut route = straight_route(10, 100.0);
		route.insert(0, route[0]);
		route.insert(0, route[0]);
		let trimmed = trim_route(&route, 250.0);
		assert_eq!(trimmed.first(), Some(&route[5]));
		assert_eq!(trimmed.last(), Some(&route[8]));
	}
}
