use runposter_geometry::{BoundingBox, Polyline, trim_route};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One recorded activity, ready to be drawn.
///
/// A track consists of one or more polylines; a recording that was paused
/// and resumed somewhere else has several.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Track {
	pub id: u64,

	#[serde(default)]
	pub name: String,

	#[serde(with = "time::serde::rfc3339")]
	pub start_time: OffsetDateTime,

	#[serde(with = "time::serde::rfc3339")]
	pub end_time: OffsetDateTime,

	/// Length in meters
	pub length: f64,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub average_heartrate: Option<f64>,

	#[serde(default)]
	pub polylines: Vec<Polyline>,

	/// Highlighted track, e.g. a race
	#[serde(default)]
	pub special: bool,
}

impl Track {
	/// The smallest box around all points of the track, or `None` for a track
	/// without points.
	#[must_use]
	pub fn bbox(&self) -> Option<BoundingBox> {
		BoundingBox::from_points(self.polylines.iter().flatten())
	}

	#[must_use]
	pub fn year(&self) -> i32 {
		self.start_time.year()
	}

	#[must_use]
	pub fn point_count(&self) -> usize {
		self.polylines.iter().map(Vec::len).sum()
	}

	/// Copy of the polylines with `distance` meters cut off both ends of each.
	#[must_use]
	pub fn trimmed_polylines(&self, distance: f64) -> Vec<Polyline> {
		self.polylines.iter().map(|line| trim_route(line, distance)).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_helpers::make_track;
	use approx::assert_relative_eq;
	use runposter_geometry::GeoPoint;
	use time::macros::datetime;

	#[test]
	fn bbox_covers_all_polylines() {
		let mut track = make_track(1, datetime!(2023-05-01 06:30 UTC), 5000.0, 3);
		track.polylines.push(vec![GeoPoint::new(52.0, 13.0)]);
		let bbox = track.bbox().unwrap();
		assert_eq!((bbox.lat_lo, bbox.lng_lo), (52.0, 13.0));
		assert_relative_eq!(bbox.lat_hi, 52.502);
		assert_relative_eq!(bbox.lng_hi, 13.401);
		assert_eq!(track.point_count(), 4);
	}

	#[test]
	fn empty_track_has_no_bbox() {
		let mut track = make_track(1, datetime!(2023-05-01 06:30 UTC), 0.0, 0);
		assert!(track.bbox().is_none());
		track.polylines.clear();
		assert!(track.bbox().is_none());
	}

	#[test]
	fn year() {
		let track = make_track(1, datetime!(2021-12-31 23:30 UTC), 5000.0, 2);
		assert_eq!(track.year(), 2021);
	}

	#[test]
	fn trimmed_polylines_keep_the_middle() {
		let track = make_track(1, datetime!(2023-05-01 06:30 UTC), 5000.0, 30);
		let trimmed = track.trimmed_polylines(500.0);
		assert_eq!(trimmed.len(), 1);
		assert!(trimmed[0].len() < 30);
		assert!(!trimmed[0].is_empty());
		assert_eq!(track.polylines[0].len(), 30);
	}

	#[test]
	fn deserialize() {
		let json = r#"{
			"id": 7,
			"name": "Evening Run",
			"start_time": "2022-06-01T18:00:00+02:00",
			"end_time": "2022-06-01T18:45:00+02:00",
			"length": 8123.4,
			"polylines": [[[52.5, 13.4], [52.51, 13.41]]]
		}"#;
		let track: Track = serde_json::from_str(json).unwrap();
		assert_eq!(track.id, 7);
		assert_eq!(track.year(), 2022);
		assert_eq!(track.polylines[0][1], GeoPoint::new(52.51, 13.41));
		assert!(!track.special);
		assert_eq!(track.average_heartrate, None);
	}

	#[test]
	fn deserialize_rejects_bad_time() {
		let json = r#"{"id": 1, "start_time": "yesterday", "end_time": "today", "length": 1.0}"#;
		assert!(serde_json::from_str::<Track>(json).is_err());
	}
}
