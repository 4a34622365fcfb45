use crate::{PosterConfig, Poster, Track};
use runposter_geometry::GeoPoint;
use time::{Duration, OffsetDateTime, macros::datetime};

/// A track with a single straight polyline of `points` points heading north-east.
pub fn make_track(id: u64, start_time: OffsetDateTime, length: f64, points: usize) -> Track {
	let line = (0..points)
		.map(|i| GeoPoint::new(52.5 + 0.001 * i as f64, 13.4 + 0.0005 * i as f64))
		.collect();
	Track {
		id,
		name: format!("Run {id}"),
		start_time,
		end_time: start_time + Duration::minutes(30),
		length,
		average_heartrate: None,
		polylines: vec![line],
		special: false,
	}
}

/// Four tracks over two years: 3 km, 8 km, 12 km and 25 km.
pub fn sample_tracks() -> Vec<Track> {
	vec![
		make_track(1, datetime!(2022-04-01 07:00 UTC), 3000.0, 20),
		make_track(2, datetime!(2022-09-01 07:00 UTC), 8000.0, 20),
		make_track(3, datetime!(2023-02-01 07:00 UTC), 12000.0, 20),
		make_track(4, datetime!(2023-06-01 07:00 UTC), 25000.0, 20),
	]
}

pub fn sample_poster(config: PosterConfig) -> Poster {
	Poster::new(config, sample_tracks()).unwrap()
}
