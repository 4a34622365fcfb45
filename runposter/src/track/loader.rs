use super::{Track, YearRange};
use anyhow::{Context, Result};
use std::{fs::File, io::BufReader, path::Path};

/// Reads a JSON array of tracks.
pub fn load_tracks(path: &Path) -> Result<Vec<Track>> {
	let file = File::open(path).with_context(|| format!("failed to open tracks file {path:?}"))?;
	let tracks: Vec<Track> =
		serde_json::from_reader(BufReader::new(file)).with_context(|| format!("failed to parse tracks file {path:?}"))?;
	log::debug!("loaded {} tracks from {path:?}", tracks.len());
	Ok(tracks)
}

pub fn parse_tracks(json: &str) -> Result<Vec<Track>> {
	serde_json::from_str(json).context("failed to parse tracks")
}

/// Keeps the tracks of the selected years that are at least `min_distance`
/// meters long, ordered by start time.
///
/// Tracks without any point are dropped as well, since there is nothing to draw.
#[must_use]
pub fn filter_tracks(tracks: Vec<Track>, years: &YearRange, min_distance: f64) -> Vec<Track> {
	let total = tracks.len();
	let mut tracks: Vec<Track> = tracks
		.into_iter()
		.filter(|track| {
			let keep = years.contains(track.year()) && track.length >= min_distance && track.point_count() > 0;
			if !keep {
				log::trace!("skipping track {} ({:.0} m, {})", track.id, track.length, track.year());
			}
			keep
		})
		.collect();
	tracks.sort_by_key(|track| track.start_time);
	log::debug!("kept {} of {total} tracks for years {years}", tracks.len());
	tracks
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_helpers::make_track;
	use pretty_assertions::assert_eq;
	use std::io::Write;
	use time::macros::datetime;

	fn ids(tracks: &[Track]) -> Vec<u64> {
		tracks.iter().map(|t| t.id).collect()
	}

	#[test]
	fn filter_by_year_and_distance() {
		let tracks = vec![
			make_track(1, datetime!(2023-03-01 07:00 UTC), 5000.0, 5),
			make_track(2, datetime!(2021-03-01 07:00 UTC), 5000.0, 5),
			make_track(3, datetime!(2022-03-01 07:00 UTC), 500.0, 5),
			make_track(4, datetime!(2022-01-01 07:00 UTC), 12000.0, 5),
			make_track(5, datetime!(2022-06-01 07:00 UTC), 3000.0, 0),
		];
		let kept = filter_tracks(tracks.clone(), &YearRange::all(), 1000.0);
		assert_eq!(ids(&kept), vec![2, 4, 1]);

		let kept = filter_tracks(tracks, &"2022-2023".parse().unwrap(), 1000.0);
		assert_eq!(ids(&kept), vec![4, 1]);
	}

	#[test]
	fn sort_is_stable_for_equal_start_times() {
		let start = datetime!(2023-03-01 07:00 UTC);
		let tracks = vec![make_track(9, start, 5000.0, 2), make_track(3, start, 5000.0, 2)];
		assert_eq!(ids(&filter_tracks(tracks, &YearRange::all(), 0.0)), vec![9, 3]);
	}

	#[test]
	fn load_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(
			file,
			r#"[{{"id": 1, "start_time": "2023-05-01T06:30:00Z", "end_time": "2023-05-01T07:00:00Z", "length": 5000, "polylines": [[[52.5, 13.4], [52.6, 13.5]]]}}]"#
		)
		.unwrap();
		let tracks = load_tracks(file.path()).unwrap();
		assert_eq!(ids(&tracks), vec![1]);
	}

	#[test]
	fn load_errors_name_the_file() {
		let err = load_tracks(Path::new("does/not/exist.json")).unwrap_err();
		assert!(format!("{err:#}").contains("does/not/exist.json"));

		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "{{ not json").unwrap();
		let err = load_tracks(file.path()).unwrap_err();
		assert!(err.to_string().starts_with("failed to parse tracks file"));
	}

	#[test]
	fn parse_empty_list() {
		assert_eq!(parse_tracks("[]").unwrap(), vec![]);
	}
}
