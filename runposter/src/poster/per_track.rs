use super::{Poster, TracksDrawer};
use crate::{Layout, PosterConfig, Track};
use anyhow::{Context, Result};
use std::{
	fs,
	path::{Path, PathBuf},
};
use time::{format_description::BorrowedFormatItem, macros::format_description};

/// Size of a single-track poster.
pub const TRACK_POSTER_WIDTH: f64 = 120.0;
pub const TRACK_POSTER_HEIGHT: f64 = 190.0;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year][month][day]");

/// Path of the poster of `track` below `dir`: `run_<year>/<yyyymmdd>_<id>.svg`.
pub fn track_poster_path(dir: &Path, track: &Track) -> Result<PathBuf> {
	let date = track
		.start_time
		.format(DATE_FORMAT)
		.with_context(|| format!("failed to format start time of track {}", track.id))?;
	Ok(dir
		.join(format!("run_{}", track.year()))
		.join(format!("{date}_{}.svg", track.id)))
}

/// Draws every track on its own small plain poster.
///
/// Posters that already exist are left alone, so repeated runs only add the
/// new tracks. Tracks without points are skipped. Returns the written files.
pub fn render_track_posters(
	config: &PosterConfig,
	tracks: &[Track],
	drawer: &dyn TracksDrawer,
	dir: &Path,
) -> Result<Vec<PathBuf>> {
	let config = PosterConfig {
		width: TRACK_POSTER_WIDTH,
		height: TRACK_POSTER_HEIGHT,
		layout: Layout::Plain,
		..config.clone()
	};

	let mut written = Vec::new();
	for track in tracks {
		if track.point_count() == 0 {
			log::debug!("track {} has no points, skipping", track.id);
			continue;
		}
		let path = track_poster_path(dir, track)?;
		if path.exists() {
			log::trace!("{path:?} exists, skipping track {}", track.id);
			continue;
		}
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).with_context(|| format!("failed to create directory {parent:?}"))?;
		}

		let poster = Poster::new(config.clone(), vec![track.clone()])?;
		let svg = poster.render(drawer)?;
		fs::write(&path, svg).with_context(|| format!("failed to write poster to {path:?}"))?;
		written.push(path);
	}
	log::debug!("{} of {} track posters written to {dir:?}", written.len(), tracks.len());
	Ok(written)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		LapsDrawer,
		test_helpers::{make_track, sample_tracks},
	};
	use pretty_assertions::assert_eq;
	use time::macros::datetime;

	#[test]
	fn path_layout() {
		let track = make_track(42, datetime!(2023-05-07 06:30 +2), 5000.0, 3);
		assert_eq!(
			track_poster_path(Path::new("out"), &track).unwrap(),
			PathBuf::from("out/run_2023/20230507_42.svg")
		);
	}

	#[test]
	fn one_plain_poster_per_track() {
		let dir = tempfile::tempdir().unwrap();
		let mut tracks = sample_tracks();
		tracks.push(make_track(5, datetime!(2023-07-01 07:00 UTC), 4000.0, 0));

		let written = render_track_posters(&PosterConfig::default(), &tracks, &LapsDrawer, dir.path()).unwrap();
		let names: Vec<String> = written
			.iter()
			.map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
			.collect();
		assert_eq!(
			names,
			vec![
				"run_2022/20220401_1.svg",
				"run_2022/20220901_2.svg",
				"run_2023/20230201_3.svg",
				"run_2023/20230601_4.svg",
			]
		);

		let svg = fs::read_to_string(&written[0]).unwrap();
		assert!(svg.contains("viewBox=\"0 0 120 190\""));
		assert!(!svg.contains("<text"));
		assert_eq!(svg.matches("<animateMotion ").count(), 1);
	}

	#[test]
	fn existing_posters_are_kept() {
		let dir = tempfile::tempdir().unwrap();
		let tracks = sample_tracks();
		let first = render_track_posters(&PosterConfig::default(), &tracks[..2], &LapsDrawer, dir.path()).unwrap();
		assert_eq!(first.len(), 2);
		fs::write(&first[0], "kept").unwrap();

		let second = render_track_posters(&PosterConfig::default(), &tracks, &LapsDrawer, dir.path()).unwrap();
		assert_eq!(second.len(), 2);
		assert_eq!(fs::read_to_string(&first[0]).unwrap(), "kept");
	}
}
