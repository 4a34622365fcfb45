use super::TracksDrawer;
use crate::{PosterConfig, Track, svg::Element, svg::SvgDocument};
use anyhow::{Result, ensure};
use itertools::Itertools;
use runposter_core::{Color, ValueRange, XY, format_float, interpolate_color};

/// A set of tracks together with the configuration they are drawn with.
///
/// The tracks are kept in order of their start time. Statistics used by
/// every drawer, like the range of track lengths and the list of years, are
/// computed once on creation.
#[derive(Clone, Debug)]
pub struct Poster {
	config: PosterConfig,
	tracks: Vec<Track>,
	length_range: ValueRange,
	years: Vec<i32>,
	total_length: f64,
}

impl Poster {
	/// Creates a poster; fails if there is no track to draw.
	pub fn new(config: PosterConfig, mut tracks: Vec<Track>) -> Result<Self> {
		ensure!(!tracks.is_empty(), "no tracks to draw");
		let margin = config.layout.body_margin();
		ensure!(
			config.width > margin.x && config.height > margin.y,
			"poster size {}x{} leaves no room for tracks, it must exceed {}x{}",
			config.width,
			config.height,
			margin.x,
			margin.y
		);

		tracks.sort_by_key(|track| track.start_time);
		let length_range: ValueRange = tracks.iter().map(|track| track.length).collect();
		// local years need not follow the order of start instants
		let years = tracks.iter().map(Track::year).sorted_unstable().dedup().collect_vec();
		let total_length = tracks.iter().map(|track| track.length).sum();

		log::debug!(
			"poster with {} tracks in {} years, lengths {length_range:?}",
			tracks.len(),
			years.len()
		);

		Ok(Self {
			config,
			tracks,
			length_range,
			years,
			total_length,
		})
	}

	#[must_use]
	pub fn config(&self) -> &PosterConfig {
		&self.config
	}

	#[must_use]
	pub fn tracks(&self) -> &[Track] {
		&self.tracks
	}

	#[must_use]
	pub fn length_range(&self) -> &ValueRange {
		&self.length_range
	}

	/// Distinct years of all tracks, ascending.
	#[must_use]
	pub fn years(&self) -> &[i32] {
		&self.years
	}

	/// Total length of all tracks in meters.
	#[must_use]
	pub fn total_length(&self) -> f64 {
		self.total_length
	}

	/// Position of `year` in [`years`](Self::years), 0 for unknown years.
	#[must_use]
	pub fn year_index(&self, year: i32) -> usize {
		self.years.binary_search(&year).unwrap_or(0)
	}

	/// Stroke color of a track.
	///
	/// Tracks reaching `special_distance2` get the second special color, tracks
	/// reaching `special_distance` or marked as special get the special color.
	/// All others are shaded from `track` to `track2` by their length.
	#[must_use]
	pub fn track_color(&self, track: &Track) -> Color {
		let colors = &self.config.colors;
		let km = track.length / 1000.0;
		if km >= self.config.special_distance2 {
			colors.special2_or_special()
		} else if km >= self.config.special_distance || track.special {
			colors.special
		} else {
			interpolate_color(
				&colors.track,
				&colors.track2_or_track(),
				self.length_range.relative_position(track.length),
			)
		}
	}

	/// Size of the area the tracks are drawn into.
	#[must_use]
	pub fn body_size(&self) -> XY {
		XY::new(self.config.width, self.config.height) - self.config.layout.body_margin()
	}

	/// Lays out the background, for a framed layout also header and footer,
	/// and lets `drawer` fill the body.
	pub fn render_document(&self, drawer: &dyn TracksDrawer) -> Result<SvgDocument> {
		let config = &self.config;
		let text_color = config.colors.text.to_string();
		let mut doc = SvgDocument::new(config.width, config.height);

		doc.add(
			Element::rect(XY::default(), XY::new(config.width, config.height))
				.attr("fill", config.colors.background.to_string()),
		);

		if !config.layout.has_frame() {
			drawer.draw(self, &mut doc, self.body_size(), config.layout.body_offset())?;
			return Ok(doc);
		}

		doc.add(
			Element::label(XY::new(10.0, 20.0), &config.title)
				.attr("fill", &text_color)
				.attr("style", "font-size:12px; font-family:Arial; font-weight:bold;"),
		);

		drawer.draw(self, &mut doc, self.body_size(), config.layout.body_offset())?;

		let footer_y = config.height - 10.0;
		doc.add(
			Element::label(XY::new(10.0, footer_y), &config.athlete)
				.attr("fill", &text_color)
				.attr("style", "font-size:4px; font-family:Arial;"),
		);
		doc.add(
			Element::label(XY::new(config.width - 10.0, footer_y), &self.statistics())
				.attr("fill", &text_color)
				.attr("text-anchor", "end")
				.attr("style", "font-size:4px; font-family:Arial;"),
		);

		Ok(doc)
	}

	/// Renders the poster to SVG text.
	pub fn render(&self, drawer: &dyn TracksDrawer) -> Result<String> {
		Ok(self.render_document(drawer)?.to_string())
	}

	/// Footer line, e.g. `Runs: 4  Distance: 48.0 km`.
	#[must_use]
	pub fn statistics(&self) -> String {
		let units = self.config.units;
		format!(
			"Runs: {}  Distance: {} {}",
			self.tracks.len(),
			format_float(units.from_meters(self.total_length)),
			units.abbreviation()
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		Layout,
		test_helpers::{make_track, sample_poster, sample_tracks},
	};
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use runposter_core::Units;
	use time::macros::datetime;

	struct NoopDrawer;

	impl TracksDrawer for NoopDrawer {
		fn draw(&self, _: &Poster, doc: &mut SvgDocument, size: XY, offset: XY) -> Result<()> {
			doc.add(Element::rect(offset, size).attr("id", "body"));
			Ok(())
		}
	}

	#[test]
	fn no_tracks_is_an_error() {
		let err = Poster::new(PosterConfig::default(), vec![]).unwrap_err();
		assert_eq!(err.to_string(), "no tracks to draw");
	}

	#[test]
	fn statistics() {
		let poster = sample_poster(PosterConfig::default());
		assert_eq!(poster.years(), &[2022, 2023]);
		assert_eq!(poster.year_index(2023), 1);
		assert_eq!(poster.total_length(), 48000.0);
		assert_eq!(poster.length_range().lower(), Some(3000.0));
		assert_eq!(poster.length_range().upper(), Some(25000.0));
		assert_eq!(poster.statistics(), "Runs: 4  Distance: 48.0 km");

		let imperial = sample_poster(PosterConfig {
			units: Units::Imperial,
			..PosterConfig::default()
		});
		assert_eq!(imperial.statistics(), "Runs: 4  Distance: 29.8 mi");
	}

	#[test]
	fn tracks_are_sorted_by_start_time() {
		let mut tracks = sample_tracks();
		tracks.reverse();
		let poster = Poster::new(PosterConfig::default(), tracks).unwrap();
		let ids: Vec<u64> = poster.tracks().iter().map(|t| t.id).collect();
		assert_eq!(ids, vec![1, 2, 3, 4]);
	}

	#[test]
	fn track_colors() {
		let mut config = PosterConfig::default();
		config.colors.track = "#000000".parse().unwrap();
		config.colors.track2 = Some("#ffffff".parse().unwrap());
		config.colors.special2 = Some("#ff0000".parse().unwrap());
		let poster = sample_poster(config);
		let color = |track: &Track| poster.track_color(track).to_string();

		let tracks = poster.tracks();
		assert_eq!(color(&tracks[0]), "#000000");
		// 8 km sits at 5/22 of the 3 km..25 km range
		assert_eq!(color(&tracks[1]), interpolate_color(&Color::BLACK, &Color::WHITE, 5.0 / 22.0).to_string());
		assert_eq!(color(&tracks[2]), "#ffff00");
		assert_eq!(color(&tracks[3]), "#ff0000");

		let mut special = make_track(5, datetime!(2023-01-01 07:00 UTC), 3000.0, 2);
		special.special = true;
		assert_eq!(color(&special), "#ffff00");
	}

	#[test]
	fn render_layout() {
		let poster = sample_poster(PosterConfig::default());
		let doc = poster.render_document(&NoopDrawer).unwrap();
		let rects = doc.find_all("rect");
		assert_eq!(rects.len(), 2);
		assert_eq!(rects[0].get_attr("fill"), Some("#222222"));
		assert_eq!(rects[1].get_attr("x"), Some("10"));
		assert_eq!(rects[1].get_attr("y"), Some("30"));
		assert_eq!(rects[1].get_attr("width"), Some("180"));
		assert_eq!(rects[1].get_attr("height"), Some("240"));

		let svg = poster.render(&NoopDrawer).unwrap();
		assert!(svg.contains(">My Tracks</text>"));
		assert!(svg.contains(">John Doe</text>"));
		assert!(svg.contains(">Runs: 4  Distance: 48.0 km</text>"));
		assert!(svg.ends_with("</svg>\n"));
	}

	#[test]
	fn years_are_sorted_across_time_zones() {
		// the first track starts last in UTC but on New Year's Eve locally
		let tracks = vec![
			make_track(1, datetime!(2022-12-31 23:30 -5), 5000.0, 5),
			make_track(2, datetime!(2023-01-01 01:00 UTC), 5000.0, 5),
			make_track(3, datetime!(2023-06-01 07:00 UTC), 5000.0, 5),
		];
		let poster = Poster::new(PosterConfig::default(), tracks).unwrap();
		assert_eq!(poster.years(), &[2022, 2023]);
		assert_eq!(poster.year_index(2022), 0);
		assert_eq!(poster.year_index(2023), 1);
	}

	#[rstest]
	#[case(Layout::Framed, 20.0, 300.0)]
	#[case(Layout::Framed, 200.0, 60.0)]
	#[case(Layout::Plain, 200.0, 20.0)]
	#[case(Layout::Framed, -1.0, 300.0)]
	fn too_small_for_the_layout(#[case] layout: Layout, #[case] width: f64, #[case] height: f64) {
		let config = PosterConfig {
			layout,
			width,
			height,
			..PosterConfig::default()
		};
		let err = Poster::new(config, sample_tracks()).unwrap_err();
		assert!(err.to_string().contains("leaves no room for tracks"));
	}

	#[test]
	fn plain_layout_has_no_texts() {
		let poster = sample_poster(PosterConfig {
			layout: Layout::Plain,
			width: 120.0,
			height: 190.0,
			..PosterConfig::default()
		});
		let doc = poster.render_document(&NoopDrawer).unwrap();
		assert!(doc.find_all("text").is_empty());
		let rects = doc.find_all("rect");
		assert_eq!(rects.len(), 2);
		assert_eq!(rects[1].get_attr("x"), Some("10"));
		assert_eq!(rects[1].get_attr("y"), Some("10"));
		assert_eq!(rects[1].get_attr("width"), Some("100"));
		assert_eq!(rects[1].get_attr("height"), Some("170"));
	}
}
