use super::{Poster, TracksDrawer};
use crate::svg::{Element, SvgDocument, path_data};
use anyhow::Result;
use runposter_core::XY;
use runposter_geometry::{BoundingBox, project};

const MARKER_SIZE: f64 = 2.5;

/// Draws all tracks on top of each other across the whole body, each scaled
/// to the full area, latest track first.
///
/// Every run gets a triangle at its start pointing in the initial heading, a
/// square at its end, and a dot travelling along it.
#[derive(Clone, Copy, Debug, Default)]
pub struct LapsDrawer;

impl TracksDrawer for LapsDrawer {
	fn draw(&self, poster: &Poster, doc: &mut SvgDocument, size: XY, offset: XY) -> Result<()> {
		let config = poster.config();
		for track in poster.tracks().iter().rev() {
			let polylines = if config.trim.applies_to(track.length) {
				track.trimmed_polylines(config.trim.distance)
			} else {
				track.polylines.clone()
			};
			let Some(bbox) = BoundingBox::from_points(polylines.iter().flatten()) else {
				log::debug!("track {} has no points", track.id);
				continue;
			};
			let runs = project(&bbox, size, offset, &polylines)?;
			log::trace!("track {} projects to {} runs", track.id, runs.len());
			for run in runs.iter().filter(|run| !run.is_empty()) {
				draw_run(poster, doc, run);
			}
		}
		Ok(())
	}
}

/// Heading at the start of `run` in degrees, clockwise from the x axis.
fn start_heading(run: &[XY]) -> f64 {
	match run {
		[start, next, ..] => (next.y - start.y).atan2(next.x - start.x).to_degrees(),
		_ => 0.0,
	}
}

fn draw_run(poster: &Poster, doc: &mut SvgDocument, run: &[XY]) {
	let config = poster.config();
	let colors = &config.colors;
	let (start, end) = (run[0], run[run.len() - 1]);

	doc.add(
		Element::path(run)
			.attr("stroke", colors.track)
			.attr("fill", "none")
			.attr("stroke-width", "0.5"),
	);

	let half = MARKER_SIZE / 2.0;
	doc.add(
		Element::polygon(&[
			start + XY::new(0.0, -MARKER_SIZE),
			start + XY::new(-half, 0.0),
			start + XY::new(half, 0.0),
		])
		.attr("fill", colors.special)
		.attr(
			"transform",
			format!("rotate({:.2},{:.2},{:.2})", start_heading(run), start.x, start.y),
		),
	);

	doc.add(
		Element::rect(end - XY::new(half, half), XY::new(MARKER_SIZE, MARKER_SIZE))
			.attr("fill", colors.special2_or_special()),
	);

	let relative: Vec<XY> = run.iter().map(|&xy| xy - start).collect();
	doc.add(
		Element::circle(start, 1.25)
			.attr("stroke", colors.track)
			.attr("fill", colors.track)
			.child(
				Element::new("animateMotion")
					.attr("path", path_data(&relative))
					.attr("dur", format!("{}s", config.animation_time))
					.attr("begin", "0s")
					.attr("fill", "freeze")
					.attr("repeatCount", "indefinite"),
			),
	);
}
