use super::{Poster, TracksDrawer};
use crate::{Track, svg::Element, svg::SvgDocument};
use anyhow::{Result, bail};
use itertools::Itertools;
use runposter_core::{XY, make_key_times};
use runposter_geometry::{compute_grid, project};

/// Draws every track into its own cell of a grid, in order of start time.
///
/// Each track is scaled to fill its cell, so short and long tracks appear
/// at the same size and only their color tells them apart.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridDrawer;

impl TracksDrawer for GridDrawer {
	fn draw(&self, poster: &Poster, doc: &mut SvgDocument, size: XY, offset: XY) -> Result<()> {
		let tracks = poster.tracks();
		let Some(grid) = compute_grid(tracks.len(), size) else {
			bail!("no tracks to draw");
		};

		// leftover space is spread between the cells
		let spacing_x = if grid.columns <= 1 {
			0.0
		} else {
			(size.x - grid.cell_size * grid.columns as f64) / (grid.columns - 1) as f64
		};
		let spacing_y = if grid.rows <= 1 {
			0.0
		} else {
			(size.y - grid.cell_size * grid.rows as f64) / (grid.rows - 1) as f64
		};
		// nonzero only along an axis with a single cell, which has no spacing to absorb the leftover
		let start = offset
			+ 0.5
				* XY::new(
					size.x - grid.columns as f64 * grid.cell_size - (grid.columns as f64 - 1.0) * spacing_x,
					size.y - grid.rows as f64 * grid.cell_size - (grid.rows as f64 - 1.0) * spacing_y,
				);
		let pitch = XY::new(grid.cell_size + spacing_x, grid.cell_size + spacing_y);
		let cell = XY::new(grid.cell_size, grid.cell_size);

		let key_times = if poster.config().animate {
			Some(make_key_times(poster.years().len())?.join(";"))
		} else {
			None
		};

		for (index, track) in tracks.iter().enumerate() {
			let (column, row) = grid.cell_position(index);
			let position = XY::new(column as f64, row as f64).scale(pitch);
			let group = draw_track(poster, track, 0.9 * cell, start + 0.05 * cell + position, key_times.as_deref())?;
			doc.add(group);
		}
		Ok(())
	}
}

fn draw_track(poster: &Poster, track: &Track, size: XY, offset: XY, key_times: Option<&str>) -> Result<Element> {
	let mut group = Element::group()
		.attr("stroke", poster.track_color(track))
		.attr("fill", "none")
		.attr("stroke-width", "0.5")
		.attr("stroke-linejoin", "round")
		.attr("stroke-linecap", "round");

	if let Some(key_times) = key_times {
		group.push(year_animation(poster, track, key_times));
	}

	let Some(bbox) = track.bbox() else {
		log::debug!("track {} has no points", track.id);
		return Ok(group);
	};
	for run in project(&bbox, size, offset, &track.polylines)? {
		group.push(Element::path(&run));
	}
	Ok(group)
}

/// Opacity animation that reveals the track when its year is reached.
fn year_animation(poster: &Poster, track: &Track, key_times: &str) -> Element {
	let year_index = poster.year_index(track.year());
	let values = (0..=poster.years().len())
		.map(|step| if step >= year_index { "1" } else { "0" })
		.join(";");
	Element::new("animate")
		.attr("attributeName", "opacity")
		.attr("values", values)
		.attr("keyTimes", key_times)
		.attr("calcMode", "discrete")
		.attr("dur", format!("{}s", poster.config().animation_time))
		.attr("begin", "0s")
		.attr("fill", "freeze")
}
