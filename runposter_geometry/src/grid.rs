//! Uniform tiling of a rectangle with square cells, used to lay out one track
//! per cell on a grid poster.

use runposter_core::XY;

/// A tiling of `columns × rows` square cells of side `cell_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
	pub cell_size: f64,
	pub columns: usize,
	pub rows: usize,
}

impl GridSpec {
	/// Number of cells in the grid.
	#[must_use]
	pub fn capacity(&self) -> usize {
		self.columns * self.rows
	}

	/// Column and row of the `index`-th cell, filled row by row.
	#[must_use]
	pub fn cell_position(&self, index: usize) -> (usize, usize) {
		(index % self.columns, index / self.columns)
	}
}

/// Finds the grid of square cells that holds `count` cells inside
/// `dimensions` with the least unused area.
///
/// Every `columns × rows` combination in `1..=count` with enough cells is
/// tried, columns ascending, then rows ascending; the first configuration with
/// minimal waste wins. This is `O(count²)`, which is fine for the track counts
/// of a poster (up to a few thousand) and keeps the layout stable.
///
/// Returns `None` if `count` is zero.
///
/// # Examples
/// ```
/// use runposter_core::XY;
/// use runposter_geometry::compute_grid;
///
/// let grid = compute_grid(4, XY::new(100.0, 100.0)).unwrap();
/// assert_eq!((grid.columns, grid.rows, grid.cell_size), (2, 2, 50.0));
/// ```
#[must_use]
pub fn compute_grid(count: usize, dimensions: XY) -> Option<GridSpec> {
	let mut best: Option<(f64, GridSpec)> = None;

	for columns in 1..=count {
		let size_x = dimensions.x / columns as f64;
		for rows in 1..=count {
			if columns * rows < count {
				continue;
			}
			let size_y = dimensions.y / rows as f64;
			let cell_size = size_x.min(size_y);
			let waste = dimensions.x * dimensions.y - count as f64 * cell_size * cell_size;
			if waste < 0.0 {
				continue;
			}
			if best.is_none_or(|(min_waste, _)| waste < min_waste) {
				best = Some((waste, GridSpec { cell_size, columns, rows }));
			}
		}
	}

	if let Some((waste, grid)) = &best {
		log::debug!("grid for {count} cells in {dimensions:?}: {grid:?}, wasting {waste}");
	}
	best.map(|(_, grid)| grid)
}
