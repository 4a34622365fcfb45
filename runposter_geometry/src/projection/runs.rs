use runposter_core::{ValueRange, XY};
use std::mem;

/// A maximal contiguous in-bounds piece of a projected polyline.
pub type Run = Vec<XY>;

#[derive(Debug, PartialEq)]
enum RunState {
	Outside,
	Inside(Run),
}

/// Splits a stream of points into runs.
///
/// Every point is reported as either inside or outside the bounding box. An
/// inside point opens a run or extends the open one; an outside point closes
/// the open run. Empty runs are never emitted.
///
/// # Examples
/// ```
/// use runposter_core::XY;
/// use runposter_geometry::RunSplitter;
///
/// let mut splitter = RunSplitter::new();
/// splitter.outside();
/// splitter.inside(XY::new(1.0, 1.0));
/// splitter.inside(XY::new(2.0, 2.0));
/// splitter.outside();
/// splitter.inside(XY::new(3.0, 3.0));
/// let runs = splitter.finish();
/// assert_eq!(runs, vec![vec![XY::new(1.0, 1.0), XY::new(2.0, 2.0)], vec![XY::new(3.0, 3.0)]]);
/// ```
#[derive(Debug)]
pub struct RunSplitter {
	state: RunState,
	runs: Vec<Run>,
}

impl RunSplitter {
	#[must_use]
	pub fn new() -> Self {
		Self {
			state: RunState::Outside,
			runs: Vec::new(),
		}
	}

	/// Records a point inside the bounding box.
	pub fn inside(&mut self, xy: XY) {
		match &mut self.state {
			RunState::Inside(run) => run.push(xy),
			RunState::Outside => self.state = RunState::Inside(vec![xy]),
		}
	}

	/// Records a point outside the bounding box.
	pub fn outside(&mut self) {
		if let RunState::Inside(run) = mem::replace(&mut self.state, RunState::Outside) {
			self.runs.push(run);
		}
	}

	#[must_use]
	pub fn is_inside(&self) -> bool {
		matches!(self.state, RunState::Inside(_))
	}

	/// Closes a run that is still open and returns all runs.
	#[must_use]
	pub fn finish(mut self) -> Vec<Run> {
		self.outside();
		self.runs
	}
}

impl Default for RunSplitter {
	fn default() -> Self {
		Self::new()
	}
}

/// Returns the x and y extent of all points in `runs`.
pub fn compute_bounds_xy(runs: &[Run]) -> (ValueRange, ValueRange) {
	let mut range_x = ValueRange::new();
	let mut range_y = ValueRange::new();
	for xy in runs.iter().flatten() {
		range_x.extend(xy.x);
		range_y.extend(xy.y);
	}
	(range_x, range_y)
}
