// Mercator projection of lat/lng polylines into canvas space. A polyline that
// leaves the bounding box is split into several runs.

mod mercator;
mod runs;

pub use mercator::*;
pub use runs::*;
