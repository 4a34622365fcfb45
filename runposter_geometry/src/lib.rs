//! Geographic side of the poster pipeline: points and bounding boxes on the
//! sphere, the Mercator projector that maps tracks into canvas space, the route
//! trimmer, and the grid layout solver.

pub mod geodesy;
pub mod grid;
pub mod projection;
pub mod trim;

pub use geodesy::*;
pub use grid::*;
pub use projection::*;
pub use trim::*;
