// Points on the sphere, great-circle distances and lat/lng bounding boxes.
// Longitude ranges may wrap across the antimeridian.

mod bbox;
mod point;

pub use bbox::*;
pub use point::*;
