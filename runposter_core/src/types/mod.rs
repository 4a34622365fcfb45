//! Contains types like canvas points, value ranges, colors and units.

mod color;
pub use color::*;

mod units;
pub use units::*;

mod value_range;
pub use value_range::*;

mod xy;
pub use xy::*;
