//! Contains leaf types used by every poster crate: canvas points, value ranges,
//! colors, units, and small formatting helpers.

pub mod types;
pub mod utils;

pub use types::*;
pub use utils::*;
