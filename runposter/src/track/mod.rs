//! Recorded tracks and how they are loaded and selected.

mod loader;
mod model;
mod year_range;

pub use loader::{filter_tracks, load_tracks, parse_tracks};
pub use model::Track;
pub use year_range::YearRange;
