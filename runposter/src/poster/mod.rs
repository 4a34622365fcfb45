//! Poster layout and the drawers that fill its body with tracks.

mod drawer;
mod grid_drawer;
mod laps_drawer;
mod layout;
mod per_track;

pub use drawer::{DrawerKind, TracksDrawer};
pub use grid_drawer::GridDrawer;
pub use laps_drawer::LapsDrawer;
pub use layout::Poster;
pub use per_track::{TRACK_POSTER_HEIGHT, TRACK_POSTER_WIDTH, render_track_posters, track_poster_path};
