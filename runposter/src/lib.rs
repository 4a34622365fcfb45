//! Renders collections of GPS tracks into SVG posters.
//!
//! Tracks are read from JSON ([`load_tracks`]), selected by year and distance
//! ([`filter_tracks`]), and drawn with a [`TracksDrawer`] onto a [`Poster`]
//! whose look is set by a [`PosterConfig`].
//!
//! ```
//! use runposter::{DrawerKind, Poster, PosterConfig, parse_tracks};
//!
//! let tracks = parse_tracks(r#"[{
//!     "id": 1,
//!     "start_time": "2023-05-01T06:30:00Z",
//!     "end_time": "2023-05-01T07:00:00Z",
//!     "length": 5000,
//!     "polylines": [[[52.50, 13.40], [52.51, 13.42], [52.52, 13.41]]]
//! }]"#).unwrap();
//! let poster = Poster::new(PosterConfig::default(), tracks).unwrap();
//! let svg = poster.render(DrawerKind::Grid.drawer().as_ref()).unwrap();
//! assert!(svg.contains("<path d=\"M"));
//! ```

pub mod config;
pub mod poster;
pub mod svg;
pub mod track;

#[cfg(test)]
mod test_helpers;

pub use config::*;
pub use poster::*;
pub use track::*;
