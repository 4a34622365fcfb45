//! Poster configuration.
//!
//! - [`PosterConfig`](crate::config::PosterConfig): top-level configuration loader and YAML parser
//! - [`StyleConfig`](crate::config::StyleConfig): colors for every drawing role
//! - [`TrimConfig`](crate::config::TrimConfig): which tracks get their ends trimmed, and by how much
//! - [`Layout`](crate::config::Layout): framed poster or plain track drawing
//!
//! All fields are optional in YAML and fall back to the defaults of a dark
//! poster with blue tracks.

mod layout;
mod main;
mod style;
mod trim;

pub use layout::Layout;
pub use main::PosterConfig;
pub use style::StyleConfig;
pub use trim::TrimConfig;
