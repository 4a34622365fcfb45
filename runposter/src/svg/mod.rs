//! A small SVG writer that builds an element tree and serializes it as a
//! standalone SVG 1.1 document.

mod document;
mod element;

pub use document::SvgDocument;
pub use element::{Element, number, path_data};
