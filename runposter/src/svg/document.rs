use super::{Element, number};
use std::fmt;

/// A standalone SVG document of a fixed size in millimeters, with a matching
/// `viewBox` so that one user unit is one millimeter.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgDocument {
	width: f64,
	height: f64,
	elements: Vec<Element>,
}

impl SvgDocument {
	#[must_use]
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			elements: Vec::new(),
		}
	}

	pub fn add(&mut self, element: Element) {
		self.elements.push(element);
	}

	#[must_use]
	pub fn elements(&self) -> &[Element] {
		&self.elements
	}

	/// All elements with the given tag name, searched depth first.
	#[must_use]
	pub fn find_all(&self, name: &str) -> Vec<&Element> {
		fn visit<'a>(element: &'a Element, name: &str, found: &mut Vec<&'a Element>) {
			if element.name() == name {
				found.push(element);
			}
			for child in element.children() {
				visit(child, name, found);
			}
		}
		let mut found = Vec::new();
		for element in &self.elements {
			visit(element, name, &mut found);
		}
		found
	}
}

impl fmt::Display for SvgDocument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut out = String::new();
		out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
		out.push_str(&format!(
			"<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {w} {h}\">\n",
			w = number(self.width),
			h = number(self.height)
		));
		for element in &self.elements {
			element.write_to(&mut out, 1)?;
		}
		out.push_str("</svg>\n");
		f.write_str(&out)
	}
}
