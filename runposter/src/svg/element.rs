use itertools::Itertools;
use runposter_core::XY;
use std::fmt::{self, Write};

/// Formats a scalar with at most two decimals and no trailing zeros.
#[must_use]
pub fn number(value: f64) -> String {
	let text = format!("{value:.2}");
	let text = text.trim_end_matches('0').trim_end_matches('.');
	if text == "-0" { String::from("0") } else { text.to_string() }
}

/// Path data `M x,y L x,y L ...` through `points`.
#[must_use]
pub fn path_data(points: &[XY]) -> String {
	match points.split_first() {
		None => String::new(),
		Some((first, rest)) if rest.is_empty() => format!("M{}", first.to_svg()),
		Some((first, rest)) => format!("M{} L{}", first.to_svg(), rest.iter().map(XY::to_svg).join(" L")),
	}
}

fn escape(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

/// One SVG element with attributes, child elements and optional text content.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
	name: &'static str,
	attributes: Vec<(&'static str, String)>,
	children: Vec<Element>,
	text: Option<String>,
}

impl Element {
	#[must_use]
	pub fn new(name: &'static str) -> Self {
		Self {
			name,
			attributes: Vec::new(),
			children: Vec::new(),
			text: None,
		}
	}

	#[must_use]
	pub fn attr(mut self, key: &'static str, value: impl ToString) -> Self {
		self.attributes.push((key, value.to_string()));
		self
	}

	#[must_use]
	pub fn child(mut self, child: Element) -> Self {
		self.children.push(child);
		self
	}

	#[must_use]
	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.text = Some(text.into());
		self
	}

	pub fn push(&mut self, child: Element) {
		self.children.push(child);
	}

	#[must_use]
	pub fn name(&self) -> &str {
		self.name
	}

	#[must_use]
	pub fn get_attr(&self, key: &str) -> Option<&str> {
		self.attributes.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
	}

	#[must_use]
	pub fn children(&self) -> &[Element] {
		&self.children
	}

	// shapes

	#[must_use]
	pub fn rect(position: XY, size: XY) -> Self {
		Element::new("rect")
			.attr("x", number(position.x))
			.attr("y", number(position.y))
			.attr("width", number(size.x))
			.attr("height", number(size.y))
	}

	#[must_use]
	pub fn circle(center: XY, radius: f64) -> Self {
		Element::new("circle")
			.attr("cx", number(center.x))
			.attr("cy", number(center.y))
			.attr("r", number(radius))
	}

	#[must_use]
	pub fn path(points: &[XY]) -> Self {
		Element::new("path").attr("d", path_data(points))
	}

	#[must_use]
	pub fn polygon(points: &[XY]) -> Self {
		Element::new("polygon").attr("points", points.iter().map(XY::to_svg).join(" "))
	}

	#[must_use]
	pub fn label(position: XY, content: &str) -> Self {
		Element::new("text")
			.attr("x", number(position.x))
			.attr("y", number(position.y))
			.text(content)
	}

	#[must_use]
	pub fn group() -> Self {
		Element::new("g")
	}

	pub(crate) fn write_to(&self, out: &mut String, depth: usize) -> fmt::Result {
		let indent = "\t".repeat(depth);
		write!(out, "{indent}<{}", self.name)?;
		for (key, value) in &self.attributes {
			write!(out, " {key}=\"{}\"", escape(value))?;
		}
		match (&self.text, self.children.is_empty()) {
			(None, true) => writeln!(out, "/>"),
			(Some(text), true) => writeln!(out, ">{}</{}>", escape(text), self.name),
			(text, false) => {
				writeln!(out, ">")?;
				if let Some(text) = text {
					writeln!(out, "{indent}\t{}", escape(text))?;
				}
				for child in &self.children {
					child.write_to(out, depth + 1)?;
				}
				writeln!(out, "{indent}</{}>", self.name)
			}
		}
	}
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut out = String::new();
		self.write_to(&mut out, 0)?;
		f.write_str(out.trim_end())
	}
}
