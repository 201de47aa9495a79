//! Editor settings passed to the canvas component.

use crate::graph::Weight;
use crate::shortest_path::Expansion;

/// Canvas colours, as CSS colour strings.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	/// Canvas background.
	pub background: String,
	/// Text, weight labels and selection rings.
	pub light: String,
	/// Vertex fill.
	pub dark: String,
	/// Edges on the last computed shortest-path tree.
	pub path: String,
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			background: "rgb(46, 52, 64)".into(),
			light: "rgb(216, 222, 233)".into(),
			dark: "rgb(94, 129, 172)".into(),
			path: "rgb(235, 203, 139)".into(),
		}
	}
}

/// Everything the editor can be tuned with.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Upper bound for typed weights, also the default weight of a new edge.
	pub max_weight: Weight,
	/// Vertex circle radius.
	pub vertex_radius: f64,
	/// Radius of the ring drawn around selected vertices.
	pub selection_radius: f64,
	/// Edge stroke width.
	pub edge_width: f64,
	/// CSS font used for every label.
	pub font: String,
	/// Colours.
	pub palette: Palette,
	/// Strategy used by the run key.
	pub expansion: Expansion,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			width: 500.0,
			height: 500.0,
			max_weight: 100,
			vertex_radius: 5.0,
			selection_radius: 7.0,
			edge_width: 5.0,
			font: "15px sans-serif".into(),
			palette: Palette::default(),
			expansion: Expansion::default(),
		}
	}
}

impl EditorConfig {
	/// Same settings with a different expansion strategy.
	pub fn with_expansion(mut self, expansion: Expansion) -> Self {
		self.expansion = expansion;
		self
	}

	/// Maps `weight` from `1..=max_weight` onto a `0..=255` channel value.
	pub fn weight_shade(&self, weight: Weight) -> u8 {
		let span = self.max_weight.saturating_sub(1).max(1) as f64;
		let t = (weight.saturating_sub(1) as f64 / span).clamp(0.0, 1.0);
		(t * 255.0) as u8
	}
}
