use std::fmt;

/// Edge weight. The editor keeps it within `1..=max_weight`; the model does not.
pub type Weight = u32;

/// Stable identity of a vertex, assigned by the owning [`Graph`](super::Graph).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl fmt::Display for VertexId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Canvas position in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	/// Horizontal offset from the canvas' left edge.
	pub x: f64,
	/// Vertical offset from the canvas' top edge.
	pub y: f64,
}

impl Position {
	/// Creates a position.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance to `other`.
	pub fn distance(&self, other: &Position) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}

	/// Point halfway between `self` and `other`.
	pub fn midpoint(&self, other: &Position) -> Position {
		Position::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
	}
}

/// A placed vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
	/// Identity.
	pub id: VertexId,
	/// Where the vertex was placed.
	pub position: Position,
}

/// Undirected weighted edge between two distinct vertices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
	/// First endpoint.
	pub a: VertexId,
	/// Second endpoint.
	pub b: VertexId,
	/// Traversal cost.
	pub weight: Weight,
}

impl Edge {
	/// True when `vertex` is one of the endpoints.
	pub fn includes(&self, vertex: VertexId) -> bool {
		self.a == vertex || self.b == vertex
	}

	/// The endpoint opposite `vertex`, or `None` if `vertex` is not an endpoint.
	pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
		if vertex == self.a {
			Some(self.b)
		} else if vertex == self.b {
			Some(self.a)
		} else {
			None
		}
	}
}
