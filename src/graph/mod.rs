//! Undirected weighted graph edited on the canvas.

mod model;
mod types;

pub use model::Graph;
pub use types::{Edge, Position, Vertex, VertexId, Weight};
