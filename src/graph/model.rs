use std::collections::HashMap;

use log::debug;

use super::types::{Edge, Position, Vertex, VertexId, Weight};
use crate::error::GraphError;

/// Vertices and edges placed by the user.
///
/// Vertices are kept in ascending identity order. Identities are never
/// renumbered; after a removal the allocator restarts at `max(existing) + 1`,
/// so removing the most recent vertex frees its identity for the next one.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	vertices: Vec<Vertex>,
	edges: Vec<Edge>,
	next_id: usize,
}

impl Graph {
	/// Creates an empty graph.
	pub fn new() -> Self {
		Self::default()
	}

	/// Places a vertex and returns its identity.
	pub fn add_vertex(&mut self, position: Position) -> VertexId {
		let id = VertexId(self.next_id);
		self.next_id += 1;
		self.vertices.push(Vertex { id, position });
		debug!("added vertex {} at ({}, {})", id, position.x, position.y);
		id
	}

	/// Connects two distinct existing vertices and returns the edge's index.
	///
	/// Parallel edges are not deduplicated.
	pub fn add_edge(&mut self, a: VertexId, b: VertexId, weight: Weight) -> Result<usize, GraphError> {
		for id in [a, b] {
			if !self.contains(id) {
				return Err(GraphError::VertexNotFound(id));
			}
		}
		if a == b {
			return Err(GraphError::SelfLoop(a));
		}
		self.edges.push(Edge { a, b, weight });
		debug!("added edge {} -- {} (weight {})", a, b, weight);
		Ok(self.edges.len() - 1)
	}

	/// Removes a vertex together with every edge incident to it.
	pub fn remove_vertex(&mut self, id: VertexId) -> Result<Vertex, GraphError> {
		let pos = self
			.vertices
			.iter()
			.position(|v| v.id == id)
			.ok_or(GraphError::VertexNotFound(id))?;
		let vertex = self.vertices.remove(pos);

		let before = self.edges.len();
		self.edges.retain(|e| !e.includes(id));
		self.next_id = self.vertices.last().map_or(0, |v| v.id.0 + 1);
		debug!(
			"removed vertex {} and {} incident edge(s)",
			id,
			before - self.edges.len()
		);
		Ok(vertex)
	}

	/// Removes the most recently placed vertex, if any.
	pub fn remove_last_vertex(&mut self) -> Option<Vertex> {
		let id = self.vertices.last()?.id;
		self.remove_vertex(id).ok()
	}

	/// Every vertex joined to `id`, with the joining edge's weight, in edge order.
	pub fn neighbors(&self, id: VertexId) -> Vec<(VertexId, Weight)> {
		self.edges
			.iter()
			.filter_map(|e| e.other(id).map(|other| (other, e.weight)))
			.collect()
	}

	/// Neighbour lists for every vertex, built in one pass over the edges.
	pub fn adjacency(&self) -> HashMap<VertexId, Vec<(VertexId, Weight)>> {
		let mut adj: HashMap<_, Vec<_>> = self.vertices.iter().map(|v| (v.id, Vec::new())).collect();
		for e in &self.edges {
			adj.entry(e.a).or_default().push((e.b, e.weight));
			adj.entry(e.b).or_default().push((e.a, e.weight));
		}
		adj
	}

	/// The vertex closest to `position`; the earliest placed wins ties.
	pub fn nearest_vertex(&self, position: Position) -> Option<VertexId> {
		let mut best: Option<(VertexId, f64)> = None;
		for v in &self.vertices {
			let d = v.position.distance(&position);
			if best.is_none_or(|(_, bd)| d < bd) {
				best = Some((v.id, d));
			}
		}
		best.map(|(id, _)| id)
	}

	/// Overwrites the weight of the edge at `index`.
	pub fn set_weight(&mut self, index: usize, weight: Weight) -> Result<(), GraphError> {
		let edge = self
			.edges
			.get_mut(index)
			.ok_or(GraphError::EdgeNotFound(index))?;
		edge.weight = weight;
		debug!("edge {} -- {} weight set to {}", edge.a, edge.b, weight);
		Ok(())
	}

	/// Index of the most recently created edge joining `a` and `b`, in either order.
	pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<usize> {
		self.edges
			.iter()
			.rposition(|e| e.other(a) == Some(b))
	}

	/// Looks a vertex up by identity.
	pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
		self.vertices.iter().find(|v| v.id == id)
	}

	/// True when a vertex with this identity exists.
	pub fn contains(&self, id: VertexId) -> bool {
		self.vertex(id).is_some()
	}

	/// Vertices in ascending identity order.
	pub fn vertices(&self) -> &[Vertex] {
		&self.vertices
	}

	/// Edges in creation order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Number of vertices.
	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// True when no vertex has been placed.
	pub fn is_empty(&self) -> bool {
		self.vertices.is_empty()
	}
}
