//! Single-source shortest paths over the edited [`Graph`].
//!
//! [`run`] validates the start vertex, then hands a freshly built adjacency map
//! to one of two expansion strategies:
//!
//! * [`Expansion::Frontier`] is Dijkstra's algorithm with a binary-heap
//!   frontier over every discovered vertex.
//! * [`Expansion::NearestNeighbor`] only ever moves to the nearest unvisited
//!   neighbour of the vertex it just expanded and stops at the first dead end.
//!   It can miss shorter paths and leave reachable vertices unexplored.
//!   Its paths list the vertices that improved a distance, followed by the target.

mod frontier;
mod nearest;
mod report;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub use report::report_lines;

use crate::error::PathError;
use crate::graph::{Graph, VertexId, Weight};

/// Sum of edge weights along a path.
pub type Distance = Weight;

/// How the next vertex to expand is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Expansion {
	/// Globally nearest unvisited vertex (Dijkstra).
	#[default]
	Frontier,
	/// Nearest unvisited neighbour of the current vertex only.
	NearestNeighbor,
}

impl FromStr for Expansion {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"frontier" | "dijkstra" => Ok(Self::Frontier),
			"nearest" | "nearest-neighbor" | "local" => Ok(Self::NearestNeighbor),
			other => Err(format!("unknown expansion {other:?}")),
		}
	}
}

impl fmt::Display for Expansion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Frontier => "frontier",
			Self::NearestNeighbor => "nearest",
		})
	}
}

/// Best known way to reach one vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
	/// Total weight from the source.
	pub distance: Distance,
	/// Vertices from the source to the target, both included.
	pub path: Vec<VertexId>,
}

/// Outcome for one vertex of the graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reach {
	/// A finite distance was found.
	Reached(Route),
	/// The run never assigned a finite distance.
	Unreachable,
}

impl Reach {
	/// The route, if reached.
	pub fn route(&self) -> Option<&Route> {
		match self {
			Self::Reached(route) => Some(route),
			Self::Unreachable => None,
		}
	}
}

/// Result of one run: an entry for every vertex of the graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths {
	/// Start vertex.
	pub source: VertexId,
	/// Strategy that produced the result.
	pub expansion: Expansion,
	/// Outcome per vertex, in identity order.
	pub entries: BTreeMap<VertexId, Reach>,
}

impl ShortestPaths {
	/// Route to `target`, failing if it is absent or unreachable.
	pub fn route(&self, target: VertexId) -> Result<&Route, PathError> {
		match self.entries.get(&target) {
			None => Err(PathError::NotFound(target)),
			Some(Reach::Unreachable) => Err(PathError::Unreachable(target)),
			Some(Reach::Reached(route)) => Ok(route),
		}
	}

	/// Distance to `target`, if reached.
	pub fn distance(&self, target: VertexId) -> Option<Distance> {
		self.route(target).ok().map(|r| r.distance)
	}

	/// Vertices that were never reached.
	pub fn unreachable(&self) -> Vec<VertexId> {
		self.entries
			.iter()
			.filter(|(_, reach)| matches!(reach, Reach::Unreachable))
			.map(|(&id, _)| id)
			.collect()
	}

	/// Every consecutive vertex pair on any reported path.
	pub fn path_edges(&self) -> Vec<(VertexId, VertexId)> {
		let mut pairs: Vec<_> = self
			.entries
			.values()
			.filter_map(Reach::route)
			.flat_map(|r| r.path.windows(2).map(|w| (w[0], w[1])))
			.collect();
		pairs.sort();
		pairs.dedup();
		pairs
	}
}

/// Computes distances and paths from `start` to every vertex of `graph`.
pub fn run(graph: &Graph, start: VertexId, expansion: Expansion) -> Result<ShortestPaths, PathError> {
	if graph.is_empty() {
		return Err(PathError::EmptyGraph);
	}
	if !graph.contains(start) {
		return Err(PathError::NotFound(start));
	}

	let adjacency = graph.adjacency();
	let ids = graph.vertices().iter().map(|v| v.id);
	let entries = match expansion {
		Expansion::Frontier => frontier::expand(ids, &adjacency, start),
		Expansion::NearestNeighbor => nearest::expand(ids, &adjacency, start),
	};

	Ok(ShortestPaths {
		source: start,
		expansion,
		entries,
	})
}
