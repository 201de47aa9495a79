//! Error types for the graph model, the shortest-path engine and the editor session.

use thiserror::Error;

use crate::graph::{VertexId, Weight};

/// Failures raised by mutations of the [`Graph`](crate::graph::Graph).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
	/// The referenced vertex does not exist.
	#[error("vertex {0} not found")]
	VertexNotFound(VertexId),

	/// An edge was requested from a vertex to itself.
	#[error("cannot connect vertex {0} to itself")]
	SelfLoop(VertexId),

	/// The referenced edge index is out of bounds.
	#[error("edge #{0} not found")]
	EdgeNotFound(usize),
}

/// Failures raised by a shortest-path run or a lookup in its result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
	/// The graph holds no vertices.
	#[error("no graph found")]
	EmptyGraph,

	/// The requested vertex is not part of the graph.
	#[error("vertex {0} not found")]
	NotFound(VertexId),

	/// The requested vertex exists but no path leads to it from the source.
	#[error("vertex {0} is unreachable")]
	Unreachable(VertexId),
}

/// Recoverable failures of the interactive editor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
	/// A vertex cannot be placed while an edge weight is being entered.
	#[error("enter a valid weight first")]
	AwaitingWeight,

	/// The typed weight is not an integer.
	#[error("invalid weight input {0:?}")]
	InvalidWeightInput(String),

	/// The typed weight is outside `1..=max`.
	#[error("weight {weight} out of range 1..={max}")]
	WeightOutOfRange {
		/// Parsed weight.
		weight: Weight,
		/// Upper bound from the editor configuration.
		max: Weight,
	},

	/// The prompted start index is not an integer.
	#[error("invalid start index {0:?}")]
	InvalidStartIndex(String),

	/// Delete was requested on an empty graph.
	#[error("no vertices to delete")]
	NothingToDelete,

	/// Propagated model error.
	#[error(transparent)]
	Graph(#[from] GraphError),

	/// Propagated engine error.
	#[error(transparent)]
	Path(#[from] PathError),
}
