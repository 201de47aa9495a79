use log::{debug, info};

use crate::config::EditorConfig;
use crate::error::{GraphError, SessionError};
use crate::graph::{Graph, Position, Vertex, VertexId, Weight};
use crate::shortest_path::{self, ShortestPaths};

/// Weight being typed for the edge between `a` and `b`.
struct PendingWeight {
	a: VertexId,
	b: VertexId,
	input: String,
}

/// Editing session behind the canvas: the graph, the pending selection and the
/// weight being typed for the newest edge.
pub struct EditorState {
	pub graph: Graph,
	pub config: EditorConfig,
	selected: Vec<VertexId>,
	pending: Option<PendingWeight>,
	last_run: Option<ShortestPaths>,
}

impl EditorState {
	pub fn new(config: EditorConfig) -> Self {
		Self {
			graph: Graph::new(),
			config,
			selected: Vec::new(),
			pending: None,
			last_run: None,
		}
	}

	pub fn awaiting_weight(&self) -> bool {
		self.pending.is_some()
	}

	pub fn weight_input(&self) -> Option<&str> {
		self.pending.as_ref().map(|p| p.input.as_str())
	}

	pub fn selected(&self) -> &[VertexId] {
		&self.selected
	}

	pub fn last_run(&self) -> Option<&ShortestPaths> {
		self.last_run.as_ref()
	}

	/// Places a vertex, unless a weight is still expected.
	pub fn primary_action(&mut self, position: Position) -> Result<VertexId, SessionError> {
		if self.awaiting_weight() {
			return Err(SessionError::AwaitingWeight);
		}
		self.last_run = None;
		Ok(self.graph.add_vertex(position))
	}

	/// Selects the vertex nearest to `position`. The second selection connects
	/// both vertices with a `max_weight` edge and asks for its weight.
	///
	/// Returns the new edge's index when one was created.
	pub fn secondary_action(&mut self, position: Position) -> Result<Option<usize>, SessionError> {
		if self.graph.vertex_count() < 2 {
			return Ok(None);
		}
		let Some(nearest) = self.graph.nearest_vertex(position) else {
			return Ok(None);
		};
		self.selected.push(nearest);
		debug!("selected vertex {}", nearest);

		let [a, b] = match self.selected.as_slice() {
			&[a, b] => [a, b],
			_ => return Ok(None),
		};
		self.selected.clear();
		let edge = self.graph.add_edge(a, b, self.config.max_weight)?;
		self.last_run = None;
		self.pending = Some(PendingWeight {
			a,
			b,
			input: String::new(),
		});
		Ok(Some(edge))
	}

	/// Appends a typed character to the pending weight; ignored otherwise.
	pub fn type_weight_char(&mut self, c: char) {
		if let Some(pending) = self.pending.as_mut() {
			pending.input.push(c);
		}
	}

	/// Empties the pending weight.
	pub fn clear_weight(&mut self) {
		if let Some(pending) = self.pending.as_mut() {
			pending.input.clear();
		}
	}

	/// Applies the typed weight to the pending edge and leaves weight entry.
	///
	/// On invalid input the buffer is cleared and weight entry continues.
	pub fn confirm_weight(&mut self) -> Result<Weight, SessionError> {
		let Some(pending) = self.pending.as_mut() else {
			return Err(SessionError::InvalidWeightInput(String::new()));
		};
		let typed = std::mem::take(&mut pending.input);
		let (a, b) = (pending.a, pending.b);
		let weight = parse_weight(&typed, self.config.max_weight)?;

		// Edge indices shift when vertices are deleted mid-entry.
		let edge = self
			.graph
			.find_edge(a, b)
			.ok_or(GraphError::VertexNotFound(a))?;
		self.graph.set_weight(edge, weight)?;
		self.pending = None;
		self.last_run = None;
		Ok(weight)
	}

	/// Removes the most recently placed vertex and its edges.
	///
	/// Weight entry is abandoned only when the pending edge went with it.
	pub fn delete_last_vertex(&mut self) -> Result<Vertex, SessionError> {
		let removed = self
			.graph
			.remove_last_vertex()
			.ok_or(SessionError::NothingToDelete)?;
		self.selected.retain(|&id| id != removed.id);
		if self
			.pending
			.as_ref()
			.is_some_and(|p| p.a == removed.id || p.b == removed.id)
		{
			debug!("pending edge removed with vertex {}", removed.id);
			self.pending = None;
		}
		self.last_run = None;
		Ok(removed)
	}

	/// Runs the configured expansion from `start` and keeps the result for drawing.
	pub fn run_from(&mut self, start: VertexId) -> Result<&ShortestPaths, SessionError> {
		let paths = shortest_path::run(&self.graph, start, self.config.expansion)?;
		info!(
			"shortest paths from {} ({} expansion, {} unreachable)",
			start,
			paths.expansion,
			paths.unreachable().len()
		);
		Ok(&*self.last_run.insert(paths))
	}

	/// Weights of every edge, in creation order.
	pub fn edge_weights(&self) -> Vec<Weight> {
		self.graph.edges().iter().map(|e| e.weight).collect()
	}
}

/// Parses a typed edge weight in `1..=max`.
pub fn parse_weight(input: &str, max: Weight) -> Result<Weight, SessionError> {
	let weight: Weight = input
		.trim()
		.parse()
		.map_err(|_| SessionError::InvalidWeightInput(input.to_string()))?;
	if !(1..=max).contains(&weight) {
		return Err(SessionError::WeightOutOfRange { weight, max });
	}
	Ok(weight)
}

/// Parses the index typed at the start-vertex prompt.
pub fn parse_start_index(input: &str) -> Result<VertexId, SessionError> {
	input
		.trim()
		.parse()
		.map(VertexId)
		.map_err(|_| SessionError::InvalidStartIndex(input.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::PathError;
	use crate::shortest_path::Expansion;

	fn editor() -> EditorState {
		EditorState::new(EditorConfig::default())
	}

	fn connect(state: &mut EditorState, a: Position, b: Position, weight: &str) {
		state.secondary_action(a).unwrap();
		state.secondary_action(b).unwrap();
		for c in weight.chars() {
			state.type_weight_char(c);
		}
		state.confirm_weight().unwrap();
	}

	#[test]
	fn scenario_through_the_editor() {
		let mut s = editor();
		let p = [
			Position::new(50.0, 50.0),
			Position::new(250.0, 50.0),
			Position::new(150.0, 250.0),
		];
		for &pos in &p {
			s.primary_action(pos).unwrap();
		}
		connect(&mut s, p[0], p[1], "4");
		connect(&mut s, p[1], p[2], "3");
		connect(&mut s, p[0], p[2], "10");

		assert_eq!(s.edge_weights(), vec![4, 3, 10]);
		let paths = s.run_from(VertexId(0)).unwrap();
		assert_eq!(paths.distance(VertexId(2)), Some(7));
		assert!(s.last_run().is_some());
	}

	#[test]
	fn second_selection_creates_default_edge_and_waits() {
		let mut s = editor();
		let a = s.primary_action(Position::new(0.0, 0.0)).unwrap();
		let b = s.primary_action(Position::new(100.0, 0.0)).unwrap();

		assert_eq!(s.secondary_action(Position::new(2.0, 1.0)), Ok(None));
		assert_eq!(s.selected(), &[a]);
		assert_eq!(s.secondary_action(Position::new(98.0, 3.0)), Ok(Some(0)));
		assert!(s.selected().is_empty());
		assert!(s.awaiting_weight());
		assert_eq!(s.graph.neighbors(a), vec![(b, 100)]);

		assert_eq!(
			s.primary_action(Position::new(50.0, 50.0)),
			Err(SessionError::AwaitingWeight)
		);
		assert_eq!(s.graph.vertex_count(), 2);
	}

	#[test]
	fn selection_needs_two_vertices() {
		let mut s = editor();
		s.primary_action(Position::default()).unwrap();
		assert_eq!(s.secondary_action(Position::default()), Ok(None));
		assert!(s.selected().is_empty());
	}

	#[test]
	fn same_vertex_twice_is_rejected() {
		let mut s = editor();
		let a = s.primary_action(Position::new(0.0, 0.0)).unwrap();
		s.primary_action(Position::new(100.0, 0.0)).unwrap();
		s.secondary_action(Position::new(1.0, 0.0)).unwrap();
		assert_eq!(
			s.secondary_action(Position::new(0.0, 1.0)),
			Err(SessionError::Graph(GraphError::SelfLoop(a)))
		);
		assert!(s.selected().is_empty());
		assert!(!s.awaiting_weight());
		assert_eq!(s.graph.edge_count(), 0);
	}

	#[test]
	fn invalid_weight_clears_buffer_and_keeps_waiting() {
		let mut s = editor();
		s.primary_action(Position::new(0.0, 0.0)).unwrap();
		s.primary_action(Position::new(100.0, 0.0)).unwrap();
		s.secondary_action(Position::new(0.0, 0.0)).unwrap();
		s.secondary_action(Position::new(100.0, 0.0)).unwrap();

		s.type_weight_char('x');
		assert_eq!(
			s.confirm_weight(),
			Err(SessionError::InvalidWeightInput("x".into()))
		);
		assert_eq!(s.weight_input(), Some(""));

		for c in "250".chars() {
			s.type_weight_char(c);
		}
		assert_eq!(
			s.confirm_weight(),
			Err(SessionError::WeightOutOfRange { weight: 250, max: 100 })
		);
		assert!(s.awaiting_weight());

		s.type_weight_char('9');
		s.clear_weight();
		assert_eq!(s.weight_input(), Some(""));
		s.type_weight_char('9');
		assert_eq!(s.confirm_weight(), Ok(9));
		assert!(!s.awaiting_weight());
		assert_eq!(s.edge_weights(), vec![9]);
	}

	#[test]
	fn typing_is_ignored_when_not_waiting() {
		let mut s = editor();
		s.type_weight_char('5');
		assert_eq!(s.weight_input(), None);
		assert!(s.confirm_weight().is_err());
	}

	#[test]
	fn delete_removes_newest_vertex_and_its_edges() {
		let mut s = editor();
		let a = Position::new(0.0, 0.0);
		let b = Position::new(100.0, 0.0);
		let c = Position::new(0.0, 100.0);
		for &pos in &[a, b, c] {
			s.primary_action(pos).unwrap();
		}
		connect(&mut s, a, b, "5");
		connect(&mut s, b, c, "6");
		s.run_from(VertexId(0)).unwrap();

		let removed = s.delete_last_vertex().unwrap();
		assert_eq!(removed.id, VertexId(2));
		assert_eq!(s.edge_weights(), vec![5]);
		assert!(s.last_run().is_none());

		s.delete_last_vertex().unwrap();
		s.delete_last_vertex().unwrap();
		assert_eq!(s.delete_last_vertex(), Err(SessionError::NothingToDelete));
	}

	#[test]
	fn delete_abandons_weight_entry() {
		let mut s = editor();
		s.primary_action(Position::new(0.0, 0.0)).unwrap();
		s.primary_action(Position::new(100.0, 0.0)).unwrap();
		s.secondary_action(Position::new(0.0, 0.0)).unwrap();
		s.secondary_action(Position::new(100.0, 0.0)).unwrap();
		s.delete_last_vertex().unwrap();

		assert!(!s.awaiting_weight());
		assert_eq!(s.graph.edge_count(), 0);
		assert!(s.primary_action(Position::new(9.0, 9.0)).is_ok());
	}

	#[test]
	fn delete_of_unrelated_vertex_keeps_weight_entry() {
		let mut s = editor();
		let a = Position::new(0.0, 0.0);
		let b = Position::new(100.0, 0.0);
		let c = Position::new(0.0, 100.0);
		for &pos in &[a, b, c] {
			s.primary_action(pos).unwrap();
		}
		connect(&mut s, b, c, "3");
		s.secondary_action(a).unwrap();
		s.secondary_action(b).unwrap();
		s.type_weight_char('7');

		let removed = s.delete_last_vertex().unwrap();
		assert_eq!(removed.id, VertexId(2));
		assert!(s.awaiting_weight());
		assert_eq!(s.weight_input(), Some("7"));

		// The pending edge moved from index 1 to 0 when 1 -- 2 was dropped.
		assert_eq!(s.confirm_weight(), Ok(7));
		assert_eq!(s.edge_weights(), vec![7]);
		assert!(!s.awaiting_weight());
	}

	#[test]
	fn run_reports_engine_errors() {
		let mut s = editor();
		assert_eq!(
			s.run_from(VertexId(0)).err(),
			Some(SessionError::Path(PathError::EmptyGraph))
		);
		s.primary_action(Position::default()).unwrap();
		assert_eq!(
			s.run_from(VertexId(3)).err(),
			Some(SessionError::Path(PathError::NotFound(VertexId(3))))
		);
	}

	#[test]
	fn run_uses_configured_expansion() {
		let mut s = EditorState::new(EditorConfig::default().with_expansion(Expansion::NearestNeighbor));
		s.primary_action(Position::default()).unwrap();
		assert_eq!(
			s.run_from(VertexId(0)).unwrap().expansion,
			Expansion::NearestNeighbor
		);
	}

	#[test]
	fn parses_prompt_and_weight_text() {
		assert_eq!(parse_start_index(" 3 "), Ok(VertexId(3)));
		assert_eq!(
			parse_start_index("three"),
			Err(SessionError::InvalidStartIndex("three".into()))
		);
		assert_eq!(parse_weight("100", 100), Ok(100));
		assert_eq!(
			parse_weight("0", 100),
			Err(SessionError::WeightOutOfRange { weight: 0, max: 100 })
		);
		assert_eq!(
			parse_weight("-4", 100),
			Err(SessionError::InvalidWeightInput("-4".into()))
		);
	}
}
