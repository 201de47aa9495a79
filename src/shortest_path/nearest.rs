use std::collections::{BTreeMap, HashMap, HashSet};

use super::{Distance, Reach, Route};
use crate::graph::{VertexId, Weight};

/// Walks from `source`, always stepping to the nearest unvisited neighbour of
/// the vertex just expanded, until that vertex has no unvisited neighbour.
///
/// Each vertex records every vertex that improved its distance, in order; the
/// reported path is that record followed by the vertex itself.
pub(super) fn expand(
	ids: impl Iterator<Item = VertexId>,
	adjacency: &HashMap<VertexId, Vec<(VertexId, Weight)>>,
	source: VertexId,
) -> BTreeMap<VertexId, Reach> {
	let mut dist: HashMap<VertexId, Distance> = HashMap::from([(source, 0)]);
	let mut improved_by: HashMap<VertexId, Vec<VertexId>> = HashMap::new();
	let mut visited: HashSet<VertexId> = HashSet::new();

	let (mut current, mut current_dist): (VertexId, Distance) = (source, 0);
	loop {
		visited.insert(current);

		let mut nearest: Option<(VertexId, Distance)> = None;
		for &(next, weight) in adjacency.get(&current).into_iter().flatten() {
			if visited.contains(&next) {
				continue;
			}
			let candidate = current_dist.saturating_add(weight);
			if dist.get(&next).is_none_or(|&known| candidate < known) {
				dist.insert(next, candidate);
				improved_by.entry(next).or_default().push(current);
			}
			// Every unvisited neighbour now has a finite distance.
			let known = dist.get(&next).copied().unwrap_or(Distance::MAX);
			if nearest.is_none_or(|(_, best)| known < best) {
				nearest = Some((next, known));
			}
		}

		match nearest {
			Some((next, d)) => (current, current_dist) = (next, d),
			None => break,
		}
	}

	ids.map(|id| {
		let reach = match dist.get(&id) {
			Some(&distance) => {
				let mut path = improved_by.remove(&id).unwrap_or_default();
				path.push(id);
				Reach::Reached(Route { distance, path })
			}
			None => Reach::Unreachable,
		};
		(id, reach)
	})
	.collect()
}
