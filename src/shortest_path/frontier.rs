use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap, HashSet};

use super::{Distance, Reach, Route};
use crate::graph::{VertexId, Weight};

/// Dijkstra over a binary-heap frontier with lazy deletion of stale entries.
pub(super) fn expand(
	ids: impl Iterator<Item = VertexId>,
	adjacency: &HashMap<VertexId, Vec<(VertexId, Weight)>>,
	source: VertexId,
) -> BTreeMap<VertexId, Reach> {
	let mut dist: HashMap<VertexId, Distance> = HashMap::from([(source, 0)]);
	let mut prev: HashMap<VertexId, VertexId> = HashMap::new();
	let mut visited: HashSet<VertexId> = HashSet::new();
	let mut frontier: BinaryHeap<Reverse<(Distance, VertexId)>> = BinaryHeap::from([Reverse((0, source))]);

	while let Some(Reverse((d, current))) = frontier.pop() {
		if !visited.insert(current) {
			continue;
		}
		for &(next, weight) in adjacency.get(&current).into_iter().flatten() {
			if visited.contains(&next) {
				continue;
			}
			let candidate = d.saturating_add(weight);
			if dist.get(&next).is_none_or(|&known| candidate < known) {
				dist.insert(next, candidate);
				prev.insert(next, current);
				frontier.push(Reverse((candidate, next)));
			}
		}
	}

	ids.map(|id| {
		let reach = match dist.get(&id) {
			Some(&distance) => Reach::Reached(Route {
				distance,
				path: walk_back(&prev, id),
			}),
			None => Reach::Unreachable,
		};
		(id, reach)
	})
	.collect()
}

fn walk_back(prev: &HashMap<VertexId, VertexId>, target: VertexId) -> Vec<VertexId> {
	let mut path = vec![target];
	let mut current = target;
	while let Some(&p) = prev.get(&current) {
		path.push(p);
		current = p;
	}
	path.reverse();
	path
}
