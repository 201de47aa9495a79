use super::{Reach, ShortestPaths};

/// One line per vertex, in identity order:
/// `"<source> to <target> : <distance> : <a -> b -> c>"`, or
/// `"<source> to <target> : unreachable"`.
pub fn report_lines(paths: &ShortestPaths) -> Vec<String> {
	paths
		.entries
		.iter()
		.map(|(target, reach)| match reach {
			Reach::Reached(route) => {
				let hops: Vec<String> = route.path.iter().map(ToString::to_string).collect();
				format!(
					"{} to {} : {:>3} : {}",
					paths.source,
					target,
					route.distance,
					hops.join(" -> ")
				)
			}
			Reach::Unreachable => format!("{} to {} : unreachable", paths.source, target),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{Graph, Position, VertexId};
	use crate::shortest_path::{Expansion, run};

	#[test]
	fn formats_reached_and_unreachable() {
		let mut g = Graph::new();
		let a = g.add_vertex(Position::default());
		let b = g.add_vertex(Position::new(1.0, 0.0));
		let c = g.add_vertex(Position::new(2.0, 0.0));
		g.add_edge(a, b, 12).unwrap();
		g.add_vertex(Position::new(3.0, 0.0));
		g.add_edge(b, c, 100).unwrap();

		let lines = report_lines(&run(&g, a, Expansion::Frontier).unwrap());
		assert_eq!(
			lines,
			vec![
				"0 to 0 :   0 : 0",
				"0 to 1 :  12 : 0 -> 1",
				"0 to 2 : 112 : 0 -> 1 -> 2",
				"0 to 3 : unreachable",
			]
		);
	}

	#[test]
	fn single_vertex_reports_one_line() {
		let mut g = Graph::new();
		let only = g.add_vertex(Position::default());
		let lines = report_lines(&run(&g, only, Expansion::Frontier).unwrap());
		assert_eq!(lines, vec!["0 to 0 :   0 : 0"]);
		assert_eq!(only, VertexId(0));
	}
}
