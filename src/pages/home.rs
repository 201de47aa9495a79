use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use log::warn;

use crate::components::graph_editor::GraphEditorCanvas;
use crate::config::EditorConfig;
use crate::shortest_path::Expansion;

/// Reads `?expansion=frontier|nearest`, falling back to the default strategy.
fn config_from_query(expansion: Option<String>) -> EditorConfig {
	let expansion = match expansion.map(|raw| raw.parse::<Expansion>()) {
		Some(Ok(expansion)) => expansion,
		Some(Err(err)) => {
			warn!("{err}, using {}", Expansion::default());
			Expansion::default()
		}
		None => Expansion::default(),
	};
	EditorConfig::default().with_expansion(expansion)
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let query = use_query_map();
	let config = config_from_query(query.with_untracked(|q| q.get("expansion")));
	let expansion = config.expansion;

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="editor-page">
				<div class="graph-overlay">
					<h1>"Dijkstra's algorithm"</h1>
					<p class="subtitle">
						"Left click places a vertex. Right click two vertices to connect them, then type the weight and press Enter. "
						"D runs shortest paths, E lists weights, Delete removes the newest vertex."
					</p>
					<p class="subtitle">"Expansion: " {expansion.to_string()}</p>
				</div>
				<GraphEditorCanvas config=config />
			</div>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn query_selects_expansion() {
		assert_eq!(
			config_from_query(Some("nearest".into())).expansion,
			Expansion::NearestNeighbor
		);
		assert_eq!(config_from_query(None).expansion, Expansion::Frontier);
		assert_eq!(
			config_from_query(Some("bogus".into())).expansion,
			Expansion::Frontier
		);
	}
}
