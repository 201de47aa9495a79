use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::EditorState;

pub fn render(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let config = &state.config;
	ctx.set_fill_style_str(&config.palette.background);
	ctx.fill_rect(0.0, 0.0, config.width, config.height);
	ctx.set_font(&config.font);
	ctx.set_text_baseline("top");

	if let Some(input) = state.weight_input() {
		ctx.set_fill_style_str(&config.palette.light);
		let _ = ctx.fill_text("Weight: ", 0.0, 10.0);
		let _ = ctx.fill_text(input, 60.0, 10.0);
	}

	draw_edges(state, ctx);
	draw_path_tree(state, ctx);
	draw_vertices(state, ctx);
}

fn draw_edges(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let config = &state.config;
	ctx.set_line_width(config.edge_width);

	for edge in state.graph.edges() {
		let (Some(a), Some(b)) = (state.graph.vertex(edge.a), state.graph.vertex(edge.b)) else {
			continue;
		};
		let shade = config.weight_shade(edge.weight);
		ctx.set_stroke_style_str(&format!("rgb({shade}, {shade}, 255)"));
		ctx.begin_path();
		ctx.move_to(a.position.x, a.position.y);
		ctx.line_to(b.position.x, b.position.y);
		ctx.stroke();

		let mid = a.position.midpoint(&b.position);
		ctx.set_fill_style_str(&config.palette.light);
		let _ = ctx.fill_text(&edge.weight.to_string(), mid.x, mid.y);
	}
}

fn draw_path_tree(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let Some(paths) = state.last_run() else {
		return;
	};
	let config = &state.config;
	ctx.set_stroke_style_str(&config.palette.path);
	ctx.set_line_width(config.edge_width / 2.0);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(8.0),
		&JsValue::from_f64(4.0),
	));

	for (from, to) in paths.path_edges() {
		let (Some(a), Some(b)) = (state.graph.vertex(from), state.graph.vertex(to)) else {
			continue;
		};
		ctx.begin_path();
		ctx.move_to(a.position.x, a.position.y);
		ctx.line_to(b.position.x, b.position.y);
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_vertices(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let config = &state.config;

	for vertex in state.graph.vertices() {
		let (x, y) = (vertex.position.x, vertex.position.y);
		ctx.begin_path();
		let _ = ctx.arc(x, y, config.vertex_radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&config.palette.dark);
		ctx.fill();

		ctx.set_fill_style_str(&config.palette.light);
		let _ = ctx.fill_text(&vertex.id.to_string(), x, y);
	}

	ctx.set_stroke_style_str(&config.palette.light);
	ctx.set_line_width(1.0);
	for vertex in state.selected().iter().filter_map(|&id| state.graph.vertex(id)) {
		ctx.begin_path();
		let _ = ctx.arc(
			vertex.position.x,
			vertex.position.y,
			config.selection_radius,
			0.0,
			2.0 * PI,
		);
		ctx.stroke();
	}
}
