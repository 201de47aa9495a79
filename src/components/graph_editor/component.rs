use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use super::input::Command;
use super::render;
use super::state::{EditorState, parse_start_index};
use crate::config::EditorConfig;
use crate::error::{PathError, SessionError};
use crate::graph::{Position, VertexId};
use crate::shortest_path::report_lines;

const PRIMARY_BUTTON: i16 = 0;
const SECONDARY_BUTTON: i16 = 2;

#[component]
pub fn GraphEditorCanvas(#[prop(default = EditorConfig::default())] config: EditorConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let (width, height) = (config.width, config.height);
	let state = Rc::new(RefCell::new(EditorState::new(config)));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (messages, set_messages) = signal(Vec::<String>::new());
	let (state_init, animate_init) = (state.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			error!("2d canvas context unavailable");
			return;
		};

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			render::render(&state_anim.borrow(), &ctx);
			if let (Some(window), Some(cb)) = (web_sys::window(), &*animate_inner.borrow()) {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let (Some(window), Some(cb)) = (web_sys::window(), &*animate_init.borrow()) {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let _ = canvas.focus();
		let rect = canvas.get_bounding_client_rect();
		let position = Position::new(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		let mut s = state_md.borrow_mut();
		let outcome = match ev.button() {
			PRIMARY_BUTTON => s.primary_action(position).map(|_| ()),
			SECONDARY_BUTTON => s.secondary_action(position).map(|_| ()),
			_ => Ok(()),
		};
		if let Err(err) = outcome {
			show_error(set_messages, &err);
		}
	};

	let state_kd = state.clone();
	let on_keydown = move |ev: KeyboardEvent| {
		let awaiting = state_kd.borrow().awaiting_weight();
		let command = Command::from_key(&ev.key(), awaiting);
		if command == Command::Ignore {
			return;
		}
		ev.prevent_default();

		let start = if command == Command::RunShortestPaths {
			if state_kd.borrow().graph.is_empty() {
				show_error(set_messages, &SessionError::from(PathError::EmptyGraph));
				return;
			}
			match prompt_start_index() {
				Ok(Some(start)) => Some(start),
				Ok(None) => return,
				Err(err) => {
					show_error(set_messages, &err);
					return;
				}
			}
		} else {
			None
		};

		match dispatch(&mut state_kd.borrow_mut(), command, start) {
			Ok(Some(lines)) => {
				for line in &lines {
					info!("{line}");
				}
				set_messages.set(lines);
			}
			Ok(None) => {}
			Err(err) => show_error(set_messages, &err),
		}
	};

	view! {
		<div class="graph-editor">
			<canvas
				node_ref=canvas_ref
				class="graph-editor-canvas"
				tabindex="0"
				on:mousedown=on_mousedown
				on:contextmenu=|ev: MouseEvent| ev.prevent_default()
				on:keydown=on_keydown
				style="display: block; cursor: crosshair;"
			/>
			<pre class="graph-report">{move || messages.get().join("\n")}</pre>
		</div>
	}
}

/// Applies a key command. Returns lines to show, if the command produces any.
fn dispatch(
	s: &mut EditorState,
	command: Command,
	start: Option<VertexId>,
) -> Result<Option<Vec<String>>, SessionError> {
	match command {
		Command::RunShortestPaths => match start {
			Some(start) => Ok(Some(report_lines(s.run_from(start)?))),
			None => Ok(None),
		},
		Command::ListWeights => Ok(Some(vec![format!("weights: {:?}", s.edge_weights())])),
		Command::ConfirmWeight => s.confirm_weight().map(|_| None),
		Command::ClearWeight => {
			s.clear_weight();
			Ok(None)
		}
		Command::DeleteLastVertex => s.delete_last_vertex().map(|_| None),
		Command::Type(c) => {
			s.type_weight_char(c);
			Ok(None)
		}
		Command::Ignore => Ok(None),
	}
}

/// Blocking browser prompt for the start vertex. `None` when dismissed.
fn prompt_start_index() -> Result<Option<VertexId>, SessionError> {
	let Some(window) = web_sys::window() else {
		return Ok(None);
	};
	match window.prompt_with_message("Enter the starting index: ") {
		Ok(Some(text)) => parse_start_index(&text).map(Some),
		_ => Ok(None),
	}
}

fn show_error(set_messages: WriteSignal<Vec<String>>, err: &SessionError) {
	warn!("{err}");
	set_messages.set(vec![format!("ERROR: {err}")]);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn connected_pair() -> EditorState {
		let mut s = EditorState::new(EditorConfig::default());
		let (a, b) = (Position::new(0.0, 0.0), Position::new(80.0, 0.0));
		s.primary_action(a).unwrap();
		s.primary_action(b).unwrap();
		s.secondary_action(a).unwrap();
		s.secondary_action(b).unwrap();
		s
	}

	#[test]
	fn typed_weight_flows_into_listing() {
		let mut s = connected_pair();
		for key in ["1", "2", "Enter"] {
			let command = Command::from_key(key, s.awaiting_weight());
			assert_eq!(dispatch(&mut s, command, None), Ok(None));
		}
		assert_eq!(
			dispatch(&mut s, Command::ListWeights, None),
			Ok(Some(vec!["weights: [12]".to_string()]))
		);
	}

	#[test]
	fn run_produces_report_lines() {
		let mut s = connected_pair();
		s.type_weight_char('4');
		s.confirm_weight().unwrap();
		assert_eq!(
			dispatch(&mut s, Command::RunShortestPaths, Some(VertexId(1))),
			Ok(Some(vec![
				"1 to 0 :   4 : 1 -> 0".to_string(),
				"1 to 1 :   0 : 1".to_string(),
			]))
		);
		assert_eq!(dispatch(&mut s, Command::RunShortestPaths, None), Ok(None));
	}

	#[test]
	fn errors_surface_from_dispatch() {
		let mut s = connected_pair();
		s.type_weight_char('x');
		assert_eq!(
			dispatch(&mut s, Command::ConfirmWeight, None),
			Err(SessionError::InvalidWeightInput("x".into()))
		);
		assert_eq!(
			dispatch(&mut s, Command::RunShortestPaths, Some(VertexId(5))),
			Err(SessionError::Path(PathError::NotFound(VertexId(5))))
		);
		for _ in 0..2 {
			dispatch(&mut s, Command::DeleteLastVertex, None).unwrap();
		}
		assert_eq!(
			dispatch(&mut s, Command::DeleteLastVertex, None),
			Err(SessionError::NothingToDelete)
		);
	}
}
