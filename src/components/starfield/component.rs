//! Leptos component wrapping the starfield canvas.
//!
//! The component creates a full-viewport canvas and wires up click, arrow-key
//! and window-resize handlers. An animation loop runs via
//! `requestAnimationFrame`, handing each frame timestamp to the scene driver.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use super::particles::SceneRng;
use super::state::SceneState;
use super::types::SceneConfig;
use crate::components::frame::{run_frame_loop, window};

type SharedScene = Rc<RefCell<Option<SceneState>>>;

/// Window listeners kept alive for as long as the scene runs.
#[derive(Default)]
struct Listeners {
	resize: Option<Closure<dyn FnMut()>>,
	keydown: Option<Closure<dyn FnMut(KeyboardEvent)>>,
}

/// Renders the animated starfield on a canvas that fills the viewport.
///
/// Clicks spawn spark bursts at the pointer, arrow keys spawn them at random
/// spots, and the third interaction (if it is a click) launches the heart
/// burst. The canvas follows the window size.
#[component]
pub fn StarfieldCanvas(#[prop(into)] config: Signal<SceneConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scene: SharedScene = Rc::new(RefCell::new(None));
	let listeners: Rc<RefCell<Listeners>> = Rc::new(RefCell::new(Listeners::default()));
	let (scene_init, listeners_init) = (scene.clone(), listeners.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if scene_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		if let Err(e) = mount_scene(
			canvas,
			config.get_untracked(),
			scene_init.clone(),
			&listeners_init,
		) {
			warn!("starfield: failed to start animation: {:?}", e);
		}
	});

	let scene_click = scene.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *scene_click.borrow_mut() {
			s.click(x, y);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="starfield-canvas"
			on:click=on_click
			style="display: block; position: fixed; inset: 0;"
		/>
	}
}

fn viewport_size() -> Result<(f64, f64), JsValue> {
	let win = window()?;
	let width = win.inner_width()?.as_f64().unwrap_or(0.0);
	let height = win.inner_height()?.as_f64().unwrap_or(0.0);
	Ok((width, height))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
	canvas
		.get_context("2d")?
		.ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
		.dyn_into()
		.map_err(|_| JsValue::from_str("2d context has an unexpected type"))
}

/// Size the canvas, build the scene, register window listeners and start the
/// frame loop.
fn mount_scene(
	canvas: HtmlCanvasElement,
	config: SceneConfig,
	scene: SharedScene,
	listeners: &Rc<RefCell<Listeners>>,
) -> Result<(), JsValue> {
	let win = window()?;
	let (w, h) = viewport_size()?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	let mut ctx = context_2d(&canvas)?;

	info!(
		"starfield: {} stars, {} meteors on {}x{}",
		config.star_count, config.meteor_count, w, h
	);
	*scene.borrow_mut() = Some(SceneState::new(config, w, h, SceneRng::from_entropy()));

	let (scene_resize, canvas_resize) = (scene.clone(), canvas.clone());
	let resize = Closure::<dyn FnMut()>::new(move || {
		let (nw, nh) = match viewport_size() {
			Ok(size) => size,
			Err(e) => {
				warn!("starfield: cannot read viewport size: {:?}", e);
				return;
			}
		};
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		if let Some(ref mut s) = *scene_resize.borrow_mut() {
			s.resize(nw, nh);
		}
	});
	win.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;

	let scene_key = scene.clone();
	let keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
		if let Some(ref mut s) = *scene_key.borrow_mut() {
			if s.key_pressed(&ev.key()) {
				// arrows would otherwise scroll the page
				ev.prevent_default();
			}
		}
	});
	win.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;

	{
		let mut l = listeners.borrow_mut();
		l.resize = Some(resize);
		l.keydown = Some(keydown);
	}

	run_frame_loop(move |timestamp| {
		if let Some(ref mut s) = *scene.borrow_mut() {
			s.frame(timestamp, &mut ctx);
		}
		true
	})
}
