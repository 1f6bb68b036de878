//! starfield-greeting: an animated night-sky greeting card.
//!
//! This crate provides a WASM page that renders a starfield with meteors,
//! click-triggered spark bursts and a heart-shaped meteor shower, with a
//! typewriter-style message laid over it.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, MouseEvent, Window};

// rand draws entropy through getrandom, whose wasm backend is feature-gated.
use getrandom as _;

pub mod components;
pub mod config;

pub use components::starfield::{
	Bounds, ClickEffect, Color, HeartPath, Meteor, Particle, SceneConfig, SceneRng, SceneState,
	StarfieldCanvas, Surface, create_heart_path,
};
pub use components::typewriter::{RevealState, Typewriter, TypewriterText};
pub use config::{GreetingConfig, TextConfig};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starfield: logging initialized");
}

/// Load page configuration from a script element with id="greeting-config".
/// Expected format: JSON matching [`GreetingConfig`]; missing fields keep
/// their defaults.
fn load_config() -> Option<GreetingConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("greeting-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<GreetingConfig>(&json_text) {
		Ok(config) => {
			info!("starfield: loaded page config");
			Some(config)
		}
		Err(e) => {
			warn!("starfield: failed to parse page config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads the page config from the DOM and lays the text over the starfield.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();
	let scene_config = config.scene.clone();
	let scene = Signal::derive(move || scene_config.clone());
	let hint = config.hint.clone();
	let hint_visible = RwSignal::new(hint.is_some());
	let audio_ref = NodeRef::<leptos::html::Audio>::new();

	// The first click anywhere starts the music and dismisses the hint.
	let on_click = move |_: MouseEvent| {
		hint_visible.set(false);
		if let Some(audio) = audio_ref.get() {
			if audio.paused() {
				audio.set_loop(true);
				if let Err(e) = audio.play() {
					warn!("starfield: music playback refused: {:?}", e);
				}
			}
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=config.page_title.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="greeting" on:click=on_click>
			<StarfieldCanvas config=scene />
			<div class="greeting-overlay">
				<h1 class="title">
					<TypewriterText
						text=config.title.text.clone()
						delay_ms=config.title.delay_ms
						frames_per_char=config.title.frames_per_char
					/>
				</h1>
				<p class="message">
					<TypewriterText
						text=config.message.text.clone()
						delay_ms=config.message.delay_ms
						frames_per_char=config.message.frames_per_char
					/>
				</p>
			</div>
			{move || {
				hint.clone()
					.filter(|_| hint_visible.get())
					.map(|text| view! { <p class="hint">{text}</p> })
			}}
			{config.music.clone().map(|src| view! { <audio node_ref=audio_ref src=src preload="auto"></audio> })}
		</div>
	}
}
