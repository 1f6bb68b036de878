//! Leptos component revealing its text one character per animation frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;

use super::reveal::Typewriter;
use crate::components::frame::{run_frame_loop, set_timeout};

/// Types out `text` after `delay_ms`, one character every `frames_per_char`
/// display frames. The full source text is kept in the `data-text` attribute.
#[component]
pub fn TypewriterText(
	#[prop(into)] text: String,
	#[prop(default = 0)] delay_ms: i32,
	#[prop(default = 1)] frames_per_char: u32,
) -> impl IntoView {
	let visible = RwSignal::new(String::new());
	let reveal = Rc::new(RefCell::new(Typewriter::new(&text, frames_per_char)));

	Effect::new(move |_| {
		let reveal = reveal.clone();
		let begin = move || {
			if !reveal.borrow_mut().start() {
				return;
			}
			let result = run_frame_loop(move |_| {
				let mut tw = reveal.borrow_mut();
				if tw.tick() {
					visible.set(tw.visible().to_string());
				}
				!tw.is_done()
			});
			if let Err(e) = result {
				warn!("typewriter: cannot schedule frames: {:?}", e);
			}
		};

		if delay_ms > 0 {
			if let Err(e) = set_timeout(delay_ms, begin) {
				warn!("typewriter: cannot schedule start: {:?}", e);
			}
		} else {
			begin();
		}
	});

	view! {
		<span class="typewriter" data-text=text>
			{move || visible.get()}
		</span>
	}
}
