//! Browser scheduling helpers shared by the animated components.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Window;

pub(crate) fn window() -> Result<Window, JsValue> {
	web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// Call `step` with the frame timestamp (ms) on every animation frame for as
/// long as it returns `true`.
pub(crate) fn run_frame_loop(mut step: impl FnMut(f64) -> bool + 'static) -> Result<(), JsValue> {
	let animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
	let animate_inner = animate.clone();

	*animate.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
		if !step(timestamp) {
			return;
		}
		if let Some(ref cb) = *animate_inner.borrow() {
			if let Err(e) = request_frame(cb) {
				log::warn!("requestAnimationFrame failed: {:?}", e);
			}
		}
	}));

	match *animate.borrow() {
		Some(ref cb) => request_frame(cb),
		None => Ok(()),
	}
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) -> Result<(), JsValue> {
	window()?.request_animation_frame(cb.as_ref().unchecked_ref())?;
	Ok(())
}

/// Run `f` once after `delay_ms` milliseconds.
pub(crate) fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) -> Result<(), JsValue> {
	let cb = Closure::once_into_js(f);
	window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
		cb.unchecked_ref::<js_sys::Function>(),
		delay_ms,
	)?;
	Ok(())
}
