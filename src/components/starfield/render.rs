//! Canvas drawing primitives for the starfield.
//!
//! Particles only ever fill rectangles and circles, so the scene draws through
//! the small [`Surface`] trait. The browser implementation forwards to
//! `CanvasRenderingContext2d`.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::theme::Color;

/// Something the scene can paint onto.
pub trait Surface {
	/// Fill an axis-aligned rectangle.
	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);

	/// Fill a circle centered on `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		// arc() throws on negative radii
		if radius <= 0.0 || color.a <= 0.0 {
			return;
		}
		self.set_fill_style_str(&color.to_css());
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}
}
