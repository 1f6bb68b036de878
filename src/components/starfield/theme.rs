//! Colors and visual styling for the starfield.
//!
//! Colors are kept numeric until the moment they are handed to the canvas, so
//! alpha is always an explicit channel rather than part of a composed string.

use std::ops::Range;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const WHITE: Color = Color::rgb(255, 255, 255);
	pub const BLACK: Color = Color::rgb(0, 0, 0);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Build a color from hue (degrees), saturation and lightness (0.0-1.0).
	pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
		let (r, g, b) = hsl_to_rgb(h, s, l);
		Self::rgba(r, g, b, a)
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		let a = self.a.clamp(0.0, 1.0);
		if (a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, a)
		}
	}
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
	let s = s.clamp(0.0, 1.0);
	let l = l.clamp(0.0, 1.0);
	if s == 0.0 {
		let v = (l * 255.0).round() as u8;
		return (v, v, v);
	}

	let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
	let p = 2.0 * l - q;
	let h = h.rem_euclid(360.0) / 360.0;

	let channel = |t: f64| (hue_to_rgb(p, q, t) * 255.0).round() as u8;
	(channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
	if t < 0.0 {
		t += 1.0;
	}
	if t > 1.0 {
		t -= 1.0;
	}

	if t < 1.0 / 6.0 {
		p + (q - p) * 6.0 * t
	} else if t < 1.0 / 2.0 {
		q
	} else if t < 2.0 / 3.0 {
		p + (q - p) * (2.0 / 3.0 - t) * 6.0
	} else {
		p
	}
}

/// A family of fully saturated hues sampled per particle.
#[derive(Clone, Debug)]
pub struct HueBand {
	/// Hue range in degrees.
	pub hues: Range<f64>,
	pub saturation: f64,
	pub lightness: f64,
}

impl HueBand {
	pub fn color(&self, hue: f64, alpha: f64) -> Color {
		Color::hsla(hue, self.saturation, self.lightness, alpha)
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Color painted over the whole canvas each frame; its alpha sets trail length.
	pub fade: Color,
	pub star: Color,
	/// Meteor hues (blue).
	pub meteor: HueBand,
	/// Click spark hues (magenta/pink).
	pub spark: HueBand,
}

impl Theme {
	/// Deep night sky with blue meteors and pink sparks (default).
	pub fn night() -> Self {
		Self {
			fade: Color::rgba(0, 0, 0, 0.1),
			star: Color::WHITE,
			meteor: HueBand {
				hues: 200.0..260.0,
				saturation: 1.0,
				lightness: 0.5,
			},
			spark: HueBand {
				hues: 300.0..360.0,
				saturation: 1.0,
				lightness: 0.5,
			},
		}
	}

	/// Override the fade overlay strength.
	pub fn with_fade_alpha(mut self, alpha: f64) -> Self {
		self.fade = Color::BLACK.with_alpha(alpha);
		self
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::night()
	}
}
