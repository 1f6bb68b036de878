//! Stars, click bursts, and the shared particle plumbing.

use std::f64::consts::TAU;
use std::ops::Range;

use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::render::Surface;
use super::theme::Theme;

/// Drawable area in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub width: f64,
	pub height: f64,
}

impl Bounds {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	pub fn center(&self) -> DVec2 {
		DVec2::new(self.width / 2.0, self.height / 2.0)
	}
}

/// Random source shared by every particle in a scene.
pub struct SceneRng(pub StdRng);

impl SceneRng {
	pub fn new(seed: u64) -> Self {
		Self(StdRng::seed_from_u64(seed))
	}

	pub fn from_entropy() -> Self {
		Self(StdRng::from_entropy())
	}

	/// Uniform sample from `range`; an empty range yields its start.
	pub fn range(&mut self, range: Range<f64>) -> f64 {
		if range.start < range.end {
			self.0.gen_range(range)
		} else {
			range.start
		}
	}
}

/// Everything a particle may read or consume while stepping or drawing.
pub struct FrameEnv<'a> {
	pub bounds: Bounds,
	pub theme: &'a Theme,
	pub rng: &'a mut SceneRng,
}

/// Common per-frame behavior of every particle kind.
pub trait Particle {
	/// Advance one frame.
	fn update(&mut self, env: &mut FrameEnv<'_>);

	/// Paint the current state.
	fn draw(&self, surface: &mut dyn Surface, env: &mut FrameEnv<'_>);

	/// Finished particles are dropped by the scene after drawing.
	fn is_finished(&self) -> bool {
		false
	}
}

/// A slowly falling background star. Recycled forever via [`Star::reset`].
#[derive(Clone, Debug)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub opacity: f64,
	pub speed: f64,
}

impl Star {
	pub fn new(env: &mut FrameEnv<'_>) -> Self {
		let mut star = Self {
			x: 0.0,
			y: 0.0,
			size: 0.0,
			opacity: 0.0,
			speed: 0.0,
		};
		star.reset(env);
		star
	}

	/// Re-randomize anywhere inside the current bounds.
	pub fn reset(&mut self, env: &mut FrameEnv<'_>) {
		self.x = env.rng.range(0.0..env.bounds.width);
		self.y = env.rng.range(0.0..env.bounds.height);
		self.size = env.rng.range(0.0..2.0);
		self.opacity = env.rng.range(0.5..1.0);
		self.speed = env.rng.range(0.0..0.5);
	}
}

impl Particle for Star {
	fn update(&mut self, env: &mut FrameEnv<'_>) {
		self.y += self.speed;
		if self.y > env.bounds.height {
			self.reset(env);
		}
	}

	fn draw(&self, surface: &mut dyn Surface, env: &mut FrameEnv<'_>) {
		surface.fill_circle(
			self.x,
			self.y,
			self.size,
			env.theme.star.with_alpha(self.opacity),
		);
	}
}

/// Distance multiplier applied to a spark's speed over its lifetime.
const SPARK_TRAVEL: f64 = 20.0;
/// Spark radius at full life.
const SPARK_RADIUS: f64 = 3.0;

/// One radiating fragment of a [`ClickEffect`].
#[derive(Clone, Copy, Debug)]
pub struct Spark {
	pub angle: f64,
	pub speed: f64,
	/// Remaining life in (0, 1]; also the spark's alpha.
	pub life: f64,
}

/// A burst of sparks radiating from the point that was clicked.
#[derive(Clone, Debug)]
pub struct ClickEffect {
	pub origin: DVec2,
	pub sparks: Vec<Spark>,
	decay: f64,
}

impl ClickEffect {
	pub fn new(origin: DVec2, count: usize, decay: f64, rng: &mut SceneRng) -> Self {
		let sparks = (0..count)
			.map(|_| Spark {
				angle: rng.range(0.0..TAU),
				speed: rng.range(2.0..5.0),
				life: 1.0,
			})
			.collect();
		Self {
			origin,
			sparks,
			decay,
		}
	}

	/// Where a spark currently sits; sparks travel further as they fade.
	pub fn spark_position(&self, spark: &Spark) -> DVec2 {
		let direction = DVec2::new(spark.angle.cos(), spark.angle.sin());
		self.origin + direction * spark.speed * (1.0 - spark.life) * SPARK_TRAVEL
	}
}

impl Particle for ClickEffect {
	fn update(&mut self, _env: &mut FrameEnv<'_>) {
		let decay = self.decay;
		self.sparks.retain_mut(|spark| {
			spark.life -= decay;
			spark.life > 0.0
		});
	}

	fn draw(&self, surface: &mut dyn Surface, env: &mut FrameEnv<'_>) {
		for spark in &self.sparks {
			let pos = self.spark_position(spark);
			// Hue flickers every frame
			let hue = env.rng.range(env.theme.spark.hues.clone());
			surface.fill_circle(
				pos.x,
				pos.y,
				SPARK_RADIUS * spark.life,
				env.theme.spark.color(hue, spark.life),
			);
		}
	}

	fn is_finished(&self) -> bool {
		self.sparks.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::starfield::theme::Color;

	struct Circles(Vec<(DVec2, f64, Color)>);

	impl Surface for Circles {
		fn fill_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64, _color: Color) {}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
			self.0.push((DVec2::new(x, y), radius, color));
		}
	}

	#[test]
	fn test_star_reset_ranges() {
		let theme = Theme::default();
		let mut rng = SceneRng::new(7);
		let mut env = FrameEnv {
			bounds: Bounds::new(640.0, 480.0),
			theme: &theme,
			rng: &mut rng,
		};
		for _ in 0..500 {
			let star = Star::new(&mut env);
			assert!((0.0..640.0).contains(&star.x));
			assert!((0.0..480.0).contains(&star.y));
			assert!((0.0..2.0).contains(&star.size));
			assert!((0.5..1.0).contains(&star.opacity));
			assert!((0.0..0.5).contains(&star.speed));
		}
	}

	#[test]
	fn test_star_wraps_inside_bounds() {
		let theme = Theme::default();
		let mut rng = SceneRng::new(11);
		let mut env = FrameEnv {
			bounds: Bounds::new(100.0, 50.0),
			theme: &theme,
			rng: &mut rng,
		};
		let mut star = Star::new(&mut env);
		star.y = 49.9;
		star.speed = 0.4;
		star.update(&mut env);
		assert!(star.y >= 0.0 && star.y < 50.0, "wrapped star at {}", star.y);
	}

	#[test]
	fn test_star_zero_bounds_does_not_panic() {
		let theme = Theme::default();
		let mut rng = SceneRng::new(3);
		let mut env = FrameEnv {
			bounds: Bounds::new(0.0, 0.0),
			theme: &theme,
			rng: &mut rng,
		};
		let star = Star::new(&mut env);
		assert_eq!((star.x, star.y), (0.0, 0.0));
	}

	#[test]
	fn test_click_effect_sparks_decay() {
		let theme = Theme::default();
		let mut rng = SceneRng::new(5);
		let mut effect = ClickEffect::new(DVec2::new(10.0, 10.0), 10, 0.03, &mut rng);
		assert_eq!(effect.sparks.len(), 10);
		assert!(effect.sparks.iter().all(|s| s.life == 1.0));
		assert!(effect.sparks.iter().all(|s| (2.0..5.0).contains(&s.speed)));

		let mut env = FrameEnv {
			bounds: Bounds::new(100.0, 100.0),
			theme: &theme,
			rng: &mut rng,
		};
		let mut previous = effect.sparks.len();
		for _ in 0..33 {
			effect.update(&mut env);
			assert!(effect.sparks.len() <= previous);
			previous = effect.sparks.len();
		}
		assert_eq!(effect.sparks.len(), 10);
		assert!(!effect.is_finished());

		effect.update(&mut env);
		assert!(effect.sparks.is_empty());
		assert!(effect.is_finished());
	}

	#[test]
	fn test_spark_drawn_along_its_heading() {
		let theme = Theme::default();
		let mut rng = SceneRng::new(9);
		let mut effect = ClickEffect::new(DVec2::new(50.0, 50.0), 1, 0.5, &mut rng);
		effect.sparks[0] = Spark {
			angle: 0.0,
			speed: 2.0,
			life: 0.5,
		};

		let mut surface = Circles(Vec::new());
		let mut env = FrameEnv {
			bounds: Bounds::new(100.0, 100.0),
			theme: &theme,
			rng: &mut rng,
		};
		effect.draw(&mut surface, &mut env);

		let (pos, radius, color) = surface.0[0];
		assert_eq!(pos, DVec2::new(70.0, 50.0));
		assert_eq!(radius, 1.5);
		assert_eq!(color.a, 0.5);
	}
}
