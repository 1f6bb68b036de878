//! Parametric heart curve sampling.

use std::f64::consts::TAU;
use std::rc::Rc;

use glam::DVec2;

use super::particles::Bounds;

/// Parameter increment between consecutive samples.
pub const HEART_STEP: f64 = 0.1;

/// Width of the unscaled curve (`16 sin³t` spans -16..16).
const HEART_WIDTH: f64 = 32.0;
/// Height of the unscaled curve, tip to lobes.
const HEART_HEIGHT: f64 = 30.0;

/// An immutable, cheaply cloned sequence of points along a heart outline.
#[derive(Clone, Debug, PartialEq)]
pub struct HeartPath {
	points: Rc<[DVec2]>,
}

impl HeartPath {
	pub fn points(&self) -> &[DVec2] {
		&self.points
	}

	pub fn len(&self) -> usize {
		self.points.len()
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}
}

/// Sample the heart curve at `t = 0, 0.1, 0.2, ...` while `t < 2π`, scaled by
/// `size` and centered on `center`. Screen y grows downwards, so the curve is
/// flipped to keep the tip at the bottom.
pub fn create_heart_path(center: DVec2, size: f64) -> HeartPath {
	let points = (0..)
		.map(|i| i as f64 * HEART_STEP)
		.take_while(|t| *t < TAU)
		.map(|t| {
			let x = 16.0 * t.sin().powi(3);
			let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
			DVec2::new(size * x + center.x, -size * y + center.y)
		})
		.collect();
	HeartPath { points }
}

/// Scale that keeps the heart within roughly 60% of the smaller viewport side.
pub fn fit_heart_size(bounds: Bounds) -> f64 {
	(bounds.width / HEART_WIDTH).min(bounds.height / HEART_HEIGHT).max(0.0) * 0.6
}
