//! Meteors: fast diagonal streaks with a fading trail.
//!
//! Most meteors fall down-left in a straight line and are recycled when they
//! leave the canvas. Meteors spawned by a heart burst may instead trace their
//! [`HeartPath`] one point per frame, after which their trail drains and they
//! are retired.

use std::collections::VecDeque;

use glam::DVec2;

use super::heart::HeartPath;
use super::particles::{FrameEnv, Particle};
use super::render::Surface;

/// Height above the canvas where recycled meteors start.
const SPAWN_Y: f64 = -50.0;

#[derive(Clone, Copy, Debug)]
enum Motion {
	/// Fall down-left at half the vertical speed horizontally.
	Straight,
	/// Walk the tagged path, `next` being the index of the next point.
	Tracing { next: usize },
	/// Path exhausted; the trail shrinks until nothing is left.
	Draining,
}

#[derive(Clone, Debug)]
pub struct Meteor {
	pub pos: DVec2,
	pub speed: f64,
	pub size: f64,
	/// Hue in degrees.
	pub hue: f64,
	trail: VecDeque<DVec2>,
	trail_cap: usize,
	path: Option<HeartPath>,
	motion: Motion,
}

impl Meteor {
	pub fn new(env: &mut FrameEnv<'_>, trail_cap: usize) -> Self {
		let mut meteor = Self {
			pos: DVec2::ZERO,
			speed: 0.0,
			size: 0.0,
			hue: 0.0,
			trail: VecDeque::with_capacity(trail_cap + 1),
			trail_cap,
			path: None,
			motion: Motion::Straight,
		};
		meteor.reset(env);
		meteor
	}

	/// Tag the meteor with a heart path. When `follow` is false the path is kept
	/// as data only and the meteor keeps its straight-line motion.
	pub fn with_path(mut self, path: HeartPath, follow: bool) -> Self {
		if follow {
			self.motion = Motion::Tracing { next: 0 };
		}
		self.path = Some(path);
		self
	}

	/// Restart from just above the top edge with a fresh speed, size and hue.
	pub fn reset(&mut self, env: &mut FrameEnv<'_>) {
		self.pos = DVec2::new(env.rng.range(0.0..env.bounds.width), SPAWN_Y);
		self.speed = env.rng.range(4.0..12.0);
		self.size = env.rng.range(1.0..3.0);
		self.hue = env.rng.range(env.theme.meteor.hues.clone());
		self.trail.clear();
	}

	pub fn path(&self) -> Option<&HeartPath> {
		self.path.as_ref()
	}

	pub fn is_tracing(&self) -> bool {
		matches!(self.motion, Motion::Tracing { .. })
	}

	/// Recent positions, oldest first.
	pub fn trail(&self) -> impl ExactSizeIterator<Item = &DVec2> {
		self.trail.iter()
	}

	fn push_trail(&mut self) {
		self.trail.push_back(self.pos);
		while self.trail.len() > self.trail_cap {
			self.trail.pop_front();
		}
	}
}

impl Particle for Meteor {
	fn update(&mut self, env: &mut FrameEnv<'_>) {
		match self.motion {
			Motion::Straight => {
				self.pos += DVec2::new(-self.speed * 0.5, self.speed);
				self.push_trail();
				if self.pos.y > env.bounds.height || self.pos.x < 0.0 {
					self.reset(env);
				}
			}
			Motion::Tracing { next } => {
				let point = self.path.as_ref().and_then(|p| p.points().get(next)).copied();
				match point {
					Some(point) => {
						self.pos = point;
						self.push_trail();
						self.motion = Motion::Tracing { next: next + 1 };
					}
					None => {
						self.motion = Motion::Draining;
						self.trail.pop_front();
					}
				}
			}
			Motion::Draining => {
				self.trail.pop_front();
			}
		}
	}

	fn draw(&self, surface: &mut dyn Surface, env: &mut FrameEnv<'_>) {
		let cap = self.trail_cap.max(1) as f64;
		let newest = self.trail.len().saturating_sub(1);
		for (i, pos) in self.trail.iter().enumerate() {
			// 1.0 for the newest point, shrinking by 1/cap per step back
			let fade = 1.0 - (newest - i) as f64 / cap;
			surface.fill_circle(
				pos.x,
				pos.y,
				self.size * fade,
				env.theme.meteor.color(self.hue, fade),
			);
		}
	}

	fn is_finished(&self) -> bool {
		matches!(self.motion, Motion::Draining) && self.trail.is_empty()
	}
}
