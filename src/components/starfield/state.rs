//! Scene state and the per-frame driver.
//!
//! `SceneState` owns every live particle together with the canvas bounds, the
//! interaction counter and the pending burst spawns. Created once when the
//! component mounts, then mutated by the animation loop and by input handlers.
//! Input only queues work or pushes particles; everything is advanced and
//! drawn from [`SceneState::frame`].

use glam::DVec2;
use log::debug;

use super::heart::{HeartPath, create_heart_path, fit_heart_size};
use super::meteor::Meteor;
use super::particles::{Bounds, ClickEffect, FrameEnv, Particle, SceneRng, Star};
use super::render::Surface;
use super::schedule::Schedule;
use super::theme::Theme;
use super::types::SceneConfig;

/// Arrow keys that count as an interaction.
const ARROW_KEYS: [&str; 4] = ["ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight"];

/// Work deferred onto the scene timeline.
#[derive(Clone, Debug)]
enum SceneTask {
	SpawnMeteor(HeartPath),
}

pub struct SceneState {
	pub bounds: Bounds,
	pub stars: Vec<Star>,
	pub meteors: Vec<Meteor>,
	pub effects: Vec<ClickEffect>,
	interactions: u32,
	/// Timestamp of the latest frame, in milliseconds.
	clock_ms: f64,
	schedule: Schedule<SceneTask>,
	config: SceneConfig,
	theme: Theme,
	rng: SceneRng,
}

impl SceneState {
	pub fn new(config: SceneConfig, width: f64, height: f64, mut rng: SceneRng) -> Self {
		let bounds = Bounds::new(width, height);
		let theme = Theme::default().with_fade_alpha(config.fade_alpha);

		let mut env = FrameEnv {
			bounds,
			theme: &theme,
			rng: &mut rng,
		};
		let stars = (0..config.star_count).map(|_| Star::new(&mut env)).collect();
		let meteors = (0..config.meteor_count)
			.map(|_| Meteor::new(&mut env, config.trail_length))
			.collect();

		Self {
			bounds,
			stars,
			meteors,
			effects: Vec::new(),
			interactions: 0,
			clock_ms: 0.0,
			schedule: Schedule::new(),
			config,
			theme,
			rng,
		}
	}

	pub fn config(&self) -> &SceneConfig {
		&self.config
	}

	/// Total clicks and arrow-key presses so far.
	pub fn interactions(&self) -> u32 {
		self.interactions
	}

	pub fn clock_ms(&self) -> f64 {
		self.clock_ms
	}

	pub fn pending_spawns(&self) -> usize {
		self.schedule.len()
	}

	/// Due times of pending spawns relative to the current clock.
	pub fn pending_offsets(&self) -> Vec<f64> {
		self.schedule.due_times().map(|t| t - self.clock_ms).collect()
	}

	/// Drop every pending spawn, e.g. when the page is torn down.
	pub fn cancel_pending(&mut self) -> usize {
		self.schedule.clear()
	}

	/// Advance and draw one display frame at `now_ms`.
	pub fn frame(&mut self, now_ms: f64, surface: &mut dyn Surface) {
		self.clock_ms = self.clock_ms.max(now_ms);
		for task in self.schedule.drain_due(self.clock_ms) {
			match task {
				SceneTask::SpawnMeteor(path) => self.spawn_burst_meteor(path),
			}
		}

		surface.fill_rect(
			0.0,
			0.0,
			self.bounds.width,
			self.bounds.height,
			self.theme.fade,
		);

		let mut env = FrameEnv {
			bounds: self.bounds,
			theme: &self.theme,
			rng: &mut self.rng,
		};
		advance(&mut self.stars, surface, &mut env);
		advance(&mut self.meteors, surface, &mut env);
		self.meteors.retain(|m| !m.is_finished());
		advance(&mut self.effects, surface, &mut env);
		self.effects.retain(|e| !e.is_finished());
	}

	/// Pointer click at canvas coordinates `(x, y)`.
	pub fn click(&mut self, x: f64, y: f64) {
		self.interactions += 1;
		self.push_effect(DVec2::new(x, y));

		if self.interactions == self.config.burst_trigger {
			self.schedule_heart_burst();
		}
	}

	/// Key press; returns whether the key was one the scene reacts to.
	pub fn key_pressed(&mut self, key: &str) -> bool {
		if !ARROW_KEYS.contains(&key) {
			return false;
		}
		self.interactions += 1;
		let origin = DVec2::new(
			self.rng.range(0.0..self.bounds.width),
			self.rng.range(0.0..self.bounds.height),
		);
		self.push_effect(origin);
		true
	}

	/// New viewport size. Live particles stay where they are; only future
	/// resets use the new bounds.
	pub fn resize(&mut self, width: f64, height: f64) {
		debug!("starfield: resized to {}x{}", width, height);
		self.bounds = Bounds::new(width, height);
	}

	fn push_effect(&mut self, origin: DVec2) {
		self.effects.push(ClickEffect::new(
			origin,
			self.config.spark_count,
			self.config.spark_decay,
			&mut self.rng,
		));
	}

	fn schedule_heart_burst(&mut self) {
		let size = self
			.config
			.heart_size
			.unwrap_or_else(|| fit_heart_size(self.bounds));
		let path = create_heart_path(self.bounds.center(), size);
		debug!(
			"starfield: heart burst of {} meteors over {} points",
			self.config.burst_meteors,
			path.len()
		);
		for i in 0..self.config.burst_meteors {
			let due = self.clock_ms + i as f64 * self.config.burst_stagger_ms;
			self.schedule.push(due, SceneTask::SpawnMeteor(path.clone()));
		}
	}

	fn spawn_burst_meteor(&mut self, path: HeartPath) {
		if self.meteors.len() >= self.config.max_meteors {
			// Evict the oldest burst meteor; the base pool is never evicted.
			if self.meteors.len() > self.config.meteor_count {
				self.meteors.remove(self.config.meteor_count);
			} else {
				debug!("starfield: meteor cap reached, skipping spawn");
				return;
			}
		}

		let mut env = FrameEnv {
			bounds: self.bounds,
			theme: &self.theme,
			rng: &mut self.rng,
		};
		let meteor = Meteor::new(&mut env, self.config.trail_length)
			.with_path(path, self.config.follow_heart_path);
		self.meteors.push(meteor);
	}
}

/// Update then draw each particle in order.
fn advance<P: Particle>(particles: &mut [P], surface: &mut dyn Surface, env: &mut FrameEnv<'_>) {
	for particle in particles.iter_mut() {
		particle.update(env);
		particle.draw(surface, env);
	}
}
