//! Scene configuration supplied to the starfield component.

use serde::Deserialize;

/// Tunables for the starfield scene. Every field has a default, so a partial
/// JSON object is enough to override a single value.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
	/// Number of background stars.
	pub star_count: usize,
	/// Number of meteors that fall and recycle forever.
	pub meteor_count: usize,
	/// Maximum positions kept in a meteor trail.
	pub trail_length: usize,
	/// Sparks per click effect.
	pub spark_count: usize,
	/// Life lost by each spark per frame.
	pub spark_decay: f64,
	/// Interaction count at which the heart burst fires (once).
	pub burst_trigger: u32,
	/// Meteors spawned by the heart burst.
	pub burst_meteors: usize,
	/// Delay between consecutive burst spawns, in milliseconds.
	pub burst_stagger_ms: f64,
	/// Heart scale in pixels per curve unit. Fitted to the viewport when unset.
	pub heart_size: Option<f64>,
	/// Whether burst meteors trace the heart or fall like ordinary meteors.
	pub follow_heart_path: bool,
	/// Upper bound on live meteors; the oldest burst meteor is evicted first.
	pub max_meteors: usize,
	/// Alpha of the black overlay painted every frame.
	pub fade_alpha: f64,
}

impl Default for SceneConfig {
	fn default() -> Self {
		Self {
			star_count: 200,
			meteor_count: 3,
			trail_length: 15,
			spark_count: 10,
			spark_decay: 0.03,
			burst_trigger: 3,
			burst_meteors: 20,
			burst_stagger_ms: 50.0,
			heart_size: None,
			follow_heart_path: true,
			max_meteors: 64,
			fade_alpha: 0.1,
		}
	}
}
