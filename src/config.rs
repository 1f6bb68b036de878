//! Page configuration, read from an inline JSON script element.

use serde::Deserialize;

use crate::components::starfield::SceneConfig;

/// One revealed text block.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextConfig {
	pub text: String,
	/// Milliseconds to wait after mount before the reveal starts.
	pub delay_ms: i32,
	/// Display frames per revealed character.
	pub frames_per_char: u32,
}

impl Default for TextConfig {
	fn default() -> Self {
		Self {
			text: String::new(),
			delay_ms: 0,
			frames_per_char: 1,
		}
	}
}

/// Everything the greeting page can be customized with.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GreetingConfig {
	/// Document title.
	pub page_title: String,
	pub title: TextConfig,
	pub message: TextConfig,
	/// Shown until the first click; hidden entirely when unset.
	pub hint: Option<String>,
	/// Audio URL started on the first click.
	pub music: Option<String>,
	pub scene: SceneConfig,
}

impl Default for GreetingConfig {
	fn default() -> Self {
		Self {
			page_title: "Starfield".to_string(),
			title: TextConfig {
				text: "✨ Look up ✨".to_string(),
				..TextConfig::default()
			},
			message: TextConfig {
				text: "Out here among countless stars we are very small. \
				       Even so, I would like to be the one that quietly keeps watch over you, \
				       however the years turn."
					.to_string(),
				delay_ms: 2000,
				..TextConfig::default()
			},
			hint: Some("Click anywhere, or press the arrow keys".to_string()),
			music: None,
			scene: SceneConfig::default(),
		}
	}
}
