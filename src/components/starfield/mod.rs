//! Animated starfield canvas.
//!
//! Renders a night sky on an HTML canvas with:
//! - A pool of slowly falling stars
//! - Meteors with fading trails, plus a one-off heart-shaped burst
//! - Spark bursts on click and on arrow-key presses
//! - A translucent overlay each frame so everything leaves motion trails
//!
//! # Example
//!
//! ```ignore
//! use starfield_greeting::{SceneConfig, StarfieldCanvas};
//!
//! view! { <StarfieldCanvas config=SceneConfig::default() /> }
//! ```

mod component;
mod heart;
mod meteor;
mod particles;
mod render;
mod schedule;
mod state;
pub mod theme;
mod types;

pub use component::StarfieldCanvas;
pub use heart::{HEART_STEP, HeartPath, create_heart_path, fit_heart_size};
pub use meteor::Meteor;
pub use particles::{Bounds, ClickEffect, FrameEnv, Particle, SceneRng, Spark, Star};
pub use render::Surface;
pub use schedule::Schedule;
pub use state::SceneState;
pub use theme::{Color, Theme};
pub use types::SceneConfig;
