//! Typewriter-style text reveal.

mod component;
mod reveal;

pub use component::TypewriterText;
pub use reveal::{RevealState, Typewriter};
