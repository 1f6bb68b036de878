//! Page components: the animated sky and the text laid over it.

pub(crate) mod frame;
pub mod starfield;
pub mod typewriter;
