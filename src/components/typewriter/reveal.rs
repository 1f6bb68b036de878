//! Character-by-character text reveal driven by display frames.

/// Where a reveal currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
	Idle,
	Revealing,
	Done,
}

/// Reveals one character every `frames_per_char` ticks.
///
/// A reveal only runs once: [`Typewriter::start`] is ignored unless the
/// typewriter is still idle, so a target is never driven by two loops.
#[derive(Clone, Debug)]
pub struct Typewriter {
	chars: Vec<char>,
	shown: usize,
	visible: String,
	frames_per_char: u32,
	frames: u32,
	state: RevealState,
}

impl Typewriter {
	pub fn new(text: &str, frames_per_char: u32) -> Self {
		Self {
			chars: text.chars().collect(),
			shown: 0,
			visible: String::with_capacity(text.len()),
			frames_per_char: frames_per_char.max(1),
			frames: 0,
			state: RevealState::Idle,
		}
	}

	/// Begin revealing. Returns `false` if a reveal already started.
	pub fn start(&mut self) -> bool {
		if self.state != RevealState::Idle {
			return false;
		}
		self.state = if self.chars.is_empty() {
			RevealState::Done
		} else {
			RevealState::Revealing
		};
		true
	}

	/// Advance one frame. Returns `true` when a character was appended.
	pub fn tick(&mut self) -> bool {
		if self.state != RevealState::Revealing {
			return false;
		}
		self.frames += 1;
		if self.frames < self.frames_per_char {
			return false;
		}
		self.frames = 0;

		self.visible.push(self.chars[self.shown]);
		self.shown += 1;
		if self.shown == self.chars.len() {
			self.state = RevealState::Done;
		}
		true
	}

	pub fn visible(&self) -> &str {
		&self.visible
	}

	pub fn state(&self) -> RevealState {
		self.state
	}

	pub fn is_done(&self) -> bool {
		self.state == RevealState::Done
	}
}
