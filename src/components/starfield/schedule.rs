//! Delayed tasks on the scene's own timeline.
//!
//! Tasks are released by the frame loop once the scene clock reaches their due
//! time, so nothing runs outside a frame and pending work can be dropped as a
//! group.

#[derive(Clone, Debug)]
struct Scheduled<T> {
	due_ms: f64,
	task: T,
}

/// Tasks ordered by due time; ties keep insertion order.
#[derive(Clone, Debug)]
pub struct Schedule<T> {
	pending: Vec<Scheduled<T>>,
}

impl<T> Default for Schedule<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Schedule<T> {
	pub fn new() -> Self {
		Self {
			pending: Vec::new(),
		}
	}

	pub fn push(&mut self, due_ms: f64, task: T) {
		let at = self.pending.partition_point(|s| s.due_ms <= due_ms);
		self.pending.insert(at, Scheduled { due_ms, task });
	}

	/// Remove and return every task due at or before `now_ms`, earliest first.
	pub fn drain_due(&mut self, now_ms: f64) -> Vec<T> {
		let due = self.pending.partition_point(|s| s.due_ms <= now_ms);
		self.pending.drain(..due).map(|s| s.task).collect()
	}

	/// Drop everything still pending, returning how many tasks were cancelled.
	pub fn clear(&mut self) -> usize {
		let cancelled = self.pending.len();
		self.pending.clear();
		cancelled
	}

	pub fn len(&self) -> usize {
		self.pending.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	pub fn due_times(&self) -> impl Iterator<Item = f64> + '_ {
		self.pending.iter().map(|s| s.due_ms)
	}
}
