use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Quiet period used when nothing else is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Source of the current instant.
pub trait Clock: Send + Sync {
	fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
	fn now(&self) -> Instant {
		(**self).now()
	}
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> Instant {
		Instant::now()
	}
}

/// Clock that only moves when told to. Shared through an [`Arc`] so a test
/// can advance the same clock the controller reads.
#[derive(Debug)]
pub struct ManualClock {
	now: Mutex<Instant>,
}

impl ManualClock {
	#[must_use]
	pub fn new() -> Self {
		Self {
			now: Mutex::new(Instant::now()),
		}
	}

	pub fn advance(&self, by: Duration) {
		let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
		*now += by;
	}
}

impl Default for ManualClock {
	fn default() -> Self {
		Self::new()
	}
}

impl Clock for ManualClock {
	fn now(&self) -> Instant {
		*self.now.lock().unwrap_or_else(PoisonError::into_inner)
	}
}

/// A single cancellable delayed task.
///
/// Scheduling replaces any pending deadline, so a burst of mutations fires at
/// most once, `quiet` after the last one.
#[derive(Debug, Clone)]
pub struct Debouncer {
	quiet: Duration,
	deadline: Option<Instant>,
}

impl Debouncer {
	#[must_use]
	pub fn new(quiet: Duration) -> Self {
		Self {
			quiet,
			deadline: None,
		}
	}

	#[must_use]
	pub fn quiet(&self) -> Duration {
		self.quiet
	}

	/// Restart the timer from `now`.
	pub fn schedule(&mut self, now: Instant) {
		self.deadline = Some(now + self.quiet);
	}

	pub fn cancel(&mut self) {
		self.deadline = None;
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.deadline.is_some()
	}

	/// Time left before the pending deadline, if any.
	#[must_use]
	pub fn remaining(&self, now: Instant) -> Option<Duration> {
		self.deadline
			.map(|deadline| deadline.saturating_duration_since(now))
	}

	/// Consume the deadline if it has elapsed. Returns `true` exactly once
	/// per scheduled quiet window.
	pub fn fire(&mut self, now: Instant) -> bool {
		match self.deadline {
			Some(deadline) if now >= deadline => {
				self.deadline = None;
				true
			}
			_ => false,
		}
	}
}

impl Default for Debouncer {
	fn default() -> Self {
		Self::new(DEFAULT_DEBOUNCE)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fires_once_after_quiet_period() {
		let clock = ManualClock::new();
		let mut debouncer = Debouncer::default();
		debouncer.schedule(clock.now());

		clock.advance(Duration::from_millis(299));
		assert!(!debouncer.fire(clock.now()));

		clock.advance(Duration::from_millis(1));
		assert!(debouncer.fire(clock.now()));
		assert!(!debouncer.fire(clock.now()));
		assert!(!debouncer.is_pending());
	}

	#[test]
	fn rescheduling_pushes_the_deadline_back() {
		let clock = ManualClock::new();
		let mut debouncer = Debouncer::default();
		debouncer.schedule(clock.now());
		clock.advance(Duration::from_millis(200));
		debouncer.schedule(clock.now());
		clock.advance(Duration::from_millis(200));
		assert!(!debouncer.fire(clock.now()));
		assert_eq!(
			debouncer.remaining(clock.now()),
			Some(Duration::from_millis(100))
		);
		clock.advance(Duration::from_millis(100));
		assert!(debouncer.fire(clock.now()));
	}

	#[test]
	fn cancelled_timer_never_fires() {
		let clock = ManualClock::new();
		let mut debouncer = Debouncer::default();
		debouncer.schedule(clock.now());
		debouncer.cancel();
		clock.advance(Duration::from_secs(1));
		assert!(!debouncer.fire(clock.now()));
	}
}
