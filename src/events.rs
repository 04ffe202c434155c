//! Process-wide event subscriptions.
//!
//! Keyboard and pointer events reach a component only while it holds an
//! active subscription. Components subscribe when they mount and unsubscribe
//! when they unmount, so mounting and unmounting any number of instances never
//! leaves stale listeners behind.

use std::collections::BTreeMap;

/// What a listener wants to hear about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interest {
	Key,
	PointerDown,
}

/// Handle returned by [`EventRegistry::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Default)]
pub struct EventRegistry {
	next_id: u64,
	subscriptions: BTreeMap<SubscriptionId, Interest>,
}

impl EventRegistry {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn subscribe(&mut self, interest: Interest) -> SubscriptionId {
		self.next_id += 1;
		let id = SubscriptionId(self.next_id);
		self.subscriptions.insert(id, interest);
		id
	}

	/// Remove a subscription. Returns `false` if it was already gone.
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		self.subscriptions.remove(&id).is_some()
	}

	#[must_use]
	pub fn is_active(&self, id: SubscriptionId) -> bool {
		self.subscriptions.contains_key(&id)
	}

	/// Number of live subscriptions with the given interest.
	#[must_use]
	pub fn count(&self, interest: Interest) -> usize {
		self.subscriptions
			.values()
			.filter(|candidate| **candidate == interest)
			.count()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.subscriptions.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unsubscribe_is_idempotent() {
		let mut registry = EventRegistry::new();
		let key = registry.subscribe(Interest::Key);
		let pointer = registry.subscribe(Interest::PointerDown);
		assert_eq!(registry.count(Interest::Key), 1);
		assert!(registry.unsubscribe(key));
		assert!(!registry.unsubscribe(key));
		assert!(!registry.is_active(key));
		assert!(registry.is_active(pointer));
		assert!(registry.unsubscribe(pointer));
		assert!(registry.is_empty());
	}
}
