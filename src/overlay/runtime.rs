use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::category::Category;
use super::collaborators::SearchSource;
use super::worker::{self, LookupCommand, LookupResult};

/// Controller-side handle on the lookup worker: issues ids and tracks which
/// response is still wanted.
pub(crate) struct LookupRuntime {
	tx: Sender<LookupCommand>,
	rx: Receiver<LookupResult>,
	latest_query_id: Arc<AtomicU64>,
	next_query_id: u64,
	current_query_id: Option<u64>,
	in_flight: bool,
}

impl LookupRuntime {
	pub(crate) fn spawn(source: Arc<dyn SearchSource>) -> Self {
		let (tx, rx, latest_query_id) = worker::spawn(source);
		Self {
			tx,
			rx,
			latest_query_id,
			next_query_id: 0,
			current_query_id: None,
			in_flight: false,
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(LookupCommand::Shutdown);
	}

	/// Send a lookup and return its id. Every earlier id becomes stale.
	pub(crate) fn issue(&mut self, query: String, category: Category) -> u64 {
		self.next_query_id = self.next_query_id.saturating_add(1);
		let id = self.next_query_id;
		self.current_query_id = Some(id);
		self.in_flight = true;
		self.latest_query_id.store(id, Ordering::Release);
		let _ = self.tx.send(LookupCommand::Query {
			id,
			query,
			category,
		});
		id
	}

	/// Forget the outstanding lookup so its response is dropped on arrival.
	pub(crate) fn invalidate(&mut self) {
		self.current_query_id = None;
		self.in_flight = false;
		self.latest_query_id
			.store(self.next_query_id.saturating_add(1), Ordering::Release);
	}

	pub(crate) fn matches_latest(&self, result_id: u64) -> bool {
		Some(result_id) == self.current_query_id
	}

	pub(crate) fn record_completion(&mut self) {
		self.in_flight = false;
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	pub(crate) fn issued(&self) -> u64 {
		self.next_query_id
	}

	pub(crate) fn try_recv(&self) -> Result<LookupResult, TryRecvError> {
		self.rx.try_recv()
	}
}
