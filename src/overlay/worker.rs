use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::trace;

use super::category::{Category, SearchHit};
use super::collaborators::{LookupError, SearchSource};

/// Commands understood by the background lookup worker.
#[derive(Debug)]
pub(crate) enum LookupCommand {
	/// Query the data source.
	Query {
		/// Identifier that lets the controller correlate the response.
		id: u64,
		query: String,
		category: Category,
	},
	/// Stop the worker thread.
	Shutdown,
}

/// A resolved lookup together with the snapshot it was issued for.
#[derive(Debug)]
pub(crate) struct LookupResult {
	pub(crate) id: u64,
	pub(crate) query: String,
	pub(crate) category: Category,
	pub(crate) outcome: Result<Vec<SearchHit>, LookupError>,
}

/// Launch the lookup worker and return its channels plus the shared id of
/// the most recently issued query.
pub(crate) fn spawn(
	source: Arc<dyn SearchSource>,
) -> (Sender<LookupCommand>, Receiver<LookupResult>, Arc<AtomicU64>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || worker_loop(source.as_ref(), command_rx, result_tx, &thread_latest));

	(command_tx, result_rx, latest_query_id)
}

fn worker_loop(
	source: &dyn SearchSource,
	command_rx: Receiver<LookupCommand>,
	result_tx: Sender<LookupResult>,
	latest_query_id: &AtomicU64,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(source, &result_tx, latest_query_id, command) {
			break;
		}
	}
}

fn handle_command(
	source: &dyn SearchSource,
	result_tx: &Sender<LookupResult>,
	latest_query_id: &AtomicU64,
	command: LookupCommand,
) -> bool {
	match command {
		LookupCommand::Query {
			id,
			query,
			category,
		} => {
			// A newer query was issued while this one sat in the queue.
			if id < latest_query_id.load(Ordering::Acquire) {
				trace!("skipping superseded lookup {id} for {query:?}");
				return true;
			}
			let outcome = source.search(&query, category);
			result_tx
				.send(LookupResult {
					id,
					query,
					category,
					outcome,
				})
				.is_ok()
		}
		LookupCommand::Shutdown => false,
	}
}
