//! One-shot searches without a terminal, driving the same overlay controller
//! the console uses.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use log::debug;

use crate::events::EventRegistry;
use crate::overlay::{Category, OverlayConfig, SearchHit, SearchOverlay, SearchSource};

/// How often the settle loop polls the overlay.
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Mount an overlay, enter `query` under `category` and wait for the lookup
/// to settle. `timeout` bounds the wait after the debounce window.
pub fn search_once(
	source: Arc<dyn SearchSource>,
	config: OverlayConfig,
	query: &str,
	category: Category,
	timeout: Duration,
) -> Result<Vec<SearchHit>> {
	let mut registry = EventRegistry::new();
	let mut overlay = SearchOverlay::mount(source, config, &mut registry);
	overlay.set_category(category);
	overlay.set_query(query);

	let deadline = Instant::now() + config.debounce + timeout;
	while overlay.is_settling() {
		if Instant::now() >= deadline {
			overlay.unmount(&mut registry);
			bail!("lookup for {query:?} did not settle within {timeout:?}");
		}
		overlay.poll();
		thread::sleep(POLL_INTERVAL);
	}

	let hits = overlay.results().to_vec();
	debug!("headless lookup for {query:?} returned {} hits", hits.len());
	overlay.unmount(&mut registry);
	Ok(hits)
}
