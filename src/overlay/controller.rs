//! State machine behind the search overlay.
//!
//! [`SearchOverlay`] owns the query, the active [`Category`], the visibility
//! and loading flags and the current hits. Mutations restart a debounce
//! timer; when it elapses a lookup is sent to the background worker, and the
//! response is committed only if it still matches the latest issued id and
//! the current `(query, category)` snapshot.

use std::sync::Arc;
use std::sync::mpsc::TryRecvError;
use std::time::Duration;

use log::{debug, info, warn};
use ratatui::layout::{Position, Rect};

use super::category::{Category, SearchHit};
use super::collaborators::{FocusTarget, Navigator, SearchSource};
use super::debounce::{Clock, DEFAULT_DEBOUNCE, Debouncer, SystemClock};
use super::runtime::LookupRuntime;
use super::worker::LookupResult;
use crate::events::{EventRegistry, Interest, SubscriptionId};

/// Tunables for a mounted overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayConfig {
	/// Quiet period between the last mutation and the lookup.
	pub debounce: Duration,
}

impl Default for OverlayConfig {
	fn default() -> Self {
		Self {
			debounce: DEFAULT_DEBOUNCE,
		}
	}
}

/// Visibility, loading flag and committed hits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayState {
	pub open: bool,
	pub loading: bool,
	pub results: Vec<SearchHit>,
}

/// What the overlay should currently display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayView<'a> {
	Hidden,
	Idle,
	Loading,
	Results(&'a [SearchHit]),
	NoMatch(&'a str),
}

/// Screen regions owned by the overlay, recorded at render time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayLayout {
	pub input: Rect,
	pub panel: Option<Rect>,
	pub tabs: Option<Rect>,
}

impl OverlayLayout {
	/// Whether `position` falls inside the overlay's root container.
	#[must_use]
	pub fn contains(&self, position: Position) -> bool {
		self.input.contains(position)
			|| self
				.panel
				.is_some_and(|panel| panel.contains(position))
	}
}

#[derive(Debug, Clone, Copy)]
struct Listeners {
	key: SubscriptionId,
	pointer: SubscriptionId,
}

pub struct SearchOverlay {
	query: String,
	category: Category,
	state: OverlayState,
	selected: Option<usize>,
	debouncer: Debouncer,
	clock: Arc<dyn Clock>,
	lookups: Option<LookupRuntime>,
	listeners: Option<Listeners>,
	layout: OverlayLayout,
}

impl SearchOverlay {
	/// Mount an overlay reading the wall clock.
	pub fn mount(
		source: Arc<dyn SearchSource>,
		config: OverlayConfig,
		registry: &mut EventRegistry,
	) -> Self {
		Self::mount_with_clock(source, config, Arc::new(SystemClock), registry)
	}

	/// Mount an overlay: spawn its lookup worker and subscribe its keyboard
	/// and pointer listeners.
	pub fn mount_with_clock(
		source: Arc<dyn SearchSource>,
		config: OverlayConfig,
		clock: Arc<dyn Clock>,
		registry: &mut EventRegistry,
	) -> Self {
		let listeners = Listeners {
			key: registry.subscribe(Interest::Key),
			pointer: registry.subscribe(Interest::PointerDown),
		};
		Self {
			query: String::new(),
			category: Category::default(),
			state: OverlayState::default(),
			selected: None,
			debouncer: Debouncer::new(config.debounce),
			clock,
			lookups: Some(LookupRuntime::spawn(source)),
			listeners: Some(listeners),
			layout: OverlayLayout::default(),
		}
	}

	/// Detach listeners, cancel the pending timer and stop the worker. Any
	/// lookup still in flight is ignored when it resolves.
	pub fn unmount(&mut self, registry: &mut EventRegistry) {
		self.debouncer.cancel();
		if let Some(listeners) = self.listeners.take() {
			registry.unsubscribe(listeners.key);
			registry.unsubscribe(listeners.pointer);
		}
		if let Some(lookups) = self.lookups.take() {
			lookups.shutdown();
		}
		self.state.loading = false;
	}

	#[must_use]
	pub fn is_mounted(&self) -> bool {
		self.lookups.is_some()
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn category(&self) -> Category {
		self.category
	}

	#[must_use]
	pub fn state(&self) -> &OverlayState {
		&self.state
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.state.open
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.state.loading
	}

	#[must_use]
	pub fn results(&self) -> &[SearchHit] {
		&self.state.results
	}

	#[must_use]
	pub fn selected_index(&self) -> Option<usize> {
		self.selected
	}

	#[must_use]
	pub fn selected_hit(&self) -> Option<&SearchHit> {
		self.selected.and_then(|index| self.state.results.get(index))
	}

	/// Number of lookups sent to the worker since mount.
	#[must_use]
	pub fn lookups_issued(&self) -> u64 {
		self.lookups.as_ref().map_or(0, LookupRuntime::issued)
	}

	/// Whether a lookup is scheduled or still running.
	#[must_use]
	pub fn is_settling(&self) -> bool {
		self.debouncer.is_pending()
			|| self
				.lookups
				.as_ref()
				.is_some_and(LookupRuntime::is_in_flight)
	}

	#[must_use]
	pub fn view(&self) -> OverlayView<'_> {
		if !self.state.open {
			OverlayView::Hidden
		} else if self.query.trim().is_empty() {
			OverlayView::Idle
		} else if self.state.loading {
			OverlayView::Loading
		} else if !self.state.results.is_empty() {
			OverlayView::Results(&self.state.results)
		} else {
			OverlayView::NoMatch(&self.query)
		}
	}

	pub fn set_layout(&mut self, layout: OverlayLayout) {
		self.layout = layout;
	}

	#[must_use]
	pub fn layout(&self) -> OverlayLayout {
		self.layout
	}

	/// Replace the query text. The lookup waits for the debounce window.
	pub fn set_query(&mut self, text: impl Into<String>) {
		let text = text.into();
		if text == self.query {
			return;
		}
		self.query = text;
		self.restart_lookup();
	}

	/// Switch the active category. The query is kept.
	pub fn set_category(&mut self, category: Category) {
		if category == self.category {
			return;
		}
		self.category = category;
		self.state
			.results
			.retain(|hit| category.admits(hit.kind));
		self.clamp_selection();
		self.restart_lookup();
	}

	pub fn open(&mut self) {
		self.state.open = true;
	}

	/// Hide the overlay. Query and results stay as they are.
	pub fn close(&mut self) {
		self.state.open = false;
	}

	/// Close, reset the query, then hand the destination to `router`.
	pub fn select_result(&mut self, hit: &SearchHit, router: &mut dyn Navigator) {
		let destination = hit.destination.clone();
		self.close();
		self.reset_search();
		info!("opening {} {} at {destination}", hit.kind, hit.id);
		router.navigate_to(&destination);
	}

	/// Select the highlighted hit, if there is one.
	pub fn select_highlighted(&mut self, router: &mut dyn Navigator) -> bool {
		let Some(hit) = self.selected_hit().cloned() else {
			return false;
		};
		self.select_result(&hit, router);
		true
	}

	/// Empty the query and results and give focus back to the input.
	pub fn clear(&mut self, focus: &mut dyn FocusTarget) {
		self.reset_search();
		focus.focus();
	}

	/// Move the highlighted row by `delta`, clamped to the result list.
	pub fn move_selection(&mut self, delta: isize) {
		let len = self.state.results.len();
		if len == 0 {
			self.selected = None;
			return;
		}
		let current = self.selected.unwrap_or(0) as isize;
		let next = (current + delta).clamp(0, len as isize - 1);
		self.selected = Some(next as usize);
	}

	/// Issue the lookup if the debounce window has elapsed.
	pub fn tick(&mut self) {
		let now = self.clock.now();
		if !self.debouncer.fire(now) {
			return;
		}
		let Some(lookups) = self.lookups.as_mut() else {
			return;
		};
		let id = lookups.issue(self.query.clone(), self.category);
		debug!(
			"issued lookup {id} for {:?} in {}",
			self.query, self.category
		);
	}

	/// Drain resolved lookups from the worker.
	pub fn pump_results(&mut self) {
		loop {
			let Some(lookups) = self.lookups.as_ref() else {
				return;
			};
			match lookups.try_recv() {
				Ok(result) => self.apply_lookup(result),
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
	}

	/// [`tick`](Self::tick) then [`pump_results`](Self::pump_results).
	pub fn poll(&mut self) {
		self.tick();
		self.pump_results();
	}

	pub(crate) fn apply_lookup(&mut self, result: LookupResult) {
		let Some(lookups) = self.lookups.as_mut() else {
			debug!("ignoring lookup {} resolved after unmount", result.id);
			return;
		};
		if !lookups.matches_latest(result.id) {
			debug!("dropping stale lookup {} for {:?}", result.id, result.query);
			return;
		}
		lookups.record_completion();
		if result.query != self.query || result.category != self.category {
			debug!(
				"dropping lookup {} issued for {:?} in {}",
				result.id, result.query, result.category
			);
			return;
		}

		match result.outcome {
			Ok(hits) => {
				let category = self.category;
				self.state.results = hits
					.into_iter()
					.filter(|hit| category.admits(hit.kind))
					.collect();
			}
			Err(err) => {
				warn!("lookup for {:?} failed: {err}", result.query);
				self.state.results.clear();
			}
		}
		self.state.loading = self.debouncer.is_pending();
		self.selected = if self.state.results.is_empty() {
			None
		} else {
			Some(0)
		};
	}

	pub(super) fn listens(&self, registry: &EventRegistry, interest: Interest) -> bool {
		let Some(listeners) = self.listeners else {
			return false;
		};
		let id = match interest {
			Interest::Key => listeners.key,
			Interest::PointerDown => listeners.pointer,
		};
		registry.is_active(id)
	}

	fn restart_lookup(&mut self) {
		if self.query.trim().is_empty() {
			self.reset_results();
			return;
		}
		if !self.is_mounted() {
			return;
		}
		self.debouncer.schedule(self.clock.now());
		self.state.loading = true;
	}

	fn reset_search(&mut self) {
		self.query.clear();
		self.reset_results();
	}

	fn reset_results(&mut self) {
		self.debouncer.cancel();
		if let Some(lookups) = self.lookups.as_mut() {
			lookups.invalidate();
		}
		self.state.results.clear();
		self.state.loading = false;
		self.selected = None;
	}

	fn clamp_selection(&mut self) {
		let len = self.state.results.len();
		self.selected = match self.selected {
			_ if len == 0 => None,
			Some(index) => Some(index.min(len - 1)),
			None => Some(0),
		};
	}
}

impl Drop for SearchOverlay {
	fn drop(&mut self) {
		if let Some(lookups) = self.lookups.take() {
			lookups.shutdown();
		}
	}
}
