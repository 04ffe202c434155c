use std::sync::Arc;

use chrono::{Local, NaiveDate};
use hima_tui::{QueryInput, Theme};
use throbber_widgets_tui::ThrobberState;

use super::config::AppConfig;
use super::log_panel::LogPanel;
use crate::content::Catalog;
use crate::events::EventRegistry;
use crate::overlay::{Clock, SearchOverlay, SystemClock};
use crate::router::{Route, Router};

const PLACEHOLDER: &str = "Cari artikel, kegiatan, anggota...";

pub struct App {
	pub(crate) catalog: Catalog,
	pub(crate) router: Router,
	pub(crate) input: QueryInput,
	pub(crate) overlay: SearchOverlay,
	pub(crate) events: EventRegistry,
	pub theme: Theme,
	pub(crate) title: String,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) list_selection: usize,
	pub(crate) logs: LogPanel,
	pub(crate) today: NaiveDate,
}

impl App {
	pub fn new(config: AppConfig) -> Self {
		Self::with_clock(config, Arc::new(SystemClock))
	}

	/// Build the console with the overlay reading `clock`.
	pub fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
		let AppConfig {
			title,
			theme,
			start_route,
			overlay,
			source,
		} = config;

		let mut events = EventRegistry::new();
		let overlay = SearchOverlay::mount_with_clock(source, overlay, clock, &mut events);
		Self {
			catalog: Catalog::sample(),
			router: Router::new(start_route),
			input: QueryInput::default().with_placeholder(PLACEHOLDER),
			overlay,
			events,
			theme,
			title,
			throbber_state: ThrobberState::default(),
			list_selection: 0,
			logs: LogPanel::new(),
			today: Local::now().date_naive(),
		}
	}

	#[must_use]
	pub fn route(&self) -> &Route {
		self.router.current()
	}

	#[must_use]
	pub fn overlay(&self) -> &SearchOverlay {
		&self.overlay
	}

	#[must_use]
	pub fn input(&self) -> &QueryInput {
		&self.input
	}

	/// Pin the date relative labels are computed against.
	pub fn set_today(&mut self, today: NaiveDate) {
		self.today = today;
	}

	/// Advance timers and collect finished lookups.
	pub fn tick(&mut self) {
		self.overlay.poll();
		self.throbber_state.calc_next();
		crate::logging::pump();
	}
}

impl Drop for App {
	fn drop(&mut self) {
		self.overlay.unmount(&mut self.events);
	}
}
