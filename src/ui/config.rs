use std::sync::Arc;

use hima_tui::Theme;

use crate::content::MockDirectory;
use crate::overlay::{OverlayConfig, SearchSource};
use crate::router::Route;

/// Default heading drawn in front of the search input.
pub const DEFAULT_TITLE: &str = "Admin Himpunan";

/// Everything the console needs at startup.
#[derive(Clone)]
pub struct AppConfig {
	pub title: String,
	pub theme: Theme,
	pub start_route: Route,
	pub overlay: OverlayConfig,
	pub source: Arc<dyn SearchSource>,
}

impl AppConfig {
	#[must_use]
	pub fn new(source: Arc<dyn SearchSource>) -> Self {
		Self {
			title: DEFAULT_TITLE.to_string(),
			theme: Theme::default(),
			start_route: Route::Dashboard,
			overlay: OverlayConfig::default(),
			source,
		}
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	#[must_use]
	pub fn with_start_route(mut self, route: Route) -> Self {
		self.start_route = route;
		self
	}

	#[must_use]
	pub fn with_overlay(mut self, overlay: OverlayConfig) -> Self {
		self.overlay = overlay;
		self
	}
}

impl Default for AppConfig {
	fn default() -> Self {
		Self::new(Arc::new(MockDirectory::new()))
	}
}
