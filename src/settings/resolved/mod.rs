use std::time::Duration;

use hima_admin::content::SourceKind;
use hima_admin::overlay::OverlayConfig;
use hima_admin::router::Route;
use hima_admin::ui::AppConfig;
use hima_tui::Theme;
use log::LevelFilter;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub debounce: Duration,
	pub latency: Duration,
	pub source: SourceKind,
	pub theme_name: String,
	pub theme: Theme,
	pub start_route: Route,
	pub title: String,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	#[must_use]
	pub fn overlay_config(&self) -> OverlayConfig {
		OverlayConfig {
			debounce: self.debounce,
		}
	}

	/// Console configuration with a freshly built search source.
	#[must_use]
	pub fn app_config(&self) -> AppConfig {
		AppConfig::new(self.source.build(self.latency))
			.with_title(self.title.clone())
			.with_theme(self.theme)
			.with_start_route(self.start_route.clone())
			.with_overlay(self.overlay_config())
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn validation_bounds_debounce() {
		let mut config = ResolvedConfig {
			debounce: Duration::ZERO,
			latency: Duration::ZERO,
			source: SourceKind::Mock,
			theme_name: "default".into(),
			theme: hima_tui::default_theme(),
			start_route: Route::Dashboard,
			title: "Admin".into(),
			log_level: LevelFilter::Info,
		};
		let sources = ConfigSources {
			debounce_ms: Some(SettingSource::Environment("HIMA__SEARCH__DEBOUNCE_MS")),
			..ConfigSources::default()
		};

		let err = config.validate(&sources).unwrap_err();
		assert_eq!(err.key, "search.debounce_ms");
		assert_eq!(
			err.origin,
			SettingSource::Environment("HIMA__SEARCH__DEBOUNCE_MS")
		);

		config.debounce = Duration::from_millis(5_001);
		assert!(config.validate(&sources).is_err());

		config.debounce = Duration::from_millis(5_000);
		assert!(config.validate(&sources).is_ok());
	}
}
