use hima_admin::router::Route;
use hima_admin::ui::DEFAULT_TITLE;
use hima_tui::Theme;
use hima_tui::style::by_name;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::super::resolved::{ConfigError, ConfigSources};
use super::super::util::non_blank;

const DEFAULT_THEME: &str = "default";

/// `[ui]` as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) start_route: Option<String>,
	pub(super) title: Option<String>,
}

pub(super) struct UiSettings {
	pub(super) theme_name: String,
	pub(super) theme: Theme,
	pub(super) start_route: Route,
	pub(super) title: String,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.theme.clone() {
			self.theme = Some(value);
		}
		if let Some(value) = cli.route.clone() {
			self.start_route = Some(value);
		}
		if let Some(value) = cli.title.clone() {
			self.title = Some(value);
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<UiSettings, ConfigError> {
		let theme_name = non_blank(self.theme).unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = by_name(&theme_name).ok_or_else(|| {
			ConfigError::invalid(
				"ui.theme",
				theme_name.clone(),
				sources.origin_of_theme(),
				"unknown theme (see --list-themes)",
			)
		})?;

		let start_route = match non_blank(self.start_route) {
			Some(path) => match Route::parse(&path) {
				Route::NotFound(_) => {
					return Err(ConfigError::invalid(
						"ui.start_route",
						path,
						sources.origin_of_start_route(),
						"not an admin page",
					));
				}
				route => route,
			},
			None => Route::Dashboard,
		};

		Ok(UiSettings {
			theme_name: theme_name.to_ascii_lowercase(),
			theme,
			start_route,
			title: non_blank(self.title).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
		})
	}
}
