use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod logs;
mod search;
mod ui;

use logs::LogSection;
use search::SearchSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	search: SearchSection,
	ui: UiSection,
	log: LogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.log.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			debounce_ms: detect_source(
				cli.debounce_ms.is_some(),
				self.search.debounce_ms.is_some(),
				"HIMA__SEARCH__DEBOUNCE_MS",
				"--debounce-ms",
				"search.debounce_ms",
			),
			latency_ms: detect_source(
				cli.latency_ms.is_some(),
				self.search.latency_ms.is_some(),
				"HIMA__SEARCH__LATENCY_MS",
				"--latency-ms",
				"search.latency_ms",
			),
			source: detect_source(
				cli.source.is_some(),
				self.search.source.is_some(),
				"HIMA__SEARCH__SOURCE",
				"--source",
				"search.source",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"HIMA__UI__THEME",
				"--theme",
				"ui.theme",
			),
			start_route: detect_source(
				cli.route.is_some(),
				self.ui.start_route.is_some(),
				"HIMA__UI__START_ROUTE",
				"--route",
				"ui.start_route",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.log.level.is_some(),
				"HIMA__LOG__LEVEL",
				"--log-level",
				"log.level",
			),
		};

		let search = self.search.finalize(&sources).map_err(Error::new)?;
		let ui = self.ui.finalize(&sources).map_err(Error::new)?;
		let log_level = self.log.finalize(&sources).map_err(Error::new)?;

		let config = ResolvedConfig {
			debounce: search.debounce,
			latency: search.latency,
			source: search.source,
			theme_name: ui.theme_name,
			theme: ui.theme,
			start_route: ui.start_route,
			title: ui.title,
			log_level,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
