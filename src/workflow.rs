use std::time::Duration;

use anyhow::{Context, Result};
use hima_admin::ui::{self, AppConfig};
use hima_admin::{Category, logging, search_once};
use log::LevelFilter;

use crate::cli::{OutputFormat, print_json, print_plain};
use crate::settings::ResolvedConfig;

/// Extra time a headless search may take beyond the source's latency.
const QUERY_GRACE: Duration = Duration::from_secs(5);

/// Runs the interactive console.
pub(crate) struct ConsoleWorkflow {
	config: AppConfig,
	log_level: LevelFilter,
}

impl ConsoleWorkflow {
	pub(crate) fn from_config(resolved: &ResolvedConfig) -> Self {
		Self {
			config: resolved.app_config(),
			log_level: resolved.log_level,
		}
	}

	pub(crate) fn run(self) -> Result<()> {
		logging::initialize(self.log_level);
		ui::run(self.config).context("console exited with an error")
	}
}

/// Runs one search without a terminal and prints the hits.
pub(crate) struct QueryWorkflow {
	config: AppConfig,
	timeout: Duration,
	query: String,
	category: Category,
}

impl QueryWorkflow {
	pub(crate) fn new(resolved: &ResolvedConfig, query: String, category: Category) -> Self {
		Self {
			config: resolved.app_config(),
			timeout: resolved.latency + QUERY_GRACE,
			query,
			category,
		}
	}

	pub(crate) fn run(self, format: OutputFormat) -> Result<()> {
		let Self {
			config,
			timeout,
			query,
			category,
		} = self;
		let hits = search_once(config.source, config.overlay, &query, category, timeout)?;

		match format {
			OutputFormat::Plain => print_plain(&query, &hits),
			OutputFormat::Json => print_json(&query, &hits)?,
		}

		Ok(())
	}
}
