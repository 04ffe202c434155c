use hima_admin::logging::parse_level;
use log::LevelFilter;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::super::resolved::{ConfigError, ConfigSources};
use super::super::util::non_blank;

/// `[log]` as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
}

impl LogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.log_level.clone() {
			self.level = Some(value);
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<LevelFilter, ConfigError> {
		let Some(name) = non_blank(self.level) else {
			return Ok(LevelFilter::Info);
		};
		parse_level(&name).ok_or_else(|| {
			ConfigError::invalid(
				"log.level",
				name,
				sources.origin_of_log_level(),
				"expected off, error, warn, info, debug or trace",
			)
		})
	}
}
