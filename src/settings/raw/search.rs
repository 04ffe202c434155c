use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use hima_admin::content::{SIMULATED_LATENCY, SourceKind};
use hima_admin::overlay::DEFAULT_DEBOUNCE;

use crate::cli::CliArgs;

use super::super::resolved::{ConfigError, ConfigSources};
use super::super::util::{millis, non_blank};

/// `[search]` as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) debounce_ms: Option<u64>,
	pub(super) latency_ms: Option<u64>,
	pub(super) source: Option<String>,
}

pub(super) struct SearchSettings {
	pub(super) debounce: Duration,
	pub(super) latency: Duration,
	pub(super) source: SourceKind,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.debounce_ms {
			self.debounce_ms = Some(value);
		}
		if let Some(value) = cli.latency_ms {
			self.latency_ms = Some(value);
		}
		if let Some(value) = cli.source.clone() {
			self.source = Some(value);
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<SearchSettings, ConfigError> {
		let source = match non_blank(self.source) {
			Some(name) => SourceKind::from_str(&name).map_err(|reason| {
				ConfigError::invalid(
					"search.source",
					name.clone(),
					sources.origin_of_source(),
					reason,
				)
			})?,
			None => SourceKind::default(),
		};

		Ok(SearchSettings {
			debounce: self.debounce_ms.map_or(DEFAULT_DEBOUNCE, millis),
			latency: self.latency_ms.map_or(SIMULATED_LATENCY, millis),
			source,
		})
	}
}
