use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, when it was set at all.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) debounce_ms: Option<SettingSource>,
	pub(crate) latency_ms: Option<SettingSource>,
	pub(crate) source: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) start_route: Option<SettingSource>,
	pub(crate) log_level: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn origin_of_debounce(&self) -> SettingSource {
		origin(&self.debounce_ms, "search.debounce_ms")
	}

	pub(crate) fn origin_of_latency(&self) -> SettingSource {
		origin(&self.latency_ms, "search.latency_ms")
	}

	pub(crate) fn origin_of_source(&self) -> SettingSource {
		origin(&self.source, "search.source")
	}

	pub(crate) fn origin_of_theme(&self) -> SettingSource {
		origin(&self.theme, "ui.theme")
	}

	pub(crate) fn origin_of_start_route(&self) -> SettingSource {
		origin(&self.start_route, "ui.start_route")
	}

	pub(crate) fn origin_of_log_level(&self) -> SettingSource {
		origin(&self.log_level, "log.level")
	}
}

fn origin(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}
