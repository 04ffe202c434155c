use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Longest accepted debounce window.
pub(super) const MAX_DEBOUNCE_MS: u128 = 5_000;
/// Longest accepted simulated latency.
pub(super) const MAX_LATENCY_MS: u128 = 10_000;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let debounce = config.debounce.as_millis();
	if debounce == 0 {
		return Err(ConfigError::invalid(
			"search.debounce_ms",
			debounce.to_string(),
			sources.origin_of_debounce(),
			"must be greater than zero",
		));
	}
	if debounce > MAX_DEBOUNCE_MS {
		return Err(ConfigError::invalid(
			"search.debounce_ms",
			debounce.to_string(),
			sources.origin_of_debounce(),
			format!("must be at most {MAX_DEBOUNCE_MS}"),
		));
	}

	let latency = config.latency.as_millis();
	if latency > MAX_LATENCY_MS {
		return Err(ConfigError::invalid(
			"search.latency_ms",
			latency.to_string(),
			sources.origin_of_latency(),
			format!("must be at most {MAX_LATENCY_MS}"),
		));
	}

	Ok(())
}
