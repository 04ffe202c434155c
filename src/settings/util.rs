use std::time::Duration;

/// Trim a string setting, treating blank values as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

pub(super) fn millis(value: u64) -> Duration {
	Duration::from_millis(value)
}
