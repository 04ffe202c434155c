//! Route the `log` facade into `tui-logger` so records are captured in
//! memory and shown in the log panel instead of being written over the
//! terminal frame.

use std::sync::OnceLock;

use log::LevelFilter;

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Install the logger on first use and apply `level` as the default
/// threshold. Later calls only adjust the threshold.
///
/// Returns `false` when another logger already owns the `log` facade.
pub fn initialize(level: LevelFilter) -> bool {
	let installed =
		*INSTALLED.get_or_init(|| tui_logger::init_logger(LevelFilter::Trace).is_ok());
	if installed {
		tui_logger::set_default_level(level);
	}
	installed
}

/// Move buffered records into the widget's history.
pub fn pump() {
	if INSTALLED.get().copied().unwrap_or(false) {
		tui_logger::move_events();
	}
}

/// Parse a level name as accepted in configuration files. `warning` is
/// accepted as an alias for `warn`.
#[must_use]
pub fn parse_level(value: &str) -> Option<LevelFilter> {
	let value = value.trim();
	if value.eq_ignore_ascii_case("warning") {
		return Some(LevelFilter::Warn);
	}
	value.parse::<LevelFilter>().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn initialize_is_idempotent() {
		let first = initialize(LevelFilter::Info);
		let second = initialize(LevelFilter::Debug);
		assert_eq!(first, second);
		pump();
	}

	#[test]
	fn parses_level_names() {
		assert_eq!(parse_level(" WARNING "), Some(LevelFilter::Warn));
		assert_eq!(parse_level("trace"), Some(LevelFilter::Trace));
		assert_eq!(parse_level("Debug"), Some(LevelFilter::Debug));
		assert_eq!(parse_level("off"), Some(LevelFilter::Off));
		assert_eq!(parse_level("loud"), None);
	}
}
