use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use hima_admin::app_dirs;
use hima_admin::content::SIMULATED_LATENCY;
use hima_admin::overlay::DEFAULT_DEBOUNCE;

use crate::settings::config_search_paths;

/// Version banner shown by `--version`: where settings are read from and
/// the search timing defaults.
pub(super) fn long_version() -> &'static str {
	Box::leak(version_details().into_boxed_str())
}

pub(super) fn version_details() -> String {
	let mut details = format!("hima {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);

	let data_dir = app_dirs::get_data_dir()
		.map(|path| path.display().to_string())
		.unwrap_or_else(|err| format!("unavailable ({err})"));
	let _ = writeln!(details, "data directory: {data_dir}");

	let _ = writeln!(details, "config files:");
	for path in config_search_paths() {
		let _ = writeln!(details, "  {}", path.display());
	}

	let _ = writeln!(
		details,
		"search: debounce {} ms, mock latency {} ms",
		DEFAULT_DEBOUNCE.as_millis(),
		SIMULATED_LATENCY.as_millis()
	);
	let _ = writeln!(details, "themes: {}", hima_tui::style::names().join(", "));
	details
}

/// Help colours for the admin console.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Blue.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(AnsiColor::Blue.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Magenta.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::BrightBlack.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
		.valid(AnsiColor::Green.on_default())
		.invalid(AnsiColor::Yellow.on_default())
}
