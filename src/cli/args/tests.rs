use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CategoryArg, CliArgs, OutputFormat};

#[test]
fn command_carries_about_and_styles() {
	let command = CliArgs::command();
	assert!(command.get_about().is_some());
	command.debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["hima"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert_eq!(parsed.category, CategoryArg::All);
	assert!(parsed.query.is_none());
}

#[test]
fn headless_flags_parse() {
	let parsed = CliArgs::try_parse_from([
		"hima",
		"-q",
		"rapat",
		"--category",
		"activity",
		"-o",
		"json",
		"--debounce-ms",
		"50",
	])
	.expect("parses");
	assert_eq!(parsed.query.as_deref(), Some("rapat"));
	assert_eq!(parsed.category, CategoryArg::Activity);
	assert_eq!(parsed.output, OutputFormat::Json);
	assert_eq!(parsed.debounce_ms, Some(50));
}

#[test]
fn category_requires_query() {
	assert!(CliArgs::try_parse_from(["hima", "--category", "member"]).is_err());
}

#[test]
fn version_banner_lists_config_files_and_search_defaults() {
	let details = super::styles::version_details();
	assert!(details.starts_with(&format!("hima {}", env!("CARGO_PKG_VERSION"))));
	assert!(details.contains("config files:"));
	assert!(details.contains("hima.toml"));
	assert!(details.contains("debounce 300 ms, mock latency 300 ms"));
	assert!(details.contains("themes: default"));
}
