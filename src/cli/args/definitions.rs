use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{CategoryArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `hima` binary.
#[derive(Parser, Debug)]
#[command(
	name = "hima",
	version,
	long_version = long_version(),
	about = "Terminal admin console for the student-organization content system",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "HIMA_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period before a search is issued (default: 300)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "latency-ms",
		value_name = "MS",
		help = "Simulated latency of the mock search source (default: 300)"
	)]
	pub(crate) latency_ms: Option<u64>,
	#[arg(
		long,
		value_name = "SOURCE",
		help = "Search source: mock or catalog (default: mock)"
	)]
	pub(crate) source: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: default)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the search bar title (default: Admin Himpunan)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'r',
		long = "route",
		value_name = "PATH",
		help = "Page to open at startup (default: /admin)"
	)]
	pub(crate) route: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Minimum level captured in the log panel (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Run one search without the console and print the hits (default: interactive)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		long,
		value_enum,
		default_value_t = CategoryArg::All,
		requires = "query",
		help = "Category filter for --query"
	)]
	pub(crate) category: CategoryArg,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print --query results"
	)]
	pub(crate) output: OutputFormat,
}
