mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::parse_cli;
use workflow::{ConsoleWorkflow, QueryWorkflow};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in hima_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	match cli.query {
		Some(query) => QueryWorkflow::new(&resolved, query, cli.category.into()).run(cli.output),
		None => ConsoleWorkflow::from_config(&resolved).run(),
	}
}
