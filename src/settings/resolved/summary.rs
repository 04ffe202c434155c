use hima_admin::app_dirs;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	match app_dirs::get_config_dir() {
		Ok(dir) => println!("  Config directory: {}", dir.display()),
		Err(err) => println!("  Config directory: unavailable ({err})"),
	}
	println!("  Debounce: {} ms", config.debounce.as_millis());
	println!("  Search source: {}", config.source);
	println!("  Simulated latency: {} ms", config.latency.as_millis());
	println!("  UI theme: {}", config.theme_name);
	println!("  Start page: {}", config.start_route);
	println!("  Title: {}", config.title);
	println!("  Log level: {}", config.log_level.as_str().to_ascii_lowercase());
}
