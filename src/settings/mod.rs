//! Configuration loading and resolution.
//!
//! Defaults, config files, environment variables and CLI flags are merged
//! in that order. [`load`] is the entry point and returns a
//! [`ResolvedConfig`] ready for the console.

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
pub(crate) use sources::default_config_files as config_search_paths;
