//! Interactive terminal console.
//!
//! [`App`] owns the router, the search input, the mounted overlay and the
//! page state. The remaining submodules implement input handling, page
//! rendering and the event loop.

mod actions;
mod config;
mod log_panel;
mod pages;
mod render;
mod runtime;
mod state;


pub use config::{AppConfig, DEFAULT_TITLE};
pub use runtime::run;
pub use state::App;
