//! Terminal admin console for a student-organization content system.
//!
//! The heart of the crate is the [`overlay`] module, a debounced and
//! category-filtered search controller. Around it sit the mock [`content`]
//! catalog, the [`router`], Indonesian [`format`] helpers and the [`ui`]
//! that wires everything into a ratatui application.

pub mod app_dirs;
pub mod content;
pub mod events;
pub mod format;
pub mod headless;
pub mod logging;
pub mod overlay;
pub mod router;
pub mod ui;

pub use headless::search_once;
pub use overlay::{Category, ContentKind, SearchHit, SearchOverlay};
pub use ui::{App, AppConfig, run};
