//! Terminal widgets and themes for the `hima` admin console.
//!
//! The crate is deliberately free of application state: every widget takes
//! plain data plus a [`Theme`] and draws into a ratatui [`Frame`]. State
//! machines live in the `hima-admin` crate.
//!
//! [`Frame`]: ratatui::Frame

pub mod components;
pub mod style;

pub use components::{Card, OverlayBody, QueryInput, ResultRow, StatCard};
pub use style::{Theme, builtin_themes, default_theme};
