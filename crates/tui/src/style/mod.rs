//! Visual styling utilities.
//!
//! Themes represent the color schemes applied to the admin console. Every
//! widget in [`crate::components`] receives a [`Theme`] reference and never
//! hard-codes colors of its own.

/// Theme definitions and the built-in theme registry.
pub mod theme;

pub use theme::{Theme, ThemeDefinition, builtin_themes, by_name, default_theme, names};
