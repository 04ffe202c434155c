//! The search overlay: a debounced, category-filtered lookup driven by
//! keyboard shortcuts, pointer presses and text input.

mod category;
mod collaborators;
mod controller;
mod debounce;
mod keys;
mod runtime;
mod worker;

#[cfg(test)]
mod tests;

pub use category::{Category, ContentKind, SearchHit};
pub use collaborators::{FocusTarget, LookupError, Navigator, NoFocus, SearchSource};
pub use controller::{OverlayConfig, OverlayLayout, OverlayState, OverlayView, SearchOverlay};
pub use debounce::{Clock, DEFAULT_DEBOUNCE, Debouncer, ManualClock, SystemClock};
pub use keys::{EventOutcome, is_open_shortcut};
