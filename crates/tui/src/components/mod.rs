//! Widgets shared by the console's pages and the search overlay.

/// Content cards and dashboard statistics.
pub mod cards;
/// Search bar input.
pub mod input;
/// Overlay panel with loading, result and empty states.
pub mod results;
/// Category filter tabs.
pub mod tabs;

pub use cards::{CARD_HEIGHT, Card, StatCard, render_card, render_card_list, render_stat_row};
pub use input::{InputContext, QueryInput, render_input};
pub use results::{OverlayBody, OverlayContext, ResultRow, overlay_area, render_overlay};
pub use tabs::{render_tabs, tab_at, tabs_width};
