use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for the console's UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for headers and active tabs.
	pub header: Style,
	/// Style for highlighted rows.
	pub row_highlight: Style,
	/// Style for the search prompt.
	pub prompt: Style,
	/// Style for empty states and hints.
	pub empty: Style,
	/// Style for emphasised text such as matched queries.
	pub highlight: Style,
	/// Style for panel and card borders.
	pub border: Style,
}

impl Theme {
	/// Returns the style for inactive tabs.
	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.bg(self.row_highlight.bg.unwrap_or(Color::Reset))
	}

	/// Returns the style for the active tab.
	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		Style::new()
			.bg(self.header.bg.unwrap_or(Color::Reset))
			.add_modifier(Modifier::BOLD)
	}

	/// Returns the style used for borders of the focused panel.
	#[must_use]
	pub fn focused_border_style(&self) -> Style {
		self.border.patch(self.prompt)
	}
}

/// A named theme bundled with the console.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	/// Canonical name.
	pub name: &'static str,
	/// The theme itself.
	pub theme: Theme,
	/// Alternate names accepted by lookups.
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	/// Creates a definition without aliases.
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	/// Attaches aliases to the definition.
	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	/// Returns true when `name` refers to this definition.
	#[must_use]
	pub fn matches(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
