use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeDefinition};

pub(super) const DEFAULT: ThemeDefinition = ThemeDefinition::new(
	"default",
	Theme {
		header: Style::new().fg(Color::Black).bg(Color::Cyan),
		row_highlight: Style::new().bg(Color::DarkGray).fg(Color::White),
		prompt: Style::new().fg(Color::Cyan),
		empty: Style::new().fg(Color::DarkGray),
		highlight: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
		border: Style::new().fg(Color::Gray),
	},
)
.with_aliases(&["dark"]);

pub(super) const LIGHT: ThemeDefinition = ThemeDefinition::new(
	"light",
	Theme {
		header: Style::new().fg(Color::White).bg(Color::Blue),
		row_highlight: Style::new().bg(Color::Rgb(219, 234, 254)).fg(Color::Black),
		prompt: Style::new().fg(Color::Blue),
		empty: Style::new().fg(Color::Gray),
		highlight: Style::new()
			.fg(Color::Rgb(180, 83, 9))
			.add_modifier(Modifier::BOLD),
		border: Style::new().fg(Color::Rgb(148, 163, 184)),
	},
);

pub(super) const SLATE: ThemeDefinition = ThemeDefinition::new(
	"slate",
	Theme {
		header: Style::new()
			.fg(Color::Rgb(226, 232, 240))
			.bg(Color::Rgb(15, 23, 42)),
		row_highlight: Style::new()
			.bg(Color::Rgb(30, 41, 59))
			.fg(Color::Rgb(250, 204, 21)),
		prompt: Style::new().fg(Color::LightCyan),
		empty: Style::new().fg(Color::DarkGray),
		highlight: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
		border: Style::new().fg(Color::Rgb(71, 85, 105)),
	},
);

pub(super) const ALL: &[ThemeDefinition] = &[DEFAULT, LIGHT, SLATE];
