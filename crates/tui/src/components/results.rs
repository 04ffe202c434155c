use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_truncate::UnicodeTruncateStr;

use super::tabs::render_tabs;
use crate::style::Theme;

/// A single row in the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
	/// Short tag describing the content type.
	pub badge: String,
	/// Primary text.
	pub title: String,
	/// Secondary text drawn dimmed after the title.
	pub subtitle: String,
}

/// The four mutually exclusive bodies the overlay can show.
#[derive(Debug, Clone, Copy)]
pub enum OverlayBody<'a> {
	/// A lookup is running.
	Loading {
		/// Label next to the spinner.
		label: &'a str,
	},
	/// Matching entries, with an optional highlighted row.
	Results {
		/// Rows in display order.
		rows: &'a [ResultRow],
		/// Highlighted row index.
		selected: Option<usize>,
	},
	/// The lookup settled without matches.
	NoMatch {
		/// Message already containing the query.
		message: &'a str,
	},
	/// Nothing typed yet.
	Idle {
		/// Prompt line.
		prompt: &'a str,
		/// Shortcut hints, one per line.
		hints: &'a [&'a str],
	},
}

/// Everything needed to draw the overlay panel.
pub struct OverlayContext<'a> {
	/// Panel title.
	pub title: &'a str,
	/// Category filter labels.
	pub tabs: &'a [&'a str],
	/// Index of the active category.
	pub active_tab: usize,
	/// What to draw under the tabs.
	pub body: OverlayBody<'a>,
	/// Spinner animation state.
	pub throbber_state: &'a ThrobberState,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Compute the overlay rectangle hanging under an anchor row.
///
/// The panel takes the anchor's horizontal span and at most `max_height`
/// rows, clipped to `bounds`.
#[must_use]
pub fn overlay_area(anchor: Rect, bounds: Rect, max_height: u16) -> Rect {
	let top = anchor.bottom().min(bounds.bottom());
	let available = bounds.bottom().saturating_sub(top);
	Rect {
		x: anchor.x,
		y: top,
		width: anchor.width,
		height: max_height.min(available),
	}
}

/// Render the overlay panel into `area`, clearing whatever sits beneath it.
///
/// Returns the rectangle of the tab row so callers can hit-test clicks.
pub fn render_overlay(frame: &mut Frame, area: Rect, context: OverlayContext<'_>) -> Rect {
	let OverlayContext {
		title,
		tabs,
		active_tab,
		body,
		throbber_state,
		theme,
	} = context;

	frame.render_widget(Clear, area);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(theme.focused_border_style())
		.title(Span::styled(format!(" {title} "), theme.prompt));
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.height == 0 || inner.width == 0 {
		return Rect::default();
	}

	let layout = Layout::default()
		.direction(Direction::Vertical)
		.constraints([Constraint::Length(1), Constraint::Min(0)])
		.split(inner);
	render_tabs(frame, layout[0], tabs, active_tab, theme);
	render_body(frame, layout[1], body, throbber_state, theme);
	layout[0]
}

fn render_body(
	frame: &mut Frame,
	area: Rect,
	body: OverlayBody<'_>,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	if area.height == 0 {
		return;
	}

	match body {
		OverlayBody::Loading { label } => {
			let spinner = Throbber::default()
				.style(theme.empty)
				.throbber_style(theme.prompt);
			let line = Line::from(vec![
				spinner.to_symbol_span(throbber_state),
				Span::styled(label.to_string(), theme.empty),
			]);
			frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
		}
		OverlayBody::Results { rows, selected } => {
			let width = area.width as usize;
			let items: Vec<ListItem> = rows
				.iter()
				.map(|row| ListItem::new(result_line(row, width, theme)))
				.collect();
			let list = List::new(items).highlight_style(theme.row_highlight);
			let mut state = ListState::default();
			state.select(selected);
			frame.render_stateful_widget(list, area, &mut state);
		}
		OverlayBody::NoMatch { message } => {
			let paragraph = Paragraph::new(message.to_string())
				.style(theme.empty)
				.alignment(Alignment::Center)
				.wrap(Wrap { trim: true });
			frame.render_widget(paragraph, area);
		}
		OverlayBody::Idle { prompt, hints } => {
			let mut lines = vec![Line::from(Span::styled(prompt.to_string(), theme.empty))];
			lines.extend(
				hints
					.iter()
					.map(|hint| Line::from(Span::styled(hint.to_string(), theme.empty))),
			);
			frame.render_widget(Paragraph::new(lines), area);
		}
	}
}

fn result_line(row: &ResultRow, width: usize, theme: &Theme) -> Line<'static> {
	let badge = format!("[{}] ", row.badge);
	let remaining = width.saturating_sub(badge.len());
	let (title, title_width) = row.title.unicode_truncate(remaining);
	let title = title.to_string();
	let mut spans = vec![
		Span::styled(badge, theme.highlight),
		Span::raw(title),
	];
	let remaining = remaining.saturating_sub(title_width + 3);
	if remaining > 0 && !row.subtitle.is_empty() {
		let (subtitle, _) = row.subtitle.unicode_truncate(remaining);
		spans.push(Span::styled(format!(" · {subtitle}"), theme.empty));
	}
	Line::from(spans)
}

#[cfg(test)]
mod tests {
	use ratatui::{Terminal, backend::TestBackend};

	use super::*;

	fn draw(body: OverlayBody<'_>) -> String {
		let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
		let state = ThrobberState::default();
		let theme = Theme::default();
		terminal
			.draw(|frame| {
				let area = frame.area();
				render_overlay(
					frame,
					area,
					OverlayContext {
						title: "Cari",
						tabs: &["Semua", "Artikel"],
						active_tab: 0,
						body,
						throbber_state: &state,
						theme: &theme,
					},
				);
			})
			.unwrap();
		terminal.backend().to_string()
	}

	#[test]
	fn results_render_badges_and_titles() {
		let rows = vec![ResultRow {
			badge: "Artikel".into(),
			title: "Beasiswa Prestasi".into(),
			subtitle: "Informasi".into(),
		}];
		let view = draw(OverlayBody::Results {
			rows: &rows,
			selected: Some(0),
		});
		assert!(view.contains("[Artikel] Beasiswa Prestasi"));
		assert!(view.contains("Semua"));
	}

	#[test]
	fn loading_and_empty_states_show_messages() {
		assert!(draw(OverlayBody::Loading { label: "Mencari..." }).contains("Mencari..."));
		assert!(
			draw(OverlayBody::NoMatch {
				message: "Tidak ada hasil"
			})
			.contains("Tidak ada hasil")
		);
	}

	#[test]
	fn overlay_area_hangs_below_anchor() {
		let anchor = Rect::new(2, 0, 40, 1);
		let bounds = Rect::new(0, 0, 80, 10);
		assert_eq!(overlay_area(anchor, bounds, 12), Rect::new(2, 1, 40, 9));
	}
}
