use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::style::Theme;

/// Content of a list card: title, a one-line meta row and a short body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
	pub title: String,
	pub meta: String,
	pub body: String,
	pub badge: Option<String>,
}

/// A number with a caption, used on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
	pub label: String,
	pub value: String,
}

/// Height in rows of a rendered [`Card`].
pub const CARD_HEIGHT: u16 = 5;

/// Render `card` inside a rounded border. `selected` uses the focused style.
pub fn render_card(frame: &mut Frame, area: Rect, card: &Card, selected: bool, theme: &Theme) {
	let border = if selected {
		theme.focused_border_style()
	} else {
		theme.border
	};
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(border)
		.title(Span::styled(format!(" {} ", card.title), theme.highlight));
	if let Some(badge) = &card.badge {
		let badge = Line::from(Span::styled(format!(" {badge} "), theme.header)).right_aligned();
		block = block.title_top(badge);
	}

	let lines = vec![
		Line::from(Span::styled(card.meta.clone(), theme.empty)),
		Line::from(card.body.clone()),
	];
	let paragraph = Paragraph::new(lines)
		.block(block)
		.wrap(Wrap { trim: true });
	frame.render_widget(paragraph, area);
}

/// Render a column of cards, keeping `selected` visible.
pub fn render_card_list(
	frame: &mut Frame,
	area: Rect,
	cards: &[Card],
	selected: usize,
	theme: &Theme,
) {
	if area.height < CARD_HEIGHT || cards.is_empty() {
		return;
	}
	let visible = (area.height / CARD_HEIGHT) as usize;
	let first = selected.saturating_sub(visible.saturating_sub(1));
	for (slot, (index, card)) in cards.iter().enumerate().skip(first).take(visible).enumerate() {
		let slot_area = Rect {
			y: area.y + slot as u16 * CARD_HEIGHT,
			height: CARD_HEIGHT,
			..area
		};
		render_card(frame, slot_area, card, index == selected, theme);
	}
}

/// Render stat cards side by side.
pub fn render_stat_row(frame: &mut Frame, area: Rect, stats: &[StatCard], theme: &Theme) {
	if stats.is_empty() {
		return;
	}
	let constraints = vec![Constraint::Ratio(1, stats.len() as u32); stats.len()];
	let columns = Layout::default()
		.direction(Direction::Horizontal)
		.constraints(constraints)
		.split(area);
	for (stat, column) in stats.iter().zip(columns.iter()) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_type(BorderType::Rounded)
			.border_style(theme.border);
		let lines = vec![
			Line::from(Span::styled(stat.value.clone(), theme.highlight)),
			Line::from(Span::styled(stat.label.clone(), theme.empty)),
		];
		frame.render_widget(
			Paragraph::new(lines)
				.alignment(Alignment::Center)
				.block(block),
			*column,
		);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::{Terminal, backend::TestBackend};

	use super::*;

	#[test]
	fn card_list_scrolls_to_selection() {
		let cards: Vec<Card> = (1..=4)
			.map(|n| Card {
				title: format!("Kartu {n}"),
				meta: "meta".into(),
				body: "isi".into(),
				badge: None,
			})
			.collect();
		let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
		terminal
			.draw(|frame| {
				let area = frame.area();
				render_card_list(frame, area, &cards, 3, &Theme::default());
			})
			.unwrap();
		let view = terminal.backend().to_string();
		assert!(view.contains("Kartu 3"));
		assert!(view.contains("Kartu 4"));
		assert!(!view.contains("Kartu 1"));
	}
}
