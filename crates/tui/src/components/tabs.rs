use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Tabs;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

/// Render a row of filter tabs with exactly one active entry.
pub fn render_tabs(frame: &mut Frame, area: Rect, labels: &[&str], selected: usize, theme: &Theme) {
	if area.width == 0 || area.height == 0 || labels.is_empty() {
		return;
	}
	let selected = selected.min(labels.len() - 1);
	let titles = build_tab_titles(labels, selected, theme);

	let tabs = Tabs::new(titles)
		.select(selected)
		.divider("")
		.padding("", " ")
		.highlight_style(theme.tab_highlight_style());

	frame.render_widget(tabs, area);
}

/// Total columns needed to draw `labels` without truncation.
#[must_use]
pub fn tabs_width(labels: &[&str]) -> u16 {
	labels
		.iter()
		.map(|label| label.width() as u16 + 3)
		.sum()
}

/// Return the index of the tab whose column span contains `column`, relative
/// to the left edge of the tab row.
#[must_use]
pub fn tab_at(labels: &[&str], column: u16) -> Option<usize> {
	let mut start = 0u16;
	for (index, label) in labels.iter().enumerate() {
		let end = start + label.width() as u16 + 3;
		if column >= start && column < end {
			return Some(index);
		}
		start = end;
	}
	None
}

fn build_tab_titles(labels: &[&str], selected: usize, theme: &Theme) -> Vec<Line<'static>> {
	labels
		.iter()
		.enumerate()
		.map(|(index, label)| {
			let style = if index == selected {
				theme.header
			} else {
				theme.tab_inactive_style()
			};
			Line::from(Span::styled(format!(" {label} "), style))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tab_hit_testing_follows_label_widths() {
		let labels = ["Semua", "Artikel"];
		assert_eq!(tab_at(&labels, 0), Some(0));
		assert_eq!(tab_at(&labels, 7), Some(0));
		assert_eq!(tab_at(&labels, 8), Some(1));
		assert_eq!(tab_at(&labels, 17), Some(1));
		assert_eq!(tab_at(&labels, 18), None);
		assert_eq!(tabs_width(&labels), 18);
	}
}
