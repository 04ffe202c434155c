use hima_tui::components::{
	InputContext, OverlayBody, OverlayContext, ResultRow, overlay_area, render_input,
	render_overlay,
};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::App;
use super::pages;
use crate::overlay::{Category, OverlayLayout, OverlayView};

const SHORTCUT_HINT: &str = "Ctrl+K";
const FOOTER: &str =
	"/ cari · ↑↓ pilih · Enter buka · Backspace kembali · F12 log · Ctrl+Q keluar";
const IDLE_HINTS: [&str; 4] = [
	"Tab      ganti kategori",
	"↑ ↓      pilih hasil",
	"Enter    buka halaman",
	"Esc      tutup",
];
/// Tallest the overlay panel grows.
const OVERLAY_HEIGHT: u16 = 12;

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);
		let search_row = layout[0];

		render_input(
			frame,
			InputContext {
				input: &self.input,
				prompt: &self.title,
				hint: SHORTCUT_HINT,
				area: search_row,
				theme: &self.theme,
			},
		);
		self.render_heading(frame, layout[1]);
		self.render_body(frame, layout[2]);
		frame.render_widget(
			Paragraph::new(Line::styled(FOOTER, self.theme.empty)),
			layout[3],
		);

		let (panel, tabs) = match self.render_overlay(frame, search_row, area) {
			Some((panel, tabs)) => (Some(panel), Some(tabs)),
			None => (None, None),
		};
		self.overlay.set_layout(OverlayLayout {
			input: search_row,
			panel,
			tabs,
		});
	}

	fn render_heading(&self, frame: &mut Frame, area: Rect) {
		let route = self.router.current();
		let line = Line::from(vec![
			Span::styled(route.title(), self.theme.header),
			Span::styled(format!("  {}", route.path()), self.theme.empty),
		]);
		frame.render_widget(Paragraph::new(line), area);
	}

	fn render_body(&self, frame: &mut Frame, area: Rect) {
		let page_area = if self.logs.is_visible() {
			let columns = Layout::default()
				.direction(Direction::Horizontal)
				.constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
				.split(area);
			self.logs.render(frame, columns[1], &self.theme);
			columns[0]
		} else {
			area
		};

		let page = pages::build(&self.catalog, self.router.current(), self.today);
		pages::render(frame, page_area, &page, self.list_selection, &self.theme);
	}

	/// Draw the overlay under the search row. Returns the panel and tab-row
	/// rectangles when it is visible.
	fn render_overlay(
		&self,
		frame: &mut Frame,
		anchor: Rect,
		bounds: Rect,
	) -> Option<(Rect, Rect)> {
		let view = self.overlay.view();
		if view == OverlayView::Hidden {
			return None;
		}

		let rows: Vec<ResultRow>;
		let message: String;
		let body = match view {
			OverlayView::Hidden => return None,
			OverlayView::Idle => OverlayBody::Idle {
				prompt: "Ketik untuk mencari konten",
				hints: &IDLE_HINTS,
			},
			OverlayView::Loading => OverlayBody::Loading { label: " Mencari..." },
			OverlayView::Results(hits) => {
				rows = hits
					.iter()
					.map(|hit| ResultRow {
						badge: hit.kind.label().to_string(),
						title: hit.title.clone(),
						subtitle: hit.subtitle.clone(),
					})
					.collect();
				OverlayBody::Results {
					rows: &rows,
					selected: self.overlay.selected_index(),
				}
			}
			OverlayView::NoMatch(query) => {
				message = format!("Tidak ada hasil untuk \"{query}\"");
				OverlayBody::NoMatch { message: &message }
			}
		};

		let labels = Category::tab_labels();
		let panel = overlay_area(anchor, bounds, OVERLAY_HEIGHT);
		let tabs = render_overlay(
			frame,
			panel,
			OverlayContext {
				title: "Pencarian",
				tabs: &labels,
				active_tab: self.overlay.category().index(),
				body,
				throbber_state: &self.throbber_state,
				theme: &self.theme,
			},
		);
		Some((panel, tabs))
	}
}
