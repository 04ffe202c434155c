use hima_tui::Theme;
use log::LevelFilter;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Clear};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetEvent, TuiWidgetState};

/// Toggleable view over the captured log records.
pub(crate) struct LogPanel {
	state: TuiWidgetState,
	visible: bool,
}

impl LogPanel {
	pub(crate) fn new() -> Self {
		let state = TuiWidgetState::new().set_default_display_level(LevelFilter::Debug);
		Self {
			state,
			visible: false,
		}
	}

	pub(crate) fn is_visible(&self) -> bool {
		self.visible
	}

	pub(crate) fn toggle(&mut self) {
		self.visible = !self.visible;
	}

	/// Scroll and level keys. Returns `true` when the panel used the key.
	pub(crate) fn handle_key(&self, key: KeyEvent) -> bool {
		if !self.visible || key.kind != KeyEventKind::Press {
			return false;
		}

		let event = match key.code {
			KeyCode::PageUp => TuiWidgetEvent::PrevPageKey,
			KeyCode::PageDown => TuiWidgetEvent::NextPageKey,
			KeyCode::Char(' ') => TuiWidgetEvent::SpaceKey,
			KeyCode::Char('+') => TuiWidgetEvent::PlusKey,
			KeyCode::Char('-') => TuiWidgetEvent::MinusKey,
			_ => return false,
		};
		self.state.transition(event);
		true
	}

	pub(crate) fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		frame.render_widget(Clear, area);
		if area.width == 0 || area.height == 0 {
			return;
		}

		let block = Block::default()
			.borders(Borders::ALL)
			.border_type(BorderType::Rounded)
			.border_style(theme.border)
			.title(Span::styled(" Log ", theme.header));
		let widget = TuiLoggerWidget::default()
			.block(block)
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.output_target(false)
			.output_file(false)
			.output_line(false)
			.state(&self.state);
		frame.render_widget(widget, area);
	}
}
