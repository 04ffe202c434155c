use ratatui::crossterm::event::{
	Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use ratatui::layout::Position;

use super::category::Category;
use super::collaborators::{FocusTarget, Navigator};
use super::controller::SearchOverlay;
use crate::events::{EventRegistry, Interest};

/// Whether the overlay swallowed an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
	Consumed,
	Ignored,
}

impl EventOutcome {
	#[must_use]
	pub fn is_consumed(self) -> bool {
		self == EventOutcome::Consumed
	}
}

/// `Ctrl+K`, or `Super+K` on terminals that report the platform key.
#[must_use]
pub fn is_open_shortcut(key: &KeyEvent) -> bool {
	matches!(key.code, KeyCode::Char('k' | 'K'))
		&& key
			.modifiers
			.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER)
}

impl SearchOverlay {
	/// Route a terminal event through the overlay's subscriptions.
	pub fn handle_event(
		&mut self,
		registry: &EventRegistry,
		event: &Event,
		focus: &mut dyn FocusTarget,
		router: &mut dyn Navigator,
	) -> EventOutcome {
		match event {
			Event::Key(key) => self.handle_key(registry, *key, focus, router),
			Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
				self.handle_pointer_down(registry, mouse.column, mouse.row, focus)
			}
			_ => EventOutcome::Ignored,
		}
	}

	/// Global shortcuts plus list navigation while the overlay is open and the
	/// input has focus. Editing keys are left to the caller.
	pub fn handle_key(
		&mut self,
		registry: &EventRegistry,
		key: KeyEvent,
		focus: &mut dyn FocusTarget,
		router: &mut dyn Navigator,
	) -> EventOutcome {
		if key.kind != KeyEventKind::Press || !self.listens(registry, Interest::Key) {
			return EventOutcome::Ignored;
		}

		if is_open_shortcut(&key) {
			focus.focus();
			self.open();
			return EventOutcome::Consumed;
		}
		if key.code == KeyCode::Esc {
			self.close();
			focus.blur();
			return EventOutcome::Consumed;
		}
		if !self.is_open() || !focus.has_focus() {
			return EventOutcome::Ignored;
		}

		match key.code {
			KeyCode::Up => self.move_selection(-1),
			KeyCode::Down => self.move_selection(1),
			KeyCode::Enter => {
				if !self.select_highlighted(router) {
					return EventOutcome::Ignored;
				}
			}
			KeyCode::Tab => self.set_category(self.category().next()),
			KeyCode::BackTab => self.set_category(self.category().previous()),
			KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.clear(focus);
			}
			_ => return EventOutcome::Ignored,
		}
		EventOutcome::Consumed
	}

	/// Close on presses outside the root container. Inside it, a press on the
	/// tab row switches category and a press on the input opens the overlay.
	pub fn handle_pointer_down(
		&mut self,
		registry: &EventRegistry,
		column: u16,
		row: u16,
		focus: &mut dyn FocusTarget,
	) -> EventOutcome {
		if !self.listens(registry, Interest::PointerDown) {
			return EventOutcome::Ignored;
		}

		let position = Position::new(column, row);
		let layout = self.layout();
		if !layout.contains(position) {
			self.close();
			return EventOutcome::Ignored;
		}

		if let Some(tabs) = layout.tabs
			&& tabs.contains(position)
		{
			let labels = Category::tab_labels();
			if let Some(index) = hima_tui::components::tab_at(&labels, column - tabs.x) {
				self.set_category(Category::from_index(index));
			}
			return EventOutcome::Consumed;
		}

		if layout.input.contains(position) {
			focus.focus();
			self.open();
		}
		EventOutcome::Consumed
	}
}
