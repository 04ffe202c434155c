use ratatui::crossterm::event::{
	Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use super::App;
use super::pages;
use crate::overlay::ContentKind;
use crate::router::Route;

impl App {
	/// Apply one terminal event. Returns `true` when the console should exit.
	pub fn handle_event(&mut self, event: &Event) -> bool {
		match event {
			Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
			Event::Mouse(mouse) => {
				self.handle_mouse(*mouse);
				false
			}
			_ => false,
		}
	}

	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
		if is_quit(&key) {
			return true;
		}
		if key.code == KeyCode::F(12) {
			self.logs.toggle();
			return false;
		}

		let before = self.router.current().clone();
		let outcome = self
			.overlay
			.handle_key(&self.events, key, &mut self.input, &mut self.router);
		if outcome.is_consumed() {
			self.sync_input();
			self.after_navigation(&before);
			return false;
		}

		if self.input.is_focused() {
			if self.input.input(key) {
				self.overlay.set_query(self.input.text());
				self.overlay.open();
			}
			return false;
		}

		if self.logs.handle_key(key) {
			return false;
		}
		self.handle_page_key(key)
	}

	fn handle_page_key(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Char('q') => return true,
			KeyCode::Char('/') => {
				self.input.set_focused(true);
				self.overlay.open();
			}
			KeyCode::Up => {
				self.list_selection = self.list_selection.saturating_sub(1);
			}
			KeyCode::Down => {
				let len = pages::selectable_len(&self.catalog, self.router.current());
				if self.list_selection + 1 < len {
					self.list_selection += 1;
				}
			}
			KeyCode::Enter => {
				if let Some(route) =
					pages::target(&self.catalog, self.router.current(), self.list_selection)
				{
					self.go_to(route);
				}
			}
			KeyCode::Backspace | KeyCode::Left => {
				let before = self.router.current().clone();
				self.router.back();
				self.after_navigation(&before);
			}
			KeyCode::Char(digit @ '1'..='5') => {
				let route = match digit {
					'1' => Route::Dashboard,
					'2' => Route::List(ContentKind::Article),
					'3' => Route::List(ContentKind::Activity),
					'4' => Route::List(ContentKind::Member),
					_ => Route::List(ContentKind::Division),
				};
				self.go_to(route);
			}
			_ => {}
		}
		false
	}

	fn handle_mouse(&mut self, mouse: MouseEvent) {
		if !matches!(mouse.kind, MouseEventKind::Down(_)) {
			return;
		}
		let outcome = self.overlay.handle_pointer_down(
			&self.events,
			mouse.column,
			mouse.row,
			&mut self.input,
		);
		if !outcome.is_consumed() {
			self.input.set_focused(false);
		}
	}

	fn go_to(&mut self, route: Route) {
		let before = self.router.current().clone();
		self.router.push(route);
		self.after_navigation(&before);
	}

	fn after_navigation(&mut self, before: &Route) {
		if self.router.current() != before {
			self.list_selection = 0;
			self.input.set_focused(false);
		}
	}

	/// The overlay resets its query on select and clear; mirror that in the
	/// input.
	fn sync_input(&mut self) {
		if self.input.text() != self.overlay.query() {
			self.input.set_text(self.overlay.query());
		}
	}
}

fn is_quit(key: &KeyEvent) -> bool {
	key.modifiers.contains(KeyModifiers::CONTROL)
		&& matches!(key.code, KeyCode::Char('c' | 'q'))
}
