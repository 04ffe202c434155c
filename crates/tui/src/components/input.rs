use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use tui_textarea::{CursorMove, TextArea};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

/// Single-line search bar backed by a [`TextArea`].
#[derive(Debug, Clone)]
pub struct QueryInput {
	textarea: TextArea<'static>,
	placeholder: String,
	focused: bool,
}

impl Default for QueryInput {
	fn default() -> Self {
		Self::new("")
	}
}

impl QueryInput {
	/// Creates an input pre-filled with `text`, cursor at the end.
	pub fn new(text: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
			placeholder: String::new(),
			focused: false,
		};
		input.set_text(text);
		input
	}

	/// Text shown while the input is empty.
	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self.textarea.set_placeholder_text(self.placeholder.clone());
		self
	}

	/// Current contents.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Replace the contents and move the cursor to the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let text: String = text.into();
		let line = text.lines().next().unwrap_or_default().to_string();
		let mut textarea = TextArea::new(vec![line]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text(self.placeholder.clone());
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
		self.apply_cursor_style();
	}

	/// Whether the input currently owns keyboard focus.
	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	/// Give or take keyboard focus.
	pub fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
		self.apply_cursor_style();
	}

	/// Apply an editing key. Returns `true` when the text changed.
	///
	/// Keys carrying `Ctrl`, `Alt` or `Super` are ignored so that shortcuts
	/// never leak into the query. Only single-line editing keys reach the
	/// text area.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if key
			.modifiers
			.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
		{
			return false;
		}

		match key.code {
			KeyCode::Char(_)
			| KeyCode::Backspace
			| KeyCode::Delete
			| KeyCode::Left
			| KeyCode::Right
			| KeyCode::Home
			| KeyCode::End => self.textarea.input(key),
			_ => false,
		}
	}

	/// Draw the text area into `area`.
	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}

	fn apply_cursor_style(&mut self) {
		let style = if self.focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}
}

/// Argument bundle for rendering the search bar.
pub struct InputContext<'a> {
	/// The input state.
	pub input: &'a QueryInput,
	/// Prompt label drawn before the text.
	pub prompt: &'a str,
	/// Shortcut hint drawn at the right edge.
	pub hint: &'a str,
	/// Rendering area.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Render the single-row search bar: prompt, text area, then the shortcut
/// hint at the right edge.
pub fn render_input(frame: &mut Frame, context: InputContext<'_>) {
	let InputContext {
		input,
		prompt,
		hint,
		area,
		theme,
	} = context;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let prompt_text = format!("{prompt} > ");
	let prompt_width = (prompt_text.width() as u16).min(area.width);
	frame.render_widget(
		Span::styled(prompt_text, theme.prompt),
		Rect {
			width: prompt_width,
			height: 1,
			..area
		},
	);

	let hint_width = hint.width() as u16;
	let show_hint = !hint.is_empty() && hint_width + prompt_width + 4 < area.width;
	let reserved = if show_hint { hint_width + 1 } else { 0 };
	let input_area = Rect {
		x: area.x + prompt_width,
		y: area.y,
		width: area.width.saturating_sub(prompt_width + reserved),
		height: 1,
	};
	input.render_textarea(frame, input_area);

	if show_hint {
		let x = area.right().saturating_sub(hint_width);
		frame
			.buffer_mut()
			.set_string(x, area.top(), hint, theme.empty);
	}
}
