use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Single-line query input backed by [`tui_textarea::TextArea`].
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl SearchInput<'_> {
	/// Create an input seeded with `initial`, cursor at the end.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Set the placeholder shown while the query is empty.
	pub fn set_placeholder(&mut self, text: impl Into<String>) {
		self.textarea.set_placeholder_text(text);
	}

	/// Style for the query text.
	pub fn set_text_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	/// Style for the placeholder text.
	pub fn set_placeholder_style(&mut self, style: Style) {
		self.textarea.set_placeholder_style(style);
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map_or("", String::as_str)
	}

	/// Feed a key event into the input, returning whether the text changed.
	///
	/// Enter is swallowed so the buffer stays a single line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if key.code == KeyCode::Enter {
			return false;
		}
		self.textarea.input(key)
	}

	/// Render the input, including its cursor, into `area`.
	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
