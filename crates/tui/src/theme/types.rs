use ratatui::style::{Color, Style};

/// Styles for each surface of the picker UI.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Chrome: borders, column headers and the prompt title.
	pub header: Style,
	/// The row under the cursor.
	pub row_highlight: Style,
	/// Query text in the search input.
	pub prompt: Style,
	/// Section heading rows and the alphabetical strip.
	pub section: Style,
	/// Hints, placeholders and empty states.
	pub empty: Style,
	/// Matched query fragments inside result rows.
	pub highlight: Style,
}

impl Theme {
	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}

	/// Style for the active entry in the section strip.
	#[must_use]
	pub fn section_active_style(&self) -> Style {
		self.highlight
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self { name, theme }
	}
}
