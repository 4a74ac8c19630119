use ratatui::style::Color;

/// Presentation knobs for a picker session.
///
/// Color overrides are applied on top of the active theme: `title_color`
/// recolors the chrome (prompt title, borders, column headers),
/// `search_color` the query text and `cancel_color` the hint and empty-state
/// text, including the cancel hint in the footer.
#[derive(Debug, Clone)]
pub struct PickerSettings {
	/// Prompt title rendered ahead of the search input.
	pub title: String,
	/// Placeholder shown while the query is empty.
	pub placeholder: String,
	/// Override for the chrome color.
	pub title_color: Option<Color>,
	/// Override for hint and empty-state text.
	pub cancel_color: Option<Color>,
	/// Override for the query text color.
	pub search_color: Option<Color>,
	/// Render the leading flag column.
	pub show_flags: bool,
	/// Append the emoji glyph to the name cell.
	pub show_emojis: bool,
	/// Render the dial code column.
	pub show_dial_code: bool,
}

impl Default for PickerSettings {
	fn default() -> Self {
		Self {
			title: "Select a country".to_string(),
			placeholder: "Search".to_string(),
			title_color: None,
			cancel_color: None,
			search_color: None,
			show_flags: true,
			show_emojis: true,
			show_dial_code: true,
		}
	}
}
