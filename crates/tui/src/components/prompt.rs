use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::input::SearchInput;
use crate::theme::Theme;

/// Argument bundle for rendering the prompt row.
pub struct InputContext<'a> {
	/// The search input widget.
	pub search_input: &'a SearchInput<'a>,
	/// Title rendered ahead of the input.
	pub title: &'a str,
	/// Rendering area.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Render the prompt row: title, search input and the match count.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>, count_text: &str) {
	let InputContext {
		search_input,
		title,
		area,
		theme,
	} = input;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let prompt = format!("{title} > ");
	let prompt_width = (prompt.width() as u16).min(area.width);
	let layout = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([Constraint::Length(prompt_width), Constraint::Min(1)])
		.split(area);

	let style = Style::default().fg(theme.header_fg());
	frame.render_widget(Paragraph::new(prompt).style(style), layout[0]);
	search_input.render_textarea(frame, layout[1]);

	render_count(frame, layout[1], count_text, theme);
}

/// Right-align the match count in the input row, keeping clear of typed text.
fn render_count(frame: &mut Frame, area: Rect, count_text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || count_text.is_empty() {
		return;
	}

	let line = Line::from(Span::styled(count_text.to_string(), theme.empty));
	let line_width = line.width() as u16;
	if line_width == 0 {
		return;
	}

	let buffer = frame.buffer_mut();
	let mut start_x = if line_width >= area.width {
		area.left()
	} else {
		area.right().saturating_sub(line_width)
	};

	let input_row = area.top();
	let mut last_char_x: Option<u16> = None;
	for x in area.left()..area.right() {
		if let Some(cell) = buffer.cell((x, input_row))
			&& !cell.symbol().trim().is_empty()
		{
			last_char_x = Some(x);
		}
	}

	if let Some(last_x) = last_char_x {
		let min_start = last_x.saturating_add(3);
		if min_start > start_x {
			start_x = min_start;
		}
	}

	if start_x >= area.right() {
		return;
	}

	let max_width = area
		.right()
		.saturating_sub(start_x)
		.min(line_width)
		.min(area.width);

	if max_width == 0 {
		return;
	}

	buffer.set_line(start_x, input_row, &line, max_width);
}
