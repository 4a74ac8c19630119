use atlas_countries::normalize_query;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::widgets::Paragraph;

use crate::components::rows::build_country_rows;
use crate::components::tables::{TABLE_HIGHLIGHT_SPACING, TableSpec};
use crate::components::{InputContext, render_input, render_section_index, render_table};
use crate::state::App;
use crate::theme::Theme;

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let area = area.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let theme = self.effective_theme();
		let browsing = self.browsing();

		let layout = if browsing {
			Layout::default()
				.direction(Direction::Vertical)
				.constraints([
					Constraint::Length(1),
					Constraint::Length(1),
					Constraint::Min(1),
					Constraint::Length(1),
				])
				.split(area)
		} else {
			Layout::default()
				.direction(Direction::Vertical)
				.constraints([
					Constraint::Length(1),
					Constraint::Min(1),
					Constraint::Length(1),
				])
				.split(area)
		};
		let (input_area, strip_area, results_area, footer_area) = if browsing {
			(layout[0], Some(layout[1]), layout[2], layout[3])
		} else {
			(layout[0], None, layout[1], layout[2])
		};

		let count_text = format!("{}/{}", self.match_count(), self.catalog.len());
		let input_ctx = InputContext {
			search_input: &self.search_input,
			title: &self.settings.title,
			area: input_area,
			theme: &theme,
		};
		render_input(frame, input_ctx, &count_text);

		if let Some(strip_area) = strip_area {
			let titles = self.catalog.section_titles();
			render_section_index(frame, strip_area, &titles, self.active_section(), &theme);
		}

		self.results_area = Some(results_area);
		self.render_results(frame, results_area, &theme);
		self.render_footer(frame, footer_area, browsing, &theme);

		if self.match_count() == 0 {
			render_empty_state(frame, results_area, &theme);
		}
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let catalog = self.catalog;
		let needle = normalize_query(self.search_input.text());
		let rows = build_country_rows(&self.rows, catalog, &self.settings, &needle, theme);

		self.scrollbar_state = self
			.scrollbar_state
			.content_length(rows.len())
			.position(self.table_state.selected().unwrap_or(0));

		let spec = TableSpec {
			headers: self.column_headers(),
			widths: self.column_widths(),
			rows,
			highlight_spacing: TABLE_HIGHLIGHT_SPACING,
		};

		render_table(
			frame,
			area,
			&mut self.table_state,
			&mut self.scrollbar_state,
			spec,
			theme,
		);
	}

	fn render_footer(&self, frame: &mut Frame, area: Rect, browsing: bool, theme: &Theme) {
		let mut hint = String::from("enter select · esc cancel");
		if browsing {
			hint.push_str(" · ←/→ sections · type to filter");
		}
		frame.render_widget(Paragraph::new(hint).style(theme.empty), area);
	}

	fn column_headers(&self) -> Vec<String> {
		let mut headers = Vec::new();
		if self.settings.show_flags {
			headers.push(String::new());
		}
		headers.push("Name".to_string());
		if self.settings.show_dial_code {
			headers.push("Dial".to_string());
		}
		headers.push("Code".to_string());
		headers
	}

	fn column_widths(&self) -> Vec<Constraint> {
		let mut widths = Vec::new();
		if self.settings.show_flags {
			widths.push(Constraint::Length(2));
		}
		widths.push(Constraint::Fill(1));
		if self.settings.show_dial_code {
			widths.push(Constraint::Length(6));
		}
		widths.push(Constraint::Length(4));
		widths
	}
}

/// Center a "No matches" message in the table body.
fn render_empty_state(frame: &mut Frame, results_area: Rect, theme: &Theme) {
	let mut message_area = results_area;
	// The table block eats one row per border plus two header rows.
	const BORDER_AND_HEADER_HEIGHT: u16 = 4;
	if message_area.height <= BORDER_AND_HEADER_HEIGHT {
		return;
	}

	message_area.y += 1;
	message_area.x += 1;
	message_area.width = message_area.width.saturating_sub(2);
	message_area.height -= 2;

	const HEADER_AND_DIVIDER_HEIGHT: u16 = 2;
	if message_area.height <= HEADER_AND_DIVIDER_HEIGHT {
		return;
	}
	message_area.y += HEADER_AND_DIVIDER_HEIGHT;
	message_area.height -= HEADER_AND_DIVIDER_HEIGHT;

	let empty = Paragraph::new("No matches")
		.style(theme.empty)
		.alignment(Alignment::Center);
	frame.render_widget(empty, message_area);
}
