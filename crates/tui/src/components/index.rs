use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Render the alphabetical section strip shown while browsing.
///
/// The strip lists one entry per section and emphasizes the active one.
/// Entries that would overflow the area are dropped from the right.
pub fn render_section_index(
	frame: &mut Frame,
	area: Rect,
	titles: &[&str],
	active: Option<usize>,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 || titles.is_empty() {
		return;
	}

	let budget = area.width as usize;
	let mut used = 0usize;
	let mut spans: Vec<Span> = Vec::with_capacity(titles.len());
	for (index, title) in titles.iter().enumerate() {
		let entry = format!("{title} ");
		let width = entry.width();
		if used + width > budget {
			break;
		}
		used += width;
		let style = if active == Some(index) {
			theme.section_active_style()
		} else {
			theme.section
		};
		spans.push(Span::styled(entry, style));
	}

	frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
