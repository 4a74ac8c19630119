use atlas_countries::{Catalog, Country};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};

use crate::settings::PickerSettings;
use crate::state::ViewRow;
use crate::theme::Theme;

/// Build table rows for the current view.
///
/// Heading rows carry the section letter in the name column; country rows
/// follow the column layout driven by `settings`.
#[must_use]
pub(crate) fn build_country_rows<'a>(
	view: &[ViewRow],
	catalog: &'a Catalog,
	settings: &PickerSettings,
	needle: &str,
	theme: &Theme,
) -> Vec<Row<'a>> {
	view.iter()
		.filter_map(|row| match row {
			ViewRow::Heading(section) => {
				let title = catalog.sections().get(*section)?.title();
				Some(heading_row(title.to_string(), settings, theme))
			}
			ViewRow::Country(index) => {
				let country = catalog.countries().get(*index)?;
				Some(country_row(country, settings, needle, theme))
			}
		})
		.collect()
}

fn heading_row<'a>(title: String, settings: &PickerSettings, theme: &Theme) -> Row<'a> {
	let mut cells: Vec<Cell<'a>> = Vec::new();
	if settings.show_flags {
		cells.push(Cell::from(""));
	}
	cells.push(Cell::from(Span::styled(title, theme.section)));
	Row::new(cells)
}

fn country_row<'a>(
	country: &'a Country,
	settings: &PickerSettings,
	needle: &str,
	theme: &Theme,
) -> Row<'a> {
	let mut cells: Vec<Cell<'a>> = Vec::new();
	if settings.show_flags {
		cells.push(Cell::from(country.flag()));
	}
	cells.push(name_cell(country, settings, needle, theme));
	if settings.show_dial_code {
		cells.push(Cell::from(highlight_fragment(
			&country.dial_code,
			needle,
			theme.highlight,
		)));
	}
	cells.push(Cell::from(highlight_fragment(
		&country.code,
		needle,
		theme.highlight,
	)));
	Row::new(cells)
}

fn name_cell<'a>(
	country: &'a Country,
	settings: &PickerSettings,
	needle: &str,
	theme: &Theme,
) -> Cell<'a> {
	let mut line = highlight_fragment(country.localized_name(), needle, theme.highlight);
	if settings.show_emojis && !country.emoji.is_empty() {
		line.push_span(Span::raw(" "));
		line.push_span(Span::raw(country.emoji.as_str()));
	}
	Cell::from(line)
}

/// Style the first case-insensitive occurrence of `needle` within `text`.
///
/// Falls back to an unstyled line whenever lowercasing shifts byte offsets,
/// so the split can never land inside a character.
#[must_use]
pub(crate) fn highlight_fragment<'a>(text: &'a str, needle: &str, style: Style) -> Line<'a> {
	if needle.is_empty() {
		return Line::from(Span::raw(text));
	}
	let lowered = text.to_lowercase();
	if lowered.len() != text.len() {
		return Line::from(Span::raw(text));
	}
	let Some(start) = lowered.find(needle) else {
		return Line::from(Span::raw(text));
	};
	let end = start + needle.len();
	match (text.get(..start), text.get(start..end), text.get(end..)) {
		(Some(head), Some(hit), Some(tail)) => Line::from(vec![
			Span::raw(head),
			Span::styled(hit, style),
			Span::raw(tail),
		]),
		_ => Line::from(Span::raw(text)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fragment_is_split_around_the_match() {
		let style = Style::default();
		let line = highlight_fragment("France", "ran", style);
		let parts: Vec<&str> = line.spans.iter().map(|span| span.content.as_ref()).collect();
		assert_eq!(parts, vec!["F", "ran", "ce"]);
	}

	#[test]
	fn match_is_case_insensitive_against_the_display_text() {
		let style = Style::default();
		let line = highlight_fragment("France", "fr", style);
		let parts: Vec<&str> = line.spans.iter().map(|span| span.content.as_ref()).collect();
		assert_eq!(parts, vec!["Fr", "ance"]);
	}

	#[test]
	fn unmatched_text_stays_a_single_span() {
		let line = highlight_fragment("France", "xyz", Style::default());
		assert_eq!(line.spans.len(), 1);
	}

	#[test]
	fn accented_text_keeps_character_boundaries() {
		let line = highlight_fragment("Åland Islands", "land", Style::default());
		let joined: String = line.spans.iter().map(|span| span.content.as_ref()).collect::<String>();
		assert_eq!(joined, "Åland Islands");
	}
}
