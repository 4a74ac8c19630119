//! Core state container for the picker's front-end.
//!
//! The [`App`] struct bundles the catalog reference, the query input and the
//! table view it drives. While the query is blank the view interleaves
//! section headings with countries; while filtering it is a flat match list.

use atlas_countries::{Catalog, Country, filter_indices, normalize_query};
use ratatui::layout::Rect;
use ratatui::widgets::{ScrollbarState, TableState};

use crate::components::point_in_rect;
use crate::input::SearchInput;
use crate::outcome::PickOutcome;
use crate::settings::PickerSettings;
use crate::theme::{self, Theme};

/// Callback invoked when the user confirms a selection.
pub(crate) type SelectCallback<'a> = Box<dyn FnMut(&Country) + 'a>;

/// One visual row of the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewRow {
	/// Section heading shown while browsing.
	Heading(usize),
	/// A selectable country, indexed into the catalog's flat list.
	Country(usize),
}

/// Aggregate state for an interactive picking session.
pub struct App<'a> {
	/// Catalog backing every view.
	pub(crate) catalog: &'a Catalog,
	/// Presentation settings for this session.
	pub(crate) settings: PickerSettings,
	/// Active color theme.
	pub(crate) theme: Theme,
	/// Text input widget for the search filter.
	pub search_input: SearchInput<'a>,
	/// Selection state for the results table.
	pub table_state: TableState,
	/// Scrollbar state for the results table.
	pub(crate) scrollbar_state: ScrollbarState,
	/// Rows of the current view, headings included while browsing.
	pub(crate) rows: Vec<ViewRow>,
	/// Last known results area on screen.
	pub(crate) results_area: Option<Rect>,
	/// Whether the mouse is currently hovering the results table.
	pub(crate) results_hovered: bool,
	/// Invoked when the user confirms a selection.
	pub(crate) on_select: Option<SelectCallback<'a>>,
}

impl<'a> App<'a> {
	/// Construct an [`App`] over `catalog`, optionally pre-filtered.
	#[must_use]
	pub fn new(catalog: &'a Catalog, settings: PickerSettings, initial_query: &str) -> Self {
		let mut table_state = TableState::default();
		table_state.select(Some(0));
		let mut search_input = SearchInput::new(initial_query);
		search_input.set_placeholder(settings.placeholder.clone());

		let mut app = Self {
			catalog,
			settings,
			theme: theme::default_theme(),
			search_input,
			table_state,
			scrollbar_state: ScrollbarState::default(),
			rows: Vec::new(),
			results_area: None,
			results_hovered: false,
			on_select: None,
		};
		app.apply_input_styles();
		app.refresh_rows();
		app
	}

	/// Apply a new theme.
	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.apply_input_styles();
	}

	/// Theme with the settings' color overrides folded in.
	pub(crate) fn effective_theme(&self) -> Theme {
		let mut theme = self.theme;
		if let Some(color) = self.settings.title_color {
			theme.header = theme.header.fg(color);
		}
		if let Some(color) = self.settings.search_color {
			theme.prompt = theme.prompt.fg(color);
		}
		if let Some(color) = self.settings.cancel_color {
			theme.empty = theme.empty.fg(color);
		}
		theme
	}

	fn apply_input_styles(&mut self) {
		let theme = self.effective_theme();
		self.search_input.set_text_style(theme.prompt);
		self.search_input.set_placeholder_style(theme.empty);
	}

	/// Whether the picker is in sectioned browse mode (blank query).
	pub(crate) fn browsing(&self) -> bool {
		normalize_query(self.search_input.text()).is_empty()
	}

	/// Rebuild the visible rows from the catalog and the current query.
	pub(crate) fn refresh_rows(&mut self) {
		let query = self.search_input.text();
		self.rows.clear();
		if normalize_query(query).is_empty() {
			for (section_index, section) in self.catalog.sections().iter().enumerate() {
				self.rows.push(ViewRow::Heading(section_index));
				self.rows
					.extend(section.indices().iter().map(|&index| ViewRow::Country(index)));
			}
		} else {
			self.rows.extend(
				filter_indices(self.catalog, query)
					.into_iter()
					.map(ViewRow::Country),
			);
		}
		self.ensure_selection();
	}

	/// Number of selectable countries currently visible.
	pub(crate) fn match_count(&self) -> usize {
		self.rows
			.iter()
			.filter(|row| matches!(row, ViewRow::Country(_)))
			.count()
	}

	/// Keep the selection on a selectable row, preferring the current one.
	pub(crate) fn ensure_selection(&mut self) {
		if self.rows.is_empty() {
			self.table_state.select(None);
			return;
		}
		let selected = self.table_state.selected().unwrap_or(0);
		let clamped = selected.min(self.rows.len() - 1);
		let next = self
			.first_selectable_from(clamped)
			.or_else(|| self.last_selectable_before(clamped));
		self.table_state.select(next);
	}

	fn is_selectable(&self, index: usize) -> bool {
		matches!(self.rows.get(index), Some(ViewRow::Country(_)))
	}

	fn first_selectable_from(&self, start: usize) -> Option<usize> {
		(start..self.rows.len()).find(|&index| self.is_selectable(index))
	}

	fn last_selectable_before(&self, end: usize) -> Option<usize> {
		(0..end).rev().find(|&index| self.is_selectable(index))
	}

	fn heading_before(&self, index: usize) -> Option<usize> {
		(0..index)
			.rev()
			.find(|&candidate| matches!(self.rows.get(candidate), Some(ViewRow::Heading(_))))
	}

	/// Move the cursor to the previous country, skipping headings.
	pub(crate) fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& let Some(previous) = self.last_selectable_before(selected)
		{
			self.table_state.select(Some(previous));
		}
	}

	/// Move the cursor to the next country, skipping headings.
	pub(crate) fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& let Some(next) = self.first_selectable_from(selected + 1)
		{
			self.table_state.select(Some(next));
		}
	}

	/// Move the cursor one viewport up.
	pub(crate) fn move_selection_page_up(&mut self) {
		for _ in 0..self.viewport_rows() {
			self.move_selection_up();
		}
	}

	/// Move the cursor one viewport down.
	pub(crate) fn move_selection_page_down(&mut self) {
		for _ in 0..self.viewport_rows() {
			self.move_selection_down();
		}
	}

	/// Jump to the first country in the view.
	pub(crate) fn select_first(&mut self) {
		if let Some(first) = self.first_selectable_from(0) {
			self.table_state.select(Some(first));
		}
	}

	/// Jump to the last country in the view.
	pub(crate) fn select_last(&mut self) {
		if let Some(last) = self.last_selectable_before(self.rows.len()) {
			self.table_state.select(Some(last));
		}
	}

	/// Jump to the first country of the next section.
	pub(crate) fn jump_section_forward(&mut self) {
		let start = self.table_state.selected().unwrap_or(0);
		let next_heading = (start + 1..self.rows.len())
			.find(|&index| matches!(self.rows.get(index), Some(ViewRow::Heading(_))));
		if let Some(heading) = next_heading
			&& let Some(country) = self.first_selectable_from(heading)
		{
			self.table_state.select(Some(country));
		}
	}

	/// Jump to the start of the current section, or the previous one when
	/// already there.
	pub(crate) fn jump_section_back(&mut self) {
		let Some(selected) = self.table_state.selected() else {
			return;
		};
		let Some(current_heading) = self.heading_before(selected) else {
			return;
		};
		if let Some(start) = self.first_selectable_from(current_heading)
			&& start < selected
		{
			self.table_state.select(Some(start));
			return;
		}
		if let Some(previous_heading) = self.heading_before(current_heading)
			&& let Some(start) = self.first_selectable_from(previous_heading)
		{
			self.table_state.select(Some(start));
		}
	}

	/// Country under the cursor, if any.
	pub(crate) fn current_selection(&self) -> Option<&Country> {
		let selected = self.table_state.selected()?;
		match self.rows.get(selected)? {
			ViewRow::Country(index) => self.catalog.countries().get(*index),
			ViewRow::Heading(_) => None,
		}
	}

	/// Index of the section containing the cursor while browsing.
	pub(crate) fn active_section(&self) -> Option<usize> {
		let selected = self.table_state.selected()?;
		(0..=selected).rev().find_map(|index| match self.rows.get(index) {
			Some(ViewRow::Heading(section)) => Some(*section),
			_ => None,
		})
	}

	/// Build the outcome for a finished session.
	pub(crate) fn outcome(&self, accepted: bool) -> PickOutcome {
		PickOutcome {
			accepted,
			selection: if accepted {
				self.current_selection().cloned()
			} else {
				None
			},
			query: self.search_input.text().to_string(),
		}
	}

	/// Visible body rows of the results table, from its last known area.
	fn viewport_rows(&self) -> usize {
		self.results_area
			.map_or(10, |area| area.height.saturating_sub(4) as usize)
			.max(1)
	}

	pub(crate) fn update_results_hover(&mut self, column: u16, row: u16) {
		self.results_hovered = self
			.results_area
			.is_some_and(|area| point_in_rect(column, row, area));
	}

	pub(crate) fn select_row_at(&mut self, _column: u16, row: u16) -> bool {
		let Some(area) = self.results_area else {
			return false;
		};

		// Table is rendered inside a rounded border block; subtract borders.
		let inner_y = area.y.saturating_add(1);
		let inner_width = area.width.saturating_sub(2);
		let inner_height = area.height.saturating_sub(2);
		if inner_width == 0 || inner_height == 0 {
			return false;
		}

		// Header row (1) + bottom margin (1) puts body rows at y + 2.
		let body_start_y = inner_y.saturating_add(2);
		if row < body_start_y {
			return false;
		}

		let body_end_y = inner_y.saturating_add(inner_height);
		if row >= body_end_y {
			return false;
		}

		let row_in_view = row.saturating_sub(body_start_y) as usize;
		let visible_index = self.table_state.offset().saturating_add(row_in_view);

		if !self.is_selectable(visible_index) {
			return false;
		}

		self.table_state.select(Some(visible_index));
		true
	}
}
