use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::outcome::PickOutcome;
use crate::state::App;

impl App<'_> {
	/// Process a keyboard event and return an outcome when the session ends.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<PickOutcome>> {
		match key.code {
			KeyCode::Esc => {
				return Ok(Some(self.outcome(false)));
			}
			KeyCode::Enter => {
				let outcome = self.outcome(true);
				if let (Some(callback), Some(country)) =
					(self.on_select.as_mut(), outcome.selection.as_ref())
				{
					callback(country);
				}
				return Ok(Some(outcome));
			}
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			KeyCode::PageUp => self.move_selection_page_up(),
			KeyCode::PageDown => self.move_selection_page_down(),
			KeyCode::Home => self.select_first(),
			KeyCode::End => self.select_last(),
			KeyCode::Left if self.browsing() => self.jump_section_back(),
			KeyCode::Right if self.browsing() => self.jump_section_forward(),
			_ => {
				if self.search_input.input(key) {
					self.refresh_rows();
				}
			}
		}
		Ok(None)
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		self.update_results_hover(mouse.column, mouse.row);

		match mouse.kind {
			MouseEventKind::ScrollUp if self.results_hovered => {
				self.move_selection_up();
			}
			MouseEventKind::ScrollDown if self.results_hovered => {
				self.move_selection_down();
			}
			MouseEventKind::Down(MouseButton::Left) if self.results_hovered => {
				self.select_row_at(mouse.column, mouse.row);
			}
			_ => {}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use atlas_countries::{Catalog, Locale};
	use ratatui::crossterm::event::{KeyCode, KeyEvent};

	use super::*;
	use crate::settings::PickerSettings;

	fn sample_catalog() -> Catalog {
		Catalog::new(Locale::from_tag("en"))
	}

	fn type_query(app: &mut App, query: &str) {
		for ch in query.chars() {
			let ended = app
				.handle_key(KeyEvent::from(KeyCode::Char(ch)))
				.expect("key handling failed");
			assert!(ended.is_none());
		}
	}

	#[test]
	fn esc_cancels_with_the_current_query() {
		let catalog = sample_catalog();
		let mut app = App::new(&catalog, PickerSettings::default(), "");
		type_query(&mut app, "fr");
		let outcome = app
			.handle_key(KeyEvent::from(KeyCode::Esc))
			.expect("key handling failed")
			.expect("esc should end the session");
		assert!(!outcome.accepted);
		assert!(outcome.selection.is_none());
		assert_eq!(outcome.query, "fr");
	}

	#[test]
	fn enter_accepts_the_cursor_row() {
		let catalog = sample_catalog();
		let mut app = App::new(&catalog, PickerSettings::default(), "");
		type_query(&mut app, "fr");
		let outcome = app
			.handle_key(KeyEvent::from(KeyCode::Enter))
			.expect("key handling failed")
			.expect("enter should end the session");
		assert!(outcome.accepted);
		let country = outcome.selected().expect("a row should be selected");
		assert!(country.matches("fr"));
	}

	#[test]
	fn enter_fires_the_selection_callback() {
		let catalog = sample_catalog();
		let picked: RefCell<Option<String>> = RefCell::new(None);
		let mut app = App::new(&catalog, PickerSettings::default(), "france");
		app.on_select = Some(Box::new(|country| {
			*picked.borrow_mut() = Some(country.code.clone());
		}));
		app.handle_key(KeyEvent::from(KeyCode::Enter))
			.expect("key handling failed");
		drop(app);
		assert_eq!(picked.borrow().as_deref(), Some("FR"));
	}

	#[test]
	fn enter_with_no_matches_accepts_nothing() {
		let catalog = sample_catalog();
		let mut app = App::new(&catalog, PickerSettings::default(), "xyzzyqux");
		let outcome = app
			.handle_key(KeyEvent::from(KeyCode::Enter))
			.expect("key handling failed")
			.expect("enter should end the session");
		assert!(outcome.accepted);
		assert!(outcome.selection.is_none());
	}

	#[test]
	fn typing_refilters_the_rows() {
		let catalog = sample_catalog();
		let mut app = App::new(&catalog, PickerSettings::default(), "");
		let before = app.match_count();
		type_query(&mut app, "fr");
		assert!(app.match_count() < before);
		assert!(!app.browsing());
	}

	#[test]
	fn arrow_keys_move_the_cursor_in_browse_mode() {
		let catalog = sample_catalog();
		let mut app = App::new(&catalog, PickerSettings::default(), "");
		let start = app.table_state.selected();
		app.handle_key(KeyEvent::from(KeyCode::Down))
			.expect("key handling failed");
		assert_ne!(app.table_state.selected(), start);
		app.handle_key(KeyEvent::from(KeyCode::Up))
			.expect("key handling failed");
		assert_eq!(app.table_state.selected(), start);
	}

	#[test]
	fn horizontal_keys_jump_sections_only_while_browsing() {
		let catalog = sample_catalog();
		let mut app = App::new(&catalog, PickerSettings::default(), "");
		app.handle_key(KeyEvent::from(KeyCode::Right))
			.expect("key handling failed");
		assert_eq!(app.active_section(), Some(1));

		type_query(&mut app, "an");
		let selected = app.table_state.selected();
		app.handle_key(KeyEvent::from(KeyCode::Right))
			.expect("key handling failed");
		assert_eq!(app.table_state.selected(), selected);
	}

	#[test]
	fn home_and_end_hit_the_list_bounds() {
		let catalog = sample_catalog();
		let mut app = App::new(&catalog, PickerSettings::default(), "");
		app.handle_key(KeyEvent::from(KeyCode::End))
			.expect("key handling failed");
		let last = app.table_state.selected().expect("selection expected");
		assert_eq!(last, app.rows.len() - 1);
		app.handle_key(KeyEvent::from(KeyCode::Home))
			.expect("key handling failed");
		assert_eq!(app.table_state.selected(), Some(1));
	}

	#[test]
	fn whitespace_query_stays_in_browse_mode() {
		let catalog = sample_catalog();
		let mut app = App::new(&catalog, PickerSettings::default(), "");
		type_query(&mut app, "   ");
		assert!(app.browsing());
		assert_eq!(app.match_count(), catalog.len());
	}

	#[test]
	fn scroll_wheel_moves_the_selection_when_hovering() {
		let catalog = sample_catalog();
		let mut app = App::new(&catalog, PickerSettings::default(), "");
		app.results_area = Some(ratatui::layout::Rect::new(0, 2, 40, 12));
		let start = app.table_state.selected();
		app.handle_mouse(MouseEvent {
			kind: MouseEventKind::ScrollDown,
			column: 5,
			row: 6,
			modifiers: ratatui::crossterm::event::KeyModifiers::NONE,
		});
		assert_ne!(app.table_state.selected(), start);
	}
}
