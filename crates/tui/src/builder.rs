use anyhow::Result;
use atlas_countries::{Catalog, Country};

use crate::outcome::PickOutcome;
use crate::settings::PickerSettings;
use crate::state::{App, SelectCallback};
use crate::theme::{self, Theme};

/// Configures and runs an interactive picking session.
pub struct Picker<'a> {
	catalog: &'a Catalog,
	settings: PickerSettings,
	theme: Theme,
	initial_query: String,
	on_select: Option<SelectCallback<'a>>,
}

impl<'a> Picker<'a> {
	/// Start configuring a picker over `catalog`.
	#[must_use]
	pub fn new(catalog: &'a Catalog) -> Self {
		Self {
			catalog,
			settings: PickerSettings::default(),
			theme: theme::default_theme(),
			initial_query: String::new(),
			on_select: None,
		}
	}

	/// Replace the presentation settings wholesale.
	#[must_use]
	pub fn with_settings(mut self, settings: PickerSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Use a specific theme.
	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	/// Use a built-in theme by name; unknown names keep the default.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = theme::by_name(name) {
			self.theme = theme;
		}
		self
	}

	/// Seed the query so the picker opens pre-filtered.
	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	/// Invoke `callback` every time the user confirms a selection.
	#[must_use]
	pub fn on_select<F>(mut self, callback: F) -> Self
	where
		F: FnMut(&Country) + 'a,
	{
		self.on_select = Some(Box::new(callback));
		self
	}

	/// Run the picker to completion on this terminal.
	///
	/// # Errors
	/// Returns terminal I/O failures from the event loop.
	pub fn run(self) -> Result<PickOutcome> {
		let mut app = self.into_app();
		app.run()
	}

	/// Build the underlying [`App`] without starting the event loop.
	#[must_use]
	pub fn into_app(self) -> App<'a> {
		let mut app = App::new(self.catalog, self.settings, &self.initial_query);
		app.set_theme(self.theme);
		app.on_select = self.on_select;
		app
	}
}
