use anyhow::{Context, Result};
use atlas_countries::Catalog;
use atlas_tui::{PickOutcome, Picker, PickerSettings};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive picker.
pub(crate) struct PickerWorkflow {
	catalog: Catalog,
	config: ResolvedConfig,
}

impl PickerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let catalog = Catalog::try_new(config.locale.clone())
			.context("failed to load the bundled country dataset")?;
		tracing::debug!(
			countries = catalog.len(),
			sections = catalog.sections().len(),
			locale = %catalog.locale(),
			"catalog loaded"
		);

		Ok(Self { catalog, config })
	}

	pub(crate) fn run(self) -> Result<PickOutcome> {
		let mut picker = Picker::new(&self.catalog)
			.with_settings(picker_settings(&self.config))
			.with_initial_query(self.config.initial_query.clone());
		if let Some(name) = self.config.theme.as_deref() {
			picker = picker.with_theme_name(name);
		}

		let outcome = picker.run()?;
		tracing::debug!(accepted = outcome.accepted, query = %outcome.query, "picker finished");

		Ok(outcome)
	}
}

/// Translate resolved configuration into the picker's settings structure.
fn picker_settings(config: &ResolvedConfig) -> PickerSettings {
	let mut settings = PickerSettings::default();
	if let Some(title) = &config.title {
		settings.title = title.clone();
	}
	if let Some(placeholder) = &config.placeholder {
		settings.placeholder = placeholder.clone();
	}
	settings.title_color = config.title_color;
	settings.search_color = config.search_color;
	settings.cancel_color = config.cancel_color;
	settings.show_flags = config.show_flags;
	settings.show_emojis = config.show_emojis;
	settings.show_dial_code = config.show_dial_code;

	settings
}
