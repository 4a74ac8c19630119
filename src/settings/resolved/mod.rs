use atlas_countries::Locale;
use ratatui::style::Color;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub locale: Locale,
	pub title: Option<String>,
	pub placeholder: Option<String>,
	pub initial_query: String,
	pub theme: Option<String>,
	pub title_color: Option<Color>,
	pub search_color: Option<Color>,
	pub cancel_color: Option<Color>,
	pub show_flags: bool,
	pub show_emojis: bool,
	pub show_dial_code: bool,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
