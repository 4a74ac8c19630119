use anyhow::{Error, Result};
use ratatui::style::Color;
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources, SettingSource};
use super::super::util::parse_color;
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) title_color: Option<String>,
	pub(super) search_color: Option<String>,
	pub(super) cancel_color: Option<String>,
	pub(super) show_flags: Option<bool>,
	pub(super) show_emojis: Option<bool>,
	pub(super) show_dial_code: Option<bool>,
}

/// UI values with colours parsed and defaults applied.
pub(super) struct UiResolution {
	pub(super) title: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) initial_query: String,
	pub(super) theme: Option<String>,
	pub(super) title_color: Option<Color>,
	pub(super) search_color: Option<Color>,
	pub(super) cancel_color: Option<Color>,
	pub(super) show_flags: bool,
	pub(super) show_emojis: bool,
	pub(super) show_dial_code: bool,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.placeholder = Some(placeholder);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(color) = cli.title_color.clone() {
			self.title_color = Some(color);
		}
		if let Some(color) = cli.search_color.clone() {
			self.search_color = Some(color);
		}
		if let Some(color) = cli.cancel_color.clone() {
			self.cancel_color = Some(color);
		}
		if let Some(value) = cli.show_flags {
			self.show_flags = Some(value);
		}
		if let Some(value) = cli.show_emojis {
			self.show_emojis = Some(value);
		}
		if let Some(value) = cli.show_dial_code {
			self.show_dial_code = Some(value);
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<UiResolution> {
		let title_color = resolve_color(
			self.title_color,
			"ui.title_color",
			sources.source_for_title_color(),
		)?;
		let search_color = resolve_color(
			self.search_color,
			"ui.search_color",
			sources.source_for_search_color(),
		)?;
		let cancel_color = resolve_color(
			self.cancel_color,
			"ui.cancel_color",
			sources.source_for_cancel_color(),
		)?;

		Ok(UiResolution {
			title: self.title,
			placeholder: self.placeholder,
			initial_query: self.initial_query.unwrap_or_default(),
			theme: self.theme,
			title_color,
			search_color,
			cancel_color,
			show_flags: self.show_flags.unwrap_or(true),
			show_emojis: self.show_emojis.unwrap_or(true),
			show_dial_code: self.show_dial_code.unwrap_or(true),
		})
	}
}

fn resolve_color(
	value: Option<String>,
	key: &'static str,
	origin: SettingSource,
) -> Result<Option<Color>> {
	let Some(raw) = value else {
		return Ok(None);
	};

	match parse_color(&raw) {
		Some(color) => Ok(Some(color)),
		None => Err(Error::new(ConfigError::invalid(
			key,
			raw,
			origin,
			"expected a named colour, 256-colour index or hex code",
		))),
	}
}
