use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod catalog;
mod ui;

use catalog::CatalogSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.catalog.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			ui_theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"ATLAS__UI__THEME",
				"--theme",
				"ui.theme",
			),
			ui_title_color: detect_source(
				cli.title_color.is_some(),
				self.ui.title_color.is_some(),
				"ATLAS__UI__TITLE_COLOR",
				"--title-color",
				"ui.title_color",
			),
			ui_search_color: detect_source(
				cli.search_color.is_some(),
				self.ui.search_color.is_some(),
				"ATLAS__UI__SEARCH_COLOR",
				"--search-color",
				"ui.search_color",
			),
			ui_cancel_color: detect_source(
				cli.cancel_color.is_some(),
				self.ui.cancel_color.is_some(),
				"ATLAS__UI__CANCEL_COLOR",
				"--cancel-color",
				"ui.cancel_color",
			),
		};

		let locale = self.catalog.resolve();
		let ui = self.ui.finalize(&sources)?;

		let config = ResolvedConfig {
			locale,
			title: ui.title,
			placeholder: ui.placeholder,
			initial_query: ui.initial_query,
			theme: ui.theme,
			title_color: ui.title_color,
			search_color: ui.search_color,
			cancel_color: ui.cancel_color,
			show_flags: ui.show_flags,
			show_emojis: ui.show_emojis,
			show_dial_code: ui.show_dial_code,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
