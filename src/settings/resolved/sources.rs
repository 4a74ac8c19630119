use std::fmt;

/// Where a configuration value came from, for error reporting.
#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Origins recorded for the settings that can fail validation.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) ui_theme: Option<SettingSource>,
	pub(crate) ui_title_color: Option<SettingSource>,
	pub(crate) ui_search_color: Option<SettingSource>,
	pub(crate) ui_cancel_color: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.ui_theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}

	pub(crate) fn source_for_title_color(&self) -> SettingSource {
		self.ui_title_color
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.title_color"))
	}

	pub(crate) fn source_for_search_color(&self) -> SettingSource {
		self.ui_search_color
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.search_color"))
	}

	pub(crate) fn source_for_cancel_color(&self) -> SettingSource {
		self.ui_cancel_color
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.cancel_color"))
	}
}
