use atlas_tui::theme;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(name) = config.theme.as_deref()
		&& theme::by_name(name).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			name,
			sources.source_for_theme(),
			format!("expected one of: {}", theme::names().join(", ")),
		));
	}

	Ok(())
}
