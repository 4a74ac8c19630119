use atlas_countries::Locale;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Catalog related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) locale: Option<String>,
}

impl CatalogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(locale) = cli.locale.clone() {
			self.locale = Some(locale);
		}
	}

	/// Pick the locale, falling back to environment detection when unset.
	pub(super) fn resolve(self) -> Locale {
		match self.locale.as_deref().map(str::trim) {
			Some(tag) if !tag.is_empty() => Locale::from_tag(tag),
			_ => Locale::detect(),
		}
	}
}
