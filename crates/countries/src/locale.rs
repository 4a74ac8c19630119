use std::collections::HashMap;
use std::env;
use std::fmt;

use crate::error::CatalogError;

const FR_TABLE: &str = include_str!("../data/l10n/fr.json");
const DE_TABLE: &str = include_str!("../data/l10n/de.json");

/// Language used to localize country names.
///
/// Only the primary language subtag matters: `de_DE.UTF-8`, `de-AT` and `DE`
/// all resolve to the bundled German table. Tags without a bundled table fall
/// back to the English names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
	tag: String,
}

impl Locale {
	/// Build a locale from a language tag such as `"fr"` or `"de_DE.UTF-8"`.
	#[must_use]
	pub fn from_tag(tag: impl AsRef<str>) -> Self {
		Self {
			tag: language_subtag(tag.as_ref()),
		}
	}

	/// Locale taken from `LC_ALL`, `LC_MESSAGES` or `LANG`, in that order.
	///
	/// The `C` and `POSIX` locales, unset variables and empty values all fall
	/// back to English.
	#[must_use]
	pub fn detect() -> Self {
		for key in ["LC_ALL", "LC_MESSAGES", "LANG"] {
			if let Some(value) = env::var_os(key) {
				let tag = language_subtag(&value.to_string_lossy());
				if !tag.is_empty() && tag != "c" && tag != "posix" {
					return Self { tag };
				}
			}
		}
		Self::default()
	}

	/// Primary language subtag, e.g. `"en"` or `"fr"`.
	#[must_use]
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Language tags shipped with a full translation table.
	///
	/// `en` is listed even though it has no table: the dataset itself is the
	/// English rendition.
	#[must_use]
	pub fn available() -> &'static [&'static str] {
		&["de", "en", "fr"]
	}

	pub(crate) fn load_table(&self) -> Result<HashMap<String, String>, CatalogError> {
		let raw = match self.tag.as_str() {
			"de" => DE_TABLE,
			"fr" => FR_TABLE,
			_ => return Ok(HashMap::new()),
		};
		serde_json::from_str(raw).map_err(|source| CatalogError::Localization {
			tag: self.tag.clone(),
			source,
		})
	}
}

impl Default for Locale {
	/// English, the language of the base dataset.
	fn default() -> Self {
		Self {
			tag: "en".to_string(),
		}
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.tag)
	}
}

fn language_subtag(value: &str) -> String {
	value
		.split(['_', '-', '.', '@'])
		.next()
		.unwrap_or_default()
		.trim()
		.to_lowercase()
}
