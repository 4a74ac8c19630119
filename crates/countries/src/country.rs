use serde::Deserialize;

/// A single entry in the bundled country dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
	/// English display name, also the key into the localization tables.
	pub name: String,
	/// International dialing prefix, including the leading `+`.
	pub dial_code: String,
	/// Two-letter uppercase ISO 3166-1 code.
	pub code: String,
	/// Flag emoji shipped with the dataset.
	pub emoji: String,
	localized_name: String,
	search_text: String,
}

/// Record shape of `data/countries.json`, before validation.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawCountry {
	pub name: String,
	pub dial_code: String,
	pub code: String,
	pub emoji: String,
}

impl Country {
	pub(crate) fn from_raw(raw: RawCountry, localized_name: String) -> Self {
		let search_text = format!(
			"{}{}{}{}{}",
			raw.name.to_lowercase(),
			raw.dial_code,
			raw.code.to_lowercase(),
			raw.emoji,
			localized_name.to_lowercase(),
		);
		Self {
			name: raw.name,
			dial_code: raw.dial_code,
			code: raw.code,
			emoji: raw.emoji,
			localized_name,
			search_text,
		}
	}

	/// Name translated for the owning catalog's locale.
	///
	/// Falls back to [`Country::name`] when no translation is bundled.
	#[must_use]
	pub fn localized_name(&self) -> &str {
		&self.localized_name
	}

	/// Flag glyph derived from the ISO code via Unicode regional indicators.
	///
	/// Equal to [`Country::emoji`] for every valid dataset entry.
	#[must_use]
	pub fn flag(&self) -> String {
		flag_for_code(&self.code)
	}

	/// Whether this entry matches a query normalized with
	/// [`normalize_query`](crate::normalize_query).
	///
	/// The haystack is the concatenation of the lowercased name, the dial
	/// code, the lowercased ISO code, the emoji and the lowercased localized
	/// name. An empty query matches everything.
	#[must_use]
	pub fn matches(&self, normalized_query: &str) -> bool {
		self.search_text.contains(normalized_query)
	}

	pub(crate) fn search_text(&self) -> &str {
		&self.search_text
	}
}

/// Map an ISO country code to its regional-indicator flag glyph.
///
/// Letters are uppercased before mapping; anything else passes through
/// unchanged.
#[must_use]
pub fn flag_for_code(code: &str) -> String {
	code.chars()
		.map(|ch| {
			let upper = ch.to_ascii_uppercase();
			if upper.is_ascii_uppercase() {
				char::from_u32(0x1F1E6 + (upper as u32 - 'A' as u32)).unwrap_or(ch)
			} else {
				ch
			}
		})
		.collect()
}
