use thiserror::Error;

/// Errors raised while loading and validating the bundled dataset.
///
/// The dataset ships inside the binary, so any of these indicates a broken
/// build rather than bad user input.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The embedded country JSON could not be parsed.
	#[error("failed to parse bundled country data: {0}")]
	Parse(#[source] serde_json::Error),

	/// The dataset parsed but contains no entries.
	#[error("bundled country data is empty")]
	Empty,

	/// An entry has a blank display name.
	#[error("country with code '{code}' has an empty name")]
	EmptyName { code: String },

	/// An entry's ISO code is not two uppercase ASCII letters.
	#[error("country '{name}' has malformed code '{code}'")]
	MalformedCode { name: String, code: String },

	/// An entry's dial code is not a `+`-prefixed digit string.
	#[error("country '{name}' has malformed dial code '{dial_code}'")]
	MalformedDialCode { name: String, dial_code: String },

	/// Two entries share the same ISO code.
	#[error("country code '{code}' appears more than once")]
	DuplicateCode { code: String },

	/// A bundled localization table could not be parsed.
	#[error("failed to parse bundled '{tag}' localization table: {source}")]
	Localization {
		tag: String,
		#[source]
		source: serde_json::Error,
	},
}
