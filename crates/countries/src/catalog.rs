use std::collections::HashSet;
use std::sync::OnceLock;

use crate::country::{Country, RawCountry};
use crate::error::CatalogError;
use crate::locale::Locale;
use crate::sections::{self, Section};

const COUNTRY_DATA: &str = include_str!("../data/countries.json");

/// Immutable, validated view of the bundled country dataset.
///
/// Construction parses the embedded JSON once, resolves localized names for
/// the requested locale and precomputes the alphabetical sections.
#[derive(Debug, Clone)]
pub struct Catalog {
	locale: Locale,
	countries: Vec<Country>,
	sections: Vec<Section>,
}

impl Catalog {
	/// Load the bundled dataset with names localized for `locale`.
	///
	/// # Errors
	/// Returns a [`CatalogError`] when the embedded data fails to parse or
	/// violates a dataset invariant.
	pub fn try_new(locale: Locale) -> Result<Self, CatalogError> {
		let records: Vec<RawCountry> =
			serde_json::from_str(COUNTRY_DATA).map_err(CatalogError::Parse)?;
		Self::from_records(records, locale)
	}

	/// Load the bundled dataset, aborting on a malformed bundle.
	///
	/// # Panics
	/// Panics when the embedded dataset is invalid, which can only happen
	/// with a broken build of this crate.
	#[must_use]
	pub fn new(locale: Locale) -> Self {
		match Self::try_new(locale) {
			Ok(catalog) => catalog,
			Err(error) => panic!("bundled country dataset is unusable: {error}"),
		}
	}

	pub(crate) fn from_records(
		records: Vec<RawCountry>,
		locale: Locale,
	) -> Result<Self, CatalogError> {
		if records.is_empty() {
			return Err(CatalogError::Empty);
		}
		validate(&records)?;

		let table = locale.load_table()?;
		let countries: Vec<Country> = records
			.into_iter()
			.map(|raw| {
				let localized = table
					.get(&raw.name)
					.cloned()
					.unwrap_or_else(|| raw.name.clone());
				Country::from_raw(raw, localized)
			})
			.collect();
		let sections = sections::partition(&countries);

		Ok(Self {
			locale,
			countries,
			sections,
		})
	}

	/// Countries in dataset order.
	#[must_use]
	pub fn countries(&self) -> &[Country] {
		&self.countries
	}

	/// Number of countries in the dataset.
	#[must_use]
	pub fn len(&self) -> usize {
		self.countries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.countries.is_empty()
	}

	/// Alphabetical sections over [`Catalog::countries`].
	#[must_use]
	pub fn sections(&self) -> &[Section] {
		&self.sections
	}

	/// Section titles in display order, one per populated letter.
	#[must_use]
	pub fn section_titles(&self) -> Vec<&str> {
		self.sections.iter().map(Section::title).collect()
	}

	/// Countries belonging to `section`, in dataset order.
	pub fn countries_in<'a>(&'a self, section: &'a Section) -> impl Iterator<Item = &'a Country> {
		section.indices().iter().map(|&index| &self.countries[index])
	}

	/// Look up a country by ISO code, ignoring case and surrounding space.
	#[must_use]
	pub fn by_code(&self, code: &str) -> Option<&Country> {
		let code = code.trim();
		self.countries
			.iter()
			.find(|country| country.code.eq_ignore_ascii_case(code))
	}

	/// Locale used to resolve localized names.
	#[must_use]
	pub fn locale(&self) -> &Locale {
		&self.locale
	}
}

fn validate(records: &[RawCountry]) -> Result<(), CatalogError> {
	let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
	for record in records {
		if record.name.trim().is_empty() {
			return Err(CatalogError::EmptyName {
				code: record.code.clone(),
			});
		}
		let code_ok =
			record.code.len() == 2 && record.code.chars().all(|ch| ch.is_ascii_uppercase());
		if !code_ok {
			return Err(CatalogError::MalformedCode {
				name: record.name.clone(),
				code: record.code.clone(),
			});
		}
		let dial_ok = record.dial_code.starts_with('+')
			&& record.dial_code.len() > 1
			&& record.dial_code[1..].chars().all(|ch| ch.is_ascii_digit());
		if !dial_ok {
			return Err(CatalogError::MalformedDialCode {
				name: record.name.clone(),
				dial_code: record.dial_code.clone(),
			});
		}
		if !seen.insert(record.code.as_str()) {
			return Err(CatalogError::DuplicateCode {
				code: record.code.clone(),
			});
		}
	}
	Ok(())
}

/// Shared catalog for the detected locale, loaded on first use.
///
/// # Panics
/// Panics when the bundled dataset is malformed.
#[must_use]
pub fn catalog() -> &'static Catalog {
	static CATALOG: OnceLock<Catalog> = OnceLock::new();
	CATALOG.get_or_init(|| Catalog::new(Locale::detect()))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(name: &str, dial_code: &str, code: &str) -> RawCountry {
		RawCountry {
			name: name.to_string(),
			dial_code: dial_code.to_string(),
			code: code.to_string(),
			emoji: String::new(),
		}
	}

	#[test]
	fn bundled_dataset_loads_and_validates() {
		let catalog = Catalog::try_new(Locale::default()).expect("bundled dataset");
		assert_eq!(catalog.len(), 246);
		assert!(!catalog.is_empty());
	}

	#[test]
	fn sections_partition_the_flat_list() {
		let catalog = Catalog::new(Locale::default());
		let mut flattened: Vec<usize> = Vec::new();
		for section in catalog.sections() {
			assert_eq!(section.title().chars().count(), 1);
			flattened.extend_from_slice(section.indices());
		}
		assert_eq!(flattened, (0..catalog.len()).collect::<Vec<_>>());

		let titles = catalog.section_titles();
		let mut sorted = titles.clone();
		sorted.sort_unstable();
		sorted.dedup();
		assert_eq!(titles, sorted);
	}

	#[test]
	fn by_code_ignores_case() {
		let catalog = Catalog::new(Locale::default());
		let france = catalog.by_code("fr").expect("France by lowercase code");
		assert_eq!(france.name, "France");
		assert_eq!(catalog.by_code(" FR ").map(|c| c.name.as_str()), Some("France"));
		assert!(catalog.by_code("zz").is_none());
	}

	#[test]
	fn localized_names_resolve_through_the_bundled_table() {
		let catalog = Catalog::new(Locale::from_tag("de"));
		let germany = catalog.by_code("DE").expect("Germany");
		assert_eq!(germany.localized_name(), "Deutschland");
	}

	#[test]
	fn unknown_locales_fall_back_to_english_names() {
		let catalog = Catalog::new(Locale::from_tag("zz"));
		assert!(
			catalog
				.countries()
				.iter()
				.all(|country| country.localized_name() == country.name)
		);
	}

	#[test]
	fn flag_derivation_agrees_with_bundled_emoji() {
		let catalog = Catalog::new(Locale::default());
		for country in catalog.countries() {
			assert_eq!(country.flag(), country.emoji, "mismatch for {}", country.code);
		}
	}

	#[test]
	fn empty_dataset_is_rejected() {
		let result = Catalog::from_records(Vec::new(), Locale::default());
		assert!(matches!(result, Err(CatalogError::Empty)));
	}

	#[test]
	fn duplicate_codes_are_rejected() {
		let records = vec![record("Alpha", "+1", "AA"), record("Beta", "+2", "AA")];
		let result = Catalog::from_records(records, Locale::default());
		assert!(matches!(result, Err(CatalogError::DuplicateCode { code }) if code == "AA"));
	}

	#[test]
	fn malformed_codes_are_rejected() {
		for bad in ["A", "AAA", "aa", "A1"] {
			let records = vec![record("Alpha", "+1", bad)];
			let result = Catalog::from_records(records, Locale::default());
			assert!(
				matches!(result, Err(CatalogError::MalformedCode { .. })),
				"code {bad:?} should be rejected"
			);
		}
	}

	#[test]
	fn malformed_dial_codes_are_rejected() {
		for bad in ["1", "+", "+1a", ""] {
			let records = vec![record("Alpha", bad, "AA")];
			let result = Catalog::from_records(records, Locale::default());
			assert!(
				matches!(result, Err(CatalogError::MalformedDialCode { .. })),
				"dial code {bad:?} should be rejected"
			);
		}
	}

	#[test]
	fn blank_names_are_rejected() {
		let records = vec![record("  ", "+1", "AA")];
		let result = Catalog::from_records(records, Locale::default());
		assert!(matches!(result, Err(CatalogError::EmptyName { .. })));
	}

	#[test]
	fn global_catalog_is_shared() {
		assert!(std::ptr::eq(catalog(), catalog()));
	}
}
