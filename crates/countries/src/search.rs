use crate::catalog::Catalog;
use crate::country::Country;

/// Canonical query form used for matching: trimmed and lowercased.
#[must_use]
pub fn normalize_query(query: &str) -> String {
	query.trim().to_lowercase()
}

/// Countries matching `query`, in dataset order.
///
/// Matching is a case-insensitive substring test over name, dial code, ISO
/// code, emoji and localized name. Queries that are empty or all whitespace
/// return the full list.
#[must_use]
pub fn filter<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Country> {
	let needle = normalize_query(query);
	catalog
		.countries()
		.iter()
		.filter(|country| country.matches(&needle))
		.collect()
}

/// Like [`filter`], returning positions into [`Catalog::countries`].
#[must_use]
pub fn filter_indices(catalog: &Catalog, query: &str) -> Vec<usize> {
	let needle = normalize_query(query);
	catalog
		.countries()
		.iter()
		.enumerate()
		.filter(|(_, country)| country.matches(&needle))
		.map(|(index, _)| index)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::locale::Locale;

	fn catalog() -> Catalog {
		Catalog::new(Locale::default())
	}

	#[test]
	fn blank_queries_return_the_full_list() {
		let catalog = catalog();
		assert_eq!(filter(&catalog, "").len(), catalog.len());
		assert_eq!(filter(&catalog, "   \t ").len(), catalog.len());
	}

	#[test]
	fn queries_are_case_insensitive_and_trimmed() {
		let catalog = catalog();
		let lower = filter_indices(&catalog, "france");
		assert_eq!(filter_indices(&catalog, "FRANCE"), lower);
		assert_eq!(filter_indices(&catalog, "  France "), lower);
		assert!(!lower.is_empty());
	}

	#[test]
	fn short_code_fragments_match_france() {
		let catalog = catalog();
		let results = filter(&catalog, "fr");
		assert!(results.iter().any(|country| country.name == "France"));
	}

	#[test]
	fn dial_prefix_matches_north_american_plan() {
		let catalog = catalog();
		let results = filter(&catalog, "+1");
		let names: Vec<&str> = results.iter().map(|c| c.name.as_str()).collect();
		assert!(names.contains(&"United States"));
		assert!(names.contains(&"Canada"));
	}

	#[test]
	fn every_country_is_found_by_its_own_code() {
		let catalog = catalog();
		for country in catalog.countries() {
			let results = filter(&catalog, &country.code.to_lowercase());
			assert!(
				results.iter().any(|found| found.code == country.code),
				"{} not matched by its code",
				country.code
			);
		}
	}

	#[test]
	fn unmatched_queries_come_back_empty() {
		let catalog = catalog();
		assert!(filter(&catalog, "xyzzy quux").is_empty());
	}

	#[test]
	fn localized_names_are_searchable() {
		let catalog = Catalog::new(Locale::from_tag("fr"));
		let results = filter(&catalog, "allemagne");
		assert!(results.iter().any(|country| country.code == "DE"));
	}

	#[test]
	fn filter_and_filter_indices_agree() {
		let catalog = catalog();
		let by_ref = filter(&catalog, "island");
		let by_index = filter_indices(&catalog, "island");
		assert_eq!(by_ref.len(), by_index.len());
		for (country, index) in by_ref.iter().zip(by_index) {
			assert_eq!(country.code, catalog.countries()[index].code);
		}
	}
}
