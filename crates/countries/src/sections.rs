use std::collections::BTreeMap;

use crate::country::Country;

/// A run of countries sharing the first letter of their English name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
	title: String,
	indices: Vec<usize>,
}

impl Section {
	/// Uppercased first letter shared by the section's countries.
	#[must_use]
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Positions of the section's countries within the catalog's flat list.
	#[must_use]
	pub fn indices(&self) -> &[usize] {
		&self.indices
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.indices.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.indices.is_empty()
	}
}

/// Partition `countries` into alphabetical sections.
///
/// Section titles come out sorted; within a section the dataset order is
/// preserved. Every country lands in exactly one section, so concatenating
/// the sections reproduces the flat list.
pub(crate) fn partition(countries: &[Country]) -> Vec<Section> {
	let mut groups: BTreeMap<char, Vec<usize>> = BTreeMap::new();
	for (index, country) in countries.iter().enumerate() {
		groups
			.entry(section_key(&country.name))
			.or_default()
			.push(index);
	}
	groups
		.into_iter()
		.map(|(key, indices)| Section {
			title: key.to_string(),
			indices,
		})
		.collect()
}

fn section_key(name: &str) -> char {
	name.chars()
		.next()
		.map(|ch| ch.to_uppercase().next().unwrap_or(ch))
		.unwrap_or('#')
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::country::RawCountry;

	fn country(name: &str, code: &str) -> Country {
		let raw = RawCountry {
			name: name.to_string(),
			dial_code: "+1".to_string(),
			code: code.to_string(),
			emoji: String::new(),
		};
		Country::from_raw(raw, name.to_string())
	}

	#[test]
	fn titles_are_sorted_and_uppercased() {
		let countries = vec![
			country("belgium", "BE"),
			country("Austria", "AT"),
			country("Brazil", "BR"),
		];
		let sections = partition(&countries);
		let titles: Vec<&str> = sections.iter().map(Section::title).collect();
		assert_eq!(titles, vec!["A", "B"]);
	}

	#[test]
	fn partition_is_lossless_and_keeps_dataset_order() {
		let countries = vec![
			country("Chile", "CL"),
			country("Austria", "AT"),
			country("China", "CN"),
			country("Australia", "AU"),
		];
		let sections = partition(&countries);

		let mut seen: Vec<usize> = Vec::new();
		for section in &sections {
			let indices = section.indices();
			assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
			seen.extend_from_slice(indices);
		}
		seen.sort_unstable();
		assert_eq!(seen, (0..countries.len()).collect::<Vec<_>>());
	}

	#[test]
	fn sections_group_by_first_letter() {
		let countries = vec![country("Denmark", "DK"), country("Djibouti", "DJ")];
		let sections = partition(&countries);
		assert_eq!(sections.len(), 1);
		assert_eq!(sections[0].title(), "D");
		assert_eq!(sections[0].len(), 2);
	}
}
