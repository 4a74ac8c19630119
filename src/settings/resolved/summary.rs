use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Locale: {}", config.locale);
	println!(
		"  Theme: {}",
		config.theme.as_deref().unwrap_or("(library default)")
	);
	if let Some(title) = &config.title {
		println!("  Prompt title: {title}");
	}
	if let Some(placeholder) = &config.placeholder {
		println!("  Placeholder: {placeholder}");
	}
	if !config.initial_query.is_empty() {
		println!("  Initial query: {}", config.initial_query);
	}
	if let Some(color) = config.title_color {
		println!("  Title colour: {color:?}");
	}
	if let Some(color) = config.search_color {
		println!("  Search colour: {color:?}");
	}
	if let Some(color) = config.cancel_color {
		println!("  Cancel colour: {color:?}");
	}
	println!("  Flag column: {}", bool_to_word(config.show_flags));
	println!("  Name emojis: {}", bool_to_word(config.show_emojis));
	println!("  Dial code column: {}", bool_to_word(config.show_dial_code));
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use atlas_countries::Locale;
	use ratatui::style::Color;

	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			locale: Locale::from_tag("fr"),
			title: Some("Title".into()),
			placeholder: Some("Hint".into()),
			initial_query: "foo".into(),
			theme: Some("slate".into()),
			title_color: Some(Color::Cyan),
			search_color: None,
			cancel_color: Some(Color::Rgb(30, 41, 59)),
			show_flags: true,
			show_emojis: false,
			show_dial_code: true,
		};

		print_summary(&config);
	}
}
