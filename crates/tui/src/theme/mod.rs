//! Built-in color themes for the picker.

mod builtins;
mod types;

pub use builtins::{LIGHT, SLATE, SOLARIZED};
pub use types::{Theme, ThemeDefinition};

/// Theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	builtins::SLATE
}

/// Names of every built-in theme, in display order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtins::BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

/// Look up a built-in theme by name, ignoring case and surrounding space.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	builtins::BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.name.eq_ignore_ascii_case(name))
		.map(|definition| definition.theme)
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_ignores_case_and_space() {
		assert!(by_name(" Solarized ").is_some());
		assert!(by_name("LIGHT").is_some());
		assert!(by_name("midnight").is_none());
	}

	#[test]
	fn names_cover_every_builtin() {
		let names = names();
		assert_eq!(names, vec!["light", "slate", "solarized"]);
	}

	#[test]
	fn default_is_slate() {
		let theme = default_theme();
		assert_eq!(theme.header, SLATE.header);
		assert_eq!(theme.row_highlight, SLATE.row_highlight);
	}
}
