use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let mut cli = CliArgs::parse_from(["atlas"]);
	cli.locale = Some("fr".into());
	cli.title = Some("Pick one".into());
	cli.placeholder = Some("Type here".into());
	cli.initial_query = Some("fra".into());
	cli.theme = Some("light".into());
	cli.title_color = Some("#fff".into());
	cli.search_color = Some("cyan".into());
	cli.cancel_color = Some("red".into());
	cli.show_flags = Some(false);
	cli.show_emojis = Some(false);
	cli.show_dial_code = Some(false);

	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	assert_eq!(config.catalog.locale, cli.locale);
	assert_eq!(config.ui.title, cli.title);
	assert_eq!(config.ui.placeholder, cli.placeholder);
	assert_eq!(config.ui.initial_query, cli.initial_query);
	assert_eq!(config.ui.theme, cli.theme);
	assert_eq!(config.ui.title_color, cli.title_color);
	assert_eq!(config.ui.show_flags, cli.show_flags);
	assert_eq!(config.ui.show_emojis, cli.show_emojis);
	assert_eq!(config.ui.show_dial_code, cli.show_dial_code);
}

#[test]
fn resolve_applies_defaults() {
	let cli = CliArgs::parse_from(["atlas", "--locale", "de", "--theme", "slate"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).expect("resolves");

	assert_eq!(resolved.locale.tag(), "de");
	assert_eq!(resolved.theme.as_deref(), Some("slate"));
	assert!(resolved.title.is_none());
	assert!(resolved.initial_query.is_empty());
	assert!(resolved.show_flags);
	assert!(resolved.show_emojis);
	assert!(resolved.show_dial_code);
}

#[test]
fn unknown_theme_names_are_rejected_with_their_origin() {
	let cli = CliArgs::parse_from(["atlas", "--theme", "neon"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).expect_err("unknown theme");
	let message = err.to_string();
	assert!(message.contains("ui.theme"));
	assert!(message.contains("CLI flag"));
	assert!(message.contains("neon"));
}

#[test]
fn invalid_colors_are_rejected_with_their_origin() {
	let cli = CliArgs::parse_from(["atlas", "--title-color", "chartreuse-ish"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).expect_err("bad colour");
	let message = err.to_string();
	assert!(message.contains("ui.title_color"));
	assert!(message.contains("chartreuse-ish"));
	assert!(message.contains("CLI flag"));
}
