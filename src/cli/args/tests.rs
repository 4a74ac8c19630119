use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["atlas"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.config.is_empty());
	assert!(!parsed.no_config);
	assert!(parsed.show_flags.is_none());
}

#[test]
fn boolish_flags_accept_words_and_digits() {
	let parsed = CliArgs::parse_from([
		"atlas",
		"--flags",
		"no",
		"--emojis",
		"true",
		"--dial-code",
		"0",
	]);
	assert_eq!(parsed.show_flags, Some(false));
	assert_eq!(parsed.show_emojis, Some(true));
	assert_eq!(parsed.show_dial_code, Some(false));
}

#[test]
fn output_format_parses_json() {
	let parsed = CliArgs::parse_from(["atlas", "--output", "json"]);
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn config_files_accumulate() {
	let parsed = CliArgs::parse_from(["atlas", "-c", "a.toml", "--config", "b.toml"]);
	let names: Vec<_> = parsed.config.iter().map(|path| path.display().to_string()).collect();
	assert_eq!(names, vec!["a.toml", "b.toml"]);
}
