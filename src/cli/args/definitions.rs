use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `atlas` binary.
#[derive(Parser, Debug)]
#[command(
	name = "atlas",
	version,
	long_version = long_version(),
	about = "Interactive country picker for the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "ATLAS_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the input prompt title (default: Select a country)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Set the placeholder shown while the input is empty (default: Search)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: library theme)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'L',
		long,
		value_name = "TAG",
		help = "Language for country names, e.g. fr or de_DE (default: detected from the environment)"
	)]
	pub(crate) locale: Option<String>,
	#[arg(
		long = "title-color",
		value_name = "COLOR",
		help = "Override the prompt title colour (default: theme value)"
	)]
	pub(crate) title_color: Option<String>,
	#[arg(
		long = "search-color",
		value_name = "COLOR",
		help = "Override the search input colour (default: theme value)"
	)]
	pub(crate) search_color: Option<String>,
	#[arg(
		long = "cancel-color",
		value_name = "COLOR",
		help = "Override the footer and empty-state colour (default: theme value)"
	)]
	pub(crate) cancel_color: Option<String>,
	#[arg(
		long = "flags",
		value_name = "BOOL",
		value_parser = BoolishValueParser::new(),
		help = "Show the flag column (default: enabled)"
	)]
	pub(crate) show_flags: Option<bool>,
	#[arg(
		long = "emojis",
		value_name = "BOOL",
		value_parser = BoolishValueParser::new(),
		help = "Append the flag emoji to country names (default: enabled)"
	)]
	pub(crate) show_emojis: Option<bool>,
	#[arg(
		long = "dial-code",
		value_name = "BOOL",
		value_parser = BoolishValueParser::new(),
		help = "Show the dial code column (default: enabled)"
	)]
	pub(crate) show_dial_code: Option<bool>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "list-locales",
		help = "List language tags with bundled translations and exit (default: disabled)"
	)]
	pub(crate) list_locales: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
