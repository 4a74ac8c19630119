mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::PickerWorkflow;

fn main() -> Result<ExitCode> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in atlas_tui::theme::names() {
			println!("{name}");
		}
		return Ok(ExitCode::SUCCESS);
	}

	if cli.list_locales {
		for tag in atlas_countries::Locale::available() {
			println!("{tag}");
		}
		return Ok(ExitCode::SUCCESS);
	}

	logging::initialize();

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_picker(cli.output, resolved)
}

/// Execute the picker workflow and print output in the chosen format.
///
/// A cancelled pick maps to a failure exit code so scripts can branch
/// without parsing output.
fn run_picker(format: OutputFormat, settings: ResolvedConfig) -> Result<ExitCode> {
	let workflow = PickerWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(if outcome.accepted {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	})
}
