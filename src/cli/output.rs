use anyhow::Result;
use atlas_tui::PickOutcome;
use serde_json::json;

/// Print a plain-text representation of the picker outcome.
pub(crate) fn print_plain(outcome: &PickOutcome) {
	if !outcome.accepted {
		println!("Selection cancelled (query: '{}')", outcome.query);
		return;
	}

	match outcome.selected() {
		Some(country) => println!("{}", country.code),
		None => println!("No selection"),
	}
}

/// Format the picker outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickOutcome) -> Result<String> {
	let selection = match outcome.selected() {
		Some(country) => json!({
			"name": country.name,
			"localized_name": country.localized_name(),
			"code": country.code,
			"dial_code": country.dial_code,
			"emoji": country.emoji,
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the picker outcome.
pub(crate) fn print_json(outcome: &PickOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
