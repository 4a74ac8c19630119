//! Minimal embedding: run the picker and print the chosen country.

use anyhow::Result;
use atlas_countries::{Catalog, Locale};
use atlas_tui::Picker;

fn main() -> Result<()> {
	let catalog = Catalog::new(Locale::detect());
	let outcome = Picker::new(&catalog).run()?;

	match outcome.selected() {
		Some(country) => println!("{} {} {}", country.flag(), country.name, country.dial_code),
		None => println!("cancelled (query: {:?})", outcome.query),
	}
	Ok(())
}
