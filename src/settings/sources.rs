use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};

use crate::app_dirs;
use crate::cli::CliArgs;

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("atlas")
			.separator("__")
			.try_parsing(true)
			.list_separator(","),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".atlas.toml"));
		files.push(current_dir.join("atlas.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".atlas.toml")));
		assert!(files.iter().any(|path| path.ends_with("atlas.toml")));
	}

	#[test]
	fn explicit_config_files_are_required() {
		let cli = CliArgs::parse_from([
			"atlas",
			"--no-config",
			"--config",
			"/nonexistent/atlas.toml",
		]);
		assert!(build_config(&cli).is_err());
	}

	#[test]
	fn values_flow_from_explicit_files() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("atlas.toml");
		std::fs::write(&path, "[ui]\ntheme = \"light\"\n").expect("write config");

		let cli = CliArgs::parse_from([
			"atlas",
			"--no-config",
			"--config",
			path.to_str().expect("utf-8 path"),
		]);
		let config = build_config(&cli).expect("build");
		let theme: String = config.get("ui.theme").expect("theme value");
		assert_eq!(theme, "light");
	}
}
