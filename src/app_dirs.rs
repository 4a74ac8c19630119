//! Resolve the configuration directory for `atlas`.
//!
//! An `ATLAS_CONFIG_DIR` override always wins; otherwise the platform
//! location reported by the `directories` crate is used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "atlas";
const APPLICATION: &str = "atlas";

const CONFIG_DIR_ENV: &str = "ATLAS_CONFIG_DIR";

/// Resolve an override directory from an environment variable.
///
/// An empty value counts as unset so shell defaults behave as expected.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the configuration directory used to persist user preferences.
pub(crate) fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	let dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for atlas"))?;
	Ok(dirs.config_local_dir().to_path_buf())
}
