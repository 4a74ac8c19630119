//! Optional tracing setup for the `atlas` binary.
//!
//! Logging stays off unless `ATLAS_LOG` is set so nothing leaks onto the
//! alternate screen. When enabled, events go to stderr where they can be
//! redirected away from the picker.

use std::env;
use std::io;

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ATLAS_LOG";

/// Install the global tracing subscriber when `ATLAS_LOG` requests one.
pub(crate) fn initialize() {
	let Some(directives) = env::var_os(LOG_ENV) else {
		return;
	};
	let directives = directives.to_string_lossy();
	if directives.trim().is_empty() {
		return;
	}

	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::new(directives.as_ref()))
		.with_writer(io::stderr)
		.try_init();
}
