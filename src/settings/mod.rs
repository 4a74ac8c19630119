//! Configuration loading and resolution utilities.
//!
//! The pipeline is split into small submodules: `sources` layers config
//! files and environment variables, `raw` mirrors the on-disk shape, and
//! `resolved` holds the validated result. `load` is the entry point and
//! returns the [`ResolvedConfig`] consumed by the application.

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
