//! Bundled country dataset for the `atlas` picker.
//!
//! The crate embeds a JSON dataset of countries (name, dial code, ISO code,
//! flag emoji) together with translation tables, and exposes it as a
//! validated [`Catalog`] with alphabetical sections and substring search.

mod catalog;
mod country;
mod error;
mod locale;
mod search;
mod sections;

pub use catalog::{Catalog, catalog};
pub use country::{Country, flag_for_code};
pub use error::CatalogError;
pub use locale::Locale;
pub use search::{filter, filter_indices, normalize_query};
pub use sections::Section;
