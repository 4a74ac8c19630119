//! Interactive terminal UI for picking a country.
//!
//! This crate contains the full TUI application including the builder, event
//! loop, rendering pipeline, state management, and the reusable widgets and
//! theme definitions that power the picker.

mod actions;
mod builder;
pub mod components;
pub mod input;
mod outcome;
mod render;
mod runtime;
mod settings;
mod state;
pub mod theme;


pub use builder::Picker;
pub use input::SearchInput;
pub use outcome::PickOutcome;
pub use settings::PickerSettings;
pub use state::App;
pub use theme::{Theme, default_theme};
