//! UI building blocks shared across rendering and state modules.

/// Alphabetical section strip.
pub mod index;
/// Input prompt rendering and the match count.
pub mod prompt;
/// Table row construction and highlighting.
pub(crate) mod rows;
/// Scrollbar for viewports.
pub mod scrollbar;
/// Table rendering and configuration.
pub mod tables;

pub use index::render_section_index;
pub use prompt::{InputContext, render_input};
pub use scrollbar::{point_in_rect, render_scrollbar};
pub use tables::render_table;
