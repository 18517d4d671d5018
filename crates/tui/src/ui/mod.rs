//! UI rendering for the edit host demo.
//!
//! Rendering consumes the key map's help contract; it never resolves keys.

pub mod edit_host_view;
pub mod help_bar;

pub use edit_host_view::render_edit_host;
pub use help_bar::render_help_bar;
