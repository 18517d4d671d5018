//! Single-line help bar widget.
//!
//! Draws a provider's short help into one terminal row, truncating with an
//! ellipsis when the area is too narrow.

use ratatui::{Frame, layout::Rect, widgets::Paragraph};

use crate::input::help::short_help_line;
use crate::input::keymap::HelpProvider;

/// Render short help into `area`.
pub fn render_help_bar(f: &mut Frame, area: Rect, provider: &impl HelpProvider) {
    let line = short_help_line(provider, area.width as usize);
    f.render_widget(Paragraph::new(line), area);
}
