//! Edit host view used by the interactive demo.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::edit_host::{EditHost, EditOutcome};
use crate::ui::help_bar::render_help_bar;

/// Draw the field list, the last resolved key, and the help bar.
pub fn render_edit_host(f: &mut Frame, host: &EditHost) {
    let [fields_area, status_area, help_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(f.area());

    let fields: Vec<Line> = (0..host.field_count())
        .map(|index| {
            if index == host.focus() {
                Line::from(Span::styled(
                    format!("> Field {}", index + 1),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  Field {}", index + 1))
            }
        })
        .collect();
    f.render_widget(
        Paragraph::new(fields).block(Block::default().borders(Borders::ALL).title("Edit")),
        fields_area,
    );

    f.render_widget(Paragraph::new(status_text(host)), status_area);
    render_help_bar(f, help_area, host.keymap());
}

fn status_text(host: &EditHost) -> String {
    match (host.outcome(), host.last_key(), host.last_action()) {
        (EditOutcome::Saved, _, _) => "Saved".to_string(),
        (EditOutcome::Discarded, _, _) => "Discarded".to_string(),
        (EditOutcome::Editing, Some(key), Some(action)) => format!("{} -> {}", key, action),
        (EditOutcome::Editing, Some(key), None) => format!("{}: no action", key),
        (EditOutcome::Editing, None, _) => "Press a key (ctrl+c to quit)".to_string(),
    }
}
