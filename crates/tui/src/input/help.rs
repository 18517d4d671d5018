//! Help rendering from key map help listings.
//!
//! Responsibilities:
//! - Render short help as plain text or as a width-limited styled line.
//! - Render full help groups as aligned columns.
//!
//! Does NOT handle:
//! - Owning keybinding definitions (delegated to keymap).
//! - Drawing to a terminal frame (see `ui::help_bar`).
//!
//! Invariants:
//! - Output order follows the provider's order exactly.
//! - Short help lines never exceed the requested width.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::input::keymap::HelpProvider;

/// Separator between short help entries.
pub const SHORT_SEPARATOR: &str = " • ";

/// Separator between full help columns.
pub const COLUMN_SEPARATOR: &str = "    ";

/// Marker appended when short help is truncated.
pub const ELLIPSIS: &str = "…";

fn key_style() -> Style {
    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)
}

fn description_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn separator_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Plain-text short help, e.g. `↑ up • ↓ down • ctrl+s save • esc discard`.
pub fn short_help_text(provider: &impl HelpProvider) -> String {
    provider
        .short_help()
        .iter()
        .map(|entry| format!("{} {}", entry.key, entry.description))
        .collect::<Vec<_>>()
        .join(SHORT_SEPARATOR)
}

/// Styled short help that fits in `max_width` columns.
///
/// Entries that do not fit are dropped and replaced by a trailing ` …`
/// when there is room for it.
pub fn short_help_line(provider: &impl HelpProvider, max_width: usize) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut width = 0usize;

    for (index, entry) in provider.short_help().iter().enumerate() {
        let mut item: Vec<Span<'static>> = Vec::with_capacity(4);
        if index > 0 {
            item.push(Span::styled(SHORT_SEPARATOR, separator_style()));
        }
        item.push(Span::styled(entry.key.to_string(), key_style()));
        item.push(Span::raw(" "));
        item.push(Span::styled(
            entry.description.to_string(),
            description_style(),
        ));

        let item_width: usize = item.iter().map(Span::width).sum();
        if width + item_width > max_width {
            let tail = Span::styled(format!(" {}", ELLIPSIS), separator_style());
            if width + tail.width() <= max_width {
                spans.push(tail);
            }
            break;
        }

        width += item_width;
        spans.extend(item);
    }

    Line::from(spans)
}

/// Full help rendered as aligned columns, one column per group.
///
/// Returns no lines when the provider declares no groups.
pub fn full_help_lines(provider: &impl HelpProvider) -> Vec<Line<'static>> {
    let groups = provider.full_help();
    let rows = groups.iter().map(Vec::len).max().unwrap_or(0);

    let columns: Vec<(usize, usize)> = groups
        .iter()
        .map(|group| {
            let key_width = group
                .iter()
                .map(|e| e.key.chars().count())
                .max()
                .unwrap_or(0);
            let description_width = group
                .iter()
                .map(|e| e.description.chars().count())
                .max()
                .unwrap_or(0);
            (key_width, description_width)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (column, group) in groups.iter().enumerate() {
            let (key_width, description_width) = columns[column];
            let is_last = column + 1 == groups.len();
            let cell = group.get(row);
            if column > 0 && (cell.is_some() || !is_last) {
                spans.push(Span::raw(COLUMN_SEPARATOR));
            }
            match cell {
                Some(entry) => {
                    let key_padding = key_width - entry.key.chars().count();
                    spans.push(Span::styled(
                        format!("{}{}", entry.key, " ".repeat(key_padding)),
                        key_style(),
                    ));
                    spans.push(Span::raw(" "));
                    let description = if is_last {
                        entry.description.to_string()
                    } else {
                        let padding = description_width - entry.description.chars().count();
                        format!("{}{}", entry.description, " ".repeat(padding))
                    };
                    spans.push(Span::styled(description, description_style()));
                }
                None if !is_last => {
                    spans.push(Span::raw(" ".repeat(key_width + 1 + description_width)));
                }
                None => {}
            }
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Plain-text help for terminals without styling.
///
/// Uses full help when groups are declared, short help otherwise.
pub fn help_text(provider: &impl HelpProvider) -> String {
    let lines = full_help_lines(provider);
    if lines.is_empty() {
        return short_help_text(provider);
    }
    lines
        .iter()
        .map(line_text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Concatenated span contents of a line.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keymap::{HelpEntry, edit_host_keymap};

    struct Grouped;

    impl HelpProvider for Grouped {
        fn short_help(&self) -> Vec<HelpEntry<'_>> {
            vec![HelpEntry {
                key: "?",
                description: "help",
            }]
        }

        fn full_help(&self) -> Vec<Vec<HelpEntry<'_>>> {
            vec![
                vec![
                    HelpEntry {
                        key: "↑",
                        description: "up",
                    },
                    HelpEntry {
                        key: "ctrl+s",
                        description: "save",
                    },
                ],
                vec![HelpEntry {
                    key: "esc",
                    description: "discard",
                }],
            ]
        }
    }

    #[test]
    fn test_short_help_text() {
        let map = edit_host_keymap().unwrap();
        insta::assert_snapshot!(short_help_text(&map), @"↑ up • ↓ down • ctrl+s save • esc discard");
    }

    #[test]
    fn test_short_help_line_fits_wide_area() {
        let map = edit_host_keymap().unwrap();
        let line = short_help_line(&map, 80);
        assert_eq!(line_text(&line), short_help_text(&map));
    }

    #[test]
    fn test_short_help_line_truncates_with_ellipsis() {
        let map = edit_host_keymap().unwrap();
        // "↑ up • ↓ down" is 13 columns; the next entry needs 14 more.
        let line = short_help_line(&map, 20);
        assert_eq!(line_text(&line), "↑ up • ↓ down …");
        assert!(line.width() <= 20);
    }

    #[test]
    fn test_short_help_line_without_room_for_ellipsis() {
        let map = edit_host_keymap().unwrap();
        let line = short_help_line(&map, 14);
        assert_eq!(line_text(&line), "↑ up • ↓ down");
    }

    #[test]
    fn test_short_help_line_zero_width() {
        let map = edit_host_keymap().unwrap();
        assert_eq!(short_help_line(&map, 0).width(), 0);
    }

    #[test]
    fn test_full_help_lines_empty_for_edit_host() {
        let map = edit_host_keymap().unwrap();
        assert!(full_help_lines(&map).is_empty());
        assert_eq!(help_text(&map), short_help_text(&map));
    }

    #[test]
    fn test_full_help_columns_are_aligned() {
        let lines: Vec<String> = full_help_lines(&Grouped).iter().map(line_text).collect();
        assert_eq!(lines, ["↑      up      esc discard", "ctrl+s save"]);
    }
}
