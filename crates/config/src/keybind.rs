//! Key string parsing, canonical normalization, and override validation.
//!
//! Responsibilities:
//! - Parse human-readable key strings into structured representations.
//! - Render parsed keys into the canonical identifier form used for dispatch.
//! - Validate keybinding overrides for conflicts and invalid syntax.
//!
//! Does NOT handle:
//! - Integration with crossterm (that's in the TUI crate).
//! - Runtime key event matching.
//!
//! Invariants:
//! - Canonical identifiers are `[ctrl+][alt+][shift+]<key>`.
//! - Modifier and named-key spelling is case-insensitive; character keys are not.
//! - `Shift+Tab` and `BackTab` share the canonical identifier `shift+tab`.
//! - Shift only combines with letters and named keys; symbols are written as
//!   the glyph the terminal reports (`!`, not `shift+1`).

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use thiserror::Error;

use crate::types::keybind::KeybindAction;

/// Errors that can occur when parsing or validating keybindings.
#[derive(Debug, Error, PartialEq)]
pub enum KeybindError {
    /// Invalid key syntax
    #[error("Invalid key syntax: '{key}'. Expected format like 'q', 'ctrl+s', 'shift+tab', 'f1'")]
    InvalidSyntax {
        /// The invalid key string
        key: String,
    },

    /// Unknown key name
    #[error("Unknown key name: '{name}'")]
    UnknownKey {
        /// The unknown key name
        name: String,
    },

    /// Conflicting keybindings
    #[error("Conflicting keybindings: '{key}' is assigned to both {action1} and {action2}")]
    Conflict {
        /// The conflicting key
        key: String,
        /// First action using this key
        action1: String,
        /// Second action using this key
        action2: String,
    },

    /// Reserved keybinding
    #[error("Reserved keybinding: '{key}' cannot be overridden")]
    ReservedKey {
        /// The reserved key
        key: String,
    },

    /// Shift combined with a non-letter character key
    #[error("Invalid key '{key}': shift cannot modify a symbol key, use '{glyph}' instead")]
    ShiftedSymbol {
        /// The rejected key string
        key: String,
        /// The character the terminal reports for the shifted key
        glyph: char,
    },

    /// Override with no keys
    #[error("No keys given for action '{action}'")]
    EmptyOverride {
        /// The action with an empty key list
        action: String,
    },
}

/// A parsed key combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedKey {
    /// The key code name
    pub code: KeyCodeName,
    /// Modifier flags
    pub modifiers: ModifierFlags,
}

impl ParsedKey {
    /// Renders the canonical identifier for this key, e.g. `ctrl+s` or `shift+tab`.
    ///
    /// Shift on a character key is folded into the character itself: `shift+a`
    /// becomes `A`, matching what terminals report for shifted letters. For
    /// symbols the terminal already reports the shifted glyph (`!` for
    /// shift+1), so the shift flag is dropped and the character kept.
    pub fn canonical(&self) -> String {
        let mut modifiers = self.modifiers;
        let code = match &self.code {
            KeyCodeName::BackTab => {
                modifiers.shift = true;
                KeyCodeName::BackTab
            }
            KeyCodeName::Char(c) if modifiers.shift => {
                modifiers.shift = false;
                KeyCodeName::Char(c.to_ascii_uppercase())
            }
            other => other.clone(),
        };

        let mut out = String::new();
        if modifiers.ctrl {
            out.push_str("ctrl+");
        }
        if modifiers.alt {
            out.push_str("alt+");
        }
        if modifiers.shift {
            out.push_str("shift+");
        }
        out.push_str(&code.canonical_name());
        out
    }
}

impl fmt::Display for ParsedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// Key code names that can be parsed from config strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyCodeName {
    /// A character key (e.g., 'a', '1', '?')
    Char(char),
    /// Function key F1-F20
    F(u8),
    /// Escape key
    Esc,
    /// Enter/Return key
    Enter,
    /// Space key
    Space,
    /// Tab key
    Tab,
    /// BackTab (Shift+Tab) key
    BackTab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Insert key
    Insert,
    /// Home key
    Home,
    /// End key
    End,
    /// Page Up key
    PageUp,
    /// Page Down key
    PageDown,
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
}

impl KeyCodeName {
    /// Lowercase key name used inside canonical identifiers.
    ///
    /// `BackTab` renders as `tab`; the shift prefix is added by [`ParsedKey::canonical`].
    pub fn canonical_name(&self) -> String {
        match self {
            Self::Char(c) => c.to_string(),
            Self::F(n) => format!("f{}", n),
            Self::Esc => "esc".to_string(),
            Self::Enter => "enter".to_string(),
            Self::Space => "space".to_string(),
            Self::Tab | Self::BackTab => "tab".to_string(),
            Self::Backspace => "backspace".to_string(),
            Self::Delete => "delete".to_string(),
            Self::Insert => "insert".to_string(),
            Self::Home => "home".to_string(),
            Self::End => "end".to_string(),
            Self::PageUp => "pgup".to_string(),
            Self::PageDown => "pgdown".to_string(),
            Self::Up => "up".to_string(),
            Self::Down => "down".to_string(),
            Self::Left => "left".to_string(),
            Self::Right => "right".to_string(),
        }
    }
}

impl fmt::Display for KeyCodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", c),
            Self::F(n) => write!(f, "F{}", n),
            Self::Esc => write!(f, "Esc"),
            Self::Enter => write!(f, "Enter"),
            Self::Space => write!(f, "Space"),
            Self::Tab => write!(f, "Tab"),
            Self::BackTab => write!(f, "BackTab"),
            Self::Backspace => write!(f, "Backspace"),
            Self::Delete => write!(f, "Delete"),
            Self::Insert => write!(f, "Insert"),
            Self::Home => write!(f, "Home"),
            Self::End => write!(f, "End"),
            Self::PageUp => write!(f, "PageUp"),
            Self::PageDown => write!(f, "PageDown"),
            Self::Up => write!(f, "Up"),
            Self::Down => write!(f, "Down"),
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

/// Modifier flags for key combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ModifierFlags {
    /// Control key pressed
    pub ctrl: bool,
    /// Shift key pressed
    pub shift: bool,
    /// Alt/Option key pressed
    pub alt: bool,
}

impl fmt::Display for ModifierFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.alt {
            parts.push("Alt");
        }
        if parts.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

/// Parse a key string like "ctrl+s", "F1", "Shift+Tab" into structured form.
///
/// # Examples
///
/// ```
/// use edithost_config::keybind::{parse_key, KeyCodeName};
///
/// let key = parse_key("Ctrl+s").unwrap();
/// assert!(matches!(key.code, KeyCodeName::Char('s')));
/// assert!(key.modifiers.ctrl);
/// assert_eq!(key.canonical(), "ctrl+s");
///
/// let key = parse_key("shift+tab").unwrap();
/// assert!(matches!(key.code, KeyCodeName::BackTab));
/// ```
pub fn parse_key(key_str: &str) -> Result<ParsedKey, KeybindError> {
    let key_str = key_str.trim();

    if key_str.is_empty() {
        return Err(KeybindError::InvalidSyntax {
            key: key_str.to_string(),
        });
    }

    let mut parts: Vec<&str> = key_str.split('+').map(|s| s.trim()).collect();

    let mut modifiers = ModifierFlags::default();
    let mut key_name = "";

    // A trailing "+" after the separator is the plus key itself: "+", "ctrl++".
    if matches!(parts.as_slice(), [.., "", ""]) {
        parts.truncate(parts.len() - 2);
        key_name = "+";
    }

    for part in &parts {
        if part.is_empty() {
            return Err(KeybindError::InvalidSyntax {
                key: key_str.to_string(),
            });
        }
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.ctrl = true,
            "shift" => modifiers.shift = true,
            "alt" | "option" => modifiers.alt = true,
            _ => {
                if key_name.is_empty() {
                    key_name = part;
                } else {
                    // Multiple non-modifier parts is invalid
                    return Err(KeybindError::InvalidSyntax {
                        key: key_str.to_string(),
                    });
                }
            }
        }
    }

    if key_name.is_empty() {
        return Err(KeybindError::InvalidSyntax {
            key: key_str.to_string(),
        });
    }

    let code = parse_key_code(key_name)?;

    let code = if matches!(code, KeyCodeName::Tab) && modifiers.shift {
        KeyCodeName::BackTab
    } else {
        code
    };

    if let KeyCodeName::Char(c) = code
        && modifiers.shift
        && !c.is_ascii_alphabetic()
    {
        return Err(KeybindError::ShiftedSymbol {
            key: key_str.to_string(),
            glyph: shifted_glyph(c),
        });
    }

    Ok(ParsedKey { code, modifiers })
}

/// The character a US layout produces for shift plus `c`.
///
/// Characters without a shifted form (already-shifted symbols, non-ASCII)
/// map to themselves.
fn shifted_glyph(c: char) -> char {
    match c {
        '1' => '!',
        '2' => '@',
        '3' => '#',
        '4' => '$',
        '5' => '%',
        '6' => '^',
        '7' => '&',
        '8' => '*',
        '9' => '(',
        '0' => ')',
        '-' => '_',
        '=' => '+',
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        ';' => ':',
        '\'' => '"',
        ',' => '<',
        '.' => '>',
        '/' => '?',
        '`' => '~',
        other => other,
    }
}

/// Parse a key string and return its canonical identifier.
///
/// ```
/// use edithost_config::keybind::canonicalize;
///
/// assert_eq!(canonicalize("Ctrl + S").unwrap(), "ctrl+s");
/// assert_eq!(canonicalize("BackTab").unwrap(), "shift+tab");
/// ```
pub fn canonicalize(key_str: &str) -> Result<String, KeybindError> {
    parse_key(key_str).map(|parsed| parsed.canonical())
}

/// Parse a key code name (without modifiers).
fn parse_key_code(name: &str) -> Result<KeyCodeName, KeybindError> {
    let name_lower = name.to_ascii_lowercase();

    match name_lower.as_str() {
        "esc" | "escape" => return Ok(KeyCodeName::Esc),
        "enter" | "return" => return Ok(KeyCodeName::Enter),
        "space" => return Ok(KeyCodeName::Space),
        "tab" => return Ok(KeyCodeName::Tab),
        "backtab" => return Ok(KeyCodeName::BackTab),
        "backspace" => return Ok(KeyCodeName::Backspace),
        "delete" | "del" => return Ok(KeyCodeName::Delete),
        "insert" | "ins" => return Ok(KeyCodeName::Insert),
        "home" => return Ok(KeyCodeName::Home),
        "end" => return Ok(KeyCodeName::End),
        "pageup" | "page_up" | "pgup" => return Ok(KeyCodeName::PageUp),
        "pagedown" | "page_down" | "pgdn" | "pgdown" => return Ok(KeyCodeName::PageDown),
        "up" => return Ok(KeyCodeName::Up),
        "down" => return Ok(KeyCodeName::Down),
        "left" => return Ok(KeyCodeName::Left),
        "right" => return Ok(KeyCodeName::Right),
        _ => {}
    }

    // Function keys F1-F20
    if let Some(num_str) = name_lower.strip_prefix('f')
        && let Ok(num) = num_str.parse::<u8>()
        && (1..=20).contains(&num)
    {
        return Ok(KeyCodeName::F(num));
    }

    let chars: Vec<char> = name.chars().collect();
    if chars.len() == 1 {
        return Ok(KeyCodeName::Char(chars[0]));
    }

    Err(KeybindError::UnknownKey {
        name: name.to_string(),
    })
}

/// Canonical identifiers that overrides may not claim
/// (Ctrl+C interrupts, Ctrl+Z suspends).
pub const RESERVED_KEYS: &[&str] = &["ctrl+c", "ctrl+z"];

/// Validate a set of keybinding overrides.
///
/// Every key must parse, must not be reserved, and must not be claimed by
/// two different actions. Repeating a key inside one action is allowed.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use edithost_config::keybind::validate_overrides;
/// use edithost_config::types::KeybindAction;
///
/// let mut overrides = BTreeMap::new();
/// overrides.insert(KeybindAction::Save, vec!["ctrl+w".to_string()]);
/// overrides.insert(KeybindAction::Discard, vec!["esc".to_string(), "ctrl+q".to_string()]);
///
/// assert!(validate_overrides(&overrides).is_ok());
/// ```
pub fn validate_overrides(
    overrides: &BTreeMap<KeybindAction, Vec<String>>,
) -> Result<(), KeybindError> {
    let mut key_to_action: HashMap<String, KeybindAction> = HashMap::new();

    for (action, keys) in overrides {
        if keys.is_empty() {
            return Err(KeybindError::EmptyOverride {
                action: action.to_string(),
            });
        }

        for key_str in keys {
            let canonical = match canonicalize(key_str) {
                Ok(canonical) => canonical,
                Err(e) => {
                    return Err(KeybindError::InvalidSyntax {
                        key: format!("{} for action '{}': {}", key_str, action, e),
                    });
                }
            };

            if RESERVED_KEYS.contains(&canonical.as_str()) {
                return Err(KeybindError::ReservedKey {
                    key: key_str.clone(),
                });
            }

            match key_to_action.get(&canonical) {
                Some(existing) if existing != action => {
                    return Err(KeybindError::Conflict {
                        key: key_str.clone(),
                        action1: existing.to_string(),
                        action2: action.to_string(),
                    });
                }
                _ => {
                    key_to_action.insert(canonical, *action);
                }
            }
        }
    }

    Ok(())
}
