use serde::{Deserialize, Serialize};

/// A key as reported by a keydown event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Tab,
    Escape,
    Enter,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    /// Anything else, kept by its DOM name (`"Home"`, `"F5"`, `"Dead"`, ...).
    Named(String),
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value to a [`Key`].
    pub fn from_dom_key(name: &str) -> Self {
        match name {
            "Backspace" => Key::Backspace,
            "Delete" | "Del" => Key::Delete,
            "Tab" => Key::Tab,
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Named(name.to_string()),
                }
            }
        }
    }

    fn is_navigation(&self) -> bool {
        matches!(
            self,
            Key::Backspace
                | Key::Delete
                | Key::Tab
                | Key::Escape
                | Key::Enter
                | Key::ArrowLeft
                | Key::ArrowRight
                | Key::ArrowUp
                | Key::ArrowDown
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInput {
    pub key: Key,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub meta: bool,
}

impl KeyInput {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    pub fn with_ctrl(key: Key) -> Self {
        Self {
            key,
            ctrl: true,
            meta: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyDecision {
    Accept,
    /// The host should call `preventDefault` on the event.
    Reject,
}

/// Keydown allow-list for masked inputs.
///
/// Accepts digits, editing/navigation keys, and ctrl/cmd + A/C/V. This is a
/// convenience only: IME composition and virtual keyboards bypass it, and the
/// change pipeline strips non-digits regardless.
pub fn on_key_input(input: &KeyInput) -> KeyDecision {
    if input.key.is_navigation() {
        return KeyDecision::Accept;
    }

    match input.key {
        Key::Char(c) if c.is_ascii_digit() => KeyDecision::Accept,
        Key::Char(c) if input.ctrl || input.meta => {
            if matches!(c.to_ascii_lowercase(), 'a' | 'c' | 'v') {
                KeyDecision::Accept
            } else {
                KeyDecision::Reject
            }
        }
        _ => KeyDecision::Reject,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(name: &str) -> KeyDecision {
        on_key_input(&KeyInput::plain(Key::from_dom_key(name)))
    }

    #[test]
    fn test_digits_are_accepted() {
        for d in '0'..='9' {
            assert_eq!(decide(&d.to_string()), KeyDecision::Accept);
        }
    }

    #[test]
    fn test_navigation_keys_are_accepted() {
        for name in [
            "Backspace",
            "Delete",
            "Tab",
            "Escape",
            "Enter",
            "ArrowLeft",
            "ArrowRight",
            "ArrowUp",
            "ArrowDown",
        ] {
            assert_eq!(decide(name), KeyDecision::Accept, "{name}");
        }
    }

    #[test]
    fn test_letters_and_symbols_are_rejected() {
        for name in ["a", "Z", ".", "-", " ", "Home", "F5", "Dead"] {
            assert_eq!(decide(name), KeyDecision::Reject, "{name}");
        }
    }

    #[test]
    fn test_clipboard_shortcuts_are_accepted() {
        for c in ['a', 'c', 'v', 'V'] {
            assert_eq!(
                on_key_input(&KeyInput::with_ctrl(Key::Char(c))),
                KeyDecision::Accept
            );
        }
        let cmd_v = KeyInput {
            key: Key::Char('v'),
            ctrl: false,
            meta: true,
        };
        assert_eq!(on_key_input(&cmd_v), KeyDecision::Accept);
    }

    #[test]
    fn test_digits_with_modifier_are_accepted() {
        assert_eq!(
            on_key_input(&KeyInput::with_ctrl(Key::Char('4'))),
            KeyDecision::Accept
        );
        let cmd_digit = KeyInput {
            key: Key::Char('0'),
            ctrl: false,
            meta: true,
        };
        assert_eq!(on_key_input(&cmd_digit), KeyDecision::Accept);
    }

    #[test]
    fn test_other_shortcuts_are_rejected() {
        assert_eq!(
            on_key_input(&KeyInput::with_ctrl(Key::Char('z'))),
            KeyDecision::Reject
        );
    }

    #[test]
    fn test_dom_key_mapping() {
        assert_eq!(Key::from_dom_key("7"), Key::Char('7'));
        assert_eq!(Key::from_dom_key("Esc"), Key::Escape);
        assert_eq!(Key::from_dom_key("PageUp"), Key::Named("PageUp".into()));
    }
}
