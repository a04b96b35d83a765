//! Keyboard event type used by the dashboard.
//!
//! Wraps crossterm's key event so key handling and keybinding matching can be
//! exercised in tests without a terminal.

use crossterm::event::{KeyEvent, KeyModifiers};
pub use crossterm::event::KeyCode;

#[derive(Debug, Clone)]
pub struct AppKeyEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl AppKeyEvent {
    /// Key press with no modifiers.
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    pub fn with_ctrl(code: KeyCode) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(code)
        }
    }

    pub fn with_shift(code: KeyCode) -> Self {
        Self {
            shift: true,
            ..Self::plain(code)
        }
    }

    /// Name of this key in keybindings.yaml, e.g. "ctrl+s", "shift+h", "pageup".
    ///
    /// Modifiers come in the order ctrl, alt, shift. An uppercase letter
    /// counts as shifted even if the terminal did not set the flag. Returns
    /// `None` for keys that cannot be bound.
    pub fn binding_name(&self) -> Option<String> {
        let (base, shifted) = match self.code {
            KeyCode::Char(c) => (c.to_lowercase().to_string(), self.shift || c.is_uppercase()),
            KeyCode::BackTab => ("tab".to_string(), true),
            KeyCode::F(n) => (format!("f{n}"), self.shift),
            code => (named_key(code)?.to_string(), self.shift),
        };

        let mut name = String::new();
        for (held, prefix) in [(self.ctrl, "ctrl+"), (self.alt, "alt+"), (shifted, "shift+")] {
            if held {
                name.push_str(prefix);
            }
        }
        name.push_str(&base);
        Some(name)
    }
}

fn named_key(code: KeyCode) -> Option<&'static str> {
    Some(match code {
        KeyCode::Enter => "enter",
        KeyCode::Tab => "tab",
        KeyCode::Backspace => "backspace",
        KeyCode::Delete => "delete",
        KeyCode::Esc => "esc",
        KeyCode::Up => "up",
        KeyCode::Down => "down",
        KeyCode::Left => "left",
        KeyCode::Right => "right",
        KeyCode::Home => "home",
        KeyCode::End => "end",
        KeyCode::PageUp => "pageup",
        KeyCode::PageDown => "pagedown",
        _ => return None,
    })
}

impl From<KeyEvent> for AppKeyEvent {
    fn from(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(event: AppKeyEvent) -> Option<String> {
        event.binding_name()
    }

    #[test]
    fn test_plain_and_ctrl() {
        assert_eq!(name(AppKeyEvent::plain(KeyCode::Char('r'))).as_deref(), Some("r"));
        assert_eq!(
            name(AppKeyEvent::with_ctrl(KeyCode::Char('s'))).as_deref(),
            Some("ctrl+s")
        );
    }

    #[test]
    fn test_shifted_letters() {
        assert_eq!(
            name(AppKeyEvent::with_shift(KeyCode::Char('L'))).as_deref(),
            Some("shift+l")
        );
        // Uppercase without the shift flag still counts as shifted
        assert_eq!(
            name(AppKeyEvent::plain(KeyCode::Char('H'))).as_deref(),
            Some("shift+h")
        );
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            name(AppKeyEvent::with_shift(KeyCode::Right)).as_deref(),
            Some("shift+right")
        );
        assert_eq!(name(AppKeyEvent::plain(KeyCode::Home)).as_deref(), Some("home"));
        assert_eq!(
            name(AppKeyEvent::with_shift(KeyCode::BackTab)).as_deref(),
            Some("shift+tab")
        );
        assert_eq!(name(AppKeyEvent::plain(KeyCode::F(5))).as_deref(), Some("f5"));
        assert_eq!(name(AppKeyEvent::plain(KeyCode::Null)), None);
    }

    #[test]
    fn test_from_crossterm_event() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL | KeyModifiers::ALT);
        let key = AppKeyEvent::from(event);
        assert!(key.ctrl && key.alt && !key.shift);
        assert_eq!(key.binding_name().as_deref(), Some("ctrl+alt+c"));
    }
}
