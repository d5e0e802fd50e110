use super::super::super::messages::Message;
use super::super::super::state::App;
use hafalan_core::Mode;
use iced::keyboard::{Key, Modifiers, key};

/// A parsed `"ctrl+shift+x"`-style binding.
#[derive(Debug, PartialEq, Eq)]
struct Shortcut<'a> {
    ctrl: bool,
    alt: bool,
    logo: bool,
    shift: bool,
    key: &'a str,
}

impl<'a> Shortcut<'a> {
    fn parse(normalized: &'a str, fallback: &'a str) -> Self {
        let mut shortcut = Shortcut {
            ctrl: false,
            alt: false,
            logo: false,
            shift: false,
            key: fallback,
        };
        for token in normalized.split('+').map(str::trim).filter(|s| !s.is_empty()) {
            match token {
                "ctrl" | "control" => shortcut.ctrl = true,
                "alt" => shortcut.alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => shortcut.logo = true,
                "shift" => shortcut.shift = true,
                key => shortcut.key = key,
            }
        }
        shortcut
    }

    fn matches(&self, pressed: &str, modifiers: Modifiers) -> bool {
        pressed == self.key
            && modifiers.control() == self.ctrl
            && modifiers.alt() == self.alt
            && modifiers.logo() == self.logo
            && modifiers.shift() == self.shift
    }
}

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Named(key::Named::Enter) => "enter".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        if shortcut_matches(&self.config.key_tap, "enter", &pressed, modifiers) {
            Some(Message::ScreenTapped)
        } else if shortcut_matches(
            &self.config.key_toggle_play_pause,
            "space",
            &pressed,
            modifiers,
        ) {
            // The play/pause key doubles as a tap while drilling manually.
            Some(match self.session.mode() {
                Mode::Manual => Message::ScreenTapped,
                Mode::Automatic => Message::TogglePlayPause,
            })
        } else if shortcut_matches(&self.config.key_reset, "r", &pressed, modifiers) {
            Some(Message::ResetPlayback)
        } else if shortcut_matches(&self.config.key_toggle_focus, "d", &pressed, modifiers) {
            Some(Message::ToggleFocusMode)
        } else if shortcut_matches(&self.config.key_safe_quit, "q", &pressed, modifiers) {
            Some(Message::SafeQuit)
        } else {
            None
        }
    }
}

fn shortcut_matches(raw: &str, fallback: &str, pressed: &str, modifiers: Modifiers) -> bool {
    let normalized = normalize_shortcut_token(raw, fallback);
    Shortcut::parse(&normalized, fallback).matches(pressed, modifiers)
}

fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
    let normalized = raw.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        fallback.to_string()
    } else {
        normalized.replace("spacebar", "space")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_spacebar_alias() {
        assert_eq!(normalize_shortcut_token(" SpaceBar ", "x"), "space");
    }

    #[test]
    fn empty_binding_falls_back() {
        assert!(shortcut_matches("", "q", "q", Modifiers::empty()));
    }

    #[test]
    fn matches_ctrl_shortcut() {
        assert!(shortcut_matches("ctrl+f", "x", "f", Modifiers::CTRL));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!shortcut_matches(
            "ctrl+f",
            "x",
            "f",
            Modifiers::CTRL | Modifiers::SHIFT,
        ));
    }

    #[test]
    fn rejects_missing_modifier() {
        assert!(!shortcut_matches("ctrl+f", "x", "f", Modifiers::empty()));
    }
}
