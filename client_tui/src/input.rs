//! Keyboard input handling

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::systems::{InputEvent, Key};

/// How long a first press is held without a release report, covering the OS repeat delay
pub const FIRST_PRESS_HOLD: Duration = Duration::from_millis(550);
/// How long each auto-repeat extends the hold
pub const REPEAT_HOLD: Duration = Duration::from_millis(100);

/// Map a terminal key to the keys the simulation knows about
pub fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        _ => Key::Other,
    }
}

/// Esc, `q` or Ctrl-C
pub fn is_quit(event: &KeyEvent) -> bool {
    if event.kind == KeyEventKind::Release {
        return false;
    }
    match event.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[derive(Debug, Clone, Copy)]
struct Held {
    key: Key,
    since: Instant,
    repeating: bool,
}

/// Turns terminal key events into key-down/key-up events.
///
/// Most terminals only report presses. Without release reports a direction key
/// counts as held until no press or repeat has arrived for a while, after which
/// a key-up is synthesised.
#[derive(Debug)]
pub struct KeyTranslator {
    reports_release: bool,
    held: Option<Held>,
}

impl KeyTranslator {
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            held: None,
        }
    }

    pub fn translate(&mut self, event: &KeyEvent, now: Instant) -> Option<InputEvent> {
        let key = map_key(event.code);
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if !self.reports_release && key != Key::Other {
                    let repeating = matches!(self.held, Some(held) if held.key == key);
                    self.held = Some(Held {
                        key,
                        since: now,
                        repeating,
                    });
                }
                Some(InputEvent::KeyDown(key))
            }
            KeyEventKind::Release => {
                self.held = None;
                Some(InputEvent::KeyUp(key))
            }
        }
    }

    /// Synthesised release once a held key has gone quiet
    pub fn expire(&mut self, now: Instant) -> Option<InputEvent> {
        let held = self.held?;
        let hold = if held.repeating {
            REPEAT_HOLD
        } else {
            FIRST_PRESS_HOLD
        };
        if now.saturating_duration_since(held.since) < hold {
            return None;
        }
        self.held = None;
        Some(InputEvent::KeyUp(held.key))
    }
}
