//! Maps terminal key and mouse events onto player intents and front-end
//! commands. Mouse press/drag stands in for touch: a press jumps, a downward
//! drag past the threshold slides.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::{GameConfig, PlayerConfig};
use crate::entities::GameState;
use crate::player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Jump,
    Slide,
}

/// Keys handled by the front end rather than the runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Retry,
    Menu,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Intent(Intent),
    Command(Command),
}

/// Translate a key press. Releases and repeats are ignored.
pub fn map_key(event: &KeyEvent) -> Option<Action> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    match event.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Action::Intent(Intent::Jump))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Action::Intent(Intent::Slide))
        }
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::Command(Command::Quit))
        }
        KeyCode::Enter => Some(Action::Command(Command::Start)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Command(Command::Retry)),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Action::Command(Command::Menu)),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            Some(Action::Command(Command::Quit))
        }
        _ => None,
    }
}

/// Tracks one press-drag-release gesture.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    start_row: Option<u16>,
    threshold: u16,
}

impl GestureTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            start_row: None,
            threshold,
        }
    }

    pub fn on_mouse(&mut self, event: &MouseEvent) -> Option<Intent> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start_row = Some(event.row);
                Some(Intent::Jump)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let start = self.start_row?;
                if event.row.saturating_sub(start) > self.threshold {
                    // One slide per gesture.
                    self.start_row = None;
                    Some(Intent::Slide)
                } else {
                    None
                }
            }
            MouseEventKind::Up(_) => {
                self.start_row = None;
                None
            }
            _ => None,
        }
    }
}

/// Apply an intent to the runner; invalid ones are dropped by the player rules.
pub fn apply(state: &GameState, intent: Intent, cfg: &PlayerConfig) -> GameState {
    match intent {
        Intent::Jump => player::jump(state, cfg),
        Intent::Slide => player::slide(state, cfg),
    }
}

pub fn gesture_tracker(cfg: &GameConfig) -> GestureTracker {
    GestureTracker::new(cfg.input.swipe_threshold)
}
