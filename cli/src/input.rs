use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use kaboom_core::{Command, Direction};

/// Keyboard input after decoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Play(Command),
    Quit,
}

impl Input {
    /// Returns `None` for anything that is not a bound key press.
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) => Self::from_key(key),
            _ => None,
        }
    }

    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        use Input::*;

        if key.kind == KeyEventKind::Release {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        Some(match key.code {
            KeyCode::Char('c' | 'd') if ctrl => Quit,
            KeyCode::Char('q') | KeyCode::Esc => Quit,
            KeyCode::Up => Play(Command::Move(Direction::Up)),
            KeyCode::Down => Play(Command::Move(Direction::Down)),
            KeyCode::Left => Play(Command::Move(Direction::Left)),
            KeyCode::Right => Play(Command::Move(Direction::Right)),
            KeyCode::Char('f' | 'F') if !ctrl => Play(Command::ToggleFlag),
            KeyCode::Enter => Play(Command::Reveal),
            _ => return None,
        })
    }
}
