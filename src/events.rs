//! Event handling functions for keyboard input.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    types::{Direction, Input},
    App,
};

/// Drains every pending terminal event and feeds the relevant ones to the session.
///
/// This function never blocks: it polls with a zero timeout until the queue is empty, leaving frame
/// pacing to the main loop.
pub(crate) fn handle_events(app: &mut App<'_>) -> Result<()> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if let Some(input) = input_for(key) {
                app.session.handle(input);
            }
        }
    }

    Ok(())
}

/// Maps a key press to a game input.
///
/// Arrow keys, `hjkl` and `wasd` move the player; `q`, `Esc` and `Ctrl-C` quit. Key releases and
/// repeats reported by the terminal are ignored, as is every other key.
pub(crate) fn input_for(key: KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let input = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        KeyCode::Up | KeyCode::Char('k' | 'w') => Input::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j' | 's') => Input::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('h' | 'a') => Input::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l' | 'd') => Input::Move(Direction::Right),
        _ => return None,
    };

    Some(input)
}
