//! Core application state and frame loop for the maze game.

use std::{
    io, thread,
    time::{Duration, Instant},
};

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{
    config::Config,
    events,
    session::{CellSize, GameSession},
    types::SessionState,
    ui,
};

/// Application state container for the maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will write to. It borrows the maze through the
/// session, so the maze outlives the application.
pub struct App<'grid> {
    /// Game being played.
    ///
    /// This field holds the player, the goal and the precomputed path. The frame loop keeps running
    /// for as long as the session is in the running state.
    pub(crate) session: GameSession<'grid>,
    /// On-screen size of one maze cell.
    ///
    /// This field holds the number of terminal columns and rows each maze cell is painted with.
    pub(crate) cell_size: CellSize,
    /// Whether the optimal path overlay is drawn.
    pub(crate) show_path: bool,
    /// Time budget of a single frame.
    ///
    /// This field caps the frame rate: after handling input and redrawing, the loop sleeps for
    /// whatever is left of this interval.
    pub(crate) frame_interval: Duration,
}

impl<'grid> App<'grid> {
    /// Creates the application around a freshly started session.
    pub fn new(session: GameSession<'grid>, config: &Config) -> Self {
        Self {
            session,
            cell_size: config.cell_size(),
            show_path: !config.hide_path,
            frame_interval: config.frame_interval(),
        }
    }

    /// Runs the main loop of the application.
    ///
    /// Each iteration drains pending input, redraws the maze and then sleeps out the rest of the
    /// frame. The loop ends as soon as the session is won or quit, and the final state is returned
    /// to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<SessionState> {
        while self.session.state() == SessionState::Running {
            let frame_start = Instant::now();

            events::handle_events(self)?;
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(io::Error::other))?;

            if let Some(remaining) = self.frame_interval.checked_sub(frame_start.elapsed()) {
                thread::sleep(remaining);
            }
        }

        Ok(self.session.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::MazeGenerator;

    #[test]
    fn test_new_uses_config() {
        let grid = MazeGenerator::unshuffled()
            .generate(5, 5)
            .expect("5x5 maze should generate");
        let session = GameSession::new(&grid).expect("session should start");
        let config = Config {
            cell_width: 3,
            cell_height: 2,
            fps: 10,
            hide_path: true,
            ..Config::default()
        };

        let app = App::new(session, &config);

        assert_eq!(
            app.cell_size,
            CellSize {
                width: 3,
                height: 2
            }
        );
        assert!(!app.show_path);
        assert_eq!(app.frame_interval, Duration::from_millis(100));
        assert_eq!(app.session.state(), SessionState::Running);
    }
}
