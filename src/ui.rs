//! User interface rendering for the in-game screen.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::{session::DrawCommand, App};

/// Key bindings shown in the footer.
const KEY_HINT: &str = "(arrows / hjkl) move / (q) quit";

/// Updates the terminal with the current state of the game.
///
/// This function paints the maze centered in the frame, followed by a footer with the key bindings
/// and the length of the optimal path.
///
/// # Errors
///
/// This function may return errors if the maze does not fit in terminal coordinates.
pub(crate) fn draw(app: &App<'_>, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let grid = app.session.grid();
    let maze_width = u16::try_from(grid.cols())?
        .checked_mul(app.cell_size.width)
        .ok_or_eyre("maze is too wide for terminal coordinates")?;
    let maze_height = u16::try_from(grid.rows())?
        .checked_mul(app.cell_size.height)
        .ok_or_eyre("maze is too tall for terminal coordinates")?;

    let overall_layout =
        Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).split(frame.area());
    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let footer_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get footer area from layout")?;

    let commands = app.session.draw_commands(app.cell_size, app.show_path)?;
    paint(
        frame,
        centered(maze_content_area, maze_width, maze_height),
        &commands,
    );

    footer(frame, footer_area, app.session.path().len());

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Returns a `width x height` rectangle centered in `area`, shrunk to fit if needed.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);

    cell
}

/// Fills the background of every draw command, offset by the top-left corner of `area`.
///
/// Anything outside `area` is clipped, so a maze bigger than the terminal shows its top-left part.
pub(crate) fn paint(frame: &mut Frame, area: Rect, commands: &[DrawCommand]) {
    let buffer = frame.buffer_mut();

    for command in commands {
        let target = Rect::new(
            area.x.saturating_add(command.area.x),
            area.y.saturating_add(command.area.y),
            command.area.width,
            command.area.height,
        )
        .intersection(area);

        for y in target.top()..target.bottom() {
            for x in target.left()..target.right() {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.bg = command.color;
                }
            }
        }
    }
}

/// Renders the footer with the key bindings and the optimal path length.
pub(crate) fn footer(frame: &mut Frame, area: Rect, path_len: usize) {
    let block = Block::bordered()
        .title(KEY_HINT)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let inner = block.inner(area);

    let status = if path_len == 0 {
        "no path to the goal".to_owned()
    } else {
        format!("optimal path: {path_len} steps")
    };

    frame.render_widget(block, area);
    frame.render_widget(Line::raw(status).centered(), inner);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{
        config::Config,
        grid::Grid,
        maze::MazeGenerator,
        session::{GameSession, GOAL_COLOR, OPEN_COLOR, PATH_COLOR, PLAYER_COLOR, WALL_COLOR},
    };

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Creates the deterministic 5x5 test maze.
    fn create_test_grid() -> Grid {
        MazeGenerator::unshuffled()
            .generate(5, 5)
            .expect("5x5 maze should generate")
    }

    /// Background color of the terminal cell showing maze cell `(x, y)` with the default 2x1 cell
    /// size.
    fn background(terminal: &Terminal<TestBackend>, x: u16, y: u16) -> Color {
        let origin = centered(Rect::new(0, 0, 80, 22), 10, 5);

        terminal
            .backend()
            .buffer()
            .cell((origin.x + x * 2, origin.y + y))
            .expect("cell should be on screen")
            .bg
    }

    #[test]
    fn test_draw_in_game() {
        let grid = create_test_grid();
        let session = GameSession::new(&grid).expect("session should start");
        let app = App::new(session, &Config::default());
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing in-game screen should succeed");
        assert_eq!(background(&terminal, 0, 0), WALL_COLOR);
        assert_eq!(background(&terminal, 1, 1), PLAYER_COLOR);
        assert_eq!(background(&terminal, 1, 2), PATH_COLOR);
        assert_eq!(background(&terminal, 3, 1), OPEN_COLOR);
        assert_eq!(background(&terminal, 3, 3), GOAL_COLOR);
    }

    #[test]
    fn test_draw_hidden_path() {
        let grid = create_test_grid();
        let session = GameSession::new(&grid).expect("session should start");
        let config = Config {
            hide_path: true,
            ..Config::default()
        };
        let app = App::new(session, &config);
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing with a hidden path should succeed");
        assert_eq!(background(&terminal, 1, 2), OPEN_COLOR);
        assert_eq!(background(&terminal, 2, 3), OPEN_COLOR);
    }

    #[test]
    fn test_draw_small_terminal() {
        let grid = MazeGenerator::new(3)
            .generate(41, 41)
            .expect("maze should generate");
        let session = GameSession::new(&grid).expect("session should start");
        let app = App::new(session, &Config::default());
        let mut terminal =
            Terminal::new(TestBackend::new(12, 6)).expect("failed to create test terminal");

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should clip instead of failing");
        });

        assert!(result.is_ok(), "drawing into a small terminal should succeed");
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }

    #[test]
    fn test_centered() {
        let area = Rect::new(0, 0, 80, 22);

        let inner = centered(area, 10, 6);

        assert_eq!((inner.width, inner.height), (10, 6));
        assert_eq!(inner.x, 35);
        assert_eq!(inner.y, 8);
    }

    #[test]
    fn test_centered_shrinks_to_fit() {
        let area = Rect::new(2, 1, 8, 4);

        let inner = centered(area, 20, 10);

        assert_eq!(inner, area);
    }

    #[test]
    fn test_paint_clips_to_area() {
        let mut terminal =
            Terminal::new(TestBackend::new(4, 4)).expect("failed to create test terminal");
        let area = Rect::new(1, 1, 2, 2);
        let commands = [DrawCommand {
            area: Rect::new(0, 0, 5, 5),
            color: Color::Red,
        }];

        let result = terminal.draw(|frame| paint(frame, area, &commands));

        assert!(result.is_ok(), "painting should succeed");
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer.cell((1, 1)).map(|cell| cell.bg), Some(Color::Red));
        assert_eq!(buffer.cell((2, 2)).map(|cell| cell.bg), Some(Color::Red));
        assert_eq!(buffer.cell((0, 0)).map(|cell| cell.bg), Some(Color::Reset));
        assert_eq!(buffer.cell((3, 3)).map(|cell| cell.bg), Some(Color::Reset));
    }

    #[test]
    fn test_footer_status() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| footer(frame, Rect::new(0, 22, 80, 2), 12));

        assert!(result.is_ok(), "rendering footer should succeed");
        let buffer = terminal.backend().buffer();
        let status: String = (0..80)
            .filter_map(|x| buffer.cell((x, 23)).map(|cell| cell.symbol().to_owned()))
            .collect();
        assert!(status.contains("optimal path: 12 steps"));
    }
}
