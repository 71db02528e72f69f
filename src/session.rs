//! Game session module.
//!
//! This module contains the state of one play-through: where the player stands, where the goal is,
//! the precomputed optimal path, and the per-frame list of rectangles the renderer should paint.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{layout::Rect, style::Color};

use crate::{
    grid::{Cell, Coord, Grid},
    maze::SEED_CELL,
    pathfinding,
    types::{Input, SessionState},
};

/// Color of wall cells.
pub const WALL_COLOR: Color = Color::Black;
/// Color of open cells.
pub const OPEN_COLOR: Color = Color::White;
/// Color of the optimal path overlay.
pub const PATH_COLOR: Color = Color::Green;
/// Color of the player marker.
pub const PLAYER_COLOR: Color = Color::Red;
/// Color of the goal marker.
pub const GOAL_COLOR: Color = Color::Green;

/// Size of one maze cell on screen, in terminal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSize {
    /// Terminal columns per maze cell.
    pub width: u16,
    /// Terminal rows per maze cell.
    pub height: u16,
}

/// A colored rectangle to paint, positioned relative to the maze's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawCommand {
    /// Area covered, in terminal cells.
    pub area: Rect,
    /// Fill color.
    pub color: Color,
}

/// A single play-through of a generated maze.
///
/// The session borrows the grid it is played on, so the grid has to outlive it. The optimal path is
/// computed once when the session is created and is only ever drawn; the player is free to ignore
/// it.
#[derive(Debug)]
pub struct GameSession<'grid> {
    /// Maze being played.
    grid: &'grid Grid,
    /// Current player position.
    player: Coord,
    /// Cell the player has to reach.
    goal: Coord,
    /// Shortest route from the start to the goal, start excluded.
    path: Vec<Coord>,
    /// Where the session is in its lifecycle.
    state: SessionState,
}

impl<'grid> GameSession<'grid> {
    /// Starts a session on `grid` with the player on the seed cell and the goal in the opposite
    /// corner, at `(cols - 2, rows - 2)`.
    ///
    /// # Errors
    ///
    /// This function fails if the grid is too small for the start or goal cell to lie inside it.
    pub fn new(grid: &'grid Grid) -> Result<Self> {
        let goal = Coord::new(
            grid.cols().checked_sub(2).ok_or_eyre("grid has too few columns for a goal")?,
            grid.rows().checked_sub(2).ok_or_eyre("grid has too few rows for a goal")?,
        );
        let path = pathfinding::find_path(grid, SEED_CELL, goal)?;

        if path.is_empty() && goal != SEED_CELL {
            log::warn!("goal {goal} cannot be reached from {SEED_CELL}");
        } else {
            log::info!("optimal path from {SEED_CELL} to {goal} is {} steps", path.len());
        }

        let mut session = Self {
            grid,
            player: SEED_CELL,
            goal,
            path,
            state: SessionState::Running,
        };
        session.check_goal();

        Ok(session)
    }

    /// Returns the maze being played.
    pub const fn grid(&self) -> &'grid Grid {
        self.grid
    }

    /// Returns the current player position.
    pub const fn player(&self) -> Coord {
        self.player
    }

    /// Returns the goal position.
    pub const fn goal(&self) -> Coord {
        self.goal
    }

    /// Returns the precomputed optimal path, start excluded and goal included.
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// Returns the current session state.
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Applies one input event.
    ///
    /// Input is ignored once the session has been won or quit. A move into a wall or off the grid
    /// is silently rejected. After a move, the session is won if the player stands on the goal.
    /// On a grid where the start is the goal the session is already won when it is created.
    pub fn handle(&mut self, input: Input) {
        if self.state != SessionState::Running {
            return;
        }

        match input {
            Input::Quit => {
                log::info!("player quit at {}", self.player);
                self.state = SessionState::Quit;
            }
            Input::Move(direction) => {
                let target = self
                    .player
                    .step(direction, 1)
                    .filter(|next| self.grid.is_open(*next));

                if let Some(next) = target {
                    log::trace!("player moved {direction:?} to {next}");
                    self.player = next;
                } else {
                    log::trace!("player blocked moving {direction:?} from {}", self.player);
                }

                self.check_goal();
            }
        }
    }

    /// Marks the session won if the player stands on the goal.
    fn check_goal(&mut self) {
        if self.player == self.goal {
            log::info!("player reached the goal at {}", self.goal);
            self.state = SessionState::Won;
        }
    }

    /// Builds the ordered draw list for one frame.
    ///
    /// The list holds one rectangle per grid cell in row-major order, then one per path cell when
    /// `show_path` is set, then the player and finally the goal. Later rectangles paint over
    /// earlier ones.
    ///
    /// # Errors
    ///
    /// This function fails if a rectangle's position does not fit in terminal coordinates.
    pub fn draw_commands(&self, cell: CellSize, show_path: bool) -> Result<Vec<DrawCommand>> {
        let (cols, rows) = (self.grid.cols(), self.grid.rows());
        let mut commands = Vec::with_capacity(cols * rows + self.path.len() + 2);

        for y in 0..rows {
            for x in 0..cols {
                let color = match self.grid.cell_at(x, y)? {
                    Cell::Wall => WALL_COLOR,
                    Cell::Open => OPEN_COLOR,
                };
                commands.push(draw_command(Coord::new(x, y), cell, color)?);
            }
        }

        if show_path {
            for &step in &self.path {
                commands.push(draw_command(step, cell, PATH_COLOR)?);
            }
        }

        commands.push(draw_command(self.player, cell, PLAYER_COLOR)?);
        commands.push(draw_command(self.goal, cell, GOAL_COLOR)?);

        Ok(commands)
    }
}

/// Builds the rectangle covering `coord` for cells of size `cell`.
fn draw_command(coord: Coord, cell: CellSize, color: Color) -> Result<DrawCommand> {
    let x = u16::try_from(coord.x)?
        .checked_mul(cell.width)
        .ok_or_eyre("maze is too wide for terminal coordinates")?;
    let y = u16::try_from(coord.y)?
        .checked_mul(cell.height)
        .ok_or_eyre("maze is too tall for terminal coordinates")?;

    Ok(DrawCommand {
        area: Rect::new(x, y, cell.width, cell.height),
        color,
    })
}
