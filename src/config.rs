//! Startup configuration parsed from the command line.

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use color_eyre::eyre::{ensure, OptionExt as _, Result};

use crate::{maze::MIN_SIDE, session::CellSize};

/// Startup configuration for a game.
///
/// Every flag is optional and defaults to the value the game uses when started without arguments.
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(version, about)]
pub struct Config {
    /// Number of maze columns, walls included.
    #[arg(long, default_value_t = 31)]
    pub cols: usize,
    /// Number of maze rows, walls included.
    #[arg(long, default_value_t = 21)]
    pub rows: usize,
    /// Terminal columns used to draw one maze cell.
    #[arg(long, default_value_t = 2)]
    pub cell_width: u16,
    /// Terminal rows used to draw one maze cell.
    #[arg(long, default_value_t = 1)]
    pub cell_height: u16,
    /// Frame-rate cap of the game loop.
    #[arg(long, default_value_t = 30)]
    pub fps: u32,
    /// Seed for maze generation; a random one is drawn and logged when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Do not draw the optimal path overlay.
    #[arg(long)]
    pub hide_path: bool,
    /// Write logs to this file instead of discarding them.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cols: 31,
            rows: 21,
            cell_width: 2,
            cell_height: 1,
            fps: 30,
            seed: None,
            hide_path: false,
            log_file: None,
        }
    }
}

impl Config {
    /// Checks that the configuration describes a playable game.
    ///
    /// # Errors
    ///
    /// This function fails when:
    /// - either maze dimension is below the minimum side
    /// - the frame rate or a cell dimension is zero
    /// - the maze does not fit in terminal coordinates
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.cols >= MIN_SIDE && self.rows >= MIN_SIDE,
            "maze must be at least {MIN_SIDE}x{MIN_SIDE}, got {}x{}",
            self.cols,
            self.rows
        );
        ensure!(self.fps > 0, "frame rate must be positive");
        ensure!(
            self.cell_width > 0 && self.cell_height > 0,
            "cell size must be positive, got {}x{}",
            self.cell_width,
            self.cell_height
        );

        let _ = u16::try_from(self.cols)?
            .checked_mul(self.cell_width)
            .ok_or_eyre("maze is too wide for the terminal")?;
        let _ = u16::try_from(self.rows)?
            .checked_mul(self.cell_height)
            .ok_or_eyre("maze is too tall for the terminal")?;

        Ok(())
    }

    /// Returns the seed to generate the maze from, drawing a random one if none was given.
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Returns the on-screen size of one maze cell.
    pub const fn cell_size(&self) -> CellSize {
        CellSize {
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Returns the time budget of one frame.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    /// Returns whether the goal sits on a cell carving can open.
    ///
    /// Carving only opens odd/odd vertices off the border and the passages between them. The goal
    /// is placed at `(cols - 2, rows - 2)`, which is such a vertex only when both dimensions are
    /// odd.
    pub const fn goal_is_carvable(&self) -> bool {
        self.cols % 2 == 1 && self.rows % 2 == 1
    }
}
