//! Grid model module.
//!
//! This module contains the cell grid every other part of the game reads from: the generator fills
//! it once, and afterwards search, movement and rendering only query it.

use std::{
    error::Error,
    fmt::{self, Write as _},
    str::FromStr,
};

use color_eyre::eyre::{bail, ensure, OptionExt as _, Report, Result};

use crate::types::Direction;

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Impassable cell.
    Wall,
    /// Walkable cell.
    Open,
}

/// Zero-based grid coordinate.
///
/// Used as a map key and as a priority-queue payload by the path search, hence the full set of
/// comparison and hashing derives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Coord {
    /// Creates a coordinate from a column and a row.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate `distance` cells away along `direction`.
    ///
    /// There is no upper bound check here since a coordinate does not know the grid it belongs to;
    /// `None` is only returned when the step would leave the non-negative quadrant.
    pub fn step(self, direction: Direction, distance: isize) -> Option<Self> {
        let (dx, dy) = direction.offset();

        Some(Self {
            x: self.x.checked_add_signed(dx.checked_mul(distance)?)?,
            y: self.y.checked_add_signed(dy.checked_mul(distance)?)?,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.x, self.y)
    }
}

/// Error raised when a coordinate falls outside the grid.
///
/// This is a programmer error: movement and search check bounds before touching a cell, so the
/// error only surfaces through direct [`Grid::cell_at`] calls with bad input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    /// Offending coordinate.
    pub coord: Coord,
    /// Column count of the grid that was queried.
    pub cols: usize,
    /// Row count of the grid that was queried.
    pub rows: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "coordinate {} is outside the {}x{} grid",
            self.coord, self.cols, self.rows
        )
    }
}

impl Error for OutOfBounds {}

/// Rectangular grid of wall and open cells.
///
/// Cells are stored row-major. The grid is read-only outside this crate; only the maze generator
/// and the text parser write cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns.
    cols: usize,
    /// Number of rows.
    rows: usize,
    /// Row-major cell storage of length `cols * rows`.
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid with every cell set to `cell`.
    ///
    /// # Errors
    ///
    /// This function fails when `cols * rows` overflows.
    pub(crate) fn filled(cols: usize, rows: usize, cell: Cell) -> Result<Self> {
        let len = cols
            .checked_mul(rows)
            .ok_or_eyre("grid dimensions overflow the address space")?;

        Ok(Self {
            cols,
            rows,
            cells: vec![cell; len],
        })
    }

    /// Returns the number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns whether `coord` lies inside the grid.
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x < self.cols && coord.y < self.rows
    }

    /// Returns whether `coord` lies inside the grid and off its outer border.
    pub const fn is_interior(&self, coord: Coord) -> bool {
        coord.x >= 1
            && coord.y >= 1
            && coord.x < self.cols.saturating_sub(1)
            && coord.y < self.rows.saturating_sub(1)
    }

    /// Returns the state of the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// This function fails with [`OutOfBounds`] when `x >= cols` or `y >= rows`.
    pub fn cell_at(&self, x: usize, y: usize) -> Result<Cell> {
        let coord = Coord::new(x, y);

        self.get(coord)
            .ok_or_else(|| self.out_of_bounds(coord).into())
    }

    /// Returns whether `coord` is an in-bounds open cell.
    pub fn is_open(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Cell::Open)
    }

    /// Iterates over the in-bounds open neighbors of `coord`, in canonical direction order.
    pub fn open_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| coord.step(direction, 1))
            .filter(move |neighbor| self.is_open(*neighbor))
    }

    /// Iterates over every open cell in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, cell)| *cell == Cell::Open)
            .map(move |(idx, _)| Coord::new(idx % self.cols, idx / self.cols))
    }

    /// Opens the cell at `coord`.
    ///
    /// # Errors
    ///
    /// This function fails with [`OutOfBounds`] when `coord` is outside the grid.
    pub(crate) fn open(&mut self, coord: Coord) -> Result<()> {
        let Some(slot) = self
            .index(coord)
            .and_then(|idx| self.cells.get_mut(idx))
        else {
            return Err(self.out_of_bounds(coord).into());
        };
        *slot = Cell::Open;

        Ok(())
    }

    /// Returns the state of the cell at `coord`, if it is inside the grid.
    fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord)
            .and_then(|idx| self.cells.get(idx))
            .copied()
    }

    /// Converts `coord` into an index into the cell storage.
    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.y * self.cols + coord.x)
    }

    /// Builds the error reported for accesses at `coord`.
    const fn out_of_bounds(&self, coord: Coord) -> OutOfBounds {
        OutOfBounds {
            coord,
            cols: self.cols,
            rows: self.rows,
        }
    }
}

/// Renders the grid as text, `#` for walls and a space for open cells, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if row_idx > 0 {
                formatter.write_char('\n')?;
            }
            for cell in row {
                formatter.write_char(match cell {
                    Cell::Wall => '#',
                    Cell::Open => ' ',
                })?;
            }
        }

        Ok(())
    }
}

/// Parses the text form produced by [`Display`](fmt::Display).
///
/// Open cells may also be written as `.`, which keeps fixtures readable when a row would otherwise
/// end in whitespace.
impl FromStr for Grid {
    type Err = Report;

    fn from_str(input: &str) -> Result<Self> {
        let lines: Vec<&str> = input.lines().collect();
        let cols = lines.first().map_or(0, |line| line.chars().count());

        ensure!(cols > 0, "grid text must start with a non-empty row");

        let mut cells = Vec::with_capacity(cols * lines.len());
        for (row_idx, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            ensure!(
                width == cols,
                "row {row_idx} is {width} cells wide, expected {cols}"
            );

            for symbol in line.chars() {
                cells.push(match symbol {
                    '#' => Cell::Wall,
                    ' ' | '.' => Cell::Open,
                    other => bail!("unexpected character {other:?} in row {row_idx}"),
                });
            }
        }

        Ok(Self {
            cols,
            rows: lines.len(),
            cells,
        })
    }
}
