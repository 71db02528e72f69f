//! Maze generation module.
//!
//! This module contains the randomized depth-first carver that turns an all-wall [`Grid`] into a
//! perfect maze. Maze vertices sit on a stride-2 lattice anchored at the seed cell `(1, 1)`, and
//! the cells between two adjacent vertices are the passages carving may open.

use color_eyre::eyre::{ensure, Result};
use rand::{rngs::StdRng, seq::SliceRandom as _, SeedableRng as _};

use crate::{
    grid::{Cell, Coord, Grid},
    types::Direction,
};

/// Cell every maze is carved from.
pub const SEED_CELL: Coord = Coord::new(1, 1);

/// Smallest accepted grid side; anything below has no interior cell for the seed.
pub const MIN_SIDE: usize = 3;

/// Source of the order in which a vertex tries its four directions.
#[derive(Debug)]
enum DirectionOrder {
    /// Uniformly shuffled on every visit.
    Shuffled(StdRng),
    /// Always [`Direction::ALL`].
    Canonical,
}

/// A vertex on the carving stack together with the directions it still has to try.
#[derive(Debug)]
struct Frame {
    /// Vertex being visited.
    vertex: Coord,
    /// Direction order picked when the vertex was entered.
    directions: [Direction; 4],
    /// Index into `directions` of the next direction to try.
    next: usize,
}

/// Randomized depth-first maze generator.
///
/// The generator owns its random source, so two generators built from the same seed carve the same
/// mazes in the same sequence.
#[derive(Debug)]
pub struct MazeGenerator {
    /// Where direction orders come from.
    order: DirectionOrder,
}

impl MazeGenerator {
    /// Creates a generator whose direction shuffles are driven by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            order: DirectionOrder::Shuffled(StdRng::seed_from_u64(seed)),
        }
    }

    /// Creates a generator that never shuffles and always tries directions in canonical order.
    ///
    /// Useful for reproducible layouts that do not depend on the random number generator's
    /// algorithm.
    pub const fn unshuffled() -> Self {
        Self {
            order: DirectionOrder::Canonical,
        }
    }

    /// Carves a new `cols x rows` maze.
    ///
    /// Every cell starts as a wall and the seed cell `(1, 1)` is opened. From there the carver
    /// walks depth-first: on entering a vertex it picks an order for the four directions, and for
    /// each one it looks two cells ahead. If that cell is an interior wall, the cell in between and
    /// the cell ahead are opened and the walk continues from the new vertex before the next
    /// direction is tried. Backtracking happens when a vertex runs out of directions.
    ///
    /// Only interior cells become vertices, so the outer border stays wall even when a dimension is
    /// even and the last row or column would otherwise be reachable.
    ///
    /// The walk uses an explicit stack instead of recursion, so large grids cannot exhaust the call
    /// stack. The visit order and the number of random draws are the same as the recursive form.
    ///
    /// # Errors
    ///
    /// This function fails if either dimension is below [`MIN_SIDE`] or if the grid would not fit
    /// in memory addressing.
    pub fn generate(&mut self, cols: usize, rows: usize) -> Result<Grid> {
        ensure!(
            cols >= MIN_SIDE && rows >= MIN_SIDE,
            "maze dimensions must be at least {MIN_SIDE}x{MIN_SIDE}, got {cols}x{rows}"
        );

        let mut grid = Grid::filled(cols, rows, Cell::Wall)?;
        grid.open(SEED_CELL)?;

        let mut stack = vec![Frame {
            vertex: SEED_CELL,
            directions: self.next_order(),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(direction) = frame.directions.get(frame.next).copied() else {
                let _ = stack.pop();
                continue;
            };
            frame.next += 1;
            let vertex = frame.vertex;

            let Some(passage) = vertex.step(direction, 1) else {
                continue;
            };
            let Some(neighbor) = vertex.step(direction, 2) else {
                continue;
            };
            if !grid.is_interior(neighbor) || grid.is_open(neighbor) {
                continue;
            }

            grid.open(passage)?;
            grid.open(neighbor)?;
            stack.push(Frame {
                vertex: neighbor,
                directions: self.next_order(),
                next: 0,
            });
        }

        Ok(grid)
    }

    /// Returns the direction order for a freshly entered vertex.
    fn next_order(&mut self) -> [Direction; 4] {
        let mut directions = Direction::ALL;
        if let DirectionOrder::Shuffled(rng) = &mut self.order {
            directions.shuffle(rng);
        }

        directions
    }
}
