//! Pathfinding module.
//!
//! This module contains the A* search used to compute the optimal route from the player's start to
//! the goal. Movement is 4-directional with a uniform step cost of one, and the Manhattan distance
//! serves as the heuristic.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

use color_eyre::eyre::Result;

use crate::grid::{Coord, Grid, OutOfBounds};

/// Manhattan distance between two coordinates.
///
/// Admissible and consistent for 4-directional movement with unit cost, which is what keeps A*
/// optimal here.
pub const fn manhattan(from: Coord, to: Coord) -> usize {
    from.x.abs_diff(to.x) + from.y.abs_diff(to.y)
}

/// Frontier entry, ordered by estimated total cost and then by insertion order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    /// Estimated total cost `g + h`.
    estimate: usize,
    /// Insertion counter, gives FIFO order among equal estimates.
    order: usize,
    /// Coordinate this entry was pushed for.
    coord: Coord,
}

/// Bookkeeping for a single search, dropped when the search returns.
struct SearchState {
    /// Search target.
    goal: Coord,
    /// Best known cost from the start; a missing entry means the coordinate was never reached.
    g_score: HashMap<Coord, usize>,
    /// Predecessor of every reached coordinate except the start.
    came_from: HashMap<Coord, Coord>,
    /// Min-priority queue of discovered coordinates.
    frontier: BinaryHeap<Reverse<Entry>>,
    /// Number of entries pushed so far.
    pushed: usize,
}

impl SearchState {
    /// Creates the state for a search from `start` to `goal`.
    fn new(start: Coord, goal: Coord) -> Self {
        let mut state = Self {
            goal,
            g_score: HashMap::new(),
            came_from: HashMap::new(),
            frontier: BinaryHeap::new(),
            pushed: 0,
        };
        let _ = state.g_score.insert(start, 0);
        state.push(start, 0);

        state
    }

    /// Queues `coord`, reached at `cost`.
    fn push(&mut self, coord: Coord, cost: usize) {
        self.frontier.push(Reverse(Entry {
            estimate: cost + manhattan(coord, self.goal),
            order: self.pushed,
            coord,
        }));
        self.pushed += 1;
    }

    /// Pops the cheapest live entry, returning its coordinate and cost.
    ///
    /// Entries pushed before a cheaper route to the same coordinate was found are skipped.
    fn pop(&mut self) -> Option<(Coord, usize)> {
        while let Some(Reverse(entry)) = self.frontier.pop() {
            let Some(&cost) = self.g_score.get(&entry.coord) else {
                continue;
            };
            if cost + manhattan(entry.coord, self.goal) == entry.estimate {
                return Some((entry.coord, cost));
            }
        }

        None
    }

    /// Records `coord` as reached from `from` at `cost` if that beats any earlier route.
    fn relax(&mut self, from: Coord, coord: Coord, cost: usize) {
        if self.g_score.get(&coord).is_some_and(|&best| best <= cost) {
            return;
        }

        let _ = self.g_score.insert(coord, cost);
        let _ = self.came_from.insert(coord, from);
        self.push(coord, cost);
    }

    /// Follows predecessor links back from the goal, returning the path without the start.
    fn into_path(self) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut current = self.goal;
        while let Some(&previous) = self.came_from.get(&current) {
            path.push(current);
            current = previous;
        }
        path.reverse();

        path
    }
}

/// Finds a shortest path of open cells from `start` to `goal`.
///
/// The returned path excludes `start` and ends with `goal`, in walking order. An empty path means
/// either that `start == goal` or that the goal cannot be reached; neither case is an error.
///
/// # Errors
///
/// This function fails with [`OutOfBounds`] if `start` or `goal` lies outside the grid.
pub fn find_path(grid: &Grid, start: Coord, goal: Coord) -> Result<Vec<Coord>> {
    for coord in [start, goal] {
        if !grid.contains(coord) {
            return Err(OutOfBounds {
                coord,
                cols: grid.cols(),
                rows: grid.rows(),
            }
            .into());
        }
    }

    let mut state = SearchState::new(start, goal);
    while let Some((current, cost)) = state.pop() {
        if current == goal {
            return Ok(state.into_path());
        }

        for neighbor in grid.open_neighbors(current) {
            state.relax(current, neighbor, cost + 1);
        }
    }

    Ok(Vec::new())
}
