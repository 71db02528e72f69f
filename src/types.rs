//! Type definitions for movement, player input and the session state machine.

/// Axis-aligned movement direction on the maze grid.
///
/// Directions are shared by maze carving, path search and player movement, so all three agree on
/// what a neighbor is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row zero.
    Up,
    /// Away from row zero.
    Down,
    /// Towards column zero.
    Left,
    /// Away from column zero.
    Right,
}

impl Direction {
    /// Canonical direction order, `(0,1)`, `(1,0)`, `(0,-1)`, `(-1,0)`.
    ///
    /// Unshuffled carving and neighbor expansion during search both walk the directions in this
    /// order.
    pub const ALL: [Self; 4] = [Self::Down, Self::Right, Self::Up, Self::Left];

    /// Returns the `(dx, dy)` unit offset of the direction.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Discrete input event delivered to a game session.
///
/// There is no analog input; every key press the shell cares about maps to exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// Request to end the session without a win.
    Quit,
    /// Request to move the player one cell.
    Move(Direction),
}

/// State of a game session.
///
/// A session starts [`Running`](SessionState::Running) and leaves it exactly once, either by
/// reaching the goal or by quitting. Both other states are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// The player is still exploring the maze.
    Running,
    /// The player stepped onto the goal cell.
    Won,
    /// The player asked to quit.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_offsets() {
        assert_eq!(Direction::Up.offset(), (0, -1));
        assert_eq!(Direction::Down.offset(), (0, 1));
        assert_eq!(Direction::Left.offset(), (-1, 0));
        assert_eq!(Direction::Right.offset(), (1, 0));
    }

    #[test]
    fn test_canonical_order() {
        let offsets = Direction::ALL.map(Direction::offset);

        assert_eq!(offsets, [(0, 1), (1, 0), (0, -1), (-1, 0)]);
    }

    #[test]
    fn test_offsets_are_unit_steps() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            assert_eq!(
                dx.abs() + dy.abs(),
                1,
                "{direction:?} should move exactly one cell"
            );
        }
    }

    #[test]
    fn test_input_variants() {
        assert_eq!(Input::Move(Direction::Up), Input::Move(Direction::Up));
        assert_ne!(Input::Move(Direction::Up), Input::Move(Direction::Down));
        assert_ne!(Input::Quit, Input::Move(Direction::Left));
    }

    #[test]
    fn test_debug_implementations() {
        assert_eq!(format!("{:?}", SessionState::Running), "Running");
        assert_eq!(format!("{:?}", Input::Quit), "Quit");
        assert_eq!(
            format!("{:?}", Input::Move(Direction::Right)),
            "Move(Right)"
        );
    }
}
