/// Represents the liveness of a cell within the Conways game of life simulation.
///
/// An alive cell is represented as `true`.
/// A dead cell is represented as `false`.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl From<Cell> for bool {
    fn from(value: Cell) -> Self {
        value == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        match value {
            true => Cell::Alive,
            false => Cell::Dead,
        }
    }
}

impl Cell {
    /// Returns the opposite of the current cell.
    pub fn invert(self) -> Cell {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Applies the B3/S23 rule to this cell given the amount of alive neighbours it has.
    pub fn next(self, alive_neighbours: u8) -> Cell {
        match (self, alive_neighbours) {
            // Survives
            (Cell::Alive, 2 | 3) => Cell::Alive,
            // Reproduction
            (Cell::Dead, 3) => Cell::Alive,
            // Under population, over population, or stays dead
            _ => Cell::Dead,
        }
    }
}

/// The transient animation state of a cell, derived from two consecutive generations.
///
/// This is only used to decide how a cell should be drawn.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum CellState {
    /// Dead in both generations.
    #[default]
    Dead,
    /// Alive in both generations.
    Alive,
    /// Alive in the previous generation, dead in the current one.
    Dying,
    /// Dead in the previous generation, alive in the current one.
    Born,
}

impl CellState {
    /// Classifies a cell from its current & previous liveness.
    pub fn derive(current: Cell, previous: Cell) -> Self {
        match (current, previous) {
            (Cell::Alive, Cell::Dead) => CellState::Born,
            (Cell::Alive, Cell::Alive) => CellState::Alive,
            (Cell::Dead, Cell::Alive) => CellState::Dying,
            (Cell::Dead, Cell::Dead) => CellState::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Exactly three neighbours always produce an alive cell.
    fn three_neighbours_is_alive() {
        assert_eq!(Cell::Dead.next(3), Cell::Alive);
        assert_eq!(Cell::Alive.next(3), Cell::Alive);
    }

    #[test]
    /// Two neighbours keep the cell as it was.
    fn two_neighbours_keeps_state() {
        assert_eq!(Cell::Dead.next(2), Cell::Dead);
        assert_eq!(Cell::Alive.next(2), Cell::Alive);
    }

    #[test]
    /// Any other amount of neighbours results in a dead cell.
    fn other_neighbours_are_dead() {
        for neighbours in [0, 1, 4, 5, 6, 7, 8] {
            assert_eq!(Cell::Dead.next(neighbours), Cell::Dead);
            assert_eq!(
                Cell::Alive.next(neighbours),
                Cell::Dead,
                "An alive cell with {neighbours} neighbours must die"
            );
        }
    }

    #[test]
    fn derive_state() {
        assert_eq!(CellState::derive(Cell::Alive, Cell::Dead), CellState::Born);
        assert_eq!(CellState::derive(Cell::Alive, Cell::Alive), CellState::Alive);
        assert_eq!(CellState::derive(Cell::Dead, Cell::Alive), CellState::Dying);
        assert_eq!(CellState::derive(Cell::Dead, Cell::Dead), CellState::Dead);
    }

    #[test]
    fn invert() {
        assert_eq!(Cell::Alive.invert(), Cell::Dead);
        assert_eq!(Cell::Dead.invert(), Cell::Alive);
    }
}
