//! Contains [`Grid`].
//! See its documentation for more information.

use std::num::NonZeroUsize;

use crate::{Area, Cell, GlobalPosition};

/// The offsets of the eight cells surrounding a cell.
const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A fixed size toroidal board of cells.
///
/// Every position given to a [`Grid`] is wrapped around its edges, so any [`GlobalPosition`] refers to a cell.
/// The cells are stored row by row.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cols: NonZeroUsize,
    rows: NonZeroUsize,
    cells: Box<[Cell]>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn new(cols: NonZeroUsize, rows: NonZeroUsize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::Dead; cols.get() * rows.get()].into_boxed_slice(),
        }
    }

    /// The amount of cells in the x axis.
    pub fn cols(&self) -> NonZeroUsize {
        self.cols
    }

    /// The amount of cells in the y axis.
    pub fn rows(&self) -> NonZeroUsize {
        self.rows
    }

    /// The area covered by this grid, with the top left at the origin.
    pub fn area(&self) -> Area {
        Area::from_size((0, 0), self.cols.get(), self.rows.get())
    }

    /// Moves the position onto the grid, wrapping around the edges.
    pub(crate) fn wrap(&self, position: GlobalPosition) -> GlobalPosition {
        let (col, row) = position.wrap(self.cols, self.rows);
        GlobalPosition::new(col as i32, row as i32)
    }

    pub(crate) fn index(&self, position: GlobalPosition) -> usize {
        let (col, row) = position.wrap(self.cols, self.rows);
        row * self.cols.get() + col
    }

    /// Gets the cell at the given (wrapped) position.
    pub fn get(&self, position: impl Into<GlobalPosition>) -> Cell {
        self.cells[self.index(position.into())]
    }

    /// Sets the cell at the given (wrapped) position.
    pub fn set(&mut self, position: impl Into<GlobalPosition>, cell: Cell) {
        let index = self.index(position.into());
        self.cells[index] = cell;
    }

    /// Inverts the cell at the given (wrapped) position, returning its new value.
    pub fn toggle(&mut self, position: impl Into<GlobalPosition>) -> Cell {
        let index = self.index(position.into());
        self.cells[index] = self.cells[index].invert();
        self.cells[index]
    }

    /// Sets every cell to dead.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Overwrites every cell with the value produced by `generate`, row by row.
    pub fn fill_with(&mut self, mut generate: impl FnMut() -> Cell) {
        self.cells.iter_mut().for_each(|cell| *cell = generate());
    }

    /// Counts the alive cells surrounding the given position, wrapping around the edges.
    pub fn count_neighbours(&self, position: impl Into<GlobalPosition>) -> u8 {
        let position = self.wrap(position.into());
        NEIGHBOURS
            .iter()
            .filter(|offset| self.get(position + **offset) == Cell::Alive)
            .count() as u8
    }

    /// Computes the generation that follows this one.
    pub fn next_generation(&self) -> Grid {
        let mut next = Grid::new(self.cols, self.rows);
        for (cell, position) in next.cells.iter_mut().zip(self.area().iterate_over()) {
            *cell = self.get(position).next(self.count_neighbours(position));
        }
        next
    }

    /// The amount of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| **cell == Cell::Alive).count()
    }

    /// All cells, row by row.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
