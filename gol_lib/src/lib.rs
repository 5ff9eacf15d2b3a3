//! A Conways game of life simulation on a fixed size board whose edges wrap around.
//!
//! The [`Board`] owns everything about the simulation: the current & previous generations, the animation state
//! of every cell, and the custom rainbow colours of stamped [`Pattern`]s.
//!
//! ```
//! # use gol_lib::{Board, Cell, CellState, Pattern};
//! # use std::num::NonZeroUsize;
//! let size = NonZeroUsize::new(16).unwrap();
//! let mut board = Board::new(size, size);
//!
//! board.place(Pattern::Blinker, (4, 4), true);
//! board.tick();
//!
//! assert_eq!(board.get((5, 3)), Cell::Alive);
//! assert_eq!(board.cell_state((5, 3)), CellState::Born);
//! assert_eq!(board.cell_state((4, 4)), CellState::Dying);
//! ```

mod area;
mod board;
mod cell;
mod grid;
mod pattern;
mod position;
mod rainbow;

pub use area::Area;
pub use board::Board;
pub use cell::{Cell, CellState};
pub use grid::Grid;
pub use pattern::{Pattern, UnknownPattern};
pub use position::GlobalPosition;
pub use rainbow::{PHASE_STEP, RAINBOW, RainbowColour, RainbowPhase, Rgb};
