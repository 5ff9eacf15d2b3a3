//! Contains [`Board`], the simulation engine.
//! See its documentation for more information.

use std::{collections::HashMap, num::NonZeroUsize};

use rand::Rng;

use crate::{
    Area, Cell, CellState, GlobalPosition, Grid, Pattern, RainbowColour, RainbowPhase, Rgb,
    UnknownPattern,
};

/// A toroidal Conways game of life board.
///
/// Alongside the cells of the current generation the board remembers the previous generation, so that every cell
/// has a [`CellState`] describing how it changed. Cells stamped in rainbow mode are given a [`RainbowColour`],
/// which stays with the position until the board is cleared or randomized.
#[derive(Debug, Clone)]
pub struct Board {
    /// The generation that this simulation is on.
    generation: u64,
    /// The cells of the current generation.
    current: Grid,
    /// The cells of the generation before the last tick.
    previous: Grid,
    /// The animation state of every cell, row by row.
    states: Box<[CellState]>,
    /// The custom colours of stamped cells, keyed by wrapped position.
    colours: HashMap<GlobalPosition, RainbowColour>,
    /// How far the custom colours have drifted along the rainbow.
    phase: RainbowPhase,
}

impl Board {
    /// Creates a board of the given size with every cell dead.
    pub fn new(cols: NonZeroUsize, rows: NonZeroUsize) -> Self {
        Self {
            generation: 0,
            current: Grid::new(cols, rows),
            previous: Grid::new(cols, rows),
            states: vec![CellState::Dead; cols.get() * rows.get()].into_boxed_slice(),
            colours: HashMap::new(),
            phase: RainbowPhase::default(),
        }
    }

    /// The amount of cells in the x axis.
    pub fn cols(&self) -> NonZeroUsize {
        self.current.cols()
    }

    /// The amount of cells in the y axis.
    pub fn rows(&self) -> NonZeroUsize {
        self.current.rows()
    }

    /// The area covered by the board, with the top left at the origin.
    pub fn area(&self) -> Area {
        self.current.area()
    }

    /// Gets the current generation of simulation.
    pub fn get_generation(&self) -> u64 {
        self.generation
    }

    /// The amount of alive cells.
    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// The cells of the current generation.
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Gets the cell at the given position on the board.
    pub fn get(&self, position: impl Into<GlobalPosition>) -> Cell {
        self.current.get(position)
    }

    /// Gets the animation state of the cell at the given position.
    pub fn cell_state(&self, position: impl Into<GlobalPosition>) -> CellState {
        self.states[self.current.index(position.into())]
    }

    /// Gets the custom colour of the cell at the given position, if it has one.
    pub fn colour(&self, position: impl Into<GlobalPosition>) -> Option<RainbowColour> {
        self.colours.get(&self.wrap(position.into())).copied()
    }

    /// Gets the custom colour of the cell at the given position, moved along the rainbow by the current phase.
    pub fn display_colour(&self, position: impl Into<GlobalPosition>) -> Option<Rgb> {
        self.colour(position).map(|colour| colour.shifted(self.phase))
    }

    /// How far the custom colours have drifted along the rainbow.
    pub fn rainbow_phase(&self) -> RainbowPhase {
        self.phase
    }

    /// Drifts the custom colours one step further along the rainbow.
    pub fn advance_rainbow(&mut self) {
        self.phase.advance();
    }

    /// Counts the alive cells surrounding the given position.
    pub fn count_neighbours(&self, position: impl Into<GlobalPosition>) -> u8 {
        self.current.count_neighbours(position)
    }

    /// Advances the simulation by one generation.
    pub fn tick(&mut self) {
        let next = self.current.next_generation();
        self.previous = std::mem::replace(&mut self.current, next);
        self.generation += 1;
        self.refresh_states();

        log::trace!(
            "Generation {} has {} alive cells",
            self.generation,
            self.population()
        );
    }

    /// Sets the cell at the given position on the board.
    pub fn set(&mut self, position: impl Into<GlobalPosition>, cell: Cell) {
        self.current.set(position, cell);
        self.refresh_states();
    }

    /// Inverts the cell at the given position, returning its new value.
    pub fn toggle(&mut self, position: impl Into<GlobalPosition>) -> Cell {
        let cell = self.current.toggle(position);
        self.refresh_states();
        cell
    }

    /// Sets every cell to dead, removes all custom colours & sets the generation to 0.
    pub fn clear(&mut self) {
        self.reset();
        self.refresh_states();
    }

    /// Makes each cell alive with the given probability, removing all custom colours & setting the generation to 0.
    ///
    /// The probability is clamped between 0 & 1. A NaN probability is treated as 0.
    pub fn randomize(&mut self, probability: f64, rng: &mut impl Rng) {
        let probability = match probability.is_nan() {
            true => 0.0,
            false => probability.clamp(0.0, 1.0),
        };

        self.reset();
        self.current
            .fill_with(|| Cell::from(rng.gen_bool(probability)));
        self.refresh_states();

        log::debug!(
            "Randomized board with probability {probability}: {} alive cells",
            self.population()
        );
    }

    /// Stamps the pattern onto the board with its top left at `origin`, wrapping around the edges.
    ///
    /// Only the alive cells of the pattern are written; cells under the pattern's dead cells are left as they were.
    /// In rainbow mode every stamped cell is also given a [`RainbowColour`].
    pub fn place(&mut self, pattern: Pattern, origin: impl Into<GlobalPosition>, rainbow: bool) {
        let origin = self.wrap(origin.into());

        for offset in pattern.alive_offsets() {
            let position = self.wrap(origin + offset);
            self.current.set(position, Cell::Alive);

            if rainbow {
                let colour = RainbowColour::for_offset(offset.x as usize, offset.y as usize);
                self.colours.insert(position, colour);
            }
        }
        self.refresh_states();

        log::debug!("Placed {pattern} at {origin:?} (rainbow: {rainbow})");
    }

    /// Stamps the pattern with the given name onto the board. See [`Board::place`].
    ///
    /// # Errors
    /// If the name does not match a [`Pattern`] then the board is left unmodified and [`UnknownPattern`] is returned.
    pub fn place_pattern(
        &mut self,
        name: &str,
        origin: impl Into<GlobalPosition>,
        rainbow: bool,
    ) -> Result<Pattern, UnknownPattern> {
        let pattern: Pattern = name.parse().inspect_err(|err| log::warn!("{err}"))?;
        self.place(pattern, origin, rainbow);
        Ok(pattern)
    }

    /// Clears the board, then stamps `count` random patterns at random positions in rainbow mode.
    pub fn place_random_patterns(&mut self, count: usize, rng: &mut impl Rng) {
        self.reset();

        for _ in 0..count {
            let pattern = Pattern::random(rng);
            let position = self.random_position(rng);
            self.place(pattern, position, true);
        }
        self.refresh_states();
    }

    /// A uniformly random position on the board.
    pub fn random_position(&self, rng: &mut impl Rng) -> GlobalPosition {
        let x = rng.gen_range(0..self.cols().get());
        let y = rng.gen_range(0..self.rows().get());
        GlobalPosition::new(x as i32, y as i32)
    }

    /// Iterates over every cell that is not [`CellState::Dead`], row by row.
    pub fn visible_cells(&self) -> impl Iterator<Item = (GlobalPosition, CellState)> + '_ {
        self.area()
            .iterate_over()
            .zip(self.states.iter().copied())
            .filter(|(_, state)| *state != CellState::Dead)
    }

    /// Empties both generations & the colour map, starting the board again from generation 0.
    fn reset(&mut self) {
        self.current.clear();
        self.previous.clear();
        self.colours.clear();
        self.generation = 0;
    }

    /// Recomputes the animation state of every cell from the current & previous generations.
    fn refresh_states(&mut self) {
        let current = self.current.cells();
        let previous = self.previous.cells();

        for ((state, current), previous) in self.states.iter_mut().zip(current).zip(previous) {
            *state = CellState::derive(*current, *previous);
        }
    }

    /// The position on the board that the given position wraps around to.
    fn wrap(&self, position: GlobalPosition) -> GlobalPosition {
        self.current.wrap(position)
    }
}
