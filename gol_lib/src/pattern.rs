//! The predefined patterns that can be stamped onto a [`Board`].
//!
//! [`Board`]: crate::Board

use std::str::FromStr;

use enum_iterator::Sequence;
use rand::Rng;

use crate::{Area, GlobalPosition};

/// A small fixed template of cells.
///
/// The name of a pattern (as given by its [`Display`] implementation) can be parsed back into the pattern:
/// ```
/// # use gol_lib::Pattern;
/// let pattern: Pattern = "pentadecathlon".parse().unwrap();
/// assert_eq!(pattern, Pattern::Pentadecathlon);
/// assert_eq!(pattern.to_string(), "pentadecathlon");
/// assert!("gun".parse::<Pattern>().is_err());
/// ```
///
/// [`Display`]: std::fmt::Display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence, derive_more::Display)]
pub enum Pattern {
    #[display("glider")]
    Glider,
    #[display("blinker")]
    Blinker,
    #[display("toad")]
    Toad,
    #[display("beacon")]
    Beacon,
    #[display("pulsar")]
    Pulsar,
    #[display("pentadecathlon")]
    Pentadecathlon,
    /// The lightweight spaceship.
    #[display("spaceship")]
    Spaceship,
}

/// The error returned when a name does not match any [`Pattern`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown pattern \"{0}\"")]
pub struct UnknownPattern(pub Box<str>);

impl FromStr for Pattern {
    type Err = UnknownPattern;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let trimmed = name.trim();
        enum_iterator::all::<Pattern>()
            .find(|pattern| pattern.to_string().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownPattern(name.into()))
    }
}

impl Pattern {
    /// The rows of the template, from top to bottom. A `1` is an alive cell.
    pub fn template(self) -> &'static [&'static [u8]] {
        match self {
            Pattern::Glider => &[&[0, 1, 0], &[0, 0, 1], &[1, 1, 1]],
            Pattern::Blinker => &[&[1, 1, 1]],
            Pattern::Toad => &[&[0, 1, 1, 1], &[1, 1, 1, 0]],
            Pattern::Beacon => &[&[1, 1, 0, 0], &[1, 1, 0, 0], &[0, 0, 1, 1], &[0, 0, 1, 1]],
            Pattern::Pulsar => &[
                &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
                &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
                &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
                &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
                &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
                &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
                &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
                &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
                &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
                &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
            ],
            Pattern::Pentadecathlon => &[
                &[0, 0, 1, 0, 0, 0, 0, 1, 0, 0],
                &[1, 1, 0, 1, 1, 1, 1, 0, 1, 1],
                &[0, 0, 1, 0, 0, 0, 0, 1, 0, 0],
            ],
            Pattern::Spaceship => &[
                &[0, 1, 1, 1, 1],
                &[1, 0, 0, 0, 1],
                &[0, 0, 0, 0, 1],
                &[1, 0, 0, 1, 0],
            ],
        }
    }

    /// The amount of cells the template spans in the x axis.
    pub fn width(self) -> usize {
        self.template().first().map_or(0, |row| row.len())
    }

    /// The amount of cells the template spans in the y axis.
    pub fn height(self) -> usize {
        self.template().len()
    }

    /// The area the template covers, relative to its top left.
    pub fn footprint(self) -> Area {
        Area::from_size((0, 0), self.width(), self.height())
    }

    /// The offsets of the alive cells within the template, relative to its top left.
    pub fn alive_offsets(self) -> impl Iterator<Item = GlobalPosition> {
        let template = self.template();
        self.footprint()
            .iterate_over()
            .filter(move |offset| template[offset.y as usize][offset.x as usize] == 1)
    }

    /// Picks one of the patterns uniformly at random.
    pub fn random(rng: &mut impl Rng) -> Pattern {
        let index = rng.gen_range(0..enum_iterator::cardinality::<Pattern>());
        enum_iterator::all::<Pattern>()
            .nth(index)
            .unwrap_or(Pattern::Glider)
    }
}
