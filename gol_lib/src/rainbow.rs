//! The colours given to cells stamped in rainbow mode, & the slowly shifting phase used to animate them.

/// A colour made from red, green & blue components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::From, derive_more::Into)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The colours of the rainbow, from red to violet.
pub const RAINBOW: [Rgb; 7] = [
    Rgb(255, 0, 0),
    Rgb(255, 127, 0),
    Rgb(255, 255, 0),
    Rgb(0, 255, 0),
    Rgb(0, 0, 255),
    Rgb(75, 0, 130),
    Rgb(148, 0, 211),
];

/// The amount the [`RainbowPhase`] moves along the rainbow each frame.
pub const PHASE_STEP: f32 = 0.05;

/// A colour of the [`RAINBOW`], stored as its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RainbowColour(u8);

impl RainbowColour {
    /// The colour for the cell at the given offset within a stamped pattern.
    ///
    /// Colours run diagonally through a pattern, repeating every seven cells.
    /// ```
    /// # use gol_lib::{RainbowColour, RAINBOW};
    /// assert_eq!(RainbowColour::for_offset(0, 0).rgb(), RAINBOW[0]);
    /// assert_eq!(RainbowColour::for_offset(2, 3).rgb(), RAINBOW[5]);
    /// assert_eq!(RainbowColour::for_offset(4, 3).rgb(), RAINBOW[0]);
    /// ```
    pub fn for_offset(x: usize, y: usize) -> Self {
        Self(((x + y) % RAINBOW.len()) as u8)
    }

    /// The index of this colour within the [`RAINBOW`].
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// The colour itself.
    pub fn rgb(self) -> Rgb {
        RAINBOW[self.index()]
    }

    /// This colour moved along the rainbow by the whole steps of the given phase.
    pub fn shifted(self, phase: RainbowPhase) -> Rgb {
        RAINBOW[(self.index() + phase.whole_steps()) % RAINBOW.len()]
    }
}

/// How far along the rainbow every custom coloured cell has drifted.
///
/// The phase is always within `0.0..7.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RainbowPhase(f32);

impl RainbowPhase {
    /// Moves the phase along by [`PHASE_STEP`], wrapping back to the start of the rainbow.
    pub fn advance(&mut self) {
        self.0 = (self.0 + PHASE_STEP) % RAINBOW.len() as f32;
    }

    /// The current value of the phase.
    pub fn get(self) -> f32 {
        self.0
    }

    /// The amount of whole colours the phase has moved by.
    pub fn whole_steps(self) -> usize {
        self.0.floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// The phase only changes the colour after it has moved a whole step.
    fn shift_by_whole_steps() {
        let colour = RainbowColour::for_offset(1, 0);
        let mut phase = RainbowPhase::default();

        for _ in 0..19 {
            phase.advance();
        }
        assert_eq!(colour.shifted(phase), RAINBOW[1]);

        // 21 steps of 0.05 moves past 1.0
        phase.advance();
        phase.advance();
        assert_eq!(colour.shifted(phase), RAINBOW[2]);
    }

    #[test]
    /// The phase wraps around so that it never leaves the rainbow.
    fn phase_wraps() {
        let mut phase = RainbowPhase::default();
        for _ in 0..1000 {
            phase.advance();
            assert!((0.0..7.0).contains(&phase.get()));
        }
    }

    #[test]
    fn shifted_wraps_to_red() {
        let violet = RainbowColour::for_offset(6, 0);
        let mut phase = RainbowPhase::default();
        for _ in 0..25 {
            phase.advance();
        }

        assert_eq!(violet.shifted(phase), RAINBOW[0]);
    }

    #[test]
    fn rgb_conversion() {
        let (red, green, blue): (u8, u8, u8) = RAINBOW[5].into();
        assert_eq!((red, green, blue), (75, 0, 130));
        assert_eq!(Rgb::from((75, 0, 130)), RAINBOW[5]);
    }
}
