use std::num::NonZeroUsize;

/// The x & y positions of a [`Cell`] on the Conways game of life board.
///
/// To move "right" on the board, the x must be increased.
/// To move "down" on the board, the y must be increased.
/// The opposites also apply.
///
/// A position may lie outside of the board; the board wraps it around its edges before use.
///
/// [`Cell`]: crate::Cell
#[derive(Eq, Hash, PartialEq, Clone, Copy, Debug, Default)]
pub struct GlobalPosition {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl GlobalPosition {
    /// Creates a new [`GlobalPosition`] at the given x & y coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Gets the represented x position.
    pub fn get_x(&self) -> i32 {
        self.x
    }

    /// Gets the represented y position.
    pub fn get_y(&self) -> i32 {
        self.y
    }

    /// Wraps this position onto a torus of the given width & height, returning the column & row it lands on.
    ///
    /// ```
    /// # use gol_lib::GlobalPosition;
    /// # use std::num::NonZeroUsize;
    /// let cols = NonZeroUsize::new(10).unwrap();
    /// let rows = NonZeroUsize::new(5).unwrap();
    ///
    /// assert_eq!(GlobalPosition::new(-1, 5).wrap(cols, rows), (9, 0));
    /// assert_eq!(GlobalPosition::new(23, -6).wrap(cols, rows), (3, 4));
    /// ```
    pub fn wrap(&self, cols: NonZeroUsize, rows: NonZeroUsize) -> (usize, usize) {
        let col = i64::from(self.x).rem_euclid(cols.get() as i64);
        let row = i64::from(self.y).rem_euclid(rows.get() as i64);
        (col as usize, row as usize)
    }
}

impl<T: Into<GlobalPosition>> std::ops::Sub<T> for GlobalPosition {
    type Output = Self;

    fn sub(self, other_position: T) -> Self::Output {
        let other_position: GlobalPosition = other_position.into();
        GlobalPosition::new(self.x - other_position.x, self.y - other_position.y)
    }
}

impl<T: Into<GlobalPosition>> std::ops::Add<T> for GlobalPosition {
    type Output = Self;

    fn add(self, other_position: T) -> Self::Output {
        let other_position: GlobalPosition = other_position.into();
        GlobalPosition::new(self.x + other_position.x, self.y + other_position.y)
    }
}

impl From<(i32, i32)> for GlobalPosition {
    fn from((x, y): (i32, i32)) -> Self {
        GlobalPosition { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(cols: usize, rows: usize) -> (NonZeroUsize, NonZeroUsize) {
        (
            NonZeroUsize::new(cols).unwrap(),
            NonZeroUsize::new(rows).unwrap(),
        )
    }

    #[test]
    /// Positions already on the board are unchanged by wrapping.
    fn wrap_inside() {
        let (cols, rows) = size(8, 6);
        assert_eq!(GlobalPosition::new(0, 0).wrap(cols, rows), (0, 0));
        assert_eq!(GlobalPosition::new(7, 5).wrap(cols, rows), (7, 5));
    }

    #[test]
    /// Positions past either edge re-enter from the opposite edge.
    fn wrap_outside() {
        let (cols, rows) = size(8, 6);
        assert_eq!(GlobalPosition::new(8, 6).wrap(cols, rows), (0, 0));
        assert_eq!(GlobalPosition::new(-1, -1).wrap(cols, rows), (7, 5));
        assert_eq!(GlobalPosition::new(-17, 13).wrap(cols, rows), (7, 1));
    }

    #[test]
    fn add_and_sub() {
        let position = GlobalPosition::new(3, -2);
        assert_eq!(position + (1, 1), GlobalPosition::new(4, -1));
        assert_eq!(position - (3, -2), GlobalPosition::new(0, 0));
    }
}
