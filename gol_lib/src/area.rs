use crate::GlobalPosition;

/// A rectangle of positions, given by two opposite corners.
/// One corner will have the minimum x and minimum y values, the other will have the maximum x and maximum y values.
/// Both corners are inside the area.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Area {
    /// The min x & the min y position.
    min: GlobalPosition,
    /// The max x & the max y position.
    max: GlobalPosition,
}

impl Area {
    /// Constructs a new [`Area`] covering from the small x & y to the large x & y.
    /// The positions passed into this method will be sorted into the minimum and maximum corners.
    ///
    /// # Examples
    /// ```
    /// # use gol_lib::Area;
    /// let area = Area::new((1, 4), (10, -6));
    /// // Notice how they are sorted into the max & min corners.
    /// assert_eq!(area, Area::new((1, -6), (10, 4)));
    /// assert!(area.contains((5, 0)));
    /// ```
    pub fn new(pos1: impl Into<GlobalPosition>, pos2: impl Into<GlobalPosition>) -> Self {
        let pos1 = pos1.into();
        let pos2 = pos2.into();

        let min = GlobalPosition::new(pos1.x.min(pos2.x), pos1.y.min(pos2.y));
        let max = GlobalPosition::new(pos1.x.max(pos2.x), pos1.y.max(pos2.y));

        Self { min, max }
    }

    /// Constructs the [`Area`] with its top left at `origin` spanning `width` x `height` positions.
    ///
    /// A zero width or height is treated as one.
    pub fn from_size(origin: impl Into<GlobalPosition>, width: usize, height: usize) -> Self {
        let origin = origin.into();
        let span = |size: usize| i32::try_from(size.max(1) - 1).unwrap_or(i32::MAX);

        Self::new(origin, origin + (span(width), span(height)))
    }

    /// Returns true if the given position lies within this area.
    pub fn contains(&self, position: impl Into<GlobalPosition>) -> bool {
        let position = position.into();
        (self.min.x..=self.max.x).contains(&position.x)
            && (self.min.y..=self.max.y).contains(&position.y)
    }

    /// Returns an iterator over all the positions within this area, increasing x first then y.
    ///
    /// # Examples
    /// ```rust
    /// # use gol_lib::Area;
    /// let area = Area::new((1, 1), (2, 2));
    /// let mut iterate_over = area.iterate_over();
    ///
    /// // A (i32, i32) can be converted into a GlobalPosition with .into()
    /// assert_eq!(iterate_over.next().unwrap(), (1, 1).into());
    /// assert_eq!(iterate_over.next().unwrap(), (2, 1).into());
    /// assert_eq!(iterate_over.next().unwrap(), (1, 2).into());
    /// assert_eq!(iterate_over.next().unwrap(), (2, 2).into());
    /// assert!(iterate_over.next().is_none());
    /// ```
    pub fn iterate_over(&self) -> impl Iterator<Item = GlobalPosition> + use<> {
        let Area { min, max } = *self;
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| GlobalPosition::new(x, y)))
    }
}
