//! Contact reporting for a single step

use bitflags::bitflags;

bitflags! {
    /// Edges the ball touched during one step
    ///
    /// Several flags can be set at once, e.g. `RIGHT | FLOOR` in a corner.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Contacts: u8 {
        /// Left wall (x = 0)
        const LEFT = 1 << 0;
        /// Right wall (x = width)
        const RIGHT = 1 << 1;
        /// Floor (y = height)
        const FLOOR = 1 << 2;
        /// Ceiling (y = 0)
        const CEILING = 1 << 3;
        /// A floor bounce fell under the rest threshold and vy was zeroed
        const RESTED = 1 << 4;
    }
}

impl Contacts {
    /// True if any edge was hit
    pub fn any_edge(&self) -> bool {
        self.intersects(Self::LEFT | Self::RIGHT | Self::FLOOR | Self::CEILING)
    }
}
