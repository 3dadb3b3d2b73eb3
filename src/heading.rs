use itertools::Itertools;
use strum::VariantArray;

use crate::location::Location;

/// The four ways the guard can face, declared in clockwise rotation order.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub(crate) enum Heading {
    UP,
    RIGHT,
    DOWN,
    LEFT,
}

impl Heading {
    pub(crate) fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::UP => location.offset_by((0, -1)),
            Self::RIGHT => location.offset_by((1, 0)),
            Self::DOWN => location.offset_by((0, 1)),
            Self::LEFT => location.offset_by((-1, 0)),
        }
    }

    pub(crate) fn clockwise(&self) -> Self {
        Self::VARIANTS[(self.index() + 1) % Self::VARIANTS.len()]
    }

    /// Position of this variant in the clockwise declaration order; doubles as
    /// the bit index in per-cell visited masks.
    pub(crate) fn index(&self) -> usize {
        Self::VARIANTS.iter().find_position(|dir| **dir == *self).unwrap().0
    }

    pub(crate) fn mask_bit(&self) -> u8 {
        1 << self.index()
    }
}
