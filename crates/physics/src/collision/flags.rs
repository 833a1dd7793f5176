//! Content flags for filtering ground probes.

use serde::{Deserialize, Serialize};

/// What kind of volume a brush is.
///
/// Ground probes only see brushes whose contents intersect the probe mask,
/// so trigger volumes never hold a player up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ContentFlags(pub u32);

impl ContentFlags {
    /// Nothing.
    pub const EMPTY: Self = Self(0);

    /// Solid world geometry.
    pub const SOLID: Self = Self(1 << 0);

    /// Invisible wall that only blocks players.
    pub const PLAYER_CLIP: Self = Self(1 << 1);

    /// Trigger volume, never stood on.
    pub const TRIGGER: Self = Self(1 << 2);

    /// Everything a player can stand on.
    pub const MASK_GROUND: Self = Self(Self::SOLID.0 | Self::PLAYER_CLIP.0);

    /// Check if these flags contain all of `other`.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check if any of the given flags are set.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }
}

impl std::ops::BitOr for ContentFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
