// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Cascade contributors

//! GPIO interrupt event mask.

use core::ops::{BitOr, BitOrAssign};

/// Bitmask of GPIO interrupt conditions, laid out like the RP2040
/// `INTR`/`INTS` registers (four bits per pin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeEvents(u32);

impl EdgeEvents {
    pub const LEVEL_LOW: Self = Self(0x1);
    pub const LEVEL_HIGH: Self = Self(0x2);
    pub const EDGE_FALL: Self = Self(0x4);
    pub const EDGE_RISE: Self = Self(0x8);

    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build from raw register bits; bits above the low nibble are dropped.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & 0xF)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for EdgeEvents {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for EdgeEvents {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
