//! Demo time model.
//!
//! Time is a monotonically increasing `Tick` counter with no wall-clock
//! mapping: the demo is entirely transient, so all that matters is ordering
//! and the fixed firing period of the driver's timer.  Using an integer tick
//! as the canonical unit keeps deadline arithmetic exact.

use std::fmt;

/// An absolute demo tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
