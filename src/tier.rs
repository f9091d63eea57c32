use std::fmt;

use crate::error::{Error, Result};

/// Number of tiers produced by a default run.
pub const TIER_COUNT: u32 = 7;

/// One generation round: `10^(exponent + 1)` values in `numbers_<count>.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tier {
    exponent: u32,
    count: u64,
}

impl Tier {
    pub fn new(exponent: u32) -> Result<Self> {
        Tier::checked(exponent).ok_or(Error::TierOverflow(exponent))
    }

    const fn checked(exponent: u32) -> Option<Self> {
        let Some(power) = exponent.checked_add(1) else {
            return None;
        };
        match 10u64.checked_pow(power) {
            Some(count) => Some(Tier { exponent, count }),
            None => None,
        }
    }

    /// The seven default tiers, smallest first.
    pub fn all() -> impl Iterator<Item = Tier> {
        (0..TIER_COUNT).filter_map(Tier::checked)
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// How many values the tier holds; also the inclusive upper bound of each value.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn file_name(&self) -> String {
        format!("numbers_{}.txt", self.count)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "numbers_{}.txt", self.count)
    }
}
