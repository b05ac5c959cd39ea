//! Resource rate triples and boost multipliers.
//!
//! Rates are `f64` because boosts multiply by fractional factors (1.5, 2.5, …)
//! even though the base values are usually whole numbers.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Build, flaggy and extra-exp rates produced by a cog or a whole board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rates {
    pub build: f64,
    pub flaggy: f64,
    pub exp: f64,
}

impl Rates {
    pub const ZERO: Rates = Rates {
        build: 0.0,
        flaggy: 0.0,
        exp: 0.0,
    };

    pub fn new(build: f64, flaggy: f64, exp: f64) -> Self {
        Self { build, flaggy, exp }
    }

    /// Returns `(build, flaggy, exp)`.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.build, self.flaggy, self.exp)
    }
}

impl Add for Rates {
    type Output = Rates;

    fn add(self, rhs: Rates) -> Rates {
        Rates {
            build: self.build + rhs.build,
            flaggy: self.flaggy + rhs.flaggy,
            exp: self.exp + rhs.exp,
        }
    }
}

impl AddAssign for Rates {
    fn add_assign(&mut self, rhs: Rates) {
        self.build += rhs.build;
        self.flaggy += rhs.flaggy;
        self.exp += rhs.exp;
    }
}

impl Sum for Rates {
    fn sum<I: Iterator<Item = Rates>>(iter: I) -> Rates {
        iter.fold(Rates::ZERO, |acc, r| acc + r)
    }
}

impl From<(f64, f64, f64)> for Rates {
    fn from((build, flaggy, exp): (f64, f64, f64)) -> Self {
        Self { build, flaggy, exp }
    }
}

/// Multiplier triple a boosted cog applies to its targets. Each component is >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Multipliers {
    pub build: f64,
    pub flaggy: f64,
    pub exp: f64,
}

impl Multipliers {
    /// Identity boost.
    pub const ONE: Multipliers = Multipliers {
        build: 1.0,
        flaggy: 1.0,
        exp: 1.0,
    };

    /// Checked constructor. Rejects any component below 1 (NaN included).
    pub fn new(build: f64, flaggy: f64, exp: f64) -> Result<Self, BoardError> {
        let m = Self { build, flaggy, exp };
        if m.is_valid() {
            Ok(m)
        } else {
            Err(BoardError::InvalidMultiplier { build, flaggy, exp })
        }
    }

    /// Unchecked constructor; `Cog::apply_boost` still asserts validity.
    pub const fn new_unchecked(build: f64, flaggy: f64, exp: f64) -> Self {
        Self { build, flaggy, exp }
    }

    pub fn is_valid(&self) -> bool {
        self.build >= 1.0 && self.flaggy >= 1.0 && self.exp >= 1.0
    }
}

impl Default for Multipliers {
    fn default() -> Self {
        Multipliers::ONE
    }
}
