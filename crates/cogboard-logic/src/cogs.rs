//! Cogs: the entities that occupy board cells.
//!
//! Every cell holds exactly one [`Cog`]. Emptiness is a variant, not the
//! absence of a value, so the grid never contains holes.
//!
//! # Variants
//!
//! | Kind | Symbol | Boost behavior | Counts toward exp total |
//! |------|--------|----------------|-------------------------|
//! | [`CogKind::Empty`] | `.` | ignores every boost | (all zero) |
//! | [`CogKind::Plain`] | `c` | build and flaggy scale, exp does not | yes |
//! | [`CogKind::Player`] | `p` | all three scale | no |
//! | [`CogKind::Boosted`] | per kind | same as plain | yes |
//!
//! Plain and boosted cogs never scale their exp rate. Only players track a
//! boosted exp, and players report zero exp to the board totals.
//!
//! ```
//! use cogboard_logic::cogs::Cog;
//! use cogboard_logic::rates::Multipliers;
//!
//! let mut cog = Cog::new(10.0, 20.0, 30.0);
//! cog.apply_boost(Multipliers::new(2.0, 1.5, 3.0).unwrap());
//! assert_eq!(cog.get_values().as_tuple(), (20.0, 30.0, 30.0));
//! cog.reset();
//! assert_eq!(cog.get_values().as_tuple(), (10.0, 20.0, 30.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::patterns::BoostPattern;
use crate::rates::{Multipliers, Rates};

/// What a cog is, beyond its rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CogKind {
    Empty,
    Plain,
    Player {
        name: String,
    },
    Boosted {
        pattern: BoostPattern,
        multipliers: Multipliers,
    },
}

/// A board-resident producer of build/flaggy/exp rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cog {
    kind: CogKind,
    base: Rates,
    current: Rates,
}

impl Default for Cog {
    fn default() -> Self {
        Cog::empty()
    }
}

impl Cog {
    fn with_kind(kind: CogKind, base: Rates) -> Self {
        Self {
            kind,
            base,
            current: base,
        }
    }

    /// The empty cell marker. All rates are zero.
    pub fn empty() -> Self {
        Self::with_kind(CogKind::Empty, Rates::ZERO)
    }

    /// An ordinary cog.
    pub fn new(build: f64, flaggy: f64, exp: f64) -> Self {
        Self::with_kind(CogKind::Plain, Rates::new(build, flaggy, exp))
    }

    /// A player standing on the board.
    pub fn player(name: impl Into<String>, build: f64, flaggy: f64, exp: f64) -> Self {
        Self::with_kind(
            CogKind::Player { name: name.into() },
            Rates::new(build, flaggy, exp),
        )
    }

    /// A boosted cog that multiplies the cogs at `pattern`'s offsets.
    pub fn boosted(pattern: BoostPattern, base: Rates, multipliers: Multipliers) -> Self {
        Self::with_kind(
            CogKind::Boosted {
                pattern,
                multipliers,
            },
            base,
        )
    }

    pub fn kind(&self) -> &CogKind {
        &self.kind
    }

    pub fn base_rates(&self) -> Rates {
        self.base
    }

    /// Rates after the boosts applied since the last [`Cog::reset`].
    /// Unlike [`Cog::get_values`], a player's exp is reported as tracked.
    pub fn current_rates(&self) -> Rates {
        self.current
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, CogKind::Empty)
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, CogKind::Player { .. })
    }

    pub fn is_boosted(&self) -> bool {
        matches!(self.kind, CogKind::Boosted { .. })
    }

    /// Player name, if this cog is a player.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            CogKind::Player { name } => Some(name),
            _ => None,
        }
    }

    /// Discard applied boosts.
    pub fn reset(&mut self) {
        self.current = self.base;
    }

    /// Multiply the current rates by `m`.
    ///
    /// Empty cogs ignore the call entirely, whatever `m` holds.
    ///
    /// # Panics
    ///
    /// Panics if any multiplier is below 1 on a non-empty cog.
    pub fn apply_boost(&mut self, m: Multipliers) {
        match self.kind {
            CogKind::Empty => {}
            CogKind::Player { .. } => {
                assert!(m.is_valid(), "Multipliers should be greater or equal one!");
                self.current.build *= m.build;
                self.current.flaggy *= m.flaggy;
                self.current.exp *= m.exp;
            }
            CogKind::Plain | CogKind::Boosted { .. } => {
                assert!(m.is_valid(), "Multipliers should be greater or equal one!");
                self.current.build *= m.build;
                self.current.flaggy *= m.flaggy;
                // exp is intentionally left unscaled for non-player cogs
            }
        }
    }

    /// Contribution of this cog to the board totals.
    pub fn get_values(&self) -> Rates {
        match self.kind {
            CogKind::Player { .. } => Rates {
                exp: 0.0,
                ..self.current
            },
            _ => self.current,
        }
    }

    /// Offsets and multipliers for boosted cogs; `None` for every other kind.
    pub fn boost_targets(&self) -> Option<(Vec<(i32, i32)>, Multipliers)> {
        match &self.kind {
            CogKind::Boosted {
                pattern,
                multipliers,
            } => Some((pattern.offsets(), *multipliers)),
            _ => None,
        }
    }

    /// Single-character tag used in the board grid.
    pub fn render_symbol(&self) -> char {
        match &self.kind {
            CogKind::Empty => '.',
            CogKind::Plain => 'c',
            CogKind::Player { .. } => 'p',
            CogKind::Boosted { pattern, .. } => pattern.symbol(),
        }
    }

    /// `{tag}(bb=…, bf=…, be=…, b=…, f=…, e=…)` where tag is the player
    /// name or the grid symbol.
    pub fn describe(&self) -> String {
        let tag = match &self.kind {
            CogKind::Player { name } => name.clone(),
            _ => self.render_symbol().to_string(),
        };
        format!(
            "{}(bb={}, bf={}, be={}, b={}, f={}, e={})",
            tag,
            self.base.build,
            self.base.flaggy,
            self.base.exp,
            self.current.build,
            self.current.flaggy,
            self.current.exp
        )
    }
}
