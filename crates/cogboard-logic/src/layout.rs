//! Board configuration and declarative layouts.
//!
//! A [`BoardLayout`] describes a board size, which cells are unlocked, and the
//! cogs to place, in a JSON shape that is easy to write by hand:
//!
//! ```
//! use cogboard_logic::layout::BoardLayout;
//!
//! let json = r#"{
//!     "name": "single cog",
//!     "config": { "height": 8, "width": 12, "locked": false },
//!     "placements": [
//!         { "x": 4, "y": 4, "cog": { "type": "cog", "build": 50, "flaggy": 40, "exp": 30 } }
//!     ]
//! }"#;
//! let mut board = BoardLayout::from_json(json).unwrap().build().unwrap();
//! assert_eq!(board.evaluate().as_tuple(), (50.0, 40.0, 30.0));
//! ```
//!
//! Layouts are scenario input only. Placements go through [`Board::place`]
//! in listed order, so locked cells swallow them and repeated coordinates
//! push earlier cogs into storage.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Mask, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::cogs::Cog;
use crate::error::BoardError;
use crate::patterns::BoostKind;
use crate::rates::{Multipliers, Rates};

/// Board construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
    /// Start with every cell locked.
    pub locked: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            locked: true,
        }
    }
}

impl BoardConfig {
    pub fn build(&self) -> Board {
        Board::new(self.height, self.width, self.locked)
    }
}

fn one() -> f64 {
    1.0
}

/// A cog as written in a layout file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CogSpec {
    Empty,
    Cog {
        #[serde(default)]
        build: f64,
        #[serde(default)]
        flaggy: f64,
        #[serde(default)]
        exp: f64,
    },
    Player {
        name: String,
        #[serde(default)]
        build: f64,
        #[serde(default)]
        flaggy: f64,
        #[serde(default)]
        exp: f64,
    },
    Boosted {
        kind: BoostKind,
        #[serde(default)]
        build: f64,
        #[serde(default)]
        flaggy: f64,
        #[serde(default)]
        exp: f64,
        #[serde(default = "one")]
        build_mult: f64,
        #[serde(default = "one")]
        flaggy_mult: f64,
        #[serde(default = "one")]
        exp_mult: f64,
    },
}

impl CogSpec {
    /// Build the cog for a board of the given config.
    ///
    /// Multipliers are checked here so a bad layout fails to load instead of
    /// panicking mid-evaluation.
    pub fn to_cog(&self, config: &BoardConfig) -> Result<Cog, BoardError> {
        Ok(match self {
            CogSpec::Empty => Cog::empty(),
            CogSpec::Cog { build, flaggy, exp } => Cog::new(*build, *flaggy, *exp),
            CogSpec::Player {
                name,
                build,
                flaggy,
                exp,
            } => Cog::player(name.clone(), *build, *flaggy, *exp),
            CogSpec::Boosted {
                kind,
                build,
                flaggy,
                exp,
                build_mult,
                flaggy_mult,
                exp_mult,
            } => Cog::boosted(
                kind.pattern(config.height, config.width),
                Rates::new(*build, *flaggy, *exp),
                Multipliers::new(*build_mult, *flaggy_mult, *exp_mult)?,
            ),
        })
    }
}

/// One cog placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub cog: CogSpec,
}

/// A named board scenario.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardLayout {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub config: BoardConfig,
    /// Full mask as rows of 0/1, replacing the initial lock state.
    #[serde(default)]
    pub mask: Option<Vec<Vec<u8>>>,
    /// Extra `[x, y]` cells to unlock, applied after `mask`.
    #[serde(default)]
    pub unlocked: Vec<[i32; 2]>,
    #[serde(default)]
    pub placements: Vec<Placement>,
}

impl BoardLayout {
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Construct the board described by this layout.
    pub fn build(&self) -> Result<Board, BoardError> {
        let mut board = self.config.build();

        if let Some(rows) = &self.mask {
            let mask: Mask = rows
                .iter()
                .map(|row| row.iter().map(|&v| v != 0).collect())
                .collect();
            board.set_mask(mask)?;
        }
        for &[x, y] in &self.unlocked {
            board.unlock(x, y);
        }

        for p in &self.placements {
            if board.cell(p.x, p.y).is_none() {
                return Err(BoardError::PlacementOutOfBounds { x: p.x, y: p.y });
            }
            board.place(p.x, p.y, p.cog.to_cog(&self.config)?);
        }
        Ok(board)
    }
}
