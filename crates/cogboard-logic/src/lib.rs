//! Pure evaluation logic for cog boards.
//!
//! A board is a fixed grid of cogs. Each cog produces build, flaggy and
//! extra-exp rates; boosted cogs multiply the rates of cogs at fixed relative
//! offsets. This crate places cogs, evaluates boosted totals and renders the
//! board as text. No I/O, no randomness.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`board`] | Grid, unlock mask, storage, reset → boost → sum evaluation |
//! | [`cogs`] | Cog variants (empty, plain, player, boosted) and boost rules |
//! | [`error`] | `BoardError` for mask shapes, multipliers, layouts |
//! | [`layout`] | `BoardConfig` and JSON board layouts |
//! | [`patterns`] | Boost kinds, symbols, relative offset tables |
//! | [`rates`] | `Rates` and `Multipliers` triples |
//! | [`render`] | Text report: totals, grid, storage, player stats |

pub mod board;
pub mod cogs;
pub mod error;
pub mod layout;
pub mod patterns;
pub mod rates;
pub mod render;

pub use board::Board;
pub use cogs::{Cog, CogKind};
pub use error::BoardError;
pub use patterns::{BoostKind, BoostPattern};
pub use rates::{Multipliers, Rates};
