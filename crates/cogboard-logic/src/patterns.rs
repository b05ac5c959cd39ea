//! Boost patterns: which relative cells a boosted cog multiplies.
//!
//! Offsets are `(dx, dy)` with `dy` positive downward, matching the board's
//! row-major `(x, y)` addressing. Most patterns are fixed tables; the row and
//! column patterns span the whole board and so carry the board dimension they
//! were built for.
//!
//! ```
//! use cogboard_logic::patterns::BoostPattern;
//!
//! let row = BoostPattern::FullRow { width: 4 };
//! assert_eq!(row.offsets().len(), 6);
//! assert!(!row.offsets().contains(&(0, 0)));
//! ```

use serde::{Deserialize, Serialize};

// ── Fixed offset tables ─────────────────────────────────────────────────

const ADJACENT_CROSS: &[(i32, i32)] = &[(0, -1), (-1, 0), (1, 0), (0, 1)];

const DIAGONAL_CROSS: &[(i32, i32)] = &[(-1, -1), (-1, 1), (1, -1), (1, 1)];

const UP_BLOCK: &[(i32, i32)] = &[(-1, -2), (0, -2), (1, -2), (-1, -1), (0, -1), (1, -1)];

const DOWN_BLOCK: &[(i32, i32)] = &[(-1, 2), (0, 2), (1, 2), (-1, 1), (0, 1), (1, 1)];

const LEFT_BLOCK: &[(i32, i32)] = &[(-2, -1), (-2, 0), (-2, 1), (-1, -1), (-1, 0), (-1, 1)];

const RIGHT_BLOCK: &[(i32, i32)] = &[(2, -1), (2, 0), (2, 1), (1, -1), (1, 0), (1, 1)];

const FAR_CORNERS: &[(i32, i32)] = &[(-2, -2), (-2, 2), (2, -2), (2, 2)];

/// Kind of a boosted cog, without any board-dependent data.
///
/// This is what layouts name; [`BoostKind::pattern`] binds it to a board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoostKind {
    AdjacentCross,
    DiagonalCross,
    UpBlock,
    DownBlock,
    LeftBlock,
    RightBlock,
    FullRow,
    FullColumn,
    FarCorners,
}

impl BoostKind {
    /// All boosted kinds in symbol-table order.
    pub const ALL: [BoostKind; 9] = [
        BoostKind::AdjacentCross,
        BoostKind::DiagonalCross,
        BoostKind::UpBlock,
        BoostKind::DownBlock,
        BoostKind::LeftBlock,
        BoostKind::RightBlock,
        BoostKind::FullRow,
        BoostKind::FullColumn,
        BoostKind::FarCorners,
    ];

    /// Grid symbol used in board reports.
    pub fn symbol(self) -> char {
        match self {
            BoostKind::AdjacentCross => '+',
            BoostKind::DiagonalCross => 'x',
            BoostKind::UpBlock => '^',
            BoostKind::DownBlock => 'v',
            BoostKind::LeftBlock => '<',
            BoostKind::RightBlock => '>',
            BoostKind::FullRow => '=',
            BoostKind::FullColumn => '|',
            BoostKind::FarCorners => '#',
        }
    }

    /// Inverse of [`BoostKind::symbol`].
    pub fn from_symbol(symbol: char) -> Option<BoostKind> {
        BoostKind::ALL.into_iter().find(|k| k.symbol() == symbol)
    }

    pub fn label(self) -> &'static str {
        match self {
            BoostKind::AdjacentCross => "adjacent cross",
            BoostKind::DiagonalCross => "diagonal cross",
            BoostKind::UpBlock => "up block",
            BoostKind::DownBlock => "down block",
            BoostKind::LeftBlock => "left block",
            BoostKind::RightBlock => "right block",
            BoostKind::FullRow => "full row",
            BoostKind::FullColumn => "full column",
            BoostKind::FarCorners => "far corners",
        }
    }

    /// Bind this kind to a board of `height` × `width`.
    ///
    /// Only the row and column kinds use the dimensions.
    pub fn pattern(self, height: usize, width: usize) -> BoostPattern {
        match self {
            BoostKind::AdjacentCross => BoostPattern::AdjacentCross,
            BoostKind::DiagonalCross => BoostPattern::DiagonalCross,
            BoostKind::UpBlock => BoostPattern::UpBlock,
            BoostKind::DownBlock => BoostPattern::DownBlock,
            BoostKind::LeftBlock => BoostPattern::LeftBlock,
            BoostKind::RightBlock => BoostPattern::RightBlock,
            BoostKind::FullRow => BoostPattern::FullRow { width },
            BoostKind::FullColumn => BoostPattern::FullColumn { height },
            BoostKind::FarCorners => BoostPattern::FarCorners,
        }
    }
}

/// A concrete boost pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoostPattern {
    AdjacentCross,
    DiagonalCross,
    UpBlock,
    DownBlock,
    LeftBlock,
    RightBlock,
    /// Every other cell in the row of a board `width` cells wide.
    FullRow { width: usize },
    /// Every other cell in the column of a board `height` cells tall.
    FullColumn { height: usize },
    FarCorners,
}

impl BoostPattern {
    pub fn kind(&self) -> BoostKind {
        match self {
            BoostPattern::AdjacentCross => BoostKind::AdjacentCross,
            BoostPattern::DiagonalCross => BoostKind::DiagonalCross,
            BoostPattern::UpBlock => BoostKind::UpBlock,
            BoostPattern::DownBlock => BoostKind::DownBlock,
            BoostPattern::LeftBlock => BoostKind::LeftBlock,
            BoostPattern::RightBlock => BoostKind::RightBlock,
            BoostPattern::FullRow { .. } => BoostKind::FullRow,
            BoostPattern::FullColumn { .. } => BoostKind::FullColumn,
            BoostPattern::FarCorners => BoostKind::FarCorners,
        }
    }

    pub fn symbol(&self) -> char {
        self.kind().symbol()
    }

    /// Relative `(dx, dy)` targets, never including `(0, 0)`.
    pub fn offsets(&self) -> Vec<(i32, i32)> {
        match *self {
            BoostPattern::AdjacentCross => ADJACENT_CROSS.to_vec(),
            BoostPattern::DiagonalCross => DIAGONAL_CROSS.to_vec(),
            BoostPattern::UpBlock => UP_BLOCK.to_vec(),
            BoostPattern::DownBlock => DOWN_BLOCK.to_vec(),
            BoostPattern::LeftBlock => LEFT_BLOCK.to_vec(),
            BoostPattern::RightBlock => RIGHT_BLOCK.to_vec(),
            BoostPattern::FullRow { width } => span(width).map(|i| (i, 0)).collect(),
            BoostPattern::FullColumn { height } => span(height).map(|i| (0, i)).collect(),
            BoostPattern::FarCorners => FAR_CORNERS.to_vec(),
        }
    }
}

/// `-(n-1) ..= n-1` without zero.
fn span(n: usize) -> impl Iterator<Item = i32> {
    let reach = n.saturating_sub(1) as i32;
    (-reach..=reach).filter(|&i| i != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbols_unique() {
        let symbols: HashSet<char> = BoostKind::ALL.iter().map(|k| k.symbol()).collect();
        assert_eq!(symbols.len(), BoostKind::ALL.len());
        for reserved in ['.', 'c', 'p'] {
            assert!(!symbols.contains(&reserved));
        }
    }

    #[test]
    fn test_from_symbol_roundtrip() {
        for kind in BoostKind::ALL {
            assert_eq!(BoostKind::from_symbol(kind.symbol()), Some(kind));
        }
        assert_eq!(BoostKind::from_symbol('c'), None);
    }

    #[test]
    fn test_fixed_patterns_exclude_origin_and_have_no_duplicates() {
        for kind in BoostKind::ALL {
            let offsets = kind.pattern(8, 12).offsets();
            let unique: HashSet<_> = offsets.iter().copied().collect();
            assert_eq!(unique.len(), offsets.len(), "{:?} has duplicates", kind);
            assert!(!unique.contains(&(0, 0)), "{:?} targets itself", kind);
        }
    }

    #[test]
    fn test_block_sizes() {
        assert_eq!(BoostPattern::AdjacentCross.offsets().len(), 4);
        assert_eq!(BoostPattern::DiagonalCross.offsets().len(), 4);
        assert_eq!(BoostPattern::UpBlock.offsets().len(), 6);
        assert_eq!(BoostPattern::DownBlock.offsets().len(), 6);
        assert_eq!(BoostPattern::LeftBlock.offsets().len(), 6);
        assert_eq!(BoostPattern::RightBlock.offsets().len(), 6);
        assert_eq!(BoostPattern::FarCorners.offsets().len(), 4);
    }

    #[test]
    fn test_up_block_points_upward() {
        assert!(BoostPattern::UpBlock.offsets().iter().all(|&(_, dy)| dy < 0));
        assert!(BoostPattern::DownBlock.offsets().iter().all(|&(_, dy)| dy > 0));
        assert!(BoostPattern::LeftBlock.offsets().iter().all(|&(dx, _)| dx < 0));
        assert!(BoostPattern::RightBlock.offsets().iter().all(|&(dx, _)| dx > 0));
    }

    #[test]
    fn test_full_row_spans_board() {
        let offsets = BoostPattern::FullRow { width: 12 }.offsets();
        assert_eq!(offsets.len(), 22);
        assert_eq!(offsets.first(), Some(&(-11, 0)));
        assert_eq!(offsets.last(), Some(&(11, 0)));
        assert!(offsets.iter().all(|&(_, dy)| dy == 0));
    }

    #[test]
    fn test_full_column_spans_board() {
        let offsets = BoostPattern::FullColumn { height: 8 }.offsets();
        assert_eq!(offsets.len(), 14);
        assert!(offsets.contains(&(0, -7)));
        assert!(offsets.contains(&(0, 7)));
        assert!(offsets.iter().all(|&(dx, _)| dx == 0));
    }

    #[test]
    fn test_degenerate_dimensions() {
        assert!(BoostPattern::FullRow { width: 1 }.offsets().is_empty());
        assert!(BoostPattern::FullColumn { height: 0 }.offsets().is_empty());
    }

    #[test]
    fn test_kind_binding_keeps_dimension() {
        assert_eq!(
            BoostKind::FullRow.pattern(4, 6),
            BoostPattern::FullRow { width: 6 }
        );
        assert_eq!(
            BoostKind::FullColumn.pattern(4, 6),
            BoostPattern::FullColumn { height: 4 }
        );
        assert_eq!(BoostKind::FarCorners.pattern(4, 6).kind(), BoostKind::FarCorners);
    }
}
