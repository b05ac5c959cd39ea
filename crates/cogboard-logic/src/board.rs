//! The cog board: grid, unlock mask, storage, and evaluation.
//!
//! Cells are addressed as `(x, y)` with `x` the column and `y` the row,
//! row-major, origin top-left. Coordinates are signed so callers (and boost
//! offsets) can step off the edge; such cells are simply invalid.
//!
//! # Evaluation
//!
//! [`Board::evaluate`] runs three passes:
//!
//! 1. **Reset** — every cog on the grid, valid cell or not, drops its boosts.
//! 2. **Boost** — valid cells are scanned row by row; each boosted occupant
//!    multiplies the occupant of every valid target cell. Boosts from several
//!    sources stack in scan order.
//! 3. **Sum** — valid cells are scanned in the same order and their
//!    [`Cog::get_values`] are added into the totals.
//!
//! Each call starts from scratch, so repeated calls give identical totals.
//!
//! ```
//! use cogboard_logic::board::Board;
//! use cogboard_logic::cogs::Cog;
//!
//! let mut board = Board::new(8, 12, false);
//! board.place(4, 4, Cog::new(50.0, 40.0, 30.0));
//! assert_eq!(board.evaluate().as_tuple(), (50.0, 40.0, 30.0));
//! ```

use log::{debug, trace};

use crate::cogs::Cog;
use crate::error::BoardError;
use crate::rates::Rates;

/// Default board height (rows).
pub const DEFAULT_HEIGHT: usize = 8;
/// Default board width (columns).
pub const DEFAULT_WIDTH: usize = 12;

/// Per-cell unlock state, `mask[y][x]`.
pub type Mask = Vec<Vec<bool>>;

/// A fixed-size grid of cogs.
#[derive(Debug, Clone)]
pub struct Board {
    height: usize,
    width: usize,
    grid: Vec<Cog>,
    mask: Mask,
    storage: Vec<Cog>,
    totals: Rates,
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_HEIGHT, DEFAULT_WIDTH, true)
    }
}

impl Board {
    /// Build a `height` × `width` board of empty cogs, every cell locked
    /// when `locked` is set and unlocked otherwise.
    pub fn new(height: usize, width: usize, locked: bool) -> Self {
        Self {
            height,
            width,
            grid: vec![Cog::empty(); height * width],
            mask: vec![vec![!locked; width]; height],
            storage: Vec::new(),
            totals: Rates::ZERO,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Cogs displaced by placements, oldest first.
    pub fn storage(&self) -> &[Cog] {
        &self.storage
    }

    /// Totals from the last [`Board::evaluate`]; zero if never evaluated
    /// or reset since.
    pub fn totals(&self) -> Rates {
        self.totals
    }

    /// Replace the unlock mask wholesale.
    pub fn set_mask(&mut self, mask: Mask) -> Result<(), BoardError> {
        let expected = (self.height, self.width);
        if mask.len() != self.height {
            let found_width = mask.first().map_or(0, |row| row.len());
            return Err(BoardError::ShapeMismatch {
                expected,
                found: (mask.len(), found_width),
            });
        }
        if let Some(row) = mask.iter().find(|row| row.len() != self.width) {
            return Err(BoardError::ShapeMismatch {
                expected,
                found: (mask.len(), row.len()),
            });
        }
        self.mask = mask;
        Ok(())
    }

    /// Unlock a single cell. Out-of-range coordinates are ignored.
    pub fn unlock(&mut self, x: i32, y: i32) {
        if let Some((col, row)) = self.in_bounds(x, y) {
            self.mask[row][col] = true;
        }
    }

    /// Lock a single cell. The occupant stays but no longer takes part in
    /// evaluation. Out-of-range coordinates are ignored.
    pub fn lock(&mut self, x: i32, y: i32) {
        if let Some((col, row)) = self.in_bounds(x, y) {
            self.mask[row][col] = false;
        }
    }

    pub fn unlocked_count(&self) -> usize {
        self.mask.iter().flatten().filter(|&&open| open).count()
    }

    /// True when every cell holds the empty cog.
    pub fn is_empty(&self) -> bool {
        self.grid.iter().all(Cog::is_empty)
    }

    fn in_bounds(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (col, row) = (x as usize, y as usize);
        (col < self.width && row < self.height).then_some((col, row))
    }

    fn index(&self, col: usize, row: usize) -> usize {
        row * self.width + col
    }

    /// In bounds and unlocked.
    pub fn is_valid_cell(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y)
            .is_some_and(|(col, row)| self.mask[row][col])
    }

    /// Occupant of `(x, y)` regardless of lock state.
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cog> {
        self.in_bounds(x, y)
            .map(|(col, row)| &self.grid[self.index(col, row)])
    }

    /// All cells in row-major order as `(x, y, cog)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cog)> + '_ {
        self.grid
            .iter()
            .enumerate()
            .map(move |(i, cog)| (i % self.width, i / self.width, cog))
    }

    /// Player cogs in row-major order.
    pub fn players(&self) -> impl Iterator<Item = &Cog> + '_ {
        self.grid.iter().filter(|cog| cog.is_player())
    }

    /// Put `cog` on `(x, y)`.
    ///
    /// A non-empty occupant is moved to storage first. Placing on a locked or
    /// out-of-range cell does nothing.
    pub fn place(&mut self, x: i32, y: i32, cog: Cog) {
        let Some((col, row)) = self.in_bounds(x, y).filter(|&(c, r)| self.mask[r][c]) else {
            debug!("Ignoring placement of '{}' at ({}, {})", cog.render_symbol(), x, y);
            return;
        };
        let idx = self.index(col, row);
        let displaced = std::mem::replace(&mut self.grid[idx], cog);
        if !displaced.is_empty() {
            debug!(
                "Moving '{}' from ({}, {}) to storage",
                displaced.render_symbol(),
                x,
                y
            );
            self.storage.push(displaced);
        }
    }

    /// Zero the totals.
    pub fn reset_totals(&mut self) {
        self.totals = Rates::ZERO;
    }

    /// Zero the totals and empty every valid cell. Displaced cogs go to
    /// storage as with [`Board::place`]; locked cells are left as they are.
    pub fn clear(&mut self) {
        self.reset_totals();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                self.place(x, y, Cog::empty());
            }
        }
    }

    /// Recompute and return the board totals.
    pub fn evaluate(&mut self) -> Rates {
        self.reset_pass();
        self.boost_pass();
        self.totals = self.sum_pass();
        debug!(
            "Evaluated {}x{} board: build={} flaggy={} exp={}",
            self.height, self.width, self.totals.build, self.totals.flaggy, self.totals.exp
        );
        self.totals
    }

    fn reset_pass(&mut self) {
        self.totals = Rates::ZERO;
        for cog in &mut self.grid {
            cog.reset();
        }
    }

    fn boost_pass(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                let (x, y) = (col as i32, row as i32);
                if !self.is_valid_cell(x, y) {
                    continue;
                }
                let Some((offsets, multipliers)) = self.grid[self.index(col, row)].boost_targets()
                else {
                    continue;
                };
                for (dx, dy) in offsets {
                    let (tx, ty) = (x + dx, y + dy);
                    if self.is_valid_cell(tx, ty) {
                        trace!("Boost ({}, {}) -> ({}, {}) {:?}", x, y, tx, ty, multipliers);
                        let target = self.index(tx as usize, ty as usize);
                        self.grid[target].apply_boost(multipliers);
                    }
                }
            }
        }
    }

    fn sum_pass(&self) -> Rates {
        self.cells()
            .filter(|&(col, row, _)| self.mask[row][col])
            .map(|(_, _, cog)| cog.get_values())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::BoostPattern;
    use crate::rates::Multipliers;

    fn open_board() -> Board {
        Board::new(DEFAULT_HEIGHT, DEFAULT_WIDTH, false)
    }

    #[test]
    fn test_default_board() {
        let board = Board::default();
        assert_eq!((board.height(), board.width()), (8, 12));
        assert_eq!(board.totals(), Rates::ZERO);
        assert!(board.storage().is_empty());
        assert!(board.is_empty());
        assert_eq!(board.unlocked_count(), 0);
        assert!(board.mask().iter().flatten().all(|&open| !open));
    }

    #[test]
    fn test_valid_cell_requires_unlock() {
        let mut board = Board::default();
        assert!(!board.is_valid_cell(4, 4));
        board.unlock(4, 4);
        assert!(board.is_valid_cell(4, 4));
        board.lock(4, 4);
        assert!(!board.is_valid_cell(4, 4));
    }

    #[test]
    fn test_valid_cell_bounds() {
        let board = open_board();
        assert!(board.is_valid_cell(0, 0));
        assert!(board.is_valid_cell(11, 7));
        assert!(!board.is_valid_cell(12, 7));
        assert!(!board.is_valid_cell(11, 8));
        assert!(!board.is_valid_cell(-1, 0));
        assert!(!board.is_valid_cell(9, 9));
    }

    #[test]
    fn test_non_square_bounds() {
        assert!(!Board::new(20, 40, false).is_valid_cell(15, 30));
        assert!(Board::new(40, 20, false).is_valid_cell(15, 30));
        assert!(!Board::new(40, 20, false).is_valid_cell(30, 15));
    }

    #[test]
    fn test_set_mask_shape_mismatch() {
        let mut board = Board::default();
        let err = board.set_mask(vec![vec![true; 12]; 7]).unwrap_err();
        assert!(matches!(
            err,
            BoardError::ShapeMismatch {
                expected: (8, 12),
                found: (7, 12)
            }
        ));

        let mut ragged = vec![vec![true; 12]; 8];
        ragged[3].pop();
        assert!(matches!(
            board.set_mask(ragged),
            Err(BoardError::ShapeMismatch { found: (8, 11), .. })
        ));
        // Failed replacement leaves the old mask in place.
        assert_eq!(board.unlocked_count(), 0);
    }

    #[test]
    fn test_set_mask_replaces() {
        let mut board = Board::default();
        let mut mask = vec![vec![false; 12]; 8];
        mask[4][4] = true;
        board.set_mask(mask).unwrap();
        assert!(board.is_valid_cell(4, 4));
        assert_eq!(board.unlocked_count(), 1);
    }

    #[test]
    fn test_place_displaces_in_order() {
        let mut board = open_board();
        board.place(4, 4, Cog::new(80.0, 80.0, 80.0));
        board.place(4, 4, Cog::new(100.0, 100.0, 100.0));
        board.place(4, 4, Cog::new(1.0, 2.0, 3.0));
        let stored: Vec<_> = board.storage().iter().map(|c| c.get_values()).collect();
        assert_eq!(
            stored,
            vec![Rates::new(80.0, 80.0, 80.0), Rates::new(100.0, 100.0, 100.0)]
        );
    }

    #[test]
    fn test_empty_cogs_never_stored() {
        let mut board = open_board();
        board.place(4, 4, Cog::empty());
        board.place(4, 4, Cog::new(80.0, 80.0, 80.0));
        board.place(4, 5, Cog::new(100.0, 100.0, 100.0));
        assert!(board.storage().is_empty());
    }

    #[test]
    fn test_place_empty_clears_cell() {
        let mut board = open_board();
        board.place(1, 1, Cog::new(1.0, 1.0, 1.0));
        board.place(1, 1, Cog::empty());
        assert!(board.is_empty());
        assert_eq!(board.storage().len(), 1);
    }

    #[test]
    fn test_place_invalid_is_noop() {
        let mut board = Board::default();
        board.place(4, 4, Cog::new(1.0, 1.0, 1.0));
        board.place(-1, 3, Cog::new(1.0, 1.0, 1.0));
        board.place(12, 0, Cog::new(1.0, 1.0, 1.0));
        assert!(board.is_empty());
        assert!(board.storage().is_empty());
    }

    #[test]
    fn test_clear_stores_and_empties() {
        let mut board = open_board();
        board.place(0, 0, Cog::new(1.0, 1.0, 1.0));
        board.place(3, 2, Cog::player("p1", 1.0, 1.0, 1.0));
        board.evaluate();
        board.clear();
        assert!(board.is_empty());
        assert_eq!(board.totals(), Rates::ZERO);
        assert_eq!(board.storage().len(), 2);
    }

    #[test]
    fn test_clear_skips_locked_cells() {
        let mut board = open_board();
        board.place(2, 2, Cog::new(1.0, 1.0, 1.0));
        board.lock(2, 2);
        board.clear();
        assert!(!board.is_empty());
        assert!(board.storage().is_empty());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut board = open_board();
        let m = Multipliers::new(1.5, 2.0, 2.5).unwrap();
        board.place(4, 5, Cog::boosted(BoostPattern::AdjacentCross, Rates::new(1.0, 1.0, 1.0), m));
        board.place(4, 4, Cog::new(10.0, 10.0, 10.0));
        let first = board.evaluate();
        let second = board.evaluate();
        assert_eq!(first, second);
        assert_eq!(first, Rates::new(16.0, 21.0, 11.0));
    }

    #[test]
    fn test_locked_board_totals_zero() {
        let mut board = Board::default();
        board.place(4, 4, Cog::new(50.0, 40.0, 30.0));
        assert_eq!(board.evaluate(), Rates::ZERO);
    }

    #[test]
    fn test_locked_cells_excluded_from_sum_and_boost() {
        let mut board = open_board();
        let m = Multipliers::new(2.0, 2.0, 2.0).unwrap();
        board.place(4, 4, Cog::boosted(BoostPattern::AdjacentCross, Rates::ZERO, m));
        board.place(5, 4, Cog::new(10.0, 10.0, 10.0));
        board.place(3, 4, Cog::new(10.0, 10.0, 10.0));
        board.lock(5, 4);
        assert_eq!(board.evaluate(), Rates::new(20.0, 20.0, 10.0));

        // A locked boosted cog boosts nothing.
        board.lock(4, 4);
        assert_eq!(board.evaluate(), Rates::new(10.0, 10.0, 10.0));
    }

    #[test]
    fn test_two_sources_stack() {
        let mut board = open_board();
        let double = Multipliers::new(2.0, 2.0, 1.0).unwrap();
        board.place(3, 3, Cog::boosted(BoostPattern::AdjacentCross, Rates::ZERO, double));
        board.place(5, 3, Cog::boosted(BoostPattern::AdjacentCross, Rates::ZERO, double));
        board.place(4, 3, Cog::new(10.0, 5.0, 1.0));
        assert_eq!(board.evaluate(), Rates::new(40.0, 20.0, 1.0));
    }

    #[test]
    fn test_boosted_cogs_boost_each_other() {
        let mut board = open_board();
        let m = Multipliers::new(2.0, 3.0, 1.0).unwrap();
        board.place(1, 1, Cog::boosted(BoostPattern::AdjacentCross, Rates::new(1.0, 1.0, 1.0), m));
        board.place(2, 1, Cog::boosted(BoostPattern::AdjacentCross, Rates::new(1.0, 1.0, 1.0), m));
        assert_eq!(board.evaluate(), Rates::new(4.0, 6.0, 2.0));
    }

    #[test]
    fn test_players_enumerated_row_major() {
        let mut board = open_board();
        board.place(5, 2, Cog::player("second", 0.0, 0.0, 0.0));
        board.place(9, 0, Cog::player("first", 0.0, 0.0, 0.0));
        let names: Vec<_> = board.players().filter_map(Cog::name).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_cells_row_major() {
        let board = Board::new(2, 3, false);
        let coords: Vec<_> = board.cells().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }
}
