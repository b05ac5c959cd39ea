//! Plain-text board reports.
//!
//! The full report is the rates block, the grid, the storage line, and the
//! player block, each newline-terminated:
//!
//! ```text
//! Total build rate: 50
//! Total flaggy rate: 40
//! Total extra exp: 30
//! .	c	.
//! .	.	p
//!
//! In storage: c, +,
//! Player stats:
//! Alice(bb=1, bf=2, be=3, b=1, f=2, e=3)
//! ```
//!
//! The grid block is followed by an empty line and the storage line keeps
//! its trailing separator.

use std::fmt;

use crate::board::Board;

impl Board {
    /// The three `Total …` lines.
    pub fn render_rates(&self) -> String {
        let totals = self.totals();
        format!(
            "Total build rate: {}\nTotal flaggy rate: {}\nTotal extra exp: {}\n",
            totals.build, totals.flaggy, totals.exp
        )
    }

    /// One line per row, cell symbols separated by tabs.
    pub fn render_grid(&self) -> String {
        let mut out = String::with_capacity(self.height() * (self.width() * 2 + 1));
        for y in 0..self.height() as i32 {
            let row: Vec<String> = (0..self.width() as i32)
                .filter_map(|x| self.cell(x, y))
                .map(|cog| cog.render_symbol().to_string())
                .collect();
            out.push_str(&row.join("\t"));
            out.push('\n');
        }
        out
    }

    /// `In storage: ` followed by `{symbol}, ` for each stored cog.
    pub fn render_storage(&self) -> String {
        let mut out = String::from("In storage: ");
        for cog in self.storage() {
            out.push(cog.render_symbol());
            out.push_str(", ");
        }
        out
    }

    /// `Player stats:` header and one [`crate::cogs::Cog::describe`] line per player.
    pub fn render_players(&self) -> String {
        let mut out = String::from("Player stats:\n");
        for player in self.players() {
            out.push_str(&player.describe());
            out.push('\n');
        }
        out
    }

    /// Full report.
    pub fn render(&self) -> String {
        format!(
            "{}{}\n{}\n{}",
            self.render_rates(),
            self.render_grid(),
            self.render_storage(),
            self.render_players()
        )
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
