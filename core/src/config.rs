use serde::{Deserialize, Serialize};

use crate::*;

pub const DEFAULT_COLUMNS: Coord = 12;
pub const DEFAULT_ROWS: Coord = 12;
pub const DEFAULT_MINE_CHANCE: f64 = 0.1;

/// The three tunables of a board, fixed for the lifetime of a [`Board`].
///
/// Missing fields fall back to the defaults, so a host can store only what it
/// overrides.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: Coord,
    pub rows: Coord,
    /// Independent probability that any single cell is seeded with a mine.
    pub mine_chance: f64,
}

impl BoardConfig {
    pub fn new(columns: Coord, rows: Coord, mine_chance: f64) -> Result<Self> {
        let config = Self::new_unchecked(columns, rows, mine_chance);
        config.validate()?;
        Ok(config)
    }

    pub const fn new_unchecked(columns: Coord, rows: Coord, mine_chance: f64) -> Self {
        Self {
            columns,
            rows,
            mine_chance,
        }
    }

    /// Checks dimensions only; any `mine_chance` is accepted and a degenerate
    /// value simply yields an all-mine or mine-free board.
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(GameError::EmptyBoard);
        }
        if mult(self.columns, self.rows).is_none() {
            return Err(GameError::BoardTooLarge);
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.columns, self.rows)
    }

    pub fn total_cells(&self) -> CellIndex {
        mult(self.columns, self.rows).unwrap_or(CellIndex::MAX)
    }

    /// Chances outside `[0, 1]` (NaN included) are clamped by the sampling
    /// comparison rather than rejected.
    pub(crate) fn has_degenerate_chance(&self) -> bool {
        !(0.0..=1.0).contains(&self.mine_chance)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_MINE_CHANCE)
    }
}
