use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Mine positions of one generated board. Never mutated after generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: usize,
}

impl MineLayout {
    /// Draws one sample per cell in row-major order and seeds a mine wherever
    /// the sample falls below the configured chance.
    pub fn generate(config: &BoardConfig, source: &mut impl MineSource) -> Self {
        if config.has_degenerate_chance() {
            log::warn!(
                "Mine chance {} is outside [0, 1], generated anyway",
                config.mine_chance
            );
        }

        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut mine_count = 0;
        for cell in mine_mask.iter_mut() {
            *cell = source.next_sample() < config.mine_chance;
            if *cell {
                mine_count += 1;
            }
        }

        log::debug!(
            "Generated {}x{} board with {} mines",
            config.columns,
            config.rows,
            mine_count
        );
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// An unpopulated layout, the state of a board before generation.
    pub fn empty() -> Self {
        Self {
            mine_mask: Array2::default([0, 0]),
            mine_count: 0,
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.mine_mask.dim();
        (columns as Coord, rows as Coord)
    }

    pub fn total_cells(&self) -> CellIndex {
        self.mine_mask.len()
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> usize {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn is_mine_index(&self, index: CellIndex) -> bool {
        self.mine_mask
            .as_slice()
            .and_then(|cells| cells.get(index).copied())
            .unwrap_or(false)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Mines among the up-to-eight neighbours; out-of-grid neighbours count as
    /// empty.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    /// `-1` for a mine, otherwise the adjacent mine count.
    pub fn field_number(&self, coords: Coord2) -> i32 {
        if self[coords] {
            -1
        } else {
            self.adjacent_mine_count(coords).into()
        }
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}
