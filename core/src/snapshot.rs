use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a host panel needs to draw a board, detached from the board.
///
/// Deserializing checks the shape, so a document with no columns or the wrong
/// number of cells is rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SnapshotDocument")]
pub struct BoardSnapshot {
    pub columns: Coord,
    pub rows: Coord,
    pub state: BoardState,
    pub mines_left: isize,
    pub face: Face,
    /// Row-major, `columns * rows` entries.
    pub cells: Vec<CellView>,
}

impl BoardSnapshot {
    /// Captures a generated board. Runs the lazy win check first so the
    /// snapshot never shows a won board as still in play.
    pub fn capture<S>(board: &mut Board<S>) -> Result<Self> {
        if !board.is_board_generated() {
            return Err(GameError::NotGenerated);
        }

        let face = Face::for_board(board);
        let board = &*board;
        let (columns, rows) = board.config().size();
        let cells = (0..rows)
            .flat_map(|row| (0..columns).map(move |col| (col, row)))
            .map(|coords| CellView::of(board, coords))
            .collect();

        Ok(Self {
            columns,
            rows,
            state: board.state(),
            mines_left: board.get_mine_count_for_visual(),
            face,
            cells,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(GameError::EmptyBoard);
        }
        if self.cells.len() != usize::from(self.columns) * usize::from(self.rows) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(())
    }

    pub fn cell_at(&self, (col, row): Coord2) -> Option<CellView> {
        if col >= self.columns || row >= self.rows {
            return None;
        }
        let index = usize::from(row) * usize::from(self.columns) + usize::from(col);
        self.cells.get(index).copied()
    }
}

#[derive(Deserialize)]
struct SnapshotDocument {
    columns: Coord,
    rows: Coord,
    state: BoardState,
    mines_left: isize,
    face: Face,
    cells: Vec<CellView>,
}

impl TryFrom<SnapshotDocument> for BoardSnapshot {
    type Error = GameError;

    fn try_from(doc: SnapshotDocument) -> Result<Self> {
        let snapshot = Self {
            columns: doc.columns,
            rows: doc.rows,
            state: doc.state,
            mines_left: doc.mines_left,
            face: doc.face,
            cells: doc.cells,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // fields are public, a hand-built snapshot may have no columns
        if self.columns == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(usize::from(self.columns)) {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
