use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardState {
    /// Initialized but not generated yet.
    Fresh,
    InPlay,
    Won,
    Lost,
}

impl BoardState {
    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::Fresh
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// A single game of Minesweeper: mine layout, revealed cells and flags.
///
/// The board owns its random source so [`Board::reset_board`] can deal a new
/// layout without outside help. Everything is synchronous and expects one
/// command at a time.
#[derive(Clone, Debug)]
pub struct Board<S> {
    config: BoardConfig,
    source: S,
    layout: MineLayout,
    revealed: Array2<bool>,
    flagged: BTreeSet<CellIndex>,
    visited: BTreeSet<CellIndex>,
    hit_mine: Option<CellIndex>,
    state: BoardState,
}

impl<S: MineSource> Board<S> {
    /// Creates a fresh, ungenerated board.
    pub fn new(config: BoardConfig, source: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source,
            layout: MineLayout::empty(),
            revealed: Array2::default([0, 0]),
            flagged: BTreeSet::new(),
            visited: BTreeSet::new(),
            hit_mine: None,
            state: BoardState::Fresh,
        })
    }

    /// Creates a board and deals its first layout.
    pub fn generated(config: BoardConfig, source: S) -> Result<Self> {
        let mut board = Self::new(config, source)?;
        board.generate();
        Ok(board)
    }

    /// Clears all game state back to [`BoardState::Fresh`].
    pub fn initialize(&mut self) {
        self.layout = MineLayout::empty();
        self.revealed = Array2::default([0, 0]);
        self.flagged.clear();
        self.visited.clear();
        self.hit_mine = None;
        self.state = BoardState::Fresh;
    }

    /// Deals a layout if none exists yet. Returns whether one was dealt.
    pub fn generate(&mut self) -> bool {
        if self.is_board_generated() {
            return false;
        }

        self.layout = MineLayout::generate(&self.config, &mut self.source);
        self.revealed = Array2::default(self.config.size().to_nd_index());
        self.flagged.clear();
        self.visited.clear();
        self.state = BoardState::InPlay;
        true
    }

    /// Throws the current game away and deals a new one.
    pub fn reset_board(&mut self) {
        log::debug!("Resetting board");
        self.initialize();
        self.generate();
    }
}

impl<S> Board<S> {
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn get_num_columns(&self) -> Coord {
        self.config.columns
    }

    pub fn get_num_rows(&self) -> Coord {
        self.config.rows
    }

    pub fn is_board_generated(&self) -> bool {
        !matches!(self.state, BoardState::Fresh)
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn has_won(&self) -> bool {
        matches!(self.state, BoardState::Won)
    }

    pub fn layout(&self) -> &MineLayout {
        &self.layout
    }

    pub fn mine_count(&self) -> usize {
        self.layout.mine_count()
    }

    pub fn flag_count(&self) -> usize {
        self.flagged.len()
    }

    /// Index of the mine whose detonation ended the game.
    pub fn hit_mine_index(&self) -> Option<CellIndex> {
        self.hit_mine
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.layout.validate_coords(coords)
    }

    pub fn index_of(&self, (col, row): Coord2) -> CellIndex {
        CellIndex::from(row) * CellIndex::from(self.config.columns) + CellIndex::from(col)
    }

    pub fn coords_of(&self, index: CellIndex) -> Coord2 {
        let columns = CellIndex::from(self.config.columns);
        ((index % columns) as Coord, (index / columns) as Coord)
    }

    /// # Panics
    ///
    /// All single-cell queries panic when `coords` lie outside a generated
    /// board; use [`Board::validate_coords`] first when unsure.
    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed[coords.to_nd_index()]
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.check_in_grid(coords);
        self.flagged.contains(&self.index_of(coords))
    }

    pub fn is_mine(&self, coords: Coord2) -> bool {
        self.layout.contains_mine(coords)
    }

    /// A wrong flag, or the mine that was detonated.
    ///
    /// The detonated-mine half does not depend on the flag: the check is
    /// `(flagged && !mine) || index == hit_mine`.
    pub fn is_crossed(&self, coords: Coord2) -> bool {
        let index = self.index_of(coords);
        self.is_flagged(coords) && !self.is_mine(coords) || Some(index) == self.hit_mine
    }

    /// `-1` on a mine, otherwise the number of neighbouring mines.
    pub fn calculate_field_number(&self, coords: Coord2) -> i32 {
        self.layout.field_number(coords)
    }

    /// Mines not yet accounted for by a flag.
    pub fn get_mine_count_for_visual(&self) -> isize {
        self.mine_count() as isize - self.flagged.len() as isize
    }

    pub fn can_click_on_field(&self, coords: Coord2) -> bool {
        if self.is_game_over() {
            return false;
        }
        !self.is_flagged(coords)
    }

    pub fn can_right_click_on_field(&self, coords: Coord2) -> bool {
        self.check_in_grid(coords);
        !self.is_game_over()
    }

    /// Reveals a cell, cascading through zero cells, or detonates a mine.
    pub fn handle_click_on_field(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.check_generated()?;
        let coords = self.validate_coords(coords)?;

        if !self.can_click_on_field(coords) {
            return Ok(RevealOutcome::NoChange);
        }

        if self.layout.contains_mine(coords) {
            let hit_index = self.index_of(coords);
            self.handle_game_over(hit_index);
            return Ok(RevealOutcome::HitMine);
        }

        self.visited.clear();
        Ok(if self.reveal_field(coords) > 0 {
            RevealOutcome::Revealed
        } else {
            RevealOutcome::NoChange
        })
    }

    /// Toggles a flag. New flags are refused once every mine has one.
    pub fn handle_right_click_on_field(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        self.check_generated()?;
        let coords = self.validate_coords(coords)?;

        if !self.can_right_click_on_field(coords) {
            return Ok(MarkOutcome::NoChange);
        }

        let index = self.index_of(coords);
        Ok(if self.flagged.remove(&index) {
            MarkOutcome::Unflagged
        } else if self.flagged.len() < self.mine_count() {
            self.flagged.insert(index);
            MarkOutcome::Flagged
        } else {
            MarkOutcome::NoChange
        })
    }

    /// Lazily decides whether the game has been won, latching the result.
    ///
    /// A win needs as many flags as mines, exactly the mines left unrevealed,
    /// and every flag on a mine.
    pub fn check_and_update_has_won(&mut self) -> bool {
        match self.state {
            BoardState::Fresh => return false,
            BoardState::Won => return true,
            BoardState::Lost => return false,
            BoardState::InPlay => {}
        }

        let mine_count = self.mine_count();
        if self.flagged.len() != mine_count {
            return false;
        }

        let unrevealed = self.revealed.iter().filter(|&&revealed| !revealed).count();
        if unrevealed != mine_count {
            return false;
        }

        let all_flags_correct = self
            .flagged
            .iter()
            .all(|&index| self.layout.is_mine_index(index));
        if all_flags_correct {
            log::debug!("Board won with {} mines flagged", mine_count);
            self.state = BoardState::Won;
        }
        all_flags_correct
    }

    fn handle_game_over(&mut self, hit_index: CellIndex) {
        log::debug!("Mine hit at index {}", hit_index);
        self.state = BoardState::Lost;
        self.hit_mine = Some(hit_index);
        self.revealed.fill(true);
    }

    /// Depth-first flood fill with an explicit stack; `visited` is cleared by
    /// the caller before every top-level reveal. Returns how many cells were
    /// newly opened.
    fn reveal_field(&mut self, start: Coord2) -> usize {
        let mut to_visit = Vec::from([start]);
        let mut opened = 0;

        while let Some(coords) = to_visit.pop() {
            let index = self.index_of(coords);
            if !self.visited.insert(index) {
                continue;
            }

            if self.flagged.contains(&index) {
                continue;
            }

            let revealed = &mut self.revealed[coords.to_nd_index()];
            if !*revealed {
                *revealed = true;
                opened += 1;
            }

            if self.layout.field_number(coords) == 0 {
                to_visit.extend(
                    self.layout
                        .iter_neighbors(coords)
                        .filter(|&pos| !self.visited.contains(&self.index_of(pos))),
                );
            }
        }
        opened
    }

    fn check_generated(&self) -> Result<()> {
        if self.is_board_generated() {
            Ok(())
        } else {
            Err(GameError::NotGenerated)
        }
    }

    fn check_in_grid(&self, coords: Coord2) {
        let (columns, rows) = self.layout.size();
        assert!(
            coords.0 < columns && coords.1 < rows,
            "coordinates {:?} outside {}x{} board",
            coords,
            columns,
            rows
        );
    }
}
