use serde::{Deserialize, Serialize};

use crate::*;

/// What a host should draw for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    /// Revealed with no neighbouring mines.
    Empty,
    Number(u8),
    Mine,
    /// Wrong flag or the detonated mine, only shown once the game is over.
    Crossed,
}

impl CellView {
    /// Reads one cell of a generated board.
    ///
    /// # Panics
    ///
    /// Panics when `coords` lie outside the board.
    pub fn of<S>(board: &Board<S>, coords: Coord2) -> Self {
        if board.is_game_over() {
            if board.is_crossed(coords) {
                return Self::Crossed;
            }
            if board.is_flagged(coords) {
                return Self::Flagged;
            }
            if board.is_mine(coords) {
                return Self::Mine;
            }
        } else if board.is_flagged(coords) {
            return Self::Flagged;
        }

        if !board.is_revealed(coords) {
            return Self::Hidden;
        }

        match board.calculate_field_number(coords) {
            0 => Self::Empty,
            n if n > 0 => Self::Number(n as u8),
            // a revealed mine only exists after a loss, handled above
            _ => Self::Mine,
        }
    }

    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Hidden => '#',
            Self::Flagged => 'F',
            Self::Empty => '.',
            Self::Number(n) => match char::from_digit(n as u32, 10) {
                Some(digit) => digit,
                None => '?',
            },
            Self::Mine => '*',
            Self::Crossed => 'X',
        }
    }
}

/// Face on the reset button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    Smiley,
    Cool,
}

impl Face {
    /// Runs the lazy win check, so a board may transition to won here.
    pub fn for_board<S>(board: &mut Board<S>) -> Self {
        if board.check_and_update_has_won() {
            Self::Cool
        } else {
            Self::Smiley
        }
    }
}
