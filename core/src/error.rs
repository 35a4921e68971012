use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board needs at least one column and one row")]
    EmptyBoard,
    #[error("Board has more cells than can be indexed")]
    BoardTooLarge,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Board has not been generated yet")]
    NotGenerated,
}

pub type Result<T> = core::result::Result<T, GameError>;
