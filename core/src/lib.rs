//! Board engine for a Minesweeper panel: random layout generation, adjacency
//! numbers, flood-fill reveal, capped flags and lazy win detection.
//!
//! Hosts hold a [`Board`] and read it through [`CellView`] or
//! [`BoardSnapshot`]; the board never knows about its observers.
#![no_std]

extern crate alloc;

pub use board::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use snapshot::*;
pub use types::*;
pub use view::*;

mod board;
mod config;
mod error;
mod generator;
mod layout;
mod snapshot;
mod types;
mod view;
