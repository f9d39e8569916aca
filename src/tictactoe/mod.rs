//! Крестики-нолики N×N на двоих.

pub mod board;
pub mod game;

pub use board::{Board, Mark, MoveError};
pub use game::{play_game, GameResult, MoveSource, ScriptedMoves};
