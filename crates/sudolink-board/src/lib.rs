//! Board model for the Sudolink game client.
//!
//! This crate defines the data shapes shared by the game state machine, the
//! puzzle gateway, and the UI: [`Cell`], [`Board`], [`Solution`],
//! [`Difficulty`], and [`GameStatus`]. It contains no I/O and no game rules
//! beyond the two board construction rules (from a raw puzzle grid and from a
//! solution grid).

pub use self::{
    board::{Board, Grid, Solution},
    cell::Cell,
    difficulty::{Difficulty, ParseDifficultyError},
    status::GameStatus,
};

mod board;
mod cell;
mod difficulty;
mod status;
