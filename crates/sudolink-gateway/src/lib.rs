//! Puzzle gateway for the Sudolink game client.
//!
//! The game core talks to an external puzzle service through the
//! [`PuzzleGateway`] trait: fetch a fresh board, validate the current
//! entries, and obtain the canonical solution. [`SugokuClient`] is the HTTP
//! implementation targeting a sugoku-compatible service; tests substitute
//! their own gateway.
//!
//! Calls are blocking and are expected to run off the UI thread (the game
//! crate dispatches them onto background workers).

pub use self::{
    error::GatewayError,
    sugoku::{DEFAULT_BASE_URL, SugokuClient},
};

use sudolink_board::{Difficulty, Grid};

mod encode;
mod error;
mod sugoku;

/// Verdict returned by the service for a submitted board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// The board is a complete, correct solution.
    Solved,
    /// The board is incomplete but consistent.
    Unsolved,
    /// The board contradicts the puzzle rules.
    Broken,
}

impl ValidationStatus {
    /// Parses the status string used on the wire (`"solved"`, `"unsolved"`,
    /// `"broken"`).
    #[must_use]
    pub fn from_wire(status: &str) -> Option<Self> {
        match status {
            "solved" => Some(Self::Solved),
            "unsolved" => Some(Self::Unsolved),
            "broken" => Some(Self::Broken),
            _ => None,
        }
    }
}

/// Abstract interface to the external puzzle service.
///
/// Failures carry a [`GatewayError`]; no retries are attempted at this
/// layer. Implementations must be callable from background threads.
pub trait PuzzleGateway: Send + Sync {
    /// Fetches a fresh puzzle board for the given difficulty.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the call fails or the response cannot
    /// be decoded.
    fn fetch_board(&self, difficulty: Difficulty) -> Result<Grid, GatewayError>;

    /// Asks the service to classify the current board values.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the call fails or the reported status
    /// is unrecognized.
    fn validate(&self, board: &Grid) -> Result<ValidationStatus, GatewayError>;

    /// Returns the canonical solution for the given board.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the call fails or the response cannot
    /// be decoded.
    fn solve(&self, board: &Grid) -> Result<Grid, GatewayError>;
}
