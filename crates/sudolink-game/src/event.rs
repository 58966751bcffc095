use std::collections::VecDeque;

use sudolink_board::{Board, Difficulty, GameStatus, Solution};

/// An event applied to the game state by the reducer.
///
/// Player intents, gateway results, and reducer-derived follow-ups all flow
/// through the same queue so that ordering is the dispatch order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Event {
    /// Start loading a fresh board for the given difficulty.
    LoadBoard(Difficulty),
    /// The board fetch succeeded.
    BoardLoaded(Board),
    /// The board fetch failed.
    BoardLoadFailed(String),
    /// The solution pre-fetch succeeded.
    SolutionFetched(Solution),
    /// The solution pre-fetch failed.
    SolutionFetchFailed(String),
    /// The player entered a value into a cell (0 clears it).
    UpdateCell { row: usize, col: usize, value: u8 },
    /// Derived: a wrong entry costs one life.
    DecrementLives,
    /// Ask the service to classify the current board.
    ValidateBoard,
    /// The validation call failed.
    ValidateFailed(String),
    /// A new status verdict arrived (from the service or the lives check).
    StatusReported(GameStatus),
    /// Fill the board from the pre-fetched solution.
    SolveBoard,
}

/// FIFO queue of pending events.
///
/// Derived events dispatched while reducing are appended and therefore
/// observe the state after the emitting step committed.
#[derive(Debug, Default)]
pub(crate) struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    pub(crate) fn dispatch(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub(crate) fn pop(&mut self) -> Option<Event> {
        self.events.pop_front()
    }
}
