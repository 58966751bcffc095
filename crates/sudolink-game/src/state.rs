use sudolink_board::{Board, Difficulty, GameStatus, Solution};

/// Number of wrong entries a player may make before the game ends.
pub const MAX_LIVES: u8 = 3;

/// Aggregate state of one game session.
///
/// Owned and mutated exclusively by the reducer; everything else reads it
/// through the accessors. Created with defaults when a session starts and
/// reset on every successful board load.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) difficulty: Difficulty,
    pub(crate) board: Board,
    pub(crate) solution: Option<Solution>,
    pub(crate) loading: bool,
    pub(crate) lives: u8,
    pub(crate) status: GameStatus,
    pub(crate) error: Option<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            board: Board::default(),
            solution: None,
            loading: false,
            lives: MAX_LIVES,
            status: GameStatus::Idle,
            error: None,
        }
    }
}

impl GameState {
    /// The difficulty of the current (or requested) puzzle.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The in-progress board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The pre-fetched solution, once the gateway has returned it.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// True while a board or solution fetch is pending.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Remaining allowed wrong entries (0..=[`MAX_LIVES`]).
    #[must_use]
    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Outcome of the last validation or lives check.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Message of the last failed gateway call, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
