/// Outcome classification of the current puzzle.
///
/// `Idle` is the initial value and is restored on every new board load; the
/// other variants reflect the latest validation or lives check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// No verdict yet; the game is in progress.
    #[default]
    Idle,
    /// The service judged the board solved, or the solver filled it.
    Solved,
    /// The service judged the board not (yet) solved.
    Unsolved,
    /// The player ran out of lives.
    GameOver,
}
