use std::sync::Arc;

use sudolink_board::{Board, Difficulty, GameStatus, Solution};
use sudolink_gateway::PuzzleGateway;

use crate::{
    effect::EffectPipeline,
    event::{Event, EventQueue},
    reducer,
    state::GameState,
};

/// The single owner of a game session.
///
/// Player intents dispatch events that the reducer applies synchronously;
/// gateway calls triggered by those events run on background workers and
/// re-enter the reducer as result events when [`Store::poll`] is called from
/// the UI loop. State is only ever written by the reducer.
pub struct Store {
    state: GameState,
    queue: EventQueue,
    effects: EffectPipeline,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("effects", &self.effects)
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Creates a store backed by the given gateway, with default state
    /// (empty board, three lives, idle status).
    #[must_use]
    pub fn new(gateway: Arc<dyn PuzzleGateway>) -> Self {
        Self {
            state: GameState::default(),
            queue: EventQueue::default(),
            effects: EffectPipeline::new(gateway),
        }
    }

    /// Starts loading a fresh board for the given difficulty.
    ///
    /// Supersedes any load already in flight.
    pub fn load_board(&mut self, difficulty: Difficulty) {
        self.apply(Event::LoadBoard(difficulty));
    }

    /// Enters a value into a cell (0 clears it).
    ///
    /// Wrong non-zero entries cost a life; running out of lives ends the
    /// game.
    pub fn update_board(&mut self, row: usize, col: usize, value: u8) {
        self.apply(Event::UpdateCell { row, col, value });
    }

    /// Asks the service to classify the current board.
    pub fn validate_board(&mut self) {
        self.apply(Event::ValidateBoard);
    }

    /// Fills the board from the pre-fetched solution and marks the game
    /// solved. A no-op until the solution has arrived.
    pub fn solve_board(&mut self) {
        self.apply(Event::SolveBoard);
    }

    /// Drains completed gateway calls and applies their result events.
    ///
    /// Call this once per UI frame (or tick); it never blocks.
    pub fn poll(&mut self) {
        self.effects.poll(&mut self.queue);
        self.run_reducer();
    }

    /// True while any gateway call is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.effects.is_busy()
    }

    /// The current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The in-progress board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// The pre-fetched solution, once available.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        self.state.solution()
    }

    /// Remaining lives.
    #[must_use]
    pub fn lives(&self) -> u8 {
        self.state.lives()
    }

    /// Outcome of the last validation or lives check.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// True while a board or solution fetch is pending.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.state.loading()
    }

    /// The difficulty of the current puzzle.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty()
    }

    /// Message of the last failed gateway call, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.state.last_error()
    }

    fn apply(&mut self, event: Event) {
        self.queue.dispatch(event);
        self.run_reducer();
    }

    fn run_reducer(&mut self) {
        for request in reducer::run_to_completion(&mut self.state, &mut self.queue) {
            self.effects.start(request);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    use sudolink_board::{Difficulty, Grid};
    use sudolink_gateway::{GatewayError, PuzzleGateway, ValidationStatus};

    use super::Store;

    fn easy_board() -> Grid {
        vec![
            vec![0, 1, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]
    }

    fn easy_solution() -> Grid {
        vec![
            vec![3, 1, 2, 4],
            vec![4, 2, 1, 3],
            vec![1, 3, 4, 2],
            vec![2, 4, 3, 1],
        ]
    }

    fn hard_board() -> Grid {
        vec![
            vec![2, 0, 0, 0],
            vec![0, 0, 0, 3],
            vec![4, 0, 0, 0],
            vec![0, 0, 0, 1],
        ]
    }

    fn hard_solution() -> Grid {
        vec![
            vec![2, 3, 1, 4],
            vec![1, 4, 2, 3],
            vec![4, 1, 3, 2],
            vec![3, 2, 4, 1],
        ]
    }

    /// Gateway double: answers from fixtures and judges a board solved when
    /// it matches the corresponding solution.
    struct FixtureGateway {
        fail_fetch: bool,
    }

    impl FixtureGateway {
        fn new() -> Self {
            Self { fail_fetch: false }
        }

        fn failing() -> Self {
            Self { fail_fetch: true }
        }
    }

    impl PuzzleGateway for FixtureGateway {
        fn fetch_board(&self, difficulty: Difficulty) -> Result<Grid, GatewayError> {
            if self.fail_fetch {
                return Err(GatewayError::HttpStatus { code: 503 });
            }
            Ok(match difficulty {
                Difficulty::Hard => hard_board(),
                _ => easy_board(),
            })
        }

        fn validate(&self, board: &Grid) -> Result<ValidationStatus, GatewayError> {
            if *board == easy_solution() || *board == hard_solution() {
                Ok(ValidationStatus::Solved)
            } else {
                Ok(ValidationStatus::Unsolved)
            }
        }

        fn solve(&self, board: &Grid) -> Result<Grid, GatewayError> {
            if *board == hard_board() {
                Ok(hard_solution())
            } else {
                Ok(easy_solution())
            }
        }
    }

    fn pump(store: &mut Store) {
        for _ in 0..500 {
            store.poll();
            if !store.is_busy() {
                return;
            }
            thread::sleep(Duration::from_millis(2));
        }
        panic!("store did not settle");
    }

    #[test]
    fn load_board_populates_board_and_prefetched_solution() {
        let mut store = Store::new(Arc::new(FixtureGateway::new()));
        store.load_board(Difficulty::Easy);
        assert!(store.loading());

        pump(&mut store);

        assert!(!store.loading());
        assert_eq!(store.board().values(), easy_board());
        assert_eq!(store.solution().unwrap().grid(), &easy_solution());
        assert_eq!(store.lives(), 3);
        assert!(store.status().is_idle());
    }

    #[test]
    fn wrong_entries_cost_lives_until_game_over() {
        let mut store = Store::new(Arc::new(FixtureGateway::new()));
        store.load_board(Difficulty::Easy);
        pump(&mut store);

        store.update_board(0, 0, 9);
        assert_eq!(store.lives(), 2);
        store.update_board(0, 0, 8);
        store.update_board(0, 0, 7);
        assert_eq!(store.lives(), 0);
        assert!(store.status().is_game_over());
    }

    #[test]
    fn validate_reports_service_verdict() {
        let mut store = Store::new(Arc::new(FixtureGateway::new()));
        store.load_board(Difficulty::Easy);
        pump(&mut store);

        store.validate_board();
        pump(&mut store);
        assert!(store.status().is_unsolved());

        store.solve_board();
        assert!(store.status().is_solved());
        store.validate_board();
        pump(&mut store);
        assert!(store.status().is_solved());
    }

    #[test]
    fn solve_board_fills_every_cell_from_the_solution() {
        let mut store = Store::new(Arc::new(FixtureGateway::new()));
        store.load_board(Difficulty::Hard);
        pump(&mut store);

        store.solve_board();

        assert_eq!(store.board().values(), hard_solution());
        assert!(store.board().rows().flatten().all(|cell| !cell.editable));
        assert!(store.status().is_solved());
    }

    #[test]
    fn rapid_reloads_keep_only_the_latest_board() {
        let mut store = Store::new(Arc::new(FixtureGateway::new()));
        store.load_board(Difficulty::Easy);
        store.load_board(Difficulty::Hard);

        pump(&mut store);

        assert_eq!(store.difficulty(), Difficulty::Hard);
        assert_eq!(store.board().values(), hard_board());
        assert_eq!(store.solution().unwrap().grid(), &hard_solution());
    }

    #[test]
    fn fetch_failure_surfaces_error_and_clears_loading() {
        let mut store = Store::new(Arc::new(FixtureGateway::failing()));
        store.load_board(Difficulty::Easy);
        pump(&mut store);

        assert!(!store.loading());
        assert!(store.board().is_empty());
        assert_eq!(store.last_error(), Some("service returned HTTP 503"));
    }
}
