use sudolink_board::{Board, Cell, GameStatus};

use crate::{
    effect::EffectRequest,
    event::{Event, EventQueue},
    state::{GameState, MAX_LIVES},
};

/// Applies one event to the state.
///
/// Derived events (wrong-entry penalty, lives-exhausted verdict) are pushed
/// onto the queue so they run after this step has committed. The returned
/// request, if any, is the gateway call this event triggers; the reducer
/// itself never performs I/O.
pub(crate) fn handle(
    state: &mut GameState,
    event: Event,
    queue: &mut EventQueue,
) -> Option<EffectRequest> {
    log::trace!("reducing {event:?}");
    match event {
        Event::LoadBoard(difficulty) => {
            state.loading = true;
            state.difficulty = difficulty;
            state.error = None;
            Some(EffectRequest::FetchBoard(difficulty))
        }
        Event::BoardLoaded(board) => {
            let values = board.values();
            state.board = board;
            state.solution = None;
            state.loading = false;
            state.lives = MAX_LIVES;
            state.status = GameStatus::Idle;
            state.error = None;
            // Pre-fetch the solution so entries can be judged locally.
            Some(EffectRequest::FetchSolution(values))
        }
        Event::BoardLoadFailed(message)
        | Event::SolutionFetchFailed(message)
        | Event::ValidateFailed(message) => {
            log::warn!("gateway call failed: {message}");
            state.loading = false;
            state.error = Some(message);
            None
        }
        Event::SolutionFetched(solution) => {
            state.solution = Some(solution);
            state.loading = false;
            None
        }
        Event::UpdateCell { row, col, value } => {
            let Some(cell) = state.board.cell(row, col) else {
                return None;
            };
            if !cell.editable {
                return None;
            }
            let valid = match (value, state.solution.as_ref()) {
                (Cell::EMPTY, _) => true,
                // Solution not fetched yet: no basis to judge, no penalty.
                (_, None) => true,
                (value, Some(solution)) => solution.value(row, col) == Some(value),
            };
            state.board.replace(
                row,
                col,
                Cell {
                    value,
                    editable: true,
                    valid,
                },
            );
            if !valid {
                queue.dispatch(Event::DecrementLives);
            }
            None
        }
        Event::DecrementLives => {
            if state.lives > 0 {
                state.lives -= 1;
                if state.lives == 0 {
                    queue.dispatch(Event::StatusReported(GameStatus::GameOver));
                }
            }
            None
        }
        Event::ValidateBoard => Some(EffectRequest::Validate(state.board.values())),
        Event::StatusReported(status) => {
            state.status = status;
            None
        }
        Event::SolveBoard => {
            if let Some(solution) = &state.solution {
                state.board = Board::solved(solution);
                state.status = GameStatus::Solved;
            } else {
                log::warn!("solve requested before the solution arrived");
            }
            None
        }
    }
}

/// Reduces queued events until the queue is empty, collecting the gateway
/// requests they trigger.
pub(crate) fn run_to_completion(state: &mut GameState, queue: &mut EventQueue) -> Vec<EffectRequest> {
    let mut requests = Vec::new();
    while let Some(event) = queue.pop() {
        if let Some(request) = handle(state, event, queue) {
            requests.push(request);
        }
    }
    requests
}
