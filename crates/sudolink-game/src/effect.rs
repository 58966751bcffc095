//! Background execution of gateway calls.
//!
//! Each reducer-triggered request runs on its own worker thread and reports
//! back over a shared channel, so the reducer and UI stay responsive. The
//! pipeline never touches the game state: completed calls are translated
//! into events and handed back through the queue.
//!
//! Concurrency policy is latest-wins per request kind: starting a new fetch
//! (or validate, or solve) bumps that kind's generation, and responses from
//! older generations are dropped when polled. This keeps a rapid sequence
//! of `LoadBoard` dispatches from letting an early response overwrite a
//! later one.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use sudolink_board::{Board, Difficulty, GameStatus, Grid, Solution};
use sudolink_gateway::{PuzzleGateway, ValidationStatus};

use crate::event::{Event, EventQueue};

/// A gateway call requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EffectRequest {
    /// Fetch a fresh board.
    FetchBoard(Difficulty),
    /// Fetch the solution for the just-loaded board values.
    FetchSolution(Grid),
    /// Ask the service to classify the given board values.
    Validate(Grid),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EffectKind {
    FetchBoard,
    FetchSolution,
    Validate,
}

const EFFECT_KINDS: usize = 3;

impl EffectRequest {
    fn kind(&self) -> EffectKind {
        match self {
            Self::FetchBoard(_) => EffectKind::FetchBoard,
            Self::FetchSolution(_) => EffectKind::FetchSolution,
            Self::Validate(_) => EffectKind::Validate,
        }
    }
}

impl EffectKind {
    fn index(self) -> usize {
        match self {
            Self::FetchBoard => 0,
            Self::FetchSolution => 1,
            Self::Validate => 2,
        }
    }
}

struct EffectOutcome {
    kind: EffectKind,
    generation: u64,
    event: Event,
}

/// Runs gateway calls on worker threads and feeds results back as events.
pub(crate) struct EffectPipeline {
    gateway: Arc<dyn PuzzleGateway>,
    sender: mpsc::Sender<EffectOutcome>,
    receiver: mpsc::Receiver<EffectOutcome>,
    generations: [u64; EFFECT_KINDS],
    pending: [Option<u64>; EFFECT_KINDS],
}

impl std::fmt::Debug for EffectPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectPipeline")
            .field("generations", &self.generations)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl EffectPipeline {
    pub(crate) fn new(gateway: Arc<dyn PuzzleGateway>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            gateway,
            sender,
            receiver,
            generations: [0; EFFECT_KINDS],
            pending: [None; EFFECT_KINDS],
        }
    }

    /// Starts a request, superseding any in-flight request of the same kind.
    pub(crate) fn start(&mut self, request: EffectRequest) {
        let kind = request.kind();
        let slot = kind.index();
        self.generations[slot] += 1;
        let generation = self.generations[slot];
        self.pending[slot] = Some(generation);

        let gateway = Arc::clone(&self.gateway);
        let sender = self.sender.clone();
        thread::spawn(move || {
            let event = run_request(gateway.as_ref(), request);
            // The pipeline may be gone by the time the call finishes.
            let _ = sender.send(EffectOutcome {
                kind,
                generation,
                event,
            });
        });
    }

    /// Drains completed calls into the event queue, dropping superseded
    /// responses.
    pub(crate) fn poll(&mut self, queue: &mut EventQueue) {
        while let Ok(outcome) = self.receiver.try_recv() {
            let slot = outcome.kind.index();
            if outcome.generation == self.generations[slot] {
                self.pending[slot] = None;
                queue.dispatch(outcome.event);
            } else {
                log::debug!("dropping superseded {:?} response", outcome.kind);
            }
        }
    }

    /// True while any request is in flight.
    pub(crate) fn is_busy(&self) -> bool {
        self.pending.iter().any(Option::is_some)
    }
}

fn run_request(gateway: &dyn PuzzleGateway, request: EffectRequest) -> Event {
    match request {
        EffectRequest::FetchBoard(difficulty) => match gateway.fetch_board(difficulty) {
            Ok(raw) => Event::BoardLoaded(Board::from_raw(&raw)),
            Err(err) => Event::BoardLoadFailed(err.to_string()),
        },
        EffectRequest::FetchSolution(values) => match gateway.solve(&values) {
            Ok(grid) => Event::SolutionFetched(Solution::new(grid)),
            Err(err) => Event::SolutionFetchFailed(err.to_string()),
        },
        EffectRequest::Validate(values) => match gateway.validate(&values) {
            Ok(status) => Event::StatusReported(map_validation_status(status)),
            Err(err) => Event::ValidateFailed(err.to_string()),
        },
    }
}

// The service's "broken" verdict has no dedicated status in the game; it
// reads as not-solved to the player.
fn map_validation_status(status: ValidationStatus) -> GameStatus {
    match status {
        ValidationStatus::Solved => GameStatus::Solved,
        ValidationStatus::Unsolved | ValidationStatus::Broken => GameStatus::Unsolved,
    }
}

#[cfg(test)]
mod tests {
    use sudolink_board::GameStatus;
    use sudolink_gateway::ValidationStatus;

    use super::map_validation_status;

    #[test]
    fn broken_maps_to_unsolved() {
        assert_eq!(
            map_validation_status(ValidationStatus::Broken),
            GameStatus::Unsolved
        );
        assert_eq!(
            map_validation_status(ValidationStatus::Solved),
            GameStatus::Solved
        );
    }
}
