//! Game state machine and effect pipeline for the Sudolink client.
//!
//! The crate is organized around a single-writer reducer: user intents and
//! gateway results are expressed as events, applied to the [`GameState`] in
//! dispatch order, and any follow-up work (wrong-entry penalties, game-over
//! detection, gateway calls) is emitted as further events rather than being
//! performed inline.
//!
//! [`Store`] is the consumer-facing surface: it owns the state, dispatches
//! events for the four player intents, runs gateway calls on background
//! workers, and feeds their results back through the same reducer when
//! polled from the UI loop.

pub use self::{
    state::{GameState, MAX_LIVES},
    store::Store,
};

mod effect;
mod event;
mod reducer;
mod state;
mod store;
