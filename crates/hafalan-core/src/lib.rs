//! Playback engine for the vocabulary memorization drill.
//!
//! Everything in this crate is a pure state machine: the queue builder and
//! the playback session mutate their own state and describe the outside work
//! (speech, timer scheduling) as effect values for the embedding shell to
//! run. No I/O, no clocks, no audio — which is what keeps the drill logic
//! unit-testable down to single timer firings.

pub mod queue;
pub mod session;
pub mod vocab;

pub use queue::{QueueSpec, build_queue};
pub use session::{
    ControllerState, PlaybackSession, SessionEffect, TimerKind, TimerToken, Timing,
};
pub use vocab::{DayEntry, Direction, Language, Mode, VocabItem, VocabSource};
