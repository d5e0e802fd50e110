use hafalan_core::{Language, TimerKind, TimerToken};
use std::time::Duration;

mod core;
mod playback;
mod settings;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    SaveConfig,
    Speak {
        text: String,
        language: Language,
    },
    StopNarration,
    ScheduleTimer {
        token: TimerToken,
        kind: TimerKind,
        delay: Duration,
    },
    SyncWakeLock,
    QuitSafely,
}
