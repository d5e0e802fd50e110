use hafalan_core::{Direction, Mode, TimerKind, TimerToken};
use iced::keyboard::{Key, Modifiers};

/// Messages emitted by the UI and by scheduled playback timers.
#[derive(Debug, Clone)]
pub enum Message {
    ScreenTapped,
    TogglePlayPause,
    ResetPlayback,
    ModeSelected(Mode),
    DirectionSelected(Direction),
    ShuffleToggled(bool),
    DayFromChanged(String),
    DayToChanged(String),
    ToggleFocusMode,
    ToggleTheme,
    ToggleSettings,
    TimerElapsed {
        token: TimerToken,
        kind: TimerKind,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    WindowMoved {
        x: f32,
        y: f32,
    },
    PollSystemSignals,
    SafeQuit,
}
