//! The playback session: reveal state plus the manual/automatic controller.
//!
//! Every operation mutates the session and returns the effects the embedding
//! shell must carry out (speak, stop narration, schedule a timer). Scheduled
//! timers come back through [`PlaybackSession::timer_fired`] carrying the
//! token they were minted with; only the most recent token is live, so a
//! callback that outlived a pause, reset, rebuild or mode switch is ignored
//! instead of advancing a discarded drill.

use crate::vocab::{Direction, Language, Mode, VocabItem};
use std::time::Duration;
use tracing::debug;

/// Identifies one scheduled timer callback. Minting a new token (or bumping
/// the epoch without scheduling) invalidates every earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    RevealSecondary,
    Advance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No current item; the queue is untouched.
    Idle,
    /// Manual mode, an item is showing, waiting for a tap.
    AwaitingInput,
    /// Automatic mode with a live timer.
    Playing,
    /// Automatic mode, timers cancelled, position retained.
    Paused,
}

/// Reveal cadence for automatic playback. `advance_delay` is measured from
/// the start of the item, not from the secondary reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub secondary_delay: Duration,
    pub advance_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            secondary_delay: Duration::from_millis(2_500),
            advance_delay: Duration::from_millis(5_500),
        }
    }
}

impl Timing {
    fn advance_after_secondary(&self) -> Duration {
        self.advance_delay.saturating_sub(self.secondary_delay)
    }
}

/// Work the shell must perform on behalf of the session. Narration is
/// fire-and-forget; the session never waits for speech to finish, and the
/// narration service cancels any still-speaking utterance on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    Speak {
        text: String,
        language: Language,
    },
    StopNarration,
    Schedule {
        token: TimerToken,
        kind: TimerKind,
        delay: Duration,
    },
}

pub struct PlaybackSession {
    queue: Vec<VocabItem>,
    mode: Mode,
    direction: Direction,
    timing: Timing,
    state: ControllerState,
    current_index: usize,
    show_primary: bool,
    show_secondary: bool,
    timer_epoch: u64,
}

impl PlaybackSession {
    pub fn new(mode: Mode, direction: Direction, timing: Timing) -> Self {
        Self {
            queue: Vec::new(),
            mode,
            direction,
            timing,
            state: ControllerState::Idle,
            current_index: 0,
            show_primary: false,
            show_secondary: false,
            timer_epoch: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == ControllerState::Playing
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn show_primary(&self) -> bool {
        self.show_primary
    }

    pub fn show_secondary(&self) -> bool {
        self.show_secondary
    }

    /// The item being drilled right now, if any. Idle has no current item
    /// even though the stored index is 0.
    pub fn current_item(&self) -> Option<&VocabItem> {
        if self.state == ControllerState::Idle {
            None
        } else {
            self.queue.get(self.current_index)
        }
    }

    /// Install a freshly built queue. Always performs a full reset: a queue
    /// is never reordered underneath an in-progress drill.
    pub fn rebuild(&mut self, queue: Vec<VocabItem>, direction: Direction) -> Vec<SessionEffect> {
        let effects = self.reset();
        self.queue = queue;
        self.direction = direction;
        effects
    }

    /// Switch drill mode. Forces a reset first so mode and in-progress
    /// position are never combined.
    pub fn set_mode(&mut self, mode: Mode) -> Vec<SessionEffect> {
        if self.mode == mode {
            return Vec::new();
        }
        let effects = self.reset();
        self.mode = mode;
        effects
    }

    /// Cancel all timers, silence narration and return to a blank Idle
    /// state from anywhere.
    pub fn reset(&mut self) -> Vec<SessionEffect> {
        self.clear();
        vec![SessionEffect::StopNarration]
    }

    /// Manual-mode tap: start the drill, reveal the hidden translation, or
    /// advance — wrapping past the last item back to the first.
    pub fn tap(&mut self) -> Vec<SessionEffect> {
        if self.mode != Mode::Manual {
            debug!("ignoring tap outside manual mode");
            return Vec::new();
        }
        if self.queue.is_empty() {
            debug!("ignoring tap on empty queue");
            return Vec::new();
        }

        let mut effects = Vec::new();
        match self.state {
            ControllerState::Idle => {
                self.state = ControllerState::AwaitingInput;
                self.enter_item(0, &mut effects);
            }
            ControllerState::AwaitingInput => {
                if !self.show_secondary {
                    self.reveal_secondary(&mut effects);
                } else {
                    let next = (self.current_index + 1) % self.queue.len();
                    self.enter_item(next, &mut effects);
                }
            }
            ControllerState::Playing | ControllerState::Paused => {
                debug!(state = ?self.state, "ignoring tap");
            }
        }
        effects
    }

    /// Start or resume automatic playback.
    pub fn play(&mut self) -> Vec<SessionEffect> {
        if self.mode != Mode::Automatic {
            debug!("ignoring play outside automatic mode");
            return Vec::new();
        }
        if self.queue.is_empty() {
            debug!("nothing to play");
            return Vec::new();
        }

        let mut effects = Vec::new();
        match self.state {
            ControllerState::Idle => {
                self.state = ControllerState::Playing;
                self.enter_item(0, &mut effects);
            }
            ControllerState::Paused => {
                self.state = ControllerState::Playing;
                self.resume_current(&mut effects);
            }
            ControllerState::Playing | ControllerState::AwaitingInput => {}
        }
        effects
    }

    /// Pause automatic playback. Pending timers are invalidated; the
    /// current index and reveal flags stay untouched so resuming continues
    /// the current item rather than restarting the queue.
    pub fn pause(&mut self) -> Vec<SessionEffect> {
        if self.state != ControllerState::Playing {
            return Vec::new();
        }
        self.invalidate_timers();
        self.state = ControllerState::Paused;
        Vec::new()
    }

    pub fn toggle_play(&mut self) -> Vec<SessionEffect> {
        match self.state {
            ControllerState::Playing => self.pause(),
            _ => self.play(),
        }
    }

    /// A scheduled callback fired. Stale tokens and firings outside active
    /// playback are no-ops.
    pub fn timer_fired(&mut self, token: TimerToken, kind: TimerKind) -> Vec<SessionEffect> {
        if token.0 != self.timer_epoch {
            debug!(?kind, token = token.0, epoch = self.timer_epoch, "stale timer ignored");
            return Vec::new();
        }
        if self.state != ControllerState::Playing {
            debug!(?kind, state = ?self.state, "timer fired outside playback");
            return Vec::new();
        }

        let mut effects = Vec::new();
        match kind {
            TimerKind::RevealSecondary => self.reveal_secondary(&mut effects),
            TimerKind::Advance => {
                let next = self.current_index + 1;
                if next >= self.queue.len() {
                    // End of queue: automatic playback stops instead of
                    // looping. Narration of the last item is left to finish.
                    debug!("automatic playback finished");
                    self.clear();
                } else {
                    self.enter_item(next, &mut effects);
                }
            }
        }
        effects
    }

    fn enter_item(&mut self, index: usize, effects: &mut Vec<SessionEffect>) {
        self.current_index = index;
        self.show_primary = true;
        self.show_secondary = false;
        if let Some(item) = self.queue.get(index) {
            effects.push(SessionEffect::Speak {
                text: item.primary.clone(),
                language: self.direction.primary_language(),
            });
        }
        if self.state == ControllerState::Playing {
            self.schedule(TimerKind::RevealSecondary, self.timing.secondary_delay, effects);
        }
    }

    fn reveal_secondary(&mut self, effects: &mut Vec<SessionEffect>) {
        self.show_secondary = true;
        if let Some(item) = self.queue.get(self.current_index) {
            effects.push(SessionEffect::Speak {
                text: item.secondary.clone(),
                language: self.direction.secondary_language(),
            });
        }
        if self.state == ControllerState::Playing {
            self.schedule(TimerKind::Advance, self.timing.advance_after_secondary(), effects);
        }
    }

    /// Re-enter the current phase after a pause: speak the side that is
    /// showing again and restart its delay. Resuming silently would leave
    /// the listener with no cue of where playback stands.
    fn resume_current(&mut self, effects: &mut Vec<SessionEffect>) {
        let Some(item) = self.queue.get(self.current_index) else {
            return;
        };
        if self.show_secondary {
            effects.push(SessionEffect::Speak {
                text: item.secondary.clone(),
                language: self.direction.secondary_language(),
            });
            self.schedule(TimerKind::Advance, self.timing.advance_after_secondary(), effects);
        } else {
            self.show_primary = true;
            effects.push(SessionEffect::Speak {
                text: item.primary.clone(),
                language: self.direction.primary_language(),
            });
            self.schedule(TimerKind::RevealSecondary, self.timing.secondary_delay, effects);
        }
    }

    fn schedule(&mut self, kind: TimerKind, delay: Duration, effects: &mut Vec<SessionEffect>) {
        self.timer_epoch += 1;
        effects.push(SessionEffect::Schedule {
            token: TimerToken(self.timer_epoch),
            kind,
            delay,
        });
    }

    fn invalidate_timers(&mut self) {
        self.timer_epoch += 1;
    }

    fn clear(&mut self) {
        self.invalidate_timers();
        self.state = ControllerState::Idle;
        self.current_index = 0;
        self.show_primary = false;
        self.show_secondary = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, english: &str, indonesian: &str) -> VocabItem {
        VocabItem {
            id,
            primary: english.to_string(),
            secondary: indonesian.to_string(),
        }
    }

    fn sample_queue() -> Vec<VocabItem> {
        vec![item(1, "water", "air"), item(2, "fire", "api"), item(3, "tree", "pohon")]
    }

    fn session(mode: Mode, queue: Vec<VocabItem>) -> PlaybackSession {
        let mut session = PlaybackSession::new(mode, Direction::EnglishFirst, Timing::default());
        session.rebuild(queue, Direction::EnglishFirst);
        session
    }

    fn spoken(effects: &[SessionEffect]) -> Vec<(&str, Language)> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                SessionEffect::Speak { text, language } => Some((text.as_str(), *language)),
                _ => None,
            })
            .collect()
    }

    fn scheduled(effects: &[SessionEffect]) -> Option<(TimerToken, TimerKind, Duration)> {
        effects.iter().find_map(|effect| match effect {
            SessionEffect::Schedule { token, kind, delay } => Some((*token, *kind, *delay)),
            _ => None,
        })
    }

    /// Drive one pending timer to completion, returning the effects of the
    /// firing. Panics if nothing was scheduled.
    fn fire_pending(session: &mut PlaybackSession, effects: &[SessionEffect]) -> Vec<SessionEffect> {
        let (token, kind, _) = scheduled(effects).expect("a timer should be pending");
        session.timer_fired(token, kind)
    }

    #[test]
    fn manual_tap_reveals_then_advances_and_wraps() {
        let mut session = session(Mode::Manual, vec![item(1, "water", "air"), item(2, "fire", "api")]);

        let effects = session.tap();
        assert_eq!(session.current_index(), 0);
        assert!(session.show_primary() && !session.show_secondary());
        assert_eq!(spoken(&effects), vec![("water", Language::English)]);

        let effects = session.tap();
        assert_eq!(session.current_index(), 0);
        assert!(session.show_secondary());
        assert_eq!(spoken(&effects), vec![("air", Language::Indonesian)]);

        let effects = session.tap();
        assert_eq!(session.current_index(), 1);
        assert!(session.show_primary() && !session.show_secondary());
        assert_eq!(spoken(&effects), vec![("fire", Language::English)]);

        session.tap();
        let effects = session.tap();
        assert_eq!(session.current_index(), 0, "wraps past the last item");
        assert!(session.show_primary() && !session.show_secondary());
        assert_eq!(spoken(&effects), vec![("water", Language::English)]);
    }

    #[test]
    fn manual_taps_never_schedule_timers() {
        let mut session = session(Mode::Manual, sample_queue());
        for _ in 0..7 {
            let effects = session.tap();
            assert_eq!(scheduled(&effects), None);
        }
    }

    #[test]
    fn tap_on_empty_queue_is_a_noop() {
        let mut session = session(Mode::Manual, Vec::new());
        assert!(session.tap().is_empty());
        assert_eq!(session.state(), ControllerState::Idle);
        assert!(session.current_item().is_none());
    }

    #[test]
    fn tap_is_ignored_in_automatic_mode() {
        let mut session = session(Mode::Automatic, sample_queue());
        assert!(session.tap().is_empty());
        assert_eq!(session.state(), ControllerState::Idle);
    }

    #[test]
    fn automatic_play_reveals_primary_and_schedules_secondary() {
        let mut session = session(Mode::Automatic, sample_queue());

        let effects = session.play();
        assert!(session.is_playing());
        assert_eq!(spoken(&effects), vec![("water", Language::English)]);
        let (_, kind, delay) = scheduled(&effects).expect("secondary reveal scheduled");
        assert_eq!(kind, TimerKind::RevealSecondary);
        assert_eq!(delay, Duration::from_millis(2_500));

        let effects = fire_pending(&mut session, &effects);
        assert!(session.show_secondary());
        assert_eq!(spoken(&effects), vec![("air", Language::Indonesian)]);
        let (_, kind, delay) = scheduled(&effects).expect("advance scheduled");
        assert_eq!(kind, TimerKind::Advance);
        assert_eq!(delay, Duration::from_millis(3_000));

        let effects = fire_pending(&mut session, &effects);
        assert_eq!(session.current_index(), 1);
        assert!(session.show_primary() && !session.show_secondary());
        assert_eq!(spoken(&effects), vec![("fire", Language::English)]);
    }

    #[test]
    fn automatic_playback_stops_after_last_item_without_looping() {
        let mut session = session(
            Mode::Automatic,
            vec![item(1, "water", "air"), item(2, "fire", "api")],
        );

        let mut effects = session.play();
        // Two items, two firings each: reveal secondary, then advance.
        for _ in 0..4 {
            effects = fire_pending(&mut session, &effects);
        }

        assert_eq!(session.state(), ControllerState::Idle);
        assert!(!session.is_playing());
        assert_eq!(session.current_index(), 0);
        assert!(!session.show_primary() && !session.show_secondary());
        assert!(session.current_item().is_none());
        assert!(effects.is_empty(), "the final advance neither speaks nor reschedules");
    }

    #[test]
    fn pause_retains_position_and_resume_respeaks() {
        let mut session = session(Mode::Automatic, sample_queue());

        // Walk to item 1 with only its primary revealed.
        let effects = session.play();
        let effects = fire_pending(&mut session, &effects);
        let effects = fire_pending(&mut session, &effects);
        assert_eq!(session.current_index(), 1);
        assert!(!session.show_secondary());

        session.pause();
        assert_eq!(session.state(), ControllerState::Paused);
        assert_eq!(session.current_index(), 1);
        assert!(session.show_primary() && !session.show_secondary());

        // The timer scheduled before the pause must not advance anything.
        let stale = fire_pending(&mut session, &effects);
        assert!(stale.is_empty());
        assert_eq!(session.current_index(), 1);

        let effects = session.play();
        assert!(session.is_playing());
        assert_eq!(session.current_index(), 1, "resume continues the current item");
        assert_eq!(spoken(&effects), vec![("fire", Language::English)]);
        let (_, kind, _) = scheduled(&effects).expect("resume reschedules the reveal");
        assert_eq!(kind, TimerKind::RevealSecondary);
    }

    #[test]
    fn resume_after_secondary_reveal_respeaks_secondary() {
        let mut session = session(Mode::Automatic, sample_queue());

        let effects = session.play();
        let effects = fire_pending(&mut session, &effects);
        assert!(session.show_secondary());

        session.pause();
        let effects = session.play();
        assert_eq!(spoken(&effects), vec![("air", Language::Indonesian)]);
        let (_, kind, _) = scheduled(&effects).expect("resume reschedules the advance");
        assert_eq!(kind, TimerKind::Advance);
    }

    #[test]
    fn reset_invalidates_pending_timers() {
        let mut session = session(Mode::Automatic, sample_queue());

        let effects = session.play();
        let reset_effects = session.reset();
        assert_eq!(reset_effects, vec![SessionEffect::StopNarration]);
        assert_eq!(session.state(), ControllerState::Idle);
        assert_eq!(session.current_index(), 0);

        let stale = fire_pending(&mut session, &effects);
        assert!(stale.is_empty(), "a timer from before the reset is a no-op");
        assert_eq!(session.state(), ControllerState::Idle);
        assert!(!session.show_primary() && !session.show_secondary());
    }

    #[test]
    fn rebuild_resets_even_while_playing() {
        let mut session = session(Mode::Automatic, sample_queue());

        let effects = session.play();
        let rebuild_effects =
            session.rebuild(vec![item(9, "sun", "matahari")], Direction::EnglishFirst);
        assert_eq!(rebuild_effects, vec![SessionEffect::StopNarration]);
        assert_eq!(session.state(), ControllerState::Idle);
        assert_eq!(session.len(), 1);

        let stale = fire_pending(&mut session, &effects);
        assert!(stale.is_empty());
    }

    #[test]
    fn mode_switch_clears_state_before_new_mode_begins() {
        let mut session = session(Mode::Manual, sample_queue());
        session.tap();
        session.tap();
        session.tap();
        assert_eq!(session.current_index(), 1);

        session.set_mode(Mode::Automatic);
        assert_eq!(session.state(), ControllerState::Idle);
        assert_eq!(session.current_index(), 0);
        assert!(!session.show_primary() && !session.show_secondary());

        let effects = session.play();
        assert_eq!(spoken(&effects), vec![("water", Language::English)]);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn set_mode_to_current_mode_changes_nothing() {
        let mut session = session(Mode::Manual, sample_queue());
        session.tap();
        assert!(session.set_mode(Mode::Manual).is_empty());
        assert_eq!(session.state(), ControllerState::AwaitingInput);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn play_on_empty_queue_is_a_noop() {
        let mut session = session(Mode::Automatic, Vec::new());
        assert!(session.play().is_empty());
        assert!(!session.is_playing());
    }

    #[test]
    fn toggle_play_alternates_between_playing_and_paused() {
        let mut session = session(Mode::Automatic, sample_queue());
        session.toggle_play();
        assert!(session.is_playing());
        session.toggle_play();
        assert_eq!(session.state(), ControllerState::Paused);
        session.toggle_play();
        assert!(session.is_playing());
    }

    #[test]
    fn direction_controls_narration_languages() {
        let mut session =
            PlaybackSession::new(Mode::Manual, Direction::IndonesianFirst, Timing::default());
        session.rebuild(
            vec![item(1, "air", "water")],
            Direction::IndonesianFirst,
        );

        let effects = session.tap();
        assert_eq!(spoken(&effects), vec![("air", Language::Indonesian)]);
        let effects = session.tap();
        assert_eq!(spoken(&effects), vec![("water", Language::English)]);
    }
}
