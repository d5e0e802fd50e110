use super::super::state::App;
use super::Effect;
use hafalan_core::{SessionEffect, TimerKind, TimerToken};
use tracing::info;

impl App {
    pub(super) fn handle_screen_tapped(&mut self, effects: &mut Vec<Effect>) {
        let session_effects = self.session.tap();
        self.push_session_effects(session_effects, effects);
    }

    pub(super) fn handle_toggle_play_pause(&mut self, effects: &mut Vec<Effect>) {
        let was_playing = self.session.is_playing();
        let session_effects = self.session.toggle_play();
        if self.session.is_playing() != was_playing {
            info!(playing = self.session.is_playing(), "Toggled automatic playback");
        }
        self.push_session_effects(session_effects, effects);
    }

    pub(super) fn handle_reset_playback(&mut self, effects: &mut Vec<Effect>) {
        info!("Resetting playback");
        let session_effects = self.session.reset();
        self.push_session_effects(session_effects, effects);
    }

    pub(super) fn handle_timer_elapsed(
        &mut self,
        token: TimerToken,
        kind: TimerKind,
        effects: &mut Vec<Effect>,
    ) {
        let session_effects = self.session.timer_fired(token, kind);
        self.push_session_effects(session_effects, effects);
    }

    /// Rebuild the queue after a range/shuffle/direction change and install
    /// it, resetting the session.
    pub(super) fn rebuild_queue(&mut self, effects: &mut Vec<Effect>) {
        let queue = self.build_queue();
        info!(
            day_from = self.config.day_from,
            day_to = self.config.day_to,
            shuffle = self.config.shuffle,
            words = queue.len(),
            "Rebuilt playback queue"
        );
        let session_effects = self.session.rebuild(queue, self.config.direction);
        self.push_session_effects(session_effects, effects);
    }

    pub(super) fn push_session_effects(
        &mut self,
        session_effects: Vec<SessionEffect>,
        effects: &mut Vec<Effect>,
    ) {
        for effect in session_effects {
            effects.push(match effect {
                SessionEffect::Speak { text, language } => Effect::Speak { text, language },
                SessionEffect::StopNarration => Effect::StopNarration,
                SessionEffect::Schedule { token, kind, delay } => {
                    Effect::ScheduleTimer { token, kind, delay }
                }
            });
        }
    }
}
