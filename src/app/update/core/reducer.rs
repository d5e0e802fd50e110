use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::ScreenTapped => self.handle_screen_tapped(&mut effects),
            Message::TogglePlayPause => self.handle_toggle_play_pause(&mut effects),
            Message::ResetPlayback => self.handle_reset_playback(&mut effects),
            Message::TimerElapsed { token, kind } => {
                self.handle_timer_elapsed(token, kind, &mut effects)
            }
            Message::ModeSelected(mode) => self.handle_mode_selected(mode, &mut effects),
            Message::DirectionSelected(direction) => {
                self.handle_direction_selected(direction, &mut effects)
            }
            Message::ShuffleToggled(shuffle) => self.handle_shuffle_toggled(shuffle, &mut effects),
            Message::DayFromChanged(raw) => self.handle_day_from_changed(raw, &mut effects),
            Message::DayToChanged(raw) => self.handle_day_to_changed(raw, &mut effects),
            Message::ToggleFocusMode => self.handle_toggle_focus_mode(),
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::ToggleSettings => self.handle_toggle_settings(&mut effects),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height);
            }
            Message::WindowMoved { x, y } => self.handle_window_moved(x, y),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::PollSystemSignals => {
                if crate::take_sigint_requested() {
                    effects.push(Effect::QuitSafely);
                }
            }
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        // The wake coordinator tracks every mode/playing change; syncing is
        // idempotent, so doing it after each message keeps it simple.
        effects.push(Effect::SyncWakeLock);

        effects
    }
}
