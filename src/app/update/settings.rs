use super::super::state::App;
use super::Effect;
use hafalan_core::{Direction, Mode};
use tracing::{debug, info};

impl App {
    pub(super) fn handle_mode_selected(&mut self, mode: Mode, effects: &mut Vec<Effect>) {
        if self.config.mode == mode {
            return;
        }
        info!(%mode, "Switching drill mode");
        self.config.mode = mode;
        let session_effects = self.session.set_mode(mode);
        self.push_session_effects(session_effects, effects);
        effects.push(Effect::SaveConfig);
    }

    pub(super) fn handle_direction_selected(
        &mut self,
        direction: Direction,
        effects: &mut Vec<Effect>,
    ) {
        if self.config.direction == direction {
            return;
        }
        info!(%direction, "Switching translation direction");
        self.config.direction = direction;
        self.rebuild_queue(effects);
        effects.push(Effect::SaveConfig);
    }

    pub(super) fn handle_shuffle_toggled(&mut self, shuffle: bool, effects: &mut Vec<Effect>) {
        if self.config.shuffle == shuffle {
            return;
        }
        info!(shuffle, "Toggled shuffle");
        self.config.shuffle = shuffle;
        self.rebuild_queue(effects);
        effects.push(Effect::SaveConfig);
    }

    pub(super) fn handle_day_from_changed(&mut self, raw: String, effects: &mut Vec<Effect>) {
        self.day_from_input = raw;
        if let Some(day) = Self::parse_day(&self.day_from_input) {
            if day != self.config.day_from {
                self.config.day_from = day;
                self.rebuild_queue(effects);
                effects.push(Effect::SaveConfig);
            }
        }
    }

    pub(super) fn handle_day_to_changed(&mut self, raw: String, effects: &mut Vec<Effect>) {
        self.day_to_input = raw;
        if let Some(day) = Self::parse_day(&self.day_to_input) {
            if day != self.config.day_to {
                self.config.day_to = day;
                self.rebuild_queue(effects);
                effects.push(Effect::SaveConfig);
            }
        }
    }

    pub(super) fn handle_toggle_focus_mode(&mut self) {
        self.focus_mode = !self.focus_mode;
        debug!(focus = self.focus_mode, "Toggled focus mode");
    }

    pub(super) fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        self.config.theme = match self.config.theme {
            crate::config::ThemeMode::Day => crate::config::ThemeMode::Night,
            crate::config::ThemeMode::Night => crate::config::ThemeMode::Day,
        };
        effects.push(Effect::SaveConfig);
    }

    pub(super) fn handle_toggle_settings(&mut self, effects: &mut Vec<Effect>) {
        self.config.show_settings = !self.config.show_settings;
        effects.push(Effect::SaveConfig);
    }

    /// Window geometry is recorded as it changes and written out on safe
    /// quit, so resize streams do not hammer the config file.
    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        if width.is_finite() && height.is_finite() {
            self.config.window_width = width;
            self.config.window_height = height;
        }
    }

    pub(super) fn handle_window_moved(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.config.window_pos_x = Some(x);
            self.config.window_pos_y = Some(y);
        }
    }
}
