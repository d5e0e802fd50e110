use hafalan_core::{Direction, Mode, Timing};
use serde::Deserialize;
use std::time::Duration;

/// Reveal cadence limits. The advance delay is always at least the reveal
/// delay so the translation is shown before the queue moves on.
pub(crate) const MIN_DELAY_SECS: f32 = 0.5;
pub(crate) const MAX_DELAY_SECS: f32 = 60.0;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_theme")]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub window_pos_x: Option<f32>,
    #[serde(default)]
    pub window_pos_y: Option<f32>,
    #[serde(default = "crate::config::defaults::default_primary_font_size")]
    pub primary_font_size: u32,
    #[serde(default = "crate::config::defaults::default_secondary_font_size")]
    pub secondary_font_size: u32,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub shuffle: bool,
    #[serde(default = "crate::config::defaults::default_day_from")]
    pub day_from: u32,
    #[serde(default = "crate::config::defaults::default_day_to")]
    pub day_to: u32,
    #[serde(default = "crate::config::defaults::default_secondary_reveal_secs")]
    pub secondary_reveal_secs: f32,
    #[serde(default = "crate::config::defaults::default_item_advance_secs")]
    pub item_advance_secs: f32,
    #[serde(default = "crate::config::defaults::default_voice_english")]
    pub voice_english: String,
    #[serde(default = "crate::config::defaults::default_voice_indonesian")]
    pub voice_indonesian: String,
    #[serde(default = "crate::config::defaults::default_espeak_data_path")]
    pub espeak_data_path: String,
    #[serde(default = "crate::config::defaults::default_narration_speed")]
    pub narration_speed: f32,
    #[serde(default = "crate::config::defaults::default_narration_volume")]
    pub narration_volume: f32,
    #[serde(default = "crate::config::defaults::default_narration_cache_dir")]
    pub narration_cache_dir: String,
    #[serde(default = "crate::config::defaults::default_show_settings")]
    pub show_settings: bool,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_tap")]
    pub key_tap: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_play_pause")]
    pub key_toggle_play_pause: String,
    #[serde(default = "crate::config::defaults::default_key_reset")]
    pub key_reset: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_focus")]
    pub key_toggle_focus: String,
    #[serde(default = "crate::config::defaults::default_key_safe_quit")]
    pub key_safe_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: crate::config::defaults::default_theme(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            window_pos_x: None,
            window_pos_y: None,
            primary_font_size: crate::config::defaults::default_primary_font_size(),
            secondary_font_size: crate::config::defaults::default_secondary_font_size(),
            direction: Direction::default(),
            mode: Mode::default(),
            shuffle: false,
            day_from: crate::config::defaults::default_day_from(),
            day_to: crate::config::defaults::default_day_to(),
            secondary_reveal_secs: crate::config::defaults::default_secondary_reveal_secs(),
            item_advance_secs: crate::config::defaults::default_item_advance_secs(),
            voice_english: crate::config::defaults::default_voice_english(),
            voice_indonesian: crate::config::defaults::default_voice_indonesian(),
            espeak_data_path: crate::config::defaults::default_espeak_data_path(),
            narration_speed: crate::config::defaults::default_narration_speed(),
            narration_volume: crate::config::defaults::default_narration_volume(),
            narration_cache_dir: crate::config::defaults::default_narration_cache_dir(),
            show_settings: crate::config::defaults::default_show_settings(),
            log_level: crate::config::defaults::default_log_level(),
            key_tap: crate::config::defaults::default_key_tap(),
            key_toggle_play_pause: crate::config::defaults::default_key_toggle_play_pause(),
            key_reset: crate::config::defaults::default_key_reset(),
            key_toggle_focus: crate::config::defaults::default_key_toggle_focus(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
        }
    }
}

impl AppConfig {
    /// Clamped reveal cadence for the playback engine.
    pub fn playback_timing(&self) -> Timing {
        let secondary = self.secondary_reveal_secs.clamp(MIN_DELAY_SECS, MAX_DELAY_SECS);
        let advance = self.item_advance_secs.clamp(secondary, MAX_DELAY_SECS);
        Timing {
            secondary_delay: Duration::from_secs_f32(secondary),
            advance_delay: Duration::from_secs_f32(advance),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Night
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playback_timing_keeps_advance_after_reveal() {
        let config = AppConfig {
            secondary_reveal_secs: 4.0,
            item_advance_secs: 1.0,
            ..AppConfig::default()
        };
        let timing = config.playback_timing();
        assert_eq!(timing.secondary_delay, Duration::from_secs_f32(4.0));
        assert_eq!(timing.advance_delay, Duration::from_secs_f32(4.0));
    }

    #[test]
    fn default_timing_matches_reference_cadence() {
        let timing = AppConfig::default().playback_timing();
        assert_eq!(timing.secondary_delay, Duration::from_secs_f32(2.5));
        assert_eq!(timing.advance_delay, Duration::from_secs_f32(5.5));
    }
}
